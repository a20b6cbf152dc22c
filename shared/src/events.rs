use soroban_sdk::{contracttype, symbol_short, Address, Env, String, Symbol, Vec};

use crate::types::{Amount, Residual, Timestamp};

// Funding pool events
pub const POOL_INITIALIZED: Symbol = symbol_short!("pool_init");
pub const INVEST_RECEIPT: Symbol = symbol_short!("invest");
pub const GOAL_REACHED: Symbol = symbol_short!("goal_rch");
pub const INVEST_CLOSED: Symbol = symbol_short!("inv_close");

// Milestone events
pub const MILESTONE_CREATED: Symbol = symbol_short!("mile_new");
pub const MILESTONE_APPROVED: Symbol = symbol_short!("mile_appr");
pub const MILESTONE_PAID: Symbol = symbol_short!("mile_paid");

// Residual events
pub const RESIDUAL_MINTED: Symbol = symbol_short!("resid_new");

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PoolInitializedEvent {
    pub manager: Address,
    pub goal_amount: Amount,
    pub minimum_contribution: Amount,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InvestReceiptEvent {
    pub backer: Address,
    pub amount: Amount,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GoalReachedEvent {
    pub manager: Address,
    pub goal_amount: Amount,
    pub funded_amount: Amount,
    pub reached: bool,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InvestClosedEvent {
    pub manager: Address,
    pub goal_amount: Amount,
    pub funded_amount: Amount,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MilestoneCreatedEvent {
    pub number: u32,
    pub dependencies: Vec<u32>,
    pub description: String,
    pub value: Amount,
    pub recipient: Address,
    pub approvers: Vec<Address>,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MilestoneApprovedEvent {
    pub number: u32,
    pub approver: Address,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MilestonePaidEvent {
    pub number: u32,
    pub recipient: Address,
    pub amount: Amount,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ResidualMintedEvent {
    pub residual_id: u64,
    /// Wire code of the residual type
    pub residual_type: u32,
    pub holder: Address,
    pub holder_role: String,
    pub start: Timestamp,
    pub expiry: Timestamp,
    pub weight: Option<u64>,
    pub decimals: Option<u32>,
    pub media: Option<String>,
}

pub fn emit_pool_initialized(
    env: &Env,
    manager: &Address,
    goal_amount: Amount,
    minimum_contribution: Amount,
) {
    env.events().publish(
        (POOL_INITIALIZED,),
        PoolInitializedEvent {
            manager: manager.clone(),
            goal_amount,
            minimum_contribution,
        },
    );
}

pub fn emit_invest_receipt(env: &Env, backer: &Address, amount: Amount) {
    env.events().publish(
        (INVEST_RECEIPT,),
        InvestReceiptEvent {
            backer: backer.clone(),
            amount,
        },
    );
}

pub fn emit_goal_reached(env: &Env, manager: &Address, goal_amount: Amount, funded_amount: Amount) {
    env.events().publish(
        (GOAL_REACHED,),
        GoalReachedEvent {
            manager: manager.clone(),
            goal_amount,
            funded_amount,
            reached: true,
        },
    );
}

pub fn emit_invest_closed(env: &Env, manager: &Address, goal_amount: Amount, funded_amount: Amount) {
    env.events().publish(
        (INVEST_CLOSED,),
        InvestClosedEvent {
            manager: manager.clone(),
            goal_amount,
            funded_amount,
        },
    );
}

pub fn emit_milestone_created(env: &Env, event: MilestoneCreatedEvent) {
    env.events()
        .publish((MILESTONE_CREATED, event.number), event);
}

pub fn emit_milestone_approved(env: &Env, number: u32, approver: &Address) {
    env.events().publish(
        (MILESTONE_APPROVED, number),
        MilestoneApprovedEvent {
            number,
            approver: approver.clone(),
        },
    );
}

pub fn emit_milestone_paid(env: &Env, number: u32, recipient: &Address, amount: Amount) {
    env.events().publish(
        (MILESTONE_PAID, number),
        MilestonePaidEvent {
            number,
            recipient: recipient.clone(),
            amount,
        },
    );
}

pub fn emit_residual_minted(env: &Env, residual: &Residual) {
    env.events().publish(
        (RESIDUAL_MINTED, residual.residual_id),
        ResidualMintedEvent {
            residual_id: residual.residual_id,
            residual_type: residual.residual_type.code(),
            holder: residual.holder.clone(),
            holder_role: residual.holder_role.clone(),
            start: residual.start,
            expiry: residual.expiry,
            weight: residual.weight,
            decimals: residual.decimals,
            media: residual.media.clone(),
        },
    );
}
