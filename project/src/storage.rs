use shared::errors::Error;
use shared::types::{Amount, Contribution, FundingPool, Milestone, Residual};
use soroban_sdk::{contracttype, Address, Env, Vec};

/// Storage keys for the project contract
#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    /// The single funding pool (instance storage)
    Pool,
    /// Number of accepted contributions
    ContributionCount,
    /// Contribution by sequential index
    Contribution(u64),
    /// Running total invested by a backer
    Backed(Address),
    /// Number of milestones created so far
    MilestoneCount,
    /// Milestone by number
    Milestone(u32),
    /// Running total paid out to a recipient
    Payout(Address),
    /// Number of residuals minted so far
    ResidualCount,
    /// Residual by id
    Residual(u64),
    /// Id of the most recent residual minted to a holder
    LatestResidual(Address),
    /// Number of residuals minted to a holder
    HolderResidualCount(Address),
    /// Residual id by holder and per-holder position, oldest first
    HolderResidual(Address, u32),
}

// ==================== Funding Pool ====================

/// Check if the pool has been initialized
pub fn has_pool(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Pool)
}

/// Retrieve the funding pool
pub fn get_pool(env: &Env) -> Result<FundingPool, Error> {
    env.storage()
        .instance()
        .get(&DataKey::Pool)
        .ok_or(Error::NotInit)
}

/// Store the funding pool
pub fn set_pool(env: &Env, pool: &FundingPool) {
    env.storage().instance().set(&DataKey::Pool, pool);
}

pub fn get_contribution_count(env: &Env) -> u64 {
    env.storage()
        .persistent()
        .get(&DataKey::ContributionCount)
        .unwrap_or(0)
}

/// Append a contribution and bump the backer's running total
pub fn push_contribution(env: &Env, contribution: &Contribution) {
    env.storage()
        .persistent()
        .set(&DataKey::Contribution(contribution.index), contribution);
    env.storage()
        .persistent()
        .set(&DataKey::ContributionCount, &(contribution.index + 1));

    let backed = get_backed(env, &contribution.backer) + contribution.amount;
    env.storage()
        .persistent()
        .set(&DataKey::Backed(contribution.backer.clone()), &backed);
}

pub fn get_contribution(env: &Env, index: u64) -> Result<Contribution, Error> {
    env.storage()
        .persistent()
        .get(&DataKey::Contribution(index))
        .ok_or(Error::InvInput)
}

/// Total invested by a backer, zero if they never invested
pub fn get_backed(env: &Env, backer: &Address) -> Amount {
    env.storage()
        .persistent()
        .get(&DataKey::Backed(backer.clone()))
        .unwrap_or(0)
}

// ==================== Milestone Registry ====================

pub fn get_milestone_count(env: &Env) -> u32 {
    env.storage()
        .persistent()
        .get(&DataKey::MilestoneCount)
        .unwrap_or(0)
}

pub fn set_milestone_count(env: &Env, count: u32) {
    env.storage()
        .persistent()
        .set(&DataKey::MilestoneCount, &count);
}

/// Retrieve milestone information
pub fn get_milestone(env: &Env, number: u32) -> Result<Milestone, Error> {
    env.storage()
        .persistent()
        .get(&DataKey::Milestone(number))
        .ok_or(Error::MileNF)
}

/// Store milestone information
pub fn set_milestone(env: &Env, milestone: &Milestone) {
    env.storage()
        .persistent()
        .set(&DataKey::Milestone(milestone.number), milestone);
}

pub fn get_payout(env: &Env, recipient: &Address) -> Amount {
    env.storage()
        .persistent()
        .get(&DataKey::Payout(recipient.clone()))
        .unwrap_or(0)
}

pub fn set_payout(env: &Env, recipient: &Address, amount: Amount) {
    env.storage()
        .persistent()
        .set(&DataKey::Payout(recipient.clone()), &amount);
}

// ==================== Residual Ledger ====================

pub fn get_residual_count(env: &Env) -> u64 {
    env.storage()
        .persistent()
        .get(&DataKey::ResidualCount)
        .unwrap_or(0)
}

/// Store a freshly minted residual and index it under its holder
pub fn push_residual(env: &Env, residual: &Residual) {
    let store = env.storage().persistent();
    store.set(&DataKey::Residual(residual.residual_id), residual);
    store.set(&DataKey::ResidualCount, &(residual.residual_id + 1));

    let holder = residual.holder.clone();
    let position = get_holder_residual_count(env, &holder);
    store.set(
        &DataKey::HolderResidual(holder.clone(), position),
        &residual.residual_id,
    );
    store.set(&DataKey::HolderResidualCount(holder.clone()), &(position + 1));
    store.set(&DataKey::LatestResidual(holder), &residual.residual_id);
}

/// Retrieve a residual by id
pub fn get_residual(env: &Env, residual_id: u64) -> Result<Residual, Error> {
    env.storage()
        .persistent()
        .get(&DataKey::Residual(residual_id))
        .ok_or(Error::ResidualNF)
}

/// Id of the most recent residual minted to a holder
pub fn get_latest_residual(env: &Env, holder: &Address) -> Option<u64> {
    env.storage()
        .persistent()
        .get(&DataKey::LatestResidual(holder.clone()))
}

pub fn get_holder_residual_count(env: &Env, holder: &Address) -> u32 {
    env.storage()
        .persistent()
        .get(&DataKey::HolderResidualCount(holder.clone()))
        .unwrap_or(0)
}

/// Every residual id minted to a holder, oldest first
pub fn get_holder_residuals(env: &Env, holder: &Address) -> Vec<u64> {
    let store = env.storage().persistent();
    let mut ids = Vec::new(env);
    for position in 0..get_holder_residual_count(env, holder) {
        if let Some(id) = store.get(&DataKey::HolderResidual(holder.clone(), position)) {
            ids.push_back(id);
        }
    }
    ids
}
