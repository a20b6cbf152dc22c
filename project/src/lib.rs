#![no_std]

use shared::{
    errors::Error,
    events::*,
    types::{Amount, Contribution, Milestone, Residual, Timestamp},
};
use soroban_sdk::{contract, contractimpl, contractmeta, Address, Env, String, Vec};

mod milestones;
mod pool;
mod residuals;
mod storage;
mod validation;

#[cfg(test)]
mod test_properties;
#[cfg(test)]
mod test_residuals;

use storage::*;
use validation::validate_manager;

contractmeta!(
    key = "name",
    val = "Milestone Project Fund"
);

#[contract]
pub struct ProjectContract;

#[contractimpl]
impl ProjectContract {
    /// Initialize the project with its manager and funding terms
    ///
    /// # Arguments
    /// * `manager` - Address allowed to close funding, create milestones and mint residuals
    /// * `goal_fund_amount` - Amount at which funding closes automatically
    /// * `minimum_contribution` - Smallest accepted investment
    pub fn initialize(
        env: Env,
        manager: Address,
        goal_fund_amount: Amount,
        minimum_contribution: Amount,
    ) -> Result<(), Error> {
        if has_pool(&env) {
            return Err(Error::AlreadyInit);
        }
        manager.require_auth();

        let pool = pool::new_pool(manager.clone(), goal_fund_amount, minimum_contribution)?;
        set_pool(&env, &pool);

        emit_pool_initialized(&env, &manager, goal_fund_amount, minimum_contribution);

        Ok(())
    }

    // ==================== Funding Pool ====================

    /// Invest into the pool
    ///
    /// # Arguments
    /// * `backer` - Investor address
    /// * `amount` - Offered amount; only the part up to the goal is accepted
    ///
    /// # Returns
    /// The accepted amount
    ///
    /// # Events
    /// * `INVEST_RECEIPT` - Always, with the accepted amount
    /// * `GOAL_REACHED` - When this investment reaches the goal and closes the pool
    pub fn invest(env: Env, backer: Address, amount: Amount) -> Result<Amount, Error> {
        backer.require_auth();

        let mut pool = get_pool(&env)?;
        let accepted = pool::contribute(&mut pool, amount)?;

        let contribution = Contribution {
            index: get_contribution_count(&env),
            backer: backer.clone(),
            amount: accepted.amount,
            created_at: env.ledger().timestamp(),
        };
        push_contribution(&env, &contribution);
        set_pool(&env, &pool);

        emit_invest_receipt(&env, &backer, accepted.amount);
        if accepted.goal_reached {
            emit_goal_reached(&env, &pool.manager, pool.goal_amount, pool.funded_amount);
        }

        Ok(accepted.amount)
    }

    /// Close funding before the goal is reached. Manager only.
    pub fn close_invest(env: Env, caller: Address) -> Result<(), Error> {
        let mut pool = get_pool(&env)?;
        validate_manager(&pool, &caller)?;
        caller.require_auth();

        pool::close(&mut pool)?;
        set_pool(&env, &pool);

        emit_invest_closed(&env, &pool.manager, pool.goal_amount, pool.funded_amount);

        Ok(())
    }

    pub fn manager(env: Env) -> Result<Address, Error> {
        Ok(get_pool(&env)?.manager)
    }

    pub fn goal_fund_amount(env: Env) -> Result<Amount, Error> {
        Ok(get_pool(&env)?.goal_amount)
    }

    pub fn minimum_contribution(env: Env) -> Result<Amount, Error> {
        Ok(get_pool(&env)?.minimum_contribution)
    }

    pub fn goal_fund_reached(env: Env) -> Result<bool, Error> {
        Ok(pool::is_goal_reached(&get_pool(&env)?))
    }

    pub fn funded_amount(env: Env) -> Result<Amount, Error> {
        Ok(get_pool(&env)?.funded_amount)
    }

    pub fn released_amount(env: Env) -> Result<Amount, Error> {
        Ok(get_pool(&env)?.released_amount)
    }

    /// Pool balance not yet paid out to milestone recipients
    pub fn available_balance(env: Env) -> Result<Amount, Error> {
        Ok(pool::available(&get_pool(&env)?))
    }

    pub fn is_open(env: Env) -> Result<bool, Error> {
        Ok(get_pool(&env)?.open)
    }

    /// Total invested by `backer` across all their contributions
    pub fn contribution_of(env: Env, backer: Address) -> Amount {
        get_backed(&env, &backer)
    }

    pub fn get_contribution(env: Env, index: u64) -> Result<Contribution, Error> {
        storage::get_contribution(&env, index)
    }

    pub fn contribution_count(env: Env) -> u64 {
        get_contribution_count(&env)
    }

    // ==================== Milestones ====================

    /// Create a milestone. Manager only, and only once funding is closed.
    ///
    /// # Arguments
    /// * `caller` - Must be the manager
    /// * `dependencies` - Numbers of existing milestones this one depends on
    /// * `description` - Human readable description
    /// * `value` - Amount paid to `recipient` on completion
    /// * `recipient` - Receiver of the milestone value
    /// * `approvers` - Every address that must approve before payout
    ///
    /// # Returns
    /// The milestone number, starting at 1
    pub fn create_mile(
        env: Env,
        caller: Address,
        dependencies: Vec<u32>,
        description: String,
        value: Amount,
        recipient: Address,
        approvers: Vec<Address>,
    ) -> Result<u32, Error> {
        let pool = get_pool(&env)?;
        validate_manager(&pool, &caller)?;
        caller.require_auth();

        if pool.open {
            return Err(Error::PoolOpen);
        }

        let milestone = milestones::new_milestone(
            &env,
            get_milestone_count(&env),
            dependencies,
            description,
            value,
            recipient,
            approvers,
        )?;

        set_milestone(&env, &milestone);
        set_milestone_count(&env, milestone.number);

        emit_milestone_created(
            &env,
            MilestoneCreatedEvent {
                number: milestone.number,
                dependencies: milestone.dependencies,
                description: milestone.description,
                value: milestone.value,
                recipient: milestone.recipient,
                approvers: milestone.approvers,
            },
        );

        Ok(milestone.number)
    }

    /// Approve a milestone as one of its required approvers
    ///
    /// The approval that completes the set pays the milestone value out of the
    /// pool balance to the recipient, in the same call.
    ///
    /// # Returns
    /// `true` if this approval completed the milestone
    ///
    /// # Errors
    /// * `MileNF` - No milestone with this number
    /// * `MileDone` - Milestone already completed
    /// * `AlreadyAppr` - Approver already approved this milestone
    /// * `NotApprover` - Approver is not in the required set
    /// * `InsufFunds` - Pool balance cannot cover the payout
    pub fn approve(env: Env, approver: Address, number: u32) -> Result<bool, Error> {
        approver.require_auth();

        let mut pool = get_pool(&env)?;
        let mut milestone = storage::get_milestone(&env, number)?;

        let completed =
            milestones::record_approval(&mut milestone, &approver, env.ledger().timestamp())?;
        if completed {
            pool::release(&mut pool, milestone.value)?;
        }

        set_milestone(&env, &milestone);
        emit_milestone_approved(&env, number, &approver);

        if completed {
            set_pool(&env, &pool);
            let paid = get_payout(&env, &milestone.recipient) + milestone.value;
            set_payout(&env, &milestone.recipient, paid);

            emit_milestone_paid(&env, number, &milestone.recipient, milestone.value);
        }

        Ok(completed)
    }

    pub fn get_milestone(env: Env, number: u32) -> Result<Milestone, Error> {
        storage::get_milestone(&env, number)
    }

    pub fn milestone_count(env: Env) -> u32 {
        get_milestone_count(&env)
    }

    /// Addresses that have approved the milestone so far
    pub fn get_approvals(env: Env, number: u32) -> Result<Vec<Address>, Error> {
        Ok(storage::get_milestone(&env, number)?.approved_by)
    }

    /// Total received by `recipient` from completed milestones
    pub fn payout_of(env: Env, recipient: Address) -> Amount {
        get_payout(&env, &recipient)
    }

    // ==================== Residuals ====================

    /// Mint a residual entitlement. Manager only.
    ///
    /// # Arguments
    /// * `minter` - Must be the manager
    /// * `holder` - Owner of the new residual
    /// * `holder_role` - Label of the holder, e.g. "backer" or "actor"
    /// * `residual_type` - 0 = actor, 1 = backer, 2 = streaming
    /// * `start` / `expiry` - Validity window
    /// * `weight` / `decimals` / `media` - Optional weighting metadata
    ///
    /// # Returns
    /// The residual id, starting at 0
    #[allow(clippy::too_many_arguments)]
    pub fn mint_residual(
        env: Env,
        minter: Address,
        holder: Address,
        holder_role: String,
        residual_type: u32,
        start: Timestamp,
        expiry: Timestamp,
        weight: Option<u64>,
        decimals: Option<u32>,
        media: Option<String>,
    ) -> Result<u64, Error> {
        let pool = get_pool(&env)?;
        validate_manager(&pool, &minter)?;
        minter.require_auth();

        let residual = residuals::mint(
            &env,
            holder,
            holder_role,
            residual_type,
            start,
            expiry,
            weight,
            decimals,
            media,
        )?;

        Ok(residual.residual_id)
    }

    /// Latest residual id of `holder`, or `NO_RESIDUAL` if they hold none
    pub fn balance_of(env: Env, holder: Address) -> u64 {
        residuals::latest_of(&env, &holder)
    }

    pub fn residuals_of(env: Env, holder: Address) -> Vec<u64> {
        residuals::all_of(&env, &holder)
    }

    pub fn get_residual(env: Env, index: u64) -> Result<Residual, Error> {
        storage::get_residual(&env, index)
    }

    pub fn residual_count(env: Env) -> u64 {
        get_residual_count(&env)
    }
}
