//! Funding pool bookkeeping.
//!
//! These helpers only mutate the in-memory [`FundingPool`]; the contract entry
//! points load the pool, run every check here, and persist it afterwards.

use shared::errors::Error;
use shared::types::{Amount, FundingPool};
use soroban_sdk::Address;

/// Result of an accepted contribution
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Accepted {
    /// Amount credited to the pool, capped at the remaining headroom
    pub amount: Amount,
    /// The contribution pushed the pool to its goal and closed it
    pub goal_reached: bool,
}

pub fn new_pool(manager: Address, goal_amount: Amount, minimum_contribution: Amount) -> Result<FundingPool, Error> {
    if minimum_contribution <= 0 || goal_amount < minimum_contribution {
        return Err(Error::InvInput);
    }
    Ok(FundingPool {
        manager,
        goal_amount,
        minimum_contribution,
        funded_amount: 0,
        released_amount: 0,
        open: true,
    })
}

pub fn is_goal_reached(pool: &FundingPool) -> bool {
    pool.funded_amount >= pool.goal_amount
}

/// Value still held by the pool and available for milestone payouts
pub fn available(pool: &FundingPool) -> Amount {
    pool.funded_amount - pool.released_amount
}

/// Credit a contribution. Anything beyond the goal is not accepted; reaching
/// the goal closes the pool.
pub fn contribute(pool: &mut FundingPool, amount: Amount) -> Result<Accepted, Error> {
    if !pool.open {
        return Err(Error::PoolClosed);
    }
    if amount < pool.minimum_contribution {
        return Err(Error::BelowMin);
    }

    let headroom = pool.goal_amount - pool.funded_amount;
    let accepted = amount.min(headroom);
    pool.funded_amount = pool
        .funded_amount
        .checked_add(accepted)
        .ok_or(Error::InvInput)?;

    let goal_reached = is_goal_reached(pool);
    if goal_reached {
        pool.open = false;
    }

    Ok(Accepted {
        amount: accepted,
        goal_reached,
    })
}

pub fn close(pool: &mut FundingPool) -> Result<(), Error> {
    if !pool.open {
        return Err(Error::AlreadyClosed);
    }
    pool.open = false;
    Ok(())
}

/// Debit a milestone payout from the pool balance
pub fn release(pool: &mut FundingPool, amount: Amount) -> Result<(), Error> {
    let new_released = pool
        .released_amount
        .checked_add(amount)
        .ok_or(Error::InvInput)?;

    if new_released > pool.funded_amount {
        return Err(Error::InsufFunds);
    }

    pool.released_amount = new_released;
    Ok(())
}
