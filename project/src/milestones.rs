//! Milestone registry: definitions, dependency checks and approval bookkeeping.
//!
//! A milestone moves `Pending -> Completed` exactly once, when its approved set
//! covers every required approver. Paying the recipient is left to the
//! contract entry point, which owns the pool.

use shared::errors::Error;
use shared::types::{Amount, Milestone, MilestoneStatus, Timestamp};
use soroban_sdk::{Address, Env, String, Vec};

use crate::validation::{validate_approver, validate_approver_set, validate_dependencies};

/// Build the next milestone of the registry, `count` being the number of
/// milestones that already exist.
pub fn new_milestone(
    env: &Env,
    count: u32,
    dependencies: Vec<u32>,
    description: String,
    value: Amount,
    recipient: Address,
    approvers: Vec<Address>,
) -> Result<Milestone, Error> {
    if value <= 0 {
        return Err(Error::InvInput);
    }
    validate_dependencies(&dependencies, count)?;
    validate_approver_set(&approvers)?;

    let number = count.checked_add(1).ok_or(Error::InvInput)?;

    Ok(Milestone {
        number,
        description,
        value,
        recipient,
        approvers,
        dependencies,
        approved_by: Vec::new(env),
        status: MilestoneStatus::Pending,
        created_at: env.ledger().timestamp(),
        completed_at: None,
    })
}

pub fn has_approved(milestone: &Milestone, approver: &Address) -> bool {
    milestone.approved_by.iter().any(|a| a == *approver)
}

/// True once every required approver is in the approved set
pub fn is_fully_approved(milestone: &Milestone) -> bool {
    milestone
        .approvers
        .iter()
        .all(|required| has_approved(milestone, &required))
}

/// Record one approval. Returns `true` when this approval completed the
/// milestone.
pub fn record_approval(
    milestone: &mut Milestone,
    approver: &Address,
    now: Timestamp,
) -> Result<bool, Error> {
    if milestone.status == MilestoneStatus::Completed {
        return Err(Error::MileDone);
    }
    if has_approved(milestone, approver) {
        return Err(Error::AlreadyAppr);
    }
    validate_approver(milestone, approver)?;

    milestone.approved_by.push_back(approver.clone());

    if is_fully_approved(milestone) {
        milestone.status = MilestoneStatus::Completed;
        milestone.completed_at = Some(now);
        return Ok(true);
    }
    Ok(false)
}
