use shared::errors::Error;
use shared::types::{FundingPool, Milestone, Timestamp};
use shared::{FIRST_MILESTONE, MAX_APPROVERS, MAX_DEPENDENCIES};
use soroban_sdk::{Address, Vec};

/// Validate that an address is the pool manager
pub fn validate_manager(pool: &FundingPool, caller: &Address) -> Result<(), Error> {
    if pool.manager == *caller {
        Ok(())
    } else {
        Err(Error::NotManager)
    }
}

/// Validate that an address is listed as a required approver of the milestone
pub fn validate_approver(milestone: &Milestone, approver: &Address) -> Result<(), Error> {
    if milestone.approvers.iter().any(|a| a == *approver) {
        Ok(())
    } else {
        Err(Error::NotApprover)
    }
}

/// Every dependency must name a milestone that already exists. New milestones
/// always take the next number, so this also keeps dependencies strictly earlier.
pub fn validate_dependencies(dependencies: &Vec<u32>, milestone_count: u32) -> Result<(), Error> {
    if dependencies.len() > MAX_DEPENDENCIES {
        return Err(Error::InvDep);
    }
    for dependency in dependencies.iter() {
        if dependency < FIRST_MILESTONE || dependency > milestone_count {
            return Err(Error::InvDep);
        }
    }
    Ok(())
}

/// Required approvers: non-empty, bounded, no duplicates
pub fn validate_approver_set(approvers: &Vec<Address>) -> Result<(), Error> {
    let count = approvers.len();
    if count == 0 || count > MAX_APPROVERS {
        return Err(Error::InvInput);
    }
    for i in 0..count {
        let a = approvers.get_unchecked(i);
        for j in (i + 1)..count {
            if a == approvers.get_unchecked(j) {
                return Err(Error::InvInput);
            }
        }
    }
    Ok(())
}

pub fn validate_window(start: Timestamp, expiry: Timestamp) -> Result<(), Error> {
    if expiry < start {
        return Err(Error::InvInput);
    }
    Ok(())
}
