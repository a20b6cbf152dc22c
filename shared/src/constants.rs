/// Index returned by `balance_of` for a holder that owns no residual
pub const NO_RESIDUAL: u64 = u64::MAX;

/// First number handed out by the milestone registry
pub const FIRST_MILESTONE: u32 = 1;

/// Upper bound on required approvers per milestone
pub const MAX_APPROVERS: u32 = 32;

/// Upper bound on dependencies per milestone
pub const MAX_DEPENDENCIES: u32 = 32;
