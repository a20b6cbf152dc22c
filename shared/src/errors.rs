use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    NotInit = 1,
    AlreadyInit = 2,
    NotManager = 3,
    InvInput = 4,

    // Funding pool errors
    PoolClosed = 10,
    AlreadyClosed = 11,
    BelowMin = 12,

    // Milestone errors
    PoolOpen = 20,
    InvDep = 21,
    MileNF = 22,
    MileDone = 23,
    AlreadyAppr = 24,
    NotApprover = 25,
    InsufFunds = 26,

    // Residual errors
    InvResType = 30,
    ResidualNF = 31,
}

/// Coarse failure class of an [`Error`], for callers that react to the kind
/// of rejection rather than the exact cause.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    /// Caller does not hold the role the operation requires
    Unauthorized,
    /// Operation is not valid in the current lifecycle state
    InvalidState,
    /// Argument rejected (amount, dependency, type code, unknown id)
    InvalidInput,
    /// The same identity already performed this action
    DuplicateAction,
    /// Pool balance cannot cover the requested payout
    ResourceExhausted,
}

impl Error {
    pub const fn kind(self) -> ErrorKind {
        match self {
            Error::NotManager | Error::NotApprover => ErrorKind::Unauthorized,
            Error::NotInit
            | Error::AlreadyInit
            | Error::PoolClosed
            | Error::AlreadyClosed
            | Error::PoolOpen
            | Error::MileDone => ErrorKind::InvalidState,
            Error::InvInput
            | Error::BelowMin
            | Error::InvDep
            | Error::MileNF
            | Error::InvResType
            | Error::ResidualNF => ErrorKind::InvalidInput,
            Error::AlreadyAppr => ErrorKind::DuplicateAction,
            Error::InsufFunds => ErrorKind::ResourceExhausted,
        }
    }
}
