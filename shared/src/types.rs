use soroban_sdk::{contracttype, Address, String, Vec};

use crate::errors::Error;

/// Token-less value unit tracked by the pool ledger
pub type Amount = i128;

/// Ledger timestamp in seconds (or caller-defined epoch units for residual windows)
pub type Timestamp = u64;

/// Pooled fund shared by every backer of the project
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FundingPool {
    pub manager: Address,
    pub goal_amount: Amount,
    pub minimum_contribution: Amount,
    /// Sum of accepted contributions; never exceeds `goal_amount`
    pub funded_amount: Amount,
    /// Sum already paid out to milestone recipients
    pub released_amount: Amount,
    pub open: bool,
}

/// One accepted investment
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Contribution {
    pub index: u64,
    pub backer: Address,
    pub amount: Amount,
    pub created_at: Timestamp,
}

#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MilestoneStatus {
    Pending,
    Completed,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Milestone {
    pub number: u32,
    pub description: String,
    pub value: Amount,
    pub recipient: Address,
    pub approvers: Vec<Address>,
    /// Earlier milestone numbers this one builds on
    pub dependencies: Vec<u32>,
    pub approved_by: Vec<Address>,
    pub status: MilestoneStatus,
    pub created_at: Timestamp,
    pub completed_at: Option<Timestamp>,
}

/// Kind of entitlement carried by a residual
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum ResidualType {
    Actor = 0,
    Backer = 1,
    /// Streaming revenue share, usually minted with a weight and media label
    Streaming = 2,
}

impl ResidualType {
    /// Parse the wire code of a residual type.
    pub fn from_code(code: u32) -> Result<Self, Error> {
        match code {
            0 => Ok(ResidualType::Actor),
            1 => Ok(ResidualType::Backer),
            2 => Ok(ResidualType::Streaming),
            _ => Err(Error::InvResType),
        }
    }

    pub fn code(self) -> u32 {
        self as u32
    }
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Residual {
    pub residual_id: u64,
    pub residual_type: ResidualType,
    pub holder: Address,
    /// Free-form label such as "backer" or "actor"
    pub holder_role: String,
    pub start: Timestamp,
    pub expiry: Timestamp,
    pub weight: Option<u64>,
    pub decimals: Option<u32>,
    pub media: Option<String>,
}
