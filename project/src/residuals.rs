use shared::errors::Error;
use shared::events::emit_residual_minted;
use shared::types::{Residual, ResidualType, Timestamp};
use shared::NO_RESIDUAL;
use soroban_sdk::{Address, Env, String, Vec};

use crate::storage::{
    get_holder_residuals, get_latest_residual, get_residual_count, push_residual,
};
use crate::validation::validate_window;

/// Mint the next residual entry for `holder`.
#[allow(clippy::too_many_arguments)]
pub fn mint(
    env: &Env,
    holder: Address,
    holder_role: String,
    residual_type: u32,
    start: Timestamp,
    expiry: Timestamp,
    weight: Option<u64>,
    decimals: Option<u32>,
    media: Option<String>,
) -> Result<Residual, Error> {
    let residual_type = ResidualType::from_code(residual_type)?;
    validate_window(start, expiry)?;

    let residual = Residual {
        residual_id: get_residual_count(env),
        residual_type,
        holder,
        holder_role,
        start,
        expiry,
        weight,
        decimals,
        media,
    };

    push_residual(env, &residual);
    emit_residual_minted(env, &residual);

    Ok(residual)
}

/// Id of the latest residual minted to `holder`, or [`NO_RESIDUAL`]
pub fn latest_of(env: &Env, holder: &Address) -> u64 {
    get_latest_residual(env, holder).unwrap_or(NO_RESIDUAL)
}

pub fn all_of(env: &Env, holder: &Address) -> Vec<u64> {
    get_holder_residuals(env, holder)
}
