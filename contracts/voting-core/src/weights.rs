use shared::validation::validate_paired_lengths;
use shared::VotingError;
use soroban_sdk::{Address, Env, Vec};

use crate::{events, storage};

/// Owner-only bulk upsert. Nothing is written unless both lists line up.
pub fn set_weights(
    env: &Env,
    caller: &Address,
    addresses: &Vec<Address>,
    weights: &Vec<u64>,
) -> Result<(), VotingError> {
    authorization::require_owner(env, caller)?;
    validate_paired_lengths(addresses.len(), weights.len())?;

    for (address, weight) in addresses.iter().zip(weights.iter()) {
        storage::set_weight(env, &address, weight);
    }

    events::weights_set(env, addresses, weights);
    Ok(())
}

/// Owner-only. Deleted weights read back as 0.
pub fn delete_weights(
    env: &Env,
    caller: &Address,
    addresses: &Vec<Address>,
) -> Result<(), VotingError> {
    authorization::require_owner(env, caller)?;

    for address in addresses.iter() {
        storage::remove_weight(env, &address);
    }

    events::weights_deleted(env, addresses);
    Ok(())
}

pub fn weight_of(env: &Env, address: &Address) -> u64 {
    storage::get_weight(env, address)
}
