use shared::validation::{safe_decrement, safe_increment};
use shared::VotingError;
use soroban_sdk::{Address, Env, Vec};

use crate::{events, storage};

/// Adds each address not already present. Used by the constructor of the
/// gated variants, so it does not check ownership itself.
pub fn insert_all(env: &Env, addresses: &Vec<Address>) -> Result<(), VotingError> {
    let mut count = storage::get_whitelist_count(env);
    for address in addresses.iter() {
        if storage::is_whitelisted(env, &address) {
            continue;
        }
        storage::set_whitelisted(env, &address);
        count = safe_increment(count)?;
        events::whitelist_added(env, &address);
    }
    storage::set_whitelist_count(env, count);
    Ok(())
}

/// Owner-only. Re-adding a member leaves the count unchanged.
pub fn add_to_whitelist(
    env: &Env,
    caller: &Address,
    addresses: &Vec<Address>,
) -> Result<(), VotingError> {
    authorization::require_owner(env, caller)?;
    insert_all(env, addresses)
}

/// Owner-only. Removing a non-member leaves the count unchanged.
pub fn remove_from_whitelist(
    env: &Env,
    caller: &Address,
    addresses: &Vec<Address>,
) -> Result<(), VotingError> {
    authorization::require_owner(env, caller)?;

    let mut count = storage::get_whitelist_count(env);
    for address in addresses.iter() {
        if !storage::is_whitelisted(env, &address) {
            continue;
        }
        storage::remove_whitelisted(env, &address);
        count = safe_decrement(count)?;
        events::whitelist_removed(env, &address);
    }
    storage::set_whitelist_count(env, count);
    Ok(())
}

pub fn require_whitelisted(env: &Env, address: &Address) -> Result<(), VotingError> {
    if !storage::is_whitelisted(env, address) {
        return Err(VotingError::NotWhitelisted);
    }
    Ok(())
}

pub fn is_whitelisted(env: &Env, address: &Address) -> bool {
    storage::is_whitelisted(env, address)
}

pub fn count(env: &Env) -> u32 {
    storage::get_whitelist_count(env)
}
