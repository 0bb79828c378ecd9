use shared::VotingError;
use soroban_sdk::{Address, Env, String};

use crate::{events, storage};

/// One-shot setup: records owner, name and description.
///
/// Called from each contract's `__constructor`, so it runs atomically with
/// deployment and no instance is ever observable without an owner.
pub fn initialize(
    env: &Env,
    owner: &Address,
    name: &String,
    description: &String,
) -> Result<(), VotingError> {
    if authorization::has_owner(env) {
        return Err(VotingError::AlreadyInitialized);
    }

    authorization::initialize_owner(env, owner);
    storage::set_metadata(env, name, description);

    events::initialized(env, owner, name);
    Ok(())
}

pub fn name(env: &Env) -> Result<String, VotingError> {
    storage::get_name(env).ok_or(VotingError::NotInitialized)
}

pub fn description(env: &Env) -> Result<String, VotingError> {
    storage::get_description(env).ok_or(VotingError::NotInitialized)
}

pub fn owner(env: &Env) -> Result<Address, VotingError> {
    authorization::get_owner(env)
}

pub fn transfer_ownership(
    env: &Env,
    caller: &Address,
    new_owner: &Address,
) -> Result<(), VotingError> {
    authorization::transfer_ownership(env, caller, new_owner)?;
    storage::bump_instance(env);
    Ok(())
}
