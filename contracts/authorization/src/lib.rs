//! Ownership Module for the Voting Contracts
//!
//! Single-owner access control shared by every voting contract. The owner
//! is recorded once at initialization; owner-only entry points take the
//! caller explicitly and go through [`require_owner`].
//!
//! ## Features
//! - Identity verification via Soroban's built-in auth
//! - Owner comparison with a stable `NotOwner` error
//! - Ownership transfer with an `owner_changed` event

#![no_std]

use shared::constants::{EVENT_OWNER_CHANGED, INSTANCE_BUMP_AMOUNT, INSTANCE_LIFETIME_THRESHOLD};
use shared::{DataKey, VotingError};
use soroban_sdk::{Address, Env, Symbol};

/// Record the contract owner (call once during contract initialization)
pub fn initialize_owner(env: &Env, owner: &Address) {
    env.storage().instance().set(&DataKey::Owner, owner);
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

/// Whether an owner has been recorded
pub fn has_owner(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Owner)
}

/// Get the contract owner address
pub fn get_owner(env: &Env) -> Result<Address, VotingError> {
    env.storage()
        .instance()
        .get(&DataKey::Owner)
        .ok_or(VotingError::NotInitialized)
}

/// Verify the caller's identity, then require that it is the owner
pub fn require_owner(env: &Env, caller: &Address) -> Result<(), VotingError> {
    caller.require_auth();

    let owner = get_owner(env)?;
    if owner != *caller {
        return Err(VotingError::NotOwner);
    }
    Ok(())
}

/// Hand ownership to `new_owner` (owner only)
pub fn transfer_ownership(
    env: &Env,
    caller: &Address,
    new_owner: &Address,
) -> Result<(), VotingError> {
    require_owner(env, caller)?;

    initialize_owner(env, new_owner);

    env.events().publish(
        (Symbol::new(env, EVENT_OWNER_CHANGED),),
        (caller.clone(), new_owner.clone()),
    );

    Ok(())
}
