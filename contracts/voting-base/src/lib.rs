#![no_std]

use shared::{Proposal, VoteType, VotingError};
use soroban_sdk::{contract, contractimpl, Address, Env, String, Vec};
use voting_core::{metadata, proposals, weights, VoterGate};

#[contract]
pub struct VotingBase;

#[contractimpl]
impl VotingBase {
    // ── Initialization ───────────────────────────────────────────────────────

    /// Record the owner and the contract's display metadata at deploy time.
    pub fn __constructor(
        env: Env,
        owner: Address,
        name: String,
        description: String,
    ) -> Result<(), VotingError> {
        metadata::initialize(&env, &owner, &name, &description)
    }

    pub fn name(env: Env) -> Result<String, VotingError> {
        metadata::name(&env)
    }

    pub fn description(env: Env) -> Result<String, VotingError> {
        metadata::description(&env)
    }

    pub fn owner(env: Env) -> Result<Address, VotingError> {
        metadata::owner(&env)
    }

    pub fn transfer_ownership(
        env: Env,
        caller: Address,
        new_owner: Address,
    ) -> Result<(), VotingError> {
        metadata::transfer_ownership(&env, &caller, &new_owner)
    }

    // ── Proposals ────────────────────────────────────────────────────────────

    /// Create a proposal open for votes between `start_at` and `end_at`
    /// (inclusive, ledger seconds). Owner only.
    pub fn add_proposal(
        env: Env,
        caller: Address,
        id: String,
        uri: String,
        start_at: u64,
        end_at: u64,
    ) -> Result<(), VotingError> {
        proposals::add_proposal(&env, &caller, &id, &uri, start_at, end_at).map(|_| ())
    }

    /// Cast one ballot. Any authenticated address may vote once per proposal.
    pub fn vote(
        env: Env,
        voter: Address,
        id: String,
        vote_type: VoteType,
    ) -> Result<(), VotingError> {
        proposals::vote(&env, VoterGate::Open, &voter, &id, vote_type)
    }

    pub fn proposals(env: Env, id: String) -> Result<Proposal, VotingError> {
        proposals::get_proposal(&env, &id)
    }

    pub fn get_vote_count(env: Env, id: String) -> Result<(u32, u32, u32), VotingError> {
        proposals::get_vote_count(&env, &id)
    }

    pub fn has_voted(env: Env, id: String, voter: Address) -> bool {
        proposals::has_voted(&env, &id, &voter)
    }

    // ── Weights ──────────────────────────────────────────────────────────────

    pub fn set_weights(
        env: Env,
        caller: Address,
        addresses: Vec<Address>,
        weights: Vec<u64>,
    ) -> Result<(), VotingError> {
        weights::set_weights(&env, &caller, &addresses, &weights)
    }

    pub fn delete_weights(
        env: Env,
        caller: Address,
        addresses: Vec<Address>,
    ) -> Result<(), VotingError> {
        weights::delete_weights(&env, &caller, &addresses)
    }

    pub fn weights(env: Env, address: Address) -> u64 {
        weights::weight_of(&env, &address)
    }
}
