#![no_std]
//! Whitelisted proposal registry: gated voting like `VotingPrivate`, plus
//! paged enumeration of proposals in creation order and per-voter ballot
//! lookup.

use shared::{Proposal, VoteType, VotingError};
use soroban_sdk::{contract, contractimpl, Address, Env, String, Vec};
use voting_core::{metadata, proposals, storage, weights, whitelist, VoterGate};

#[contract]
pub struct VotingProposal;

#[contractimpl]
impl VotingProposal {
    // ── Initialization ───────────────────────────────────────────────────────

    /// Record owner, metadata and the initial whitelist at deploy time.
    pub fn __constructor(
        env: Env,
        owner: Address,
        name: String,
        description: String,
        voters: Vec<Address>,
    ) -> Result<(), VotingError> {
        metadata::initialize(&env, &owner, &name, &description)?;
        whitelist::insert_all(&env, &voters)
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

    // ── Whitelist ────────────────────────────────────────────────────────────

    pub fn add_to_whitelist(
        env: Env,
        caller: Address,
        addresses: Vec<Address>,
    ) -> Result<(), VotingError> {
        whitelist::add_to_whitelist(&env, &caller, &addresses)
    }

    pub fn remove_from_whitelist(
        env: Env,
        caller: Address,
        addresses: Vec<Address>,
    ) -> Result<(), VotingError> {
        whitelist::remove_from_whitelist(&env, &caller, &addresses)
    }

    pub fn whitelist(env: Env, address: Address) -> bool {
        whitelist::is_whitelisted(&env, &address)
    }

    pub fn get_whitelist_count(env: Env) -> u32 {
        whitelist::count(&env)
    }

    // ── Proposals ────────────────────────────────────────────────────────────

    pub fn add_proposal(
        env: Env,
        caller: Address,
        id: String,
        uri: String,
        start_at: u64,
        end_at: u64,
    ) -> Result<(), VotingError> {
        let proposal = proposals::add_proposal(&env, &caller, &id, &uri, start_at, end_at)?;
        storage::push_proposal_id(&env, &proposal.id).map(|_| ())
    }

    /// One page of proposal ids in creation order, at most `MAX_PAGE_SIZE`
    /// long. `limit = 0` requests a full page.
    pub fn get_proposal_ids(env: Env, start: u32, limit: u32) -> Vec<String> {
        proposals::proposal_ids(&env, start, limit)
    }

    pub fn get_proposal_count(env: Env) -> u32 {
        proposals::proposal_count(&env)
    }

    /// Cast one ballot. The voter must be whitelisted.
    pub fn vote(
        env: Env,
        voter: Address,
        id: String,
        vote_type: VoteType,
    ) -> Result<(), VotingError> {
        proposals::vote(&env, VoterGate::Whitelist, &voter, &id, vote_type)
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

    /// The ballot `voter` cast on `id`, if any
    pub fn get_vote(env: Env, id: String, voter: Address) -> Option<VoteType> {
        proposals::get_vote(&env, &id, &voter)
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
