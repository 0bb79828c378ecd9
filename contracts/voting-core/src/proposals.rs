use shared::constants::MAX_PAGE_SIZE;
use shared::validation::{check_voting_window, safe_increment, validate_time_window};
use shared::{Proposal, VoteCount, VoteType, VotingError};
use soroban_sdk::{Address, Env, String, Vec};

use crate::{events, storage, whitelist, VoterGate};

// -------------------------------
// Proposal Creation
// -------------------------------

/// Owner-only. Stores a proposal with zero tallies.
pub fn add_proposal(
    env: &Env,
    caller: &Address,
    id: &String,
    uri: &String,
    start_at: u64,
    end_at: u64,
) -> Result<Proposal, VotingError> {
    authorization::require_owner(env, caller)?;
    validate_time_window(start_at, end_at)?;

    if storage::has_proposal(env, id) {
        return Err(VotingError::ProposalAlreadyExists);
    }

    let proposal = Proposal::new(id.clone(), uri.clone(), start_at, end_at);
    storage::save_proposal(env, &proposal);
    storage::bump_instance(env);

    events::proposal_added(env, &proposal);
    Ok(proposal)
}

// -------------------------------
// Voting
// -------------------------------

/// Records one ballot for `voter`. Weights are not applied: every
/// accepted ballot adds exactly one to its tally.
pub fn vote(
    env: &Env,
    gate: VoterGate,
    voter: &Address,
    id: &String,
    vote_type: VoteType,
) -> Result<(), VotingError> {
    voter.require_auth();

    if gate == VoterGate::Whitelist {
        whitelist::require_whitelisted(env, voter)?;
    }

    let mut proposal = storage::get_proposal(env, id).ok_or(VotingError::ProposalNotFound)?;

    check_voting_window(&proposal, env.ledger().timestamp())?;

    if storage::has_vote(env, id, voter) {
        return Err(VotingError::AlreadyVoted);
    }

    match vote_type {
        VoteType::Approval => {
            proposal.approval_count = safe_increment(proposal.approval_count)?
        }
        VoteType::Disapproval => {
            proposal.disapproval_count = safe_increment(proposal.disapproval_count)?
        }
        VoteType::Neutral => proposal.neutral_count = safe_increment(proposal.neutral_count)?,
    }

    storage::save_vote(env, id, voter, vote_type);
    storage::save_proposal(env, &proposal);

    events::vote_casted(env, id, voter, vote_type);
    Ok(())
}

// -------------------------------
// Read-only Queries
// -------------------------------

pub fn get_proposal(env: &Env, id: &String) -> Result<Proposal, VotingError> {
    storage::get_proposal(env, id).ok_or(VotingError::ProposalNotFound)
}

pub fn get_vote_count(env: &Env, id: &String) -> Result<VoteCount, VotingError> {
    get_proposal(env, id).map(|p| p.vote_count())
}

pub fn has_voted(env: &Env, id: &String, voter: &Address) -> bool {
    storage::has_vote(env, id, voter)
}

pub fn get_vote(env: &Env, id: &String, voter: &Address) -> Option<VoteType> {
    storage::get_vote(env, id, voter)
}

// -------------------------------
// Enumeration
// -------------------------------

pub fn proposal_count(env: &Env) -> u32 {
    storage::get_proposal_count(env)
}

/// Ids in creation order, starting at `start`. A `limit` of 0 or above
/// `MAX_PAGE_SIZE` is capped to `MAX_PAGE_SIZE`.
pub fn proposal_ids(env: &Env, start: u32, limit: u32) -> Vec<String> {
    let limit = if limit == 0 || limit > MAX_PAGE_SIZE {
        MAX_PAGE_SIZE
    } else {
        limit
    };

    let total = storage::get_proposal_count(env);
    let end = start.saturating_add(limit).min(total);

    let mut ids = Vec::new(env);
    for index in start..end {
        if let Some(id) = storage::get_proposal_id_at(env, index) {
            ids.push_back(id);
        }
    }
    ids
}
