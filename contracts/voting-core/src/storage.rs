use shared::constants::{
    INSTANCE_BUMP_AMOUNT, INSTANCE_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT,
    PERSISTENT_LIFETIME_THRESHOLD,
};
use shared::validation::safe_increment;
use shared::{DataKey, Proposal, VoteType, VotingError};
use soroban_sdk::{Address, Env, String};

// ── Instance TTL ─────────────────────────────────────────────────────────────

pub fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

fn bump_persistent(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}

// ── Metadata ─────────────────────────────────────────────────────────────────

pub fn set_metadata(env: &Env, name: &String, description: &String) {
    env.storage().instance().set(&DataKey::Name, name);
    env.storage().instance().set(&DataKey::Description, description);
    bump_instance(env);
}

pub fn get_name(env: &Env) -> Option<String> {
    env.storage().instance().get(&DataKey::Name)
}

pub fn get_description(env: &Env) -> Option<String> {
    env.storage().instance().get(&DataKey::Description)
}

// ── Proposals ────────────────────────────────────────────────────────────────

pub fn has_proposal(env: &Env, id: &String) -> bool {
    env.storage()
        .persistent()
        .has(&DataKey::Proposal(id.clone()))
}

pub fn save_proposal(env: &Env, proposal: &Proposal) {
    let key = DataKey::Proposal(proposal.id.clone());
    env.storage().persistent().set(&key, proposal);
    bump_persistent(env, &key);
}

pub fn get_proposal(env: &Env, id: &String) -> Option<Proposal> {
    env.storage()
        .persistent()
        .get(&DataKey::Proposal(id.clone()))
}

pub fn get_proposal_count(env: &Env) -> u32 {
    env.storage()
        .instance()
        .get(&DataKey::ProposalCount)
        .unwrap_or(0u32)
}

pub fn get_proposal_id_at(env: &Env, index: u32) -> Option<String> {
    env.storage().persistent().get(&DataKey::ProposalIdAt(index))
}

/// Appends `id` at the next creation index. Touches one entry per call.
pub fn push_proposal_id(env: &Env, id: &String) -> Result<u32, VotingError> {
    let index = get_proposal_count(env);
    let key = DataKey::ProposalIdAt(index);
    env.storage().persistent().set(&key, id);
    bump_persistent(env, &key);

    env.storage()
        .instance()
        .set(&DataKey::ProposalCount, &safe_increment(index)?);
    bump_instance(env);
    Ok(index)
}

// ── Ballots ──────────────────────────────────────────────────────────────────

pub fn get_vote(env: &Env, id: &String, voter: &Address) -> Option<VoteType> {
    env.storage()
        .persistent()
        .get(&DataKey::Vote(id.clone(), voter.clone()))
}

pub fn has_vote(env: &Env, id: &String, voter: &Address) -> bool {
    env.storage()
        .persistent()
        .has(&DataKey::Vote(id.clone(), voter.clone()))
}

pub fn save_vote(env: &Env, id: &String, voter: &Address, vote_type: VoteType) {
    let key = DataKey::Vote(id.clone(), voter.clone());
    env.storage().persistent().set(&key, &vote_type);
    bump_persistent(env, &key);
}

// ── Weights ──────────────────────────────────────────────────────────────────

pub fn get_weight(env: &Env, address: &Address) -> u64 {
    env.storage()
        .persistent()
        .get(&DataKey::Weight(address.clone()))
        .unwrap_or(0u64)
}

pub fn set_weight(env: &Env, address: &Address, weight: u64) {
    let key = DataKey::Weight(address.clone());
    env.storage().persistent().set(&key, &weight);
    bump_persistent(env, &key);
}

pub fn remove_weight(env: &Env, address: &Address) {
    env.storage()
        .persistent()
        .remove(&DataKey::Weight(address.clone()));
}

// ── Whitelist ────────────────────────────────────────────────────────────────

pub fn is_whitelisted(env: &Env, address: &Address) -> bool {
    env.storage()
        .persistent()
        .get::<DataKey, bool>(&DataKey::Whitelisted(address.clone()))
        .unwrap_or(false)
}

pub fn set_whitelisted(env: &Env, address: &Address) {
    let key = DataKey::Whitelisted(address.clone());
    env.storage().persistent().set(&key, &true);
    bump_persistent(env, &key);
}

pub fn remove_whitelisted(env: &Env, address: &Address) {
    env.storage()
        .persistent()
        .remove(&DataKey::Whitelisted(address.clone()));
}

pub fn get_whitelist_count(env: &Env) -> u32 {
    env.storage()
        .instance()
        .get(&DataKey::WhitelistCount)
        .unwrap_or(0u32)
}

pub fn set_whitelist_count(env: &Env, count: u32) {
    env.storage().instance().set(&DataKey::WhitelistCount, &count);
}
