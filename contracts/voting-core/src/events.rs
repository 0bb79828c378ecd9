//! Contract events. The proposal id is always a topic so indexers can
//! filter on it.

use shared::constants::{
    EVENT_INITIALIZED, EVENT_PROPOSAL_ADDED, EVENT_VOTE_CASTED, EVENT_WEIGHTS_DELETED,
    EVENT_WEIGHTS_SET, EVENT_WHITELIST_ADDED, EVENT_WHITELIST_REMOVED,
};
use shared::{Proposal, VoteType};
use soroban_sdk::{Address, Env, String, Symbol, Vec};

pub fn initialized(env: &Env, owner: &Address, name: &String) {
    env.events().publish(
        (Symbol::new(env, EVENT_INITIALIZED),),
        (owner.clone(), name.clone()),
    );
}

pub fn proposal_added(env: &Env, proposal: &Proposal) {
    env.events().publish(
        (Symbol::new(env, EVENT_PROPOSAL_ADDED), proposal.id.clone()),
        (proposal.uri.clone(), proposal.start_at, proposal.end_at),
    );
}

pub fn vote_casted(env: &Env, id: &String, voter: &Address, vote_type: VoteType) {
    env.events().publish(
        (Symbol::new(env, EVENT_VOTE_CASTED), id.clone()),
        (voter.clone(), vote_type),
    );
}

pub fn weights_set(env: &Env, addresses: &Vec<Address>, weights: &Vec<u64>) {
    env.events().publish(
        (Symbol::new(env, EVENT_WEIGHTS_SET),),
        (addresses.clone(), weights.clone()),
    );
}

pub fn weights_deleted(env: &Env, addresses: &Vec<Address>) {
    env.events()
        .publish((Symbol::new(env, EVENT_WEIGHTS_DELETED),), addresses.clone());
}

pub fn whitelist_added(env: &Env, address: &Address) {
    env.events()
        .publish((Symbol::new(env, EVENT_WHITELIST_ADDED), address.clone()), ());
}

pub fn whitelist_removed(env: &Env, address: &Address) {
    env.events()
        .publish((Symbol::new(env, EVENT_WHITELIST_REMOVED), address.clone()), ());
}
