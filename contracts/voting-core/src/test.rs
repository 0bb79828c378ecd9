#![cfg(test)]

use shared::constants::MAX_PAGE_SIZE;
use shared::{Proposal, VoteType, VotingError};
use soroban_sdk::{contract, testutils::Address as _, vec, Address, Env, String};

use crate::{metadata, proposals, storage, weights, whitelist};

#[contract]
struct Harness;

fn setup() -> (Env, Address) {
    let env = Env::default();
    let contract_id = env.register(Harness, ());
    (env, contract_id)
}

#[test]
fn test_proposal_storage_round_trip() {
    let (env, contract_id) = setup();
    let id = String::from_str(&env, "id");

    env.as_contract(&contract_id, || {
        assert!(!storage::has_proposal(&env, &id));

        let proposal = Proposal::new(id.clone(), String::from_str(&env, "uri"), 5, 10);
        storage::save_proposal(&env, &proposal);

        assert!(storage::has_proposal(&env, &id));
        assert_eq!(proposals::get_proposal(&env, &id), Ok(proposal));
        assert_eq!(proposals::get_vote_count(&env, &id), Ok((0, 0, 0)));
    });
}

#[test]
fn test_proposal_ids_keep_creation_order() {
    let (env, contract_id) = setup();

    env.as_contract(&contract_id, || {
        assert_eq!(proposals::proposal_count(&env), 0);
        assert_eq!(proposals::proposal_ids(&env, 0, 10).len(), 0);

        assert_eq!(storage::push_proposal_id(&env, &String::from_str(&env, "b")), Ok(0));
        assert_eq!(storage::push_proposal_id(&env, &String::from_str(&env, "a")), Ok(1));

        assert_eq!(proposals::proposal_count(&env), 2);
        assert_eq!(
            storage::get_proposal_id_at(&env, 1),
            Some(String::from_str(&env, "a"))
        );
        assert_eq!(
            proposals::proposal_ids(&env, 0, 10),
            vec![&env, String::from_str(&env, "b"), String::from_str(&env, "a")]
        );
    });
}

#[test]
fn test_proposal_ids_page_size_is_capped() {
    let (env, contract_id) = setup();

    env.as_contract(&contract_id, || {
        for _ in 0..MAX_PAGE_SIZE + 5 {
            storage::push_proposal_id(&env, &String::from_str(&env, "id")).unwrap();
        }

        assert_eq!(proposals::proposal_ids(&env, 0, 0).len(), MAX_PAGE_SIZE);
        assert_eq!(proposals::proposal_ids(&env, 0, MAX_PAGE_SIZE + 1).len(), MAX_PAGE_SIZE);
        assert_eq!(proposals::proposal_ids(&env, MAX_PAGE_SIZE, 0).len(), 5);
        assert_eq!(proposals::proposal_ids(&env, MAX_PAGE_SIZE + 5, 10).len(), 0);
        assert_eq!(proposals::proposal_ids(&env, u32::MAX, u32::MAX).len(), 0);
    });
}

#[test]
fn test_metadata_is_recorded_once() {
    let (env, contract_id) = setup();
    let owner = Address::generate(&env);
    let name = String::from_str(&env, "name");
    let description = String::from_str(&env, "description");

    env.as_contract(&contract_id, || {
        assert_eq!(metadata::name(&env), Err(VotingError::NotInitialized));

        metadata::initialize(&env, &owner, &name, &description).unwrap();

        assert_eq!(metadata::owner(&env), Ok(owner.clone()));
        assert_eq!(metadata::name(&env), Ok(name.clone()));
        assert_eq!(
            metadata::initialize(&env, &Address::generate(&env), &name, &description),
            Err(VotingError::AlreadyInitialized)
        );
        assert_eq!(metadata::owner(&env), Ok(owner.clone()));
    });
}

#[test]
fn test_ballot_records() {
    let (env, contract_id) = setup();
    let id = String::from_str(&env, "id");
    let voter = Address::generate(&env);

    env.as_contract(&contract_id, || {
        assert!(!proposals::has_voted(&env, &id, &voter));
        assert_eq!(proposals::get_vote(&env, &id, &voter), None);

        storage::save_vote(&env, &id, &voter, VoteType::Neutral);

        assert!(proposals::has_voted(&env, &id, &voter));
        assert_eq!(proposals::get_vote(&env, &id, &voter), Some(VoteType::Neutral));
    });
}

#[test]
fn test_whitelist_insert_is_idempotent() {
    let (env, contract_id) = setup();
    let a = Address::generate(&env);
    let b = Address::generate(&env);

    env.as_contract(&contract_id, || {
        whitelist::insert_all(&env, &vec![&env, a.clone(), b.clone(), a.clone()]).unwrap();
        assert_eq!(whitelist::count(&env), 2);

        whitelist::insert_all(&env, &vec![&env, b.clone()]).unwrap();
        assert_eq!(whitelist::count(&env), 2);
        assert!(whitelist::is_whitelisted(&env, &a));
        assert!(whitelist::is_whitelisted(&env, &b));
    });
}

#[test]
fn test_unset_weight_reads_zero() {
    let (env, contract_id) = setup();
    let address = Address::generate(&env);

    env.as_contract(&contract_id, || {
        assert_eq!(weights::weight_of(&env, &address), 0);
        storage::set_weight(&env, &address, 7);
        assert_eq!(weights::weight_of(&env, &address), 7);
        storage::remove_weight(&env, &address);
        assert_eq!(weights::weight_of(&env, &address), 0);
    });
}
