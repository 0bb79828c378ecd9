//! Common types and data structures for the voting contracts

use soroban_sdk::{contracttype, Address, String};

/// `(approval, disapproval, neutral)` tallies as returned by `get_vote_count`
pub type VoteCount = (u32, u32, u32);

/// Ballot choice
#[contracttype]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum VoteType {
    Approval = 0,
    Disapproval = 1,
    Neutral = 2,
}

/// A votable item with a fixed open/close window
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Proposal {
    /// Caller-supplied identifier
    pub id: String,
    /// Opaque content pointer
    pub uri: String,
    /// First ledger timestamp (seconds) at which votes are accepted
    pub start_at: u64,
    /// Last ledger timestamp (seconds) at which votes are accepted
    pub end_at: u64,
    pub approval_count: u32,
    pub disapproval_count: u32,
    pub neutral_count: u32,
}

impl Proposal {
    /// Fresh proposal with zeroed tallies
    pub fn new(id: String, uri: String, start_at: u64, end_at: u64) -> Self {
        Self {
            id,
            uri,
            start_at,
            end_at,
            approval_count: 0,
            disapproval_count: 0,
            neutral_count: 0,
        }
    }

    pub fn vote_count(&self) -> VoteCount {
        (self.approval_count, self.disapproval_count, self.neutral_count)
    }
}

/// Storage keys shared by every voting contract
#[contracttype]
#[derive(Clone, Debug)]
pub enum DataKey {
    // instance storage
    Owner,
    Name,
    Description,
    WhitelistCount,
    ProposalCount,

    // persistent storage
    /// creation index -> proposal id
    ProposalIdAt(u32),
    Proposal(String),
    /// (proposal_id, voter) -> VoteType
    Vote(String, Address),
    Weight(Address),
    Whitelisted(Address),
}
