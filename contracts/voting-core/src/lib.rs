#![no_std]
//! Voting logic shared by the `VotingBase`, `VotingPublic`,
//! `VotingPrivate` and `VotingProposal` contracts.
//!
//! Each contract crate is a thin `#[contractimpl]` wrapper; the state
//! transitions live here as plain functions over `&Env`, so every variant
//! tallies, gates and stores ballots identically.

pub mod events;
pub mod metadata;
pub mod proposals;
pub mod storage;
pub mod weights;
pub mod whitelist;

/// Who may cast a ballot
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum VoterGate {
    /// Any authenticated address
    Open,
    /// Only addresses on the owner-managed whitelist
    Whitelist,
}

#[cfg(test)]
mod test;
