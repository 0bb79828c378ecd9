//! Error codes for the voting contracts
//!
//! Every failing call reverts with one of these codes and leaves contract
//! state untouched.

use soroban_sdk::contracterror;

/// Error type shared by all voting contracts
///
/// Error ranges are organized by category:
/// - 1-9: Lifecycle and access control
/// - 10-19: Proposal errors
/// - 20-29: Voting errors
/// - 30-39: Input and arithmetic errors
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum VotingError {
    // ===== Lifecycle / Access Control (1-9) =====
    /// Contract has not been initialized
    NotInitialized = 1,

    /// Owner and metadata were already recorded
    AlreadyInitialized = 2,

    /// Caller is not the contract owner
    NotOwner = 3,

    /// Caller is not on the whitelist
    NotWhitelisted = 4,

    // ===== Proposal Errors (10-19) =====
    /// No proposal is stored under the given id
    ProposalNotFound = 10,

    /// A proposal with the same id already exists
    ProposalAlreadyExists = 11,

    /// `start_at` is after `end_at`
    InvalidTimeWindow = 12,

    // ===== Voting Errors (20-29) =====
    /// Ledger time is before the proposal's `start_at`
    VotingNotStarted = 20,

    /// Ledger time is after the proposal's `end_at`
    VotingEnded = 21,

    /// The voter already voted on this proposal
    AlreadyVoted = 22,

    // ===== Input / Arithmetic Errors (30-39) =====
    /// Paired address and value lists differ in length
    LengthMismatch = 30,

    /// A counter would overflow
    Overflow = 31,
}
