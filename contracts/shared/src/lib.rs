#![no_std]
//! # Shared Voting Contracts Library
//!
//! Reusable types, errors, constants, and validation helpers for the
//! voting contract family (`VotingBase`, `VotingPublic`, `VotingPrivate`,
//! `VotingProposal`).
//!
//! ## Modules
//!
//! - `errors` - The `VotingError` codes every contract reverts with
//! - `types` - Proposal records, vote types and storage keys
//! - `constants` - Storage TTLs and time constants
//! - `validation` - Time window, batch and arithmetic checks
//!
//! ## Usage
//!
//! ```rust,ignore
//! use shared::errors::VotingError;
//! use shared::types::{Proposal, VoteType};
//! use shared::validation::check_voting_window;
//! ```

pub mod constants;
pub mod errors;
pub mod types;
pub mod validation;

// Re-export commonly used types
pub use errors::VotingError;
pub use types::{DataKey, Proposal, VoteCount, VoteType};
pub use validation::{
    check_voting_window, safe_decrement, safe_increment, validate_paired_lengths,
    validate_time_window,
};
