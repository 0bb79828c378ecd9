//! Validation helpers for the voting contracts

use crate::errors::VotingError;
use crate::types::Proposal;

// ===== Time Window =====

/// Reject proposals whose window closes before it opens
pub fn validate_time_window(start_at: u64, end_at: u64) -> Result<(), VotingError> {
    if start_at > end_at {
        return Err(VotingError::InvalidTimeWindow);
    }
    Ok(())
}

/// Votes are accepted iff `start_at <= now <= end_at`
pub fn check_voting_window(proposal: &Proposal, now: u64) -> Result<(), VotingError> {
    if now < proposal.start_at {
        return Err(VotingError::VotingNotStarted);
    }
    if now > proposal.end_at {
        return Err(VotingError::VotingEnded);
    }
    Ok(())
}

// ===== Batch Validation =====

/// Paired address/value lists must line up one-to-one
pub fn validate_paired_lengths(addresses: u32, values: u32) -> Result<(), VotingError> {
    if addresses != values {
        return Err(VotingError::LengthMismatch);
    }
    Ok(())
}

// ===== Safe Math =====

pub fn safe_increment(value: u32) -> Result<u32, VotingError> {
    value.checked_add(1).ok_or(VotingError::Overflow)
}

pub fn safe_decrement(value: u32) -> Result<u32, VotingError> {
    value.checked_sub(1).ok_or(VotingError::Overflow)
}
