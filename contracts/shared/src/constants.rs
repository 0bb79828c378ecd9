//! Constants shared across the voting contracts

// ===== Time Constants (in seconds) =====

/// One day in seconds (86400)
pub const ONE_DAY_SECONDS: u64 = 86_400;

// ===== Storage TTL (in ledgers) =====
// ~5s per ledger.

/// Ledgers in one day
pub const DAY_IN_LEDGERS: u32 = 17_280;

/// Contract metadata (owner, name, description, counters)
pub const INSTANCE_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
pub const INSTANCE_LIFETIME_THRESHOLD: u32 = INSTANCE_BUMP_AMOUNT - DAY_IN_LEDGERS;

/// Proposals, ballots, weights and whitelist entries
pub const PERSISTENT_BUMP_AMOUNT: u32 = 365 * DAY_IN_LEDGERS;
pub const PERSISTENT_LIFETIME_THRESHOLD: u32 = PERSISTENT_BUMP_AMOUNT - 30 * DAY_IN_LEDGERS;

// ===== Enumeration =====

/// Largest page returned by `get_proposal_ids`
pub const MAX_PAGE_SIZE: u32 = 50;

// ===== Event Names =====

pub const EVENT_INITIALIZED: &str = "initialized";
pub const EVENT_PROPOSAL_ADDED: &str = "proposal_added";
pub const EVENT_VOTE_CASTED: &str = "vote_casted";
pub const EVENT_WEIGHTS_SET: &str = "weights_set";
pub const EVENT_WEIGHTS_DELETED: &str = "weights_deleted";
pub const EVENT_WHITELIST_ADDED: &str = "whitelist_added";
pub const EVENT_WHITELIST_REMOVED: &str = "whitelist_removed";
pub const EVENT_OWNER_CHANGED: &str = "owner_changed";
