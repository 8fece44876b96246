//! Tallybank Persistence - textual archive and recovery
//!
//! Serializes a ledger to two plain-text artifacts and restores them,
//! re-running hash-chain verification before accepting the restored
//! state. The artifacts are the Source of Truth for an archived ledger;
//! their record layout is fixed for compatibility:
//!
//! - accounts file: `number, first, last, balance`, ascending by number
//! - ledger file: `id, receiver, sender, amount, fingerprint`, commit
//!   order (receiver before sender, by design)

pub mod archive;
pub mod error;
pub mod recover;

pub use archive::archive;
pub use error::PersistError;
pub use recover::recover;
