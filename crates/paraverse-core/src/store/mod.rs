//! Universe store trait.
//!
//! Defines the interface for universe persistence operations. The store is
//! the durability and concurrency boundary of the system: every mutation of
//! a stored universe goes through this contract, never through a reference
//! held by a caller.

mod memory;

pub use memory::InMemoryUniverseStore;

use crate::error::Result;
use crate::universe::{ConversationEntry, Universe};
use async_trait::async_trait;

/// An abstract repository for managing universe persistence.
///
/// This trait defines the contract for persisting and retrieving universes,
/// decoupling the orchestrator from the specific storage mechanism
/// (in-memory map, database, remote API).
///
/// # Implementation Notes
///
/// Implementations must guarantee:
/// - `put` is atomic: no concurrent `get` ever observes a partial record
/// - appends on one universe serialize into a single total order, with no
///   lost appends
/// - different universes may be mutated fully in parallel; no cross-universe
///   transactions are offered or required
#[async_trait]
pub trait UniverseStore: Send + Sync {
    /// Creates or replaces a universe record atomically.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing storage fails.
    async fn put(&self, universe: Universe) -> Result<()>;

    /// Finds a universe by its id.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Universe))`: universe found
    /// - `Ok(None)`: universe not found
    /// - `Err(_)`: error occurred during retrieval
    async fn get(&self, id: &str) -> Result<Option<Universe>>;

    /// Atomically appends an entry to the target universe's conversation log.
    ///
    /// # Errors
    ///
    /// Returns `UniverseNotFound` if the id is unknown.
    async fn append_conversation(&self, id: &str, entry: ConversationEntry) -> Result<()>;
}
