//! Orchestration around the pure scheduling core.
//!
//! `SeasonCoordinator` pulls teams and results from injected collaborators,
//! runs the core, and pushes plans back out. `MemoryStore` is a ready-made
//! collaborator for the binary and for tests.

pub mod cache;
pub mod coordinator;
pub mod memory;
pub mod traits;

pub use cache::StandingsCache;
pub use coordinator::SeasonCoordinator;
pub use memory::MemoryStore;
pub use traits::{MatchPersistence, ResultFeed, TeamDirectory};
