//! Repository layer for database operations.
//!
//! Repositories are generic over [`sea_orm::ConnectionTrait`] so the same
//! operations run against the plain connection or inside a transaction.

pub mod preference;
pub mod task;

pub use preference::PreferenceRepository;
pub use task::TaskRepository;
