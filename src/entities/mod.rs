//! SeaORM entity models for the local mirror database.

pub mod preference;
pub mod task;
