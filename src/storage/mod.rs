//! Local storage module: the durable mirror of a user's task set.
//!
//! Backed by SQLite through SeaORM. The mirror is the single read source
//! for view-state derivation; it is rebuilt wholesale by each successful
//! sync cycle.

pub mod db;

pub use db::LocalStorage;
