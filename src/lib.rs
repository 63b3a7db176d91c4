//! CCSync - client-side task mirror and sync engine
//!
//! This library implements the reconciliation core of a Taskwarrior-style
//! task manager: a durable local mirror of a user's task set, a
//! single-flight synchronization service against a remote CCSync backend,
//! and pure view-state derivation (filtering, ordering, pagination,
//! statistics) over the mirror's contents.
//!
//! # Modules
//!
//! The library is organized into several key modules:
//!
//! * [`config`] - Application configuration management
//! * [`storage`] - Local database and data persistence
//! * [`sync`] - Synchronization with the CCSync backend
//! * [`backend`] - Backend abstraction and HTTP client
//! * [`views`] - Filtering, ordering, pagination, and statistics
//! * [`utils`] - Utility functions and helpers

/// Backend abstraction layer and the CCSync HTTP client
pub mod backend;

/// Configuration module for managing application settings
pub mod config;

/// Application constants and default values
pub mod constants;

/// SeaORM entity models for database tables
pub mod entities;

/// Logging setup for debugging and error tracking
pub mod logger;

/// Repository layer for database operations
pub mod repositories;

/// Local storage layer mirroring the remote task set
pub mod storage;

/// Synchronization engine for keeping local and remote data in sync
pub mod sync;

/// View-state derivation: filtering, ordering, pagination, statistics
pub mod views;

/// Utility functions for date/time handling and hashed storage keys
pub mod utils;

// Re-export entity models for convenient access
pub use entities::{preference, task};
