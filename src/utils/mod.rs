/// Date and time parsing, formatting, and overdue logic
pub mod datetime;

/// One-way hashed per-user storage keys
pub mod keys;
