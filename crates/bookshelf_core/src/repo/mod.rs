//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define use-case oriented data access contracts.
//! - Isolate SQLite query details from service orchestration.
//!
//! # Invariants
//! - Every statement binds request data as parameters; SQL text is static.
//! - Repository APIs report row counts and leave "missing row" policy to the
//!   service layer.

pub mod book_repo;
