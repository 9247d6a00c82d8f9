//! Domain model for the book catalogue.
//!
//! # Responsibility
//! - Define the canonical data structures used by repository and service code.
//!
//! # Invariants
//! - Every stored book is identified by a store-assigned `BookId`.
//! - Deletion is a hard delete; there are no tombstones.

pub mod book;
