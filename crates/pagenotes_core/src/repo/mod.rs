//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define use-case oriented data access contracts.
//! - Isolate blob encoding details from service orchestration.
//!
//! # Invariants
//! - Repository reads return semantic errors (`CorruptStore`) in addition
//!   to backend transport errors.

pub mod note_repo;
