//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository and key-value calls into use-case level APIs.
//! - Keep presentation layers decoupled from storage details.

pub mod counter_service;
pub mod note_service;
pub mod preference_service;
