//! Notice storage.
//!
//! # Responsibility
//! - Define the registry contract the facade depends on.
//! - Provide the default process-local implementation.
//!
//! # Invariants
//! - Registries reject duplicate ids with a semantic `Collision` error.
//! - Nothing is persisted across requests.

pub mod notice_registry;
