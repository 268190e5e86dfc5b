//! Layered configuration defaults with per-instance snapshots
//!
//! This crate provides:
//! - Type-safe option values without a fixed schema
//! - An explicit, lock-guarded defaults store with configure-block semantics
//! - Per-owner-type scoping layered over a shared parent store
//! - Per-instance snapshots taken once at construction time
//!
//! Defaults flow one way: a [`DefaultsStore`] is mutated through
//! [`DefaultsStore::configure`] blocks, each owner instance copies the
//! resolved defaults into its own [`Config`] when it is constructed, and
//! from then on the instance is independent. Later store changes affect
//! only instances constructed after them; per-instance `set` calls never
//! write back to the store.

pub mod config;
pub mod configurable;
pub mod defaults;
pub mod value;

pub use config::Config;
pub use configurable::Configurable;
pub use defaults::DefaultsStore;
pub use value::OptionValue;
