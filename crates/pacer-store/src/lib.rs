//! Data model and on-disk persistence for pacer.
//!
//! The store is a flat keyed blob store in the spirit of browser local
//! storage: one JSON document per key, read on startup, overwritten
//! wholesale after every committed mutation. Last write wins; there is
//! no multi-writer scenario.

pub mod config;
pub mod models;
pub mod store;

pub use config::StoreConfig;
pub use models::{Priority, Project, ProjectDraft, Task, TaskKind};
pub use store::{ProjectStore, StoreError};
