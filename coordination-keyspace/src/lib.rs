//! Keyspace layout for coordinating one distributed job deployment through a
//! hierarchical, path-addressed coordination service.
//!
//! The following node hierarchy is maintained per deployment:
//! ```text
//! /
//! └── {prefix}/
//!     ├── JobModelGeneration/
//!     │   ├── jobModelVersion          (data: currently active version)
//!     │   ├── jobModels/
//!     │   │   ├── 1                    (data: job model for version 1)
//!     │   │   └── 2
//!     │   └── {barrier_id}/
//!     │       └── versionBarriers/     (barrier-participation records)
//!     └── processors/
//!         ├── 00000001
//!         └── 00000002
//! ```
//!
//! This crate only builds and parses the key strings. Node lifecycle (create,
//! read, watch, delete), job-model payload serialization, leader election,
//! and barrier state machines all belong to the callers holding the
//! coordination-service client.

pub mod error;
pub mod keyspace;
pub mod util;

pub use error::{Error, Result};
pub use keyspace::{parse_id_from_path, JobKeyspace};
