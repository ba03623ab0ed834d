// src/store/mod.rs
//! Flat-file persistence: one JSON file for credentials, one for job records.

pub mod credentials;
pub mod jobs;

pub use credentials::{Credentials, CredentialsStore};
pub use jobs::{JobRecord, JobStore};
