//! # Medbook Architecture
//!
//! Medbook is a **UI-agnostic clinic record library**. This is not a CLI
//! application that happens to have some library code—it's a record store
//! that happens to have a CLI client.
//!
//! ## The Layered Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, formats output, handles terminal I/O   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Record Store (clinic.rs)                                   │
//! │  - Owns the collections, the ID counters, the lifecycle     │
//! │  - Validates input, resolves references, triggers saves     │
//! │  - Business misses are values (None/false), not errors      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - Abstract SnapshotStore trait                             │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## The ID System
//!
//! Records are addressed by kind-tagged IDs: `D1` for doctors, `P3` for
//! patients, `A12` for appointments. Suffixes count up per kind and are
//! never reused, even across restarts and deletions. See `id.rs`.
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `clinic.rs` inward, code:
//! - Takes regular Rust function arguments
//! - Returns regular Rust types (`Result<T>`, `Option<&T>`)
//! - **Never** writes to stdout/stderr
//! - **Never** calls `std::process::exit`
//! - **Never** assumes a terminal environment
//!
//! The original front end for this store was a desktop form UI; the same
//! core now serves a terminal client, and could serve any other.
//!
//! ## Module Overview
//!
//! - [`clinic`]: The record store—entry point for all operations
//! - [`model`]: Core data types (`Doctor`, `Patient`, `Appointment`, `Records`)
//! - [`id`]: Kind-tagged ID system (`D1`/`P3`/`A12`) and counters
//! - [`store`]: Storage abstraction and implementations
//! - [`config`]: Configuration management
//! - [`error`]: Error types
//! - `cli`: Argument parsing and printing for the binary (not part of the lib API)

pub mod clinic;
pub mod config;
pub mod error;
pub mod id;
pub mod model;
pub mod store;
