//! # CLI Behavior
//!
//! This is **one possible UI client** for the record store—not the
//! application itself. The CLI is the only place that knows about terminal
//! I/O, exit codes, and output formatting.
//!
//! For the overall architecture, see the crate-level documentation in
//! [`medbook`].
//!
//! ## Command Surface
//!
//! Commands come in three record groups plus housekeeping:
//!
//! - Doctors: `add-doctor`, `doctors`, `doctor <ID>`
//! - Patients: `add-patient`, `patients`, `patient <ID>`
//! - Appointments: `book`, `appointments`, `edit`, `cancel`
//! - Misc: `config`
//!
//! Records are addressed by their kind-tagged IDs (`D1`, `P2`, `A3`).
//! Lookups that find nothing report it and exit zero; mutations aimed at an
//! ID that does not resolve fail with a nonzero exit.
//!
//! ## Data Directory
//!
//! The record files live in a single directory, resolved in precedence
//! order: `--data-dir` flag, `MEDBOOK_DATA` environment variable (primarily
//! for testing), the configured `data-dir`, then the platform default.
//!
//! ## Module Structure
//!
//! - `commands`: Per-command handlers that call the clinic and print results
//! - `print`: Output formatting (tables, colored messages)
//! - `setup`: Argument parsing via clap

mod commands;
mod print;
pub mod setup;

pub use commands::run;
