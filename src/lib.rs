//! # fconf
//!
//! Generates the Asterisk dongle trunk configuration from a JSON record
//! set and reconciles it with the configuration already on disk.
//!
//! The persisted format is a section-based, INI-like text:
//!
//! ```text
//!  [trunk0]
//! imei=123456789012345
//! imsi=001010000000001
//! ```
//!
//! Scanning, parsing, printing and merging live in their own modules; the
//! [`sync`] module ties one full invocation together and the `fconf`
//! binary is a thin clap front end over it. Reconciliation keys on both
//! the section name and the device identity (`imei`), so a device that
//! moved to a different trunk name follows its identity instead of being
//! duplicated.

pub mod ast;
pub mod error;
pub mod merge;
pub mod parser;
pub mod paths;
pub mod printer;
pub mod records;
pub mod scanner;
pub mod sync;
pub mod token;
