//! # jobdump-core
//!
//! A library for decoding legacy Windows Task Scheduler `.job` files.
//!
//! This crate provides the core functionality for:
//! - Decoding the fixed header, string section, trailer, trigger and
//!   signature block of a `.job` buffer into a [`JobRecord`]
//! - Rendering a decoded record as a plain-text report
//!
//! ## Architecture
//!
//! The library is organized into several modules:
//!
//! - [`job`]: Binary decoding and the record types
//! - [`report`]: Label tables and text rendering
//! - [`error`]: Error types and handling
//!
//! ## Example
//!
//! ```no_run
//! use jobdump_core::{Decoder, Report, MAX_JOB_FILE_SIZE};
//! use std::fs;
//!
//! let mut data = fs::read("C:/Windows/Tasks/At1.job")?;
//! data.truncate(MAX_JOB_FILE_SIZE);
//!
//! let record = Decoder::new().decode(&data)?;
//! println!("{}", Report::new(&record));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! The decoder performs no I/O. Reading files, capping them at
//! [`MAX_JOB_FILE_SIZE`], and carrying on after a failed file are up to the
//! caller.

#![deny(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, unreachable_pub)]

pub mod error;
pub mod job;
pub mod report;

// Re-export primary types for convenience
pub use error::{Error, Result};
pub use job::{
    decode_job, Decoder, DecoderConfig, FixedHeader, JobId, JobRecord, LastRunTime,
    ReservedDataHandling, ScheduledDate, SignatureBlock, StringDecoding, Trailer,
    TriggerDetails, TriggerType, VariableSection, FIXED_HEADER_LEN, SIGNATURE_BLOCK_LEN,
    TRAILER_LEN, TRIGGER_DATA_LEN,
};
pub use report::Report;

/// Crate version for programmatic access
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Largest prefix of a `.job` file that callers should hand to the decoder
pub const MAX_JOB_FILE_SIZE: usize = 8192;
