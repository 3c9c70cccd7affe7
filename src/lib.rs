//! `preflight` - console diagnostics for environment requirement checks
//!
//! This crate renders the human-readable report of a requirement
//! verification run: section titles, wrapped prose, progress dots, and
//! full-width status banners, with optional ANSI coloring and
//! verbosity-based filtering.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - [`format`] - The [`Printer`] plus its style table and word wrap
//! - [`requirement`] - Requirement descriptions and collections
//! - [`checker`] - Evaluates a collection and renders the report
//! - [`term`] - Terminal width and color-support probes
//! - [`error`] - Error types and handling
//! - [`logging`] - Tracing initialization
//!
//! # Example
//!
//! ```no_run
//! use preflight::{Printer, RequirementCollection, checker};
//!
//! let mut requirements = RequirementCollection::new();
//! requirements.add_requirement(
//!     || std::env::var("HOME").is_ok(),
//!     "The HOME environment variable must be set.",
//!     "Set HOME to your home directory.",
//! );
//!
//! let mut printer = Printer::from_env(0);
//! let ready = checker::run(&mut printer, &requirements)?;
//! # let _ = ready;
//! # Ok::<(), preflight::Error>(())
//! ```

#![forbid(unsafe_code)]
#![warn(clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod checker;
pub mod error;
pub mod format;
pub mod logging;
pub mod requirement;
pub mod term;

pub use error::{Error, Result};
pub use format::Printer;
pub use requirement::{Requirement, RequirementCollection};
