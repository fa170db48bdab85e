//! Crabfolio - Terminal Profile Setup
//!
//! The profile-setup step of the Crabfolio onboarding flow, rendered as a
//! Ratatui form. The step edits an externally-owned [`profile::ProfileDraft`]
//! by emitting merge intents, validates on submit, and relays navigation to
//! its host instead of deciding anything itself.
//!
//! ## Quick Start
//!
//! ```bash
//! # Run the profile setup step
//! crabfolio
//!
//! # Print the finished profile as JSON
//! crabfolio setup --format json
//!
//! # With debug logging (creates log files in .crabfolio/logs/)
//! crabfolio --debug
//! ```

pub mod cli;
pub mod error;
pub mod logging;
pub mod profile;
pub mod tui;

// Re-export commonly used types
pub use error::{CrabfolioError, ErrorCode};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");
