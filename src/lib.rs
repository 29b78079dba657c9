//! Library crate for users-app.
//!
//! This crate exposes the building blocks of the interactive CLI:
//! - Application state and command loop (`app`)
//! - Error and result types (`error`)
//! - Prompt layer over the terminal (`prompt`)
//! - In-memory user store and validation (`store`)
//! - Console output and table rendering (`ui`)
//!
//! It is used by the `users-app` binary and by tests.
#![doc = include_str!("../README.md")]
#![deny(rustdoc::broken_intra_doc_links)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod app;
pub mod error;
pub mod prompt;
pub mod store;
pub mod ui;

// Re-export commonly used items at the crate root for convenience
/// Convenient error and result types shared across the crate.
pub use error::{DynError, Result};
