//! # Config Crate
//!
//! Centralized configuration constants for the minipy lowering pipeline.
//! Limits and tunables used while walking the concrete syntax tree are defined
//! here so the parser and AST crates agree on them.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{LowerConfig, MAX_NESTING_DEPTH};
//!
//! let config = LowerConfig::default();
//! assert_eq!(config.max_depth, MAX_NESTING_DEPTH);
//!
//! // A tighter limit for untrusted input
//! let strict = LowerConfig::new(64).expect("valid config");
//! assert_eq!(strict.max_depth, 64);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **No Dependencies**: Plain constants and a validated settings struct
//! - **Well-Documented**: Every constant has a usage example

pub mod constants;
