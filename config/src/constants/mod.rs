//! Centralized configuration values shared across the minipy crates.
//!
//! Each public item in this module documents its purpose and provides a minimal
//! usage example so that downstream crates can remain declarative and avoid
//! scattering literals.

use std::fmt;

// =============================================================================
// LIMIT CONSTANTS
// =============================================================================

/// Default maximum number of nested syntax nodes the lowering pass descends
/// into before giving up.
///
/// Every parenthesis-free operator chain such as `1+1+1+...` adds one level,
/// so the limit has to be generous for machine-generated input while still
/// bounding the work done on hostile input.
///
/// # Examples
/// ```
/// use config::constants::MAX_NESTING_DEPTH;
/// assert!(MAX_NESTING_DEPTH >= 256);
/// ```
pub const MAX_NESTING_DEPTH: usize = 10_000;

/// Bytes of stack that must remain before `stacker` switches the recursive
/// lowering functions onto a freshly allocated segment.
///
/// # Examples
/// ```
/// use config::constants::STACKER_RED_ZONE_BYTES;
/// assert!(STACKER_RED_ZONE_BYTES >= 32 * 1024);
/// ```
pub const STACKER_RED_ZONE_BYTES: usize = 128 * 1024;

/// Bytes of stack space reserved for each segment allocated by the
/// `stacker` crate.
///
/// # Examples
/// ```
/// use config::constants::{STACKER_RED_ZONE_BYTES, STACKER_STACK_SIZE_BYTES};
/// assert!(STACKER_STACK_SIZE_BYTES > STACKER_RED_ZONE_BYTES);
/// ```
pub const STACKER_STACK_SIZE_BYTES: usize = 4 * 1024 * 1024;

// =============================================================================
// DIAGNOSTIC CONSTANTS
// =============================================================================

/// Number of characters of source text quoted when reporting a syntax error.
///
/// Unsupported constructs quote their full text; syntax errors can cover the
/// rest of the file, so their snippet is truncated.
///
/// # Examples
/// ```
/// use config::constants::SYNTAX_SNIPPET_CHARS;
/// let snippet: String = "x = = = = = = = = = = = = = 1".chars().take(SYNTAX_SNIPPET_CHARS).collect();
/// assert_eq!(snippet.chars().count(), SYNTAX_SNIPPET_CHARS);
/// ```
pub const SYNTAX_SNIPPET_CHARS: usize = 20;

// =============================================================================
// LOWERING CONFIGURATION
// =============================================================================

/// Settings for a single CST to AST lowering pass.
///
/// # Examples
/// ```
/// use config::constants::LowerConfig;
/// let config = LowerConfig::default();
/// assert!(config.max_depth > 0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LowerConfig {
    /// Maximum nesting depth of syntax nodes entered by the cursor.
    pub max_depth: usize,
}

impl LowerConfig {
    /// Builds a configuration, rejecting a depth limit of zero since no
    /// program could be lowered under it.
    ///
    /// # Examples
    /// ```
    /// use config::constants::LowerConfig;
    /// let cfg = LowerConfig::new(32).expect("valid config");
    /// assert_eq!(cfg.max_depth, 32);
    /// assert!(LowerConfig::new(0).is_err());
    /// ```
    pub fn new(max_depth: usize) -> Result<Self, ConfigError> {
        if max_depth == 0 {
            return Err(ConfigError::InvalidDepth(max_depth));
        }
        Ok(Self { max_depth })
    }
}

impl Default for LowerConfig {
    fn default() -> Self {
        Self {
            max_depth: MAX_NESTING_DEPTH,
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, PartialEq)]
pub enum ConfigError {
    /// Raised when the nesting depth limit is zero.
    InvalidDepth(usize),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidDepth(value) => {
                write!(f, "max_depth must be at least 1: {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests;
