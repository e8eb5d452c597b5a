//! Tests for the lowering configuration.

use super::*;

/// Ensures the default configuration uses the shared depth constant.
#[test]
fn default_config_uses_max_nesting_depth() {
    let cfg = LowerConfig::default();
    assert_eq!(cfg.max_depth, MAX_NESTING_DEPTH);
}

/// Validates the constructor rejects a zero depth limit.
#[test]
fn new_validates_inputs() {
    assert_eq!(LowerConfig::new(0).unwrap_err(), ConfigError::InvalidDepth(0));
    assert_eq!(LowerConfig::new(1).unwrap().max_depth, 1);
}

#[test]
fn config_error_message_names_the_value() {
    let message = ConfigError::InvalidDepth(0).to_string();
    assert_eq!(message, "max_depth must be at least 1: 0");
}
