//! Integration tests for serialisation support.
//!
//! Compiled only with the `serde` feature: `cargo test --features serde`.

#![cfg(feature = "serde")]

use autodiff_core::math::{ToleranceConfig, UnaryOp};
use autodiff_core::types::OperatorError;

#[test]
fn test_operator_error_roundtrip() {
    for err in [
        OperatorError::NonPositiveLogarithm { value: -1.5 },
        OperatorError::ZeroReciprocal,
    ] {
        let json = serde_json::to_string(&err).unwrap();
        let restored: OperatorError = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, err);
    }
}

#[test]
fn test_operator_error_json_shape() {
    let err = OperatorError::NonPositiveLogarithm { value: -2.0 };
    let json = serde_json::to_string(&err).unwrap();
    assert_eq!(json, r#"{"NonPositiveLogarithm":{"value":-2.0}}"#);
}

#[test]
fn test_tolerance_config_roundtrip() {
    let config: ToleranceConfig<f64> = ToleranceConfig::new(0.25);
    let json = serde_json::to_string(&config).unwrap();
    assert_eq!(json, r#"{"tolerance":0.25}"#);

    let restored: ToleranceConfig<f64> = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, config);
    assert!(restored.is_close(1.0, 1.2));
}

#[test]
fn test_unary_op_roundtrip() {
    for op in UnaryOp::ALL {
        let json = serde_json::to_string(&op).unwrap();
        let restored: UnaryOp = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, op);
    }
    assert_eq!(serde_json::to_string(&UnaryOp::Sigmoid).unwrap(), r#""Sigmoid""#);
}
