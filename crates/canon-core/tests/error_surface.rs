use canon_core::errors::{CanonError, ErrorInfo};

fn sample_info(code: &str, message: &str) -> ErrorInfo {
    ErrorInfo::new(code, message)
        .with_context("node", "1")
        .with_context("reason", "example")
}

#[test]
fn graph_error_surface() {
    let err = CanonError::Graph(sample_info("self-loop", "self loops are not supported"));
    assert_eq!(err.info().code, "self-loop");
    assert!(err.info().context.contains_key("node"));
}

#[test]
fn label_error_surface() {
    let err = CanonError::Label(sample_info("label-missing", "no entry for node"));
    assert_eq!(err.info().code, "label-missing");
    assert!(err.info().context.contains_key("reason"));
}

#[test]
fn invariant_error_surface() {
    let err = CanonError::Invariant(sample_info("refine-overrun", "fixpoint loop exceeded bound"));
    assert_eq!(err.info().code, "refine-overrun");
    assert!(err.to_string().contains("invariant violation"));
}

#[test]
fn serde_error_surface() {
    let err = CanonError::Serde(sample_info("deserialize-json", "schema mismatch"));
    assert_eq!(err.info().code, "deserialize-json");
}

#[test]
fn error_info_round_trips_through_json() {
    let err = CanonError::Label(sample_info("label-missing", "no entry").with_hint("normalize"));
    let json = serde_json::to_string(&err).unwrap();
    let restored: CanonError = serde_json::from_str(&json).unwrap();
    assert_eq!(err, restored);
}
