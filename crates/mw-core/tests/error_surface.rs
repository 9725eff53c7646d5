use mw_core::{ErrorInfo, MwError};

#[test]
fn context_and_hint_render_in_display() {
    let err = MwError::Ledger(
        ErrorInfo::new("bad-grant-date", "grant date is unparsable")
            .with_context("line", 17)
            .with_hint("expected mm/dd/yyyy"),
    );
    let rendered = err.to_string();
    assert!(rendered.contains("bad-grant-date"));
    assert!(rendered.contains("line=17"));
    assert!(rendered.contains("expected mm/dd/yyyy"));
}

#[test]
fn info_accessor_exposes_payload() {
    let err = MwError::Graph(ErrorInfo::new("unknown-node", "node does not exist"));
    assert_eq!(err.info().code, "unknown-node");
}

#[test]
fn serde_roundtrip_preserves_family_and_payload() {
    let err = MwError::Snapshot(
        ErrorInfo::new("deserialize-yaml", "snapshot document is malformed")
            .with_context("path", "graph_active.yaml"),
    );
    let json = serde_json::to_string(&err).unwrap();
    let back: MwError = serde_json::from_str(&json).unwrap();
    assert_eq!(err, back);
}
