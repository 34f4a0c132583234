use ui_codegen::report::console::format_console_report;
use ui_codegen::report::report_model::{ArtifactStatus, BatchReport, RootReport};
use ui_codegen::trace::trace::{ArtifactKind, GenerationEvent};

// ============================================================================
// Helper builders
// ============================================================================

fn ok_root(name: &str) -> RootReport {
    RootReport {
        root: name.to_string(),
        folder: format!("out/{}", name.trim_end_matches("UI")),
        descriptors: 2,
        handlers: 1,
        stubs_injected: vec![],
        diagnostics: vec![],
        binding: ArtifactStatus::Written {
            fingerprint: "3f2a9c1d0b7e44aa".into(),
            changed: true,
        },
        logic: ArtifactStatus::skipped("already exists"),
    }
}

fn failed_root(name: &str) -> RootReport {
    RootReport {
        binding: ArtifactStatus::failed("out/Bag/BagUI_AutoBind.cs: disk full"),
        stubs_injected: vec!["OnBtnSortClick".into()],
        diagnostics: vec!["duplicate identifier 'BtnSort' at child #2 (first defined at child #0), skipped".into()],
        ..ok_root(name)
    }
}

// ============================================================================
// Report model
// ============================================================================

#[test]
fn batch_counts_failures_and_diagnostics() {
    let report = BatchReport::from_roots(vec![ok_root("ShopUI"), failed_root("BagUI")]);
    assert_eq!(report.failed_roots(), 1);
    assert!(!report.all_succeeded());
    assert_eq!(report.diagnostic_count(), 1);

    let clean = BatchReport::from_roots(vec![ok_root("ShopUI")]);
    assert!(clean.all_succeeded());
    assert!(BatchReport::default().all_succeeded());
}

#[test]
fn status_labels() {
    assert_eq!(ArtifactStatus::NotRequested.label(), "not_requested");
    assert_eq!(ArtifactStatus::skipped("x").label(), "skipped");
    assert_eq!(ArtifactStatus::failed("x").label(), "failed");
    assert!(ArtifactStatus::failed("x").is_failed());
    assert!(!ArtifactStatus::skipped("x").is_written());
}

// ============================================================================
// Console reporter
// ============================================================================

#[test]
fn console_report_lists_each_root() {
    let report = BatchReport::from_roots(vec![ok_root("ShopUI"), failed_root("BagUI")]);
    let out = format_console_report(&report);

    assert!(out.starts_with("=== UI Code Generation ===\n\n"));
    assert!(out.contains("\u{2713} ShopUI -> out/Shop (2 controls, 1 handlers, 0 stubs)\n"));
    assert!(out.contains("    binding: written (changed) 3f2a9c1d\n"));
    assert!(out.contains("    logic:   skipped (already exists)\n"));
    assert!(out.contains("\u{2717} BagUI -> out/Bag (2 controls, 1 handlers, 1 stubs)\n"));
    assert!(out.contains("    binding: FAILED out/Bag/BagUI_AutoBind.cs: disk full\n"));
    assert!(out.contains("    [WARN] duplicate identifier 'BtnSort'"));
    assert!(out.ends_with("=== Results: 1 ok, 1 failed (2 roots), 1 diagnostics ===\n"));
}

#[test]
fn console_report_marks_unchanged_and_not_requested() {
    let mut root = ok_root("ShopUI");
    root.binding = ArtifactStatus::Written {
        fingerprint: "abc".into(),
        changed: false,
    };
    root.logic = ArtifactStatus::NotRequested;

    let out = format_console_report(&BatchReport::from_roots(vec![root]));
    assert!(out.contains("    binding: written (unchanged) abc\n"));
    assert!(out.contains("    logic:   -\n"));
}

// ============================================================================
// Journal events
// ============================================================================

#[test]
fn generation_event_serializes_status_details() {
    let event = GenerationEvent::now("ShopUI", ArtifactKind::Logic)
        .with_path("out/Shop/ShopUI.cs")
        .with_status(&ArtifactStatus::skipped("already exists"))
        .with_stubs(1);

    let json: serde_json::Value = serde_json::to_value(&event).unwrap();
    assert_eq!(json["root"], "ShopUI");
    assert_eq!(json["artifact"], "logic");
    assert_eq!(json["outcome"], "skipped");
    assert_eq!(json["detail"], "already exists");
    assert!(json["fingerprint"].is_null());
    assert_eq!(json["stubs"], 1);
}
