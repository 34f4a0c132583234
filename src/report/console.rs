use crate::report::report_model::{ArtifactStatus, BatchReport};

// ============================================================================
// Console reporter: formatted terminal output
// ============================================================================

/// Format a batch report for terminal output.
///
/// Produces output like:
/// ```text
/// === UI Code Generation ===
///
/// ✓ ShopUI -> Assets/Script/UI/Shop (2 controls, 1 handlers, 0 stubs)
///     binding: written (changed) 3f2a9c1d
///     logic:   written (changed) 9b81e0aa
/// ✗ BagUI -> Assets/Script/UI/Bag (1 controls, 1 handlers, 1 stubs)
///     binding: FAILED Assets/Script/UI/Bag/BagUI_AutoBind.cs: permission denied
///     logic:   skipped (already exists)
///
/// === Results: 1 ok, 1 failed (2 roots), 0 diagnostics ===
/// ```
pub fn format_console_report(report: &BatchReport) -> String {
    let mut out = String::new();

    out.push_str("=== UI Code Generation ===\n\n");

    for root in &report.roots {
        let marker = if root.has_failures() {
            "\u{2717}"
        } else {
            "\u{2713}"
        };

        out.push_str(&format!(
            "{} {} -> {} ({} controls, {} handlers, {} stubs)\n",
            marker,
            root.root,
            root.folder,
            root.descriptors,
            root.handlers,
            root.stubs_injected.len()
        ));

        out.push_str(&format!("    binding: {}\n", format_status(&root.binding)));
        out.push_str(&format!("    logic:   {}\n", format_status(&root.logic)));

        for diagnostic in &root.diagnostics {
            out.push_str(&format!("    [WARN] {}\n", diagnostic));
        }
    }

    let failed = report.failed_roots();
    out.push_str(&format!(
        "\n=== Results: {} ok, {} failed ({} roots), {} diagnostics ===\n",
        report.roots.len() - failed,
        failed,
        report.roots.len(),
        report.diagnostic_count()
    ));

    out
}

fn format_status(status: &ArtifactStatus) -> String {
    match status {
        ArtifactStatus::NotRequested => "-".to_string(),
        ArtifactStatus::Written {
            fingerprint,
            changed,
        } => {
            let short = &fingerprint[..fingerprint.len().min(8)];
            let state = if *changed { "changed" } else { "unchanged" };
            format!("written ({}) {}", state, short)
        }
        ArtifactStatus::Skipped { reason } => format!("skipped ({})", reason),
        ArtifactStatus::Failed { message } => format!("FAILED {}", message),
    }
}
