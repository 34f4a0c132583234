use std::path::Path;

use tracing::info;

use crate::cli::config::{AppConfig, TreeArgs};
use crate::element::element_model::UiDocument;
use crate::generate::generator::{GenerationMode, Generator};
use crate::output::destination::DestinationResolver;
use crate::output::store::ArtifactStore;
use crate::report::console::format_console_report;
use crate::report::report_model::BatchReport;
use crate::trace::logger::TraceLogger;

// ============================================================================
// bind / logic / all subcommands
// ============================================================================

/// Generate artifacts for the selected roots and print the report.
/// Returns whether every artifact was persisted.
pub fn cmd_generate(
    input: &TreeArgs,
    mode: GenerationMode,
    config: &AppConfig,
    store: &dyn ArtifactStore,
) -> Result<bool, Box<dyn std::error::Error>> {
    let report = generate_from_tree(&input.tree, &input.roots, mode, config, store)?;
    print!("{}", format_console_report(&report));
    Ok(report.all_succeeded())
}

/// Load the tree, select roots and run the generator over them.
///
/// Only document problems (unreadable file, unknown root) are errors;
/// per-root persistence failures end up in the report.
pub fn generate_from_tree(
    tree: &Path,
    roots: &[String],
    mode: GenerationMode,
    config: &AppConfig,
    store: &dyn ArtifactStore,
) -> Result<BatchReport, Box<dyn std::error::Error>> {
    let document = UiDocument::load(tree)?;
    let selected = document.select(roots)?;

    info!(
        tree = %tree.display(),
        roots = selected.len(),
        ?mode,
        "generating UI code"
    );

    let tracer = match &config.trace.file {
        Some(path) => TraceLogger::new(Path::new(path)),
        None => TraceLogger::disabled(),
    };

    let generator = build_generator(config, store).with_tracer(&tracer);
    Ok(generator.run_batch(selected, mode))
}

// ============================================================================
// preview subcommand
// ============================================================================

/// Render both artifacts for one root to a string, writing nothing.
pub fn render_preview(
    tree: &Path,
    root: &str,
    config: &AppConfig,
    store: &dyn ArtifactStore,
) -> Result<String, Box<dyn std::error::Error>> {
    let document = UiDocument::load(tree)?;
    let selected = document.select(&[root.to_string()])?;

    let generator = build_generator(config, store);
    let mut out = String::new();

    for node in selected {
        let plan = generator.plan(node);
        let rendered = generator.render(&plan);

        out.push_str(&format!("// ---- {} ----\n", plan.target.binding_path().display()));
        out.push_str(&rendered.binding.text);
        out.push_str(&format!("\n// ---- {} ", plan.target.logic_path().display()));
        if plan.logic.exists() {
            out.push_str("(exists, not rewritten) ");
        }
        out.push_str("----\n");
        out.push_str(&rendered.logic);

        for diagnostic in &plan.set.diagnostics {
            out.push_str(&format!("// [WARN] {}\n", diagnostic));
        }
    }

    Ok(out)
}

pub fn cmd_preview(
    tree: &Path,
    root: &str,
    config: &AppConfig,
    store: &dyn ArtifactStore,
) -> Result<(), Box<dyn std::error::Error>> {
    print!("{}", render_preview(tree, root, config, store)?);
    Ok(())
}

// ============================================================================
// Helpers
// ============================================================================

pub fn build_generator<'a>(config: &AppConfig, store: &'a dyn ArtifactStore) -> Generator<'a> {
    Generator::new(
        config.naming_convention(),
        DestinationResolver::new(&config.output.path),
        store,
    )
}
