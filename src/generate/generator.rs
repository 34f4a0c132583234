use std::path::Path;

use tracing::{info, warn};

use crate::element::element_model::ElementSource;
use crate::element::naming::NameConvention;
use crate::generate::binding::{BindingArtifact, LogicState, render_binding};
use crate::generate::descriptor::ControlDescriptorSet;
use crate::generate::handler::{HandlerDetector, TextualHandlerDetector};
use crate::generate::logic::render_logic;
use crate::output::destination::{DestinationResolver, GenerationTarget};
use crate::output::store::ArtifactStore;
use crate::output::writer::ArtifactWriter;
use crate::report::report_model::{ArtifactStatus, BatchReport, RootReport};
use crate::trace::logger::TraceLogger;
use crate::trace::trace::{ArtifactKind, GenerationEvent};

/// Which artifacts a run should persist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationMode {
    /// Regenerate the binding artifact only.
    Binding,
    /// Scaffold the logic artifact. An existing one is kept unless `force`.
    Logic { force: bool },
    /// Binding, then a logic scaffold for roots that have none.
    All,
}

/// Everything known about one root before rendering.
#[derive(Debug, Clone)]
pub struct GenerationPlan {
    pub target: GenerationTarget,
    pub set: ControlDescriptorSet,
    pub logic: LogicState,
}

/// Both artifacts as text. Nothing has been written yet.
#[derive(Debug, Clone)]
pub struct RenderedArtifacts {
    pub binding: BindingArtifact,
    pub logic: String,
}

// ============================================================================
// Generator: one pass per UI root
// ============================================================================

pub struct Generator<'a> {
    naming: NameConvention,
    resolver: DestinationResolver,
    store: &'a dyn ArtifactStore,
    detector: Box<dyn HandlerDetector>,
    tracer: Option<&'a TraceLogger>,
}

impl<'a> Generator<'a> {
    pub fn new(
        naming: NameConvention,
        resolver: DestinationResolver,
        store: &'a dyn ArtifactStore,
    ) -> Self {
        Self {
            naming,
            resolver,
            store,
            detector: Box::new(TextualHandlerDetector),
            tracer: None,
        }
    }

    pub fn with_detector(mut self, detector: Box<dyn HandlerDetector>) -> Self {
        self.detector = detector;
        self
    }

    pub fn with_tracer(mut self, tracer: &'a TraceLogger) -> Self {
        self.tracer = Some(tracer);
        self
    }

    /// Resolve the destination, collect descriptors and read the current
    /// logic artifact. Nothing is cached between calls.
    pub fn plan(&self, root: &dyn ElementSource) -> GenerationPlan {
        let target = self.resolver.resolve(root.root_name(), self.store);
        let set = ControlDescriptorSet::collect(root, &self.naming);
        let logic = self.read_logic_state(&target);

        GenerationPlan { target, set, logic }
    }

    pub fn render(&self, plan: &GenerationPlan) -> RenderedArtifacts {
        RenderedArtifacts {
            binding: render_binding(&plan.set, &plan.logic, self.detector.as_ref()),
            logic: render_logic(&plan.set),
        }
    }

    /// Generate and persist one root. Never fails: I/O problems are logged
    /// and reported in the returned `RootReport`.
    pub fn run(&self, root: &dyn ElementSource, mode: GenerationMode) -> RootReport {
        let plan = self.plan(root);
        let rendered = self.render(&plan);
        let writer = ArtifactWriter::new(self.store);
        let target = &plan.target;
        let diagnostics: Vec<String> =
            plan.set.diagnostics.iter().map(|d| d.to_string()).collect();

        // A missing folder surfaces again as a failed write below
        writer.prepare_folder(target);

        let mut stubs = rendered.binding.stubbed_handlers.clone();

        let mut binding = match mode {
            GenerationMode::Binding | GenerationMode::All => writer.write_artifact(
                &target.root_name,
                &target.binding_path(),
                &rendered.binding.text,
            ),
            GenerationMode::Logic { .. } => ArtifactStatus::NotRequested,
        };

        let logic = match mode {
            GenerationMode::Binding => ArtifactStatus::NotRequested,
            GenerationMode::All if plan.logic.exists() => ArtifactStatus::skipped("already exists"),
            GenerationMode::All => {
                writer.write_artifact(&target.root_name, &target.logic_path(), &rendered.logic)
            }
            GenerationMode::Logic { force } if plan.logic.exists() && !force => {
                info!(root = %target.root_name, "logic artifact exists, leaving it untouched");
                ArtifactStatus::skipped("already exists; use --force to overwrite")
            }
            GenerationMode::Logic { .. } => {
                let status =
                    writer.write_artifact(&target.root_name, &target.logic_path(), &rendered.logic);

                if status.is_written() && self.store.exists(&target.binding_path()) {
                    let refreshed = self.refresh_binding(&plan, &rendered.logic);
                    binding = writer.write_artifact(
                        &target.root_name,
                        &target.binding_path(),
                        &refreshed.text,
                    );
                    stubs = refreshed.stubbed_handlers;
                }
                status
            }
        };

        if binding != ArtifactStatus::NotRequested {
            let path = target.binding_path();
            self.record(ArtifactKind::Binding, &path, &binding, stubs.len(), &diagnostics, target);
        }
        if logic != ArtifactStatus::NotRequested {
            let handlers = plan.set.interactive().count();
            let path = target.logic_path();
            self.record(ArtifactKind::Logic, &path, &logic, handlers, &diagnostics, target);
        }

        RootReport {
            root: target.root_name.clone(),
            folder: target.folder.display().to_string(),
            descriptors: plan.set.len(),
            handlers: plan.set.interactive().count(),
            stubs_injected: stubs,
            diagnostics,
            binding,
            logic,
        }
    }

    /// Run every root in order. A failing root does not stop the others.
    pub fn run_batch<'r, S>(
        &self,
        roots: impl IntoIterator<Item = &'r S>,
        mode: GenerationMode,
    ) -> BatchReport
    where
        S: ElementSource + 'r,
    {
        BatchReport::from_roots(roots.into_iter().map(|root| self.run(root, mode)).collect())
    }

    fn read_logic_state(&self, target: &GenerationTarget) -> LogicState {
        if !target.logic_exists {
            return LogicState::Absent;
        }

        match self.store.read_to_string(&target.logic_path()) {
            Ok(source) => LogicState::Present { source },
            Err(e) => {
                warn!(
                    root = %target.root_name,
                    path = %target.logic_path().display(),
                    "logic artifact exists but could not be read, stubbing every handler: {}",
                    e
                );
                LogicState::Present {
                    source: String::new(),
                }
            }
        }
    }

    /// Re-render the binding against a freshly scaffolded logic artifact.
    fn refresh_binding(&self, plan: &GenerationPlan, logic_text: &str) -> BindingArtifact {
        let logic = LogicState::Present {
            source: logic_text.to_string(),
        };
        render_binding(&plan.set, &logic, self.detector.as_ref())
    }

    fn record(
        &self,
        artifact: ArtifactKind,
        path: &Path,
        status: &ArtifactStatus,
        stubs: usize,
        diagnostics: &[String],
        target: &GenerationTarget,
    ) {
        if let Some(tracer) = self.tracer {
            let event = GenerationEvent::now(&target.root_name, artifact)
                .with_path(path.display())
                .with_status(status)
                .with_stubs(stubs)
                .with_diagnostics(diagnostics);
            tracer.log(&event);
        }
    }
}
