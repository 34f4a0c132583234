use std::path::Path;

use tracing::{error, info};

use crate::output::destination::GenerationTarget;
use crate::output::store::ArtifactStore;
use crate::report::report_model::ArtifactStatus;

/// Persists rendered artifacts. Failures are logged and returned as
/// `ArtifactStatus::Failed`, never propagated.
pub struct ArtifactWriter<'a> {
    store: &'a dyn ArtifactStore,
}

impl<'a> ArtifactWriter<'a> {
    pub fn new(store: &'a dyn ArtifactStore) -> Self {
        Self { store }
    }

    /// Create the destination folder. A failure is logged and the caller
    /// still attempts the writes.
    pub fn prepare_folder(&self, target: &GenerationTarget) {
        if let Err(e) = self.store.create_dir_all(&target.folder) {
            error!(
                root = %target.root_name,
                path = %target.folder.display(),
                "failed to create destination folder: {}",
                e
            );
        }
    }

    pub fn write_artifact(&self, root: &str, path: &Path, text: &str) -> ArtifactStatus {
        let previous = if self.store.exists(path) {
            self.store.read_to_string(path).ok().map(|p| text_fingerprint(&p))
        } else {
            None
        };

        match self.store.write(path, text) {
            Ok(()) => {
                let fingerprint = text_fingerprint(text);
                let changed = previous.as_deref() != Some(fingerprint.as_str());
                info!(root, path = %path.display(), changed, "wrote artifact");
                ArtifactStatus::Written {
                    fingerprint,
                    changed,
                }
            }
            Err(e) => {
                error!(root, path = %path.display(), "failed to write artifact: {}", e);
                ArtifactStatus::failed(format!("{}: {}", path.display(), e))
            }
        }
    }
}

/// SHA-1 of the artifact text, hex encoded.
pub fn text_fingerprint(text: &str) -> String {
    use sha1::{Digest, Sha1};

    let mut hasher = Sha1::new();
    hasher.update(text.as_bytes());
    format!("{:x}", hasher.finalize())
}
