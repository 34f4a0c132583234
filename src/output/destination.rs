use std::path::PathBuf;

use crate::output::store::ArtifactStore;

/// Suffix stripped from a root name to form its folder name.
pub const ROOT_SUFFIX: &str = "UI";

pub const BINDING_FILE_SUFFIX: &str = "_AutoBind.cs";
pub const LOGIC_FILE_EXTENSION: &str = ".cs";

/// Where one UI root's artifacts live. Resolved fresh on every run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationTarget {
    pub root_name: String,
    pub folder: PathBuf,
    pub binding_file: String,
    pub logic_file: String,
    pub logic_exists: bool,
}

impl GenerationTarget {
    pub fn binding_path(&self) -> PathBuf {
        self.folder.join(&self.binding_file)
    }

    pub fn logic_path(&self) -> PathBuf {
        self.folder.join(&self.logic_file)
    }
}

#[derive(Debug, Clone)]
pub struct DestinationResolver {
    output_path: PathBuf,
}

impl DestinationResolver {
    pub fn new(output_path: impl Into<PathBuf>) -> Self {
        Self {
            output_path: output_path.into(),
        }
    }

    /// Resolve folder and file names and check whether the logic artifact
    /// is already on disk.
    pub fn resolve(&self, root_name: &str, store: &dyn ArtifactStore) -> GenerationTarget {
        let folder = self.output_path.join(folder_name(root_name));
        let logic_file = logic_file_name(root_name);
        let logic_exists = store.exists(&folder.join(&logic_file));

        GenerationTarget {
            root_name: root_name.to_string(),
            folder,
            binding_file: binding_file_name(root_name),
            logic_file,
            logic_exists,
        }
    }
}

/// `InventoryUI` -> `Inventory`; names without the suffix are unchanged.
pub fn folder_name(root_name: &str) -> &str {
    root_name.strip_suffix(ROOT_SUFFIX).unwrap_or(root_name)
}

pub fn binding_file_name(root_name: &str) -> String {
    format!("{}{}", root_name, BINDING_FILE_SUFFIX)
}

pub fn logic_file_name(root_name: &str) -> String {
    format!("{}{}", root_name, LOGIC_FILE_EXTENSION)
}
