use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};
use std::io;
use std::path::{Path, PathBuf};

use ui_codegen::element::element_model::{ElementKind, ElementNode};
use ui_codegen::element::naming::NameConvention;
use ui_codegen::generate::generator::Generator;
use ui_codegen::output::destination::DestinationResolver;
use ui_codegen::output::store::ArtifactStore;

/// `ShopUI` with one button, one label and one untagged node.
pub fn shop_ui() -> ElementNode {
    ElementNode::new("ShopUI", ElementKind::Unknown)
        .with_child(ElementNode::new("BtnClose", ElementKind::Button))
        .with_child(ElementNode::new("LblTitle", ElementKind::Text))
        .with_child(ElementNode::new("unnamed", ElementKind::Unknown))
}

pub fn generator(store: &dyn ArtifactStore) -> Generator<'_> {
    Generator::new(NameConvention::default(), DestinationResolver::new("out"), store)
}

/// In-memory `ArtifactStore` that can be told to fail.
#[derive(Default)]
pub struct MemoryStore {
    files: RefCell<BTreeMap<PathBuf, String>>,
    dirs: RefCell<BTreeSet<PathBuf>>,
    failing_writes: BTreeSet<PathBuf>,
    unreadable: BTreeSet<PathBuf>,
    fail_dirs: bool,
    writes: RefCell<Vec<PathBuf>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(self, path: impl Into<PathBuf>, content: &str) -> Self {
        self.files.borrow_mut().insert(path.into(), content.to_string());
        self
    }

    pub fn failing_write(mut self, path: impl Into<PathBuf>) -> Self {
        self.failing_writes.insert(path.into());
        self
    }

    pub fn unreadable(mut self, path: impl Into<PathBuf>) -> Self {
        self.unreadable.insert(path.into());
        self
    }

    pub fn failing_dirs(mut self) -> Self {
        self.fail_dirs = true;
        self
    }

    pub fn file(&self, path: impl AsRef<Path>) -> Option<String> {
        self.files.borrow().get(path.as_ref()).cloned()
    }

    pub fn put(&self, path: impl Into<PathBuf>, content: &str) {
        self.files.borrow_mut().insert(path.into(), content.to_string());
    }

    pub fn write_count(&self, path: impl AsRef<Path>) -> usize {
        self.writes
            .borrow()
            .iter()
            .filter(|p| p.as_path() == path.as_ref())
            .count()
    }

    pub fn has_dir(&self, path: impl AsRef<Path>) -> bool {
        self.dirs.borrow().contains(path.as_ref())
    }
}

impl ArtifactStore for MemoryStore {
    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        if self.fail_dirs {
            return Err(io::Error::new(io::ErrorKind::PermissionDenied, "read-only volume"));
        }
        self.dirs.borrow_mut().insert(path.to_path_buf());
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        self.files.borrow().contains_key(path)
    }

    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        if self.unreadable.contains(path) {
            return Err(io::Error::new(io::ErrorKind::PermissionDenied, "locked"));
        }
        self.files
            .borrow()
            .get(path)
            .cloned()
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "no such file"))
    }

    fn write(&self, path: &Path, contents: &str) -> io::Result<()> {
        if self.failing_writes.contains(path) {
            return Err(io::Error::new(io::ErrorKind::PermissionDenied, "disk full"));
        }
        self.writes.borrow_mut().push(path.to_path_buf());
        self.files
            .borrow_mut()
            .insert(path.to_path_buf(), contents.to_string());
        Ok(())
    }
}
