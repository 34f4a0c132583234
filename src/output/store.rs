use std::io;
use std::path::Path;

/// Filesystem operations the generator needs. All are plain, non-atomic
/// full-file operations.
pub trait ArtifactStore {
    fn create_dir_all(&self, path: &Path) -> io::Result<()>;
    fn exists(&self, path: &Path) -> bool;
    fn read_to_string(&self, path: &Path) -> io::Result<String>;
    fn write(&self, path: &Path, contents: &str) -> io::Result<()>;
}

/// `ArtifactStore` backed by the local disk.
#[derive(Debug, Clone, Copy, Default)]
pub struct DiskStore;

impl ArtifactStore for DiskStore {
    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        std::fs::create_dir_all(path)
    }

    fn exists(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        std::fs::read_to_string(path)
    }

    fn write(&self, path: &Path, contents: &str) -> io::Result<()> {
        std::fs::write(path, contents)
    }
}
