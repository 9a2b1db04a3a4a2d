//! Test helpers for staging order and network files.

use camino::{Utf8Path, Utf8PathBuf};
use tempfile::TempDir;

/// Write `contents` to `path`, panicking on failure.
pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    std::fs::write(path, contents).expect("write test file");
}

/// A temporary directory holding the files a solve invocation reads.
#[derive(Debug)]
pub(super) struct Workspace {
    _dir: TempDir,
    root: Utf8PathBuf,
}

impl Workspace {
    pub(super) fn new() -> Self {
        let dir = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 workspace");
        Self { _dir: dir, root }
    }

    pub(super) fn path(&self, name: &str) -> Utf8PathBuf {
        self.root.join(name)
    }

    /// Write an order file and return its path.
    pub(super) fn order(&self, json: &str) -> Utf8PathBuf {
        let path = self.path("order.json");
        write_utf8(&path, json.as_bytes());
        path
    }

    /// Write a two-location network where product `A` weighs 3 at `C1`.
    pub(super) fn small_network(&self) -> Utf8PathBuf {
        let path = self.path("network.json");
        write_utf8(
            &path,
            br#"{
                "hub": "L1",
                "distances": { "C1": { "L1": 4.0 }, "L1": { "C1": 4.0 } },
                "products": { "A": { "center": "C1", "weight": 3.0 } }
            }"#,
        );
        path
    }
}
