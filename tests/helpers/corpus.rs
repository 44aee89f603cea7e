//! Temporary scenario corpora on disk.

use std::fs;
use std::path::Path;

use tempfile::TempDir;

/// Create `<tmp>/<req>/<file>` for every entry.
pub fn corpus(files: &[(&str, &str, &str)]) -> TempDir {
    let dir = tempfile::tempdir().expect("tempdir");
    for (req, file, text) in files {
        write_file(dir.path(), req, file, text);
    }
    dir
}

pub fn write_file(root: &Path, req: &str, file: &str, text: &str) {
    let req_dir = root.join(req);
    fs::create_dir_all(&req_dir).expect("create requirement dir");
    fs::write(req_dir.join(file), text).expect("write scenario");
}
