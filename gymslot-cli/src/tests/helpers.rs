//! Test helpers for writing table files into scratch directories.

use camino::{Utf8Path, Utf8PathBuf};
use tempfile::TempDir;

/// Tables with a single short Monday window and no demographics.
pub(super) const SMALL_TABLES: &str = r#"{
    "hours": { "Monday": { "open": 7, "close": 10 } },
    "crowd": { "Monday": { "07:00": 0.1, "08:00": 0.5, "09:00": 0.9 } },
    "demographics": {}
}"#;

/// Tables that parse but place a crowd level outside `[0, 1]`.
pub(super) const OUT_OF_RANGE_TABLES: &str = r#"{
    "hours": { "Monday": { "open": 7, "close": 10 } },
    "crowd": { "Monday": { "07:00": 1.5 } },
    "demographics": {}
}"#;

/// Tables for a gym that never opens.
pub(super) const CLOSED_TABLES: &str = r#"{ "hours": {}, "crowd": {}, "demographics": {} }"#;

pub(super) fn scratch_dir() -> (TempDir, Utf8PathBuf) {
    let tmp = TempDir::new().expect("tempdir");
    let root = Utf8PathBuf::from_path_buf(tmp.path().to_path_buf()).expect("utf-8 workspace");
    (tmp, root)
}

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    std::fs::write(path.as_std_path(), contents).expect("write scratch file");
}
