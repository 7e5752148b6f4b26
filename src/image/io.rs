//! JSON helpers for tooling.
//!
//! - `write_json_file`: pretty-print a serializable value to disk.
//! - `read_json_file`: parse a deserializable value from disk.
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| format!("Failed to serialize JSON for {}: {e}", path.display()))?;
    fs::write(path, json).map_err(|e| format!("Failed to write JSON {}: {e}", path.display()))
}

/// Read and parse a JSON document from `path`.
pub fn read_json_file<T: DeserializeOwned>(path: &Path) -> Result<T, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read {}: {e}", path.display()))?;
    serde_json::from_str(&data).map_err(|e| format!("Failed to parse {}: {e}", path.display()))
}

fn ensure_parent_dir(path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create {}: {e}", parent.display()))?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_round_trips_through_nested_dir() {
        let dir = std::env::temp_dir().join(format!("stencil_linebuf_io_{}", std::process::id()));
        let path = dir.join("nested").join("values.json");
        write_json_file(&path, &vec![1, 2, 3]).expect("write");
        let back: Vec<i32> = read_json_file(&path).expect("read");
        assert_eq!(back, vec![1, 2, 3]);
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn missing_file_reports_path() {
        let err = read_json_file::<Vec<i32>>(Path::new("/nonexistent/stencil.json"))
            .expect_err("missing file");
        assert!(err.contains("/nonexistent/stencil.json"), "{err}");
    }
}
