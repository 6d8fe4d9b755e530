//! JSON file reading and writing.

use std::fs;
use std::path::Path;

use serde::Serialize;
use serde_json::Value;

use super::config::JsonStyle;
use crate::error::{Error, Result};

/// Read and parse a JSON file.
pub fn read_json(path: &Path) -> Result<Value> {
    let text = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    serde_json::from_str(&text).map_err(|source| Error::MalformedInput {
        context: path.display().to_string(),
        source,
    })
}

/// Encode `value` without touching the filesystem.
pub fn encode_json<T: Serialize + ?Sized>(
    value: &T,
    style: JsonStyle,
    path: &Path,
) -> Result<Vec<u8>> {
    let encoded = match style {
        JsonStyle::Pretty => serde_json::to_vec_pretty(value).map(|mut bytes| {
            bytes.push(b'\n');
            bytes
        }),
        JsonStyle::Compact => serde_json::to_vec(value),
    };
    encoded.map_err(|source| Error::Encode {
        path: path.to_path_buf(),
        source,
    })
}

/// Write `value` to `path`, replacing any previous file.
///
/// Parent directories are created. The document is written to a sibling
/// temp file first and renamed into place, so readers never see a
/// half-written file.
pub fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T, style: JsonStyle) -> Result<()> {
    let bytes = encode_json(value, style, path)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
    }

    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".tmp");
    let tmp = Path::new(&tmp);

    fs::write(tmp, &bytes).map_err(|e| Error::io(tmp, e))?;
    if let Err(e) = fs::rename(tmp, path) {
        let _ = fs::remove_file(tmp);
        return Err(Error::io(path, e));
    }
    Ok(())
}
