use std::{fs, path::Path};

use serde::{Deserialize, Serialize};

use crate::core::{Error, Result};

/* ============================ Session sidecar ============================ */

/// The prefix/suffix text pair a session persists between runs. Field names
/// double as the JSON keys; either key may be absent on load and defaults to
/// the empty string. Unknown keys in the file are ignored.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct SessionText {
    #[serde(default)]
    pub start_text: String,
    #[serde(default)]
    pub end_text: String,
}

/// Write the pair as pretty-printed JSON (4-space indent). The write goes
/// through a sibling tmp file and a rename, so a failed save never leaves a
/// partial file at `path`.
pub fn save_session(path: &Path, text: &SessionText) -> Result<()> {
    let mut buf = Vec::with_capacity(128);
    let fmt = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, fmt);
    text.serialize(&mut ser).map_err(|source| Error::SessionFormat {
        path: path.to_path_buf(),
        source,
    })?;
    buf.push(b'\n');

    let tmp = path.with_extension("json.tmp");
    let write_err = |source| Error::WriteFile {
        path: path.to_path_buf(),
        source,
    };
    fs::write(&tmp, buf).map_err(write_err)?;
    fs::rename(&tmp, path).map_err(write_err)?;
    Ok(())
}

pub fn load_session(path: &Path) -> Result<SessionText> {
    let data = fs::read(path).map_err(|source| Error::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_slice(&data).map_err(|source| Error::SessionFormat {
        path: path.to_path_buf(),
        source,
    })
}
