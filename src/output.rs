use std::fs;
use std::io::Write;
use std::path::Path;

use serde::Serialize;
use tempfile::NamedTempFile;

use crate::error::DocumentError;

/// Pretty-print `value` with a 4-space indent.
pub fn to_json<T: Serialize>(value: &T) -> Result<Vec<u8>, DocumentError> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut ser)?;
    Ok(buf)
}

/// Write `bytes` next to `path` and rename over it, so readers never see
/// a half-written file.
pub fn write_atomic(path: &Path, bytes: &[u8]) -> Result<(), DocumentError> {
    let dir = parent_dir(path);
    let mut tmp = NamedTempFile::new_in(dir).map_err(|e| DocumentError::write(path, e))?;
    tmp.write_all(bytes)
        .and_then(|_| tmp.flush())
        .map_err(|e| DocumentError::write(path, e))?;
    // Temp files are created owner-only; records must stay readable by others.
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        tmp.as_file()
            .set_permissions(fs::Permissions::from_mode(0o644))
            .map_err(|e| DocumentError::write(path, e))?;
    }
    tmp.persist(path)
        .map_err(|e| DocumentError::write(path, e.error))?;
    Ok(())
}

/// Copy `from` to `to` through a temp file in the destination directory.
pub fn copy_atomic(from: &Path, to: &Path) -> Result<u64, DocumentError> {
    let err = |source: std::io::Error| DocumentError::ImageCopy {
        from: from.to_path_buf(),
        to: to.to_path_buf(),
        source,
    };
    let tmp = NamedTempFile::new_in(parent_dir(to)).map_err(err)?;
    let bytes = fs::copy(from, tmp.path()).map_err(err)?;
    tmp.persist(to).map_err(|e| err(e.error))?;
    Ok(bytes)
}

fn parent_dir(path: &Path) -> &Path {
    match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    }
}
