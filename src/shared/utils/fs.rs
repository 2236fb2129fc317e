use std::fs::{self, DirBuilder, OpenOptions};
use std::io::{self, ErrorKind, Write};
use std::path::Path;
use anyhow::{Context, Result};

/// Create a directory (and its parents) unless it already exists.
///
/// Returns `true` when the directory was created by this call.
pub fn create_dir_if_absent<P: AsRef<Path>>(path: P) -> Result<bool> {
    let path = path.as_ref();
    if path.is_dir() {
        return Ok(false);
    }

    let mut builder = DirBuilder::new();
    builder.recursive(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(0o755);
    }

    builder
        .create(path)
        .with_context(|| format!("Failed to create directory: {}", path.display()))?;

    Ok(true)
}

/// Write `content` to a new file, leaving any existing file untouched.
///
/// The file is opened with `create_new`, so the existence check and the
/// creation are a single operation. Returns `true` when the file was written.
pub fn write_if_absent<P: AsRef<Path>>(path: P, content: &str) -> Result<bool> {
    let path = path.as_ref();
    let mut file = match OpenOptions::new().write(true).create_new(true).open(path) {
        Ok(file) => file,
        Err(err) if err.kind() == ErrorKind::AlreadyExists => return Ok(false),
        Err(err) => {
            return Err(err).with_context(|| format!("Failed to create file: {}", path.display()))
        }
    };

    file.write_all(content.as_bytes())
        .with_context(|| format!("Failed to write file: {}", path.display()))?;

    Ok(true)
}

/// Names of the immediate subdirectories of `path`, in directory-listing order.
pub fn subdirectory_names<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let mut names = Vec::new();

    for entry in fs::read_dir(path)? {
        let entry = entry?;
        if entry.file_type()?.is_dir() {
            names.push(entry.file_name().to_string_lossy().to_string());
        }
    }

    Ok(names)
}
