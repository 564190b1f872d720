use std::collections::HashSet;
use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};

use crate::config::{STDERR, STDOUT};
use crate::error::{Error, Result};
use crate::{Locked, OutputConfig, Tee};

/// Opens every configured output and combines them into one shared sink.
///
/// Files are committed with `sync_all`, the standard streams with `flush`.
/// Paths naming the same file, such as `app.log` and `./app.log`, are opened
/// once. The first path that cannot be opened aborts the call; outputs
/// opened before it are closed again.
pub fn open(config: &OutputConfig) -> Result<Locked<Tee>> {
    let mut tee = Tee::new();
    let mut seen = HashSet::new();

    for path in &config.paths {
        if !seen.insert(output_key(path)) {
            continue;
        }
        match path.as_str() {
            STDOUT => tee.push(io::stdout()),
            STDERR => tee.push(io::stderr()),
            file => tee.push(open_file(Path::new(file), config)?),
        }
        tracing::debug!(path = %path, append = config.append, "opened output");
    }

    Ok(Locked::new(tee))
}

/// Identity of an output for deduplication. Files compare by absolute path
/// without resolving symlinks.
fn output_key(path: &str) -> PathBuf {
    match path {
        STDOUT | STDERR => PathBuf::from(path),
        file => std::path::absolute(file).unwrap_or_else(|_| PathBuf::from(file)),
    }
}

fn open_file(path: &Path, config: &OutputConfig) -> Result<File> {
    if config.create_dirs
        && let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty())
    {
        fs::create_dir_all(parent)
            .map_err(|source| Error::CreateDir { path: path.to_path_buf(), source })?;
    }

    OpenOptions::new()
        .create(true)
        .write(true)
        .append(config.append)
        .truncate(!config.append)
        .open(path)
        .map_err(|source| Error::Open { path: path.to_path_buf(), source })
}
