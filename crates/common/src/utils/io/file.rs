use std::{
    fs::File,
    io::{Read, Write},
    path::Path,
};

use eyre::Result;

/// Write contents to a file on the disc, creating parent directories as needed.
///
/// ```no_run
/// use abiscan_common::utils::io::file::write_file;
///
/// let path = std::path::Path::new("/tmp/abiscan/config.toml");
/// let result = write_file(path, "rpc_url = \"\"");
/// ```
pub fn write_file(path: &Path, contents: &str) -> Result<()> {
    std::fs::create_dir_all(
        path.parent().ok_or_else(|| eyre::eyre!("unable to create directory"))?,
    )?;

    let mut file = File::create(path)?;
    file.write_all(contents.as_bytes())?;

    Ok(())
}

/// Read contents from a file on the disc
pub fn read_file(path: &Path) -> Result<String> {
    let mut file = File::open(path)?;
    let mut contents = String::new();
    file.read_to_string(&mut contents)?;
    Ok(contents)
}

/// Delete a file or directory from the disc. Returns `true` if nothing is left at `path`.
pub fn delete_path(path: &Path) -> bool {
    let result = if path.is_dir() {
        std::fs::remove_dir_all(path)
    } else {
        std::fs::remove_file(path)
    };

    match result {
        Ok(()) => true,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => true,
        Err(e) => {
            tracing::debug!("failed to delete '{}': {e}", path.display());
            false
        }
    }
}
