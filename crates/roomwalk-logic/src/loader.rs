//! Reading and writing map files (JSON).

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::map::Map;

/// Errors that can occur while loading or saving a map.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("cannot find map file {}", .0.display())]
    NotFound(PathBuf),
    #[error("IO error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("malformed map data: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Load a map from a JSON file.
pub fn load_map(path: impl AsRef<Path>) -> Result<Map, LoadError> {
    let path = path.as_ref();
    let data = fs::read_to_string(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => LoadError::NotFound(path.to_path_buf()),
        _ => LoadError::Io {
            path: path.to_path_buf(),
            source,
        },
    })?;
    let map = parse_map(&data)?;
    log::info!("loaded {} rooms from {}", map.len(), path.display());
    Ok(map)
}

/// Parse a map from JSON text.
pub fn parse_map(data: &str) -> Result<Map, LoadError> {
    Ok(serde_json::from_str(data)?)
}

/// Write a map as pretty-printed JSON, replacing any existing file.
pub fn save_map(path: impl AsRef<Path>, map: &Map) -> Result<(), LoadError> {
    let path = path.as_ref();
    let data = serde_json::to_string_pretty(map)?;
    fs::write(path, data).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    log::info!("wrote {} rooms to {}", map.len(), path.display());
    Ok(())
}
