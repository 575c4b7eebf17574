use std::{
    fs::{self, File},
    io::{ErrorKind, Write},
    path::{Path, PathBuf},
};

use nestora_core::{storage::PropertyStorage, CoreError};
use nestora_domain::Property;

const TMP_SUFFIX: &str = "tmp";

/// Single-file JSON persistence for the property tree.
///
/// The file holds a pretty-printed array of properties with nested units,
/// leases and payments. Saves go through a temporary sibling file that is
/// renamed over the target, so an interrupted write never truncates the
/// previous data.
#[derive(Debug, Clone)]
pub struct JsonPropertyStorage {
    path: PathBuf,
}

impl JsonPropertyStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl PropertyStorage for JsonPropertyStorage {
    fn load(&self) -> Result<Vec<Property>, CoreError> {
        match load_properties_from_path(&self.path) {
            Err(CoreError::Io(err)) if err.kind() == ErrorKind::NotFound => {
                tracing::info!(
                    path = %self.path.display(),
                    "no data file found; starting with an empty portfolio"
                );
                Ok(Vec::new())
            }
            other => other,
        }
    }

    fn save(&self, properties: &[Property]) -> Result<(), CoreError> {
        save_properties_to_path(properties, &self.path)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Saves the property tree to an arbitrary path on disk.
pub fn save_properties_to_path(properties: &[Property], path: &Path) -> Result<(), CoreError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let tmp = tmp_path(path);
    write_atomic(&tmp, &serialize_properties(properties)?)?;
    if let Err(err) = fs::rename(&tmp, path) {
        let _ = fs::remove_file(&tmp);
        return Err(err.into());
    }
    tracing::debug!(path = %path.display(), properties = properties.len(), "data file written");
    Ok(())
}

/// Loads the property tree from the provided filesystem path.
pub fn load_properties_from_path(path: &Path) -> Result<Vec<Property>, CoreError> {
    let data = fs::read_to_string(path)?;
    serde_json::from_str(&data).map_err(|err| {
        CoreError::Serde(format!("{} is not a valid data file: {err}", path.display()))
    })
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_atomic(path: &Path, data: &str) -> Result<(), CoreError> {
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    file.sync_all()?;
    Ok(())
}

fn serialize_properties(properties: &[Property]) -> Result<String, CoreError> {
    serde_json::to_string_pretty(properties).map_err(|err| CoreError::Serde(err.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tmp_path_appends_suffix() {
        assert_eq!(
            tmp_path(Path::new("/data/data.json")),
            PathBuf::from("/data/data.json.tmp")
        );
        assert_eq!(tmp_path(Path::new("/data/store")), PathBuf::from("/data/store.tmp"));
    }
}
