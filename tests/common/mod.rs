#![allow(dead_code)]

use std::{path::PathBuf, sync::Arc, sync::Mutex};

use chrono::{DateTime, TimeZone, Utc};
use nestora::config::ConfigManager;
use nestora::core::{Clock, PropertyStore};
use nestora_storage_json::JsonPropertyStorage;
use once_cell::sync::Lazy;
use tempfile::TempDir;

/// Holds TempDir guards so temporary folders live for the duration of the test run.
static TEST_DIRS: Lazy<Mutex<Vec<TempDir>>> = Lazy::new(|| Mutex::new(Vec::new()));

pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

pub fn fixed_clock() -> Arc<FixedClock> {
    Arc::new(FixedClock(
        Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap(),
    ))
}

/// Creates an isolated application directory that outlives the calling test.
pub fn app_dir() -> PathBuf {
    let temp = TempDir::new().expect("create temp dir");
    let base = temp.path().to_path_buf();
    TEST_DIRS.lock().expect("lock temp dir registry").push(temp);
    base
}

/// Store plus config manager backed by files under a fresh app directory.
pub fn setup_test_env() -> (PropertyStore, ConfigManager, PathBuf) {
    let base = app_dir();
    let data_file = base.join("data.json");
    let store = PropertyStore::new(
        Box::new(JsonPropertyStorage::new(data_file.clone())),
        fixed_clock(),
    );
    let config_manager =
        ConfigManager::with_base_dir(&base).expect("create config manager for temp dir");
    (store, config_manager, data_file)
}
