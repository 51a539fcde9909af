macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            std::process::exit(1);
        })
    };
}

pub mod config_ops;
pub mod convert_ops;
pub mod rules_ops;

use std::path::{Path, PathBuf};

use arabica_core::settings::{parse_settings_toml, Settings};
use arabica_session::{FileStore, RuleStore};

pub fn default_store_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("ARABICA_HOME") {
        return PathBuf::from(dir);
    }
    let home = std::env::var("HOME").unwrap_or_else(|_| "/tmp".to_string());
    PathBuf::from(format!("{home}/.config/arabica"))
}

/// Open the rule store in `dir`, or the default location.
pub(crate) fn open_store(dir: Option<&Path>) -> RuleStore<FileStore> {
    let dir = dir.map(Path::to_path_buf).unwrap_or_else(default_store_dir);
    RuleStore::open(FileStore::new(dir))
}

pub(crate) fn load_settings(file: Option<&Path>) -> Settings {
    let Some(file) = file else {
        return Settings::default();
    };
    let content = die!(
        std::fs::read_to_string(file),
        "Error reading {}: {}",
        file.display()
    );
    die!(parse_settings_toml(&content), "Error: {}")
}
