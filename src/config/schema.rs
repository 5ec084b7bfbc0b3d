use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Top-level application settings loaded from `config.toml`.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/segno/config.toml` or `~/.config/segno/config.toml`
///
/// Precedence (highest wins):
/// 1) Environment variables (prefix `SEGNO__`, `__` as nested separator)
/// 2) Config file (if present)
/// 3) Struct defaults
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub library: LibrarySettings,
    pub catalog: CatalogSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            library: LibrarySettings::default(),
            catalog: CatalogSettings::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LibrarySettings {
    /// Root directory of the audio collection. Empty means unconfigured;
    /// generation refuses to run until it is set (or `--root` is passed).
    pub root: String,
    /// File extensions to treat as audio (without dot). The match against a
    /// file's suffix is exact, so `MP3` and `mp3` are distinct.
    pub extensions: Vec<String>,
    /// Whether to follow symlinks during the walk.
    pub follow_links: bool,
    /// Whether to include hidden files/directories (dotfiles).
    pub include_hidden: bool,
    /// Optional cap on directory recursion depth.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_depth: Option<usize>,
}

impl Default for LibrarySettings {
    fn default() -> Self {
        Self {
            root: String::new(),
            extensions: vec!["mp3".into(), "flac".into(), "ogg".into()],
            follow_links: true,
            include_hidden: true,
            max_depth: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogSettings {
    /// Where the serialized catalog document lands.
    pub output: PathBuf,
    /// Hashing threads. 1 keeps the run fully sequential.
    pub workers: usize,
}

impl Default for CatalogSettings {
    fn default() -> Self {
        Self {
            output: PathBuf::from("metadata.json"),
            workers: 1,
        }
    }
}
