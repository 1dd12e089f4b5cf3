//! Configuration types for qfrag.
//!
//! [`Config::load`] reads `~/.config/qfrag/config.toml`, creating it with
//! hardcoded defaults if it does not yet exist. [`Config::load_from`] reads an
//! explicit file instead. [`Config::defaults`] returns the same defaults
//! without touching the filesystem (useful in tests).

use serde::Deserialize;
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
[output]
pretty = true

[collapse]
# max_concurrent_group_searches = 4

[inner_hits]
# size = 3
"#;

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level application configuration, loaded from `~/.config/qfrag/config.toml`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub collapse: CollapseDefaults,
    #[serde(default)]
    pub inner_hits: InnerHitDefaults,
}

/// `[output]` section of `config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_pretty")]
    pub pretty: bool,
}

fn default_pretty() -> bool { true }

impl Default for OutputConfig {
    fn default() -> Self {
        Self { pretty: default_pretty() }
    }
}

/// `[collapse]` section. Values here only fill in what the command line
/// leaves unset.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CollapseDefaults {
    #[serde(default)]
    pub max_concurrent_group_searches: Option<i64>,
}

/// `[inner_hits]` section.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct InnerHitDefaults {
    #[serde(default)]
    pub size: Option<i64>,
}

impl Config {
    /// Load from `~/.config/qfrag/config.toml`, layered on top of the built-in
    /// defaults. Creates the file with defaults if it does not exist.
    pub fn load() -> anyhow::Result<Self> {
        Self::load_or_create(&config_path())
    }

    /// Load `path`, first writing the built-in defaults to it if it does not
    /// exist. An existing file is never rewritten.
    pub fn load_or_create(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(path, DEFAULT_CONFIG.trim_start())?;
            tracing::debug!(path = %path.display(), "wrote default config");
        }

        Self::load_from(path)
    }

    /// Load `path` layered on top of the built-in defaults. The file must exist.
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(config::File::from(path).required(true))
            .build()?
            .try_deserialize()
            .map_err(Into::into)
    }

    /// Return the built-in defaults without touching the filesystem.
    pub fn defaults() -> Self {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .build()
            .expect("built-in default config must be valid TOML")
            .try_deserialize()
            .expect("built-in default config must deserialize correctly")
    }
}

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

fn config_path() -> PathBuf {
    resolve_config_path(
        std::env::var("XDG_CONFIG_HOME").ok(),
        std::env::var("HOME").ok(),
    )
}

/// `$XDG_CONFIG_HOME/qfrag/config.toml`, else `$HOME/.config/qfrag/config.toml`,
/// else relative to the working directory.
fn resolve_config_path(xdg_config_home: Option<String>, home: Option<String>) -> PathBuf {
    xdg_config_home
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(home.unwrap_or_else(|| ".".to_string())).join(".config"))
        .join("qfrag")
        .join("config.toml")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_load() {
        let cfg = Config::defaults();
        assert!(cfg.output.pretty);
        assert_eq!(cfg.collapse.max_concurrent_group_searches, None);
        assert_eq!(cfg.inner_hits.size, None);
    }

    #[test]
    fn file_overrides_defaults() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            "[output]\npretty = false\n\n[collapse]\nmax_concurrent_group_searches = -2\n\n[inner_hits]\nsize = 3"
        )
        .unwrap();

        let cfg = Config::load_from(file.path()).unwrap();
        assert!(!cfg.output.pretty);
        assert_eq!(cfg.collapse.max_concurrent_group_searches, Some(-2));
        assert_eq!(cfg.inner_hits.size, Some(3));
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "[inner_hits]\nsize = 1").unwrap();

        let cfg = Config::load_from(file.path()).unwrap();
        assert!(cfg.output.pretty);
        assert_eq!(cfg.inner_hits.size, Some(1));
    }

    #[test]
    fn load_or_create_writes_defaults_on_first_run() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("qfrag").join("config.toml");

        let cfg = Config::load_or_create(&path).unwrap();
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            DEFAULT_CONFIG.trim_start()
        );
        assert!(cfg.output.pretty);
        assert_eq!(cfg.collapse.max_concurrent_group_searches, None);
        assert_eq!(cfg.inner_hits.size, None);
    }

    #[test]
    fn load_or_create_keeps_an_edited_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        Config::load_or_create(&path).unwrap();

        let edited = "[output]\npretty = false\n";
        std::fs::write(&path, edited).unwrap();

        let cfg = Config::load_or_create(&path).unwrap();
        assert!(!cfg.output.pretty);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), edited);
    }

    #[test]
    fn config_path_prefers_xdg_config_home() {
        let path = resolve_config_path(Some("/xdg".into()), Some("/home/me".into()));
        assert_eq!(path, PathBuf::from("/xdg/qfrag/config.toml"));
    }

    #[test]
    fn config_path_falls_back_to_home() {
        let path = resolve_config_path(None, Some("/home/me".into()));
        assert_eq!(path, PathBuf::from("/home/me/.config/qfrag/config.toml"));

        let path = resolve_config_path(None, None);
        assert_eq!(path, PathBuf::from("./.config/qfrag/config.toml"));
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(Config::load_from(&dir.path().join("absent.toml")).is_err());
    }
}
