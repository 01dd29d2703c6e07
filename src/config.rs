/// Settings for the command-line converter, read from `sectionmark.toml` when present
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::warn;

pub const DEFAULT_SOURCE: &str = "./README";
pub const DEFAULT_DESTINATION: &str = "./readme-to";
pub const DEFAULT_TITLE: &str = "Internetified!";
pub const DEFAULT_PROMPT_ATTEMPTS: usize = 1;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read {}: {source}", path.display())]
    Unreadable {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid settings in {}: {source}", path.display())]
    Invalid {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Every field is optional; anything left out falls back to the command line,
/// a prompt, or the defaults above.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Markdown file to read.
    pub source: Option<PathBuf>,
    /// Where the HTML goes.
    pub destination: Option<PathBuf>,
    /// Page title written into `<title>`.
    pub title: Option<String>,
    /// How many times `--prompt` asks for a path before using the default.
    pub prompt_attempts: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            source: None,
            destination: None,
            title: None,
            prompt_attempts: DEFAULT_PROMPT_ATTEMPTS,
        }
    }
}

impl Config {
    /// `Ok(None)` when there is no file at `path`.
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Option<Self>, ConfigError> {
        let path = path.as_ref();
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(ConfigError::Unreadable {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        let config: Config = toml::from_str(&content).map_err(|source| ConfigError::Invalid {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(Some(Config {
            source: config.source.map(expand_path),
            destination: config.destination.map(expand_path),
            ..config
        }))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        Self::load_from_path(Self::config_path())
    }

    pub fn config_path() -> PathBuf {
        PathBuf::from("sectionmark.toml")
    }

    pub fn title(&self) -> &str {
        self.title.as_deref().unwrap_or(DEFAULT_TITLE)
    }
}

/// Expands `~` and `$VAR`; a path naming an unset variable is kept as written.
fn expand_path(path: PathBuf) -> PathBuf {
    let expanded = shellexpand::full(&path.to_string_lossy()).map(|text| text.into_owned());
    match expanded {
        Ok(text) => PathBuf::from(text),
        Err(err) => {
            warn!(path = %path.display(), %err, "leaving config path unexpanded");
            path
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_config_file_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("nonexistent.toml");

        assert!(Config::load_from_path(&missing).unwrap().is_none());
    }

    #[test]
    fn test_load_full_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("sectionmark.toml");
        std::fs::write(
            &config_file,
            r#"
source = "/docs/guide.md"
destination = "/site/guide.html"
title = "Guide"
prompt_attempts = 3
"#,
        )
        .unwrap();

        let config = Config::load_from_path(&config_file).unwrap().unwrap();
        assert_eq!(config.source, Some(PathBuf::from("/docs/guide.md")));
        assert_eq!(config.destination, Some(PathBuf::from("/site/guide.html")));
        assert_eq!(config.title(), "Guide");
        assert_eq!(config.prompt_attempts, 3);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let config: Config = toml::from_str("title = \"Only a title\"").unwrap();
        assert_eq!(config.source, None);
        assert_eq!(config.prompt_attempts, DEFAULT_PROMPT_ATTEMPTS);
        assert_eq!(Config::default().title(), DEFAULT_TITLE);
    }

    #[test]
    fn test_invalid_toml_is_parse_error() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("sectionmark.toml");
        std::fs::write(&config_file, "prompt_attempts = \"many\"").unwrap();

        let err = Config::load_from_path(&config_file).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { .. }));
        assert!(err.to_string().starts_with("invalid settings in "));
    }

    #[test]
    fn test_unset_variable_keeps_path() {
        let path = PathBuf::from("$SECTIONMARK_UNSET_FOR_TEST/notes.md");
        assert_eq!(expand_path(path.clone()), path);
    }

    #[test]
    fn test_directory_is_unreadable() {
        let temp_dir = TempDir::new().unwrap();

        let err = Config::load_from_path(temp_dir.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Unreadable { .. }));
    }

    #[test]
    fn test_source_path_tilde_is_expanded() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("sectionmark.toml");
        std::fs::write(&config_file, "source = \"~/notes/todo.md\"").unwrap();

        let config = Config::load_from_path(&config_file).unwrap().unwrap();
        let source = config.source.unwrap();
        assert!(!source.to_string_lossy().starts_with('~'));
        assert!(source.to_string_lossy().ends_with("notes/todo.md"));
    }
}
