use serde::Deserialize;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::SiteError;

static DEFAULT_CONFIG: &str = include_str!("default_config.toml");

/// Site build settings, read from `mdsite.toml`.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// Markdown sources, mirrored into `output_dir`.
    pub content_dir: PathBuf,
    /// Assets copied verbatim into `output_dir`.
    pub static_dir: PathBuf,
    /// HTML page template with `{{ Title }}` and `{{ Content }}` placeholders.
    pub template: PathBuf,
    pub output_dir: PathBuf,
    /// Prefix replacing the leading `/` of root-relative `href` and `src` values.
    pub base_path: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            content_dir: PathBuf::from("content"),
            static_dir: PathBuf::from("static"),
            template: PathBuf::from("template.html"),
            output_dir: PathBuf::from("public"),
            base_path: "/".to_string(),
        }
    }
}

impl Config {
    /// The defaults bundled with the binary.
    pub fn compiled_default() -> Self {
        toml::from_str(DEFAULT_CONFIG).expect("default_config.toml is checked by build.rs")
    }

    /// Load config from a TOML file, or return defaults if not found.
    pub fn load(path: &Path) -> Result<Self, SiteError> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Self::compiled_default()),
            Err(e) => return Err(SiteError::io(path, e)),
        };
        toml::from_str(&content).map_err(|source| SiteError::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Make relative directories relative to `root` instead of the working directory.
    pub fn resolve_paths(mut self, root: &Path) -> Self {
        for path in [
            &mut self.content_dir,
            &mut self.static_dir,
            &mut self.template,
            &mut self.output_dir,
        ] {
            if path.is_relative() {
                *path = root.join(&*path);
            }
        }
        self
    }
}
