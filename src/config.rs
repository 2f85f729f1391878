//! Render configuration, validated once before any file is read.

use std::path::PathBuf;

/// Prefix Antora uses to address files in a module's `examples` family.
pub const ANTORA_PREFIX: &str = "example$";

/// How include directives address the Go and sample-data files.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum PathMode {
    /// Full filesystem path.
    #[default]
    Absolute,
    /// `example$` + bare file name.
    Antora,
    /// Caller prefix + bare file name.
    Prefix(String),
    /// Relative to the given directory, falling back to the full path.
    RelativeTo(PathBuf),
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} are mutually exclusive. Use only one.")]
    ConflictingPathModes(String),
}

/// Immutable set of rendering toggles.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderConfig {
    pub no_header: bool,
    pub skip_json: bool,
    pub no_page_breaks: bool,
    pub no_headings: bool,
    pub no_outer_tags: bool,
    pub path_mode: PathMode,
}

/// Raw path-mode selections as they arrive from the command line.
///
/// Empty strings count as unset.
#[derive(Debug, Default)]
pub struct PathFlags<'a> {
    pub antora: bool,
    pub relative_to: Option<&'a str>,
    pub include_prefix: Option<&'a str>,
}

impl PathFlags<'_> {
    /// Resolve to a single [`PathMode`], rejecting more than one selection.
    pub fn resolve(&self) -> Result<PathMode, ConfigError> {
        let relative_to = self.relative_to.filter(|s| !s.is_empty());
        let include_prefix = self.include_prefix.filter(|s| !s.is_empty());

        let mut selected = Vec::new();
        if self.antora {
            selected.push("--antora");
        }
        if relative_to.is_some() {
            selected.push("--relative-to");
        }
        if include_prefix.is_some() {
            selected.push("--include-prefix");
        }
        if selected.len() > 1 {
            return Err(ConfigError::ConflictingPathModes(selected.join(", ")));
        }

        Ok(match (self.antora, relative_to, include_prefix) {
            (true, _, _) => PathMode::Antora,
            (_, Some(dir), _) => PathMode::RelativeTo(PathBuf::from(dir)),
            (_, _, Some(prefix)) => PathMode::Prefix(prefix.to_string()),
            _ => PathMode::Absolute,
        })
    }
}
