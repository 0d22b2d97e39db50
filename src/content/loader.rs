//! Loader for RON config files at startup.

use ron::Options;
use std::fs;
use std::path::Path;

use super::data::*;

/// Error type for content loading failures.
#[derive(Debug)]
pub struct ContentLoadError {
    pub file: String,
    pub message: String,
}

impl std::fmt::Display for ContentLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Failed to load {}: {}", self.file, self.message)
    }
}

/// Create RON options with extensions enabled for more flexible parsing.
fn ron_options() -> Options {
    Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}

/// Parse a single RON struct from a string; `file` is only used for errors.
pub fn parse_single<T>(file: &str, contents: &str) -> Result<T, ContentLoadError>
where
    T: for<'de> serde::Deserialize<'de>,
{
    ron_options()
        .from_str(contents)
        .map_err(|e| ContentLoadError {
            file: file.to_string(),
            message: format!("Parse error: {}", e),
        })
}

/// Load a single RON struct from disk.
fn load_single_file<T>(path: &Path) -> Result<T, ContentLoadError>
where
    T: for<'de> serde::Deserialize<'de>,
{
    let file_name = path.display().to_string();
    let contents = fs::read_to_string(path).map_err(|e| ContentLoadError {
        file: file_name.clone(),
        message: format!("IO error: {}", e),
    })?;

    parse_single(&file_name, &contents)
}

/// Load locomotion defaults from `locomotion.ron` under `base_path`.
pub fn load_locomotion_defaults(base_path: &Path) -> Result<LocomotionDefaults, ContentLoadError> {
    let path = base_path.join("locomotion.ron");
    let defaults: LocomotionDefaults = load_single_file(&path)?;

    if defaults.schema_version != SCHEMA_VERSION {
        return Err(ContentLoadError {
            file: path.display().to_string(),
            message: format!(
                "Unsupported schema_version {} (expected {})",
                defaults.schema_version, SCHEMA_VERSION
            ),
        });
    }

    Ok(defaults)
}
