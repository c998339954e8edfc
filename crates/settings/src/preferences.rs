use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

use fileflow_navigation::OutOfBoundsPolicy;

const PREFERENCES_VERSION: u32 = 1;

#[derive(Debug, Error)]
pub enum PreferencesError {
    #[error("failed to read preferences {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse preferences {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to serialize preferences {path}: {source}")]
    Serialize {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to write preferences {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to prepare directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Which opened files are shown as a rendered preview instead of a plain
/// editor tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum PreviewMode {
    #[default]
    None,
    All,
    Custom,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigationPreferences {
    #[serde(default = "default_version")]
    pub version: u32,
    #[serde(default)]
    pub out_of_bounds_behavior: OutOfBoundsPolicy,
    #[serde(default)]
    pub preview_files: PreviewMode,
    #[serde(default)]
    pub preview_custom_file_extensions: Vec<String>,
    #[serde(default)]
    pub show_information_popups: bool,
    #[serde(default)]
    pub show_navigation_popups: bool,
}

fn default_version() -> u32 {
    PREFERENCES_VERSION
}

impl Default for NavigationPreferences {
    fn default() -> Self {
        Self {
            version: PREFERENCES_VERSION,
            out_of_bounds_behavior: OutOfBoundsPolicy::default(),
            preview_files: PreviewMode::default(),
            preview_custom_file_extensions: Vec::new(),
            show_information_popups: false,
            show_navigation_popups: false,
        }
    }
}

impl NavigationPreferences {
    pub fn sanitize(&mut self) {
        if self.version == 0 {
            self.version = PREFERENCES_VERSION;
        }
        // Custom preview extensions are matched lowercased with a leading
        // dot; normalize whatever the file carried.
        self.preview_custom_file_extensions = self
            .preview_custom_file_extensions
            .iter()
            .filter_map(|extension| {
                let trimmed = extension.trim().to_lowercase();
                let trimmed = trimmed.trim_start_matches('.');
                if trimmed.is_empty() {
                    None
                } else {
                    Some(format!(".{trimmed}"))
                }
            })
            .collect();
    }

    /// Decides whether `path` should open as a preview under the current
    /// preview mode. Files without an extension never match `Custom`.
    pub fn should_preview(&self, path: &Path) -> bool {
        match self.preview_files {
            PreviewMode::None => false,
            PreviewMode::All => true,
            PreviewMode::Custom => {
                let Some(extension) = path.extension() else {
                    return false;
                };
                let extension = format!(".{}", extension.to_string_lossy().to_lowercase());
                self.preview_custom_file_extensions
                    .iter()
                    .any(|candidate| *candidate == extension)
            }
        }
    }
}

#[derive(Debug)]
pub struct PreferencesStore {
    path: PathBuf,
    data: NavigationPreferences,
}

impl PreferencesStore {
    pub fn new(path: impl Into<PathBuf>, preferences: NavigationPreferences) -> Self {
        Self {
            path: path.into(),
            data: preferences,
        }
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, PreferencesError> {
        let path = path.as_ref().to_path_buf();
        if !path.exists() {
            let mut data = NavigationPreferences::default();
            data.sanitize();
            return Ok(Self { path, data });
        }

        let contents = fs::read_to_string(&path).map_err(|source| PreferencesError::Read {
            path: path.clone(),
            source,
        })?;
        let mut data: NavigationPreferences =
            serde_json::from_str(&contents).map_err(|source| PreferencesError::Parse {
                path: path.clone(),
                source,
            })?;
        data.sanitize();
        Ok(Self { path, data })
    }

    pub fn preferences(&self) -> &NavigationPreferences {
        &self.data
    }

    pub fn preferences_mut(&mut self) -> &mut NavigationPreferences {
        &mut self.data
    }

    pub fn update<F>(&mut self, mut op: F) -> Result<(), PreferencesError>
    where
        F: FnMut(&mut NavigationPreferences),
    {
        op(&mut self.data);
        self.data.sanitize();
        self.save()
    }

    pub fn overwrite(&mut self, preferences: NavigationPreferences) -> Result<(), PreferencesError> {
        self.data = preferences;
        self.data.sanitize();
        self.save()
    }

    pub fn save(&self) -> Result<(), PreferencesError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|source| PreferencesError::CreateDir {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        let payload = serde_json::to_string_pretty(&self.data).map_err(|source| {
            PreferencesError::Serialize {
                path: self.path.clone(),
                source,
            }
        })?;

        let tmp_path = self.path.with_extension("tmp");
        fs::write(&tmp_path, payload.as_bytes()).map_err(|source| PreferencesError::Write {
            path: tmp_path.clone(),
            source,
        })?;
        fs::rename(&tmp_path, &self.path).map_err(|source| PreferencesError::Write {
            path: self.path.clone(),
            source,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
