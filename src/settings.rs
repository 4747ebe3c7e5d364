// Dinocompare - Human vs. Dinosaur Infographic
// Copyright (c) 2025 Filipe da Veiga Ventura Alves
// Licensed under MIT License

use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::catalog::{builtin_catalog, load_catalog, Catalog};

pub const SETTINGS_FILE_NAME: &str = "infographic_settings.json";
const DEFAULT_IMAGE_DIR: &str = "images";
const DEFAULT_OUTPUT_DIR: &str = ".";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InfographicSettings {
    /// Prefix for tile image references.
    pub image_dir: String,
    /// Where rendered pages are written.
    pub output_dir: PathBuf,
    /// Fixes fact selection when set.
    pub rng_seed: Option<u64>,
    /// Alternate catalog in the built-in JSON format.
    pub catalog_path: Option<PathBuf>,
}

impl Default for InfographicSettings {
    fn default() -> Self {
        Self {
            image_dir: DEFAULT_IMAGE_DIR.to_string(),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            rng_seed: None,
            catalog_path: None,
        }
    }
}

impl InfographicSettings {
    pub fn default_path() -> PathBuf {
        std::env::current_dir()
            .unwrap_or_else(|_| PathBuf::from("."))
            .join(SETTINGS_FILE_NAME)
    }

    pub fn load_from_disk(path: &Path) -> anyhow::Result<Self> {
        let data = fs::read_to_string(path)?;
        let mut settings: Self = serde_json::from_str(&data)?;
        settings.sanitize();
        Ok(settings)
    }

    pub fn save_to_disk(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Missing file means first run: write defaults back so they can be edited.
    pub fn load_or_create(path: &Path) -> anyhow::Result<Self> {
        if path.exists() {
            return Self::load_from_disk(path);
        }
        let settings = Self::default();
        settings.save_to_disk(path)?;
        log::info!("Wrote default settings to {}", path.display());
        Ok(settings)
    }

    pub fn sanitize(&mut self) {
        let trimmed = self.image_dir.trim().trim_end_matches('/');
        self.image_dir = if trimmed.is_empty() {
            DEFAULT_IMAGE_DIR.to_string()
        } else {
            trimmed.to_string()
        };
        if self.output_dir.as_os_str().is_empty() {
            self.output_dir = PathBuf::from(DEFAULT_OUTPUT_DIR);
        }
    }

    /// Falls back to the built-in catalog when the configured one won't load.
    pub fn resolve_catalog(&self) -> anyhow::Result<Catalog> {
        if let Some(path) = &self.catalog_path {
            match load_catalog(path) {
                Ok(catalog) => return Ok(catalog),
                Err(err) => log::warn!(
                    "Failed to load catalog {}: {err}; using built-in catalog",
                    path.display()
                ),
            }
        }
        Ok(builtin_catalog()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join(SETTINGS_FILE_NAME);
        let settings = InfographicSettings {
            image_dir: "assets/img".to_string(),
            output_dir: PathBuf::from("out"),
            rng_seed: Some(1234),
            catalog_path: None,
        };
        settings.save_to_disk(&path).unwrap();
        assert_eq!(InfographicSettings::load_from_disk(&path).unwrap(), settings);
    }

    #[test]
    fn missing_file_writes_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(SETTINGS_FILE_NAME);
        let settings = InfographicSettings::load_or_create(&path).unwrap();
        assert_eq!(settings, InfographicSettings::default());
        assert!(path.exists());
    }

    #[test]
    fn partial_file_fills_defaults_and_sanitizes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(SETTINGS_FILE_NAME);
        fs::write(&path, r#"{ "image_dir": "  ", "rng_seed": 5 }"#).unwrap();
        let settings = InfographicSettings::load_from_disk(&path).unwrap();
        assert_eq!(settings.image_dir, "images");
        assert_eq!(settings.rng_seed, Some(5));
        assert_eq!(settings.output_dir, PathBuf::from("."));
    }

    #[test]
    fn bad_catalog_path_falls_back_to_builtin() {
        let settings = InfographicSettings {
            catalog_path: Some(PathBuf::from("/definitely/not/here.json")),
            ..Default::default()
        };
        let catalog = settings.resolve_catalog().unwrap();
        assert_eq!(catalog, builtin_catalog().unwrap());
    }
}
