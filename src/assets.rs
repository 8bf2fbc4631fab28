//! Sample palettes and the default config, compiled into the binary.
//!
//! `PALETTES_DIR` and `CONFIG_FILE` point at filesystem copies that take
//! precedence. Without them nothing is read from disk.

use rust_embed::RustEmbed;
use std::borrow::Cow;
use std::collections::BTreeSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::services::file_chooser::has_palette_extension;

/// Embedded sample palettes, one per supported format
#[derive(RustEmbed)]
#[folder = "palettes/"]
#[include = "*.txt"]
#[include = "*.pal"]
#[include = "*.gpl"]
#[include = "*.ase"]
#[include = "*.hex"]
struct EmbeddedPalettes;

/// Embedded default config
#[derive(RustEmbed)]
#[folder = "."]
#[include = "config.yaml"]
struct EmbeddedConfig;

/// What `init` extracts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetCategory {
    Palettes,
    Config,
}

/// Paths written and skipped by `init`
#[derive(Debug, Default)]
pub struct InitReport {
    pub written: Vec<String>,
    pub skipped: Vec<String>,
}

/// Asset loader with optional filesystem override
pub struct AssetLoader {
    /// External palettes directory (from PALETTES_DIR env var)
    palettes_dir: Option<PathBuf>,
    /// External config file path (from CONFIG_FILE env var)
    config_file: Option<PathBuf>,
}

impl AssetLoader {
    /// `None` paths mean embedded assets only for that category.
    pub fn new(palettes_dir: Option<PathBuf>, config_file: Option<PathBuf>) -> Self {
        Self {
            palettes_dir,
            config_file,
        }
    }

    /// Create a loader from the `PALETTES_DIR` and `CONFIG_FILE` env vars
    pub fn from_env() -> Self {
        Self::new(
            std::env::var("PALETTES_DIR").ok().map(PathBuf::from),
            std::env::var("CONFIG_FILE").ok().map(PathBuf::from),
        )
    }

    pub fn palettes_dir(&self) -> Option<&Path> {
        self.palettes_dir.as_deref()
    }

    pub fn config_file(&self) -> Option<&Path> {
        self.config_file.as_deref()
    }

    /// Read a palette file by name
    ///
    /// Tries the external palettes directory first, then the embedded samples.
    pub fn read_palette(&self, name: &str) -> io::Result<Cow<'static, [u8]>> {
        if let Some(ref dir) = self.palettes_dir {
            let full_path = dir.join(name);
            if full_path.is_file() {
                tracing::trace!(path = %full_path.display(), "Loading palette from filesystem");
                return Ok(Cow::Owned(fs::read(&full_path)?));
            }
        }

        EmbeddedPalettes::get(name)
            .map(|f| {
                tracing::trace!(palette = name, "Loading palette from embedded assets");
                f.data
            })
            .ok_or_else(|| {
                io::Error::new(io::ErrorKind::NotFound, format!("Palette not found: {name}"))
            })
    }

    /// List all available palettes (merged view of embedded + external)
    pub fn list_palettes(&self, extensions: &[String]) -> Vec<String> {
        let mut files: BTreeSet<String> = EmbeddedPalettes::iter()
            .map(|s| s.to_string())
            .filter(|name| has_palette_extension(Path::new(name), extensions))
            .collect();

        if let Some(ref dir) = self.palettes_dir {
            files.extend(list_palette_dir(dir, extensions));
        }

        files.into_iter().collect()
    }

    /// Raw config bytes: CONFIG_FILE when it exists, the embedded
    /// `config.yaml` otherwise
    pub fn read_config(&self) -> io::Result<Cow<'static, [u8]>> {
        if let Some(ref path) = self.config_file {
            if path.exists() {
                tracing::trace!(path = %path.display(), "Loading config from filesystem");
                return Ok(Cow::Owned(fs::read(path)?));
            }
        }

        EmbeddedConfig::get("config.yaml")
            .map(|f| {
                tracing::trace!("Loading config from embedded assets");
                f.data
            })
            .ok_or_else(|| {
                io::Error::new(io::ErrorKind::NotFound, "Embedded config.yaml not found")
            })
    }

    pub fn read_config_string(&self) -> io::Result<String> {
        let bytes = self.read_config()?;
        String::from_utf8(bytes.into_owned())
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }

    /// Write the embedded assets of `categories` out for editing.
    ///
    /// Palettes go to PALETTES_DIR (default `./palettes`), the config to
    /// CONFIG_FILE (default `./config.yaml`). Existing files are skipped
    /// unless `force` is set.
    pub fn init(&self, categories: &[AssetCategory], force: bool) -> io::Result<InitReport> {
        let mut report = InitReport::default();

        for category in categories {
            match category {
                AssetCategory::Palettes => {
                    let dir = self
                        .palettes_dir
                        .clone()
                        .unwrap_or_else(|| PathBuf::from("./palettes"));
                    for name in EmbeddedPalettes::iter() {
                        if let Some(file) = EmbeddedPalettes::get(&name) {
                            extract(&dir.join(name.as_ref()), &file.data, force, &mut report)?;
                        }
                    }
                }
                AssetCategory::Config => {
                    let path = self
                        .config_file
                        .clone()
                        .unwrap_or_else(|| PathBuf::from("./config.yaml"));
                    if let Some(file) = EmbeddedConfig::get("config.yaml") {
                        extract(&path, &file.data, force, &mut report)?;
                    }
                }
            }
        }

        Ok(report)
    }

    /// Names of the embedded files in `category`
    pub fn list_embedded(category: AssetCategory) -> Vec<String> {
        match category {
            AssetCategory::Palettes => EmbeddedPalettes::iter().map(|s| s.to_string()).collect(),
            AssetCategory::Config => vec!["config.yaml".to_string()],
        }
    }
}

fn extract(path: &Path, data: &[u8], force: bool, report: &mut InitReport) -> io::Result<()> {
    let shown = path.display().to_string();
    if !force && path.exists() {
        report.skipped.push(shown);
        return Ok(());
    }
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, data)?;
    tracing::debug!(path = %shown, "Extracted asset");
    report.written.push(shown);
    Ok(())
}

/// Palette files directly inside `dir`, sorted by name
///
/// Unreadable directories yield an empty list.
pub fn list_palette_dir(dir: &Path, extensions: &[String]) -> Vec<String> {
    let Ok(entries) = fs::read_dir(dir) else {
        tracing::debug!(dir = %dir.display(), "Palette directory not readable");
        return Vec::new();
    };

    let mut files: Vec<String> = entries
        .flatten()
        .filter(|entry| entry.path().is_file())
        .filter(|entry| has_palette_extension(&entry.path(), extensions))
        .filter_map(|entry| entry.file_name().to_str().map(str::to_string))
        .collect();
    files.sort();
    files
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::file_chooser::default_extensions;

    #[test]
    fn test_embedded_palettes_present() {
        let names = AssetLoader::list_embedded(AssetCategory::Palettes);
        for ext in ["hex", "gpl", "pal", "txt", "ase"] {
            assert!(
                names.iter().any(|n| n.ends_with(&format!(".{ext}"))),
                "no embedded .{ext} sample in {names:?}"
            );
        }
    }

    #[test]
    fn test_read_embedded_config() {
        let loader = AssetLoader::new(None, None);
        let config = loader.read_config_string().unwrap();
        assert!(config.contains("search"));
    }

    #[test]
    fn test_missing_palette_is_not_found() {
        let loader = AssetLoader::new(None, None);
        let err = loader.read_palette("does-not-exist.hex").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn test_list_palettes_merges_external() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("mine.hex"), "#000000\n#FFFFFF\n").unwrap();
        fs::write(dir.path().join("notes.md"), "not a palette").unwrap();

        let loader = AssetLoader::new(Some(dir.path().to_path_buf()), None);
        let names = loader.list_palettes(&default_extensions());
        assert!(names.contains(&"mine.hex".to_string()));
        assert!(!names.contains(&"notes.md".to_string()));
        assert!(names.len() > 1);

        let data = loader.read_palette("mine.hex").unwrap();
        assert_eq!(&*data, b"#000000\n#FFFFFF\n");
    }

    #[test]
    fn test_init_extracts_and_skips() {
        let dir = tempfile::tempdir().unwrap();
        let palettes = dir.path().join("palettes");
        let config = dir.path().join("conf/config.yaml");
        let loader = AssetLoader::new(Some(palettes.clone()), Some(config.clone()));

        let report = loader
            .init(&[AssetCategory::Palettes, AssetCategory::Config], false)
            .unwrap();
        assert!(report.skipped.is_empty());
        assert_eq!(
            report.written.len(),
            AssetLoader::list_embedded(AssetCategory::Palettes).len() + 1
        );
        assert!(config.exists());

        let again = loader.init(&[AssetCategory::Config], false).unwrap();
        assert!(again.written.is_empty());
        assert_eq!(again.skipped.len(), 1);

        let forced = loader.init(&[AssetCategory::Config], true).unwrap();
        assert_eq!(forced.written.len(), 1);
    }
}
