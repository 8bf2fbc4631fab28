use crate::assets::AssetLoader;
use crate::services::file_chooser::default_extensions;
use palette_search::{ColorSpace, SearchType};
use serde::Deserialize;

/// Application configuration loaded from config.yaml
#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    /// Search defaults used when the command line does not override them
    #[serde(default)]
    pub search: SearchConfig,

    /// Palette used by `match` when no palette is given
    #[serde(default)]
    pub default_palette: Option<String>,

    /// File extensions offered by the chooser and shown by `list`
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
}

/// Default color space and search strategy, by name
#[derive(Debug, Deserialize, Clone)]
pub struct SearchConfig {
    #[serde(default = "default_color_space")]
    pub color_space: String,

    /// A name (`offset`, `line`, `x`, ...) or a numeric tag
    #[serde(default = "default_search_type")]
    pub search_type: String,
}

fn default_color_space() -> String {
    ColorSpace::default().to_string()
}

fn default_search_type() -> String {
    SearchType::default().to_string()
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            color_space: default_color_space(),
            search_type: default_search_type(),
        }
    }
}

impl SearchConfig {
    /// Resolve the configured color space; unknown names fall back to RGB
    pub fn color_space(&self) -> ColorSpace {
        self.color_space.parse().unwrap_or_else(|e| {
            tracing::warn!(%e, "Falling back to rgb color space");
            ColorSpace::default()
        })
    }

    /// Resolve the configured search type; unknown names and tags fall back
    /// to offset search
    pub fn search_type(&self) -> SearchType {
        if let Ok(tag) = self.search_type.trim().parse::<u8>() {
            return SearchType::from_tag(tag);
        }
        self.search_type.parse().unwrap_or_else(|e| {
            tracing::warn!(%e, "Falling back to offset search");
            SearchType::default()
        })
    }
}

impl AppConfig {
    /// Load configuration from AssetLoader (embedded or external)
    pub fn load_from_assets(loader: &AssetLoader) -> Self {
        match loader.read_config_string() {
            Ok(content) => match Self::from_yaml(&content) {
                Ok(config) => {
                    tracing::info!(
                        color_space = %config.search.color_space,
                        search_type = %config.search.search_type,
                        extensions = config.extensions.len(),
                        "Loaded configuration"
                    );
                    config
                }
                Err(e) => {
                    tracing::warn!(%e, "Failed to parse config, using defaults");
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!(%e, "Failed to read config, using defaults");
                Self::default()
            }
        }
    }

    pub fn from_yaml(content: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(content)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            search: SearchConfig::default(),
            default_palette: None,
            extensions: default_extensions(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();

        assert_eq!(config.search.color_space(), ColorSpace::Rgb);
        assert_eq!(config.search.search_type(), SearchType::ClosestOffset);
        assert!(config.default_palette.is_none());
        assert_eq!(config.extensions, vec!["txt", "pal", "gpl", "ase", "hex"]);
    }

    #[test]
    fn test_deserialize_config() {
        let yaml = r#"
search:
  color_space: cieluv
  search_type: line
default_palette: pico-8.hex
extensions: [gpl, hex]
"#;

        let config = AppConfig::from_yaml(yaml).unwrap();
        assert_eq!(config.search.color_space(), ColorSpace::Cieluv);
        assert_eq!(config.search.search_type(), SearchType::ClosestLine);
        assert_eq!(config.default_palette.as_deref(), Some("pico-8.hex"));
        assert_eq!(config.extensions, vec!["gpl", "hex"]);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config = AppConfig::from_yaml("search:\n  color_space: hsv\n").unwrap();
        assert_eq!(config.search.color_space(), ColorSpace::Hsv);
        assert_eq!(config.search.search_type(), SearchType::ClosestOffset);
        assert_eq!(config.extensions.len(), 5);
    }

    #[test]
    fn test_unknown_names_fall_back() {
        let search = SearchConfig {
            color_space: "lab".to_string(),
            search_type: "nearest".to_string(),
        };
        assert_eq!(search.color_space(), ColorSpace::Rgb);
        assert_eq!(search.search_type(), SearchType::ClosestOffset);
    }

    #[test]
    fn test_numeric_search_tags() {
        let tag = |t: &str| SearchConfig {
            color_space: "rgb".to_string(),
            search_type: t.to_string(),
        };
        assert_eq!(tag("0").search_type(), SearchType::ClosestX);
        assert_eq!(tag("2").search_type(), SearchType::ClosestZ);
        assert_eq!(tag("3").search_type(), SearchType::ClosestLine);
        assert_eq!(tag("9").search_type(), SearchType::ClosestOffset);
    }

    #[test]
    fn test_invalid_yaml_is_error() {
        assert!(AppConfig::from_yaml("search: [unclosed").is_err());
    }

    #[test]
    fn test_load_from_missing_file_uses_embedded() {
        let loader = AssetLoader::new(None, Some("/nonexistent/config.yaml".into()));
        let config = AppConfig::load_from_assets(&loader);
        assert!(!config.extensions.is_empty());
    }
}
