//! Configuration and asset overrides from the filesystem.

mod common;

use common::{assert_colors, fixtures};
use palette_search::{ColorSpace, SearchType};
use pixelpal::assets::{list_palette_dir, AssetCategory, AssetLoader};
use pixelpal::models::AppConfig;
use pixelpal::services::{choose_palette, load_named_palette, FixedPath, PromptChooser};
use pretty_assertions::assert_eq;
use std::io::Cursor;

#[test]
fn test_embedded_config_defaults() {
    let config = AppConfig::load_from_assets(&AssetLoader::new(None, None));

    assert_eq!(config.search.color_space(), ColorSpace::Hsv);
    assert_eq!(config.search.search_type(), SearchType::ClosestLine);
    assert_eq!(config.default_palette.as_deref(), Some("pico-8.hex"));
}

#[test]
fn test_external_config_overrides_embedded() {
    let dir = tempfile::tempdir().unwrap();
    let config_file = dir.path().join("config.yaml");
    std::fs::write(
        &config_file,
        "search:\n  color_space: xyz\n  search_type: \"1\"\nextensions: [gpl]\n",
    )
    .unwrap();

    let loader = AssetLoader::new(None, Some(config_file));
    let config = AppConfig::load_from_assets(&loader);

    assert_eq!(config.search.color_space(), ColorSpace::Xyz);
    assert_eq!(config.search.search_type(), SearchType::ClosestY);
    assert_eq!(config.default_palette, None);
    assert_eq!(config.extensions, vec!["gpl".to_string()]);
}

#[test]
fn test_broken_config_falls_back_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config_file = fixtures::write_palette(dir.path(), "config.yaml", "search: [");

    let config = AppConfig::load_from_assets(&AssetLoader::new(None, Some(config_file)));
    assert_eq!(config.search.color_space(), ColorSpace::Rgb);
    assert_eq!(config.search.search_type(), SearchType::ClosestOffset);
}

#[test]
fn test_palettes_dir_shadows_embedded_sample() {
    let dir = tempfile::tempdir().unwrap();
    fixtures::write_palette(dir.path(), "pico-8.hex", "#111111\n#222222\n");
    fixtures::write_palette(dir.path(), "extra.gpl", fixtures::GIMP_GPL);

    let loader = AssetLoader::new(Some(dir.path().to_path_buf()), None);

    let pico = load_named_palette(&loader, "pico-8.hex").unwrap();
    assert_colors(&pico, &["#111111", "#222222"]);

    // Samples not present in the directory still come from the binary
    let gameboy = load_named_palette(&loader, "gameboy.pal").unwrap();
    assert_eq!(gameboy.len(), 4);

    let names = loader.list_palettes(&AppConfig::default().extensions);
    assert!(names.contains(&"extra.gpl".to_string()));
    assert!(names.contains(&"studio-7.ase".to_string()));
    assert_eq!(
        names.iter().filter(|n| n.as_str() == "pico-8.hex").count(),
        1
    );
}

#[test]
fn test_list_palette_dir_filters_extensions() {
    let dir = tempfile::tempdir().unwrap();
    fixtures::write_palette(dir.path(), "b.PAL", fixtures::JASC_PAL);
    fixtures::write_palette(dir.path(), "a.hex", fixtures::HEX_LIST);
    fixtures::write_palette(dir.path(), "readme.md", "# palettes");
    std::fs::create_dir(dir.path().join("nested.gpl")).unwrap();

    let names = list_palette_dir(dir.path(), &AppConfig::default().extensions);
    assert_eq!(names, vec!["a.hex".to_string(), "b.PAL".to_string()]);

    let only_hex = list_palette_dir(dir.path(), &["hex".to_string()]);
    assert_eq!(only_hex, vec!["a.hex".to_string()]);

    assert!(list_palette_dir(&dir.path().join("missing"), &[]).is_empty());
}

#[test]
fn test_init_then_load_from_extracted_dir() {
    let dir = tempfile::tempdir().unwrap();
    let palettes = dir.path().join("palettes");
    let loader = AssetLoader::new(Some(palettes.clone()), Some(dir.path().join("config.yaml")));

    let report = loader.init(&[AssetCategory::Palettes], false).unwrap();
    assert_eq!(
        report.written.len(),
        AssetLoader::list_embedded(AssetCategory::Palettes).len()
    );
    assert!(!dir.path().join("config.yaml").exists());

    let extracted = list_palette_dir(&palettes, &AppConfig::default().extensions);
    assert_eq!(
        extracted,
        AssetLoader::list_embedded(AssetCategory::Palettes)
            .into_iter()
            .collect::<std::collections::BTreeSet<_>>()
            .into_iter()
            .collect::<Vec<_>>()
    );

    let sweetie = load_named_palette(&loader, "sweetie-16.txt").unwrap();
    assert_eq!(sweetie.name(), "Sweetie 16");
}

#[test]
fn test_choosers_feed_palette_loading() {
    let dir = tempfile::tempdir().unwrap();
    let path = fixtures::write_palette(dir.path(), "grays.hex", fixtures::HEX_LIST);
    let extensions = AppConfig::default().extensions;

    let mut fixed = FixedPath(Some(path.clone()));
    let palette = choose_palette(&mut fixed, &extensions).unwrap();
    assert_eq!(palette.name(), "grays");

    let input = format!("{}\n", path.display());
    let mut prompt = PromptChooser::new(Cursor::new(input), std::io::sink());
    let palette = choose_palette(&mut prompt, &extensions).unwrap();
    assert_eq!(palette.len(), 3);
}
