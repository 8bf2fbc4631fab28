use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use palette_search::{convert_linear_to_space, ColorSpace, Palette, SearchType, Srgb};
use pixelpal::assets::{list_palette_dir, AssetCategory, AssetLoader};
use pixelpal::error::AppError;
use pixelpal::models::{AppConfig, MatchReport, PaletteReport};
use pixelpal::services::{
    choose_palette, load_named_palette, load_palette_file, parse_color, PaletteMatcher,
    PromptChooser,
};

#[derive(Parser)]
#[command(name = "pixelpal")]
#[command(about = "Palette file reader and bracketing color search")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Where a palette comes from
#[derive(clap::Args)]
struct PaletteSource {
    /// Palette file on disk (JASC, GIMP, paint.net, ASE or hex list)
    #[arg(short, long, conflicts_with = "embedded")]
    palette: Option<PathBuf>,

    /// Palette by file name from PALETTES_DIR or the embedded samples
    #[arg(short, long)]
    embedded: Option<String>,

    /// Prompt for a palette path on stdin
    #[arg(long, conflicts_with_all = ["palette", "embedded"])]
    choose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the colors of a palette
    Inspect {
        #[command(flatten)]
        source: PaletteSource,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Find the two palette colors that bracket a color
    Match {
        #[command(flatten)]
        source: PaletteSource,

        /// Target color as #RRGGBB or #RRGGBBAA
        #[arg(short, long)]
        color: String,

        /// Color space: rgb, hsv, xyz or cieluv (default from config)
        #[arg(short, long)]
        space: Option<String>,

        /// Search: offset, line, x, y or z (default from config)
        #[arg(long)]
        search: Option<String>,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Convert a color into every color space
    Convert {
        /// Color as #RRGGBB or #RRGGBBAA
        #[arg(short, long)]
        color: String,

        /// Only print this color space
        #[arg(short, long)]
        space: Option<String>,
    },
    /// List available palette files
    List {
        /// Directory to list instead of PALETTES_DIR + embedded samples
        dir: Option<PathBuf>,
    },
    /// Extract embedded assets to filesystem for customization
    Init {
        /// Extract sample palettes
        #[arg(long)]
        palettes: bool,

        /// Extract config.yaml
        #[arg(long)]
        config: bool,

        /// Extract all assets
        #[arg(long)]
        all: bool,

        /// Overwrite existing files
        #[arg(long, short)]
        force: bool,

        /// List embedded assets without extracting
        #[arg(long)]
        list: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Minimal logging for CLI
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pixelpal=warn,palette_search=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time().with_writer(std::io::stderr))
        .init();

    let loader = AssetLoader::from_env();

    match cli.command {
        Some(Commands::Inspect { source, json }) => run_inspect_command(&loader, &source, json),
        Some(Commands::Match {
            source,
            color,
            space,
            search,
            json,
        }) => run_match_command(&loader, &source, &color, space, search, json),
        Some(Commands::Convert { color, space }) => run_convert_command(&color, space),
        Some(Commands::List { dir }) => {
            run_list_command(&loader, dir.as_deref());
            Ok(())
        }
        Some(Commands::Init {
            palettes,
            config,
            all,
            force,
            list,
        }) => run_init_command(&loader, palettes, config, all, force, list),
        None => {
            run_status_command(&loader);
            Ok(())
        }
    }
}

/// Resolve a palette from the command line, falling back to the configured
/// default palette
fn resolve_palette(
    loader: &AssetLoader,
    config: &AppConfig,
    source: &PaletteSource,
) -> Result<Palette, AppError> {
    if let Some(ref path) = source.palette {
        return load_palette_file(path);
    }
    if let Some(ref name) = source.embedded {
        return load_named_palette(loader, name);
    }
    if source.choose {
        let mut chooser = PromptChooser::stdio();
        return choose_palette(&mut chooser, &config.extensions);
    }

    match config.default_palette {
        Some(ref name) => {
            tracing::debug!(palette = %name, "Using default palette from config");
            load_named_palette(loader, name)
        }
        None => {
            let mut chooser = PromptChooser::stdio();
            choose_palette(&mut chooser, &config.extensions)
        }
    }
}

fn print_json<T: serde::Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Print a palette's colors
fn run_inspect_command(
    loader: &AssetLoader,
    source: &PaletteSource,
    json: bool,
) -> anyhow::Result<()> {
    let config = AppConfig::load_from_assets(loader);
    let palette = resolve_palette(loader, &config, source)?;
    let report = PaletteReport::from(&palette);

    if json {
        return print_json(&report);
    }

    println!(
        "{} ({}, {} colors)",
        report.name,
        report.format.unwrap_or("memory"),
        report.count
    );
    for (i, hex) in report.colors.iter().enumerate() {
        println!("  {i:>3}  {hex}");
    }
    Ok(())
}

/// Bracket one color against a palette
fn run_match_command(
    loader: &AssetLoader,
    source: &PaletteSource,
    color: &str,
    space: Option<String>,
    search: Option<String>,
    json: bool,
) -> anyhow::Result<()> {
    let config = AppConfig::load_from_assets(loader);
    let target = parse_color(color)?;

    let space = match space {
        Some(name) => name.parse::<ColorSpace>().map_err(AppError::from)?,
        None => config.search.color_space(),
    };
    let search = match search {
        Some(name) => name.parse::<SearchType>().map_err(AppError::from)?,
        None => config.search.search_type(),
    };

    let palette = resolve_palette(loader, &config, source)?;
    let matcher = PaletteMatcher::new(palette, space, search)?;
    let result = matcher.match_color(target)?;
    let report = MatchReport::new(matcher.palette(), space, search, &result);

    if json {
        return print_json(&report);
    }

    println!(
        "{} in {} ({} search, {})",
        report.target, report.palette, report.search, report.space
    );
    println!("  a: {:>3}  {}", report.index_a, report.color_a);
    println!("  b: {:>3}  {}", report.index_b, report.color_b);
    println!("  blend: {:.4}", report.blend);
    if report.collapsed {
        println!("  (exact match)");
    }
    Ok(())
}

/// Show a color's coordinates in each color space
fn run_convert_command(color: &str, space: Option<String>) -> anyhow::Result<()> {
    let linear = parse_color(color)?;
    let spaces = match space {
        Some(name) => vec![name.parse::<ColorSpace>().map_err(AppError::from)?],
        None => ColorSpace::ALL.to_vec(),
    };

    println!("{}", Srgb::from(linear).to_hex());
    for space in spaces {
        let p = convert_linear_to_space(linear, space);
        println!(
            "  {:<7} {:>10.4} {:>10.4} {:>10.4}",
            space.name(),
            p.x,
            p.y,
            p.z
        );
    }
    Ok(())
}

/// List palette files
fn run_list_command(loader: &AssetLoader, dir: Option<&Path>) {
    let config = AppConfig::load_from_assets(loader);

    let names = match dir {
        Some(dir) => list_palette_dir(dir, &config.extensions),
        None => loader.list_palettes(&config.extensions),
    };

    if names.is_empty() {
        println!("No palette files found.");
        return;
    }
    for name in names {
        println!("{name}");
    }
}

/// Extract embedded assets to filesystem
fn run_init_command(
    loader: &AssetLoader,
    palettes: bool,
    config: bool,
    all: bool,
    force: bool,
    list: bool,
) -> anyhow::Result<()> {
    if list {
        println!("Embedded assets:\n");
        println!("Palettes:");
        for f in AssetLoader::list_embedded(AssetCategory::Palettes) {
            println!("  {f}");
        }
        println!("\nConfig:");
        for f in AssetLoader::list_embedded(AssetCategory::Config) {
            println!("  {f}");
        }
        return Ok(());
    }

    let mut categories = Vec::new();
    if all || palettes {
        categories.push(AssetCategory::Palettes);
    }
    if all || config {
        categories.push(AssetCategory::Config);
    }

    if categories.is_empty() {
        eprintln!("No categories specified. Use --all, --palettes, or --config");
        eprintln!("\nRun 'pixelpal init --list' to see embedded assets.");
        std::process::exit(1);
    }

    let report = loader.init(&categories, force)?;

    if !report.written.is_empty() {
        println!("Extracted {} files:", report.written.len());
        for f in &report.written {
            println!("  + {f}");
        }
    }
    if !report.skipped.is_empty() {
        println!(
            "\nSkipped {} existing files (use --force to overwrite):",
            report.skipped.len()
        );
        for f in &report.skipped {
            println!("  - {f}");
        }
    }

    if report.written.is_empty() && report.skipped.is_empty() {
        println!("No files to extract.");
    }

    Ok(())
}

/// Display status and configuration information
fn run_status_command(loader: &AssetLoader) {
    const VERSION: &str = env!("CARGO_PKG_VERSION");

    println!("Pixelpal v{VERSION}");
    println!("Palette reader and bracketing color search\n");

    println!("Environment Variables:");
    println!(
        "  CONFIG_FILE  = {}",
        loader
            .config_file()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "(not set)".to_string())
    );
    println!(
        "  PALETTES_DIR = {}",
        loader
            .palettes_dir()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "(not set)".to_string())
    );

    println!("\nAsset Sources:");

    let config_source = match loader.config_file() {
        Some(path) if path.exists() => path.display().to_string(),
        Some(_) => "embedded (file not found)".to_string(),
        None => "embedded".to_string(),
    };
    println!("  Config:   {config_source}");

    fn plural(n: usize) -> &'static str {
        if n == 1 {
            "file"
        } else {
            "files"
        }
    }

    let config = AppConfig::load_from_assets(loader);
    let embedded_count = AssetLoader::list_embedded(AssetCategory::Palettes).len();
    match loader.palettes_dir() {
        Some(dir) if dir.exists() => {
            let count = list_palette_dir(dir, &config.extensions).len();
            println!(
                "  Palettes: {} ({count} {}, {embedded_count} embedded)",
                dir.display(),
                plural(count)
            );
        }
        _ => println!(
            "  Palettes: embedded ({embedded_count} {})",
            plural(embedded_count)
        ),
    }

    println!("\nSearch Defaults:");
    println!("  Color space: {}", config.search.color_space());
    println!("  Search type: {}", config.search.search_type());
    if let Some(ref name) = config.default_palette {
        println!("  Palette:     {name}");
    }

    println!("\nCommands:");
    println!("  pixelpal inspect   Print the colors of a palette");
    println!("  pixelpal match     Bracket a color against a palette");
    println!("  pixelpal convert   Show a color in each color space");
    println!("  pixelpal list      List palette files");
    println!("  pixelpal init      Extract embedded assets");
    println!("\nRun 'pixelpal --help' for more details.");
}
