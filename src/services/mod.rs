pub mod file_chooser;
pub mod palette_service;

pub use file_chooser::{FileChooser, FixedPath, PromptChooser};
pub use palette_service::{
    choose_palette, load_named_palette, load_palette_file, parse_color, MatchResult,
    PaletteMatcher,
};
