pub mod config;
pub mod report;

pub use config::{AppConfig, SearchConfig};
pub use report::{MatchReport, PaletteReport};
