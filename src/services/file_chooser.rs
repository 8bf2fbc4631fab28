//! Choosing a palette file.
//!
//! A chooser returns zero or one path; `None` means the user cancelled.

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

/// Extensions offered by the chooser and recognized by `list`
pub const PALETTE_EXTENSIONS: [&str; 5] = ["txt", "pal", "gpl", "ase", "hex"];

pub fn default_extensions() -> Vec<String> {
    PALETTE_EXTENSIONS.iter().map(|e| e.to_string()).collect()
}

/// Case-insensitive extension check. A leading `.` in `extensions` is ignored.
pub fn has_palette_extension(path: &Path, extensions: &[String]) -> bool {
    let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
        return false;
    };
    extensions
        .iter()
        .any(|allowed| allowed.trim_start_matches('.').eq_ignore_ascii_case(ext))
}

/// Source of a user-selected palette path
pub trait FileChooser {
    /// Ask for one file. `extensions` is the filter to offer.
    fn choose(&mut self, title: &str, extensions: &[String]) -> Option<PathBuf>;
}

/// A path fixed in advance (e.g. a command-line argument)
#[derive(Debug, Clone, Default)]
pub struct FixedPath(pub Option<PathBuf>);

impl FileChooser for FixedPath {
    fn choose(&mut self, _title: &str, _extensions: &[String]) -> Option<PathBuf> {
        self.0.take()
    }
}

/// Line-based prompt; an empty answer or end of input cancels
pub struct PromptChooser<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> PromptChooser<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl PromptChooser<io::StdinLock<'static>, io::Stderr> {
    /// Prompt on stderr, read from stdin
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stderr())
    }
}

impl<R: BufRead, W: Write> FileChooser for PromptChooser<R, W> {
    fn choose(&mut self, title: &str, extensions: &[String]) -> Option<PathBuf> {
        let filter = extensions
            .iter()
            .map(|e| format!("*.{}", e.trim_start_matches('.')))
            .collect::<Vec<_>>()
            .join(";");

        if let Err(e) = write!(self.output, "{title} [{filter}]: ").and_then(|_| self.output.flush())
        {
            tracing::warn!(%e, "Failed to write prompt");
        }

        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(_) => {}
            Err(e) => {
                tracing::warn!(%e, "Failed to read palette path");
                return None;
            }
        }

        let answer = line.trim();
        if answer.is_empty() {
            return None;
        }

        let path = PathBuf::from(answer);
        if !has_palette_extension(&path, extensions) {
            tracing::warn!(path = %path.display(), "Chosen file has no palette extension");
        }
        Some(path)
    }
}
