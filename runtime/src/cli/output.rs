//! Terminal output: colors, symbols, and the written-files summary.

use crate::sitemap::delivery::WrittenFile;
use std::io::IsTerminal;

/// How results are reported to the user.
#[derive(Debug, Clone, Copy, Default)]
pub struct OutputMode {
    /// Machine-readable JSON on stdout.
    pub json: bool,
    /// Suppress human-readable progress on stderr.
    pub quiet: bool,
}

/// Check if color output is enabled.
pub fn color_enabled() -> bool {
    // Respect NO_COLOR env (https://no-color.org/)
    if std::env::var("NO_COLOR").is_ok() || std::env::var("DOCTAR_NO_COLOR").is_ok() {
        return false;
    }
    std::io::stderr().is_terminal()
}

// ANSI color codes
const GREEN: &str = "\x1b[32m";
const DIM: &str = "\x1b[2m";
const BOLD: &str = "\x1b[1m";
const RESET: &str = "\x1b[0m";

/// Colored string builder.
pub struct Styled {
    use_color: bool,
}

impl Default for Styled {
    fn default() -> Self {
        Self::new()
    }
}

impl Styled {
    pub fn new() -> Self {
        Self {
            use_color: color_enabled(),
        }
    }

    pub fn plain() -> Self {
        Self { use_color: false }
    }

    /// Green checkmark symbol.
    pub fn ok_sym(&self) -> &str {
        if self.use_color {
            "\x1b[32m\u{2713}\x1b[0m"
        } else {
            "OK"
        }
    }

    /// Red X symbol.
    pub fn fail_sym(&self) -> &str {
        if self.use_color {
            "\x1b[31m\u{2717}\x1b[0m"
        } else {
            "!!"
        }
    }

    pub fn green(&self, s: &str) -> String {
        self.paint(GREEN, s)
    }

    pub fn dim(&self, s: &str) -> String {
        self.paint(DIM, s)
    }

    pub fn bold(&self, s: &str) -> String {
        self.paint(BOLD, s)
    }

    fn paint(&self, code: &str, s: &str) -> String {
        if self.use_color {
            format!("{code}{s}{RESET}")
        } else {
            s.to_string()
        }
    }
}

/// Format bytes into human-readable size (e.g., "28.7 KB").
pub fn format_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;

    if bytes >= MB {
        format!("{:.1} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.1} KB", bytes as f64 / KB as f64)
    } else {
        format!("{bytes} B")
    }
}

/// One line per written file.
pub fn written_lines(s: &Styled, files: &[WrittenFile]) -> Vec<String> {
    files
        .iter()
        .map(|f| {
            format!(
                "  {} {:<40} {:>6} entries  {}",
                s.ok_sym(),
                f.path.display(),
                f.entries,
                s.dim(&format_size(f.bytes as u64))
            )
        })
        .collect()
}

/// Report written files: JSON on stdout, or a summary on stderr.
pub fn report_written(mode: OutputMode, base_url: &str, files: &[WrittenFile]) {
    if mode.json {
        print_json(&serde_json::json!({
            "ok": true,
            "base_url": base_url,
            "files": files,
        }));
        return;
    }
    if mode.quiet {
        return;
    }

    let s = Styled::new();
    for line in written_lines(&s, files) {
        eprintln!("{line}");
    }
    let total: usize = files.iter().map(|f| f.entries).sum();
    eprintln!();
    eprintln!(
        "  {} {} file(s), {total} entries for {}",
        s.bold("Done:"),
        files.len(),
        s.green(base_url)
    );
}

/// Print JSON output to stdout.
pub fn print_json(value: &serde_json::Value) {
    if let Ok(s) = serde_json::to_string_pretty(value) {
        println!("{s}");
    }
}
