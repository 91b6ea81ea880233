// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal output for the termpack CLI.
//!
//! OneDark on dark terminals, One Light on light ones. The theme comes from
//! `TERMPACK_THEME` ("dark" or "light") when set, then the `COLORFGBG` hint
//! some terminals export, and falls back to dark. `NO_COLOR` and non-TTY
//! stdout turn colors off entirely so the summary stays pipe-friendly.

use std::path::Path;
use std::sync::OnceLock;

use termpack::RunReport;

/// Width between the two vertical borders.
pub const BOX_WIDTH: usize = 64;

// ═══════════════════════════════════════════════════════════════════════════
// THEME DETECTION
// ═══════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

static THEME: OnceLock<Theme> = OnceLock::new();

fn parse_theme(explicit: Option<&str>, colorfgbg: Option<&str>) -> Theme {
    if let Some(theme) = explicit {
        match theme.to_lowercase().as_str() {
            "light" | "l" => return Theme::Light,
            "dark" | "d" => return Theme::Dark,
            _ => {}
        }
    }

    // "fg;bg": 7 and above is a light background, except 8 (dark gray)
    if let Some(bg) = colorfgbg
        .and_then(|v| v.split(';').next_back())
        .and_then(|bg| bg.parse::<u8>().ok())
    {
        if bg >= 7 && bg != 8 {
            return Theme::Light;
        }
    }

    Theme::Dark
}

fn detect_theme() -> Theme {
    let explicit = std::env::var("TERMPACK_THEME").ok();
    let colorfgbg = std::env::var("COLORFGBG").ok();
    parse_theme(explicit.as_deref(), colorfgbg.as_deref())
}

pub fn theme() -> Theme {
    *THEME.get_or_init(detect_theme)
}

// ═══════════════════════════════════════════════════════════════════════════
// PALETTES
// ═══════════════════════════════════════════════════════════════════════════

fn rgb(r: u8, g: u8, b: u8) -> String {
    format!("\x1b[38;2;{};{};{}m", r, g, b)
}

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";

mod onedark {
    pub const GREEN: (u8, u8, u8) = (152, 195, 121); // #98c379
    pub const YELLOW: (u8, u8, u8) = (229, 192, 123); // #e5c07b
    pub const CYAN: (u8, u8, u8) = (86, 182, 194); // #56b6c2
    pub const GRAY: (u8, u8, u8) = (92, 99, 112); // #5c6370
}

mod onelight {
    pub const GREEN: (u8, u8, u8) = (80, 161, 79); // #50a14f
    pub const YELLOW: (u8, u8, u8) = (193, 132, 1); // #c18401
    pub const CYAN: (u8, u8, u8) = (1, 132, 188); // #0184bc
    pub const GRAY: (u8, u8, u8) = (160, 161, 167); // #a0a1a7
}

macro_rules! theme_color {
    ($name:ident) => {
        #[allow(non_snake_case)]
        pub fn $name() -> String {
            let (r, g, b) = match theme() {
                Theme::Dark => onedark::$name,
                Theme::Light => onelight::$name,
            };
            rgb(r, g, b)
        }
    };
}

theme_color!(GREEN);
theme_color!(YELLOW);
theme_color!(CYAN);
theme_color!(GRAY);

// ═══════════════════════════════════════════════════════════════════════════
// CORE UTILITIES
// ═══════════════════════════════════════════════════════════════════════════

pub fn use_colors() -> bool {
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    atty::is(atty::Stream::Stdout)
}

/// Apply a theme color and modifiers when colors are on.
pub fn themed(color_fn: fn() -> String, modifiers: &[&str], text: &str) -> String {
    if use_colors() {
        format!("{}{}{}{}", modifiers.join(""), color_fn(), text, RESET)
    } else {
        text.to_string()
    }
}

/// Character count, skipping ANSI escape sequences.
pub fn visible_len(s: &str) -> usize {
    let mut in_escape = false;
    let mut len = 0;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape && c == 'm' {
            in_escape = false;
        } else if !in_escape {
            len += 1;
        }
    }
    len
}

fn border() -> String {
    if use_colors() {
        GRAY()
    } else {
        String::new()
    }
}

fn reset() -> &'static str {
    if use_colors() {
        RESET
    } else {
        ""
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// BOX DRAWING
// ═══════════════════════════════════════════════════════════════════════════

/// ┌─ LABEL ─────┐
pub fn section_top(label: &str) {
    let label_part = format!("─ {} ", themed(CYAN, &[BOLD], label));
    let remaining = BOX_WIDTH.saturating_sub(visible_len(&label_part));
    println!(
        "{}┌{}{}{}{}┐{}",
        border(),
        reset(),
        label_part,
        border(),
        "─".repeat(remaining),
        reset()
    );
}

/// │ content     │
pub fn row(content: &str) {
    let pad = BOX_WIDTH.saturating_sub(visible_len(content));
    println!(
        "{}│{}{}{}{}│{}",
        border(),
        reset(),
        content,
        " ".repeat(pad),
        border(),
        reset()
    );
}

/// └─────────────┘
pub fn section_bottom() {
    println!("{}└{}┘{}", border(), "─".repeat(BOX_WIDTH), reset());
}

/// One `label  value` line inside a box.
fn field(label: &str, value: &str) -> String {
    format!(" {:<18}{}", label, value)
}

// ═══════════════════════════════════════════════════════════════════════════
// FORMATTERS
// ═══════════════════════════════════════════════════════════════════════════

pub fn format_size(bytes: usize) -> String {
    if bytes >= 1024 * 1024 {
        format!("{:.1} MB", bytes as f64 / 1024.0 / 1024.0)
    } else if bytes >= 1024 {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    } else {
        format!("{} B", bytes)
    }
}

/// Keep the tail of a path, which is the part that differs between runs.
pub fn truncate_path(path: &Path, max_len: usize) -> String {
    let text = path.display().to_string();
    let count = text.chars().count();
    if count <= max_len {
        return text;
    }
    let tail: String = text.chars().skip(count - max_len.saturating_sub(3)).collect();
    format!("...{}", tail)
}

/// Size relative to raw input, green when it shrank.
pub fn ratio_colored(ratio: Option<f64>) -> String {
    match ratio {
        None => themed(GRAY, &[], "n/a"),
        Some(r) if r < 1.0 => themed(GREEN, &[BOLD], &format!("{:.1}% of raw", r * 100.0)),
        Some(r) => themed(YELLOW, &[BOLD], &format!("{:.1}% of raw", r * 100.0)),
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// RUN SUMMARY
// ═══════════════════════════════════════════════════════════════════════════

/// Human-readable summary of a compression run.
pub fn print_report(report: &RunReport) {
    section_top("INPUT");
    row(&field("records", &report.records_read.to_string()));
    if report.records_skipped > 0 {
        row(&field(
            "skipped",
            &themed(YELLOW, &[], &report.records_skipped.to_string()),
        ));
    }
    row(&field("terms", &report.terms.to_string()));
    row(&field("postings", &report.postings.to_string()));
    section_bottom();

    section_top("DICTIONARY");
    if let Some(path) = &report.dictionary_path {
        row(&field("file", &truncate_path(path, BOX_WIDTH - 20)));
    }
    row(&field(
        "blocks",
        &format!("{} x {} terms", report.blocks, report.config.block_size),
    ));
    row(&field("size", &format_size(report.dictionary_bytes)));
    row(&field("ratio", &ratio_colored(report.dictionary_ratio())));
    row(&field("crc32", &format!("{:08x}", report.dictionary_crc32)));
    section_bottom();

    section_top("POSTINGS");
    if let Some(path) = &report.posting_path {
        row(&field("file", &truncate_path(path, BOX_WIDTH - 20)));
    }
    row(&field("size", &format_size(report.posting_bytes)));
    if let Some(per) = report.bytes_per_posting() {
        row(&field("bytes/posting", &format!("{:.2}", per)));
    }
    if report.delimiter_collisions > 0 {
        row(&field(
            "collisions",
            &themed(YELLOW, &[BOLD], &report.delimiter_collisions.to_string()),
        ));
    }
    row(&field("crc32", &format!("{:08x}", report.posting_crc32)));
    section_bottom();
}
