// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display utilities for the quadsift CLI.
//!
//! Everything here returns `String`s; `main` decides where they go. Colors
//! follow OneDark on dark terminals and One Light on light ones, and switch
//! off entirely for `NO_COLOR` or when stdout is not a TTY.
//!
//! # Theme detection order
//!
//! 1. `QUADSIFT_THEME` env var ("dark" or "light")
//! 2. `COLORFGBG` env var (terminal background hint)
//! 3. Default to dark theme

use std::sync::OnceLock;

use quadsift::{Compaction, Quadruple};

// Box drawing constants - width between │ and │ (excluding border chars)
pub const BOX_WIDTH: usize = 48;

// ═══════════════════════════════════════════════════════════════════════════
// THEME DETECTION
// ═══════════════════════════════════════════════════════════════════════════

/// Terminal color theme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

/// Cached theme detection result
static THEME: OnceLock<Theme> = OnceLock::new();

/// Parse a theme name as accepted by `QUADSIFT_THEME`.
fn parse_theme(name: &str) -> Option<Theme> {
    match name.to_lowercase().as_str() {
        "light" | "l" => Some(Theme::Light),
        "dark" | "d" => Some(Theme::Dark),
        _ => None,
    }
}

/// Interpret `COLORFGBG` ("fg;bg"); background 7+ except 8 is light.
fn theme_from_colorfgbg(value: &str) -> Option<Theme> {
    let bg: u8 = value.split(';').next_back()?.parse().ok()?;
    if bg >= 7 && bg != 8 {
        Some(Theme::Light)
    } else {
        Some(Theme::Dark)
    }
}

fn detect_theme() -> Theme {
    if let Some(theme) = std::env::var("QUADSIFT_THEME")
        .ok()
        .and_then(|v| parse_theme(&v))
    {
        return theme;
    }

    std::env::var("COLORFGBG")
        .ok()
        .and_then(|v| theme_from_colorfgbg(&v))
        .unwrap_or(Theme::Dark)
}

/// Get the current theme (cached)
pub fn theme() -> Theme {
    *THEME.get_or_init(detect_theme)
}

// ═══════════════════════════════════════════════════════════════════════════
// PALETTES
// ═══════════════════════════════════════════════════════════════════════════

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const DIM: &str = "\x1b[2m";

/// A palette slot, resolved against the current theme at paint time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Green,
    Yellow,
    Blue,
    Cyan,
    Gray,
}

impl Color {
    fn rgb(self, theme: Theme) -> (u8, u8, u8) {
        match (theme, self) {
            (Theme::Dark, Color::Green) => (152, 195, 121), // #98c379
            (Theme::Dark, Color::Yellow) => (229, 192, 123), // #e5c07b
            (Theme::Dark, Color::Blue) => (97, 175, 239),   // #61afef
            (Theme::Dark, Color::Cyan) => (86, 182, 194),   // #56b6c2
            (Theme::Dark, Color::Gray) => (92, 99, 112),    // #5c6370
            (Theme::Light, Color::Green) => (80, 161, 79),  // #50a14f
            (Theme::Light, Color::Yellow) => (193, 132, 1), // #c18401
            (Theme::Light, Color::Blue) => (64, 120, 242),  // #4078f2
            (Theme::Light, Color::Cyan) => (1, 132, 188),   // #0184bc
            (Theme::Light, Color::Gray) => (160, 161, 167), // #a0a1a7
        }
    }

    /// True color escape sequence for this slot
    pub fn escape(self) -> String {
        let (r, g, b) = self.rgb(theme());
        format!("\x1b[38;2;{};{};{}m", r, g, b)
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// CORE UTILITIES
// ═══════════════════════════════════════════════════════════════════════════

/// Check if colors should be used (TTY detection)
pub fn use_colors() -> bool {
    // Respect NO_COLOR standard
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    atty::is(atty::Stream::Stdout)
}

/// Apply theme color with optional modifiers, or return plain text off a TTY
pub fn themed(color: Color, modifiers: &[&str], text: &str) -> String {
    if use_colors() {
        format!("{}{}{}{}", modifiers.join(""), color.escape(), text, RESET)
    } else {
        text.to_string()
    }
}

/// Calculate visible length (excluding ANSI codes)
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

// ═══════════════════════════════════════════════════════════════════════════
// BOX DRAWING
// ═══════════════════════════════════════════════════════════════════════════

/// Content line: │ content          │
pub fn row(content: &str) -> String {
    let pad = BOX_WIDTH.saturating_sub(visible_len(content) + 1);
    let border = themed(Color::Gray, &[], "│");
    format!("{} {}{}{}", border, content, " ".repeat(pad), border)
}

/// Section header: ┌─ LABEL ──────────┐
pub fn section_top(label: &str) -> String {
    let label_part = format!("─ {} ", themed(Color::Cyan, &[BOLD], label));
    let remaining = BOX_WIDTH.saturating_sub(visible_len(&label_part));
    format!(
        "{}{}{}",
        themed(Color::Gray, &[], "┌"),
        label_part,
        themed(Color::Gray, &[], &format!("{}┐", "─".repeat(remaining)))
    )
}

/// Section footer: └──────────────────┘
pub fn section_bot() -> String {
    themed(Color::Gray, &[], &format!("└{}┘", "─".repeat(BOX_WIDTH)))
}

// ═══════════════════════════════════════════════════════════════════════════
// DOMAIN RENDERING
// ═══════════════════════════════════════════════════════════════════════════

/// Render a single byte: printable ASCII as a quoted char, everything else
/// as a hex escape.
pub fn render_byte(byte: u8) -> String {
    if byte.is_ascii_graphic() || byte == b' ' {
        format!("'{}'", byte as char)
    } else {
        format!("'\\x{:02x}'", byte)
    }
}

/// Render a byte sequence as `['2', '2', ' ']`.
pub fn render_bytes(bytes: &[u8]) -> String {
    let items: Vec<String> = bytes.iter().map(|&b| render_byte(b)).collect();
    format!("[{}]", items.join(", "))
}

/// Like [`render_bytes`], but cut to at most `max_width` columns. A cut
/// list keeps as many leading items as fit and ends in `, …]`.
pub fn render_bytes_within(bytes: &[u8], max_width: usize) -> String {
    let full = render_bytes(bytes);
    if visible_len(&full) <= max_width {
        return full;
    }

    let mut items: Vec<String> = Vec::new();
    for &b in bytes {
        items.push(render_byte(b));
        let candidate = format!("[{}, …]", items.join(", "));
        if visible_len(&candidate) > max_width {
            items.pop();
            break;
        }
    }

    if items.is_empty() {
        "[…]".to_string()
    } else {
        format!("[{}, …]", items.join(", "))
    }
}

// Visible width of the labels in `render_compaction`.
const LABEL_WIDTH: usize = 8;

/// One `label [bytes] (len N)` row, with the byte list cut to fit the box.
fn byte_row(label: &str, bytes: &[u8], color: Option<Color>) -> String {
    let suffix = format!(" (len {})", bytes.len());
    // row() adds one leading space; one more separates label and list
    let budget = BOX_WIDTH.saturating_sub(1 + LABEL_WIDTH + 1 + visible_len(&suffix));
    let list = render_bytes_within(bytes, budget);
    let list = match color {
        Some(c) => themed(c, &[], &list),
        None => list,
    };
    row(&format!(
        "{} {}{}",
        themed(Color::Gray, &[DIM], label),
        list,
        suffix
    ))
}

/// Boxed before/after view of a compaction.
pub fn render_compaction(report: &Compaction) -> Vec<String> {
    let label = |s: &str| themed(Color::Gray, &[DIM], s);
    vec![
        section_top("COMPACTION"),
        row(&format!("{} {}", label("skip    "), render_byte(report.skip))),
        byte_row("input   ", &report.input, None),
        byte_row("output  ", &report.output, Some(Color::Green)),
        row(&format!(
            "{} {}",
            label("removed "),
            themed(Color::Yellow, &[], &report.removed.to_string())
        )),
        row(&format!("{} {}", label("capacity"), report.capacity)),
        section_bot(),
    ]
}

/// Quadruple as a space-separated line, e.g. `3 9 9 9`.
pub fn render_quadruple(q: &Quadruple) -> String {
    q.to_string()
}

/// Boxed list of quadruples with a match count footer.
pub fn render_quadruples(title: &str, quads: &[Quadruple]) -> Vec<String> {
    let mut lines = vec![section_top(title)];
    lines.extend(
        quads
            .iter()
            .map(|q| row(&themed(Color::Blue, &[], &render_quadruple(q)))),
    );
    lines.push(row(&themed(
        Color::Gray,
        &[DIM],
        &format!("{} match(es)", quads.len()),
    )));
    lines.push(section_bot());
    lines
}
