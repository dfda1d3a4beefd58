// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display utilities for the lantern CLI.
//!
//! OneDark colours on dark terminals, One Light on light ones. Detection tries
//! `LANTERN_THEME` first, then `COLORFGBG`, then defaults to dark, the same
//! default the blog itself uses. Respects `NO_COLOR` and non-TTY output.

use crate::cli::report::FeedReport;
use lantern::{QueryResult, SearchIndex, ThemePreference};
use std::sync::OnceLock;

// Box drawing constants - width between │ and │ (excluding border chars)
pub const BOX_WIDTH: usize = 72;

// ═══════════════════════════════════════════════════════════════════════════
// THEME DETECTION
// ═══════════════════════════════════════════════════════════════════════════

static THEME: OnceLock<ThemePreference> = OnceLock::new();

fn detect_theme() -> ThemePreference {
    if let Ok(theme) = std::env::var("LANTERN_THEME") {
        if let Ok(theme) = theme.to_lowercase().parse() {
            return theme;
        }
    }

    // COLORFGBG is "fg;bg"; backgrounds 7 and up (except 8) are light
    if let Ok(colorfgbg) = std::env::var("COLORFGBG") {
        if let Some(Ok(bg)) = colorfgbg.split(';').next_back().map(str::parse::<u8>) {
            if bg >= 7 && bg != 8 {
                return ThemePreference::Light;
            }
        }
    }

    ThemePreference::Dark
}

fn theme() -> ThemePreference {
    *THEME.get_or_init(detect_theme)
}

// ═══════════════════════════════════════════════════════════════════════════
// COLOURS
// ═══════════════════════════════════════════════════════════════════════════

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const DIM: &str = "\x1b[2m";

#[derive(Clone, Copy)]
pub enum Tone {
    Red,
    Green,
    Yellow,
    Blue,
    Cyan,
    Gray,
}

impl Tone {
    fn rgb(self) -> (u8, u8, u8) {
        match (theme(), self) {
            (ThemePreference::Dark, Tone::Red) => (224, 108, 117), // #e06c75
            (ThemePreference::Dark, Tone::Green) => (152, 195, 121), // #98c379
            (ThemePreference::Dark, Tone::Yellow) => (229, 192, 123), // #e5c07b
            (ThemePreference::Dark, Tone::Blue) => (97, 175, 239), // #61afef
            (ThemePreference::Dark, Tone::Cyan) => (86, 182, 194), // #56b6c2
            (ThemePreference::Dark, Tone::Gray) => (92, 99, 112),  // #5c6370
            (ThemePreference::Light, Tone::Red) => (228, 86, 73),  // #e45649
            (ThemePreference::Light, Tone::Green) => (80, 161, 79), // #50a14f
            (ThemePreference::Light, Tone::Yellow) => (193, 132, 1), // #c18401
            (ThemePreference::Light, Tone::Blue) => (64, 120, 242), // #4078f2
            (ThemePreference::Light, Tone::Cyan) => (1, 132, 188), // #0184bc
            (ThemePreference::Light, Tone::Gray) => (160, 161, 167), // #a0a1a7
        }
    }

    fn escape(self) -> String {
        let (r, g, b) = self.rgb();
        format!("\x1b[38;2;{};{};{}m", r, g, b)
    }
}

/// Check if colors should be used (TTY detection)
pub fn use_colors() -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    atty::is(atty::Stream::Stdout)
}

/// Apply a tone with optional modifiers, or return plain text off-TTY
pub fn themed(tone: Tone, modifiers: &[&str], text: &str) -> String {
    if use_colors() {
        format!("{}{}{}{}", modifiers.join(""), tone.escape(), text, RESET)
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

/// Cut to `max` visible characters, marking the cut with an ellipsis.
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let mut cut: String = text.chars().take(max.saturating_sub(1)).collect();
    cut.push('…');
    cut
}

// ═══════════════════════════════════════════════════════════════════════════
// BOX DRAWING
// ═══════════════════════════════════════════════════════════════════════════

fn border(text: &str) -> String {
    themed(Tone::Gray, &[], text)
}

/// Print a content line: │ content          │
pub fn row(content: &str) {
    let pad = BOX_WIDTH.saturating_sub(visible_len(content) + 1);
    println!("{} {}{}{}", border("│"), content, " ".repeat(pad), border("│"));
}

/// Print section header: ┌─ LABEL ──────────┐
pub fn section_top(label: &str) {
    let label_part = format!("─ {} ", themed(Tone::Cyan, &[BOLD], label));
    let remaining = BOX_WIDTH.saturating_sub(visible_len(&label_part));
    println!(
        "{}{}{}",
        border("┌"),
        label_part,
        border(&format!("{}┐", "─".repeat(remaining)))
    );
}

/// Print section footer: └──────────────────┘
pub fn section_bottom() {
    println!("{}", border(&format!("└{}┘", "─".repeat(BOX_WIDTH))));
}

// ═══════════════════════════════════════════════════════════════════════════
// REPORTS
// ═══════════════════════════════════════════════════════════════════════════

pub fn print_feed_report(path: &str, report: &FeedReport) {
    section_top("FEED");
    row(&format!("{} {}", themed(Tone::Gray, &[], "file      "), path));
    row(&format!(
        "{} {}",
        themed(Tone::Gray, &[], "documents "),
        themed(Tone::Blue, &[BOLD], &report.documents.to_string())
    ));
    row(&format!(
        "{} {}",
        themed(Tone::Gray, &[], "categories"),
        report.categories.len()
    ));
    section_bottom();

    if !report.categories.is_empty() {
        section_top("CATEGORIES");
        for (name, count) in &report.categories {
            row(&format!(
                "{:>4}  {}",
                themed(Tone::Yellow, &[], &count.to_string()),
                truncate(name, BOX_WIDTH - 8)
            ));
        }
        section_bottom();
    }

    for problem in &report.problems {
        println!("{} {}", themed(Tone::Red, &[BOLD], "✗"), problem);
    }
    for warning in &report.warnings {
        println!("{} {}", themed(Tone::Yellow, &[], "!"), warning);
    }
    if report.is_ok() {
        println!("{} feed is valid", themed(Tone::Green, &[BOLD], "✓"));
    }
}

pub fn print_results(query: &str, index: &SearchIndex, results: &QueryResult) {
    section_top(&format!("RESULTS for \"{}\"", truncate(query, 40)));
    if results.is_empty() {
        row(&themed(Tone::Gray, &[DIM], "No results found"));
    }
    for (rank, result) in results.iter().enumerate() {
        let Some(doc) = index.document(result.document_index) else {
            continue;
        };
        row(&format!(
            "{} {}  {}",
            themed(Tone::Gray, &[], &format!("{:>2}.", rank + 1)),
            themed(Tone::Blue, &[BOLD], &truncate(&doc.title, BOX_WIDTH - 20)),
            themed(Tone::Gray, &[DIM], &format!("score {:.3}", result.score))
        ));
        row(&format!("    {}", truncate(&doc.excerpt, BOX_WIDTH - 6)));
        row(&format!(
            "    {}  {}",
            themed(Tone::Cyan, &[], &doc.url),
            themed(Tone::Gray, &[], &doc.date)
        ));
    }
    section_bottom();
}
