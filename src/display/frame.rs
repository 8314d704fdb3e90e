use std::env;

use chrono::NaiveDateTime;
use crossterm::terminal;

use super::PaneLayout;
use crate::{
    cli::formatting::Colors,
    clock::{ContainerStyle, Rgb, TextFill, TextStyle, format_clock, resolve},
    config::{Alignment, ClockConfig, VerticalAlignment},
    settings::SettingsPanel,
};

/// Widest the settings pane gets, in columns.
pub const SETTINGS_PANE_WIDTH: usize = 64;

/// Hint drawn in the top right corner while the settings pane is dismissed.
pub const REOPEN_HINT: &str = "[s] Customize";

const PANE_SEPARATOR: &str = "│";
const BOLD_WEIGHT: u32 = 600;
const DIM_OPACITY: f64 = 0.5;
const SPACING_PER_ROW: u32 = 16;
const SPACING_PER_COLUMN: u32 = 8;

/// Size of the terminal in character cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalSize {
    /// Width in columns.
    pub columns: usize,
    /// Height in rows.
    pub rows: usize,
}

impl Default for TerminalSize {
    fn default() -> Self {
        Self {
            columns: 80,
            rows: 24,
        }
    }
}

impl TerminalSize {
    /// Size of the controlling terminal.
    ///
    /// `COLUMNS` and `LINES` override the queried size when set. Falls back
    /// to 80x24 when stdout is not a terminal.
    pub fn detect() -> Self {
        let queried = terminal::size()
            .ok()
            .filter(|&(columns, rows)| columns > 0 && rows > 0)
            .map_or_else(Self::default, |(columns, rows)| Self {
                columns: usize::from(columns),
                rows: usize::from(rows),
            });

        queried.with_overrides(
            env::var("COLUMNS").ok().as_deref(),
            env::var("LINES").ok().as_deref(),
        )
    }

    /// Replaces each dimension that has a positive numeric override.
    pub fn with_overrides(self, columns: Option<&str>, rows: Option<&str>) -> Self {
        let read = |value: Option<&str>| {
            value
                .and_then(|v| v.trim().parse::<usize>().ok())
                .filter(|&v| v > 0)
        };

        Self {
            columns: read(columns).unwrap_or(self.columns),
            rows: read(rows).unwrap_or(self.rows),
        }
    }
}

/// Renders one full frame: the clock pane, and the settings pane when open.
///
/// Every returned line is exactly `size.columns` cells wide and there are
/// exactly `size.rows` lines, joined by `\n`. Colors use 24-bit ANSI
/// escapes.
pub fn render_frame(
    instant: NaiveDateTime,
    config: &ClockConfig,
    layout: &PaneLayout,
    size: TerminalSize,
) -> String {
    let settings_width = if layout.settings_open() {
        SETTINGS_PANE_WIDTH.min(size.columns / 2)
    } else {
        0
    };

    if settings_width == 0 {
        return clock_pane(instant, config, layout, size.columns, size.rows).join("\n");
    }

    let clock_width = size
        .columns
        .saturating_sub(settings_width + visible_width(PANE_SEPARATOR));
    let clock = clock_pane(instant, config, layout, clock_width, size.rows);
    let panel = SettingsPanel::new(config).render();

    clock
        .into_iter()
        .enumerate()
        .map(|(row, clock_line)| {
            let panel_line = panel.get(row).map_or("", String::as_str);
            format!(
                "{clock_line}{}{PANE_SEPARATOR}{}{}",
                Colors::DIM,
                Colors::RESET,
                fit_to_width(panel_line, settings_width)
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Number of visible cells in `line`, ignoring ANSI escape sequences.
pub fn visible_width(line: &str) -> usize {
    let mut width = 0;
    let mut chars = line.chars();

    while let Some(c) = chars.next() {
        if c == '\x1b' {
            for c in chars.by_ref() {
                if c == 'm' {
                    break;
                }
            }
            continue;
        }
        width += 1;
    }

    width
}

enum ClockLine {
    Time(String),
    Date(String),
    Gap,
}

fn clock_pane(
    instant: NaiveDateTime,
    config: &ClockConfig,
    layout: &PaneLayout,
    width: usize,
    rows: usize,
) -> Vec<String> {
    let text = format_clock(instant, config);
    let sheet = resolve(config);
    let background = Rgb::from_hex(&sheet.container.background_color).unwrap_or(Rgb::BLACK);

    let padding_rows = cells(config.spacing / SPACING_PER_ROW, rows);
    let padding_columns = cells(config.spacing / SPACING_PER_COLUMN, width);

    let mut block = vec![ClockLine::Time(text.time)];
    if let Some(date) = text.date {
        block.extend((0..padding_rows).map(|_| ClockLine::Gap));
        block.push(ClockLine::Date(date));
    }

    let top = match config.vertical_alignment {
        VerticalAlignment::Top => padding_rows,
        VerticalAlignment::Middle => rows.saturating_sub(block.len()) / 2,
        VerticalAlignment::Bottom => {
            rows.saturating_sub(block.len().saturating_add(padding_rows))
        }
    };
    let top = top.max(usize::from(layout.shows_reopen_control()));

    let mut lines = vec![blank_row(width, background); rows];

    for (offset, line) in block.into_iter().enumerate() {
        let Some(slot) = lines.get_mut(top + offset) else {
            break;
        };

        let painted = match line {
            ClockLine::Time(time) => Some((time, &sheet.time)),
            ClockLine::Date(date) => sheet.date.as_ref().map(|style| (date, style)),
            ClockLine::Gap => None,
        };

        if let Some((text, style)) = painted {
            *slot = text_row(
                &text,
                style,
                &sheet.container,
                width,
                padding_columns,
                background,
            );
        }
    }

    if layout.shows_reopen_control() {
        if let Some(first) = lines.first_mut() {
            *first = hint_row(width, background);
        }
    }

    lines
}

/// Converts a length in cells to `usize`, capped at `limit`.
fn cells(count: u32, limit: usize) -> usize {
    usize::try_from(count).map_or(limit, |count| count.min(limit))
}

fn text_row(
    text: &str,
    style: &TextStyle,
    container: &ContainerStyle,
    width: usize,
    padding: usize,
    background: Rgb,
) -> String {
    let available = width.saturating_sub(padding.saturating_mul(2));
    let glyphs: Vec<char> = text.chars().take(available).collect();
    let free = width - glyphs.len();

    let left = match container.text_align {
        Alignment::Left => padding.min(free),
        Alignment::Center => free / 2,
        Alignment::Right => free.saturating_sub(padding),
    };
    let right = free - left;

    let mut attributes = String::new();
    if style.font_weight >= BOLD_WEIGHT {
        attributes.push_str(Colors::BOLD);
    }
    if container.opacity < DIM_OPACITY {
        attributes.push_str(Colors::DIM);
    }

    let body = paint_glyphs(&glyphs, style);

    format!(
        "{bg}{}{attributes}{body}{reset}{bg}{}{reset}",
        " ".repeat(left),
        " ".repeat(right),
        bg = background_code(background),
        reset = Colors::RESET,
    )
}

fn paint_glyphs(glyphs: &[char], style: &TextStyle) -> String {
    match &style.fill {
        TextFill::Solid(color) => {
            let color = Rgb::from_hex(color).unwrap_or(Rgb::WHITE);
            format!("{}{}", foreground_code(color), glyphs.iter().collect::<String>())
        }
        TextFill::Transparent => {
            let color = style
                .stroke
                .as_ref()
                .and_then(|stroke| Rgb::from_hex(&stroke.color))
                .unwrap_or(Rgb::WHITE);
            format!("{}{}", foreground_code(color), glyphs.iter().collect::<String>())
        }
        TextFill::Gradient(gradient) => {
            let from = Rgb::from_hex(&gradient.from).unwrap_or(Rgb::WHITE);
            let to = Rgb::from_hex(&gradient.to).unwrap_or(Rgb::WHITE);
            let last = glyphs.len().saturating_sub(1).max(1) as f64;

            glyphs
                .iter()
                .enumerate()
                .map(|(i, glyph)| {
                    let color = from.lerp(to, i as f64 / last);
                    format!("{}{glyph}", foreground_code(color))
                })
                .collect()
        }
    }
}

fn blank_row(width: usize, background: Rgb) -> String {
    format!(
        "{}{}{}",
        background_code(background),
        " ".repeat(width),
        Colors::RESET
    )
}

fn hint_row(width: usize, background: Rgb) -> String {
    let hint: String = REOPEN_HINT.chars().take(width).collect();
    let hint_width = hint.chars().count();
    let left = width.saturating_sub(hint_width + 1);
    let right = width - left - hint_width;

    format!(
        "{bg}{}{}{hint}{reset}{bg}{}{reset}",
        " ".repeat(left),
        Colors::DIM,
        " ".repeat(right),
        bg = background_code(background),
        reset = Colors::RESET,
    )
}

fn fit_to_width(line: &str, width: usize) -> String {
    let mut fitted = String::new();
    let mut visible = 0;
    let mut chars = line.chars();

    while let Some(c) = chars.next() {
        if c == '\x1b' {
            fitted.push(c);
            for c in chars.by_ref() {
                fitted.push(c);
                if c == 'm' {
                    break;
                }
            }
            continue;
        }

        if visible == width {
            break;
        }
        fitted.push(c);
        visible += 1;
    }

    fitted.push_str(Colors::RESET);
    fitted.push_str(&" ".repeat(width - visible));
    fitted
}

fn foreground_code(color: Rgb) -> String {
    format!("\x1b[38;2;{};{};{}m", color.r, color.g, color.b)
}

fn background_code(color: Rgb) -> String {
    format!("\x1b[48;2;{};{};{}m", color.r, color.g, color.b)
}
