#![forbid(unsafe_code)]

//! Terminal rendering of a panel.
//!
//! Escape-coded text is turned into styled runs, and each run is printed
//! with the matching crossterm colors and attributes.

use std::io::{self, Write};

use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::style::{Attribute, Color, ContentStyle, PrintStyledContent, ResetColor};
use crossterm::terminal::{Clear, ClearType};
use scoreline::{ActiveStyle, FormatCode, FormatFlags};
use scoreline::style::{Token, tokens};

/// A stretch of text drawn in one style.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Run {
    /// Style of the run.
    pub style: ActiveStyle,
    /// Visible text.
    pub text: String,
}

/// Break escape-coded `text` into styled runs.
///
/// Escapes with an unrecognized code are dropped, as a client would.
#[must_use]
pub fn styled_runs(text: &str) -> Vec<Run> {
    let mut runs: Vec<Run> = Vec::new();
    let mut style = ActiveStyle::DEFAULT;
    for token in tokens(text) {
        match token {
            Token::Text(c) => match runs.last_mut() {
                Some(run) if run.style == style => run.text.push(c),
                _ => runs.push(Run {
                    style,
                    text: c.to_string(),
                }),
            },
            Token::Escape(_) => {
                if let Some(code) = token.format_code() {
                    style = style.apply(code);
                }
            }
            Token::Dangling => {}
        }
    }
    runs
}

/// Crossterm style for an [`ActiveStyle`].
#[must_use]
pub fn content_style(style: ActiveStyle) -> ContentStyle {
    let mut out = ContentStyle::new();
    if let Some((r, g, b)) = style.color.and_then(FormatCode::rgb) {
        out.foreground_color = Some(Color::Rgb { r, g, b });
    }
    let attributes = [
        (FormatFlags::BOLD, Attribute::Bold),
        (FormatFlags::ITALIC, Attribute::Italic),
        (FormatFlags::UNDERLINE, Attribute::Underlined),
        (FormatFlags::STRIKETHROUGH, Attribute::CrossedOut),
        (FormatFlags::OBFUSCATED, Attribute::RapidBlink),
    ];
    for (flag, attribute) in attributes {
        if style.flags.contains(flag) {
            out.attributes.set(attribute);
        }
    }
    out
}

fn dim() -> ContentStyle {
    let mut style = ContentStyle::new();
    style.foreground_color = Some(Color::DarkGrey);
    style
}

fn print_line(out: &mut impl Write, row: u16, text: &str) -> io::Result<()> {
    queue!(out, MoveTo(0, row), Clear(ClearType::CurrentLine))?;
    for run in styled_runs(text) {
        queue!(
            out,
            PrintStyledContent(content_style(run.style).apply(run.text))
        )?;
    }
    queue!(out, ResetColor)
}

/// Draw a framed panel at the top-left of the screen.
pub fn draw_panel(out: &mut impl Write, title: &str, lines: &[String], footer: &str) -> io::Result<()> {
    let mut row = 0;
    print_line(out, row, title)?;
    row += 1;
    queue!(
        out,
        MoveTo(0, row),
        Clear(ClearType::CurrentLine),
        PrintStyledContent(dim().apply("─".repeat(24)))
    )?;
    for line in lines {
        row += 1;
        print_line(out, row, line)?;
    }
    row += 2;
    queue!(
        out,
        MoveTo(0, row),
        Clear(ClearType::CurrentLine),
        PrintStyledContent(dim().apply(footer)),
        Clear(ClearType::FromCursorDown)
    )?;
    out.flush()
}
