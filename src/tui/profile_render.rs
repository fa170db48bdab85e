//! Profile Setup Rendering
//!
//! Render functions for the profile setup step. All lines are built from
//! owned strings so the frame borrows nothing from app state.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use super::profile_step::{AVATAR_PRESETS, ProfileField, ProfileSetupStep, UPLOAD_SLOT};
use crate::profile::ProfileDraft;

/// Main color palette
const BRAND_CORAL: Color = Color::Rgb(233, 116, 81);
const BRAND_SAND: Color = Color::Rgb(210, 180, 140);
const ACCENT_AMBER: Color = Color::Rgb(255, 179, 71);

/// Width text is wrapped to inside the form box
const FIELD_WIDTH: usize = 56;

/// Render the profile setup step, including the upload notice overlay.
pub fn render(f: &mut Frame, step: &ProfileSetupStep, draft: &ProfileDraft) {
    let area = f.area();

    // Center the form
    let v_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(30.min(area.height.saturating_sub(2))),
            Constraint::Min(0),
        ])
        .split(area);

    let h_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(64.min(area.width.saturating_sub(2))),
            Constraint::Min(0),
        ])
        .split(v_chunks[1]);

    let form_area = h_chunks[1];

    let mut lines: Vec<Line<'static>> = Vec::new();

    // Header
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        step.title().to_string(),
        Style::default()
            .fg(BRAND_CORAL)
            .add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(Span::styled(
        step.subtitle().to_string(),
        Style::default().fg(Color::DarkGray),
    )));
    lines.push(Line::from(""));

    render_avatar_row(&mut lines, step, draft);
    lines.push(Line::from(""));

    push_text_field(
        &mut lines,
        "Full Name *",
        &draft.name,
        "Enter your full name",
        "",
        step.focus == ProfileField::Name,
        &step.errors.name,
    );
    push_text_field(
        &mut lines,
        "Username *",
        &draft.username,
        "Choose a username",
        "@",
        step.focus == ProfileField::Username,
        &step.errors.username,
    );
    push_text_field(
        &mut lines,
        "Email Address *",
        &draft.email,
        "your.email@example.com",
        "",
        step.focus == ProfileField::Email,
        &step.errors.email,
    );
    push_text_field(
        &mut lines,
        "Bio (optional)",
        &draft.bio,
        "Tell us a bit about yourself",
        "",
        step.focus == ProfileField::Bio,
        "",
    );

    // Continue button
    lines.push(Line::from(""));
    let continue_focused = step.focus == ProfileField::Continue;
    lines.push(Line::from(vec![
        Span::styled(
            if continue_focused { "  > " } else { "    " },
            Style::default().fg(ACCENT_AMBER),
        ),
        Span::styled(
            "[ Continue ]",
            Style::default()
                .fg(if continue_focused {
                    Color::White
                } else {
                    Color::DarkGray
                })
                .add_modifier(if continue_focused {
                    Modifier::BOLD
                } else {
                    Modifier::empty()
                }),
        ),
    ]));

    // Footer
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled(
            "  [Tab] ",
            Style::default().fg(BRAND_SAND).add_modifier(Modifier::BOLD),
        ),
        Span::styled("Next Field  ", Style::default().fg(Color::White)),
        Span::styled(
            "[Enter] ",
            Style::default()
                .fg(ACCENT_AMBER)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("Confirm  ", Style::default().fg(Color::White)),
        Span::styled(
            "[Esc] ",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
        Span::styled("Back  ", Style::default().fg(Color::White)),
        Span::styled(
            "[Ctrl+C] ",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
        Span::styled("Cancel", Style::default().fg(Color::White)),
    ]));

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(BRAND_CORAL))
                .title(Span::styled(
                    " Crabfolio Setup ",
                    Style::default()
                        .fg(BRAND_CORAL)
                        .add_modifier(Modifier::BOLD),
                )),
        )
        .alignment(Alignment::Left)
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, form_area);

    if step.upload_notice {
        render_upload_notice(f);
    }
}

/// Avatar preset row: four selectable presets plus the upload slot.
fn render_avatar_row(lines: &mut Vec<Line<'static>>, step: &ProfileSetupStep, draft: &ProfileDraft) {
    let focused = step.focus == ProfileField::Avatar;

    lines.push(Line::from(Span::styled(
        "Profile Picture".to_string(),
        Style::default()
            .fg(if focused { ACCENT_AMBER } else { Color::DarkGray })
            .add_modifier(Modifier::BOLD),
    )));

    let mut spans: Vec<Span<'static>> = vec![Span::raw(" ")];
    for (i, preset) in AVATAR_PRESETS.iter().enumerate() {
        let selected = draft.avatar == *preset;
        let at_cursor = focused && step.avatar_cursor == i;

        spans.push(Span::styled(
            if at_cursor { " >" } else { "  " },
            Style::default().fg(ACCENT_AMBER),
        ));
        spans.push(Span::styled(
            if selected { "(*)" } else { "( )" },
            Style::default().fg(if selected { BRAND_CORAL } else { Color::DarkGray }),
        ));
        spans.push(Span::styled(
            format!(" {}", i + 1),
            Style::default()
                .fg(if at_cursor { Color::White } else { Color::DarkGray })
                .add_modifier(if at_cursor { Modifier::BOLD } else { Modifier::empty() }),
        ));
    }

    let at_upload = focused && step.avatar_cursor == UPLOAD_SLOT;
    spans.push(Span::styled(
        if at_upload { "  >" } else { "   " },
        Style::default().fg(ACCENT_AMBER),
    ));
    spans.push(Span::styled(
        "[ Upload ]",
        Style::default()
            .fg(if at_upload { Color::White } else { Color::DarkGray })
            .add_modifier(if at_upload { Modifier::BOLD } else { Modifier::empty() }),
    ));

    lines.push(Line::from(spans));
}

/// One labeled text field with placeholder, cursor and inline error.
fn push_text_field(
    lines: &mut Vec<Line<'static>>,
    label: &str,
    value: &str,
    placeholder: &str,
    prefix: &str,
    focused: bool,
    error: &str,
) {
    lines.push(Line::from(Span::styled(
        label.to_string(),
        Style::default()
            .fg(if focused { ACCENT_AMBER } else { Color::DarkGray })
            .add_modifier(Modifier::BOLD),
    )));

    let (text, style) = if value.is_empty() && !focused {
        (
            format!("  {}{}", prefix, placeholder),
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        )
    } else {
        let cursor = if focused { "_" } else { "" };
        (
            format!("  {}{}{}", prefix, value, cursor),
            Style::default().fg(if focused { Color::White } else { Color::Gray }),
        )
    };
    for chunk in wrap_text(&text, FIELD_WIDTH) {
        lines.push(Line::from(Span::styled(chunk, style)));
    }

    if !error.is_empty() {
        lines.push(Line::from(Span::styled(
            format!("  ! {}", error),
            Style::default().fg(Color::Red),
        )));
    }
}

/// Modal notice shown when the user tries the unsupported upload action.
fn render_upload_notice(f: &mut Frame) {
    let area = centered_rect_fixed(54, 9, f.area());

    // Clear the background behind the dialog
    f.render_widget(Clear, area);

    let mut lines = vec![Line::from("")];
    for chunk in wrap_text(
        "Custom avatar upload is not available in this preview. \
         Please select one of the provided avatars.",
        48,
    ) {
        lines.push(Line::from(Span::styled(
            format!(" {}", chunk),
            Style::default().fg(Color::White),
        )));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled(
            " [Enter] ",
            Style::default()
                .fg(ACCENT_AMBER)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("Close", Style::default().fg(Color::White)),
    ]));

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(BRAND_SAND))
                .title(Span::styled(
                    " Upload Feature ",
                    Style::default()
                        .fg(BRAND_SAND)
                        .add_modifier(Modifier::BOLD),
                )),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, area);
}

/// A fixed-size rect centered within `area`, clamped to fit.
fn centered_rect_fixed(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width, height)
}

/// Byte index of the boundary closest to `max_width` display columns.
fn char_boundary_at_width(s: &str, max_width: usize) -> usize {
    let mut width = 0;
    for (idx, ch) in s.char_indices() {
        let w = ch.width().unwrap_or(0);
        if width + w > max_width {
            return idx;
        }
        width += w;
    }
    s.len()
}

/// Wrap a string into chunks of at most `max_width` display columns,
/// breaking at spaces where possible.
fn wrap_text(text: &str, max_width: usize) -> Vec<String> {
    if text.width() <= max_width {
        return vec![text.to_string()];
    }
    let mut result = Vec::new();
    let mut remaining = text;
    while !remaining.is_empty() {
        if remaining.width() <= max_width {
            result.push(remaining.to_string());
            break;
        }
        let byte_limit = char_boundary_at_width(remaining, max_width);
        let break_at = remaining[..byte_limit].rfind(' ').unwrap_or(byte_limit);
        // Never emit an empty chunk: fall back to a hard break
        let break_at = if break_at == 0 {
            byte_limit.max(
                remaining
                    .chars()
                    .next()
                    .map(|c| c.len_utf8())
                    .unwrap_or(remaining.len()),
            )
        } else {
            break_at
        };
        result.push(remaining[..break_at].to_string());
        remaining = remaining[break_at..].trim_start();
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_text_short_is_single_chunk() {
        assert_eq!(wrap_text("hello", 10), vec!["hello".to_string()]);
    }

    #[test]
    fn test_wrap_text_breaks_at_spaces() {
        let chunks = wrap_text("one two three four", 9);
        assert_eq!(
            chunks,
            vec!["one two".to_string(), "three".to_string(), "four".to_string()]
        );
        for chunk in &chunks {
            assert!(chunk.width() <= 9);
        }
    }

    #[test]
    fn test_wrap_text_hard_breaks_long_words() {
        let chunks = wrap_text("abcdefghij", 4);
        assert_eq!(chunks.len(), 3);
        assert_eq!(chunks.join(""), "abcdefghij");
    }

    #[test]
    fn test_char_boundary_at_width_multibyte() {
        // Two double-width characters
        let s = "ありがとう";
        let idx = char_boundary_at_width(s, 4);
        assert!(s.is_char_boundary(idx));
        assert_eq!(&s[..idx], "あり");
    }

    #[test]
    fn test_centered_rect_fixed_fits_in_area() {
        let area = Rect::new(0, 0, 80, 24);
        let rect = centered_rect_fixed(54, 9, area);
        assert_eq!(rect.width, 54);
        assert_eq!(rect.height, 9);
        assert!(rect.x + rect.width <= area.width);
        assert!(rect.y + rect.height <= area.height);
    }

    #[test]
    fn test_centered_rect_fixed_clamps_to_small_area() {
        let area = Rect::new(0, 0, 20, 5);
        let rect = centered_rect_fixed(54, 9, area);
        assert_eq!(rect.width, 20);
        assert_eq!(rect.height, 5);
    }
}
