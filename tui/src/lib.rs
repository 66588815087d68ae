//! TUI rendering for Raffle using ratatui.

mod input;
mod theme;

pub use input::{InputPump, handle_events};
pub use theme::{Glyphs, Palette, glyphs, palette, spinner_frame, styles};

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, ListState, Paragraph},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use raffle_engine::{App, DraftInput, DrawState, InputMode, StatusKind};

/// Shown in the winner panel until the first draw starts.
pub const NO_DRAW_YET: &str = "No draw yet";
const DRAWING_LABEL: &str = "Drawing...";

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let options = app.ui_options();
    let palette = palette(options);
    let glyphs = glyphs(options);
    let bg_block = Block::default().style(Style::default().bg(palette.bg_dark));
    frame.render_widget(bg_block, frame.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(1), // Title
            Constraint::Length(3), // Name input
            Constraint::Min(5),    // Roster + winner
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    draw_title(frame, chunks[0], &palette);
    draw_input(frame, app, chunks[1], &palette, &glyphs);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(chunks[2]);
    draw_roster(frame, app, body[0], &palette, &glyphs);

    if app.history().is_empty() {
        draw_winner(frame, app, body[1], &palette, &glyphs);
    } else {
        let right = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(7), Constraint::Min(3)])
            .split(body[1]);
        draw_winner(frame, app, right[0], &palette, &glyphs);
        draw_history(frame, app, right[1], &palette, &glyphs);
    }

    draw_status_bar(frame, app, chunks[3], &palette, &glyphs);
}

fn draw_title(frame: &mut Frame, area: Rect, palette: &Palette) {
    let title = Paragraph::new(Line::from(Span::styled(
        "Raffle Draw",
        styles::title(palette),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(title, area);
}

fn draw_input(frame: &mut Frame, app: &App, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    let mode = app.input_mode();
    let drawing = app.is_drawing();
    let prompt_char = if app.ui_options().ascii_only { ">" } else { "❯" };

    let (mode_label, mode_style, border_style) = if drawing {
        (
            "DRAWING",
            styles::mode_drawing(palette),
            styles::disabled(palette),
        )
    } else {
        match mode {
            InputMode::Normal => (
                "NORMAL",
                styles::mode_normal(palette),
                Style::default().fg(palette.text_muted),
            ),
            InputMode::Insert => (
                "INSERT",
                styles::mode_insert(palette),
                Style::default().fg(palette.green),
            ),
        }
    };

    let hints = key_hints(app, palette, glyphs);

    let prefix = format!(" {prompt_char} ");
    let prefix_width = prefix.width() as u16;
    let content_width = area
        .width
        .saturating_sub(2)
        .saturating_sub(prefix_width)
        .max(1) as usize;

    let draft = app.draft();
    let (display_text, cursor_col) = visible_window(draft, content_width);
    let text_style = if drawing {
        styles::disabled(palette)
    } else {
        Style::default().fg(palette.text_primary)
    };
    let line = if draft.is_empty() && mode == InputMode::Normal {
        Line::from(vec![
            Span::styled(prefix, Style::default().fg(palette.primary)),
            Span::styled("Add a participant...", styles::key_hint(palette)),
        ])
    } else {
        Line::from(vec![
            Span::styled(prefix, Style::default().fg(palette.primary)),
            Span::styled(display_text, text_style),
        ])
    };

    let input = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .title_top(Line::from(vec![Span::styled(
                format!(" {mode_label} "),
                mode_style,
            )]))
            .title_top(Line::from(hints).alignment(Alignment::Right)),
    );
    frame.render_widget(input, area);

    if mode == InputMode::Insert && !drawing {
        let cursor_x = area
            .x
            .saturating_add(1 + prefix_width)
            .saturating_add(cursor_col);
        frame.set_cursor_position((cursor_x, area.y.saturating_add(1)));
    }
}

fn key_hints(app: &App, palette: &Palette, glyphs: &Glyphs) -> Vec<Span<'static>> {
    let pairs: &[(&str, &str)] = if app.is_drawing() {
        &[("q", " quit ")]
    } else {
        match app.input_mode() {
            InputMode::Insert => &[("Enter", " add  "), ("Esc", " done ")],
            InputMode::Normal if app.can_draw() => &[
                ("i", " add  "),
                ("d", " remove  "),
                ("c", " clear  "),
                ("Enter", " draw  "),
                ("q", " quit "),
            ],
            InputMode::Normal => &[("i", " add  "), ("q", " quit ")],
        }
    };
    let mut spans = Vec::with_capacity(pairs.len() * 2 + 1);
    for (key, label) in pairs {
        spans.push(Span::styled(*key, styles::key_highlight(palette)));
        spans.push(Span::styled(*label, styles::key_hint(palette)));
    }
    if app.input_mode() == InputMode::Normal && app.participants().len() > 1 && !app.is_drawing() {
        spans.insert(0, Span::styled(format!("{} ", glyphs.separator), styles::key_hint(palette)));
        spans.insert(0, Span::styled(" select ", styles::key_hint(palette)));
        spans.insert(0, Span::styled("j/k", styles::key_highlight(palette)));
    }
    spans
}

/// Slice of the draft that fits in `width` columns with the cursor visible,
/// plus the cursor's column within that slice.
fn visible_window(draft: &DraftInput, width: usize) -> (String, u16) {
    let chars: Vec<char> = draft.text().chars().collect();
    let cursor = draft.cursor().min(chars.len());
    let col_of = |range: &[char]| -> usize { range.iter().filter_map(|c| c.width()).sum() };

    let mut start = 0;
    while start < cursor && col_of(&chars[start..cursor]) >= width {
        start += 1;
    }
    let cursor_col = col_of(&chars[start..cursor]);

    let mut visible = String::new();
    let mut used = 0;
    for c in &chars[start..] {
        let w = c.width().unwrap_or(0);
        if used + w > width {
            break;
        }
        used += w;
        visible.push(*c);
    }
    (visible, u16::try_from(cursor_col).unwrap_or(u16::MAX))
}

fn draw_roster(frame: &mut Frame, app: &App, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    let participants = app.participants();
    let drawing = app.is_drawing();
    let border_style = if drawing {
        styles::disabled(palette)
    } else {
        Style::default().fg(palette.bg_border)
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border_style)
        .title(Span::styled(
            format!(" Participants ({}) ", participants.len()),
            Style::default()
                .fg(palette.text_primary)
                .add_modifier(Modifier::BOLD),
        ));

    if participants.is_empty() {
        let empty = Paragraph::new(Line::from(Span::styled(
            "Press i to add names",
            styles::key_hint(palette),
        )))
        .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let item_style = if drawing {
        styles::disabled(palette)
    } else {
        Style::default().fg(palette.text_secondary)
    };
    let items: Vec<ListItem> = participants
        .iter()
        .map(|p| {
            ListItem::new(Line::from(vec![
                Span::styled(format!("{} ", glyphs.bullet), styles::key_hint(palette)),
                Span::styled(p.to_string(), item_style),
            ]))
        })
        .collect();

    let highlight = if drawing {
        item_style
    } else {
        Style::default()
            .fg(palette.text_primary)
            .bg(palette.bg_highlight)
            .add_modifier(Modifier::BOLD)
    };
    let list = List::new(items)
        .block(block)
        .highlight_style(highlight)
        .highlight_symbol(format!("{} ", glyphs.selected));

    let mut state = ListState::default();
    if app.input_mode() == InputMode::Normal {
        state.select(app.selected());
    }
    frame.render_stateful_widget(list, area, &mut state);
}

fn draw_winner(frame: &mut Frame, app: &App, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette.bg_border))
        .title(Span::styled(" Winner ", styles::title(palette)));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(inner);

    let headline = match (app.draw_state(), app.display()) {
        (DrawState::Running, Some(candidate)) => {
            Line::from(Span::styled(candidate.to_string(), styles::candidate(palette)))
        }
        (DrawState::Running, None) => Line::from(""),
        (DrawState::Settled, Some(winner)) => {
            let style = if app.winner_lit() {
                styles::winner(palette)
            } else {
                styles::candidate(palette)
            };
            Line::from(vec![
                Span::styled(format!("{} ", glyphs.winner), style),
                Span::styled(winner.to_string(), style),
                Span::styled(format!(" {}", glyphs.winner), style),
            ])
        }
        (_, Some(name)) => Line::from(Span::styled(name.to_string(), styles::candidate(palette))),
        (_, None) => Line::from(Span::styled(NO_DRAW_YET, styles::key_hint(palette))),
    };
    let headline_area = vertical_center(rows[0], 1);
    frame.render_widget(
        Paragraph::new(headline).alignment(Alignment::Center),
        headline_area,
    );

    if let Some(progress) = app.reveal_progress() {
        let spinner = spinner_frame(app.tick_count(), app.ui_options());
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                format!("{spinner} {DRAWING_LABEL}"),
                Style::default().fg(palette.primary),
            )))
            .alignment(Alignment::Center),
            rows[1],
        );
        let gauge = Gauge::default()
            .gauge_style(Style::default().fg(palette.accent).bg(palette.bg_highlight))
            .ratio(progress.clamp(0.0, 1.0))
            .label("");
        frame.render_widget(gauge, rows[2]);
    }
}

fn vertical_center(area: Rect, height: u16) -> Rect {
    let height = height.min(area.height);
    Rect {
        y: area.y + (area.height - height) / 2,
        height,
        ..area
    }
}

fn draw_history(frame: &mut Frame, app: &App, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    let history = app.history();
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette.bg_border))
        .title(Span::styled(
            format!(" History ({}) ", history.len()),
            Style::default().fg(palette.text_primary),
        ));

    let visible = block.inner(area).height as usize;
    let lines: Vec<Line> = history
        .records()
        .take(visible)
        .map(|record| {
            Line::from(vec![
                Span::styled(record.timestamp(), styles::key_hint(palette)),
                Span::styled(format!(" {} ", glyphs.separator), styles::key_hint(palette)),
                Span::styled(
                    record.winner().to_string(),
                    Style::default().fg(palette.text_primary),
                ),
            ])
        })
        .collect();
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn draw_status_bar(frame: &mut Frame, app: &App, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    let (status_text, status_style) = if let Some(msg) = app.status_message() {
        let (prefix, color) = match app.status_kind() {
            StatusKind::Error => ("Error: ", palette.error),
            StatusKind::Warning => ("Warning: ", palette.warning),
            StatusKind::Success => ("", palette.success),
            StatusKind::Info => ("", palette.text_secondary),
        };
        (format!("{prefix}{msg}"), Style::default().fg(color))
    } else if app.is_drawing() {
        let spinner = spinner_frame(app.tick_count(), app.ui_options());
        (
            format!("{spinner} {DRAWING_LABEL}"),
            Style::default().fg(palette.primary),
        )
    } else {
        let count = app.participants().len();
        let noun = if count == 1 { "participant" } else { "participants" };
        (
            format!(
                "{count} {noun} {} {} draws",
                glyphs.separator,
                app.history().len()
            ),
            Style::default().fg(palette.text_muted),
        )
    };

    let status = Paragraph::new(Line::from(vec![
        Span::raw(" "),
        Span::styled(status_text, status_style),
    ]));
    frame.render_widget(status, area);
}
