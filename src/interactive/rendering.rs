//! TUI rendering with ratatui
//!
//! Board grid, round status, messages and the end-of-round reveal.

use super::app::{App, MessageStyle};
use crate::core::{GRID_SIZE, GROUP_COUNT, Tile};
use crate::engine::{LossReason, Phase};
use crate::output::formatters::mistake_dots;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Gauge, List, ListItem, Paragraph, Wrap},
};

const TILE_BG: Color = Color::Rgb(239, 239, 230);
const SELECTED_BG: Color = Color::Rgb(90, 89, 78);

/// Header, board panel, side panel and status bar
fn regions(area: Rect) -> [Rect; 4] {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Board and side panel
            Constraint::Length(3), // Status bar
        ])
        .split(area);

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
        .split(rows[1]);

    [rows[0], cols[0], cols[1], rows[2]]
}

/// Area the 4x4 tile grid occupies within a frame of size `area`
///
/// The first line inside the board panel is reserved for the hint banner.
#[must_use]
pub fn board_grid(area: Rect) -> Rect {
    let inner = Block::default().borders(Borders::ALL).inner(regions(area)[1]);
    Rect {
        y: inner.y.saturating_add(1),
        height: inner.height.saturating_sub(1),
        ..inner
    }
}

fn tile_cells(grid: Rect) -> Vec<Rect> {
    let quarter = [Constraint::Ratio(1, GRID_SIZE as u32); GRID_SIZE];
    Layout::default()
        .direction(Direction::Vertical)
        .constraints(quarter)
        .split(grid)
        .iter()
        .flat_map(|row| {
            Layout::default()
                .direction(Direction::Horizontal)
                .constraints(quarter)
                .split(*row)
                .to_vec()
        })
        .collect()
}

/// Tile index under a terminal cell, for a frame of size `area`
#[must_use]
pub fn tile_at(area: Rect, column: u16, row: u16) -> Option<usize> {
    let point = Position::new(column, row);
    tile_cells(board_grid(area))
        .iter()
        .position(|cell| cell.contains(point))
}

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let [header, board, side, status] = regions(f.area());

    render_header(f, header);
    render_board(f, app, board);
    render_side_panel(f, app, side);
    render_status(f, app, status);

    if app.game.round().phase().is_over() {
        render_endgame(f, app, board);
    }
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🔗 CONNECTIONS - Find four groups of four")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let round = app.game.round();

    // Red frame while a wrong guess is shaking
    let border = if round.shake() { Color::Red } else { Color::Cyan };
    let block = Block::default()
        .title(format!(" Board · {} ", round.mode()))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .style(Style::default().fg(border));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let banner = if round.near_miss() {
        Line::from(Span::styled(
            "One away...",
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        ))
    } else {
        Line::from(Span::styled(
            format!("Selected {}/4", round.selection().len()),
            Style::default().fg(Color::DarkGray),
        ))
    };
    let banner_area = Rect { height: 1.min(inner.height), ..inner };
    f.render_widget(
        Paragraph::new(banner).alignment(Alignment::Center),
        banner_area,
    );

    for (tile, cell) in round.tiles().iter().zip(tile_cells(board_grid(f.area()))) {
        render_tile(f, app, tile, cell);
    }
}

fn render_tile(f: &mut Frame, app: &App, tile: &Tile, area: Rect) {
    let (fg, bg) = if tile.is_solved() || tile.is_animating() {
        let (r, g, b) = app.game.group(tile.group()).color().rgb();
        (Color::Black, Color::Rgb(r, g, b))
    } else if tile.is_selected() {
        (Color::White, SELECTED_BG)
    } else {
        (Color::Black, TILE_BG)
    };

    let mut text_style = Style::default().fg(fg).bg(bg).add_modifier(Modifier::BOLD);
    if tile.is_animating() {
        text_style = text_style.add_modifier(Modifier::ITALIC);
    }

    let (border_type, border_style) = if tile.is_focused() {
        (BorderType::Thick, Style::default().fg(Color::Yellow).bg(bg))
    } else {
        (BorderType::Plain, Style::default().fg(bg).bg(bg))
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(border_type)
        .border_style(border_style)
        .style(Style::default().bg(bg));
    let inner = block.inner(area);

    let padding = usize::from(inner.height.saturating_sub(1) / 2);
    let mut lines = vec![Line::from(""); padding];
    lines.push(Line::from(Span::styled(tile.text().to_uppercase(), text_style)));

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(block);
    f.render_widget(paragraph, area);
}

fn render_side_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(6), // Round status
            Constraint::Length(3), // Groups found
            Constraint::Min(4),    // Messages
        ])
        .split(area);

    render_round_status(f, app, chunks[0]);
    render_progress(f, app, chunks[1]);
    render_messages(f, app, chunks[2]);
}

fn render_round_status(f: &mut Frame, app: &App, area: Rect) {
    let round = app.game.round();

    let (phase_text, phase_color) = match round.phase() {
        Phase::Playing => ("Playing", Color::White),
        Phase::Won => ("Solved!", Color::Green),
        Phase::Lost(LossReason::OutOfMistakes) => ("Out of mistakes", Color::Red),
        Phase::Lost(LossReason::GaveUp) => ("Gave up", Color::Yellow),
    };

    let content = vec![
        Line::from(vec![
            Span::raw("Mistakes left: "),
            Span::styled(
                mistake_dots(round.mistakes(), round.max_mistakes()),
                Style::default().fg(Color::Yellow),
            ),
        ]),
        Line::from(vec![
            Span::raw("Status:        "),
            Span::styled(
                phase_text,
                Style::default()
                    .fg(phase_color)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(format!("Selected:      {}/4", round.selection().len())),
        Line::from(format!("Mode:          {}", round.mode())),
    ];

    let paragraph = Paragraph::new(content).block(
        Block::default()
            .title(" Round ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(paragraph, area);
}

fn render_progress(f: &mut Frame, app: &App, area: Rect) {
    let solved = app.game.round().solved().len();
    let percent = u16::try_from(solved * 100 / GROUP_COUNT).unwrap_or(100);

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Groups Found ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Green))
        .percent(percent)
        .label(format!("{solved}/{GROUP_COUNT}"));

    f.render_widget(gauge, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
                MessageStyle::Hint => Style::default().fg(Color::Magenta),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(30), Constraint::Percentage(70)])
        .split(area);

    let stats_text = format!(
        "Rounds: {} | Win Rate: {:.0}%",
        app.stats.rounds_played,
        app.stats.win_rate()
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[0]);

    let help_text = if app.game.round().phase().is_over() {
        "q: Quit | n: New Round | m: Switch Mode"
    } else {
        "←↑↓→: Move | Space: Pick | s: Submit | r: Shuffle | g: Give Up | m: Mode | q: Quit"
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[1]);
}

/// Groups in solve order, then the ones left, over the board
fn render_endgame(f: &mut Frame, app: &App, board: Rect) {
    let round = app.game.round();

    let (title, color) = match round.phase() {
        Phase::Won => (" 🎉 ALL GROUPS FOUND! 🎉 ", Color::Green),
        Phase::Lost(LossReason::OutOfMistakes) => (" Out of mistakes ", Color::Red),
        Phase::Lost(LossReason::GaveUp) | Phase::Playing => (" The groups ", Color::Yellow),
    };

    let mut lines = Vec::new();
    for id in round.endgame_group_order() {
        let group = app.game.group(id);
        let (r, g, b) = group.color().rgb();
        let words: Vec<&str> = app
            .game
            .puzzle()
            .words()
            .iter()
            .filter(|(_, g)| *g == id)
            .map(|(w, _)| w.as_str())
            .collect();
        let marker = if round.is_group_solved(id) { "✓ " } else { "  " };

        lines.push(Line::from(vec![
            Span::raw(marker),
            Span::styled(
                format!(" {} ", group.name().to_uppercase()),
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Rgb(r, g, b))
                    .add_modifier(Modifier::BOLD),
            ),
        ]));
        lines.push(Line::from(format!("    {}", words.join(", "))));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        format!(
            "Mistakes: {}/{}   n: new round",
            round.mistakes(),
            round.max_mistakes()
        ),
        Style::default().fg(Color::DarkGray),
    )));

    let height = u16::try_from(lines.len() + 2).unwrap_or(u16::MAX);
    let popup = centered(board, 80, height);
    f.render_widget(Clear, popup);
    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .title(title)
                .title_alignment(Alignment::Center)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );
    f.render_widget(paragraph, popup);
}

/// `percent_x` wide and `height` tall, centered in `area`
fn centered(area: Rect, percent_x: u16, height: u16) -> Rect {
    let width = u16::try_from(u32::from(area.width) * u32::from(percent_x.min(100)) / 100)
        .unwrap_or(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
