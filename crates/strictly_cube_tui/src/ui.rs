//! Stateless UI rendering for the cube.

use crate::app::App;
use crate::prefs::{KeyValueStore, Preference};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use strictly_cube::{Cell, Player, SIDE, Square};
use strum::IntoEnumIterator;

const PANEL_WIDTH: u16 = 34;
const ROW_SEPARATOR: &str = "───┼───┼───";

/// Renders the whole screen.
pub fn draw<S: KeyValueStore>(frame: &mut Frame, app: &App<S>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(9),    // Body
            Constraint::Length(3), // Status
        ])
        .split(frame.area());

    let title = Paragraph::new("Strictly Cube - 3x3x3 Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    let body = if app.prefs().get(Preference::ShowPanel) {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(40), Constraint::Length(PANEL_WIDTH)])
            .split(chunks[1]);
        draw_panel(frame, cols[1], app);
        cols[0]
    } else {
        chunks[1]
    };
    draw_cube(frame, body, app);

    let status = Paragraph::new(app.status_message())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[2]);
}

/// Draws the three layers side by side, top layer (z = 0) first.
fn draw_cube<S: KeyValueStore>(frame: &mut Frame, area: Rect, app: &App<S>) {
    let layers = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 3); 3])
        .split(area);

    for z in 0..SIDE {
        let focused = app.cursor().z() == z;
        let border = if focused {
            Style::default().fg(Color::White)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border)
            .title(format!(" Layer {} ", z + 1));
        let grid = Paragraph::new(layer_lines(app, z))
            .alignment(Alignment::Center)
            .block(block);
        frame.render_widget(grid, layers[z as usize]);
    }
}

fn layer_lines<S: KeyValueStore>(app: &App<S>, z: u8) -> Vec<Line<'static>> {
    let separator = Style::default().fg(Color::DarkGray);
    let mut lines = Vec::new();
    for y in 0..SIDE {
        if y > 0 {
            lines.push(Line::from(Span::styled(ROW_SEPARATOR, separator)));
        }
        let mut spans = Vec::new();
        for x in 0..SIDE {
            if x > 0 {
                spans.push(Span::styled("│", separator));
            }
            if let Ok(cell) = Cell::new(x, y, z) {
                spans.push(cell_span(app, cell));
            }
        }
        lines.push(Line::from(spans));
    }
    lines
}

fn cell_span<S: KeyValueStore>(app: &App<S>, cell: Cell) -> Span<'static> {
    let game = app.game();
    let (symbol, mut style) = match game.board().get(cell) {
        Square::Empty => (" · ", Style::default().fg(Color::DarkGray)),
        Square::Occupied(Player::X) => (
            " X ",
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Square::Occupied(Player::O) => (
            " O ",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };

    if game.winning_line().is_some_and(|line| line.contains(&cell)) {
        style = style.bg(Color::Green).fg(Color::Black);
    } else if game.last_move().is_some_and(|m| m.cell == cell) {
        style = style.add_modifier(Modifier::UNDERLINED);
    }
    if cell == app.cursor() {
        style = style.bg(Color::White).fg(Color::Black);
    }
    Span::styled(symbol, style)
}

fn draw_panel<S: KeyValueStore>(frame: &mut Frame, area: Rect, app: &App<S>) {
    let scores = app.game().scores();
    let heading = Style::default().add_modifier(Modifier::BOLD);
    let mut lines = vec![
        Line::from(Span::styled(app.turn_label(), heading)),
        Line::from(""),
        Line::from(Span::styled("Score", heading)),
    ];
    lines.extend(
        Player::iter().map(|p| Line::from(format!("  Player {}: {}", p, scores.get(p)))),
    );
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled("Preferences", heading)));
    lines.extend(Preference::iter().map(|pref| {
        let state = if app.prefs().get(pref) { "on" } else { "off" };
        Line::from(format!("  {}: {}", pref.label(), state))
    }));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled("Keys", heading)));
    lines.extend(
        [
            "  ←↑→↓  move in layer",
            "  [ ]   change layer",
            "  Enter place mark",
            "  r new game  s reset score",
            "  h/v invert  p panel  q quit",
        ]
        .into_iter()
        .map(Line::from),
    );

    let panel = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Info "),
    );
    frame.render_widget(panel, area);
}
