//! Stateless UI rendering for tic-tac-toe.

use crate::app::{App, EndChoice, HomeForm, NameField, Screen};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};
use tictactoe::{Board, Cell, Coord, Marker};

/// Draws the main UI and any open dialog on top of it.
pub fn draw(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Length(1), // Turn
            Constraint::Min(11),   // Board
            Constraint::Length(3), // Message
            Constraint::Length(3), // Help
        ])
        .split(frame.area());

    let title = Paragraph::new("Tic-Tac-Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, chunks[0]);

    let turn = Paragraph::new(app.game().turn_prompt())
        .style(Style::default().add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(turn, chunks[1]);

    draw_board(frame, chunks[2], app.game().board(), app.cursor());

    let message = Paragraph::new(app.message().unwrap_or(""))
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Message"));
    frame.render_widget(message, chunks[3]);

    let help = Paragraph::new("Arrows/hjkl: Move | Enter/1-9: Play | R: Reset | Q: Quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(help, chunks[4]);

    match app.screen() {
        Screen::Home(form) => draw_home_dialog(frame, form),
        Screen::Playing => {}
        Screen::GameOver { result, choice } => draw_end_dialog(frame, result, *choice),
    }
}

fn draw_board(frame: &mut Frame, area: Rect, board: &Board, cursor: Coord) {
    let board_area = center_rect(area, 40, 11);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(board_area);

    for row in 0..3 {
        draw_row(frame, rows[row * 2], board, cursor, row);
        if row < 2 {
            draw_separator(frame, rows[row * 2 + 1]);
        }
    }
}

fn draw_row(frame: &mut Frame, area: Rect, board: &Board, cursor: Coord, row: usize) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
        ])
        .split(area);

    for col in 0..3 {
        if let Ok(coord) = Coord::new(row, col) {
            draw_cell(frame, cols[col * 2], board, cursor, coord);
        }
        if col < 2 {
            draw_separator_vertical(frame, cols[col * 2 + 1]);
        }
    }
}

fn draw_cell(frame: &mut Frame, area: Rect, board: &Board, cursor: Coord, coord: Coord) {
    let (symbol, base_style) = match board.cell(coord) {
        Cell::Empty => ("   ", Style::default().fg(Color::DarkGray)),
        Cell::Marked(Marker::X) => (
            " X ",
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Cell::Marked(Marker::O) => (
            " O ",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };

    let style = if coord == cursor {
        base_style.bg(Color::White).fg(Color::Black)
    } else {
        base_style
    };

    // Middle line of the three-line cell.
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(symbol, style)),
        Line::from(""),
    ];
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

fn draw_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("────────────┼────────────┼────────────")
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_separator_vertical(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new(vec![Line::from("│"), Line::from("│"), Line::from("│")])
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_home_dialog(frame: &mut Frame, form: &HomeForm) {
    let area = center_rect(frame.area(), 50, 11);
    frame.render_widget(Clear, area);

    let mut lines = vec![
        Line::from(Span::styled(
            "It's time to play Tic-Tac-Toe!",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];
    for field in [NameField::One, NameField::Two] {
        lines.push(name_field_line(form, field));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "[ Start Game ]",
        Style::default().fg(Color::Black).bg(Color::Green),
    )));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Tab: Switch field | Enter: Start | Esc: Quit",
        Style::default().fg(Color::DarkGray),
    )));

    let dialog = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("New Game"));
    frame.render_widget(dialog, area);
}

fn name_field_line(form: &HomeForm, field: NameField) -> Line<'static> {
    let value = form.value(field);
    let focused = form.focus() == field;

    let text = if value.is_empty() {
        Span::styled(
            format!("{:<20}", field.placeholder()),
            Style::default().fg(Color::DarkGray),
        )
    } else {
        Span::raw(format!("{:<20}", value))
    };
    let text = if focused {
        text.patch_style(Style::default().add_modifier(Modifier::UNDERLINED))
    } else {
        text
    };
    let marker = if focused { "> " } else { "  " };

    Line::from(vec![
        Span::raw(marker),
        Span::styled(
            format!("{:<12}", field.label()),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        text,
    ])
}

fn draw_end_dialog(frame: &mut Frame, result: &str, choice: EndChoice) {
    let area = center_rect(frame.area(), 50, 7);
    frame.render_widget(Clear, area);

    let buttons: Vec<Span> = [EndChoice::PlayAgain, EndChoice::HomeScreen]
        .into_iter()
        .flat_map(|option| {
            let style = if option == choice {
                Style::default().fg(Color::Black).bg(Color::Green)
            } else {
                Style::default().fg(Color::Gray)
            };
            [
                Span::styled(format!("[ {} ]", option.label()), style),
                Span::raw("  "),
            ]
        })
        .collect();

    let lines = vec![
        Line::from(Span::styled(
            result.to_string(),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(buttons),
        Line::from(""),
        Line::from(Span::styled(
            "Left/Right: Choose | Enter: Confirm",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let dialog = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Game Over"));
    frame.render_widget(dialog, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vert[1])[1]
}
