//! TUI rendering with ratatui
//!
//! Panels for the hint helper: progress gauges, the distribution grid, the
//! two-letter list, found words, and the input area.

use super::app::{App, InputMode, MessageStyle, TableView};
use crate::analysis::{CellProgress, Progress};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph, Row, Table, Wrap},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let progress = app.progress();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(6), // Input area
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);

    // Main content area - split horizontally
    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(55), // Tables
            Constraint::Percentage(45), // Progress, words, messages
        ])
        .split(chunks[1]);

    render_tables_panel(f, app, &progress, main_chunks[0]);
    render_info_panel(f, app, &progress, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let title = format!(
        "🐝 BEE SOLVER - {} - letters: {}",
        app.session.date(),
        app.session.report().alphabet
    );
    let header = Paragraph::new(title)
        .style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Yellow)),
        );
    f.render_widget(header, area);
}

fn render_tables_panel(f: &mut Frame, app: &App, progress: &Progress, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(60), // Distribution grid
            Constraint::Percentage(40), // Two-letter list
        ])
        .split(area);

    render_distribution(f, app, progress, chunks[0]);
    render_two_letter(f, progress, chunks[1]);
}

fn table_cell(view: TableView, cell: CellProgress) -> String {
    if cell.goal == 0 {
        return "-".to_string();
    }
    match view {
        TableView::Goal => cell.goal.to_string(),
        TableView::Found => cell.found.to_string(),
        TableView::Remaining => cell.remaining().to_string(),
    }
}

fn render_distribution(f: &mut Frame, app: &App, progress: &Progress, area: Rect) {
    let header_cells: Vec<String> = std::iter::once(String::new())
        .chain(
            app.session
                .report()
                .distribution_header
                .iter()
                .map(ToString::to_string),
        )
        .collect();

    let rows: Vec<Row> = progress
        .distribution
        .iter()
        .map(|(letter, cells)| {
            let mut row = vec![letter.to_string()];
            row.extend(cells.iter().map(|&cell| table_cell(app.table_view, cell)));
            Row::new(row)
        })
        .collect();

    let mut widths = vec![Constraint::Length(3)];
    widths.extend(
        std::iter::repeat(Constraint::Length(5))
            .take(app.session.report().distribution_header.len()),
    );

    let table = Table::new(rows, widths)
        .header(Row::new(header_cells).style(Style::default().add_modifier(Modifier::BOLD)))
        .block(
            Block::default()
                .title(format!(" Distribution ({}) ", app.table_view.label()))
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(table, area);
}

fn render_two_letter(f: &mut Frame, progress: &Progress, area: Rect) {
    let items: Vec<ListItem> = progress
        .two_letter
        .iter()
        .map(|(prefix, cell)| {
            let text = format!("{prefix}: {}-{}={}", cell.goal, cell.found, cell.remaining());
            let style = if cell.solved() {
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::CROSSED_OUT)
            } else {
                Style::default()
            };
            ListItem::new(text).style(style)
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .title(" Two-Letter Words ")
            .borders(Borders::ALL),
    );
    f.render_widget(list, area);
}

fn render_info_panel(f: &mut Frame, app: &App, progress: &Progress, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Words gauge
            Constraint::Length(4), // Pangrams
            Constraint::Min(4),    // Found words
            Constraint::Length(7), // Messages
        ])
        .split(area);

    render_words_gauge(f, progress, chunks[0]);
    render_pangrams(f, progress, chunks[1]);
    render_found_words(f, app, chunks[2]);
    render_messages(f, app, chunks[3]);
}

fn render_words_gauge(f: &mut Frame, progress: &Progress, area: Rect) {
    let words = progress.words;
    let percent = if words.goal > 0 {
        ((f64::from(words.found) / f64::from(words.goal)) * 100.0).min(100.0) as u16
    } else {
        0
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Words ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Yellow))
        .percent(percent)
        .label(format!(
            "{}-{}={}",
            words.goal,
            words.found,
            words.remaining()
        ));
    f.render_widget(gauge, area);
}

fn render_pangrams(f: &mut Frame, progress: &Progress, area: Rect) {
    let mut lines = vec![Line::from(format!(
        "Pangrams: {}-{}={}",
        progress.pangrams.goal,
        progress.pangrams.found,
        progress.pangrams.remaining()
    ))];
    if !progress.pangram_words.is_empty() {
        lines.push(Line::from(vec![Span::styled(
            progress.pangram_words.join(" "),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )]));
    }

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .title(" Pangrams ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
}

fn render_found_words(f: &mut Frame, app: &App, area: Rect) {
    let words: Vec<&str> = app.session.found().iter().collect();
    let paragraph = Paragraph::new(words.join(" "))
        .block(
            Block::default()
                .title(format!(" Found Words ({}) ", words.len()))
                .borders(Borders::ALL),
        )
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
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
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));
    f.render_widget(messages_list, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, content, color) = match app.input_mode {
        InputMode::Browse => (
            " Browse | h: hints  b: bulk  w: word  d: date  v: view  q: quit ",
            String::new(),
            Color::DarkGray,
        ),
        InputMode::Hints => (
            " Paste Hints Report | ESC to apply ",
            tail_lines(&app.paste_buffer, 3),
            Color::Yellow,
        ),
        InputMode::BulkWords => (
            " Bulk Found Words (one per line, Enter ingests) | ESC to close ",
            tail_lines(&app.paste_buffer, 3),
            Color::Cyan,
        ),
        InputMode::Word => (
            " Add One Word (not filtered against letters) | Enter to add, ESC to close ",
            app.input_buffer.clone(),
            Color::Green,
        ),
        InputMode::Date => (
            " Switch Date (YYYY-MM-DD) | Enter to switch, ESC to cancel ",
            app.input_buffer.clone(),
            Color::Magenta,
        ),
    };

    let input = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );
    f.render_widget(input, area);
}

/// The last few lines of a paste buffer, newest last
fn tail_lines(buffer: &str, keep: usize) -> String {
    let lines: Vec<&str> = buffer.lines().collect();
    let start = lines.len().saturating_sub(keep);
    let mut text = lines[start..].join("\n");
    if buffer.ends_with('\n') {
        text.push('\n');
    }
    text
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(33),
            Constraint::Percentage(33),
            Constraint::Percentage(34),
        ])
        .split(area);

    let date = Paragraph::new(format!("Date: {}", app.session.date())).alignment(Alignment::Center);
    f.render_widget(date, chunks[0]);

    let found = Paragraph::new(format!("Found: {}", app.session.found().len()))
        .alignment(Alignment::Center);
    f.render_widget(found, chunks[1]);

    let view = Paragraph::new(format!("View: {}", app.table_view.label()))
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(view, chunks[2]);
}
