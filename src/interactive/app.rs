//! TUI application state and logic

use crate::analysis::Progress;
use crate::session::Session;
use crate::storage::KeyValueStore;
use anyhow::Result;
use chrono::NaiveDate;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Which table the main panel shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableView {
    Goal,
    Found,
    Remaining,
}

impl TableView {
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Goal => Self::Found,
            Self::Found => Self::Remaining,
            Self::Remaining => Self::Goal,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Goal => "Goal",
            Self::Found => "Found",
            Self::Remaining => "Remaining",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    /// Keys act as commands
    Browse,
    /// Multi-line paste of the hints report
    Hints,
    /// Multi-line paste of found words; every newline re-triggers ingestion
    BulkWords,
    /// Single found word, unfiltered
    Word,
    /// Switch the active date
    Date,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

/// Application state
pub struct App<'a> {
    pub session: Session,
    pub store: &'a mut dyn KeyValueStore,
    pub input_mode: InputMode,
    /// Single-line buffer (word and date entry)
    pub input_buffer: String,
    /// Multi-line buffer (hints and bulk entry)
    pub paste_buffer: String,
    pub table_view: TableView,
    pub messages: Vec<Message>,
    pub should_quit: bool,
}

impl<'a> App<'a> {
    #[must_use]
    pub fn new(date: NaiveDate, store: &'a mut dyn KeyValueStore) -> Self {
        let session = Session::load(date, store);
        let mut app = Self {
            session,
            store,
            input_mode: InputMode::Browse,
            input_buffer: String::new(),
            paste_buffer: String::new(),
            table_view: TableView::Remaining,
            messages: Vec::new(),
            should_quit: false,
        };
        app.add_message(
            "h: paste hints | b: bulk words | w: add word | d: date | v: view | q: quit",
            MessageStyle::Info,
        );
        if !app.session.hints_input().is_empty() {
            app.add_message(
                &format!(
                    "Loaded {} with {} found words",
                    app.session.date(),
                    app.session.found().len()
                ),
                MessageStyle::Success,
            );
        }
        app
    }

    /// Current snapshot for rendering; cheap enough to rebuild every frame
    #[must_use]
    pub fn progress(&self) -> Progress {
        self.session.progress()
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    fn commit_hints(&mut self) {
        let text = self.paste_buffer.clone();
        self.session.set_hints(&text);
        self.paste_buffer.clear();
        self.input_mode = InputMode::Browse;
        if self.session.report().alphabet.is_empty() {
            self.add_message("No letters parsed from that paste", MessageStyle::Error);
        } else {
            self.add_message(
                &format!(
                    "Parsed report: {} words to find",
                    self.session.report().stats.words
                ),
                MessageStyle::Success,
            );
        }
    }

    /// Bulk entry mirrors the paste box: every newline re-runs ingestion
    fn bulk_newline(&mut self) {
        self.paste_buffer.push('\n');
        let text = self.paste_buffer.clone();
        match self.session.ingest_bulk(&text, self.store) {
            Ok(added) if added > 0 => {
                self.add_message(
                    &format!("Added {added} words ({} total)", self.session.found().len()),
                    MessageStyle::Success,
                );
            }
            Ok(_) => {}
            Err(err) => self.add_message(&format!("Save failed: {err}"), MessageStyle::Error),
        }
    }

    fn submit_word(&mut self) {
        let word = self.input_buffer.trim().to_string();
        self.input_buffer.clear();
        if word.is_empty() {
            return;
        }
        match self.session.add_word(&word, self.store) {
            Ok(true) => {
                self.add_message(
                    &format!("Added {}", word.to_uppercase()),
                    MessageStyle::Success,
                );
            }
            Ok(false) => {
                self.add_message(
                    &format!("Already have {}", word.to_uppercase()),
                    MessageStyle::Info,
                );
            }
            Err(err) => self.add_message(&format!("Save failed: {err}"), MessageStyle::Error),
        }
    }

    fn submit_date(&mut self) {
        let text = self.input_buffer.trim().to_string();
        self.input_buffer.clear();
        self.input_mode = InputMode::Browse;
        match text.parse::<NaiveDate>() {
            Ok(date) => {
                self.session.switch_date(date, self.store);
                self.add_message(
                    &format!(
                        "Switched to {} ({} found words)",
                        date,
                        self.session.found().len()
                    ),
                    MessageStyle::Success,
                );
            }
            Err(_) => {
                self.add_message("Dates look like 2026-08-30", MessageStyle::Error);
            }
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
                app.should_quit = true;
            } else {
                match app.input_mode {
                    InputMode::Browse => match key.code {
                        KeyCode::Char('q') => app.should_quit = true,
                        KeyCode::Char('h') => {
                            app.paste_buffer = app.session.hints_input().to_string();
                            app.input_mode = InputMode::Hints;
                        }
                        KeyCode::Char('b') => {
                            app.paste_buffer.clear();
                            app.input_mode = InputMode::BulkWords;
                        }
                        KeyCode::Char('w') => {
                            app.input_buffer.clear();
                            app.input_mode = InputMode::Word;
                        }
                        KeyCode::Char('d') => {
                            app.input_buffer.clear();
                            app.input_mode = InputMode::Date;
                        }
                        KeyCode::Char('v') => {
                            app.table_view = app.table_view.next();
                        }
                        _ => {}
                    },
                    InputMode::Hints => match key.code {
                        KeyCode::Esc => app.commit_hints(),
                        KeyCode::Enter => app.paste_buffer.push('\n'),
                        KeyCode::Char(c) => app.paste_buffer.push(c),
                        KeyCode::Backspace => {
                            app.paste_buffer.pop();
                        }
                        KeyCode::Tab => app.paste_buffer.push(' '),
                        _ => {}
                    },
                    InputMode::BulkWords => match key.code {
                        KeyCode::Esc => {
                            app.paste_buffer.clear();
                            app.input_mode = InputMode::Browse;
                        }
                        KeyCode::Enter => app.bulk_newline(),
                        KeyCode::Char(c) => app.paste_buffer.push(c),
                        KeyCode::Backspace => {
                            app.paste_buffer.pop();
                        }
                        _ => {}
                    },
                    InputMode::Word => match key.code {
                        KeyCode::Esc => {
                            app.input_buffer.clear();
                            app.input_mode = InputMode::Browse;
                        }
                        KeyCode::Enter => app.submit_word(),
                        KeyCode::Char(c) => app.input_buffer.push(c),
                        KeyCode::Backspace => {
                            app.input_buffer.pop();
                        }
                        _ => {}
                    },
                    InputMode::Date => match key.code {
                        KeyCode::Esc => {
                            app.input_buffer.clear();
                            app.input_mode = InputMode::Browse;
                        }
                        KeyCode::Enter => app.submit_date(),
                        KeyCode::Char(c) => app.input_buffer.push(c),
                        KeyCode::Backspace => {
                            app.input_buffer.pop();
                        }
                        _ => {}
                    },
                }
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
