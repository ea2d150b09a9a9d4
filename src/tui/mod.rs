pub mod widgets;

use std::path::PathBuf;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Paragraph};
use ratatui::DefaultTerminal;

use crate::brand::{BrandAction, BrandKit, Outcome};
use crate::pipeline::extract::ExtractedColor;
use widgets::PaletteWidget;

/// Whether the user is moving between swatches or typing a new color.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    Browse,
    Adding(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exit {
    Accept,
    Cancel,
}

/// State for the interactive palette editor.
pub struct TuiApp {
    pub kit: BrandKit,
    pub extracted: Vec<ExtractedColor>,
    pub image_path: PathBuf,
    pub selected: usize,
    pub mode: InputMode,
    pub status: Option<String>,
    exit: Option<Exit>,
}

impl TuiApp {
    pub fn new(kit: BrandKit, extracted: Vec<ExtractedColor>, image_path: PathBuf) -> Self {
        Self {
            kit,
            extracted,
            image_path,
            selected: 0,
            mode: InputMode::Browse,
            status: None,
            exit: None,
        }
    }

    pub fn exit(&self) -> Option<Exit> {
        self.exit
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        match std::mem::replace(&mut self.mode, InputMode::Browse) {
            InputMode::Browse => self.handle_browse_key(key),
            InputMode::Adding(buffer) => self.handle_adding_key(key, buffer),
        }
    }

    fn handle_browse_key(&mut self, key: KeyEvent) {
        let len = self.kit.colors().len();
        match key.code {
            KeyCode::Left | KeyCode::Char('h') => self.selected = self.selected.saturating_sub(1),
            KeyCode::Right | KeyCode::Char('l') => {
                self.selected = (self.selected + 1).min(len.saturating_sub(1));
            }
            KeyCode::Char('d') | KeyCode::Delete => {
                self.dispatch(BrandAction::RemoveColor(self.selected), "removed color");
            }
            KeyCode::Char('a') => {
                self.status = None;
                self.mode = InputMode::Adding(String::from("#"));
            }
            KeyCode::Char('r') => {
                let action = BrandAction::from_extracted(&self.extracted);
                self.dispatch(action, "restored extracted palette");
            }
            KeyCode::Enter => self.exit = Some(Exit::Accept),
            KeyCode::Char('q') | KeyCode::Esc => self.exit = Some(Exit::Cancel),
            _ => {}
        }
    }

    fn handle_adding_key(&mut self, key: KeyEvent, mut buffer: String) {
        match key.code {
            KeyCode::Char(c) if c.is_ascii_hexdigit() && buffer.len() < 7 => {
                buffer.push(c.to_ascii_lowercase());
                self.mode = InputMode::Adding(buffer);
            }
            KeyCode::Backspace => {
                if buffer.len() > 1 {
                    buffer.pop();
                }
                self.mode = InputMode::Adding(buffer);
            }
            KeyCode::Enter => {
                self.dispatch(BrandAction::AddColor(buffer), "added color");
                if self.status.as_deref() == Some("added color") {
                    self.selected = self.kit.colors().len() - 1;
                }
            }
            KeyCode::Esc => self.status = None,
            _ => self.mode = InputMode::Adding(buffer),
        }
    }

    fn dispatch(&mut self, action: BrandAction, done: &str) {
        self.status = Some(match self.kit.apply(action) {
            Ok(Outcome::Changed) => done.to_string(),
            Ok(Outcome::Unchanged) => "no change".to_string(),
            Err(e) => e.to_string(),
        });
        self.selected = self.selected.min(self.kit.colors().len().saturating_sub(1));
    }

    fn draw(&self, frame: &mut Frame) {
        let [header, palette, footer] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Min(6),
            Constraint::Length(3),
        ])
        .areas(frame.area());

        let title = Line::from(vec![
            Span::styled(self.kit.name().to_string(), Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(format!("  from {}", self.image_path.display())),
        ]);
        frame.render_widget(Paragraph::new(title).block(Block::bordered().title("brandkit")), header);

        frame.render_widget(PaletteWidget::new(self.kit.colors(), Some(self.selected)), palette);

        let footer_text = match &self.mode {
            InputMode::Adding(buffer) => format!("  new color: {buffer}_   (Enter add, Esc cancel)"),
            InputMode::Browse => {
                let help = "←/→ select  d remove  a add  r reset  Enter accept  q cancel";
                match &self.status {
                    Some(status) => format!("  {status}   |   {help}"),
                    None => format!("  {help}"),
                }
            }
        };
        frame.render_widget(Paragraph::new(footer_text).block(Block::bordered()), footer);
    }
}

/// Run the editor until the user accepts or cancels.
///
/// Returns the edited kit, or `None` if the user cancelled.
pub fn run(mut app: TuiApp) -> Result<Option<BrandKit>> {
    let mut terminal = ratatui::init();
    let result = event_loop(&mut terminal, &mut app);
    ratatui::restore();
    result?;

    Ok(match app.exit {
        Some(Exit::Accept) => Some(app.kit),
        _ => None,
    })
}

fn event_loop(terminal: &mut DefaultTerminal, app: &mut TuiApp) -> Result<()> {
    while app.exit.is_none() {
        terminal.draw(|frame| app.draw(frame))?;
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                app.handle_key(key);
            }
        }
    }
    Ok(())
}
