mod ui;

use clap::Parser;
use crossterm::{
    event::{self, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    tty::IsTty,
};
use keyquest::{
    celebration::LevelCelebration, corpus::Corpus, progress::PlayerProgress, runtime::AppEvent,
    session::Session, stats::ProgressHistory,
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Frame, Terminal,
};
use std::{
    error::Error,
    io::{self, stdin},
    sync::mpsc,
    thread,
    time::Duration,
};

const TICK_RATE_MS: u64 = 1000;

/// terminal typing speed trainer with xp progression
#[derive(Parser, Debug, Clone)]
#[clap(
    version,
    about,
    long_about = "A terminal typing trainer: reproduce a sample paragraph against a 60 second clock, watch live accuracy per keystroke, and grow an xp level across tests with a historical trend chart."
)]
pub struct Cli {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppScreen {
    Typing,
    Results,
}

#[derive(Debug)]
pub struct App {
    pub corpus: Corpus,
    pub session: Session,
    pub player: PlayerProgress,
    pub history: ProgressHistory,
    pub screen: AppScreen,
    pub celebration: LevelCelebration,
}

impl App {
    pub fn new() -> Self {
        let corpus = Corpus::built_in();
        let session = Session::new(corpus.random_text().to_string());

        Self {
            corpus,
            session,
            player: PlayerProgress::default(),
            history: ProgressHistory::new(),
            screen: AppScreen::Typing,
            celebration: LevelCelebration::new(),
        }
    }

    /// Discard the in-flight session and start a fresh one on a new random
    /// text. Player progress and history survive restarts.
    pub fn restart(&mut self) {
        self.session = Session::new(self.corpus.random_text().to_string());
        self.screen = AppScreen::Typing;
    }

    /// Record the finished session and roll its score into xp. Guarded so
    /// each session is recorded exactly once.
    pub fn finalize_session(&mut self) {
        if self.screen == AppScreen::Results {
            return;
        }
        let Some(result) = self.session.result() else {
            return;
        };

        self.history.record(result);
        for level_up in self.player.apply(&result) {
            self.celebration.start(level_up.level);
        }
        self.screen = AppScreen::Results;
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let _cli = Cli::parse();

    if !stdin().is_tty() {
        use clap::{error::ErrorKind, CommandFactory};
        let mut cmd = Cli::command();
        cmd.error(ErrorKind::Io, "stdin must be a tty").exit();
    }

    enable_raw_mode()?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new();
    start_tui(&mut terminal, &mut app)?;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    Ok(())
}

#[derive(Debug)]
enum ExitType {
    Restart,
    Quit,
}

fn start_tui<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<(), Box<dyn Error>> {
    let events = spawn_event_threads();

    loop {
        let mut exit_type = ExitType::Quit;
        terminal.draw(|f| ui(app, f))?;

        loop {
            match events.recv()? {
                AppEvent::Tick => {
                    if app.session.has_started() && !app.session.has_finished() {
                        app.session.on_tick();
                        if app.session.has_finished() {
                            app.finalize_session();
                        }
                    }
                    app.celebration.on_tick();

                    // Redraw on ticks only while something on screen moves
                    if app.celebration.is_active
                        || (app.session.has_started() && !app.session.has_finished())
                    {
                        terminal.draw(|f| ui(app, f))?;
                    }
                }
                AppEvent::Resize => {
                    terminal.draw(|f| ui(app, f))?;
                }
                AppEvent::Key(key) => {
                    match key.code {
                        KeyCode::Esc => break,
                        KeyCode::Left => {
                            exit_type = ExitType::Restart;
                            break;
                        }
                        KeyCode::Backspace => {
                            if app.screen == AppScreen::Typing && !app.session.has_finished() {
                                app.session.backspace();
                            }
                        }
                        KeyCode::Char(c) => {
                            if key.modifiers.contains(KeyModifiers::CONTROL)
                                && key.code == KeyCode::Char('c')
                            // ctrl+c to quit
                            {
                                break;
                            }

                            match app.screen {
                                AppScreen::Typing => {
                                    if !app.session.has_finished() {
                                        app.session.write(c);
                                        if app.session.has_finished() {
                                            app.finalize_session();
                                        }
                                    }
                                }
                                AppScreen::Results => {
                                    if c == 'r' {
                                        exit_type = ExitType::Restart;
                                        break;
                                    }
                                }
                            }
                        }
                        _ => {}
                    }
                    terminal.draw(|f| ui(app, f))?;
                }
            }
        }

        match exit_type {
            ExitType::Restart => app.restart(),
            ExitType::Quit => break,
        }
    }

    Ok(())
}

fn spawn_event_threads() -> mpsc::Receiver<AppEvent> {
    let (tx, rx) = mpsc::channel();

    let tick_tx = tx.clone();
    thread::spawn(move || loop {
        if tick_tx.send(AppEvent::Tick).is_err() {
            break;
        }
        thread::sleep(Duration::from_millis(TICK_RATE_MS));
    });

    thread::spawn(move || loop {
        let evt = match event::read() {
            Ok(Event::Key(key)) => Some(AppEvent::Key(key)),
            Ok(Event::Resize(_, _)) => Some(AppEvent::Resize),
            Ok(_) => None,
            Err(_) => break,
        };

        if let Some(evt) = evt {
            if tx.send(evt).is_err() {
                break;
            }
        }
    });

    rx
}

fn ui(app: &mut App, f: &mut Frame) {
    f.render_widget(&*app, f.area());
}

#[cfg(test)]
mod tests {
    use super::*;
    use keyquest::session::Status;

    #[test]
    fn test_cli_parses_without_arguments() {
        let cli = Cli::parse_from(["keyquest"]);
        let _ = cli;
    }

    #[test]
    fn test_app_new() {
        let app = App::new();

        assert_eq!(app.screen, AppScreen::Typing);
        assert_eq!(app.session.status, Status::Idle);
        assert!(app.corpus.texts.contains(&app.session.reference));
        assert_eq!(app.player, PlayerProgress::default());
        assert!(app.history.is_empty());
        assert!(!app.celebration.is_active);
    }

    #[test]
    fn test_finalize_without_finished_session_is_noop() {
        let mut app = App::new();

        app.finalize_session();

        assert_eq!(app.screen, AppScreen::Typing);
        assert!(app.history.is_empty());
    }

    #[test]
    fn test_finalize_records_exactly_once() {
        let mut app = App::new();
        let reference = app.session.reference.clone();

        app.session.handle_input(&reference);
        assert!(app.session.has_finished());

        app.finalize_session();
        app.finalize_session();

        assert_eq!(app.history.len(), 1);
        assert_eq!(app.screen, AppScreen::Results);
    }

    #[test]
    fn test_restart_preserves_progress() {
        let mut app = App::new();
        let reference = app.session.reference.clone();

        app.session.handle_input(&reference);
        app.finalize_session();
        let player_after = app.player.clone();

        app.restart();

        assert_eq!(app.screen, AppScreen::Typing);
        assert_eq!(app.session.status, Status::Idle);
        assert_eq!(app.session.typed_len(), 0);
        assert_eq!(app.history.len(), 1);
        assert_eq!(app.player, player_after);
    }

    #[test]
    fn test_finalize_starts_celebration_on_levelup() {
        let mut app = App::new();
        // One xp short of the first threshold, so any gain levels up.
        app.player.xp = 99;

        let mut session = Session::with_duration("cat".to_string(), 60);
        session.write('c');
        for _ in 0..30 {
            session.on_tick();
        }
        session.write('a');
        session.write('t');
        assert!(session.has_finished());
        app.session = session;

        app.finalize_session();

        assert_eq!(app.player.level, 2);
        assert!(app.celebration.is_active);
        assert!(app.celebration.message.contains("level 2"));
    }
}
