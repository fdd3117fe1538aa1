//! Main application state and UI loop
//!
//! Contains the App struct and main UI event handling logic

use crate::bundle::Customization;
use crate::consts::ui_consts;
use crate::events::UiEvent;
use crate::theme::Theme;
use crate::ui::dashboard::state::nav_entries;
use crate::ui::dashboard::{DashboardState, render_dashboard};
use crate::ui::splash::render_splash;
use crossterm::event::{self, Event, KeyCode};
use ratatui::{Frame, Terminal, backend::Backend};
use std::time::{Duration, Instant};

/// UI options resolved from the command line.
#[derive(Debug, Clone, Default)]
pub struct UiOptions {
    pub with_background_color: bool,
    /// Tab id to open first, when it exists in the nav list.
    pub initial_tab: Option<String>,
}

/// The different screens in the application.
pub enum Screen {
    /// Splash screen shown at the start of the application.
    Splash,
    /// Dashboard screen displaying the bundle's tabs and panels.
    Dashboard(Box<DashboardState>),
}

/// Application state
pub struct App {
    /// The start time of the application, used for computing uptime.
    start_time: Instant,

    /// The customization bundle being displayed.
    customization: Customization,

    /// Branding theme derived from the bundle config.
    theme: Theme,

    /// Options from the command line.
    options: UiOptions,

    /// Events queued before the dashboard exists (config load, warnings).
    startup_events: Vec<UiEvent>,

    /// The current screen being displayed in the application.
    current_screen: Screen,
}

impl App {
    /// Creates a new instance of the application.
    pub fn new(customization: Customization, options: UiOptions, startup_events: Vec<UiEvent>) -> Self {
        let theme = Theme::from_config(&customization.config);
        Self {
            start_time: Instant::now(),
            customization,
            theme,
            options,
            startup_events,
            current_screen: Screen::Splash,
        }
    }

    /// Transition to the dashboard screen, carrying over startup events.
    fn open_dashboard(&mut self) {
        let entries = nav_entries(&self.customization.config);
        let initial = self
            .options
            .initial_tab
            .as_deref()
            .and_then(|id| entries.iter().position(|entry| entry.id == id))
            .unwrap_or(0);

        let mut state = DashboardState::new(
            initial,
            self.start_time,
            self.options.with_background_color,
        );
        for event in self.startup_events.drain(..) {
            state.add_event(event);
        }
        self.current_screen = Screen::Dashboard(Box::new(state));
    }
}

/// Runs the application UI in a loop, handling events and rendering the
/// appropriate screen.
pub fn run<B: Backend>(terminal: &mut Terminal<B>, mut app: App) -> std::io::Result<()> {
    let splash_start = Instant::now();
    let splash_duration = Duration::from_secs(ui_consts::SPLASH_DURATION_SECS);

    // UI event loop
    loop {
        // Update the state based on the current screen
        if let Screen::Dashboard(state) = &mut app.current_screen {
            state.update();
        }
        terminal.draw(|f| render(f, &mut app))?;

        // Handle splash-to-dashboard transition
        if let Screen::Splash = app.current_screen {
            if splash_start.elapsed() >= splash_duration {
                app.open_dashboard();
                continue;
            }
        }

        // Poll for key events
        if event::poll(ui_consts::poll_interval())? {
            if let Event::Key(key) = event::read()? {
                // Skip events that are not KeyEventKind::Press
                if key.kind == event::KeyEventKind::Release {
                    continue;
                }

                // Handle exit events
                if matches!(key.code, KeyCode::Esc | KeyCode::Char('q')) {
                    return Ok(());
                }

                if matches!(app.current_screen, Screen::Splash) {
                    // Any other key press skips the splash screen
                    app.open_dashboard();
                } else if let Screen::Dashboard(state) = &mut app.current_screen {
                    let entries = nav_entries(&app.customization.config);
                    match key.code {
                        KeyCode::Right | KeyCode::Tab => state.next_tab(&entries),
                        KeyCode::Left | KeyCode::BackTab => state.prev_tab(&entries),
                        KeyCode::Char(c @ '1'..='9') => {
                            let index = (c as usize) - ('1' as usize);
                            state.select_tab(index, &entries);
                        }
                        _ => {}
                    }
                }
            }
        }
    }
}

/// Renders the current screen based on the application state.
fn render(f: &mut Frame, app: &mut App) {
    match &mut app.current_screen {
        Screen::Splash => render_splash(f, &app.customization.config, &app.theme),
        Screen::Dashboard(state) => render_dashboard(
            f,
            state,
            &app.customization.config,
            &mut app.customization.panels,
            &app.theme,
        ),
    }
}
