use std::path::PathBuf;
use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::widgets::ListState;

use crate::audio::LoopingTrack;
use crate::phase::{ChartPhase, PhaseEngine};
use crate::surprise::{self, SurpriseState};
use crate::theme::icons;

/// Top-level screen identifier. Closed set; default is the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewId {
    Dashboard,
    PatientRecords,
    NurseChart,
    Medications,
    Schedules,
    Reports,
    Settings,
}

pub const MENU: [ViewId; 7] = [
    ViewId::Dashboard,
    ViewId::PatientRecords,
    ViewId::NurseChart,
    ViewId::Medications,
    ViewId::Schedules,
    ViewId::Reports,
    ViewId::Settings,
];

impl ViewId {
    pub fn menu_label(self) -> &'static str {
        match self {
            ViewId::Dashboard => "Dashboard",
            ViewId::PatientRecords => "Patient Records",
            ViewId::NurseChart => "Nurse Chart",
            ViewId::Medications => "Medications",
            ViewId::Schedules => "Schedules",
            ViewId::Reports => "Reports",
            ViewId::Settings => "Settings",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            ViewId::Dashboard => icons::DASHBOARD,
            ViewId::PatientRecords => icons::PATIENTS,
            ViewId::NurseChart => icons::CHART,
            ViewId::Medications => icons::MEDICATIONS,
            ViewId::Schedules => icons::SCHEDULES,
            ViewId::Reports => icons::REPORTS,
            ViewId::Settings => icons::SETTINGS,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            ViewId::Dashboard => "Dashboard",
            ViewId::PatientRecords => "Patient Records",
            ViewId::NurseChart => "Nurse Chart",
            ViewId::Medications => "Medication Management",
            ViewId::Schedules => "Schedule Management",
            ViewId::Reports => "Reports & Analytics",
            ViewId::Settings => "System Settings",
        }
    }

    pub fn subtitle(self) -> &'static str {
        match self {
            ViewId::Dashboard => "Emergency & Patient Care Dashboard",
            ViewId::PatientRecords => "Patient Information & Medical Records",
            ViewId::NurseChart => "Electronic Health Record - Patient Information",
            ViewId::Medications => "Medication Administration & Inventory",
            ViewId::Schedules => "Staff & Patient Scheduling",
            ViewId::Reports => "Hospital Analytics & Reports",
            ViewId::Settings => "System Configuration & Preferences",
        }
    }

    pub fn placeholder_blurb(self) -> Option<&'static str> {
        match self {
            ViewId::PatientRecords => {
                Some("Patient information and medical records management system.")
            }
            ViewId::Medications => Some("Medication administration and inventory management."),
            ViewId::Schedules => Some("Staff and patient scheduling system."),
            ViewId::Reports => Some("Hospital analytics and reporting dashboard."),
            ViewId::Settings => Some("System configuration and user preferences."),
            ViewId::Dashboard | ViewId::NurseChart => None,
        }
    }
}

/// What the shell should draw this frame, per the decision table: normal
/// shell, the nurse-chart detail, the intermediate loading card, or the
/// full-screen surprise overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Shell(ViewId),
    ChartDetail,
    LoadingPanel,
    Surprise,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub music_path: PathBuf,
    pub music_volume: f32,
}

impl Config {
    pub fn from_env() -> Self {
        let music_path = std::env::var("WARD_MUSIC_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("assets/music.ogg"));
        let music_volume = std::env::var("WARD_MUSIC_VOLUME")
            .ok()
            .and_then(|raw| raw.parse::<f32>().ok())
            .unwrap_or(surprise::MUSIC_VOLUME);
        Self {
            music_path,
            music_volume,
        }
    }
}

pub struct App {
    view: ViewId,
    pub menu_state: ListState,
    pub engine: PhaseEngine,
    pub surprise: Option<SurpriseState>,
    pub spinner_frame: usize,
    config: Config,
    should_quit: bool,
}

impl App {
    pub fn new(config: Config) -> Self {
        let mut menu_state = ListState::default();
        menu_state.select(Some(0));
        Self {
            view: ViewId::Dashboard,
            menu_state,
            engine: PhaseEngine::new(),
            surprise: None,
            spinner_frame: 0,
            config,
            should_quit: false,
        }
    }

    pub fn view(&self) -> ViewId {
        self.view
    }

    /// Sets the active view unconditionally. Navigation only; the nurse
    /// chart entry goes through `open_nurse_chart` instead.
    pub fn select(&mut self, view: ViewId) {
        self.view = view;
    }

    /// The special navigation action: selects the nurse chart and starts
    /// the scripted phase sequence.
    pub fn open_nurse_chart(&mut self, now: Instant) {
        self.select(ViewId::NurseChart);
        self.engine.activate(now);
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Decision table over view and phase. The overlay requires the
    /// terminal signal to have fired, not merely 3000 ms to have elapsed.
    pub fn render_mode(&self) -> Mode {
        if self.engine.terminal_reached() && self.engine.phase() == Some(ChartPhase::Surprise) {
            return Mode::Surprise;
        }
        if self.view == ViewId::NurseChart && self.engine.is_active() {
            return match self.engine.phase() {
                Some(ChartPhase::Loading) => Mode::LoadingPanel,
                _ => Mode::ChartDetail,
            };
        }
        Mode::Shell(self.view)
    }

    /// Advances every timed concern. Called from the event loop on each
    /// iteration; all deadlines are polled against the supplied `now`.
    pub fn on_tick(&mut self, now: Instant) {
        self.spinner_frame = self.spinner_frame.wrapping_add(1);
        if self.engine.poll(now) {
            let playback = LoopingTrack::new(
                self.config.music_path.clone(),
                self.config.music_volume,
            );
            self.surprise = Some(SurpriseState::activate(now, Box::new(playback)));
        }
        if let Some(surprise) = self.surprise.as_mut() {
            surprise.poll(now);
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        // The overlay owns the screen; only quitting remains.
        if self.render_mode() == Mode::Surprise {
            if matches!(key.code, KeyCode::Char('q') | KeyCode::Esc) {
                self.should_quit = true;
            }
            return;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('j') | KeyCode::Down => self.move_cursor(1),
            KeyCode::Char('k') | KeyCode::Up => self.move_cursor(-1),
            KeyCode::Enter => {
                let idx = self.menu_state.selected().unwrap_or(0).min(MENU.len() - 1);
                self.open_menu_entry(MENU[idx], now);
            }
            KeyCode::Backspace => self.select(ViewId::Dashboard),
            KeyCode::Char(c @ '1'..='7') => {
                let idx = (c as usize) - ('1' as usize);
                self.menu_state.select(Some(idx));
                self.open_menu_entry(MENU[idx], now);
            }
            _ => {}
        }
    }

    fn open_menu_entry(&mut self, entry: ViewId, now: Instant) {
        if entry == ViewId::NurseChart {
            self.open_nurse_chart(now);
        } else {
            self.select(entry);
        }
    }

    fn move_cursor(&mut self, delta: isize) {
        let len = MENU.len() as isize;
        let current = self.menu_state.selected().unwrap_or(0) as isize;
        let next = (current + delta).rem_euclid(len);
        self.menu_state.select(Some(next as usize));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surprise::CONFETTI_COUNT;
    use std::time::Duration;

    fn test_app() -> App {
        App::new(Config {
            music_path: PathBuf::from("/nonexistent/ward-console-test.ogg"),
            music_volume: 0.7,
        })
    }

    fn at(t0: Instant, ms: u64) -> Instant {
        t0 + Duration::from_millis(ms)
    }

    #[test]
    fn plain_navigation_always_renders_the_shell() {
        let mut app = test_app();
        assert_eq!(app.render_mode(), Mode::Shell(ViewId::Dashboard));

        let tour = [
            ViewId::PatientRecords,
            ViewId::Medications,
            ViewId::Dashboard,
            ViewId::Schedules,
            ViewId::Reports,
            ViewId::Settings,
        ];
        for view in tour {
            app.select(view);
            assert_eq!(app.render_mode(), Mode::Shell(view));
            assert_eq!(app.view(), view);
        }
    }

    #[test]
    fn scripted_sequence_end_to_end() {
        let mut app = test_app();
        app.select(ViewId::Dashboard);
        assert_eq!(app.render_mode(), Mode::Shell(ViewId::Dashboard));

        let t0 = Instant::now();
        app.open_nurse_chart(t0);
        app.on_tick(t0);
        assert_eq!(app.render_mode(), Mode::ChartDetail);

        app.on_tick(at(t0, 1600));
        assert_eq!(app.render_mode(), Mode::LoadingPanel);

        app.on_tick(at(t0, 3100));
        assert_eq!(app.render_mode(), Mode::Surprise);
        let surprise = app.surprise.as_ref().expect("overlay active");
        assert_eq!(surprise.confetti.len(), CONFETTI_COUNT);
        // Start was attempted against a missing asset, so it failed; the
        // overlay still runs.
        assert!(!surprise.audio_started());

        app.on_tick(at(t0, 5100));
        let surprise = app.surprise.as_ref().expect("overlay active");
        assert!(surprise.primary_revealed());
        assert!(surprise.secondary_revealed());
    }

    #[test]
    fn navigating_away_does_not_cancel_the_sequence() {
        let mut app = test_app();
        let t0 = Instant::now();
        app.open_nurse_chart(t0);
        app.on_tick(t0);

        app.select(ViewId::Reports);
        app.on_tick(at(t0, 1600));
        // The shell shows while the timers keep running in the background.
        assert_eq!(app.render_mode(), Mode::Shell(ViewId::Reports));

        app.on_tick(at(t0, 3100));
        assert_eq!(app.render_mode(), Mode::Surprise);
    }

    #[test]
    fn overlay_is_gated_on_the_terminal_signal() {
        let mut app = test_app();
        let t0 = Instant::now();
        app.open_nurse_chart(t0);
        app.on_tick(at(t0, 2900));
        assert_eq!(app.render_mode(), Mode::LoadingPanel);
        assert!(app.surprise.is_none());

        app.on_tick(at(t0, 3000));
        assert_eq!(app.render_mode(), Mode::Surprise);
        assert!(app.surprise.is_some());
    }

    #[test]
    fn reopening_the_chart_entry_is_a_no_op() {
        let mut app = test_app();
        let t0 = Instant::now();
        app.open_nurse_chart(t0);
        app.on_tick(at(t0, 1600));

        app.open_nurse_chart(at(t0, 1700));
        assert_eq!(app.render_mode(), Mode::LoadingPanel);
        app.on_tick(at(t0, 3100));
        assert_eq!(app.render_mode(), Mode::Surprise);
    }
}
