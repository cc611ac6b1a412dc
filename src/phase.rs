use std::time::{Duration, Instant};

use tracing::info;

pub const LOADING_DELAY_MS: u64 = 1500;
pub const SURPRISE_DELAY_MS: u64 = 3000;

/// A step in the scripted nurse-chart sequence. Transitions are strictly
/// forward: Chart -> Loading -> Surprise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartPhase {
    Chart,
    Loading,
    Surprise,
}

impl ChartPhase {
    pub fn label(self) -> &'static str {
        match self {
            ChartPhase::Chart => "chart",
            ChartPhase::Loading => "loading",
            ChartPhase::Surprise => "surprise",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PhaseAction {
    EnterLoading,
    SignalTerminal,
}

/// One-shot delayed action. Handles are stored explicitly rather than
/// chained through callbacks so a future extension could cancel them;
/// today nothing does.
#[derive(Debug, Clone, Copy)]
struct ScheduledAction {
    due: Instant,
    action: PhaseAction,
}

/// Timed state machine behind the nurse-chart entry. Activation schedules
/// the whole sequence up front; `poll` advances it from the event loop.
#[derive(Debug, Default)]
pub struct PhaseEngine {
    phase: Option<ChartPhase>,
    terminal_reached: bool,
    pending: Vec<ScheduledAction>,
}

impl PhaseEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.phase.is_some()
    }

    pub fn phase(&self) -> Option<ChartPhase> {
        self.phase
    }

    /// Monotonic for the session: once true, never reverts.
    pub fn terminal_reached(&self) -> bool {
        self.terminal_reached
    }

    /// Starts the scripted sequence. A second call while a sequence is in
    /// flight is ignored; timers neither stack nor reset.
    pub fn activate(&mut self, now: Instant) {
        if self.is_active() {
            return;
        }
        self.phase = Some(ChartPhase::Chart);
        self.pending.push(ScheduledAction {
            due: now + Duration::from_millis(LOADING_DELAY_MS),
            action: PhaseAction::EnterLoading,
        });
        self.pending.push(ScheduledAction {
            due: now + Duration::from_millis(SURPRISE_DELAY_MS),
            action: PhaseAction::SignalTerminal,
        });
        info!("nurse chart sequence activated");
    }

    /// Fires every action due at `now`. Returns true when the terminal
    /// signal fired on this poll, which is the overlay activation edge.
    pub fn poll(&mut self, now: Instant) -> bool {
        let mut terminal_edge = false;
        let mut idx = 0;
        while idx < self.pending.len() {
            if self.pending[idx].due > now {
                idx += 1;
                continue;
            }
            let fired = self.pending.swap_remove(idx);
            match fired.action {
                PhaseAction::EnterLoading => {
                    // Never regress: a late loading action loses to a
                    // terminal signal that already fired.
                    if self.phase == Some(ChartPhase::Chart) {
                        self.phase = Some(ChartPhase::Loading);
                        info!(phase = ChartPhase::Loading.label(), "phase advanced");
                    }
                }
                PhaseAction::SignalTerminal => {
                    self.phase = Some(ChartPhase::Surprise);
                    if !self.terminal_reached {
                        self.terminal_reached = true;
                        terminal_edge = true;
                        info!("terminal signal fired");
                    }
                }
            }
        }
        terminal_edge
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(t0: Instant, ms: u64) -> Instant {
        t0 + Duration::from_millis(ms)
    }

    #[test]
    fn phase_windows_match_schedule() {
        let t0 = Instant::now();
        let mut engine = PhaseEngine::new();
        assert!(!engine.is_active());

        engine.activate(t0);
        assert_eq!(engine.phase(), Some(ChartPhase::Chart));

        assert!(!engine.poll(at(t0, 100)));
        assert_eq!(engine.phase(), Some(ChartPhase::Chart));

        assert!(!engine.poll(at(t0, 1499)));
        assert_eq!(engine.phase(), Some(ChartPhase::Chart));

        assert!(!engine.poll(at(t0, 1500)));
        assert_eq!(engine.phase(), Some(ChartPhase::Loading));
        assert!(!engine.terminal_reached());

        assert!(!engine.poll(at(t0, 2999)));
        assert_eq!(engine.phase(), Some(ChartPhase::Loading));

        assert!(engine.poll(at(t0, 3000)));
        assert_eq!(engine.phase(), Some(ChartPhase::Surprise));
        assert!(engine.terminal_reached());
    }

    #[test]
    fn coarse_poll_fires_both_actions_in_order() {
        let t0 = Instant::now();
        let mut engine = PhaseEngine::new();
        engine.activate(t0);

        // A slow event loop may only wake after both deadlines passed.
        assert!(engine.poll(at(t0, 3100)));
        assert_eq!(engine.phase(), Some(ChartPhase::Surprise));
        assert!(engine.terminal_reached());
    }

    #[test]
    fn terminal_signal_is_monotonic_and_edge_triggered() {
        let t0 = Instant::now();
        let mut engine = PhaseEngine::new();
        engine.activate(t0);

        assert!(engine.poll(at(t0, 3000)));
        // Later polls report no new edge and never revert the signal.
        assert!(!engine.poll(at(t0, 4000)));
        assert!(!engine.poll(at(t0, 60_000)));
        assert!(engine.terminal_reached());
        assert_eq!(engine.phase(), Some(ChartPhase::Surprise));
    }

    #[test]
    fn reentrant_activation_is_ignored() {
        let t0 = Instant::now();
        let mut engine = PhaseEngine::new();
        engine.activate(t0);
        assert!(!engine.poll(at(t0, 1600)));
        assert_eq!(engine.phase(), Some(ChartPhase::Loading));

        // Pressing the entry again must not reset or stack timers.
        engine.activate(at(t0, 1700));
        assert_eq!(engine.phase(), Some(ChartPhase::Loading));
        assert!(engine.poll(at(t0, 3000)));
        assert!(!engine.poll(at(t0, 4700)));
    }
}
