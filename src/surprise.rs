use std::time::{Duration, Instant};

use rand::Rng;
use tracing::warn;

use crate::audio::Playback;

pub const CONFETTI_COUNT: usize = 50;
pub const PRIMARY_REVEAL_MS: u64 = 500;
pub const SECONDARY_REVEAL_MS: u64 = 2000;
pub const MUSIC_VOLUME: f32 = 0.7;

/// One decorative animation unit, generated once per overlay activation
/// and immutable afterwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConfettiParticle {
    pub id: u16,
    /// Horizontal position as a percentage of the render width, [0, 100).
    pub left_pct: f32,
    /// Seconds after overlay activation before the particle starts
    /// falling, [0, 3).
    pub delay_secs: f32,
}

/// Generates one batch of confetti. Pure apart from the rng, so the batch
/// shape is testable without any rendering.
pub fn generate_confetti<R: Rng>(count: usize, rng: &mut R) -> Vec<ConfettiParticle> {
    (0..count)
        .map(|id| ConfettiParticle {
            id: id as u16,
            left_pct: rng.gen_range(0.0..100.0),
            delay_secs: rng.gen_range(0.0..3.0),
        })
        .collect()
}

/// Pairs the playback handle with its release. Drop runs on every exit
/// path, so stop-and-rewind is invoked exactly once even when the start
/// call failed.
struct AudioGuard {
    inner: Box<dyn Playback>,
}

impl Drop for AudioGuard {
    fn drop(&mut self) {
        self.inner.stop_and_rewind();
    }
}

/// Owner of everything the surprise overlay needs: the confetti batch,
/// the staggered reveal flags, and the looping music. Exists only from
/// the terminal signal until process teardown.
pub struct SurpriseState {
    activated_at: Instant,
    pub confetti: Vec<ConfettiParticle>,
    primary_revealed: bool,
    secondary_revealed: bool,
    audio_started: bool,
    _audio: AudioGuard,
}

impl SurpriseState {
    /// Activates the overlay at `now`, which is time zero for the reveal
    /// deadlines. Audio start failure is logged and swallowed; the overlay
    /// renders without sound.
    pub fn activate(now: Instant, playback: Box<dyn Playback>) -> Self {
        Self::activate_with(now, playback, &mut rand::thread_rng())
    }

    pub fn activate_with<R: Rng>(
        now: Instant,
        mut playback: Box<dyn Playback>,
        rng: &mut R,
    ) -> Self {
        let audio_started = match playback.start() {
            Ok(()) => true,
            Err(err) => {
                warn!(?err, "overlay music failed to start; continuing without sound");
                false
            }
        };
        Self {
            activated_at: now,
            confetti: generate_confetti(CONFETTI_COUNT, rng),
            primary_revealed: false,
            secondary_revealed: false,
            audio_started,
            _audio: AudioGuard { inner: playback },
        }
    }

    /// Latches the reveal flags once their deadlines pass. Flags are never
    /// reset.
    pub fn poll(&mut self, now: Instant) {
        if !self.primary_revealed
            && now >= self.activated_at + Duration::from_millis(PRIMARY_REVEAL_MS)
        {
            self.primary_revealed = true;
        }
        if !self.secondary_revealed
            && now >= self.activated_at + Duration::from_millis(SECONDARY_REVEAL_MS)
        {
            self.secondary_revealed = true;
        }
    }

    pub fn primary_revealed(&self) -> bool {
        self.primary_revealed
    }

    pub fn secondary_revealed(&self) -> bool {
        self.secondary_revealed
    }

    pub fn audio_started(&self) -> bool {
        self.audio_started
    }

    /// Time since overlay activation, used to animate the confetti fall.
    pub fn elapsed(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.activated_at)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;
    use rand::{rngs::StdRng, SeedableRng};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[derive(Clone)]
    struct RecordingPlayback {
        starts: Arc<AtomicUsize>,
        stops: Arc<AtomicUsize>,
        fail_start: bool,
    }

    impl RecordingPlayback {
        fn new(fail_start: bool) -> (Self, Arc<AtomicUsize>, Arc<AtomicUsize>) {
            let starts = Arc::new(AtomicUsize::new(0));
            let stops = Arc::new(AtomicUsize::new(0));
            (
                Self {
                    starts: starts.clone(),
                    stops: stops.clone(),
                    fail_start,
                },
                starts,
                stops,
            )
        }
    }

    impl Playback for RecordingPlayback {
        fn start(&mut self) -> anyhow::Result<()> {
            self.starts.fetch_add(1, Ordering::SeqCst);
            if self.fail_start {
                Err(anyhow!("playback blocked"))
            } else {
                Ok(())
            }
        }

        fn stop_and_rewind(&mut self) {
            self.stops.fetch_add(1, Ordering::SeqCst);
        }
    }

    fn at(t0: Instant, ms: u64) -> Instant {
        t0 + Duration::from_millis(ms)
    }

    #[test]
    fn confetti_batch_shape_holds_across_seeds() {
        for seed in 0..200u64 {
            let mut rng = StdRng::seed_from_u64(seed);
            let batch = generate_confetti(CONFETTI_COUNT, &mut rng);
            assert_eq!(batch.len(), 50);
            for (idx, particle) in batch.iter().enumerate() {
                assert_eq!(particle.id as usize, idx);
                assert!(particle.left_pct >= 0.0 && particle.left_pct < 100.0);
                assert!(particle.delay_secs >= 0.0 && particle.delay_secs < 3.0);
            }
        }
    }

    #[test]
    fn reveal_flags_stagger_in_order() {
        let t0 = Instant::now();
        let (playback, _, _) = RecordingPlayback::new(false);
        let mut rng = StdRng::seed_from_u64(7);
        let mut state = SurpriseState::activate_with(t0, Box::new(playback), &mut rng);

        state.poll(at(t0, 499));
        assert!(!state.primary_revealed());
        assert!(!state.secondary_revealed());

        state.poll(at(t0, 500));
        assert!(state.primary_revealed());
        assert!(!state.secondary_revealed());

        state.poll(at(t0, 1999));
        assert!(!state.secondary_revealed());

        state.poll(at(t0, 2000));
        assert!(state.primary_revealed());
        assert!(state.secondary_revealed());

        // 1500 ms between the two deadlines.
        assert_eq!(SECONDARY_REVEAL_MS - PRIMARY_REVEAL_MS, 1500);
    }

    #[test]
    fn teardown_releases_audio_exactly_once() {
        let t0 = Instant::now();
        let (playback, starts, stops) = RecordingPlayback::new(false);
        let mut rng = StdRng::seed_from_u64(11);
        let state = SurpriseState::activate_with(t0, Box::new(playback), &mut rng);
        assert!(state.audio_started());
        assert_eq!(starts.load(Ordering::SeqCst), 1);
        assert_eq!(stops.load(Ordering::SeqCst), 0);

        drop(state);
        assert_eq!(stops.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn teardown_releases_audio_even_when_start_failed() {
        let t0 = Instant::now();
        let (playback, _, stops) = RecordingPlayback::new(true);
        let mut rng = StdRng::seed_from_u64(13);
        let state = SurpriseState::activate_with(t0, Box::new(playback), &mut rng);
        assert!(!state.audio_started());

        drop(state);
        assert_eq!(stops.load(Ordering::SeqCst), 1);
    }
}
