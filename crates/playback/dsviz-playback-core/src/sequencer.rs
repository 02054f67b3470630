//! Tick-driven playback sequencer over an ordered operation history.
//!
//! One sequencer owns one playback session. The host calls [`Sequencer::tick`]
//! with elapsed milliseconds each frame; all progress happens at that
//! boundary, so no call here ever blocks. Not safe for concurrent mutation:
//! external serialization is the caller's job if it ever shares one instance.

use crate::config::{PlaybackConfig, MIN_SPEED_MS};
use crate::error::PlaybackError;
use crate::outputs::PlaybackEvent;
use crate::step::OperationStep;

/// A scheduled step advance. The epoch is compared on fire so an advance
/// scheduled before a state reset can never act on the new state.
#[derive(Clone, Copy, Debug)]
struct PendingAdvance {
    epoch: u64,
    remaining_ms: f32,
}

/// Stateful sequencer with transport controls and queued notifications.
#[derive(Debug)]
pub struct Sequencer {
    history: Vec<OperationStep>,
    current: usize,
    playing: bool,
    speed_ms: f32,
    /// Bumped on every state-resetting operation; invalidates `pending`.
    epoch: u64,
    pending: Option<PendingAdvance>,
    events: Vec<PlaybackEvent>,
}

impl Default for Sequencer {
    fn default() -> Self {
        Self::new(PlaybackConfig::default())
    }
}

impl Sequencer {
    pub fn new(cfg: PlaybackConfig) -> Self {
        Self {
            history: Vec::new(),
            current: 0,
            playing: false,
            speed_ms: cfg.speed_ms.max(MIN_SPEED_MS),
            epoch: 0,
            pending: None,
            events: Vec::new(),
        }
    }

    /// Replace the step list. Resets the index to 0, stops playback, and
    /// cancels any pending advance.
    pub fn set_operation_history(&mut self, steps: Vec<OperationStep>) {
        log::debug!("playback: history replaced ({} steps)", steps.len());
        self.history = steps;
        self.current = 0;
        self.playing = false;
        self.cancel_pending();
    }

    /// Start playback. No-op while already playing or when the history is
    /// empty; wraps to step 0 when the index sits at or past the end. The
    /// first step notification is emitted immediately.
    pub fn play(&mut self) {
        if self.playing || self.history.is_empty() {
            return;
        }
        if self.current >= self.history.len() {
            self.current = 0;
        }
        log::debug!("playback: play from step {}", self.current);
        self.playing = true;
        self.advance();
    }

    /// Cancel the pending advance and stop, preserving the current index.
    pub fn pause(&mut self) {
        log::debug!("playback: pause at step {}", self.current);
        self.playing = false;
        self.cancel_pending();
    }

    /// Continue from the current index; same wrap rule as [`Sequencer::play`].
    pub fn resume(&mut self) {
        if !self.playing {
            self.play();
        }
    }

    /// Pause and reset the index to 0.
    pub fn stop(&mut self) {
        self.pause();
        self.current = 0;
    }

    /// Seek to `step_index` and notify synchronously. Out-of-range requests
    /// are ignored without error or state change.
    pub fn jump_to_step(&mut self, step_index: usize) {
        if step_index < self.history.len() {
            self.current = step_index;
            self.notify_step();
        }
    }

    /// Move one step forward, notifying; silent no-op at the last step.
    pub fn next_step(&mut self) {
        let idx = self.clamped_index();
        if idx + 1 < self.history.len() {
            self.current = idx + 1;
            self.notify_step();
        }
    }

    /// Move one step back, notifying; silent no-op at step 0.
    pub fn previous_step(&mut self) {
        let idx = self.clamped_index();
        if idx > 0 {
            self.current = idx - 1;
            self.notify_step();
        }
    }

    /// Change the delay used for future advances. A pending advance keeps
    /// its already-scheduled deadline.
    pub fn set_speed(&mut self, speed_ms: f32) -> Result<(), PlaybackError> {
        if !speed_ms.is_finite() || speed_ms <= 0.0 {
            return Err(PlaybackError::InvalidSpeed { speed_ms });
        }
        self.speed_ms = speed_ms.max(MIN_SPEED_MS);
        Ok(())
    }

    /// Advance scheduled playback by `dt_ms` of host time.
    pub fn tick(&mut self, dt_ms: f32) {
        let Some(pending) = self.pending.as_mut() else {
            return;
        };
        if pending.epoch != self.epoch {
            // Scheduled before a reset; drop it.
            self.pending = None;
            return;
        }
        pending.remaining_ms -= dt_ms;
        if pending.remaining_ms > 0.0 {
            return;
        }
        self.pending = None;
        self.advance();
    }

    /// The step at the current index, if any.
    #[inline]
    pub fn current_step(&self) -> Option<&OperationStep> {
        self.history.get(self.clamped_index())
    }

    /// Current index, clamped to the last valid step (0 when empty).
    #[inline]
    pub fn current_step_index(&self) -> usize {
        self.clamped_index()
    }

    #[inline]
    pub fn total_steps(&self) -> usize {
        self.history.len()
    }

    #[inline]
    pub fn is_playing(&self) -> bool {
        self.playing
    }

    #[inline]
    pub fn speed_ms(&self) -> f32 {
        self.speed_ms
    }

    /// Take all queued notifications, oldest first.
    pub fn drain_events(&mut self) -> Vec<PlaybackEvent> {
        std::mem::take(&mut self.events)
    }

    /// Emit the current step, move past it, and schedule the next advance;
    /// at the end of history stop and emit the single completion event.
    fn advance(&mut self) {
        if !self.playing {
            return;
        }
        if self.current < self.history.len() {
            log::trace!("playback: advance to step {}", self.current);
            self.notify_step();
            self.current += 1;
            self.pending = Some(PendingAdvance {
                epoch: self.epoch,
                remaining_ms: self.speed_ms,
            });
        } else {
            // Leave the raw index one past the end; accessors clamp it to the
            // last valid step and play() reads it as "wrap to the start".
            log::debug!("playback: completed after {} steps", self.history.len());
            self.playing = false;
            self.events.push(PlaybackEvent::Completed);
        }
    }

    fn notify_step(&mut self) {
        if let Some(step) = self.history.get(self.current) {
            self.events.push(PlaybackEvent::StepChanged {
                step_index: self.current,
                total_steps: self.history.len(),
                step: step.clone(),
            });
        }
    }

    #[inline]
    fn clamped_index(&self) -> usize {
        self.current.min(self.history.len().saturating_sub(1))
    }

    fn cancel_pending(&mut self) {
        self.pending = None;
        self.epoch = self.epoch.wrapping_add(1);
    }
}
