//! Frame pacing: throttles a free-running render loop to a target rate.
//!
//! [`FramePacer`] sits between the host's native tick source and the scene.
//! Each cycle walks Idle → Armed → Blocked → Idle: an idle pacer accepts a
//! tick and arms, the caller produces exactly one frame, and
//! [`FramePacer::frame_complete`] schedules a release after
//! `max(0, target_interval - frame_work_time)` through the host's
//! [`ReleaseScheduler`]. Ticks that arrive while armed or blocked are
//! skipped, which bounds the advance rate from above; slow hosts simply run
//! slower than target.
//!
//! On construction the pacer saves the host loop's mode and switches it to
//! on-demand, so only its own advances produce frames; dropping the pacer
//! cancels any pending release and restores the saved mode. The pacer owns
//! its [`RenderLoop`] capability by value, so two pacers cannot drive one
//! loop. Scheduling failures degrade to the native rate instead of crashing:
//! the loop goes back to continuous mode and every later tick advances.

use web_time::{Duration, Instant};

use crate::error::VetroError;

// ==================== HOST SEAMS ====================

/// How the host render loop produces frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameLoopMode {
    /// The host draws on every native refresh.
    Continuous,
    /// The host draws only when a frame is explicitly requested.
    OnDemand,
}

/// Capability handle over the host render loop.
///
/// Constructing a [`FramePacer`] consumes the handle, which is what makes
/// loop ownership exclusive: a second pacer over the same loop cannot exist
/// unless the host mints a second capability.
pub trait RenderLoop {
    /// Current frame-loop mode.
    fn mode(&self) -> FrameLoopMode;
    /// Switch the frame-loop mode.
    fn set_mode(&mut self, mode: FrameLoopMode);
    /// Ask the host for one frame while in on-demand mode.
    fn request_frame(&mut self);
}

/// Opaque handle to one scheduled release.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerId(u64);

impl TimerId {
    /// Wrap a host-assigned timer identifier.
    #[must_use]
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }
}

/// Host timing primitive used to defer the pacer's release.
///
/// Implementations must not block: `schedule` registers a one-shot callback
/// (which eventually invokes [`FramePacer::on_release`]) and returns
/// immediately.
pub trait ReleaseScheduler {
    /// Schedule a release after `delay`.
    ///
    /// # Errors
    /// [`VetroError::Timer`] when the host cannot schedule; the pacer treats
    /// this as non-fatal and falls back to the native rate.
    fn schedule(&mut self, delay: Duration) -> Result<TimerId, VetroError>;
    /// Cancel a previously scheduled release. Unknown ids are ignored.
    fn cancel(&mut self, id: TimerId);
}

// ==================== PACER ====================

/// Pacing phase within one tick cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PacerPhase {
    /// Ready to accept the next native tick.
    Idle,
    /// A tick was accepted and its frame is being produced.
    Armed,
    /// Waiting out the remainder of the target interval.
    Blocked,
    /// Scheduling failed; ticks pass through at native rate.
    Degraded,
}

/// Verdict for one native tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum TickDecision {
    /// Produce one frame, then call [`FramePacer::frame_complete`].
    Advance,
    /// Drop the tick entirely.
    Skip,
}

impl TickDecision {
    /// True when the tick should produce a frame.
    #[must_use]
    pub fn is_advance(self) -> bool {
        matches!(self, Self::Advance)
    }
}

/// Throttles advance signals to at most one per target interval.
pub struct FramePacer<L: RenderLoop, S: ReleaseScheduler> {
    loop_owner: L,
    scheduler: S,
    target_interval: Duration,
    phase: PacerPhase,
    tick_started: Option<Instant>,
    pending: Option<TimerId>,
    saved_mode: FrameLoopMode,
    last_delta: Duration,
}

impl<L: RenderLoop, S: ReleaseScheduler> FramePacer<L, S> {
    /// Activate pacing over `loop_owner` at `target_fps`.
    ///
    /// Saves the loop's current mode, switches it to on-demand, and requests
    /// one frame to prime the cycle.
    ///
    /// # Errors
    /// [`VetroError::InvalidParameter`] when `target_fps` is zero.
    pub fn new(
        mut loop_owner: L,
        scheduler: S,
        target_fps: u32,
    ) -> Result<Self, VetroError> {
        if target_fps == 0 {
            return Err(VetroError::InvalidParameter(
                "target fps must be at least 1".into(),
            ));
        }

        let saved_mode = loop_owner.mode();
        loop_owner.set_mode(FrameLoopMode::OnDemand);
        loop_owner.request_frame();

        Ok(Self {
            loop_owner,
            scheduler,
            target_interval: Duration::from_secs_f64(
                1.0 / f64::from(target_fps),
            ),
            phase: PacerPhase::Idle,
            tick_started: None,
            pending: None,
            saved_mode,
            last_delta: Duration::ZERO,
        })
    }

    /// Feed one native tick; the caller renders a frame only on
    /// [`TickDecision::Advance`].
    pub fn on_tick(&mut self, now: Instant) -> TickDecision {
        match self.phase {
            PacerPhase::Idle => {
                self.phase = PacerPhase::Armed;
                self.tick_started = Some(now);
                TickDecision::Advance
            }
            PacerPhase::Degraded => TickDecision::Advance,
            PacerPhase::Armed | PacerPhase::Blocked => TickDecision::Skip,
        }
    }

    /// Mark the accepted tick's frame as finished and schedule the release.
    ///
    /// The wait subtracts the time the frame already consumed, so pacing
    /// stays honest when frames are expensive; it clamps at zero rather
    /// than going negative.
    pub fn frame_complete(&mut self, now: Instant) {
        match self.phase {
            PacerPhase::Armed => {}
            // Degraded runs at native rate; completions have nothing to
            // schedule.
            PacerPhase::Degraded => return,
            PacerPhase::Idle | PacerPhase::Blocked => {
                log::debug!(
                    "frame_complete outside an armed cycle, ignoring"
                );
                return;
            }
        }

        let consumed = self
            .tick_started
            .map_or(Duration::ZERO, |t| now.saturating_duration_since(t));
        self.last_delta = consumed;

        let wait = self.target_interval.saturating_sub(consumed);
        match self.scheduler.schedule(wait) {
            Ok(id) => {
                self.pending = Some(id);
                self.phase = PacerPhase::Blocked;
            }
            Err(e) => {
                log::warn!(
                    "release scheduling failed, \
                     falling back to native frame rate: {e}"
                );
                self.degrade();
            }
        }
    }

    /// Handle the scheduled release firing: unblock and pull the next frame.
    ///
    /// Late or already-cancelled releases are ignored.
    pub fn on_release(&mut self) {
        if self.phase != PacerPhase::Blocked {
            return;
        }
        self.pending = None;
        self.phase = PacerPhase::Idle;
        self.loop_owner.request_frame();
    }

    /// Current pacing phase.
    #[must_use]
    pub fn phase(&self) -> PacerPhase {
        self.phase
    }

    /// Interval the pacer is holding advances to.
    #[must_use]
    pub fn target_interval(&self) -> Duration {
        self.target_interval
    }

    /// Frame work time observed on the last completed cycle.
    #[must_use]
    pub fn last_delta(&self) -> Duration {
        self.last_delta
    }

    /// Drop pacing entirely: native continuous mode, every tick advances.
    fn degrade(&mut self) {
        self.cancel_pending();
        self.loop_owner.set_mode(FrameLoopMode::Continuous);
        self.phase = PacerPhase::Degraded;
    }

    fn cancel_pending(&mut self) {
        if let Some(id) = self.pending.take() {
            self.scheduler.cancel(id);
        }
    }
}

impl<L: RenderLoop, S: ReleaseScheduler> Drop for FramePacer<L, S> {
    fn drop(&mut self) {
        self.cancel_pending();
        self.loop_owner.set_mode(self.saved_mode);
    }
}
