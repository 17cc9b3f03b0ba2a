//! The once-per-second clock that drives a test's elapsed time.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{Instant, interval_at};

/// Cadence of the test clock.
pub const TICK_PERIOD: Duration = Duration::from_secs(1);

/// Receiving end of a clock: one `()` per period, `None` once the clock is gone.
pub type Ticks = mpsc::UnboundedReceiver<()>;

/// An owned, cancellable repeating task.
///
/// Each period one `()` is sent on the receiver returned by [`TickTimer::start`].
/// The task stops when the timer is cancelled or dropped, after which the
/// receiver yields `None`.
#[derive(Debug)]
pub struct TickTimer {
    handle: JoinHandle<()>,
}

impl TickTimer {
    /// Spawn the timer on the current tokio runtime. The first tick fires one
    /// full `period` after the call.
    ///
    /// # Panics
    ///
    /// Panics if called outside a tokio runtime.
    #[must_use]
    pub fn start(period: Duration) -> (Self, Ticks) {
        let (tx, rx) = mpsc::unbounded_channel();
        let handle = tokio::spawn(async move {
            let mut interval = interval_at(Instant::now() + period, period);
            loop {
                interval.tick().await;
                if tx.send(()).is_err() {
                    break;
                }
            }
        });
        (Self { handle }, rx)
    }

    /// Stop the timer. No tick is delivered after this returns control to the runtime.
    pub fn cancel(self) {
        self.handle.abort();
    }
}

impl Drop for TickTimer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// Holds the single clock of a test attempt.
///
/// Starting replaces any previous clock, so at most one is ever running.
#[derive(Debug, Default)]
pub struct SessionClock {
    timer: Option<TickTimer>,
}

impl SessionClock {
    /// Start a fresh clock, cancelling the one before it.
    ///
    /// # Panics
    ///
    /// Panics if called outside a tokio runtime.
    #[must_use]
    pub fn start(&mut self, period: Duration) -> Ticks {
        self.stop();
        let (timer, ticks) = TickTimer::start(period);
        self.timer = Some(timer);
        ticks
    }

    /// Cancel the running clock, if any.
    pub fn stop(&mut self) {
        if let Some(timer) = self.timer.take() {
            timer.cancel();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drain(ticks: &mut Ticks) -> usize {
        let mut count = 0;
        while ticks.try_recv().is_ok() {
            count += 1;
        }
        count
    }

    #[tokio::test(start_paused = true)]
    async fn fires_once_per_period() {
        let (_timer, mut ticks) = TickTimer::start(TICK_PERIOD);
        tokio::time::sleep(Duration::from_millis(3_500)).await;
        assert_eq!(drain(&mut ticks), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn cancel_stops_ticks_for_good() {
        let (timer, mut ticks) = TickTimer::start(TICK_PERIOD);
        tokio::time::sleep(Duration::from_millis(1_500)).await;
        assert_eq!(drain(&mut ticks), 1);

        timer.cancel();
        tokio::time::sleep(Duration::from_secs(5)).await;
        assert!(ticks.recv().await.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn dropping_the_timer_cancels_it() {
        let (timer, mut ticks) = TickTimer::start(TICK_PERIOD);
        drop(timer);
        tokio::time::sleep(Duration::from_secs(3)).await;
        assert!(ticks.recv().await.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn ticks_drive_a_session_until_results() {
        use crate::TestSession;
        use quiz_core::model::{AnswerPair, PhysicalQuantities, QuestionDraft, Trend};

        let question = QuestionDraft {
            id: "q".into(),
            number: 1,
            text: "Only question".into(),
            image_url: None,
            options: Trend::standard_options(),
            quantities: PhysicalQuantities::new("A", "B"),
            correct: AnswerPair::new(1, 1),
        }
        .validate()
        .unwrap();
        let mut session = TestSession::new(vec![question]).unwrap();

        let (timer, mut ticks) = TickTimer::start(TICK_PERIOD);
        for _ in 0..65 {
            ticks.recv().await.unwrap();
            session.tick();
        }
        session.go_next().unwrap();
        timer.cancel();

        tokio::time::sleep(Duration::from_secs(10)).await;
        while ticks.recv().await.is_some() {
            session.tick();
        }
        session.toggle_review().unwrap();
        assert_eq!(session.elapsed().to_string(), "1:05");
    }

    #[tokio::test(start_paused = true)]
    async fn restarting_the_session_clock_leaves_one_running() {
        let mut clock = SessionClock::default();
        let mut first = clock.start(TICK_PERIOD);
        let mut second = clock.start(TICK_PERIOD);

        tokio::time::sleep(Duration::from_millis(2_500)).await;
        assert!(first.recv().await.is_none());
        assert_eq!(drain(&mut second), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn stopped_session_clock_delivers_nothing() {
        let mut clock = SessionClock::default();
        let mut ticks = clock.start(TICK_PERIOD);
        clock.stop();
        clock.stop();

        tokio::time::sleep(Duration::from_secs(3)).await;
        assert!(ticks.recv().await.is_none());
    }
}
