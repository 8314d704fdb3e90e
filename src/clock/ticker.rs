use std::{sync::Arc, time::Duration};

use chrono::{Local, NaiveDateTime};
use futures::Stream;
use tokio::{
    sync::watch,
    task::JoinHandle,
    time::{self, Instant, MissedTickBehavior},
};
use tokio_stream::wrappers::WatchStream;
use tracing::trace;

/// Period between two ticks.
pub const TICK_PERIOD: Duration = Duration::from_secs(1);

/// Source of the current local date and time.
pub trait TimeSource: Send + Sync {
    /// The current instant in local time.
    fn now(&self) -> NaiveDateTime;
}

/// Reads the system clock in the local time zone.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalClock;

impl TimeSource for LocalClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Publishes a fresh instant once per [`TICK_PERIOD`].
///
/// Each tick simply reads the time source; missed ticks are skipped rather
/// than replayed and no drift correction is attempted. The background task
/// ends when the ticker is stopped or dropped.
pub struct Ticker {
    rx: watch::Receiver<NaiveDateTime>,
    task: JoinHandle<()>,
}

impl Ticker {
    /// Reads the time immediately and starts ticking one period later.
    ///
    /// Must be called from within a tokio runtime.
    pub fn start(source: Arc<dyn TimeSource>) -> Self {
        let (tx, rx) = watch::channel(source.now());

        let task = tokio::spawn(async move {
            let mut interval = time::interval_at(Instant::now() + TICK_PERIOD, TICK_PERIOD);
            interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

            loop {
                interval.tick().await;
                let now = source.now();
                trace!("Tick at {now}");

                if tx.send(now).is_err() {
                    break;
                }
            }
        });

        Self { rx, task }
    }

    /// The instant captured by the latest tick.
    pub fn now(&self) -> NaiveDateTime {
        *self.rx.borrow()
    }

    /// Stream of instants: yields the latest one immediately, then every tick.
    pub fn watch(&self) -> impl Stream<Item = NaiveDateTime> + Send + use<> {
        WatchStream::new(self.rx.clone())
    }

    /// Stops ticking.
    pub fn stop(self) {
        drop(self);
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.task.abort();
    }
}
