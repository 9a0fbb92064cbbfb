//! Task coordination: one worker per submitted file, plus a join-all wait.

use crossbeam::channel::{Sender, unbounded};
use std::path::PathBuf;
use std::sync::{Arc, Condvar, Mutex};
use std::thread;

use crate::dictionary::Dictionary;

use super::summary::SummaryAggregator;
use super::worker;

/// Scheduling strategy for submitted tasks
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkerMode {
    /// One detached thread per submission, no admission limit.
    ///
    /// Faithful to the reference front-end behavior, and a known scaling
    /// hazard under a flood of submissions; pick `pool` to bound it.
    #[default]
    Spawn,
    /// Fixed pool of long-lived worker threads fed through a channel
    Pool,
}

/// Live-worker counter with a reached-zero signal.
///
/// Deliberately separate from the summary lock: completion signaling and
/// statistics accumulation never contend with each other.
#[derive(Default)]
struct LiveCount {
    count: Mutex<usize>,
    zero: Condvar,
}

impl LiveCount {
    fn increment(&self) {
        let mut count = self.count.lock().unwrap();
        *count += 1;
    }

    fn decrement(&self) {
        let mut count = self.count.lock().unwrap();
        *count -= 1;
        if *count == 0 {
            self.zero.notify_all();
        }
    }

    fn wait_zero(&self) {
        let mut count = self.count.lock().unwrap();
        while *count > 0 {
            count = self.zero.wait(count).unwrap();
        }
    }
}

/// Launches a worker per submitted file and tracks the in-flight set.
///
/// The external protocol is submit-then-wait: the caller finishes submitting
/// before it calls [`Coordinator::await_all`], so the wait only has to
/// observe the live count draining to zero.
pub struct Coordinator {
    dictionary: Arc<Dictionary>,
    summary: Arc<SummaryAggregator>,
    live: Arc<LiveCount>,
    pool: Option<Sender<PathBuf>>,
}

impl Coordinator {
    /// Create a coordinator over a loaded dictionary and a shared summary.
    ///
    /// In pool mode, `max_workers` of 0 sizes the pool at 75% of the CPU
    /// cores, with a floor of one.
    pub fn new(
        dictionary: Arc<Dictionary>,
        summary: Arc<SummaryAggregator>,
        mode: WorkerMode,
        max_workers: usize,
    ) -> Self {
        let live = Arc::new(LiveCount::default());

        let pool = match mode {
            WorkerMode::Spawn => None,
            WorkerMode::Pool => {
                let workers = pool_size(max_workers);
                let (work_tx, work_rx) = unbounded::<PathBuf>();
                tracing::debug!(workers, "starting worker pool");

                for _ in 0..workers {
                    let work_rx = work_rx.clone();
                    let dictionary = dictionary.clone();
                    let summary = summary.clone();
                    let live = live.clone();
                    thread::spawn(move || {
                        while let Ok(path) = work_rx.recv() {
                            worker::run(&path, &dictionary, &summary);
                            live.decrement();
                        }
                    });
                }
                Some(work_tx)
            }
        };

        Coordinator {
            dictionary,
            summary,
            live,
            pool,
        }
    }

    /// Launch a worker for one target file and return immediately
    pub fn submit(&self, path: PathBuf) {
        self.live.increment();

        match &self.pool {
            Some(work_tx) => {
                // Pool threads outlive every submission, so the channel only
                // closes after the coordinator is dropped.
                if work_tx.send(path).is_err() {
                    tracing::error!("worker pool is gone, dropping task");
                    self.live.decrement();
                }
            }
            None => {
                let dictionary = self.dictionary.clone();
                let summary = self.summary.clone();
                let live = self.live.clone();
                thread::spawn(move || {
                    worker::run(&path, &dictionary, &summary);
                    live.decrement();
                });
            }
        }
    }

    /// Block until every submitted worker has finished.
    ///
    /// Returns immediately when nothing is in flight.
    pub fn await_all(&self) {
        self.live.wait_zero();
    }
}

fn pool_size(max_workers: usize) -> usize {
    if max_workers > 0 {
        max_workers
    } else {
        std::cmp::max(1, (num_cpus::get() * 75) / 100)
    }
}
