use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Condvar, Mutex, PoisonError};
use std::thread::{self, JoinHandle};
use std::time::Instant;

use tracing::{debug, warn};

use crate::controllers::background::events::{AtlasEvent, AtlasFailure, AtlasFrame};
use crate::controllers::background::ports::presenter::AtlasPresenterPort;
use crate::controllers::data::atlas_request::AtlasRequest;
use crate::controllers::errors::RequestError;
use crate::core::actions::cancellation::CancelToken;
use crate::core::actions::compute_atlas::compute_atlas::{ComputeAtlasError, compute_atlas_cancelable};
use crate::core::actions::render_atlas::render_atlas::render_atlas;
use crate::core::colour_maps::jet::JetColourMap;

struct SharedState {
    generation: AtomicU64,
    last_completed_generation: AtomicU64,
    latest_request: Mutex<Option<(u64, AtlasRequest)>>,
    wake: Condvar,
    shutdown: AtomicBool,
    presenter_port: Arc<dyn AtlasPresenterPort>,
}

pub struct AtlasController {
    shared: Arc<SharedState>,
    worker: Option<JoinHandle<()>>,
}

enum JobOutcome {
    Cancelled,
    Error(RequestError),
}

impl AtlasController {
    pub fn new(presenter_port: Arc<dyn AtlasPresenterPort>) -> Self {
        let shared = Arc::new(SharedState {
            generation: AtomicU64::new(0),
            last_completed_generation: AtomicU64::new(0),
            latest_request: Mutex::new(None),
            wake: Condvar::new(),
            shutdown: AtomicBool::new(false),
            presenter_port,
        });

        let worker_shared = Arc::clone(&shared);

        let worker = thread::spawn(move || {
            Self::worker_loop(&worker_shared);
        });

        Self {
            shared,
            worker: Some(worker),
        }
    }

    /// Queues `request`, superseding any request not yet presented.
    ///
    /// Returns the generation number the resulting event will carry.
    pub fn submit_request(&self, request: AtlasRequest) -> u64 {
        let generation = self.shared.generation.fetch_add(1, Ordering::SeqCst) + 1;

        {
            let mut guard = self
                .shared
                .latest_request
                .lock()
                .unwrap_or_else(PoisonError::into_inner);
            *guard = Some((generation, request));
        }

        self.shared.wake.notify_one();

        generation
    }

    pub fn shutdown(&mut self) {
        self.shared.shutdown.store(true, Ordering::Release);
        self.shared.wake.notify_one();

        if let Some(handle) = self.worker.take() {
            if handle.join().is_err() {
                warn!("atlas worker panicked");
            }
        }
    }

    #[must_use]
    pub fn last_completed_generation(&self) -> u64 {
        self.shared
            .last_completed_generation
            .load(Ordering::Acquire)
    }

    fn worker_loop(shared: &Arc<SharedState>) {
        loop {
            let (job_generation, request) = {
                let mut guard = shared
                    .latest_request
                    .lock()
                    .unwrap_or_else(PoisonError::into_inner);
                loop {
                    if shared.shutdown.load(Ordering::Acquire) {
                        return;
                    }

                    if let Some(req) = guard.take() {
                        break req;
                    }

                    guard = shared
                        .wake
                        .wait(guard)
                        .unwrap_or_else(PoisonError::into_inner);
                }
            };

            let cancel_token = || {
                shared.shutdown.load(Ordering::Relaxed)
                    || job_generation != shared.generation.load(Ordering::Relaxed)
            };

            let event = match Self::run_request(job_generation, &request, &cancel_token) {
                Ok(frame) => AtlasEvent::Completed(frame),
                Err(JobOutcome::Cancelled) => {
                    debug!(generation = job_generation, "atlas request superseded");
                    continue;
                }
                Err(JobOutcome::Error(error)) => AtlasEvent::Failed(AtlasFailure {
                    generation: job_generation,
                    error,
                }),
            };

            if job_generation != shared.generation.load(Ordering::Acquire) {
                continue;
            }

            shared.presenter_port.present(event);
            shared
                .last_completed_generation
                .store(job_generation, Ordering::Release);
        }
    }

    fn run_request<C: CancelToken>(
        generation: u64,
        request: &AtlasRequest,
        cancel: &C,
    ) -> Result<AtlasFrame, JobOutcome> {
        let start = Instant::now();
        let atlas = compute_atlas_cancelable(request.region, request.density, request.params, cancel)
            .map_err(|e| match e {
                ComputeAtlasError::Cancelled(_) => JobOutcome::Cancelled,
                ComputeAtlasError::Engine(err) => JobOutcome::Error(err.into()),
            })?;
        let compute_duration = start.elapsed();

        if cancel.is_cancelled() {
            return Err(JobOutcome::Cancelled);
        }

        let colour_map = JetColourMap::new(atlas.max_count());
        let pixel_buffer = render_atlas(&atlas, &colour_map, request.show_grid)
            .map_err(|err| JobOutcome::Error(err.into()))?;

        Ok(AtlasFrame {
            generation,
            atlas,
            pixel_buffer,
            compute_duration,
        })
    }
}

impl Drop for AtlasController {
    fn drop(&mut self) {
        self.shutdown();
    }
}
