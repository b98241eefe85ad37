// THEORY:
// Live previews deliver frames faster than one thread can always keep up with,
// and every classification is independent of the last one. The parallel pipeline
// spreads frames over a fixed pool of tokio workers:
//
//   classify() ─► task channel ─► dispatcher (round robin) ─► worker N
//                                                              │
//   caller  ◄──────────────── oneshot reply ◄──────────────────┘
//
// Each request owns its frame bytes, so nothing is shared between workers except
// the pipeline's read-only palette. The CPU-bound decode runs on tokio's blocking
// pool so worker tasks never stall the async executor.

use crate::error::{ColorError, Result};
use crate::pipeline::{ColorPipeline, ColorReport, PipelineConfig};
use crate::core_modules::region::region::{Coordinate, SampleRect};
use futures::future::join_all;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;
use tracing::{debug, warn};

/// One frame to classify, owned by the request.
#[derive(Debug, Clone)]
pub struct FrameRequest {
    pub data: Vec<u8>,
    pub width: Coordinate,
    pub height: Coordinate,
    pub rect: SampleRect,
}

impl FrameRequest {
    pub fn new(data: Vec<u8>, width: Coordinate, height: Coordinate, rect: SampleRect) -> Self {
        Self {
            data,
            width,
            height,
            rect,
        }
    }
}

struct FrameTask {
    frame_id: u64,
    request: FrameRequest,
    result_sender: oneshot::Sender<Result<ColorReport>>,
}

pub struct WorkerPool {
    task_sender: mpsc::UnboundedSender<FrameTask>,
    dispatcher: JoinHandle<()>,
    workers: Vec<JoinHandle<()>>,
}

impl WorkerPool {
    /// Spawns `worker_count` workers (at least one). Must be called inside a tokio runtime.
    pub fn new(pipeline: ColorPipeline, worker_count: usize) -> Self {
        let worker_count = worker_count.max(1);
        let (task_sender, mut task_receiver) = mpsc::unbounded_channel::<FrameTask>();

        let (worker_senders, worker_receivers): (Vec<_>, Vec<_>) = (0..worker_count)
            .map(|_| mpsc::unbounded_channel::<FrameTask>())
            .unzip();

        // Spawn dispatcher
        let dispatcher = tokio::spawn(async move {
            let mut worker_idx = 0;
            while let Some(task) = task_receiver.recv().await {
                if let Err(mpsc::error::SendError(task)) = worker_senders[worker_idx].send(task) {
                    warn!(frame_id = task.frame_id, worker_idx, "worker gone, dropping frame");
                }
                worker_idx = (worker_idx + 1) % worker_count;
            }
        });

        // Spawn workers
        let workers = worker_receivers
            .into_iter()
            .enumerate()
            .map(|(worker_idx, mut worker_receiver)| {
                let pipeline = pipeline.clone();
                tokio::spawn(async move {
                    while let Some(task) = worker_receiver.recv().await {
                        let result = Self::process_frame_worker(pipeline.clone(), task.request).await;
                        debug!(frame_id = task.frame_id, worker_idx, ok = result.is_ok(), "frame done");
                        let _ = task.result_sender.send(result);
                    }
                })
            })
            .collect();

        Self {
            task_sender,
            dispatcher,
            workers,
        }
    }

    async fn process_frame_worker(pipeline: ColorPipeline, request: FrameRequest) -> Result<ColorReport> {
        tokio::task::spawn_blocking(move || {
            pipeline.classify_region(&request.data, request.width, request.height, request.rect)
        })
        .await
        .map_err(|_| ColorError::WorkerUnavailable)?
    }

    pub fn worker_count(&self) -> usize {
        self.workers.len()
    }

    async fn process_frame(&self, frame_id: u64, request: FrameRequest) -> Result<ColorReport> {
        let (result_sender, result_receiver) = oneshot::channel();

        let task = FrameTask {
            frame_id,
            request,
            result_sender,
        };

        self.task_sender
            .send(task)
            .map_err(|_| ColorError::WorkerUnavailable)?;

        result_receiver
            .await
            .map_err(|_| ColorError::WorkerUnavailable)?
    }

    /// Stops accepting work and waits for in-flight frames to finish.
    pub async fn shutdown(self) {
        drop(self.task_sender);
        let _ = self.dispatcher.await;
        for worker in self.workers {
            let _ = worker.await;
        }
    }
}

/// Classifies independent frames concurrently.
pub struct ParallelPipeline {
    worker_pool: WorkerPool,
    frame_counter: AtomicU64,
}

impl ParallelPipeline {
    /// Spawns `config.worker_count` workers (at least one). Must be called inside a tokio runtime.
    pub fn new(config: PipelineConfig) -> Self {
        let worker_count = config.worker_count;
        Self::with_pipeline(ColorPipeline::new(config), worker_count)
    }

    /// Like [`ParallelPipeline::new`], sharing an existing pipeline. Must be called inside a tokio runtime.
    pub fn with_pipeline(pipeline: ColorPipeline, worker_count: usize) -> Self {
        Self {
            worker_pool: WorkerPool::new(pipeline, worker_count),
            frame_counter: AtomicU64::new(0),
        }
    }

    pub fn worker_count(&self) -> usize {
        self.worker_pool.worker_count()
    }

    /// Number of frames submitted so far.
    pub fn frames_submitted(&self) -> u64 {
        self.frame_counter.load(Ordering::Relaxed)
    }

    pub async fn classify(&self, request: FrameRequest) -> Result<ColorReport> {
        let frame_id = self.frame_counter.fetch_add(1, Ordering::Relaxed);
        self.worker_pool.process_frame(frame_id, request).await
    }

    /// Classifies every request; results come back in input order.
    pub async fn classify_batch(&self, requests: Vec<FrameRequest>) -> Vec<Result<ColorReport>> {
        join_all(requests.into_iter().map(|request| self.classify(request))).await
    }

    pub async fn shutdown(self) {
        self.worker_pool.shutdown().await;
    }
}
