//! Orchestrator: scan the source directory, fan tasks out to a fixed worker
//! pool over a bounded queue, and aggregate the counters.
//!
//! Control flow:
//! 1) validate the source directory (fatal on failure)
//! 2) list every direct child up front (fatal on failure), sorting out skips
//! 3) spawn `workers` scoped threads, each draining the shared queue
//! 4) enqueue the tasks, drop the sender (close), join, snapshot the stats
//!
//! The listing is complete before any worker runs, so category folders created
//! during the run are never seen by the scan.
//!
//! Each task reaches exactly one worker: single producer, crossbeam MPMC
//! receiver, one close signal. No ordering between files is guaranteed.

mod scan;
mod stats;

pub use scan::{Candidate, SkipReason, Task, collect_candidates, current_exe_name, inspect_entry};
pub use stats::{RunSummary, Stats};

use std::thread;
use std::time::Instant;
use tracing::{debug, info, warn};

use crate::classify::Classifier;
use crate::config::Config;
use crate::errors::OrganizerError;
use crate::fs_ops::{io_hint, is_cross_device, move_file};
use crate::shutdown;

/// Organize `config.source_dir` with the default extension table.
pub fn organize(config: &Config) -> Result<RunSummary, OrganizerError> {
    organize_with(config, &Classifier::default())
}

/// Organize with a caller-supplied classifier. Validates a copy of `config` first.
pub fn organize_with(
    config: &Config,
    classifier: &Classifier,
) -> Result<RunSummary, OrganizerError> {
    let mut cfg = config.clone();
    cfg.validate_and_normalize()?;
    organize_validated(&cfg, classifier)
}

/// Organize with a config that already went through
/// [`Config::validate_and_normalize`]. The source directory is not re-checked.
pub fn organize_validated(
    cfg: &Config,
    classifier: &Classifier,
) -> Result<RunSummary, OrganizerError> {
    let start = Instant::now();
    let stats = Stats::new();

    info!(source = %cfg.source_dir.display(), "Scanning files...");
    let self_exe = current_exe_name();
    let candidates = collect_candidates(&cfg.source_dir, self_exe.as_deref()).map_err(|source| {
        OrganizerError::ReadDir {
            path: cfg.source_dir.clone(),
            source,
        }
    })?;

    let mut tasks = Vec::with_capacity(candidates.len());
    for candidate in candidates {
        match candidate {
            Candidate::Task(task) => tasks.push(task),
            Candidate::Skip { name, reason } => {
                debug!(name = %name.to_string_lossy(), reason = reason.as_str(), "skipping entry");
                stats.record_skipped();
            }
        }
    }
    debug!(tasks = tasks.len(), "scan complete");

    let (panicked, stopped_early) = thread::scope(|s| -> Result<(bool, bool), OrganizerError> {
        let (tx, rx) = crossbeam_channel::bounded::<Task>(cfg.queue_capacity);

        let mut handles = Vec::with_capacity(cfg.workers);
        for worker in 0..cfg.workers {
            let rx = rx.clone();
            let stats = &stats;
            let spawned = thread::Builder::new()
                .name(format!("organizer-worker-{worker}"))
                .spawn_scoped(s, move || {
                    for task in rx.iter() {
                        process_task(cfg, classifier, stats, worker, task);
                    }
                });
            match spawned {
                Ok(h) => handles.push(h),
                Err(e) => {
                    // Close the queue so already-running workers exit and the scope can end.
                    drop(tx);
                    return Err(OrganizerError::Spawn(e));
                }
            }
        }
        // Disconnection is driven by the workers alone from here on.
        drop(rx);
        debug!(workers = cfg.workers, capacity = cfg.queue_capacity, "worker pool started");

        let mut stopped_early = false;
        let mut tasks = tasks.into_iter();
        while let Some(task) = tasks.next() {
            if shutdown::is_requested() {
                let remaining = 1 + tasks.len() as u64;
                warn!(remaining, "interrupt requested; not enqueueing remaining entries");
                stats.record_skipped_n(remaining);
                stopped_early = true;
                break;
            }
            if let Err(err) = tx.send(task) {
                // Every receiver is gone, which only happens if all workers died.
                let path = err.into_inner().path;
                warn!(path = %path.display(), "task queue closed unexpectedly");
                stats.record_failed();
                break;
            }
        }
        drop(tx);

        let mut panicked = false;
        for h in handles {
            if h.join().is_err() {
                panicked = true;
            }
        }
        Ok((panicked, stopped_early))
    })?;

    if panicked {
        return Err(OrganizerError::WorkerPanicked);
    }

    let mut summary = stats.snapshot(start.elapsed());
    summary.interrupted = stopped_early || shutdown::is_requested();
    info!(
        moved = summary.moved,
        skipped = summary.skipped,
        failed = summary.failed,
        bytes = summary.total_bytes,
        "Run finished"
    );
    Ok(summary)
}

/// Classify one task and hand it to the mover; every outcome lands in `stats`.
fn process_task(cfg: &Config, classifier: &Classifier, stats: &Stats, worker: usize, task: Task) {
    if shutdown::is_requested() {
        stats.record_skipped();
        return;
    }

    let name = task.file_name();
    let category = classifier.classify(&name.to_string_lossy());
    let dest_dir = cfg.source_dir.join(category.dir_name());
    let size = task.size().unwrap_or(0);

    match move_file(cfg, &task.path, &dest_dir) {
        Ok(dest) => {
            stats.record_moved(size);
            debug!(
                worker,
                %category,
                src = %task.path.display(),
                dest = %dest.display(),
                "processed"
            );
        }
        Err(e) => {
            stats.record_failed();
            let hint = e.io_source().and_then(io_hint).unwrap_or("");
            if e.io_source().is_some_and(is_cross_device) {
                warn!(
                    worker,
                    code = e.code(),
                    kind = e.kind(),
                    src = %task.path.display(),
                    error = %e,
                    hint,
                    "Failed to move file: destination is on another filesystem"
                );
            } else {
                warn!(
                    worker,
                    code = e.code(),
                    kind = e.kind(),
                    src = %task.path.display(),
                    error = %e,
                    hint,
                    "Failed to move file"
                );
            }
        }
    }
}
