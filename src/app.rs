//! Application wiring.
//! Builds the config from flags, initializes logging, installs the interrupt handler,
//! runs the organizer and prints the summary.
//!
//! Exit status: non-zero only for fatal errors (bad source directory, listing failed,
//! broken pool) or an interrupted run. Individual file failures are reported in the
//! summary and still exit zero.

use anyhow::Result;
use std::sync::{Arc, Mutex};
use tracing::{debug, error};

use file_organizer::cli::Args;
use file_organizer::output as out;
use file_organizer::{Classifier, OrganizerError, organize_validated, shutdown};

use crate::logging::init_tracing;

/// Run the CLI application.
pub fn run(args: Args) -> Result<()> {
    let mut cfg = args.to_config();

    let guard_opt = init_tracing(cfg.effective_log_level(), cfg.log_file.as_deref(), args.json)
        .map_err(|e| {
            out::print_error(&format!("Failed to initialize logging: {}", e));
            e
        })?;

    // Guard needs to be dropped on exit to flush the file appender.
    let guard_slot = Arc::new(Mutex::new(guard_opt));
    {
        let guard_slot = Arc::clone(&guard_slot);
        let installed = ctrlc::set_handler(move || {
            if shutdown::is_requested() {
                // Second interrupt: stop waiting for in-flight renames.
                if let Ok(mut g) = guard_slot.lock() {
                    let _ = g.take();
                }
                std::process::exit(130);
            }
            shutdown::request();
            out::print_warn("Received interrupt; finishing in-flight moves and stopping...");
        });
        if let Err(e) = installed {
            out::print_warn(&format!("Could not install interrupt handler: {e}"));
        }
    }

    debug!("Starting file_organizer: {:?}", args);

    let started = cfg.validate_and_normalize().map(|()| {
        out::print_info(&format!(
            "Starting file organization in: {}",
            cfg.source_dir.display()
        ));
        if cfg.dry_run {
            out::print_info("DRY RUN MODE: no changes will be made.");
        }
    });

    let classifier = Classifier::default();
    let result = match started.and_then(|()| organize_validated(&cfg, &classifier)) {
        Ok(summary) => {
            out::print_summary(&summary, cfg.dry_run);
            if summary.interrupted {
                error!(
                    code = OrganizerError::Interrupted.code(),
                    kind = OrganizerError::Interrupted.kind(),
                    "Run interrupted by user"
                );
                Err(OrganizerError::Interrupted.into())
            } else {
                if summary.failed == 0 && !cfg.dry_run {
                    out::print_success(&format!("Organized {} file(s)", summary.moved));
                }
                Ok(())
            }
        }
        Err(e) => {
            error!(code = e.code(), kind = e.kind(), error = %e, "Run failed");
            out::print_error(&e.to_string());
            Err(e.into())
        }
    };

    // Ensure logs are flushed before exit
    if let Ok(mut g) = guard_slot.lock() {
        let _ = g.take();
    }

    result
}
