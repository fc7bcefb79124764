//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `taskdeck_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use taskdeck_core::{MemoryStorageAdapter, TaskService};

fn main() {
    println!("taskdeck_core version={}", taskdeck_core::core_version());

    // Session-only adapter keeps the probe free of filesystem side effects.
    match TaskService::open(MemoryStorageAdapter::new()) {
        Ok(service) => {
            let view = service.view();
            println!(
                "taskdeck_core seeded total={} pending={} completed={}",
                view.total, view.pending, view.completed
            );
        }
        Err(err) => {
            eprintln!("taskdeck_core probe failed: {err}");
            std::process::exit(1);
        }
    }
}
