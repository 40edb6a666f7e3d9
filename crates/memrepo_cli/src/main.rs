//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `memrepo_core` linkage with one Save/FindById/Delete/All cycle.
//! - Keep output deterministic for quick local sanity checks.

use memrepo_core::{init_logging, InMemoryRepository, LogConfig, Record, Repository};
use std::process::ExitCode;
use std::sync::Arc;

fn main() -> ExitCode {
    match LogConfig::from_env() {
        Ok(Some(config)) => match init_logging(&config) {
            Ok(()) => println!(
                "memrepo logging level={} dir={}",
                config.level(),
                config.log_dir().display()
            ),
            Err(err) => eprintln!("memrepo logging disabled: {err}"),
        },
        Ok(None) => {}
        Err(err) => {
            eprintln!("memrepo invalid logging config: {err}");
            return ExitCode::FAILURE;
        }
    }

    println!("memrepo_core version={}", memrepo_core::core_version());

    let repo = InMemoryRepository::<Record<&str>>::standalone();
    let first = Arc::new(Record::new("first"));
    let second = Arc::new(Record::new("second"));
    repo.save(Arc::clone(&first));
    repo.save(Arc::clone(&second));
    repo.save(Arc::new(Record {
        id: first.id,
        payload: "duplicate",
    }));

    let found = repo
        .find_by_id(&first.id)
        .map(|record| record.payload)
        .unwrap_or("missing");
    repo.delete(&second.id);
    repo.delete(&second.id);

    log::info!(
        "event=cli_smoke module=cli status=ok remaining={}",
        repo.all().len()
    );
    println!("memrepo_core find={found} remaining={}", repo.all().len());
    ExitCode::SUCCESS
}
