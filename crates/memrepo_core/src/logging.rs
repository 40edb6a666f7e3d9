//! Process-wide logging bootstrap.
//!
//! # Responsibility
//! - Resolve logging configuration from explicit values or the environment.
//! - Start a rolling file logger at most once per process.
//!
//! # Invariants
//! - Initialization is idempotent for an identical configuration.
//! - Re-initialization with a different level or directory is rejected.
//! - Initialization never panics.

use flexi_logger::{Cleanup, Criterion, FileSpec, Logger, LoggerHandle, Naming, WriteMode};
use log::{error, info};
use once_cell::sync::OnceCell;
use std::path::{Path, PathBuf};

/// Environment variable holding the log level.
pub const LOG_LEVEL_ENV: &str = "MEMREPO_LOG_LEVEL";
/// Environment variable holding the absolute log directory.
pub const LOG_DIR_ENV: &str = "MEMREPO_LOG_DIR";

const LOG_FILE_BASENAME: &str = "memrepo";
const MAX_LOG_FILE_SIZE_BYTES: u64 = 10 * 1024 * 1024;
const MAX_LOG_FILES: usize = 5;
const MAX_PANIC_PAYLOAD_CHARS: usize = 160;

static ACTIVE_CONFIG: OnceCell<ActiveLogger> = OnceCell::new();
static PANIC_HOOK_INSTALLED: OnceCell<()> = OnceCell::new();

struct ActiveLogger {
    config: LogConfig,
    _handle: LoggerHandle,
}

/// Validated logging configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    level: &'static str,
    log_dir: PathBuf,
}

impl LogConfig {
    /// Validates a level name and an absolute directory.
    ///
    /// # Errors
    /// - Unsupported level (expected `trace|debug|info|warn|error`).
    /// - Empty or relative `log_dir`.
    pub fn new(level: &str, log_dir: &str) -> Result<Self, String> {
        Ok(Self {
            level: normalize_level(level)?,
            log_dir: normalize_log_dir(log_dir)?,
        })
    }

    /// Reads `MEMREPO_LOG_LEVEL` and `MEMREPO_LOG_DIR`.
    ///
    /// Returns `Ok(None)` when no directory is configured; the level falls
    /// back to [`default_log_level`].
    pub fn from_env() -> Result<Option<Self>, String> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Option<Self>, String> {
        let Some(log_dir) = lookup(LOG_DIR_ENV) else {
            return Ok(None);
        };
        let level = lookup(LOG_LEVEL_ENV).unwrap_or_else(|| default_log_level().to_string());
        Self::new(&level, &log_dir).map(Some)
    }

    pub fn level(&self) -> &'static str {
        self.level
    }

    pub fn log_dir(&self) -> &Path {
        &self.log_dir
    }
}

/// Starts file logging for `config`.
///
/// # Errors
/// - A different configuration is already active.
/// - The directory cannot be created or the logger backend fails to start.
pub fn init_logging(config: &LogConfig) -> Result<(), String> {
    let active = ACTIVE_CONFIG.get_or_try_init(|| start_logger(config))?;
    ensure_same_config(&active.config, config)
}

/// Returns the active configuration, or `None` before initialization.
pub fn logging_status() -> Option<LogConfig> {
    ACTIVE_CONFIG.get().map(|active| active.config.clone())
}

/// Returns `debug` for debug builds and `info` for release builds.
pub fn default_log_level() -> &'static str {
    if cfg!(debug_assertions) {
        "debug"
    } else {
        "info"
    }
}

fn start_logger(config: &LogConfig) -> Result<ActiveLogger, String> {
    std::fs::create_dir_all(&config.log_dir).map_err(|err| {
        format!(
            "failed to create log directory `{}`: {err}",
            config.log_dir.display()
        )
    })?;

    let handle = Logger::try_with_str(config.level)
        .map_err(|err| format!("invalid log level `{}`: {err}", config.level))?
        .log_to_file(
            FileSpec::default()
                .directory(config.log_dir.as_path())
                .basename(LOG_FILE_BASENAME),
        )
        .rotate(
            Criterion::Size(MAX_LOG_FILE_SIZE_BYTES),
            Naming::Numbers,
            Cleanup::KeepLogFiles(MAX_LOG_FILES),
        )
        .write_mode(WriteMode::BufferAndFlush)
        .append()
        .format_for_files(flexi_logger::detailed_format)
        .start()
        .map_err(|err| format!("failed to start logger: {err}"))?;

    install_panic_hook_once();

    info!(
        "event=logging_init module=logging status=ok level={} log_dir={} version={}",
        config.level,
        config.log_dir.display(),
        env!("CARGO_PKG_VERSION")
    );

    Ok(ActiveLogger {
        config: config.clone(),
        _handle: handle,
    })
}

fn ensure_same_config(active: &LogConfig, requested: &LogConfig) -> Result<(), String> {
    if active.log_dir != requested.log_dir {
        return Err(format!(
            "logging already initialized at `{}`; refusing to switch to `{}`",
            active.log_dir.display(),
            requested.log_dir.display()
        ));
    }
    if active.level != requested.level {
        return Err(format!(
            "logging already initialized with level `{}`; refusing to switch to `{}`",
            active.level, requested.level
        ));
    }
    Ok(())
}

fn normalize_level(level: &str) -> Result<&'static str, String> {
    match level.trim().to_ascii_lowercase().as_str() {
        "trace" => Ok("trace"),
        "debug" => Ok("debug"),
        "info" => Ok("info"),
        "warn" | "warning" => Ok("warn"),
        "error" => Ok("error"),
        other => Err(format!(
            "unsupported log level `{other}`; expected trace|debug|info|warn|error"
        )),
    }
}

fn normalize_log_dir(log_dir: &str) -> Result<PathBuf, String> {
    let trimmed = log_dir.trim();
    if trimmed.is_empty() {
        return Err("log_dir cannot be empty".to_string());
    }
    let path = Path::new(trimmed);
    if !path.is_absolute() {
        return Err(format!("log_dir must be an absolute path, got `{trimmed}`"));
    }
    Ok(path.to_path_buf())
}

fn install_panic_hook_once() {
    if PANIC_HOOK_INSTALLED.set(()).is_err() {
        return;
    }

    let previous_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let location = panic_info
            .location()
            .map(|loc| format!("{}:{}", loc.file(), loc.line()))
            .unwrap_or_else(|| "unknown".to_string());
        error!(
            "event=panic_captured module=logging status=error location={} payload={}",
            location,
            panic_payload_summary(panic_info)
        );
        previous_hook(panic_info);
    }));
}

fn panic_payload_summary(info: &std::panic::PanicHookInfo<'_>) -> String {
    let payload = if let Some(message) = info.payload().downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = info.payload().downcast_ref::<String>() {
        message.clone()
    } else {
        "non-string panic payload".to_string()
    };

    sanitize_message(&payload, MAX_PANIC_PAYLOAD_CHARS)
}

fn sanitize_message(value: &str, max_chars: usize) -> String {
    let normalized = value.replace(['\n', '\r'], " ");
    let mut truncated = normalized.chars().take(max_chars).collect::<String>();
    if normalized.chars().count() > max_chars {
        truncated.push_str("...");
    }
    truncated
}
