//! # Runtime
//!
//! Tokio runtime presets for the Bolt Bucket front-ends.
//!
//! The configurator is an event-driven client: every state transition happens on one
//! task, and the only concurrency is a fixed fan-out of network requests. The
//! [`RuntimeConfig::single_threaded`] preset reflects that model and is what the shell
//! uses. Multi-threaded presets remain available for embedding the client elsewhere.
//!
//! ## Example
//!
//! ```rust,ignore
//! #[bolt_runtime::main(single_threaded)]
//! async fn main() -> anyhow::Result<()> {
//!     Ok(())
//! }
//! ```

pub use anyhow::Result;
pub use bolt_derive::main;

use anyhow::anyhow;
use std::thread::available_parallelism;
use std::time::Duration;
use tokio::runtime::{Builder, Runtime};
use tracing::debug;

const DEFAULT_WORKER_THREADS: usize = 4;
const MAX_WORKER_THREADS: usize = 256;
/// Default stack size for worker threads (2 `MiB`).
const DEFAULT_STACK_SIZE: usize = 2 * 1024 * 1024;
const MIN_STACK_SIZE: usize = 512 * 1024;
const MAX_STACK_SIZE: usize = 16 * 1024 * 1024;
const DEFAULT_THREAD_NAME: &str = "bolt-worker";

/// Which Tokio scheduler backs the runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scheduler {
    /// Everything runs on the thread that calls `block_on`.
    CurrentThread,
    /// Work-stealing pool with the configured number of workers.
    MultiThread,
}

/// Configuration for the Tokio runtime.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub scheduler: Scheduler,
    pub worker_threads: usize,
    pub stack_size: usize,
    pub thread_name: String,
    pub thread_keep_alive: Duration,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            scheduler: Scheduler::MultiThread,
            worker_threads: detect_worker_threads(),
            stack_size: DEFAULT_STACK_SIZE,
            thread_name: DEFAULT_THREAD_NAME.to_owned(),
            thread_keep_alive: Duration::from_secs(60),
        }
    }
}

impl RuntimeConfig {
    /// Current-thread preset for interactive front-ends.
    #[must_use]
    pub fn single_threaded() -> Self {
        Self {
            scheduler: Scheduler::CurrentThread,
            worker_threads: 1,
            thread_name: "bolt-ui".to_owned(),
            ..Self::default()
        }
    }

    /// Small multi-threaded pool for clients where memory footprint matters.
    #[must_use]
    pub fn memory_efficient() -> Self {
        Self {
            worker_threads: (detect_worker_threads() / 2).max(1),
            thread_name: "bolt-mem".to_owned(),
            thread_keep_alive: Duration::from_secs(30),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_worker_threads(mut self, threads: usize) -> Self {
        self.worker_threads = threads.clamp(1, MAX_WORKER_THREADS);
        self
    }

    #[must_use]
    pub fn with_stack_size(mut self, size: usize) -> Self {
        self.stack_size = size.clamp(MIN_STACK_SIZE, MAX_STACK_SIZE);
        self
    }

    #[must_use]
    pub fn with_thread_name(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        self.thread_name =
            if name.trim().is_empty() { DEFAULT_THREAD_NAME.to_owned() } else { name };
        self
    }
}

/// Worker count from `TOKIO_WORKER_THREADS`, falling back to available parallelism.
fn detect_worker_threads() -> usize {
    std::env::var("TOKIO_WORKER_THREADS")
        .ok()
        .and_then(|s| s.parse::<usize>().ok())
        .filter(|&n| (1..=MAX_WORKER_THREADS).contains(&n))
        .unwrap_or_else(|| {
            available_parallelism().map(std::num::NonZero::get).unwrap_or(DEFAULT_WORKER_THREADS)
        })
}

/// Builds a Tokio runtime with all drivers (I/O, time) enabled.
///
/// Out-of-range values are clamped rather than rejected.
///
/// # Errors
///
/// Returns an error if the operating system refuses to create the runtime threads.
pub fn build_runtime_with_config(config: &RuntimeConfig) -> Result<Runtime> {
    let config = config
        .clone()
        .with_worker_threads(config.worker_threads)
        .with_stack_size(config.stack_size)
        .with_thread_name(config.thread_name.clone());
    debug!(config = ?config, "Building tokio runtime");

    let mut builder = match config.scheduler {
        Scheduler::CurrentThread => Builder::new_current_thread(),
        Scheduler::MultiThread => {
            let mut builder = Builder::new_multi_thread();
            builder.worker_threads(config.worker_threads);
            builder
        },
    };

    builder
        .thread_name(&config.thread_name)
        .thread_stack_size(config.stack_size)
        .thread_keep_alive(config.thread_keep_alive)
        .enable_all()
        .build()
        .map_err(|e| anyhow!("Failed to initialize runtime: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn worker_threads_are_clamped() {
        let config = RuntimeConfig::default().with_worker_threads(0);
        assert_eq!(config.worker_threads, 1);

        let config = RuntimeConfig::default().with_worker_threads(10_000);
        assert_eq!(config.worker_threads, MAX_WORKER_THREADS);
    }

    #[test]
    fn stack_size_is_clamped() {
        let config = RuntimeConfig::default().with_stack_size(100);
        assert_eq!(config.stack_size, MIN_STACK_SIZE);

        let config = RuntimeConfig::default().with_stack_size(100 * 1024 * 1024);
        assert_eq!(config.stack_size, MAX_STACK_SIZE);
    }

    #[test]
    fn blank_thread_name_falls_back() {
        let config = RuntimeConfig::default().with_thread_name("   ");
        assert_eq!(config.thread_name, DEFAULT_THREAD_NAME);
    }

    #[test]
    fn single_threaded_preset_runs_futures() -> Result<()> {
        let config = RuntimeConfig::single_threaded();
        assert_eq!(config.scheduler, Scheduler::CurrentThread);

        let rt = build_runtime_with_config(&config)?;
        let value = rt.block_on(async { 40 + 2 });
        assert_eq!(value, 42);
        Ok(())
    }

    #[test]
    fn memory_efficient_preset_builds() -> Result<()> {
        let config = RuntimeConfig::memory_efficient();
        assert_eq!(config.scheduler, Scheduler::MultiThread);
        assert!(config.worker_threads >= 1);

        let rt = build_runtime_with_config(&config)?;
        assert_eq!(rt.block_on(async { "ok" }), "ok");
        Ok(())
    }
}
