//! # Runtime
//!
//! Tokio runtime construction for `MoodFlag` binaries.
//!
//! ## Profiles
//! * **Interactive**: a current-thread scheduler. Terminal clients block on one
//!   prediction call per user action and need nothing more.
//! * **Service**: a small multi-threaded scheduler, for hosts that serve requests
//!   (the mock prediction service in tests uses it).
//!
//! ## Example
//!
//! ```rust,ignore
//! #[moodflag_runtime::main(interactive)]
//! async fn main() -> anyhow::Result<()> {
//!     Ok(())
//! }
//! ```

pub use anyhow::Result;
pub use moodflag_derive::main;

use anyhow::anyhow;
use std::thread::available_parallelism;
use std::time::Duration;
use tokio::runtime::{Builder, Runtime};
use tracing::debug;

/// The default number of worker threads if detection fails.
const DEFAULT_WORKER_THREADS: usize = 2;
/// The default stack size for threads (2 `MiB`).
const DEFAULT_STACK_SIZE: usize = 2 * 1024 * 1024;
/// Minimum allowed stack size (1 `MiB`).
const MIN_STACK_SIZE: usize = 1024 * 1024;
/// Maximum allowed stack size (16 `MiB`).
const MAX_STACK_SIZE: usize = 16 * 1024 * 1024;
/// Upper bound on worker threads for the service profile.
const MAX_WORKER_THREADS: usize = 64;
/// How long an idle blocking thread stays alive.
const THREAD_KEEP_ALIVE: Duration = Duration::from_secs(10);

/// Scheduler flavor of the runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flavor {
    CurrentThread,
    MultiThread { worker_threads: usize },
}

/// Configuration for the Tokio runtime.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub flavor: Flavor,
    pub stack_size: usize,
    pub thread_name: String,
    pub thread_keep_alive: Duration,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self::interactive()
    }
}

impl RuntimeConfig {
    /// Current-thread preset for terminal clients.
    #[must_use = "Use this configuration for interactive clients"]
    pub fn interactive() -> Self {
        Self {
            flavor: Flavor::CurrentThread,
            stack_size: DEFAULT_STACK_SIZE,
            thread_name: "moodflag-main".to_owned(),
            thread_keep_alive: THREAD_KEEP_ALIVE,
        }
    }

    /// Multi-threaded preset sized to the host.
    #[must_use = "Use this configuration for request-serving hosts"]
    pub fn service() -> Self {
        let workers = available_parallelism()
            .map(std::num::NonZero::get)
            .unwrap_or(DEFAULT_WORKER_THREADS)
            .min(MAX_WORKER_THREADS);

        Self {
            flavor: Flavor::MultiThread { worker_threads: workers },
            stack_size: DEFAULT_STACK_SIZE,
            thread_name: "moodflag-worker".to_owned(),
            thread_keep_alive: THREAD_KEEP_ALIVE,
        }
    }

    #[must_use = "Customize the number of worker threads for the runtime"]
    pub fn with_worker_threads(mut self, threads: usize) -> Self {
        self.flavor = Flavor::MultiThread { worker_threads: threads.clamp(1, MAX_WORKER_THREADS) };
        self
    }
}

/// Builds a Tokio runtime from the given configuration.
///
/// All drivers (I/O, time) are enabled; the HTTP client needs both.
///
/// # Errors
///
/// Returns an [`anyhow::Error`] if the OS refuses to create the runtime threads.
///
/// # Examples
///
/// ```rust
/// use moodflag_runtime::{RuntimeConfig, build_runtime};
///
/// let runtime = build_runtime(&RuntimeConfig::interactive())?;
/// let answer = runtime.block_on(async { 40 + 2 });
/// assert_eq!(answer, 42);
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn build_runtime(config: &RuntimeConfig) -> Result<Runtime> {
    debug!(config = ?config, "Building tokio runtime");

    let mut builder = match config.flavor {
        Flavor::CurrentThread => Builder::new_current_thread(),
        Flavor::MultiThread { worker_threads } => {
            let mut builder = Builder::new_multi_thread();
            builder.worker_threads(worker_threads.clamp(1, MAX_WORKER_THREADS));
            builder
        },
    };

    builder
        .thread_name(&config.thread_name)
        .thread_stack_size(config.stack_size.clamp(MIN_STACK_SIZE, MAX_STACK_SIZE))
        .thread_keep_alive(config.thread_keep_alive)
        .enable_all();

    builder.build().map_err(|e| anyhow!("Failed to initialize runtime: {e}"))
}
