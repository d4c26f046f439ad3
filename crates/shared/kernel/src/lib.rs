//! Kernel utilities shared across slices.
//! Keep this crate lightweight; today it owns layered configuration loading.
//!
//! ## Config loading
//! ```rust,no_run
//! use moodflag_kernel::config::load_config;
//! use moodflag_kernel::domain::config::ClientConfig;
//!
//! let cfg: ClientConfig = load_config(None::<&str>).unwrap();
//! println!("{}", cfg.prediction.endpoint());
//! ```

pub mod config;

pub use moodflag_domain as domain;
