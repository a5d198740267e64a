#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/edgarq/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod config;
pub mod edgar;
pub mod error;
pub mod fixtures;
pub mod sec;

pub use config::EdgarConfig;
pub use error::{DataError, Result};
pub use sec::SecClient;

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
