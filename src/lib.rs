//! urlcheck checks reachability and status of URLs.
//!
//! Each URL gets a single HTTP GET with a bounded timeout, and the outcome
//! is classified into a [`CheckStatus`]: success or failure code, timeout,
//! connection error, or generic request error. The checker is total; every
//! failure mode becomes a status, never an error.

pub mod checker;
pub mod cli;
pub mod color;
pub mod config;
pub mod error;
pub mod logging;
pub mod output;

pub use checker::{CheckStatus, CheckUrls, Checker};
pub use config::Config;
