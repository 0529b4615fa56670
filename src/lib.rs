// src/lib.rs
//! Job listing browser: a fixed catalog, a case-insensitive search, and
//! persisted "saved jobs" / "recently viewed" lists.

pub mod board;
pub mod catalog;
pub mod cli;
pub mod core;
pub mod filter;
pub mod id_set;
pub mod notify;
pub mod render;
pub mod types;
pub mod views;

pub use board::JobBoard;
pub use catalog::Catalog;
pub use filter::filter_jobs;
pub use id_set::{IdSetStore, RECENTLY_VIEWED, SAVED_JOBS};

/// Log through `tracing` at the given level: `app_log!(info, "...", args)`
#[macro_export]
macro_rules! app_log {
    ($level:ident, $($arg:tt)+) => {
        ::tracing::$level!($($arg)+)
    };
}
