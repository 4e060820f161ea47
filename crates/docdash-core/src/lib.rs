//! # docdash-core
//!
//! Core crate for DocDash. Contains configuration schemas, the clock
//! abstraction used by presence and dashboard formatting, and the unified
//! error system.
//!
//! This crate has **no** internal dependencies on other DocDash crates.

pub mod clock;
pub mod config;
pub mod error;
pub mod result;

pub use clock::{Clock, FixedClock, SystemClock};
pub use error::AppError;
pub use result::AppResult;
