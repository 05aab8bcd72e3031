//!
//! Flatten layered, prioritized intervals (captions, annotations, ...) into
//! one timeline without overlaps, where higher priorities are drawn on top.
//!
mod config;
mod error;
pub mod timeline;

pub use config::*;
pub use error::*;
pub use timeline::{
    Coordinate, DEFAULT_PRIORITY, Interval, flatten, flatten_with, weighted_interval_merge,
};
