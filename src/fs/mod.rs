//! Filesystem utilities for inimap.
//!
//! The output document is written atomically so a failed run never leaves a
//! half-written JSON file behind.

mod atomic;

pub use atomic::atomic_write_file;
