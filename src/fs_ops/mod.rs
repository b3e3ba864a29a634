//! Filesystem operations: the Mover.

mod atomic;
mod duplicate;
mod file_move;
mod helpers;
mod util;

pub use duplicate::{resolve_destination, timestamped_destination};
pub use file_move::move_file;
pub use helpers::{describe_io_error, io_hint};
pub use util::is_cross_device;
