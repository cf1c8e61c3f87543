//! Background Tasks Module
//!
//! Contains background tasks that run periodically for cache maintenance.
//!
//! # Tasks
//! - Sweep: removes expired-but-unread entries at a fixed interval

mod sweep;

pub use sweep::spawn_sweep_task;
