//! Background Tasks Module
//!
//! Contains background tasks that run periodically during server operation.
//!
//! # Tasks
//! - Sweeper: Releases expired and purged entries at configured intervals

mod sweeper;

pub use sweeper::spawn_sweeper;
