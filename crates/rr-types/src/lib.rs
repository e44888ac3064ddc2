//! Component serialization to Arrow IPC.
//!
//! This crate provides:
//! - Datatypes and the components that wrap them, each with a stable Arrow schema
//! - [`DataCell`]: one component column framed as an Arrow IPC stream
//! - Component batches, typed and type-erased
//! - Archetypes that bundle batches and mark themselves with an indicator
//!
//! ```ignore
//! use rr_types::archetypes::LineStrips3D;
//! use rr_types::Archetype;
//!
//! let strips = LineStrips3D::new([vec![[0.0, 0.0, 0.0], [1.0, 1.0, 1.0]]])
//!     .with_colors([0xFF0000FF_u32]);
//! let cells = strips.to_data_cells()?;
//! ```

#[macro_use]
mod macros;

pub mod archetypes;
pub mod component_batch;
pub mod components;
pub mod config;
pub mod data_cell;
pub mod datatypes;
pub mod ipc;
pub mod loggable;
pub mod memory_pool;

pub use archetypes::Archetype;
pub use component_batch::{AnonymousComponentBatch, ComponentBatch};
pub use config::EncoderConfig;
pub use data_cell::DataCell;
pub use loggable::{Component, Loggable};
pub use memory_pool::{default_memory_pool, MemoryPool, PoolReservation, TrackingMemoryPool};
