//! Archetypes: named bundles of component batches.
//!
//! An archetype hands out its batches as a list of
//! [`AnonymousComponentBatch`]es: the required component first, then the
//! optional ones that are present in declaration order, and finally a
//! data-less indicator batch naming the archetype.

mod arrows3d;
mod depth_image;
mod line_strips3d;
mod points3d;

pub use arrows3d::Arrows3D;
pub use depth_image::DepthImage;
pub use line_strips3d::LineStrips3D;
pub use points3d::Points3D;

use rr_common::Result;

use crate::component_batch::{AnonymousComponentBatch, ComponentBatch};
use crate::components::IndicatorComponent;
use crate::config::EncoderConfig;
use crate::data_cell::DataCell;
use crate::memory_pool::{default_memory_pool, MemoryPool};

pub trait Archetype: Sized + 'static {
    /// Fully qualified archetype name.
    const NAME: &'static str;

    /// Wire name of the indicator component.
    const INDICATOR_COMPONENT_NAME: &'static str;

    /// Length of the required component.
    fn num_instances(&self) -> usize;

    /// All present batches, indicator last.
    fn as_component_batches(&self) -> Vec<AnonymousComponentBatch<'_>>;

    /// Count-only batch marking that this archetype was logged.
    fn indicator(&self) -> AnonymousComponentBatch<'static> {
        ComponentBatch::<IndicatorComponent<Self>>::without_data(self.num_instances()).into()
    }

    /// Serialize every batch; the first failure aborts.
    fn to_data_cells(&self) -> Result<Vec<DataCell>> {
        self.to_data_cells_with(default_memory_pool(), EncoderConfig::global())
    }

    fn to_data_cells_with(
        &self,
        memory_pool: &dyn MemoryPool,
        config: &EncoderConfig,
    ) -> Result<Vec<DataCell>> {
        let cells = self
            .as_component_batches()
            .iter()
            .map(|batch| batch.to_data_cell_with(memory_pool, config))
            .collect::<Result<Vec<_>>>()?;
        tracing::debug!(
            archetype = Self::NAME,
            num_instances = self.num_instances(),
            num_cells = cells.len(),
            "serialized archetype"
        );
        Ok(cells)
    }
}
