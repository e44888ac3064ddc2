//! Typed and type-erased views over a run of component instances.

use std::borrow::Cow;
use std::fmt;

use rr_common::Result;

use crate::config::EncoderConfig;
use crate::data_cell::DataCell;
use crate::memory_pool::{default_memory_pool, MemoryPool};
use crate::Component;

/// Instances of one component, borrowed or owned.
///
/// A batch may also carry only a count and no data; indicators are built
/// that way.
#[derive(Clone)]
pub struct ComponentBatch<'a, C: Component> {
    data: Option<Cow<'a, [C]>>,
    num_instances: usize,
}

impl<'a, C: Component> ComponentBatch<'a, C> {
    pub fn borrowed(data: &'a [C]) -> Self {
        ComponentBatch {
            num_instances: data.len(),
            data: Some(Cow::Borrowed(data)),
        }
    }

    pub fn owned(data: Vec<C>) -> Self {
        ComponentBatch {
            num_instances: data.len(),
            data: Some(Cow::Owned(data)),
        }
    }

    /// A batch that reports `num_instances` but holds no values.
    pub fn without_data(num_instances: usize) -> Self {
        ComponentBatch {
            data: None,
            num_instances,
        }
    }

    pub fn name(&self) -> &'static str {
        C::NAME
    }

    pub fn num_instances(&self) -> usize {
        self.num_instances
    }

    pub fn data(&self) -> Option<&[C]> {
        self.data.as_deref()
    }

    pub fn to_data_cell(&self) -> Result<DataCell> {
        C::to_data_cell(self.data())
    }

    pub fn to_data_cell_with(
        &self,
        memory_pool: &dyn MemoryPool,
        config: &EncoderConfig,
    ) -> Result<DataCell> {
        C::to_data_cell_with(self.data(), memory_pool, config)
    }
}

impl<C: Component> fmt::Debug for ComponentBatch<'_, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ComponentBatch")
            .field("name", &C::NAME)
            .field("num_instances", &self.num_instances)
            .field("has_data", &self.data.is_some())
            .finish()
    }
}

impl<'a, C: Component> From<&'a [C]> for ComponentBatch<'a, C> {
    fn from(data: &'a [C]) -> Self {
        Self::borrowed(data)
    }
}

impl<'a, C: Component> From<&'a Vec<C>> for ComponentBatch<'a, C> {
    fn from(data: &'a Vec<C>) -> Self {
        Self::borrowed(data)
    }
}

impl<C: Component> From<Vec<C>> for ComponentBatch<'_, C> {
    fn from(data: Vec<C>) -> Self {
        Self::owned(data)
    }
}

trait ErasedComponentBatch: Send + Sync {
    fn name(&self) -> &'static str;
    fn num_instances(&self) -> usize;
    fn has_data(&self) -> bool;
    fn to_data_cell_with(
        &self,
        memory_pool: &dyn MemoryPool,
        config: &EncoderConfig,
    ) -> Result<DataCell>;
}

impl<C: Component> ErasedComponentBatch for ComponentBatch<'_, C> {
    fn name(&self) -> &'static str {
        C::NAME
    }

    fn num_instances(&self) -> usize {
        self.num_instances
    }

    fn has_data(&self) -> bool {
        self.data.is_some()
    }

    fn to_data_cell_with(
        &self,
        memory_pool: &dyn MemoryPool,
        config: &EncoderConfig,
    ) -> Result<DataCell> {
        ComponentBatch::to_data_cell_with(self, memory_pool, config)
    }
}

/// A [`ComponentBatch`] with its component type erased.
///
/// Archetypes hand these out so batches of different components can share
/// one list.
pub struct AnonymousComponentBatch<'a> {
    inner: Box<dyn ErasedComponentBatch + 'a>,
}

impl<'a> AnonymousComponentBatch<'a> {
    pub fn name(&self) -> &'static str {
        self.inner.name()
    }

    pub fn num_instances(&self) -> usize {
        self.inner.num_instances()
    }

    /// `false` for count-only batches such as indicators.
    pub fn has_data(&self) -> bool {
        self.inner.has_data()
    }

    pub fn to_data_cell(&self) -> Result<DataCell> {
        self.inner
            .to_data_cell_with(default_memory_pool(), EncoderConfig::global())
    }

    pub fn to_data_cell_with(
        &self,
        memory_pool: &dyn MemoryPool,
        config: &EncoderConfig,
    ) -> Result<DataCell> {
        self.inner.to_data_cell_with(memory_pool, config)
    }
}

impl fmt::Debug for AnonymousComponentBatch<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnonymousComponentBatch")
            .field("name", &self.name())
            .field("num_instances", &self.num_instances())
            .field("has_data", &self.has_data())
            .finish()
    }
}

impl<'a, C: Component> From<ComponentBatch<'a, C>> for AnonymousComponentBatch<'a> {
    fn from(batch: ComponentBatch<'a, C>) -> Self {
        AnonymousComponentBatch {
            inner: Box::new(batch),
        }
    }
}

impl<'a, C: Component> From<&'a [C]> for AnonymousComponentBatch<'a> {
    fn from(data: &'a [C]) -> Self {
        ComponentBatch::borrowed(data).into()
    }
}

impl<'a, C: Component> From<&'a Vec<C>> for AnonymousComponentBatch<'a> {
    fn from(data: &'a Vec<C>) -> Self {
        ComponentBatch::borrowed(data).into()
    }
}

impl<C: Component> From<Vec<C>> for AnonymousComponentBatch<'_> {
    fn from(data: Vec<C>) -> Self {
        ComponentBatch::owned(data).into()
    }
}
