use std::fmt;
use std::marker::PhantomData;

use arrow::array::NullBuilder;
use arrow::datatypes::DataType;
use rr_common::Result;

use crate::loggable::{require_builder, require_elements, require_pool};
use crate::{Archetype, Component, Loggable, MemoryPool};

/// Zero-width marker naming the archetype that produced a set of batches.
///
/// Its wire name is [`Archetype::INDICATOR_COMPONENT_NAME`]; the column is
/// of type `Null` and is normally sent without rows.
pub struct IndicatorComponent<A> {
    _archetype: PhantomData<fn() -> A>,
}

impl<A> IndicatorComponent<A> {
    pub fn new() -> Self {
        IndicatorComponent {
            _archetype: PhantomData,
        }
    }
}

impl<A> Default for IndicatorComponent<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A> Clone for IndicatorComponent<A> {
    fn clone(&self) -> Self {
        Self::new()
    }
}

impl<A: Archetype> fmt::Debug for IndicatorComponent<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(A::INDICATOR_COMPONENT_NAME)
    }
}

impl<A: Archetype> Loggable for IndicatorComponent<A> {
    type Builder = NullBuilder;

    fn arrow_datatype() -> &'static DataType {
        static DATATYPE: DataType = DataType::Null;
        &DATATYPE
    }

    fn new_arrow_array_builder(memory_pool: Option<&dyn MemoryPool>) -> Result<Self::Builder> {
        require_pool(memory_pool)?;
        Ok(NullBuilder::new())
    }

    fn fill_arrow_array_builder(
        builder: Option<&mut Self::Builder>,
        elements: Option<&[Self]>,
    ) -> Result<()> {
        let builder = require_builder(builder)?;
        let elements = require_elements(elements)?;
        builder.append_nulls(elements.len());
        Ok(())
    }
}

impl<A: Archetype> Component for IndicatorComponent<A> {
    const NAME: &'static str = A::INDICATOR_COMPONENT_NAME;
}
