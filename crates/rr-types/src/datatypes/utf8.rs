use arrow::array::StringBuilder;
use arrow::datatypes::DataType;
use bytemuck::TransparentWrapper;

use crate::loggable::{require_builder, require_elements, require_pool};
use crate::{Loggable, MemoryPool};

/// A UTF-8 string.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, TransparentWrapper)]
#[repr(transparent)]
pub struct Utf8(pub String);

impl Utf8 {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for Utf8 {
    fn from(value: String) -> Self {
        Utf8(value)
    }
}

impl From<&str> for Utf8 {
    fn from(value: &str) -> Self {
        Utf8(value.to_owned())
    }
}

impl std::fmt::Display for Utf8 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl Loggable for Utf8 {
    type Builder = StringBuilder;

    fn arrow_datatype() -> &'static DataType {
        static DATATYPE: DataType = DataType::Utf8;
        &DATATYPE
    }

    fn new_arrow_array_builder(
        memory_pool: Option<&dyn MemoryPool>,
    ) -> rr_common::Result<Self::Builder> {
        require_pool(memory_pool)?;
        Ok(StringBuilder::new())
    }

    fn fill_arrow_array_builder(
        builder: Option<&mut Self::Builder>,
        elements: Option<&[Self]>,
    ) -> rr_common::Result<()> {
        let builder = require_builder(builder)?;
        let elements = require_elements(elements)?;
        for element in elements {
            builder.append_value(&element.0);
        }
        Ok(())
    }
}
