use std::sync::OnceLock;

use arrow::datatypes::DataType;
use rr_common::{Error, Result};

use crate::datatypes;
use crate::loggable::{require_builder, require_elements, require_pool};
use crate::{Component, Loggable, MemoryPool};

/// An annotation info that may be missing per instance.
///
/// Shares the struct layout of [`datatypes::AnnotationInfo`] but has no
/// encoder for the outer nullability yet: any non-empty fill fails with
/// [`Error::NotImplemented`] instead of writing a column with wrong validity.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OptionalAnnotationInfo(pub Option<datatypes::AnnotationInfo>);

impl From<Option<datatypes::AnnotationInfo>> for OptionalAnnotationInfo {
    fn from(info: Option<datatypes::AnnotationInfo>) -> Self {
        OptionalAnnotationInfo(info)
    }
}

impl Loggable for OptionalAnnotationInfo {
    type Builder = <datatypes::AnnotationInfo as Loggable>::Builder;

    fn arrow_datatype() -> &'static DataType {
        static DATATYPE: OnceLock<DataType> = OnceLock::new();
        DATATYPE.get_or_init(|| datatypes::AnnotationInfo::arrow_datatype().clone())
    }

    fn new_arrow_array_builder(memory_pool: Option<&dyn MemoryPool>) -> Result<Self::Builder> {
        let memory_pool = require_pool(memory_pool)?;
        datatypes::AnnotationInfo::new_arrow_array_builder(Some(memory_pool))
    }

    fn fill_arrow_array_builder(
        builder: Option<&mut Self::Builder>,
        elements: Option<&[Self]>,
    ) -> Result<()> {
        require_builder(builder)?;
        require_elements(elements)?;
        // TODO: append a struct-level validity bitmap, then delegate to the datatype fill.
        Err(Error::not_implemented(
            "nullable extensions of struct datatypes are not serializable yet",
        ))
    }
}

impl Component for OptionalAnnotationInfo {
    const NAME: &'static str = "rerun.testing.optional_annotation_info";
}
