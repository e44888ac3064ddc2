//! Boilerplate shared by the primitive and wrapper loggables.

/// `Loggable` for a `#[repr(transparent)]` newtype over an Arrow native type.
///
/// The fill path appends the peeled slice in one call.
macro_rules! impl_primitive_loggable {
    ($ty:ty, $native:ty, $builder:ty, $datatype:expr) => {
        impl $crate::Loggable for $ty {
            type Builder = $builder;

            fn arrow_datatype() -> &'static ::arrow::datatypes::DataType {
                static DATATYPE: ::std::sync::OnceLock<::arrow::datatypes::DataType> =
                    ::std::sync::OnceLock::new();
                DATATYPE.get_or_init(|| $datatype)
            }

            fn new_arrow_array_builder(
                memory_pool: Option<&dyn $crate::MemoryPool>,
            ) -> ::rr_common::Result<Self::Builder> {
                $crate::loggable::require_pool(memory_pool)?;
                Ok(<$builder>::new())
            }

            fn fill_arrow_array_builder(
                builder: Option<&mut Self::Builder>,
                elements: Option<&[Self]>,
            ) -> ::rr_common::Result<()> {
                let builder = $crate::loggable::require_builder(builder)?;
                let elements = $crate::loggable::require_elements(elements)?;

                const _: () = assert!(::std::mem::size_of::<$ty>() == ::std::mem::size_of::<$native>());
                builder.append_slice(
                    <$ty as ::bytemuck::TransparentWrapper<$native>>::peel_slice(elements),
                );
                Ok(())
            }
        }
    };
}

/// `Loggable` + `Component` for a `#[repr(transparent)]` component wrapping a
/// datatype.
///
/// Schema and builder come from the datatype; the elements are reinterpreted
/// as datatype values without copying.
macro_rules! impl_transparent_component {
    ($component:ty, $datatype:ty, $name:literal) => {
        impl $crate::Loggable for $component {
            type Builder = <$datatype as $crate::Loggable>::Builder;

            fn arrow_datatype() -> &'static ::arrow::datatypes::DataType {
                static DATATYPE: ::std::sync::OnceLock<::arrow::datatypes::DataType> =
                    ::std::sync::OnceLock::new();
                DATATYPE.get_or_init(|| <$datatype as $crate::Loggable>::arrow_datatype().clone())
            }

            fn new_arrow_array_builder(
                memory_pool: Option<&dyn $crate::MemoryPool>,
            ) -> ::rr_common::Result<Self::Builder> {
                let memory_pool = $crate::loggable::require_pool(memory_pool)?;
                <$datatype as $crate::Loggable>::new_arrow_array_builder(Some(memory_pool))
            }

            fn fill_arrow_array_builder(
                builder: Option<&mut Self::Builder>,
                elements: Option<&[Self]>,
            ) -> ::rr_common::Result<()> {
                let builder = $crate::loggable::require_builder(builder)?;
                let elements = $crate::loggable::require_elements(elements)?;

                const _: () =
                    assert!(::std::mem::size_of::<$component>() == ::std::mem::size_of::<$datatype>());
                <$datatype as $crate::Loggable>::fill_arrow_array_builder(
                    Some(builder),
                    Some(<$component as ::bytemuck::TransparentWrapper<$datatype>>::peel_slice(
                        elements,
                    )),
                )
            }
        }

        impl $crate::Component for $component {
            const NAME: &'static str = $name;
        }
    };
}
