//! No-mock tests of archetype batch assembly and serialization.

use arrow::array::{Array, AsArray};
use arrow::datatypes::{DataType, UInt32Type};
use rr_common::ErrorCode;
use rr_types::archetypes::{Arrows3D, DepthImage, LineStrips3D, Points3D};
use rr_types::components::{
    Color, IndicatorComponent, LineStrip3D, OptionalAnnotationInfo, Position3D, Radius,
};
use rr_types::{
    datatypes, AnonymousComponentBatch, Archetype, Component, EncoderConfig, Loggable, MemoryPool,
    TrackingMemoryPool,
};

fn names(batches: &[AnonymousComponentBatch<'_>]) -> Vec<&'static str> {
    batches.iter().map(AnonymousComponentBatch::name).collect()
}

#[test]
fn line_strips_with_colors() {
    let strips = LineStrips3D::new([
        LineStrip3D::from(vec![[0.0, 0.0, 0.0], [1.0, 1.0, 1.0]]),
        LineStrip3D::from(vec![[2.0, 0.0, 0.0], [2.0, 1.0, 0.0], [2.0, 1.0, 1.0]]),
    ])
    .with_colors([0xFF0000FF_u32, 0x0000FFFF]);

    let batches = strips.as_component_batches();
    assert_eq!(
        names(&batches),
        [
            "rerun.linestrip3d",
            "rerun.colorrgba",
            "rerun.components.LineStrips3DIndicator",
        ]
    );
    assert!(batches.iter().all(|batch| batch.num_instances() == 2));

    let cells = strips.to_data_cells().unwrap();
    assert_eq!(cells.len(), 3);
    assert_eq!(cells[0].num_instances().unwrap(), 2);
    let colors = cells[1].to_arrow_array().unwrap();
    assert_eq!(
        colors.as_primitive::<UInt32Type>().values(),
        &[0xFF0000FF, 0x0000FFFF]
    );
}

#[test]
fn indicator_is_last_and_carries_no_data() {
    let points = Points3D::new([[0.0_f32, 0.0, 0.0]; 4])
        .with_radii([Radius(1.0); 4])
        .with_labels(["a", "b", "c", "d"]);

    let batches = points.as_component_batches();
    let indicator = batches.last().unwrap();
    assert_eq!(indicator.name(), Points3D::INDICATOR_COMPONENT_NAME);
    assert_eq!(indicator.num_instances(), points.num_instances());
    assert!(!indicator.has_data());
    assert!(batches[..batches.len() - 1].iter().all(|batch| batch.has_data()));

    let cell = indicator.to_data_cell().unwrap();
    let batch = cell.to_record_batch().unwrap();
    assert_eq!(batch.num_rows(), 0);
    assert_eq!(batch.schema().field(0).data_type(), &DataType::Null);
}

#[test]
fn indicator_name_follows_archetype() {
    assert_eq!(
        IndicatorComponent::<Arrows3D>::NAME,
        "rerun.components.Arrows3DIndicator"
    );
    assert_eq!(
        IndicatorComponent::<LineStrips3D>::NAME,
        LineStrips3D::INDICATOR_COMPONENT_NAME
    );
}

#[test]
fn absent_optionals_are_skipped() {
    let arrows = Arrows3D::new([[1.0_f32, 0.0, 0.0], [0.0, 1.0, 0.0]])
        .with_colors([Color::from_rgb(0, 0, 255); 2])
        .with_class_ids([5_u16, 6]);
    assert_eq!(
        names(&arrows.as_component_batches()),
        [
            "rerun.vector3d",
            "rerun.colorrgba",
            "rerun.class_id",
            "rerun.components.Arrows3DIndicator",
        ]
    );
}

#[test]
fn cells_match_batches_in_order() {
    let points = Points3D::new([[1.0_f32, 2.0, 3.0], [4.0, 5.0, 6.0]])
        .with_keypoint_ids([1_u16, 2])
        .with_instance_keys([10_u64, 11]);
    let pool = TrackingMemoryPool::new();

    let batch_names = names(&points.as_component_batches());
    let cells = points
        .to_data_cells_with(&pool, &EncoderConfig::default())
        .unwrap();
    let cell_names: Vec<_> = cells.iter().map(|cell| cell.component_name).collect();
    assert_eq!(cell_names, batch_names);
    assert_eq!(pool.bytes_allocated(), 0);
}

/// Archetype with a component that cannot be serialized yet.
#[derive(Default)]
struct AnnotatedPoints {
    positions: Vec<Position3D>,
    annotations: Option<Vec<OptionalAnnotationInfo>>,
}

impl Archetype for AnnotatedPoints {
    const NAME: &'static str = "rerun.testing.archetypes.AnnotatedPoints";
    const INDICATOR_COMPONENT_NAME: &'static str = "rerun.testing.components.AnnotatedPointsIndicator";

    fn num_instances(&self) -> usize {
        self.positions.len()
    }

    fn as_component_batches(&self) -> Vec<AnonymousComponentBatch<'_>> {
        let mut batches: Vec<AnonymousComponentBatch<'_>> = vec![(&self.positions).into()];
        if let Some(annotations) = &self.annotations {
            batches.push(annotations.into());
        }
        batches.push(self.indicator());
        batches
    }
}

#[test]
fn first_failing_batch_aborts_serialization() {
    let archetype = AnnotatedPoints {
        positions: vec![Position3D::from([0.0, 0.0, 0.0])],
        annotations: Some(vec![OptionalAnnotationInfo(Some(
            datatypes::AnnotationInfo::new(1),
        ))]),
    };
    let err = archetype.to_data_cells().unwrap_err();
    assert_eq!(err.code(), ErrorCode::NotImplemented);
}

#[test]
fn empty_unsupported_component_still_serializes() {
    let archetype = AnnotatedPoints {
        annotations: Some(Vec::new()),
        ..Default::default()
    };
    let cells = archetype.to_data_cells().unwrap();
    assert_eq!(cells.len(), 3);
    assert!(cells
        .iter()
        .all(|cell| cell.num_instances().unwrap() == 0));
    assert_eq!(
        cells[2].component_name,
        "rerun.testing.components.AnnotatedPointsIndicator"
    );
}

#[test]
fn positions_decode_as_fixed_size_lists() {
    let points = Points3D::new([[1.0_f32, 2.0, 3.0]]);
    let cells = points.to_data_cells().unwrap();
    let array = cells[0].to_arrow_array().unwrap();
    assert_eq!(array.data_type(), <Position3D as Loggable>::arrow_datatype());
    assert_eq!(array.as_fixed_size_list().value_length(), 3);
}

#[test]
fn depth_image_serializes_with_indicator() {
    let image = DepthImage::new(datatypes::TensorData::image(2, 3, vec![0.5_f32; 6]))
        .with_meter(1000.0_f32);
    assert_eq!(image.num_instances(), 1);

    let cells = image.to_data_cells().unwrap();
    let names: Vec<_> = cells.iter().map(|cell| cell.component_name).collect();
    assert_eq!(
        names,
        [
            "rerun.components.TensorData",
            "rerun.components.DepthMeter",
            "rerun.components.DepthImageIndicator",
        ]
    );
    assert_eq!(cells[0].num_instances().unwrap(), 1);
    assert_eq!(cells[1].num_instances().unwrap(), 1);
    assert_eq!(cells[2].num_instances().unwrap(), 0);
    assert_eq!(
        IndicatorComponent::<DepthImage>::NAME,
        DepthImage::INDICATOR_COMPONENT_NAME
    );
}
