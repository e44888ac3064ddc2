//! Property-based tests for component encoding.
//!
//! Uses proptest to check that decoded columns match the encoded instances.

use arrow::array::{Array, AsArray};
use arrow::datatypes::{Float32Type, UInt32Type};
use proptest::prelude::*;
use rr_types::archetypes::Points3D;
use rr_types::components::{Color, LineStrip3D, Position3D, Text};
use rr_types::{Archetype, Component};

fn finite() -> impl Strategy<Value = f32> {
    -1.0e6f32..1.0e6f32
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Color values survive encoding bit for bit, in order.
    #[test]
    fn colors_roundtrip(values in prop::collection::vec(any::<u32>(), 0..64)) {
        let colors: Vec<Color> = values.iter().copied().map(Color::from).collect();
        let array = Color::to_data_cell(Some(&colors)).unwrap().to_arrow_array().unwrap();
        prop_assert_eq!(array.len(), values.len());
        prop_assert_eq!(array.as_primitive::<UInt32Type>().values().to_vec(), values);
    }

    /// Positions flatten to x, y, z triples.
    #[test]
    fn positions_roundtrip(points in prop::collection::vec([finite(), finite(), finite()], 0..64)) {
        let positions: Vec<Position3D> = points.iter().copied().map(Position3D::from).collect();
        let array = Position3D::to_data_cell(Some(&positions)).unwrap().to_arrow_array().unwrap();
        let list = array.as_fixed_size_list();
        prop_assert_eq!(list.len(), points.len());

        let flat: Vec<f32> = points.iter().flatten().copied().collect();
        prop_assert_eq!(list.values().as_primitive::<Float32Type>().values().to_vec(), flat);
    }

    /// Strip offsets are the running sum of strip lengths.
    #[test]
    fn line_strip_offsets(lengths in prop::collection::vec(0usize..8, 0..16)) {
        let strips: Vec<LineStrip3D> = lengths
            .iter()
            .map(|&n| LineStrip3D::from(vec![[1.0_f32, 2.0, 3.0]; n]))
            .collect();
        let array = LineStrip3D::to_data_cell(Some(&strips)).unwrap().to_arrow_array().unwrap();
        let list = array.as_list::<i32>();

        let mut expected = vec![0_i32];
        for &n in &lengths {
            expected.push(expected.last().copied().unwrap_or(0) + n as i32);
        }
        prop_assert_eq!(list.value_offsets().to_vec(), expected);
    }

    /// Labels decode to the same strings.
    #[test]
    fn labels_roundtrip(values in prop::collection::vec(".{0,12}", 0..32)) {
        let labels: Vec<Text> = values.iter().cloned().map(Text::from).collect();
        let array = Text::to_data_cell(Some(&labels)).unwrap().to_arrow_array().unwrap();
        let decoded: Vec<String> = array
            .as_string::<i32>()
            .iter()
            .map(|s| s.unwrap_or_default().to_string())
            .collect();
        prop_assert_eq!(decoded, values);
    }

    /// The indicator always trails and mirrors the required component's length.
    #[test]
    fn indicator_tracks_instance_count(n in 0usize..32) {
        let points = Points3D::new(vec![[0.0_f32, 0.0, 0.0]; n]);
        let batches = points.as_component_batches();
        prop_assert_eq!(batches.len(), 2);
        prop_assert_eq!(batches[1].name(), Points3D::INDICATOR_COMPONENT_NAME);
        prop_assert_eq!(batches[1].num_instances(), n);
        prop_assert!(!batches[1].has_data());
    }
}
