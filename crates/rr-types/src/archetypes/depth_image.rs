use crate::component_batch::AnonymousComponentBatch;
use crate::components::{DepthMeter, DrawOrder, TensorData};

use super::Archetype;

/// A depth image: a 2D tensor of distances from the camera.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DepthImage {
    pub data: Vec<TensorData>,
    pub meter: Option<Vec<DepthMeter>>,
    pub draw_order: Option<Vec<DrawOrder>>,
}

impl DepthImage {
    pub fn new(data: impl Into<TensorData>) -> Self {
        DepthImage {
            data: vec![data.into()],
            ..Default::default()
        }
    }

    pub fn with_meter(mut self, meter: impl Into<DepthMeter>) -> Self {
        self.meter = Some(vec![meter.into()]);
        self
    }

    pub fn with_draw_order(mut self, draw_order: impl Into<DrawOrder>) -> Self {
        self.draw_order = Some(vec![draw_order.into()]);
        self
    }
}

impl Archetype for DepthImage {
    const NAME: &'static str = "rerun.archetypes.DepthImage";
    const INDICATOR_COMPONENT_NAME: &'static str = "rerun.components.DepthImageIndicator";

    fn num_instances(&self) -> usize {
        self.data.len()
    }

    fn as_component_batches(&self) -> Vec<AnonymousComponentBatch<'_>> {
        let mut batches: Vec<AnonymousComponentBatch<'_>> = Vec::with_capacity(4);
        batches.push((&self.data).into());
        if let Some(meter) = &self.meter {
            batches.push(meter.into());
        }
        if let Some(draw_order) = &self.draw_order {
            batches.push(draw_order.into());
        }
        batches.push(self.indicator());
        batches
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::datatypes;

    #[test]
    fn test_meter_then_draw_order_then_indicator() {
        let image = DepthImage::new(datatypes::TensorData::image(2, 2, vec![1_u16, 2, 3, 4]))
            .with_draw_order(-1.0_f32)
            .with_meter(1000.0_f32);
        let names: Vec<_> = image
            .as_component_batches()
            .iter()
            .map(|batch| batch.name())
            .collect();
        assert_eq!(
            names,
            [
                "rerun.components.TensorData",
                "rerun.components.DepthMeter",
                "rerun.draw_order",
                "rerun.components.DepthImageIndicator",
            ]
        );
    }
}
