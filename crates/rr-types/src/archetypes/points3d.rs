use crate::component_batch::AnonymousComponentBatch;
use crate::components::{ClassId, Color, InstanceKey, KeypointId, Position3D, Radius, Text};

use super::Archetype;

/// A point cloud in 3D space.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Points3D {
    pub positions: Vec<Position3D>,
    pub radii: Option<Vec<Radius>>,
    pub colors: Option<Vec<Color>>,
    pub labels: Option<Vec<Text>>,
    pub class_ids: Option<Vec<ClassId>>,
    pub keypoint_ids: Option<Vec<KeypointId>>,
    pub instance_keys: Option<Vec<InstanceKey>>,
}

impl Points3D {
    pub fn new(positions: impl IntoIterator<Item = impl Into<Position3D>>) -> Self {
        Points3D {
            positions: positions.into_iter().map(Into::into).collect(),
            ..Default::default()
        }
    }

    pub fn with_radii(mut self, radii: impl IntoIterator<Item = impl Into<Radius>>) -> Self {
        self.radii = Some(radii.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_colors(mut self, colors: impl IntoIterator<Item = impl Into<Color>>) -> Self {
        self.colors = Some(colors.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_labels(mut self, labels: impl IntoIterator<Item = impl Into<Text>>) -> Self {
        self.labels = Some(labels.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_class_ids(mut self, class_ids: impl IntoIterator<Item = impl Into<ClassId>>) -> Self {
        self.class_ids = Some(class_ids.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_keypoint_ids(
        mut self,
        keypoint_ids: impl IntoIterator<Item = impl Into<KeypointId>>,
    ) -> Self {
        self.keypoint_ids = Some(keypoint_ids.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_instance_keys(
        mut self,
        instance_keys: impl IntoIterator<Item = impl Into<InstanceKey>>,
    ) -> Self {
        self.instance_keys = Some(instance_keys.into_iter().map(Into::into).collect());
        self
    }
}

impl Archetype for Points3D {
    const NAME: &'static str = "rerun.archetypes.Points3D";
    const INDICATOR_COMPONENT_NAME: &'static str = "rerun.components.Points3DIndicator";

    fn num_instances(&self) -> usize {
        self.positions.len()
    }

    fn as_component_batches(&self) -> Vec<AnonymousComponentBatch<'_>> {
        let mut batches: Vec<AnonymousComponentBatch<'_>> = Vec::with_capacity(8);
        batches.push((&self.positions).into());
        if let Some(radii) = &self.radii {
            batches.push(radii.into());
        }
        if let Some(colors) = &self.colors {
            batches.push(colors.into());
        }
        if let Some(labels) = &self.labels {
            batches.push(labels.into());
        }
        if let Some(class_ids) = &self.class_ids {
            batches.push(class_ids.into());
        }
        if let Some(keypoint_ids) = &self.keypoint_ids {
            batches.push(keypoint_ids.into());
        }
        if let Some(instance_keys) = &self.instance_keys {
            batches.push(instance_keys.into());
        }
        batches.push(self.indicator());
        batches
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_components_present() {
        let points = Points3D::new([[0.0_f32, 0.0, 0.0], [1.0, 1.0, 1.0]])
            .with_radii([0.1_f32, 0.2])
            .with_colors([0xFF0000FF_u32, 0x00FF00FF])
            .with_labels(["a", "b"])
            .with_class_ids([1_u16, 2])
            .with_keypoint_ids([7_u16, 8])
            .with_instance_keys([0_u64, 1]);

        let batches = points.as_component_batches();
        assert_eq!(batches.len(), 8);
        assert_eq!(batches[0].name(), "rerun.point3d");
        assert_eq!(batches[5].name(), "rerun.keypoint_id");
        assert_eq!(batches[7].name(), "rerun.components.Points3DIndicator");
        assert!(batches.iter().all(|batch| batch.num_instances() == 2));
    }
}
