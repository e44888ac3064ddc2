use crate::component_batch::AnonymousComponentBatch;
use crate::components::{ClassId, Color, InstanceKey, Origin3D, Radius, Text, Vector3D};

use super::Archetype;

/// 3D arrows, each a vector anchored at an optional origin.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Arrows3D {
    pub vectors: Vec<Vector3D>,
    pub origins: Option<Vec<Origin3D>>,
    pub radii: Option<Vec<Radius>>,
    pub colors: Option<Vec<Color>>,
    pub labels: Option<Vec<Text>>,
    pub class_ids: Option<Vec<ClassId>>,
    pub instance_keys: Option<Vec<InstanceKey>>,
}

impl Arrows3D {
    pub fn new(vectors: impl IntoIterator<Item = impl Into<Vector3D>>) -> Self {
        Arrows3D {
            vectors: vectors.into_iter().map(Into::into).collect(),
            ..Default::default()
        }
    }

    pub fn with_origins(mut self, origins: impl IntoIterator<Item = impl Into<Origin3D>>) -> Self {
        self.origins = Some(origins.into_iter().map(Into::into).collect());
        self
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

    pub fn with_instance_keys(
        mut self,
        instance_keys: impl IntoIterator<Item = impl Into<InstanceKey>>,
    ) -> Self {
        self.instance_keys = Some(instance_keys.into_iter().map(Into::into).collect());
        self
    }
}

impl Archetype for Arrows3D {
    const NAME: &'static str = "rerun.archetypes.Arrows3D";
    const INDICATOR_COMPONENT_NAME: &'static str = "rerun.components.Arrows3DIndicator";

    fn num_instances(&self) -> usize {
        self.vectors.len()
    }

    fn as_component_batches(&self) -> Vec<AnonymousComponentBatch<'_>> {
        let mut batches: Vec<AnonymousComponentBatch<'_>> = Vec::with_capacity(8);
        batches.push((&self.vectors).into());
        if let Some(origins) = &self.origins {
            batches.push(origins.into());
        }
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
    fn test_origins_follow_vectors() {
        let arrows = Arrows3D::new([[1.0_f32, 0.0, 0.0]]).with_origins([[0.0_f32, 0.0, 0.0]]);
        let names: Vec<_> = arrows
            .as_component_batches()
            .iter()
            .map(|batch| batch.name())
            .collect();
        assert_eq!(
            names,
            [
                "rerun.vector3d",
                "rerun.origin3d",
                "rerun.components.Arrows3DIndicator",
            ]
        );
    }
}
