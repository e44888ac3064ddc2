use crate::component_batch::AnonymousComponentBatch;
use crate::components::{ClassId, Color, InstanceKey, LineStrip3D, Radius, Text};

use super::Archetype;

/// A batch of 3D line strips with optional per-strip attributes.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LineStrips3D {
    pub strips: Vec<LineStrip3D>,
    pub radii: Option<Vec<Radius>>,
    pub colors: Option<Vec<Color>>,
    pub labels: Option<Vec<Text>>,
    pub class_ids: Option<Vec<ClassId>>,
    pub instance_keys: Option<Vec<InstanceKey>>,
}

impl LineStrips3D {
    pub fn new(strips: impl IntoIterator<Item = impl Into<LineStrip3D>>) -> Self {
        LineStrips3D {
            strips: strips.into_iter().map(Into::into).collect(),
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

    pub fn with_instance_keys(
        mut self,
        instance_keys: impl IntoIterator<Item = impl Into<InstanceKey>>,
    ) -> Self {
        self.instance_keys = Some(instance_keys.into_iter().map(Into::into).collect());
        self
    }
}

impl Archetype for LineStrips3D {
    const NAME: &'static str = "rerun.archetypes.LineStrips3D";
    const INDICATOR_COMPONENT_NAME: &'static str = "rerun.components.LineStrips3DIndicator";

    fn num_instances(&self) -> usize {
        self.strips.len()
    }

    fn as_component_batches(&self) -> Vec<AnonymousComponentBatch<'_>> {
        let mut batches: Vec<AnonymousComponentBatch<'_>> = Vec::with_capacity(7);
        batches.push((&self.strips).into());
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
