use bytemuck::TransparentWrapper;

use crate::datatypes;

/// A text label.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, TransparentWrapper)]
#[repr(transparent)]
pub struct Text(pub datatypes::Utf8);

impl Text {
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl From<&str> for Text {
    fn from(text: &str) -> Self {
        Text(text.into())
    }
}

impl From<String> for Text {
    fn from(text: String) -> Self {
        Text(text.into())
    }
}

impl_transparent_component!(Text, datatypes::Utf8, "rerun.label");
