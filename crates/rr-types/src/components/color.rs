use bytemuck::TransparentWrapper;

use crate::datatypes;

/// An RGBA color with unmultiplied alpha.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, TransparentWrapper)]
#[repr(transparent)]
pub struct Color(pub datatypes::Color);

impl Color {
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Color(datatypes::Color::from_rgb(r, g, b))
    }

    pub const fn from_unmultiplied_rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Color(datatypes::Color::from_unmultiplied_rgba(r, g, b, a))
    }
}

impl From<datatypes::Color> for Color {
    fn from(color: datatypes::Color) -> Self {
        Color(color)
    }
}

impl From<u32> for Color {
    fn from(rgba: u32) -> Self {
        Color(datatypes::Color(rgba))
    }
}

impl From<[u8; 4]> for Color {
    fn from(rgba: [u8; 4]) -> Self {
        Color(rgba.into())
    }
}

impl From<[u8; 3]> for Color {
    fn from(rgb: [u8; 3]) -> Self {
        Color(rgb.into())
    }
}

impl_transparent_component!(Color, datatypes::Color, "rerun.colorrgba");
