use arrow::array::UInt32Builder;
use arrow::datatypes::DataType;
use bytemuck::TransparentWrapper;

/// An RGBA color packed as `0xRRGGBBAA`, alpha not premultiplied.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, TransparentWrapper)]
#[repr(transparent)]
pub struct Color(pub u32);

impl Color {
    /// Opaque color from its red, green and blue channels.
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self::from_unmultiplied_rgba(r, g, b, 255)
    }

    pub const fn from_unmultiplied_rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Color(((r as u32) << 24) | ((g as u32) << 16) | ((b as u32) << 8) | (a as u32))
    }

    pub const fn r(&self) -> u8 {
        (self.0 >> 24) as u8
    }

    pub const fn g(&self) -> u8 {
        (self.0 >> 16) as u8
    }

    pub const fn b(&self) -> u8 {
        (self.0 >> 8) as u8
    }

    pub const fn a(&self) -> u8 {
        self.0 as u8
    }

    pub const fn to_array(&self) -> [u8; 4] {
        [self.r(), self.g(), self.b(), self.a()]
    }
}

impl From<u32> for Color {
    fn from(rgba: u32) -> Self {
        Color(rgba)
    }
}

impl From<[u8; 4]> for Color {
    fn from([r, g, b, a]: [u8; 4]) -> Self {
        Color::from_unmultiplied_rgba(r, g, b, a)
    }
}

impl From<[u8; 3]> for Color {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Color::from_rgb(r, g, b)
    }
}

impl_primitive_loggable!(Color, u32, UInt32Builder, DataType::UInt32);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Loggable, TrackingMemoryPool};
    use arrow::array::{Array, AsArray};
    use arrow::datatypes::UInt32Type;

    #[test]
    fn test_channel_packing() {
        let color = Color::from_unmultiplied_rgba(0x12, 0x34, 0x56, 0x78);
        assert_eq!(color.0, 0x1234_5678);
        assert_eq!(color.to_array(), [0x12, 0x34, 0x56, 0x78]);
        assert_eq!(Color::from([255, 0, 0]).0, 0xFF00_00FF);
    }

    #[test]
    fn test_fill_appends_in_order() {
        let pool = TrackingMemoryPool::new();
        let mut builder = Color::new_arrow_array_builder(Some(&pool)).unwrap();
        let colors = [Color(1), Color(2), Color(3)];
        Color::fill_arrow_array_builder(Some(&mut builder), Some(&colors)).unwrap();
        Color::fill_arrow_array_builder(Some(&mut builder), Some(&[Color(4)])).unwrap();

        let array = arrow::array::ArrayBuilder::finish(&mut builder);
        let values = array.as_primitive::<UInt32Type>();
        assert_eq!(values.values().as_ref(), &[1, 2, 3, 4]);
        assert_eq!(array.null_count(), 0);
    }
}
