// SPDX-License-Identifier: MPL-2.0
//! Image decoding and the square-thumbnail transform used by notification
//! previews.

use crate::error::Result;
use image_rs::{imageops::FilterType, DynamicImage, GenericImageView};

/// Decoded image ready for display in an Iced `Image` widget.
#[derive(Debug, Clone)]
pub struct ImageData {
    pub handle: iced::widget::image::Handle,
    pub width: u32,
    pub height: u32,
}

/// Convert a `DynamicImage` into `ImageData` for display.
pub fn dynamic_to_image_data(dynamic: &DynamicImage) -> Result<ImageData> {
    let (width, height) = dynamic.dimensions();
    let rgba_img = dynamic.to_rgba8();
    let pixels = rgba_img.into_vec();

    let handle = iced::widget::image::Handle::from_rgba(width, height, pixels);

    Ok(ImageData {
        handle,
        width,
        height,
    })
}

/// Produce a notification thumbnail from the source image.
///
/// Thumbnails are square: the source is stretched onto a `width` × `width`
/// canvas without preserving aspect ratio. The `height` parameter is accepted
/// for call-site symmetry but does not influence the output size.
pub fn thumbnail(image: &DynamicImage, width: u32, _height: u32) -> DynamicImage {
    let width = width.max(1);
    image.resize_exact(width, width, FilterType::Lanczos3)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image_rs::{DynamicImage, ImageBuffer};

    fn create_test_image(width: u32, height: u32) -> DynamicImage {
        let buffer = ImageBuffer::from_pixel(width, height, image_rs::Rgba([0, 0, 0, 0]));
        DynamicImage::ImageRgba8(buffer)
    }

    #[test]
    fn thumbnail_is_square_sized_by_width() {
        let img = create_test_image(96, 48);
        let thumb = thumbnail(&img, 64, 32);
        assert_eq!(thumb.width(), 64);
        assert_eq!(thumb.height(), 64);
    }

    #[test]
    fn thumbnail_ignores_requested_height() {
        let img = create_test_image(10, 10);
        for height in [1, 10, 200] {
            let thumb = thumbnail(&img, 24, height);
            assert_eq!((thumb.width(), thumb.height()), (24, 24));
        }
    }

    #[test]
    fn thumbnail_clamps_zero_width() {
        let img = create_test_image(8, 8);
        let thumb = thumbnail(&img, 0, 0);
        assert_eq!((thumb.width(), thumb.height()), (1, 1));
    }

    #[test]
    fn dynamic_to_image_data_preserves_dimensions() {
        let img = create_test_image(5, 7);
        let data = dynamic_to_image_data(&img).expect("conversion should succeed");
        assert_eq!(data.width, 5);
        assert_eq!(data.height, 7);
    }
}
