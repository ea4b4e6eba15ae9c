use super::types::IntensityField;
use image::{GrayImage, RgbImage};

/// Color channel used as the intensity field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Channel {
    #[default]
    Red,
    Green,
    Blue,
    /// Luma as computed by the image crate
    Luma,
}

/// Converts decoded images to intensity fields and back
pub struct Preprocessor {
    channel: Channel,
}

impl Preprocessor {
    pub fn new(channel: Channel) -> Self {
        Self { channel }
    }

    pub fn channel(&self) -> Channel {
        self.channel
    }

    /// Extract one channel of an RGB image, normalized to [0, 1]
    ///
    /// Returns: field with shape (height, width)
    pub fn intensity_from_rgb(&self, frame: &RgbImage) -> IntensityField {
        let _span = tracing::debug_span!("load_intensity").entered();

        let index = match self.channel {
            Channel::Red => 0,
            Channel::Green => 1,
            Channel::Blue => 2,
            Channel::Luma => {
                let gray = image::DynamicImage::ImageRgb8(frame.clone()).into_luma8();
                return intensity_from_gray(&gray);
            }
        };

        let (width, height) = frame.dimensions();
        IntensityField::from_shape_fn((height as usize, width as usize), |(row, col)| {
            frame.get_pixel(col as u32, row as u32)[index] as f32 / 255.0
        })
    }
}

/// Normalize an 8-bit grayscale image to [0, 1]
pub fn intensity_from_gray(gray: &GrayImage) -> IntensityField {
    let (width, height) = gray.dimensions();
    IntensityField::from_shape_fn((height as usize, width as usize), |(row, col)| {
        gray.get_pixel(col as u32, row as u32)[0] as f32 / 255.0
    })
}

/// Convert a field back to an 8-bit grayscale image
pub fn field_to_gray(field: &IntensityField) -> GrayImage {
    let (rows, cols) = field.dim();
    GrayImage::from_fn(cols as u32, rows as u32, |x, y| {
        let value = (field[[y as usize, x as usize]] * 255.0)
            .round()
            .clamp(0.0, 255.0) as u8;
        image::Luma([value])
    })
}

/// Place two equally sized fields next to each other (left | right)
pub fn side_by_side(left: &IntensityField, right: &IntensityField) -> GrayImage {
    let left = field_to_gray(left);
    let right = field_to_gray(right);
    let (width, height) = left.dimensions();

    GrayImage::from_fn(width + right.width(), height.max(right.height()), |x, y| {
        let (source, x) = if x < width {
            (&left, x)
        } else {
            (&right, x - width)
        };
        if y < source.height() {
            *source.get_pixel(x, y)
        } else {
            image::Luma([0])
        }
    })
}
