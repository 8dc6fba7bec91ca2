use crate::core::data::colour::Colour;
use crate::core::data::point::Point;
use thiserror::Error;

const BYTES_PER_PIXEL: usize = 3;

fn dimensions_to_buffer_size(width: u32, height: u32) -> usize {
    width as usize * height as usize * BYTES_PER_PIXEL
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum PixelBufferError {
    #[error("pixel buffer size must be positive: {width}x{height}")]
    InvalidSize { width: u32, height: u32 },
    #[error("pixel at x:{}, y:{} outside of {width}x{height} buffer", .pixel.x, .pixel.y)]
    PixelOutsideBounds {
        pixel: Point,
        width: u32,
        height: u32,
    },
    #[error("expected buffer size {expected_size} does not match buffer size {buffer_size}")]
    BoundsMismatch {
        expected_size: usize,
        buffer_size: usize,
    },
}

pub type PixelBufferData = Vec<u8>;

/// Packed RGB pixels, row-major with the origin in the top-left corner.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    buffer: PixelBufferData,
}

impl PixelBuffer {
    pub fn new(width: u32, height: u32) -> Result<Self, PixelBufferError> {
        if width == 0 || height == 0 {
            return Err(PixelBufferError::InvalidSize { width, height });
        }

        Ok(Self {
            width,
            height,
            buffer: vec![0; dimensions_to_buffer_size(width, height)],
        })
    }

    pub fn from_data(
        width: u32,
        height: u32,
        buffer: PixelBufferData,
    ) -> Result<Self, PixelBufferError> {
        if width == 0 || height == 0 {
            return Err(PixelBufferError::InvalidSize { width, height });
        }

        let expected_size = dimensions_to_buffer_size(width, height);

        if expected_size != buffer.len() {
            return Err(PixelBufferError::BoundsMismatch {
                expected_size,
                buffer_size: buffer.len(),
            });
        }

        Ok(Self {
            width,
            height,
            buffer,
        })
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn buffer(&self) -> &PixelBufferData {
        &self.buffer
    }

    #[must_use]
    pub fn buffer_size(&self) -> usize {
        self.buffer.len()
    }

    #[must_use]
    pub fn contains_point(&self, pixel: Point) -> bool {
        pixel.x >= 0 && pixel.y >= 0 && (pixel.x as u32) < self.width && (pixel.y as u32) < self.height
    }

    pub fn fill(&mut self, colour: Colour) {
        for pixel in self.buffer.chunks_exact_mut(BYTES_PER_PIXEL) {
            pixel[0] = colour.r;
            pixel[1] = colour.g;
            pixel[2] = colour.b;
        }
    }

    pub fn set_pixel(&mut self, pixel: Point, colour: Colour) -> Result<(), PixelBufferError> {
        let index = self.index_of(pixel)?;

        self.buffer[index] = colour.r;
        self.buffer[index + 1] = colour.g;
        self.buffer[index + 2] = colour.b;

        Ok(())
    }

    pub fn pixel(&self, pixel: Point) -> Result<Colour, PixelBufferError> {
        let index = self.index_of(pixel)?;

        Ok(Colour {
            r: self.buffer[index],
            g: self.buffer[index + 1],
            b: self.buffer[index + 2],
        })
    }

    fn index_of(&self, pixel: Point) -> Result<usize, PixelBufferError> {
        if !self.contains_point(pixel) {
            return Err(PixelBufferError::PixelOutsideBounds {
                pixel,
                width: self.width,
                height: self.height,
            });
        }

        Ok((pixel.y as usize * self.width as usize + pixel.x as usize) * BYTES_PER_PIXEL)
    }
}
