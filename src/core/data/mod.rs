pub mod colour;
pub mod coordinate_buffers;
pub mod pixel_buffer;
pub mod point;
