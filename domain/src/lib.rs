pub mod analysis;
pub mod canvas_config;
pub mod color;
pub mod encoded_image;
pub mod error;
pub mod pixel_buffer;
