//! Display capabilities and the reference framebuffer

pub mod framebuffer;
pub mod surface;

pub use framebuffer::Framebuffer;
pub use surface::{PixelSurface, TextOverlay};
