// Core types shared by the grid, the visualizer and the window.

/// The software drawing surface every paint lands on.
/// Visual: this is the image you actually see once it is pushed to the window.
#[derive(Clone, PartialEq)]
pub struct FrameBuffer {
    pub width: usize,      // how wide the surface is on screen (pixels)
    pub height: usize,     // how tall the surface is on screen (pixels)
    pub pixels: Vec<u32>,  // each entry is 0x00RRGGBB for minifb
}

impl FrameBuffer {
    /// Fresh all-black surface of the given size.
    /// Visual: nothing yet; the grid paints its background over it at init.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            pixels: vec![0u32; width * height],
        }
    }
}
