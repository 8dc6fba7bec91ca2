use crate::core::data::colour::Colour;

/// `#003399`
pub const DEFAULT_BACKGROUND: Colour = Colour {
    r: 0x00,
    g: 0x33,
    b: 0x99,
};
pub const DEFAULT_LINE_COLOUR: Colour = Colour { r: 255, g: 0, b: 0 };
pub const DEFAULT_LINE_WIDTH: u32 = 2;
pub const DEFAULT_VIEWPORT_SIZE: u32 = 600;

/// Fixed look of the rendered curve. The viewport is always square.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct CanvasStyle {
    pub background: Colour,
    pub line_colour: Colour,
    pub line_width: u32,
    pub viewport_size: u32,
}

impl Default for CanvasStyle {
    fn default() -> Self {
        Self {
            background: DEFAULT_BACKGROUND,
            line_colour: DEFAULT_LINE_COLOUR,
            line_width: DEFAULT_LINE_WIDTH,
            viewport_size: DEFAULT_VIEWPORT_SIZE,
        }
    }
}
