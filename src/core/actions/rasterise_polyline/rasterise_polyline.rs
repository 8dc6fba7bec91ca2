use crate::core::actions::rasterise_polyline::viewport::Viewport;
use crate::core::curlicue::canvas_style::CanvasStyle;
use crate::core::data::colour::Colour;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::point::Point;

/// Clears `canvas` to the background colour and draws one polyline through
/// the given points, fitted to the canvas.
///
/// Fewer than two points, or points that cannot be fitted, leave only the
/// background.
pub fn rasterise_polyline(xs: &[f64], ys: &[f64], style: &CanvasStyle, canvas: &mut PixelBuffer) {
    canvas.fill(style.background);

    let len = xs.len().min(ys.len());

    if len < 2 {
        return;
    }

    let (xs, ys) = (&xs[..len], &ys[..len]);
    let size = canvas.width().min(canvas.height());

    let Some(viewport) = Viewport::fit(xs, ys, size) else {
        return;
    };

    let brush = Brush::new(style.line_width, style.line_colour);
    let mut previous = viewport.to_pixel(xs[0], ys[0]);

    for (&x, &y) in xs.iter().zip(ys).skip(1) {
        let current = viewport.to_pixel(x, y);
        draw_segment(canvas, previous, current, &brush);
        previous = current;
    }
}

struct Brush {
    low: i32,
    high: i32,
    colour: Colour,
}

impl Brush {
    fn new(width: u32, colour: Colour) -> Self {
        let width = width.max(1) as i32;

        Self {
            low: -((width - 1) / 2),
            high: width / 2,
            colour,
        }
    }

    fn stamp(&self, canvas: &mut PixelBuffer, centre: Point) {
        for dy in self.low..=self.high {
            for dx in self.low..=self.high {
                let pixel = Point {
                    x: centre.x + dx,
                    y: centre.y + dy,
                };

                // Clipped pixels are simply skipped.
                let _ = canvas.set_pixel(pixel, self.colour);
            }
        }
    }
}

// Bresenham, all octants.
fn draw_segment(canvas: &mut PixelBuffer, from: Point, to: Point, brush: &Brush) {
    let dx = (to.x - from.x).abs();
    let dy = -(to.y - from.y).abs();
    let step_x = if from.x < to.x { 1 } else { -1 };
    let step_y = if from.y < to.y { 1 } else { -1 };

    let mut error = dx + dy;
    let mut current = from;

    loop {
        brush.stamp(canvas, current);

        if current == to {
            break;
        }

        let doubled = 2 * error;

        if doubled >= dy {
            error += dy;
            current.x += step_x;
        }

        if doubled <= dx {
            error += dx;
            current.y += step_y;
        }
    }
}
