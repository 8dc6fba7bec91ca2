use std::time::Duration;

use crate::controllers::interactive::errors::render::RenderError;
use crate::controllers::interactive::events::render::RenderEvent;
use crate::controllers::interactive::ports::presenter::InteractiveControllerPresenterPort;
use crate::core::actions::rasterise_polyline::rasterise_polyline::rasterise_polyline;
use crate::core::curlicue::canvas_style::CanvasStyle;
use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferError};

/// Keeps an RGB canvas in sync with the controller's latest frame.
///
/// Frames older than the one already drawn are ignored. An error leaves the
/// canvas as it was and is remembered until the next frame arrives.
pub struct CanvasPresenter {
    style: CanvasStyle,
    canvas: PixelBuffer,
    last_presented_generation: u64,
    last_error: Option<RenderError>,
    last_render_duration: Option<Duration>,
    redraw_requested: bool,
}

impl InteractiveControllerPresenterPort for CanvasPresenter {
    fn present(&mut self, event: RenderEvent<'_>) {
        match event {
            RenderEvent::Frame(frame) => {
                if frame.generation > self.last_presented_generation {
                    rasterise_polyline(frame.xs, frame.ys, &self.style, &mut self.canvas);
                    self.last_presented_generation = frame.generation;
                    self.last_render_duration = Some(frame.render_duration);
                    self.last_error = None;
                }
            }
            RenderEvent::Error(error) => {
                if error.generation >= self.last_presented_generation {
                    self.last_error = Some(error);
                }
            }
        }
    }

    fn request_redraw(&mut self) {
        self.redraw_requested = true;
    }
}

impl CanvasPresenter {
    /// Creates a square canvas of `style.viewport_size` filled with the
    /// background colour.
    pub fn new(style: CanvasStyle) -> Result<Self, PixelBufferError> {
        let mut canvas = PixelBuffer::new(style.viewport_size, style.viewport_size)?;
        canvas.fill(style.background);

        Ok(Self {
            style,
            canvas,
            last_presented_generation: 0,
            last_error: None,
            last_render_duration: None,
            redraw_requested: false,
        })
    }

    #[must_use]
    pub fn canvas(&self) -> &PixelBuffer {
        &self.canvas
    }

    #[must_use]
    pub fn style(&self) -> &CanvasStyle {
        &self.style
    }

    #[must_use]
    pub fn last_presented_generation(&self) -> u64 {
        self.last_presented_generation
    }

    #[must_use]
    pub fn last_error(&self) -> Option<&RenderError> {
        self.last_error.as_ref()
    }

    #[must_use]
    pub fn last_error_message(&self) -> Option<&str> {
        self.last_error.as_ref().map(|error| error.message.as_str())
    }

    #[must_use]
    pub fn last_render_duration(&self) -> Option<Duration> {
        self.last_render_duration
    }

    /// Returns whether a redraw was requested since the last call.
    pub fn take_redraw_request(&mut self) -> bool {
        std::mem::take(&mut self.redraw_requested)
    }
}
