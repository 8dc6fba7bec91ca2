use egui::Context as EguiContext;
use winit::window::Window;

use crate::core::data::pixel_buffer::PixelBuffer;

pub trait GuiPresenterPort {
    fn new(window: &'static Window, canvas_width: u32, canvas_height: u32) -> Self;
    fn render(
        &mut self,
        canvas: &PixelBuffer,
        egui_output: egui::FullOutput,
        egui_ctx: &EguiContext,
    ) -> Result<(), pixels::Error>;
    fn resize(&mut self, width: u32, height: u32);
}
