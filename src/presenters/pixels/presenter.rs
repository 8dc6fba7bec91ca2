use egui::Context as EguiContext;
use egui_wgpu::Renderer as EguiRenderer;
use pixels::Pixels;
use pixels::SurfaceTexture;
use pixels::wgpu;
use winit::window::Window;

use crate::core::data::pixel_buffer::PixelBuffer;
use crate::input::gui::app::ports::presenter::GuiPresenterPort;

/// Shows the RGB canvas through a fixed-size `pixels` framebuffer, scaled
/// into the window, with the egui panel painted on top.
pub struct PixelsPresenter {
    pixels: Pixels<'static>,
    egui_renderer: EguiRenderer,
    width: u32,
    height: u32,
}

impl GuiPresenterPort for PixelsPresenter {
    fn new(window: &'static Window, canvas_width: u32, canvas_height: u32) -> Self {
        let size = window.inner_size();
        let surface_texture = SurfaceTexture::new(size.width, size.height, window);

        let pixels = Pixels::new(canvas_width, canvas_height, surface_texture)
            .expect("Failed to create pixels surface");

        let egui_renderer = EguiRenderer::new(
            pixels.device(),
            pixels.render_texture_format(),
            None, // depth format
            1,    // msaa samples
        );

        Self {
            pixels,
            egui_renderer,
            width: size.width,
            height: size.height,
        }
    }

    fn render(
        &mut self,
        canvas: &PixelBuffer,
        egui_output: egui::FullOutput,
        egui_ctx: &EguiContext,
    ) -> Result<(), pixels::Error> {
        if self.width == 0 || self.height == 0 {
            return Ok(());
        }

        copy_rgb_into_rgba(canvas.buffer(), self.pixels.frame_mut());

        self.pixels.render_with(|encoder, render_target, context| {
            // First, render the pixels framebuffer (the scaling pass)
            context.scaling_renderer.render(encoder, render_target);

            let clipped_primitives =
                egui_ctx.tessellate(egui_output.shapes, egui_ctx.pixels_per_point());

            let screen_descriptor = egui_wgpu::ScreenDescriptor {
                size_in_pixels: [self.width, self.height],
                pixels_per_point: egui_ctx.pixels_per_point(),
            };

            let textures_delta = egui_output.textures_delta;

            for (id, delta) in &textures_delta.set {
                self.egui_renderer
                    .update_texture(&context.device, &context.queue, *id, delta);
            }

            self.egui_renderer.update_buffers(
                &context.device,
                &context.queue,
                encoder,
                &clipped_primitives,
                &screen_descriptor,
            );

            {
                let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                    label: Some("egui"),
                    color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                        view: render_target,
                        resolve_target: None,
                        ops: wgpu::Operations {
                            load: wgpu::LoadOp::Load, // Keep the curve underneath
                            store: wgpu::StoreOp::Store,
                        },
                    })],
                    depth_stencil_attachment: None,
                    ..Default::default()
                });

                self.egui_renderer.render(
                    &mut render_pass,
                    &clipped_primitives,
                    &screen_descriptor,
                );
            }

            for id in &textures_delta.free {
                self.egui_renderer.free_texture(id);
            }

            Ok(())
        })
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;

        // The framebuffer keeps the canvas size; only the surface follows the window.
        self.pixels
            .resize_surface(width, height)
            .expect("Failed to resize surface");
    }
}

fn copy_rgb_into_rgba(src: &[u8], dest: &mut [u8]) {
    for (src_pixel, dst_pixel) in src.chunks_exact(3).zip(dest.chunks_exact_mut(4)) {
        dst_pixel[..3].copy_from_slice(src_pixel);
        dst_pixel[3] = 255;
    }
}
