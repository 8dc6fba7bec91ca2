use std::marker::PhantomData;

use tracing::error;
use winit::{
    dpi::LogicalSize,
    event::{Event, WindowEvent},
    event_loop::EventLoop,
    window::{Window, WindowBuilder},
};

use crate::controllers::interactive::InteractiveController;
use crate::core::curlicue::curlicue_config::CurlicueConfig;
use crate::input::gui::app::gui_app::GuiApp;
use crate::input::gui::app::ports::presenter::GuiPresenterPort;
use crate::input::gui::app::state::GuiAppState;
use crate::input::gui::commands::ports::presenter_factory::GuiPresenterFactoryPort;
use crate::presenters::canvas::presenter::CanvasPresenter;

pub struct RunGuiCommand<F, P>
where
    P: GuiPresenterPort,
    F: GuiPresenterFactoryPort<P>,
{
    presenter_factory: F,
    config: CurlicueConfig,
    _phantom: PhantomData<fn() -> P>,
}

impl<F, P> RunGuiCommand<F, P>
where
    P: GuiPresenterPort,
    F: GuiPresenterFactoryPort<P>,
{
    pub fn new(presenter_factory: F, config: CurlicueConfig) -> Self {
        Self {
            presenter_factory,
            config,
            _phantom: PhantomData,
        }
    }

    /// Opens the window and blocks until it is closed. Fails before any window
    /// appears when the configuration is invalid.
    pub fn execute(&self) -> Result<(), Box<dyn std::error::Error>> {
        let canvas = CanvasPresenter::new(self.config.canvas)?;
        let controller = InteractiveController::new(&self.config, canvas)?;

        let event_loop = EventLoop::new().expect("Failed to create event loop");
        let viewport_size = self.config.canvas.viewport_size;

        let window: &'static Window = Box::leak(Box::new(
            WindowBuilder::new()
                .with_title("curlicue")
                .with_inner_size(LogicalSize::new(viewport_size as f64, viewport_size as f64))
                .with_min_inner_size(LogicalSize::new(200.0, 200.0))
                .build(&event_loop)
                .expect("Failed to create window"),
        ));

        let presenter: P = self
            .presenter_factory
            .build(window, viewport_size, viewport_size);
        let ui_state = GuiAppState::from_config(&self.config);
        let mut app = GuiApp::new(window, &event_loop, presenter, controller, ui_state);
        let mut redraw_pending = true;

        app.start();

        event_loop
            .run(|event, elwt| {
                match event {
                    Event::WindowEvent {
                        ref event,
                        window_id,
                    } if window_id == window.id() => {
                        // Forward event to egui first
                        let (_, egui_repaint) = app.handle_window_event(window, event);

                        if egui_repaint {
                            redraw_pending = true;
                        }

                        match event {
                            WindowEvent::CloseRequested => {
                                elwt.exit();
                            }
                            WindowEvent::RedrawRequested => {
                                redraw_pending = false;

                                let egui_output = app.update_ui(window);

                                // The panel was built before these edits landed,
                                // so paint once more to show the new status.
                                if app.apply_parameter_changes() {
                                    redraw_pending = true;
                                }

                                app.egui_state.handle_platform_output(
                                    window,
                                    egui_output.platform_output.clone(),
                                );

                                if egui_output
                                    .viewport_output
                                    .values()
                                    .any(|v| v.repaint_delay.is_zero())
                                {
                                    redraw_pending = true;
                                }

                                if let Err(e) = app.render(egui_output) {
                                    error!("Render error: {e}");
                                    elwt.exit();
                                }
                            }
                            WindowEvent::Resized(size) => {
                                app.resize(size.width, size.height);
                                redraw_pending = true;
                            }
                            WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                                app.scale_factor = *scale_factor;
                                app.egui_ctx.set_pixels_per_point(*scale_factor as f32);
                                let size = window.inner_size();
                                app.resize(size.width, size.height);
                                redraw_pending = true;
                            }
                            _ => {}
                        }
                    }
                    Event::AboutToWait => {
                        if redraw_pending {
                            window.request_redraw();
                        }
                    }
                    _ => {}
                }
            })
            .expect("Event loop error");

        Ok(())
    }
}
