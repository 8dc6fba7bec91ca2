use egui::Context;
use egui_winit::State as EguiWinitState;
use winit::event::WindowEvent;
use winit::event_loop::EventLoop;
use winit::window::Window;

use crate::controllers::interactive::InteractiveController;
use crate::core::curlicue::curlicue_config::{
    SCALE_DISPLAY_DECIMALS, SCALE_RANGE, SCALE_RESOLUTION, STEP_COUNT_FINE_INCREMENT,
    STEP_COUNT_LARGE_INCREMENT,
};
use crate::input::gui::app::ports::presenter::GuiPresenterPort;
use crate::input::gui::app::state::{GuiAppState, ParameterChange};
use crate::presenters::canvas::presenter::CanvasPresenter;

pub struct GuiApp<T: GuiPresenterPort> {
    width: u32,
    height: u32,
    pub scale_factor: f64,
    presenter: T,
    controller: InteractiveController<CanvasPresenter>,
    ui_state: GuiAppState,
    pub egui_ctx: Context,
    pub egui_state: EguiWinitState,
}

impl<T: GuiPresenterPort> GuiApp<T> {
    pub fn new(
        window: &'static Window,
        event_loop: &EventLoop<()>,
        presenter: T,
        controller: InteractiveController<CanvasPresenter>,
        ui_state: GuiAppState,
    ) -> Self {
        let size = window.inner_size();
        let scale_factor = window.scale_factor();
        let egui_ctx = Context::default();

        let egui_state = EguiWinitState::new(
            egui_ctx.clone(),
            egui_ctx.viewport_id(),
            event_loop,
            Some(scale_factor as f32),
            None, // max_texture_side, use default
        );

        Self {
            width: size.width,
            height: size.height,
            scale_factor,
            presenter,
            controller,
            ui_state,
            egui_ctx,
            egui_state,
        }
    }

    pub fn render(&mut self, egui_output: egui::FullOutput) -> Result<(), pixels::Error> {
        self.presenter.render(
            self.controller.presenter().canvas(),
            egui_output,
            &self.egui_ctx,
        )
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;

        if width == 0 || height == 0 {
            return;
        }

        self.presenter.resize(width, height);
    }

    /// Renders the initial configuration before the first frame is shown.
    pub fn start(&mut self) {
        self.ui_state.latest_generation = self.controller.regenerate();
        self.controller.presenter_mut().take_redraw_request();
    }

    /// Forwards widget edits to the controller. Returns whether the canvas
    /// or status changed and the window should be painted again.
    pub fn apply_parameter_changes(&mut self) -> bool {
        for change in self.ui_state.take_changes() {
            self.ui_state.latest_generation = match change {
                ParameterChange::Formula(formula) => self.controller.on_formula_changed(formula),
                ParameterChange::Scale(scale) => self.controller.on_scale_changed(scale),
                ParameterChange::StepCount(step_count) => {
                    self.controller.on_step_count_changed(step_count)
                }
            };
        }

        self.controller.presenter_mut().take_redraw_request()
    }

    pub fn update_ui(&mut self, window: &Window) -> egui::FullOutput {
        let raw_input = self.egui_state.take_egui_input(window);
        let canvas = self.controller.presenter();
        let ui_state = &mut self.ui_state;
        let (width, height) = (self.width, self.height);

        self.egui_ctx.run(raw_input, |ctx| {
            egui::Window::new("Curlicue")
                .default_pos([10.0, 10.0])
                .default_size([280.0, 160.0])
                .show(ctx, |ui| {
                    ui.horizontal(|ui| {
                        ui.label("Formula:");
                        let response =
                            ui.add(egui::TextEdit::singleline(&mut ui_state.formula_text));

                        if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter))
                        {
                            ui_state.commit_formula();
                        }
                    });

                    ui.horizontal(|ui| {
                        ui.label("s:");
                        ui.add(
                            egui::Slider::new(&mut ui_state.scale, SCALE_RANGE)
                                .step_by(SCALE_RESOLUTION)
                                .fixed_decimals(SCALE_DISPLAY_DECIMALS),
                        );
                    });

                    ui.horizontal(|ui| {
                        ui.label("Steps:");

                        if ui.button(format!("-{STEP_COUNT_LARGE_INCREMENT}")).clicked() {
                            ui_state.decrease_step_count(STEP_COUNT_LARGE_INCREMENT);
                        }

                        let max_steps = ui_state.max_steps();
                        ui.add(
                            egui::DragValue::new(&mut ui_state.step_count)
                                .speed(STEP_COUNT_FINE_INCREMENT as f64)
                                .clamp_range(0..=max_steps),
                        );

                        if ui.button(format!("+{STEP_COUNT_LARGE_INCREMENT}")).clicked() {
                            ui_state.increase_step_count(STEP_COUNT_LARGE_INCREMENT);
                        }
                    });

                    ui.separator();
                    ui.label(format!("Window size: {width}x{height}"));
                    ui.label(format!("Generation: {}", ui_state.latest_generation));
                    if let Some(render_duration) = canvas.last_render_duration() {
                        ui.label(format!("Last render: {} µs", render_duration.as_micros()));
                    }
                    if let Some(message) = canvas.last_error_message() {
                        ui.separator();
                        ui.colored_label(egui::Color32::LIGHT_RED, message);
                    }
                });
        })
    }

    pub fn handle_window_event(&mut self, window: &Window, event: &WindowEvent) -> (bool, bool) {
        let response = self.egui_state.on_window_event(window, event);
        (response.consumed, response.repaint)
    }
}
