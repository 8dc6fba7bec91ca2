use std::time::Instant;

use tracing::{debug, info, warn};

use crate::controllers::interactive::data::frame_data::FrameData;
use crate::controllers::interactive::errors::controller::ControllerError;
use crate::controllers::interactive::errors::render::RenderError;
use crate::controllers::interactive::events::render::RenderEvent;
use crate::controllers::interactive::ports::presenter::InteractiveControllerPresenterPort;
use crate::core::actions::generate_curlicue::generate_curlicue::{
    GenerateCurlicueError, generate_curlicue,
};
use crate::core::curlicue::curlicue_config::CurlicueConfig;
use crate::core::curlicue::params::ParameterSet;
use crate::core::data::coordinate_buffers::CoordinateBuffers;
use crate::core::formula::Formula;

/// Owns the current parameters and coordinate buffers and regenerates the
/// curve synchronously on every parameter change.
///
/// Each regeneration is numbered. The presenter receives either a frame
/// borrowing the first `step_count` committed points or an error; after an
/// error the previously committed points stay in place.
pub struct InteractiveController<P: InteractiveControllerPresenterPort> {
    formula: String,
    compiled: Option<Formula>,
    params: ParameterSet,
    buffers: CoordinateBuffers,
    committed_len: usize,
    generation: u64,
    last_completed_generation: u64,
    presenter: P,
}

impl<P: InteractiveControllerPresenterPort> InteractiveController<P> {
    /// Builds a controller from `config` without rendering anything yet.
    pub fn new(config: &CurlicueConfig, presenter: P) -> Result<Self, ControllerError> {
        let params = config.parameter_set()?;
        let buffers = CoordinateBuffers::new(params.max_steps())?;

        Ok(Self {
            formula: config.formula.clone(),
            compiled: None,
            params,
            buffers,
            committed_len: 0,
            generation: 0,
            last_completed_generation: 0,
            presenter,
        })
    }

    pub fn on_scale_changed(&mut self, scale: f64) -> u64 {
        if let Err(err) = self.params.set_scale(scale) {
            return self.reject(err.to_string());
        }

        self.regenerate()
    }

    /// Values above `max_steps` are rejected with an error event; the
    /// stored step count is left as it was.
    pub fn on_step_count_changed(&mut self, step_count: usize) -> u64 {
        if let Err(err) = self.params.set_step_count(step_count) {
            return self.reject(err.to_string());
        }

        self.regenerate()
    }

    /// Stores the formula text verbatim. Errors in it surface from the
    /// regeneration that follows.
    pub fn on_formula_changed(&mut self, formula: impl Into<String>) -> u64 {
        let formula = formula.into();

        if formula != self.formula {
            self.formula = formula;
            self.compiled = None;
        }

        self.regenerate()
    }

    /// Recomputes the whole curve from index 0 and presents the outcome.
    /// Returns the generation id assigned to this attempt.
    pub fn regenerate(&mut self) -> u64 {
        let generation = self.next_generation();
        let step_count = self.params.step_count();

        info!(
            generation,
            "regenerating with s = {:.10}, n = {}",
            self.params.scale(),
            step_count
        );

        let start = Instant::now();

        if let Err(err) = self.run_engine() {
            warn!(generation, formula = %self.formula, "regeneration failed: {err}");
            self.present_error(generation, err.to_string());
            return generation;
        }

        let render_duration = start.elapsed();
        self.committed_len = step_count;
        self.last_completed_generation = generation;

        debug!(generation, ?render_duration, "curve generated");

        self.presenter.present(RenderEvent::Frame(FrameData {
            generation,
            xs: self.buffers.xs(step_count),
            ys: self.buffers.ys(step_count),
            scale: self.params.scale(),
            step_count,
            render_duration,
        }));
        self.presenter.request_redraw();

        generation
    }

    #[must_use]
    pub fn formula(&self) -> &str {
        &self.formula
    }

    #[must_use]
    pub fn params(&self) -> &ParameterSet {
        &self.params
    }

    /// Points of the last successful regeneration.
    #[must_use]
    pub fn coordinates(&self) -> (&[f64], &[f64]) {
        (
            self.buffers.xs(self.committed_len),
            self.buffers.ys(self.committed_len),
        )
    }

    #[must_use]
    pub fn last_completed_generation(&self) -> u64 {
        self.last_completed_generation
    }

    #[must_use]
    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn presenter_mut(&mut self) -> &mut P {
        &mut self.presenter
    }

    fn run_engine(&mut self) -> Result<(), GenerateCurlicueError> {
        let formula = match self.compiled.take() {
            Some(formula) => formula,
            None => Formula::compile(&self.formula).map_err(GenerateCurlicueError::Compile)?,
        };

        let result = generate_curlicue(&formula, &self.params, &mut self.buffers);
        self.compiled = Some(formula);

        result
    }

    fn reject(&mut self, message: String) -> u64 {
        let generation = self.next_generation();

        warn!(generation, "rejected parameter change: {message}");
        self.present_error(generation, message);

        generation
    }

    fn present_error(&mut self, generation: u64, message: String) {
        self.presenter
            .present(RenderEvent::Error(RenderError { generation, message }));
        self.presenter.request_redraw();
    }

    fn next_generation(&mut self) -> u64 {
        self.generation += 1;
        self.generation
    }
}
