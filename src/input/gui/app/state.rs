use crate::core::curlicue::curlicue_config::{CurlicueConfig, SCALE_RANGE};

/// A parameter edit the controller has not seen yet.
#[derive(Debug, Clone, PartialEq)]
pub enum ParameterChange {
    Formula(String),
    Scale(f64),
    StepCount(usize),
}

/// Values bound to the control panel widgets, plus the slider and stepper
/// values last handed to the controller so dragging only reports real edits.
pub struct GuiAppState {
    pub formula_text: String,
    pub scale: f64,
    pub step_count: usize,
    max_steps: usize,
    committed_formula: Option<String>,
    applied_scale: f64,
    applied_step_count: usize,
    pub latest_generation: u64,
}

impl GuiAppState {
    #[must_use]
    pub fn from_config(config: &CurlicueConfig) -> Self {
        Self {
            formula_text: config.formula.clone(),
            scale: config.scale,
            step_count: config.step_count,
            max_steps: config.max_steps,
            committed_formula: None,
            applied_scale: config.scale,
            applied_step_count: config.step_count,
            latest_generation: 0,
        }
    }

    #[must_use]
    pub fn max_steps(&self) -> usize {
        self.max_steps
    }

    /// Marks the current text field content as entered.
    pub fn commit_formula(&mut self) {
        self.committed_formula = Some(self.formula_text.clone());
    }

    pub fn increase_step_count(&mut self, by: usize) {
        self.step_count = self.step_count.saturating_add(by).min(self.max_steps);
    }

    pub fn decrease_step_count(&mut self, by: usize) {
        self.step_count = self.step_count.saturating_sub(by);
    }

    /// Drains the edits made since the last call, in the order formula,
    /// scale, step count. Widget values are clamped to their ranges first.
    pub fn take_changes(&mut self) -> Vec<ParameterChange> {
        self.scale = self.scale.clamp(*SCALE_RANGE.start(), *SCALE_RANGE.end());
        self.step_count = self.step_count.min(self.max_steps);

        let mut changes = Vec::new();

        // Every Enter press regenerates, even when the text is unchanged.
        if let Some(formula) = self.committed_formula.take() {
            changes.push(ParameterChange::Formula(formula));
        }

        if self.scale.to_bits() != self.applied_scale.to_bits() {
            self.applied_scale = self.scale;
            changes.push(ParameterChange::Scale(self.scale));
        }

        if self.step_count != self.applied_step_count {
            self.applied_step_count = self.step_count;
            changes.push(ParameterChange::StepCount(self.step_count));
        }

        changes
    }
}
