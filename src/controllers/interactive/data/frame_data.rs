use std::time::Duration;

/// One completed regeneration, borrowed from the controller's buffers for
/// the duration of a single `present` call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameData<'a> {
    pub generation: u64,
    pub xs: &'a [f64],
    pub ys: &'a [f64],
    pub scale: f64,
    pub step_count: usize,
    pub render_duration: Duration,
}
