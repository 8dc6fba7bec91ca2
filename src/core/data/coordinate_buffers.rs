use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CoordinateBuffersError {
    #[error("coordinate buffer capacity must be greater than zero")]
    ZeroCapacity,
}

/// Index-aligned X/Y coordinate sequences of fixed capacity.
///
/// Generation writes into a staging pair and [`CoordinateBuffers::commit`]
/// copies the written prefix into the visible pair, so a failed generation
/// never leaves a partially overwritten sequence behind. Both pairs are
/// allocated once. Visible entries past the committed prefix keep whatever
/// earlier generations left there.
#[derive(Debug, Clone)]
pub struct CoordinateBuffers {
    x: Vec<f64>,
    y: Vec<f64>,
    staging_x: Vec<f64>,
    staging_y: Vec<f64>,
}

impl CoordinateBuffers {
    pub fn new(capacity: usize) -> Result<Self, CoordinateBuffersError> {
        if capacity == 0 {
            return Err(CoordinateBuffersError::ZeroCapacity);
        }

        Ok(Self {
            x: vec![0.0; capacity],
            y: vec![0.0; capacity],
            staging_x: vec![0.0; capacity],
            staging_y: vec![0.0; capacity],
        })
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.x.len()
    }

    /// First `len` X coordinates, clipped to the capacity.
    #[must_use]
    pub fn xs(&self, len: usize) -> &[f64] {
        &self.x[..len.min(self.capacity())]
    }

    /// First `len` Y coordinates, clipped to the capacity.
    #[must_use]
    pub fn ys(&self, len: usize) -> &[f64] {
        &self.y[..len.min(self.capacity())]
    }

    pub(crate) fn staging_mut(&mut self) -> (&mut [f64], &mut [f64]) {
        (self.staging_x.as_mut_slice(), self.staging_y.as_mut_slice())
    }

    pub(crate) fn commit(&mut self, len: usize) {
        let len = len.min(self.capacity());

        self.x[..len].copy_from_slice(&self.staging_x[..len]);
        self.y[..len].copy_from_slice(&self.staging_y[..len]);
    }
}
