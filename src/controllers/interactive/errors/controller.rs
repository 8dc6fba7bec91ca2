use thiserror::Error;

use crate::core::curlicue::errors::CurlicueError;
use crate::core::data::coordinate_buffers::CoordinateBuffersError;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ControllerError {
    #[error("invalid parameters: {0}")]
    Parameters(#[from] CurlicueError),
    #[error("cannot allocate coordinate buffers: {0}")]
    Buffers(#[from] CoordinateBuffersError),
}
