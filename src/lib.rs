mod controllers;
mod core;
#[cfg(feature = "gui")]
mod input;
mod logging;
mod presenters;

pub use controllers::cli::snapshot::CliSnapshotController;
pub use controllers::interactive::data::frame_data::FrameData;
pub use controllers::interactive::errors::controller::ControllerError;
pub use controllers::interactive::errors::render::RenderError;
pub use controllers::interactive::{
    InteractiveController, InteractiveControllerPresenterPort, RenderEvent,
};
pub use controllers::ports::file_presenter::FilePresenterPort;
pub use crate::core::actions::generate_curlicue::generate_curlicue::{
    GenerateCurlicueError, generate_curlicue, generate_curlicue_from_source,
};
pub use crate::core::actions::generate_curlicue::ports::turn_formula::TurnFormula;
pub use crate::core::actions::rasterise_polyline::rasterise_polyline::rasterise_polyline;
pub use crate::core::curlicue::canvas_style::CanvasStyle;
pub use crate::core::curlicue::curlicue_config::{CurlicueConfig, DEFAULT_FORMULA, golden_ratio};
pub use crate::core::curlicue::errors::CurlicueError;
pub use crate::core::curlicue::params::ParameterSet;
pub use crate::core::data::colour::Colour;
pub use crate::core::data::coordinate_buffers::{CoordinateBuffers, CoordinateBuffersError};
pub use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferError};
pub use crate::core::formula::Formula;
pub use crate::core::formula::errors::FormulaError;
pub use logging::init_logging;
pub use presenters::canvas::presenter::CanvasPresenter;
pub use presenters::file::ppm::PpmFilePresenter;

#[cfg(feature = "gui")]
pub use input::gui::commands::run_gui::RunGuiCommand;
#[cfg(feature = "gui")]
pub use presenters::pixels::factory::PixelsPresenterFactory;
