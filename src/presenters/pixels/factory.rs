use winit::window::Window;

use crate::input::gui::app::ports::presenter::GuiPresenterPort;
use crate::input::gui::commands::ports::presenter_factory::GuiPresenterFactoryPort;
use crate::presenters::pixels::presenter::PixelsPresenter;

#[derive(Debug, Default)]
pub struct PixelsPresenterFactory {}

impl GuiPresenterFactoryPort<PixelsPresenter> for PixelsPresenterFactory {
    fn build(&self, window: &'static Window, canvas_width: u32, canvas_height: u32) -> PixelsPresenter {
        PixelsPresenter::new(window, canvas_width, canvas_height)
    }
}

impl PixelsPresenterFactory {
    #[must_use]
    pub fn new() -> Self {
        Self {}
    }
}
