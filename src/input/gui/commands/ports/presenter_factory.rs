use winit::window::Window;

use crate::input::gui::app::ports::presenter::GuiPresenterPort;

pub trait GuiPresenterFactoryPort<T: GuiPresenterPort> {
    fn build(&self, window: &'static Window, canvas_width: u32, canvas_height: u32) -> T;
}
