use crate::controllers::interactive::events::render::RenderEvent;

/// Render surface driven by the interactive controller.
///
/// Frame events borrow the controller's coordinate buffers, so an
/// implementation copies or draws what it needs before returning.
pub trait InteractiveControllerPresenterPort {
    fn present(&mut self, event: RenderEvent<'_>);
    fn request_redraw(&mut self);
}
