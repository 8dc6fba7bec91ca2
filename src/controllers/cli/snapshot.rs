use std::path::Path;

use tracing::info;

use crate::controllers::interactive::InteractiveController;
use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::curlicue::curlicue_config::CurlicueConfig;
use crate::presenters::canvas::presenter::CanvasPresenter;

/// Renders one configuration headlessly and hands the canvas to a file
/// presenter.
pub struct CliSnapshotController<P: FilePresenterPort> {
    presenter: P,
    controller: InteractiveController<CanvasPresenter>,
}

impl<P: FilePresenterPort> CliSnapshotController<P> {
    pub fn new(config: &CurlicueConfig, presenter: P) -> Result<Self, Box<dyn std::error::Error>> {
        let canvas = CanvasPresenter::new(config.canvas)?;
        let controller = InteractiveController::new(config, canvas)?;

        Ok(Self {
            presenter,
            controller,
        })
    }

    pub fn generate(&mut self) -> Result<(), Box<dyn std::error::Error>> {
        let generation = self.controller.regenerate();

        if let Some(error) = self.controller.presenter().last_error() {
            if error.generation == generation {
                return Err(Box::new(error.clone()));
            }
        }

        info!(
            "Rendered {} points in {:?}",
            self.controller.params().step_count(),
            self.controller.presenter().last_render_duration()
        );

        Ok(())
    }

    /// Writes the last rendered canvas, creating parent directories first.
    pub fn write(&self, filepath: impl AsRef<Path>) -> std::io::Result<()> {
        let filepath = filepath.as_ref();

        if let Some(parent) = filepath.parent() {
            std::fs::create_dir_all(parent)?;
        }

        self.presenter
            .present(self.controller.presenter().canvas(), filepath)?;
        info!("Saved to {}", filepath.display());

        Ok(())
    }

    #[must_use]
    pub fn controller(&self) -> &InteractiveController<CanvasPresenter> {
        &self.controller
    }
}
