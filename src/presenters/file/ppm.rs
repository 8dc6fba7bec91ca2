use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::data::pixel_buffer::PixelBuffer;

/// Writes canvases as binary PPM (P6) images.
#[derive(Debug, Default)]
pub struct PpmFilePresenter {}

impl FilePresenterPort for PpmFilePresenter {
    fn present(&self, buffer: &PixelBuffer, filepath: impl AsRef<Path>) -> std::io::Result<()> {
        let mut writer = BufWriter::new(File::create(filepath)?);

        write_ppm(buffer, &mut writer)?;
        writer.flush()
    }
}

impl PpmFilePresenter {
    #[must_use]
    pub fn new() -> Self {
        Self {}
    }
}

pub fn write_ppm<W: Write>(buffer: &PixelBuffer, writer: &mut W) -> std::io::Result<()> {
    // P6 means binary RGB, then width, height and max colour value
    writeln!(writer, "P6")?;
    writeln!(writer, "{} {}", buffer.width(), buffer.height())?;
    writeln!(writer, "255")?;
    writer.write_all(buffer.buffer())
}
