fn main() -> Result<(), Box<dyn std::error::Error>> {
    curlicue_explorer::init_logging();

    let config = curlicue_explorer::CurlicueConfig::default();
    let presenter = curlicue_explorer::PpmFilePresenter::new();
    let mut controller = curlicue_explorer::CliSnapshotController::new(&config, presenter)?;

    controller.generate()?;
    controller.write("output/curlicue.ppm")?;

    Ok(())
}
