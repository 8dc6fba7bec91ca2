fn main() -> Result<(), Box<dyn std::error::Error>> {
    curlicue_explorer::init_logging();

    let presenter_factory = curlicue_explorer::PixelsPresenterFactory::new();
    let config = curlicue_explorer::CurlicueConfig::default();
    let command = curlicue_explorer::RunGuiCommand::new(presenter_factory, config);

    command.execute()
}
