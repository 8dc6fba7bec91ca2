pub mod canvas_style;
pub mod curlicue_config;
pub mod errors;
pub mod params;
