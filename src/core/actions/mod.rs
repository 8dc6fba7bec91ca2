pub mod generate_curlicue;
pub mod rasterise_polyline;
