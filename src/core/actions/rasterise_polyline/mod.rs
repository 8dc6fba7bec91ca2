pub mod rasterise_polyline;
pub mod viewport;
