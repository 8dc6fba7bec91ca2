pub mod generate_curlicue;
pub mod ports;
