pub mod actions;
pub mod curlicue;
pub mod data;
pub mod formula;
