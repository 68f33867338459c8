mod annotator;
mod bounding_box;
mod classes;
mod dataset;
mod draw;
mod labels;

pub mod app;
pub mod config;

pub use app::{start_app, Mode};
