pub mod args;
pub mod controller;
pub mod error;
pub mod geo;
pub mod model;
pub mod score;
pub mod view;

pub use error::TrackError;
