pub mod classifier;
pub mod config;
pub mod error;
pub mod input;
pub mod journal;
pub mod model;
pub mod patterns;
pub mod quiz;
