pub mod dirty;
pub mod generator;
pub mod render;
pub mod runner;
