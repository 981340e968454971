pub mod cli;
pub mod config;
pub mod input;
pub mod lengths;
pub mod pipeline;
pub mod render;
