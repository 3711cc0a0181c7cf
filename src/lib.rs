pub mod brand;
pub mod cli;
pub mod commands;
pub mod error;
pub mod font;
pub mod generate;
pub mod render;
