pub mod config;
pub mod error;
pub mod mode;
pub mod pages;
pub mod render;
pub mod site;
pub mod utils;
