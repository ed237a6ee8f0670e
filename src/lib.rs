pub mod config;
pub mod defaults;
pub mod json;
pub mod loader;
pub mod logging;
pub mod lookup;
pub mod render;
