pub mod config;

pub use config::{default_coordinates, load_config, save_config, Config};
