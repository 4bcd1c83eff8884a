pub mod config;
mod http_layers;
pub mod server;
mod song_routes;
pub mod state;

pub use config::ServerConfig;
pub use http_layers::*;
#[allow(unused_imports)] // Used by main.rs
pub use server::run_server;
