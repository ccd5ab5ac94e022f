mod ann;
mod config;
mod params;

pub use ann::Ann;
pub use config::Config;
pub use params::Params;
