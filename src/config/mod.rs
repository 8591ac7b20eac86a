mod defaults;
mod io;
mod schema;
mod validate;

pub use io::load_config;
pub use schema::{CheckConfig, Config};
pub use validate::ConfigError;
