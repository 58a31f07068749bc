mod settings;

pub use settings::{Hub, Logger, Server, Settings};
