use sims::engine::config::DEFAULT_CAPACITY;

pub const CONFIG_FILE_NAME: &str = "config.toml";

pub struct DefaultsConfig {
    pub capacity: usize,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
        }
    }
}
