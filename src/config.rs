/*
 * Configuration Module
 *
 * Command line options for the demo, parsed with clap, and the logger setup
 * driven by them.
 */

use clap::Parser;

/// Command line arguments
#[derive(Parser, Debug, Clone)]
#[command(name = "flocking_cones")]
#[command(about = "A flock of cones drifting toward the centre of the camera frustum")]
pub struct Config {
    /// Random seed for reproducible runs (drawn from entropy when absent)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Window width in pixels
    #[arg(long, default_value_t = 1024, value_parser = clap::value_parser!(u32).range(1..))]
    pub width: u32,

    /// Window height in pixels
    #[arg(long, default_value_t = 768, value_parser = clap::value_parser!(u32).range(1..))]
    pub height: u32,

    /// Extra birds spawned at the start position besides the first one
    #[arg(long, default_value_t = 0)]
    pub initial_birds: usize,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

impl Config {
    pub fn aspect_ratio(&self) -> f32 {
        self.width as f32 / self.height as f32
    }

    // Install env_logger; RUST_LOG takes precedence over --log-level
    pub fn init_logging(&self) {
        let env = env_logger::Env::default().default_filter_or(self.log_level.as_str());
        // A logger installed earlier (e.g. by a test harness) stays in place
        let _ = env_logger::Builder::from_env(env).try_init();
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed: None,
            width: 1024,
            height: 768,
            initial_birds: 0,
            log_level: "info".to_string(),
        }
    }
}
