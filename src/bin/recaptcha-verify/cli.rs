//! Command-line interface definition.

use clap::Parser;
use recaptcha_v3::VerifierConfig;
use std::path::PathBuf;

/// Verify a reCAPTCHA v3 token and print the admission decision.
#[derive(Parser, Debug)]
#[command(name = "recaptcha-verify")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Token returned to the browser by the reCAPTCHA script.
    #[arg(long, short)]
    pub token: String,

    /// Originating address of the user.
    #[arg(long, default_value = "")]
    pub remote_ip: String,

    /// Site secret.
    #[arg(long, env = "RECAPTCHA_SECRET", hide_env_values = true)]
    pub secret: Option<String>,

    /// Lowest score that is still admitted.
    #[arg(long, env = "RECAPTCHA_MIN_SCORE")]
    pub min_score: Option<f64>,

    /// Verification endpoint.
    #[arg(long, env = "RECAPTCHA_ENDPOINT")]
    pub endpoint: Option<String>,

    /// Request deadline in seconds (0 disables it).
    #[arg(long)]
    pub timeout_secs: Option<u64>,

    /// Log level.
    #[arg(long, default_value = "info", env = "RUST_LOG")]
    pub log_level: String,

    /// Path to configuration file.
    #[arg(long, short)]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// Merge CLI arguments over the configuration file (or defaults).
    ///
    /// # Errors
    ///
    /// Returns an error if a config file is specified but cannot be loaded.
    pub fn to_config(&self) -> color_eyre::Result<VerifierConfig> {
        let mut config = if let Some(ref path) = self.config {
            VerifierConfig::from_file(path)?
        } else {
            VerifierConfig::default()
        };

        if let Some(ref secret) = self.secret {
            config.secret.clone_from(secret);
        }
        if let Some(min_score) = self.min_score {
            config.min_score = min_score;
        }
        if let Some(ref endpoint) = self.endpoint {
            config.endpoint.clone_from(endpoint);
        }
        if let Some(timeout_secs) = self.timeout_secs {
            config.timeout_secs = timeout_secs;
        }
        config.log_level.clone_from(&self.log_level);

        Ok(config)
    }
}
