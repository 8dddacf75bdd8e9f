use clap::builder::{BoolishValueParser, TypedValueParser as _};
use clap::{ArgAction, Parser};
use dotenvy::dotenv;
use log::LevelFilter;

/// Signature version tag Slack currently prefixes every request signature with.
pub const DEFAULT_API_VERSION: &str = "v0";

#[derive(Clone, Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Config {
    /// The host interface to listen for incoming connections
    #[arg(short, long, env, default_value = "127.0.0.1")]
    pub interface: Option<String>,

    /// The host TCP port to listen for incoming connections
    #[arg(short, long, env, default_value_t = 4000)]
    pub port: u16,

    /// Set the log level verbosity threshold (level) to control what gets displayed on console output
    #[arg(
        short,
        long,
        env,
        default_value_t = LevelFilter::Info,
        value_parser = clap::builder::PossibleValuesParser::new(["OFF", "ERROR", "WARN", "INFO", "DEBUG", "TRACE"])
            .map(|s| s.parse::<LevelFilter>().unwrap()),
        )]
    pub log_level_filter: LevelFilter,

    /// Verify the Slack request signature on every inbound slash command. Only disable
    /// this for local or otherwise trusted invocations.
    #[arg(
        long,
        env,
        default_value_t = true,
        action = ArgAction::Set,
        value_parser = BoolishValueParser::new()
    )]
    pub with_validation: bool,

    /// Reject signed requests whose timestamp is older than the tolerance window.
    #[arg(
        long,
        env,
        default_value_t = true,
        action = ArgAction::Set,
        value_parser = BoolishValueParser::new()
    )]
    pub verify_timestamps: bool,

    /// Age in seconds after which a signed request is considered stale
    #[arg(long, env, default_value_t = 300)]
    pub timestamp_tolerance_secs: u64,

    /// Version tag used to build and prefix request signatures
    #[arg(short, long, env, default_value = DEFAULT_API_VERSION)]
    api_version: String,

    /// The Slack app signing secret. Required whenever validation is enabled.
    #[arg(long, env, hide_env_values = true)]
    signing_secret: Option<String>,

    /// Timeout in seconds for the best-effort POST to a slash command's response_url
    #[arg(long, env, default_value_t = 5)]
    pub notification_timeout_secs: u64,

    /// Largest request body, in bytes, buffered for signature verification
    #[arg(long, env, default_value_t = 1024 * 1024)]
    pub max_body_bytes: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    pub fn new() -> Self {
        // Load .env file first
        dotenv().ok();
        // Then parse the command line parameters and flags
        Config::parse()
    }

    pub fn api_version(&self) -> &str {
        &self.api_version
    }

    pub fn signing_secret(&self) -> Option<&str> {
        self.signing_secret.as_deref()
    }

    pub fn set_signing_secret(mut self, signing_secret: String) -> Self {
        self.signing_secret = Some(signing_secret);
        self
    }

    pub fn set_with_validation(mut self, with_validation: bool) -> Self {
        self.with_validation = with_validation;
        self
    }

    /// True when validation is switched on but there is no secret to validate with.
    pub fn is_missing_signing_secret(&self) -> bool {
        self.with_validation && self.signing_secret().map_or(true, str::is_empty)
    }
}
