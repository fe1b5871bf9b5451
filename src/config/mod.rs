pub mod key_value;
pub mod toml_config;

pub use toml_config::{MailConfig, SantaConfig};

#[cfg(feature = "cli")]
use crate::adapters::console::ReportFormat;
#[cfg(feature = "cli")]
use clap::Parser;

/// Config file read when `--config` is not given.
pub const DEFAULT_CONFIG: &str = "santa.toml";

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "secret-santa")]
#[command(about = "Draw Secret Santa pairs and tell every participant who they got")]
pub struct CliConfig {
    /// Config file (`.toml`, anything else is read as key=value lines) [default: santa.toml]
    #[arg(short, long)]
    pub config: Option<String>,

    /// Override the participant file from the config
    #[arg(long)]
    pub participants: Option<String>,

    /// Fixed random seed, for a reproducible draw
    #[arg(long)]
    pub seed: Option<u64>,

    /// Give up after this many failed attempts
    #[arg(long)]
    pub max_attempts: Option<u64>,

    /// Print the results even when mail is configured
    #[arg(long)]
    pub dry_run: bool,

    #[arg(long, value_enum, default_value_t = ReportFormat::Text)]
    pub format: ReportFormat,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long)]
    pub log_json: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    pub fn config_path(&self) -> &str {
        self.config.as_deref().unwrap_or(DEFAULT_CONFIG)
    }

    /// 只有沒指定 `--config` 時，缺檔才能退回預設值
    pub fn config_is_implicit(&self) -> bool {
        self.config.is_none()
    }

    /// 把命令列參數蓋到設定檔上
    pub fn apply_overrides(&self, config: &mut SantaConfig) {
        if let Some(path) = &self.participants {
            config.roster.path = path.clone();
            tracing::info!("🔧 Participant file overridden to: {}", path);
        }
        if let Some(seed) = self.seed {
            config.matching.seed = Some(seed);
            tracing::info!("🔧 Seed overridden to: {}", seed);
        }
        if let Some(max_attempts) = self.max_attempts {
            config.matching.max_attempts = Some(max_attempts);
            tracing::info!("🔧 Max attempts overridden to: {}", max_attempts);
        }
        if self.dry_run && config.mail.take().is_some() {
            tracing::info!("🔍 DRY RUN MODE - results are printed, no mail is sent");
        }
    }
}
