pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{
    console::{ConsoleNotifier, ReportFormat},
    mail::{MailNotifier, SmtpMailer},
    storage::LocalStorage,
    template::EmailTemplate,
};
pub use config::SantaConfig;
pub use core::{
    engine::SantaEngine,
    matcher::{AttemptExhausted, Matcher},
    matchmaking::{MatchOutcome, Matchmaker},
    pipeline::SantaPipeline,
};
pub use domain::model::{MatchResult, MatchedRoster, Participant, RunSummary};
pub use utils::error::{Result, SantaError};
