pub mod engine;
pub mod feasibility;
pub mod matcher;
pub mod matchmaking;
pub mod pipeline;

pub use crate::domain::model::{
    Assignment, MatchResult, MatchedRoster, Participant, ParticipantId, RunSummary,
};
pub use crate::domain::ports::{ConfigProvider, MailTransport, Notifier, Pipeline, Storage};
pub use crate::utils::error::Result;
