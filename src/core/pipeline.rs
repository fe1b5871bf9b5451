use crate::adapters::roster::parse_roster;
use crate::core::matcher::{clock_seed, Matcher};
use crate::core::matchmaking::Matchmaker;
use crate::core::{ConfigProvider, MatchedRoster, Notifier, Participant, Pipeline, Storage};
use crate::utils::error::Result;
use crate::utils::validation::validate_roster;

/// Roster file in, assignment out, one notification per giver.
pub struct SantaPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
    notifier: Box<dyn Notifier>,
}

impl<S: Storage, C: ConfigProvider> SantaPipeline<S, C> {
    pub fn new(storage: S, config: C, notifier: Box<dyn Notifier>) -> Self {
        Self {
            storage,
            config,
            notifier,
        }
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for SantaPipeline<S, C> {
    async fn extract(&self) -> Result<Vec<Participant>> {
        tracing::debug!("Loading participants from: {}", self.config.roster_path());
        let data = self.storage.read_file(self.config.roster_path()).await?;
        let participants = parse_roster(&data)?;

        validate_roster(
            &participants,
            self.config.requires_email(),
            self.config.check_feasibility(),
        )?;

        Ok(participants)
    }

    async fn transform(&self, participants: Vec<Participant>) -> Result<MatchedRoster> {
        let seed = self.config.seed().unwrap_or_else(clock_seed);
        // 記下種子，需要時可以用 --seed 重現同一次抽籤
        tracing::info!(
            "🎲 Matching {} participants (seed {})",
            participants.len(),
            seed
        );

        let mut matcher = Matcher::new(seed);
        let outcome = Matchmaker::with_max_attempts(self.config.max_attempts())
            .run(&mut matcher, &participants)?;

        Ok(MatchedRoster::new(
            participants,
            outcome.result,
            outcome.attempts,
        ))
    }

    async fn load(&self, roster: MatchedRoster) -> Result<usize> {
        tracing::debug!("Delivering results via {}", self.notifier.channel());
        self.notifier.notify(&roster).await
    }
}
