use crate::core::{Pipeline, RunSummary};
use crate::utils::error::Result;

pub struct SantaEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> SantaEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub async fn run(&self) -> Result<RunSummary> {
        tracing::info!("📋 Loading participants...");
        let participants = self.pipeline.extract().await?;
        tracing::info!("Loaded {} participants", participants.len());

        tracing::info!("🎁 Attempting matchmaking...");
        let roster = self.pipeline.transform(participants).await?;
        let participants = roster.participants.len();
        let attempts = roster.attempts;

        tracing::info!("📨 Delivering results...");
        let delivered = self.pipeline.load(roster).await?;

        Ok(RunSummary {
            participants,
            attempts,
            delivered,
        })
    }
}
