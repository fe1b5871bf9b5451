use crate::domain::model::MatchedRoster;
use crate::domain::ports::Notifier;
use crate::utils::error::Result;
use async_trait::async_trait;
use serde::Serialize;

const TEXT_HEADER: &str = "Matchmaking results:";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Serialize)]
struct PairView<'a> {
    giver: &'a str,
    recipient: &'a str,
}

/// Prints the results instead of mailing them.
#[derive(Debug, Clone, Default)]
pub struct ConsoleNotifier {
    format: ReportFormat,
}

impl ConsoleNotifier {
    pub fn new(format: ReportFormat) -> Self {
        Self { format }
    }

    pub fn render(&self, roster: &MatchedRoster) -> Result<String> {
        match self.format {
            ReportFormat::Text => Ok(roster
                .pairs()
                .map(|(giver, recipient)| format!("{} -> {}\n", giver.name, recipient.name))
                .collect()),
            ReportFormat::Json => {
                let pairs: Vec<PairView> = roster
                    .pairs()
                    .map(|(giver, recipient)| PairView {
                        giver: &giver.name,
                        recipient: &recipient.name,
                    })
                    .collect();
                Ok(serde_json::to_string_pretty(&pairs)?)
            }
        }
    }

    /// What `notify` prints: the text report gets a header, JSON stays parseable.
    pub fn report(&self, roster: &MatchedRoster) -> Result<String> {
        let body = self.render(roster)?;
        Ok(match self.format {
            ReportFormat::Text => format!("{}\n\n{}", TEXT_HEADER, body.trim_end()),
            ReportFormat::Json => body.trim_end().to_string(),
        })
    }
}

#[async_trait]
impl Notifier for ConsoleNotifier {
    fn channel(&self) -> &'static str {
        "console"
    }

    async fn notify(&self, roster: &MatchedRoster) -> Result<usize> {
        println!("{}", self.report(roster)?);
        Ok(roster.participants.len())
    }
}
