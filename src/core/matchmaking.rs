use crate::core::matcher::{Draw, Matcher};
use crate::domain::model::{MatchResult, Participant};
use crate::utils::error::{Result, SantaError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchOutcome {
    pub result: MatchResult,
    pub attempts: u64,
}

/// Retries matcher attempts from scratch until one succeeds.
#[derive(Debug, Clone, Copy, Default)]
pub struct Matchmaker {
    max_attempts: Option<u64>,
}

impl Matchmaker {
    /// 不設上限，一直重試到成功為止
    pub fn unbounded() -> Self {
        Self { max_attempts: None }
    }

    pub fn with_max_attempts(max_attempts: Option<u64>) -> Self {
        Self { max_attempts }
    }

    pub fn run<R: Draw>(
        &self,
        matcher: &mut Matcher<R>,
        participants: &[Participant],
    ) -> Result<MatchOutcome> {
        let mut attempts = 0u64;

        loop {
            attempts += 1;
            tracing::debug!("🎲 Attempting matchmaking (attempt {})", attempts);

            match matcher.attempt(participants) {
                Ok(result) => {
                    tracing::info!("✅ Matchmaking successful after {} attempt(s)", attempts);
                    return Ok(MatchOutcome { result, attempts });
                }
                Err(exhausted) => {
                    tracing::debug!("Attempt {} abandoned: {}, starting over", attempts, exhausted);
                }
            }

            if let Some(max) = self.max_attempts {
                if attempts >= max {
                    tracing::warn!("⚠️ Giving up after {} attempts", attempts);
                    return Err(SantaError::RetryLimitReached { attempts });
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::matcher::tests::{roster, ScriptedDraws};

    #[test]
    fn test_abort_is_retried_not_raised() {
        let participants = roster(&[1, 2, 3]);
        // attempt 1: 1 -> 2, 2 -> 1, 3 stuck with itself
        // attempt 2: 1 -> 3 leaving [1, 2]; 2 -> 1; 3 -> 2
        let draws = ScriptedDraws::new(&[1, 0, 0, 2, 0, 0]);
        let mut matcher = Matcher::with_source(draws);

        let outcome = Matchmaker::unbounded().run(&mut matcher, &participants).unwrap();

        assert_eq!(outcome.attempts, 2);
        assert_eq!(outcome.result.recipient_of(1), Some(3));
        assert_eq!(outcome.result.recipient_of(2), Some(1));
        assert_eq!(outcome.result.recipient_of(3), Some(2));
    }

    #[test]
    fn test_retry_limit_reached() {
        let participants = roster(&[1, 2, 3]);
        // both attempts end with 3 drawing itself
        let draws = ScriptedDraws::new(&[1, 0, 0, 1, 0, 0]);
        let mut matcher = Matcher::with_source(draws);

        let err = Matchmaker::with_max_attempts(Some(2))
            .run(&mut matcher, &participants)
            .unwrap_err();

        assert!(matches!(err, SantaError::RetryLimitReached { attempts: 2 }));
    }

    #[test]
    fn test_seeded_runs_are_reproducible() {
        let participants = roster(&[10, 20, 30, 40, 50]);

        let first = Matchmaker::unbounded()
            .run(&mut Matcher::new(2024), &participants)
            .unwrap();
        let second = Matchmaker::unbounded()
            .run(&mut Matcher::new(2024), &participants)
            .unwrap();

        assert_eq!(first, second);
    }
}
