use crate::domain::model::{Assignment, MatchResult, Participant, ParticipantId};
use rand::{rngs::StdRng, Rng, SeedableRng};
use thiserror::Error;

/// A rejected draw with this many or fewer candidates left abandons the attempt.
pub const ABORT_POOL_THRESHOLD: usize = 2;

/// The random search degenerated and the whole attempt has to be thrown away.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("ran out of candidates for participant {giver} ({remaining} left in the pool)")]
pub struct AttemptExhausted {
    pub giver: ParticipantId,
    pub remaining: usize,
}

/// Source of uniformly random pool indices.
pub trait Draw {
    /// Returns an index in `0..upper`. `upper` is never zero.
    fn draw(&mut self, upper: usize) -> usize;
}

impl Draw for StdRng {
    fn draw(&mut self, upper: usize) -> usize {
        self.random_range(0..upper)
    }
}

/// Greedy randomized matcher.
///
/// Givers pick in roster order from a shrinking pool of recipients. The random
/// source lives as long as the matcher, so every retry sees fresh draws and a
/// fixed seed reproduces a whole run.
#[derive(Debug, Clone)]
pub struct Matcher<R: Draw = StdRng> {
    source: R,
}

impl Matcher<StdRng> {
    pub fn new(seed: u64) -> Self {
        Self {
            source: StdRng::seed_from_u64(seed),
        }
    }

    /// 以目前時間作為種子
    pub fn from_clock() -> Self {
        Self::new(clock_seed())
    }
}

pub fn clock_seed() -> u64 {
    let now = chrono::Utc::now();
    now.timestamp_nanos_opt()
        .unwrap_or_else(|| now.timestamp_micros()) as u64
}

impl<R: Draw> Matcher<R> {
    pub fn with_source(source: R) -> Self {
        Self { source }
    }

    /// Runs one matching attempt.
    ///
    /// Assignments are collected in a scratch buffer, so an aborted attempt
    /// leaves nothing behind for the caller.
    pub fn attempt(
        &mut self,
        participants: &[Participant],
    ) -> std::result::Result<MatchResult, AttemptExhausted> {
        let mut pool: Vec<ParticipantId> = participants.iter().map(|p| p.id).collect();
        let mut assignments = Vec::with_capacity(participants.len());

        for giver in participants {
            // pool 長度恆等於還沒抽的人數，所以這裡不會是空的
            loop {
                let idx = self.source.draw(pool.len());
                let candidate = pool[idx];

                if giver.can_give_to(candidate) {
                    assignments.push(Assignment {
                        giver: giver.id,
                        recipient: candidate,
                    });
                    pool.swap_remove(idx);
                    break;
                }

                if pool.len() <= ABORT_POOL_THRESHOLD {
                    return Err(AttemptExhausted {
                        giver: giver.id,
                        remaining: pool.len(),
                    });
                }
            }
        }

        Ok(MatchResult::from_assignments(assignments))
    }
}
