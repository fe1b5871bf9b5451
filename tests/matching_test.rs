use secret_santa::core::matcher::Draw;
use secret_santa::{Matcher, Matchmaker, Participant};
use std::collections::HashSet;

fn office(n: i64) -> Vec<Participant> {
    (1..=n)
        .map(|id| {
            let p = Participant::new(id, format!("Colleague {}", id));
            // pair up 1-2, 3-4, ... as couples
            if id % 2 == 1 && id < n {
                p.excluding(id + 1)
            } else if id % 2 == 0 {
                p.excluding(id - 1)
            } else {
                p
            }
        })
        .collect()
}

#[test]
fn test_large_group_with_couples() {
    let participants = office(21);

    for seed in 0..50 {
        let outcome = Matchmaker::unbounded()
            .run(&mut Matcher::new(seed), &participants)
            .unwrap();

        let mut recipients = HashSet::new();
        for p in &participants {
            let recipient = outcome.result.recipient_of(p.id).unwrap();
            assert!(p.can_give_to(recipient));
            assert!(recipients.insert(recipient));
        }
        assert_eq!(recipients.len(), participants.len());
    }
}

#[test]
fn test_different_seeds_eventually_differ() {
    let participants = office(10);
    let draws: HashSet<Vec<(i64, i64)>> = (0..20)
        .map(|seed| {
            let outcome = Matchmaker::unbounded()
                .run(&mut Matcher::new(seed), &participants)
                .unwrap();
            outcome
                .result
                .assignments()
                .iter()
                .map(|a| (a.giver, a.recipient))
                .collect()
        })
        .collect();

    assert!(draws.len() > 1);
}

/// Always draws the last pool entry.
struct LastEntry;

impl Draw for LastEntry {
    fn draw(&mut self, upper: usize) -> usize {
        upper - 1
    }
}

#[test]
fn test_custom_draw_source_pairs_from_the_back() {
    // pool [1, 2, 3, 4]: 1 takes 4, 2 takes 3, 3 takes 2, 4 takes 1
    let participants = office(4);
    let mut matcher = Matcher::with_source(LastEntry);

    let result = matcher.attempt(&participants).unwrap();
    assert_eq!(result.recipient_of(1), Some(4));
    assert_eq!(result.recipient_of(2), Some(3));
    assert_eq!(result.recipient_of(3), Some(2));
    assert_eq!(result.recipient_of(4), Some(1));
}

#[test]
fn test_custom_draw_source_abort() {
    // pool [1, 2, 3]: 1 takes 3, then 2 draws itself with two left
    let participants: Vec<Participant> = (1..=3)
        .map(|id| Participant::new(id, format!("P{}", id)))
        .collect();
    let mut matcher = Matcher::with_source(LastEntry);

    let err = matcher.attempt(&participants).unwrap_err();
    assert_eq!(err.giver, 2);
    assert_eq!(err.remaining, 2);
}
