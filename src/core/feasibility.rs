use crate::domain::model::Participant;

/// Checks whether any assignment satisfies every exclusion.
///
/// Builds the bipartite graph giver -> allowed recipient and looks for a
/// perfect matching with augmenting paths. With a feasible roster the random
/// retry loop terminates with probability 1; without one it would spin forever.
pub fn has_valid_assignment(participants: &[Participant]) -> bool {
    let n = participants.len();
    if n == 0 {
        return true;
    }

    let allowed: Vec<Vec<usize>> = participants
        .iter()
        .map(|giver| {
            participants
                .iter()
                .enumerate()
                .filter(|(_, candidate)| giver.can_give_to(candidate.id))
                .map(|(idx, _)| idx)
                .collect()
        })
        .collect();

    // recipient index -> giver index
    let mut owner: Vec<Option<usize>> = vec![None; n];

    for giver in 0..n {
        let mut visited = vec![false; n];
        if !augment(giver, &allowed, &mut owner, &mut visited) {
            return false;
        }
    }

    true
}

fn augment(
    giver: usize,
    allowed: &[Vec<usize>],
    owner: &mut [Option<usize>],
    visited: &mut [bool],
) -> bool {
    for &recipient in &allowed[giver] {
        if visited[recipient] {
            continue;
        }
        visited[recipient] = true;

        let free = match owner[recipient] {
            None => true,
            Some(other) => augment(other, allowed, owner, visited),
        };
        if free {
            owner[recipient] = Some(giver);
            return true;
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_group_is_feasible() {
        let participants: Vec<Participant> = (1..=5)
            .map(|id| Participant::new(id, format!("P{}", id)))
            .collect();
        assert!(has_valid_assignment(&participants));
    }

    #[test]
    fn test_two_couples_are_feasible() {
        let participants = vec![
            Participant::new(1, "A").excluding(2),
            Participant::new(2, "B").excluding(1),
            Participant::new(3, "C").excluding(4),
            Participant::new(4, "D").excluding(3),
        ];
        assert!(has_valid_assignment(&participants));
    }

    #[test]
    fn test_three_with_cyclic_exclusions_has_one_way_out() {
        // A must give to C, B to A, C to B
        let participants = vec![
            Participant::new(1, "A").excluding(2),
            Participant::new(2, "B").excluding(3),
            Participant::new(3, "C").excluding(1),
        ];
        assert!(has_valid_assignment(&participants));
    }

    #[test]
    fn test_couple_plus_one_is_infeasible() {
        // nobody but C can receive from A or B
        let participants = vec![
            Participant::new(1, "A").excluding(2),
            Participant::new(2, "B").excluding(1),
            Participant::new(3, "C"),
        ];
        assert!(!has_valid_assignment(&participants));
    }

    #[test]
    fn test_single_participant_is_infeasible() {
        assert!(!has_valid_assignment(&[Participant::new(1, "Solo")]));
    }
}
