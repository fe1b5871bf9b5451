use serde::{Deserialize, Serialize};

pub type ParticipantId = i64;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    pub id: ParticipantId,
    pub name: String,
    pub gender: String,
    /// 不可抽到的對象 (通常是伴侶)，只從宣告的一方檢查
    pub excluded_id: Option<ParticipantId>,
    /// 配對成功後才會寫入
    pub match_id: Option<ParticipantId>,
    pub email: Option<String>,
    pub wishlist: String,
}

impl Participant {
    pub fn new(id: ParticipantId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            gender: String::new(),
            excluded_id: None,
            match_id: None,
            email: None,
            wishlist: String::new(),
        }
    }

    pub fn excluding(mut self, excluded_id: ParticipantId) -> Self {
        self.excluded_id = Some(excluded_id);
        self
    }

    pub fn can_give_to(&self, candidate: ParticipantId) -> bool {
        candidate != self.id && Some(candidate) != self.excluded_id
    }

    /// Wishlist items, split on commas. Empty entries are dropped.
    pub fn wishlist_items(&self) -> Vec<String> {
        self.wishlist
            .split(',')
            .map(str::trim)
            .filter(|item| !item.is_empty())
            .map(str::to_string)
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    pub giver: ParticipantId,
    pub recipient: ParticipantId,
}

/// A complete assignment, one entry per giver in roster order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    assignments: Vec<Assignment>,
}

impl MatchResult {
    pub(crate) fn from_assignments(assignments: Vec<Assignment>) -> Self {
        Self { assignments }
    }

    pub fn assignments(&self) -> &[Assignment] {
        &self.assignments
    }

    pub fn len(&self) -> usize {
        self.assignments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }

    pub fn recipient_of(&self, giver: ParticipantId) -> Option<ParticipantId> {
        self.assignments
            .iter()
            .find(|a| a.giver == giver)
            .map(|a| a.recipient)
    }

    /// 把結果寫回參與者的 match_id
    pub fn apply_to(&self, participants: &mut [Participant]) {
        for participant in participants.iter_mut() {
            participant.match_id = self.recipient_of(participant.id);
        }
    }
}

/// Roster after a successful matchmaking run.
#[derive(Debug, Clone)]
pub struct MatchedRoster {
    pub participants: Vec<Participant>,
    pub result: MatchResult,
    pub attempts: u64,
}

impl MatchedRoster {
    pub fn new(mut participants: Vec<Participant>, result: MatchResult, attempts: u64) -> Self {
        result.apply_to(&mut participants);
        Self {
            participants,
            result,
            attempts,
        }
    }

    pub fn find(&self, id: ParticipantId) -> Option<&Participant> {
        self.participants.iter().find(|p| p.id == id)
    }

    /// (giver, recipient) pairs in roster order.
    pub fn pairs(&self) -> impl Iterator<Item = (&Participant, &Participant)> + '_ {
        self.participants.iter().filter_map(move |giver| {
            let recipient = giver.match_id.and_then(|id| self.find(id))?;
            Some((giver, recipient))
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingMail {
    pub to_name: String,
    pub to_address: String,
    pub subject: String,
    pub html_body: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    pub participants: usize,
    pub attempts: u64,
    pub delivered: usize,
}
