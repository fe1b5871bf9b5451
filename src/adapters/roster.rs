use crate::domain::model::{Participant, ParticipantId};
use crate::utils::error::{Result, SantaError};

/// Parses the participant CSV.
///
/// No header row. Columns: `id, name, gender, excluded_id, email, wishlist`.
/// Lines starting with `#` are comments. `excluded_id` empty or `0` means no
/// exclusion; `email` and `wishlist` may be left out.
pub fn parse_roster(data: &[u8]) -> Result<Vec<Participant>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .comment(Some(b'#'))
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(data);

    let mut participants = Vec::new();
    for record in reader.records() {
        let record = record?;
        let line = record.position().map(|p| p.line()).unwrap_or(0);

        if record.iter().all(str::is_empty) {
            continue;
        }

        let id = parse_id(field(&record, 0), line, "id")?;
        if id <= 0 {
            return Err(SantaError::RosterError {
                line,
                message: format!("id must be positive, got {}", id),
            });
        }

        let name = field(&record, 1);
        if name.is_empty() {
            return Err(SantaError::RosterError {
                line,
                message: "name is empty".to_string(),
            });
        }

        let excluded_id = match field(&record, 3) {
            "" | "0" => None,
            raw => Some(parse_id(raw, line, "excluded_id")?),
        };

        let email = Some(field(&record, 4))
            .filter(|e| !e.is_empty())
            .map(str::to_string);

        participants.push(Participant {
            id,
            name: name.to_string(),
            gender: field(&record, 2).to_string(),
            excluded_id,
            match_id: None,
            email,
            wishlist: field(&record, 5).to_string(),
        });
    }

    tracing::debug!("Parsed {} participants", participants.len());
    Ok(participants)
}

fn field(record: &csv::StringRecord, idx: usize) -> &str {
    record.get(idx).unwrap_or("")
}

fn parse_id(raw: &str, line: u64, column: &str) -> Result<ParticipantId> {
    raw.parse().map_err(|_| SantaError::RosterError {
        line,
        message: format!("{} '{}' is not a number", column, raw),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_records() {
        let data = b"# id,name,gender,spouse,email,wishlist
1,Alice,Female,2,alice@example.com,\"socks, tea\"
2,Bob,Male,1,bob@example.com,
3,Carol,Female,0,carol@example.com,books
";
        let participants = parse_roster(data).unwrap();

        assert_eq!(participants.len(), 3);
        assert_eq!(participants[0].excluded_id, Some(2));
        assert_eq!(participants[0].wishlist, "socks, tea");
        assert_eq!(participants[1].email.as_deref(), Some("bob@example.com"));
        assert_eq!(participants[1].wishlist, "");
        assert_eq!(participants[2].excluded_id, None);
        assert!(participants.iter().all(|p| p.match_id.is_none()));
    }

    #[test]
    fn test_short_records_and_whitespace() {
        let data = b" 7 , Dora , Female\n8,Eli,Male,\n";
        let participants = parse_roster(data).unwrap();

        assert_eq!(participants[0].id, 7);
        assert_eq!(participants[0].name, "Dora");
        assert_eq!(participants[0].excluded_id, None);
        assert_eq!(participants[0].email, None);
        assert_eq!(participants[1].excluded_id, None);
    }

    #[test]
    fn test_bad_id_reports_line() {
        let data = b"1,Alice,Female\nx,Bob,Male\n";
        let err = parse_roster(data).unwrap_err();

        match err {
            SantaError::RosterError { line, message } => {
                assert_eq!(line, 2);
                assert!(message.contains("'x'"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_negative_id_rejected() {
        let err = parse_roster(b"-3,Alice,Female\n").unwrap_err();
        assert!(matches!(err, SantaError::RosterError { line: 1, .. }));
    }

    #[test]
    fn test_bad_exclusion_rejected() {
        let err = parse_roster(b"1,Alice,Female,bob\n").unwrap_err();
        assert!(matches!(err, SantaError::RosterError { .. }));
    }
}
