//! Legacy `key=value` config files (`mailhost=...`, `mailuser=...`).

use super::toml_config::{MailConfig, SantaConfig};
use crate::utils::error::{Result, SantaError};

pub fn parse_key_values(content: &str) -> Result<SantaConfig> {
    let content = SantaConfig::substitute_env_vars(content)?;
    let mut config = SantaConfig::default();

    let mut host = None;
    let mut username = None;
    let mut password = None;
    let mut from = None;
    let mut subject = None;
    let mut template = None;

    for (idx, raw) in content.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        // 只切第一個 '='，密碼裡可能也有 '='
        let (key, value) = line
            .split_once('=')
            .ok_or_else(|| SantaError::ConfigValidationError {
                field: format!("line {}", idx + 1),
                message: format!("expected key=value, got '{}'", line),
            })?;
        let value = value.trim().to_string();

        match key.trim() {
            "mailhost" => host = Some(value),
            "mailuser" => username = Some(value),
            "mailpass" => password = Some(value),
            "mailaddr" => from = Some(value),
            "subject" => subject = Some(value),
            "template" => template = Some(value),
            "participants" => config.roster.path = value,
            "event" => config.event.name = value,
            "seed" => {
                let seed = value
                    .parse()
                    .map_err(|_| SantaError::InvalidConfigValueError {
                        field: "seed".to_string(),
                        value: value.clone(),
                        reason: "must be an unsigned integer".to_string(),
                    })?;
                config.matching.seed = Some(seed);
            }
            other => tracing::warn!("Ignoring unknown config key '{}'", other),
        }
    }

    if let Some(host) = host {
        let from = from.ok_or_else(|| SantaError::MissingConfigError {
            field: "mailaddr".to_string(),
        })?;
        config.mail = Some(MailConfig {
            host,
            port: None,
            username,
            password,
            from,
            subject,
            template: Some(template.unwrap_or_else(|| "email.htmlt".to_string())),
        });
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_legacy_mail_keys() {
        let content = "mailhost=smtp.example.com:465
mailuser=santa
mailpass=abc=def
mailaddr=Santa <santa@example.com>
";
        let config = parse_key_values(content).unwrap();
        let mail = config.mail.unwrap();

        assert_eq!(mail.host, "smtp.example.com:465");
        assert_eq!(mail.username.as_deref(), Some("santa"));
        assert_eq!(mail.password.as_deref(), Some("abc=def"));
        assert_eq!(mail.from, "Santa <santa@example.com>");
        assert_eq!(mail.template.as_deref(), Some("email.htmlt"));
    }

    #[test]
    fn test_without_mailhost_is_console_only() {
        let config = parse_key_values("# nothing to mail\nparticipants=family.csv\nseed=9\n").unwrap();

        assert!(config.mail.is_none());
        assert_eq!(config.roster.path, "family.csv");
        assert_eq!(config.matching.seed, Some(9));
    }

    #[test]
    fn test_mailhost_without_sender_rejected() {
        let err = parse_key_values("mailhost=smtp.example.com\n").unwrap_err();
        assert!(matches!(err, SantaError::MissingConfigError { .. }));
    }

    #[test]
    fn test_line_without_equals_rejected() {
        let err = parse_key_values("mailhost\n").unwrap_err();
        assert!(matches!(err, SantaError::ConfigValidationError { .. }));
    }
}
