use crate::domain::ports::ConfigProvider;
use crate::utils::error::{Result, SantaError};
use crate::utils::validation::{self, Validate};
use chrono::Datelike;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_EVENT_NAME: &str = "Secret Santa";
pub const DEFAULT_ROSTER_PATH: &str = "participants.csv";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SantaConfig {
    #[serde(default)]
    pub event: EventConfig,
    #[serde(default)]
    pub roster: RosterConfig,
    #[serde(default)]
    pub matching: MatchingConfig,
    /// 沒有 [mail] 就只把結果印出來
    pub mail: Option<MailConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventConfig {
    #[serde(default = "default_event_name")]
    pub name: String,
}

impl Default for EventConfig {
    fn default() -> Self {
        Self {
            name: default_event_name(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterConfig {
    #[serde(default = "default_roster_path")]
    pub path: String,
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self {
            path: default_roster_path(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MatchingConfig {
    pub seed: Option<u64>,
    pub max_attempts: Option<u64>,
    pub check_feasibility: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MailConfig {
    pub host: String,
    pub port: Option<u16>,
    pub username: Option<String>,
    pub password: Option<String>,
    /// e.g. `Santa Claus <santa@example.com>`
    pub from: String,
    pub subject: Option<String>,
    /// Template file, relative to the config file.
    pub template: Option<String>,
}

fn default_event_name() -> String {
    DEFAULT_EVENT_NAME.to_string()
}

fn default_roster_path() -> String {
    DEFAULT_ROSTER_PATH.to_string()
}

impl SantaConfig {
    /// 從檔案載入配置，`.toml` 以外的副檔名當成舊式 key=value 格式
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(SantaError::IoError)?;

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => Self::from_toml_str(&content),
            _ => super::key_value::parse_key_values(&content),
        }
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| SantaError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${SMTP_PASSWORD})
    pub(crate) fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| SantaError::ConfigValidationError {
            field: "environment".to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        validation::validate_non_empty_string("event.name", &self.event.name)?;
        validation::validate_path("roster.path", &self.roster.path)?;

        if let Some(max_attempts) = self.matching.max_attempts {
            validation::validate_positive_number("matching.max_attempts", max_attempts, 1)?;
        }

        if let Some(mail) = &self.mail {
            validation::validate_non_empty_string("mail.host", &mail.host)?;
            validation::validate_email_address("mail.from", &mail.from)?;
            if let Some(template) = &mail.template {
                validation::validate_path("mail.template", template)?;
            }
            if let Some(password) = &mail.password {
                validation::validate_no_placeholder("mail.password", password)?;
            }
            if let Some(username) = &mail.username {
                validation::validate_no_placeholder("mail.username", username)?;
            }
        }

        Ok(())
    }

    pub fn mail_enabled(&self) -> bool {
        self.mail.is_some()
    }

    /// 信件主旨，預設為「活動名稱 + 今年年份」
    pub fn mail_subject(&self) -> String {
        self.mail
            .as_ref()
            .and_then(|m| m.subject.clone())
            .unwrap_or_else(|| format!("{} {}", self.event.name, chrono::Local::now().year()))
    }
}

impl ConfigProvider for SantaConfig {
    fn roster_path(&self) -> &str {
        &self.roster.path
    }

    fn seed(&self) -> Option<u64> {
        self.matching.seed
    }

    fn max_attempts(&self) -> Option<u64> {
        self.matching.max_attempts
    }

    fn check_feasibility(&self) -> bool {
        self.matching.check_feasibility.unwrap_or(true)
    }

    fn requires_email(&self) -> bool {
        self.mail_enabled()
    }
}

impl Validate for SantaConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
