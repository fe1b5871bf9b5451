use crate::domain::model::{MatchedRoster, OutgoingMail, Participant};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn roster_path(&self) -> &str;
    fn seed(&self) -> Option<u64>;
    fn max_attempts(&self) -> Option<u64>;
    fn check_feasibility(&self) -> bool;
    /// 寄信時每位參與者都要有 email
    fn requires_email(&self) -> bool;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<Vec<Participant>>;
    async fn transform(&self, participants: Vec<Participant>) -> Result<MatchedRoster>;
    async fn load(&self, roster: MatchedRoster) -> Result<usize>;
}

/// Tells every giver who they drew. Returns the number of givers notified.
#[async_trait]
pub trait Notifier: Send + Sync {
    fn channel(&self) -> &'static str;
    async fn notify(&self, roster: &MatchedRoster) -> Result<usize>;
}

#[async_trait]
pub trait MailTransport: Send + Sync {
    async fn send(&self, mail: OutgoingMail) -> Result<()>;
}
