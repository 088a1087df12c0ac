use std::time::Duration;
use tokio::time::Instant;

/// Single-shot auto-advance deadline
///
/// At most one deadline is pending at a time; scheduling replaces it and
/// dropping the timer cancels it.
#[derive(Debug)]
pub struct AutoAdvance {
    delay: Duration,
    deadline: Option<Instant>,
}

impl AutoAdvance {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            deadline: None,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    /// Start a fresh delay from now, replacing any pending one
    pub fn schedule(&mut self) {
        self.deadline = Some(Instant::now() + self.delay);
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    /// Wait for the pending deadline and disarm
    ///
    /// Never resolves while disarmed. Cancel-safe: dropping the future before
    /// it completes leaves the deadline in place.
    pub async fn expired(&mut self) {
        match self.deadline {
            Some(deadline) => {
                tokio::time::sleep_until(deadline).await;
                self.deadline = None;
            }
            None => std::future::pending::<()>().await,
        }
    }
}
