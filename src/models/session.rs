//! Session context models

use std::time::Duration;

/// The active user's session: store key, balance and UI timing settings.
///
/// The balance field is private: flows read it through `balance()` and
/// every mutation goes through `apply_delta()`, so the session stays the
/// single writer of its own state.
#[derive(Debug, Clone)]
pub struct Session {
    email: String,
    balance: f64,
    alert_timeout: Duration,
}

impl Session {
    pub fn new(email: impl Into<String>, starting_balance: f64, alert_timeout: Duration) -> Self {
        Session {
            email: email.into(),
            balance: starting_balance,
            alert_timeout,
        }
    }

    /// Store key for the remote account endpoint
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Current balance
    pub fn balance(&self) -> f64 {
        self.balance
    }

    /// How long the surface keeps a validation message visible
    pub fn alert_timeout(&self) -> Duration {
        self.alert_timeout
    }

    /// Apply a signed delta to the balance and return the new balance.
    /// The only mutation path into the session.
    pub fn apply_delta(&mut self, delta: f64) -> f64 {
        self.balance += delta;
        self.balance
    }
}
