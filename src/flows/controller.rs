use tracing::{debug, info};

use crate::api::AccountClient;
use crate::models::{Session, TransactionKind};
use crate::services::mutator::{self, TransactionReceipt};
use crate::services::validator;

/// Non-blocking stand-in for the overdraft fee dialog, drained by the surface
const OVERDRAFT_NOTICE: &str =
    "You have OVERDRAWN your Account, you were charged an additional $35 fee.";

/// Where a flow currently is in its submit cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowState {
    AwaitingInput,
    Completed,
}

/// Drives one transaction form: validation on every field change, balance
/// mutation on submit, and the awaiting/completed cycle the surface renders.
///
/// The session is owned by the surface and lent per trigger, so one
/// controller per kind can share it without any locking.
#[derive(Debug)]
pub struct FlowController {
    kind: TransactionKind,
    state: FlowState,
    field: String,
    status: Option<String>,
    submit_enabled: bool,
    notices: Vec<String>,
}

impl FlowController {
    pub fn new(kind: TransactionKind) -> Self {
        FlowController {
            kind,
            state: FlowState::AwaitingInput,
            field: String::new(),
            status: None,
            submit_enabled: false,
            notices: Vec::new(),
        }
    }

    pub fn kind(&self) -> TransactionKind {
        self.kind
    }

    pub fn state(&self) -> FlowState {
        self.state
    }

    /// Raw field value as typed
    pub fn field(&self) -> &str {
        &self.field
    }

    /// Current rejection or advisory message, if any
    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn submit_enabled(&self) -> bool {
        self.submit_enabled
    }

    /// Drop the transient status message. The surface calls this once the
    /// session's alert timeout has elapsed (or after it has shown the
    /// message, for one-shot surfaces).
    pub fn clear_status(&mut self) {
        self.status = None;
    }

    /// Pending notifications for the surface, drained on read
    pub fn drain_notices(&mut self) -> Vec<String> {
        std::mem::take(&mut self.notices)
    }

    /// Re-validate on every keystroke, updating the status message and the
    /// submit-enabled flag
    pub fn field_changed(&mut self, session: &Session, raw: &str) {
        self.field = raw.to_string();

        let outcome = validator::validate(&self.field, self.kind, session);
        self.submit_enabled = outcome.valid;
        self.status = outcome.message;
    }

    /// Confirm the current field value. Validation is re-run at submit
    /// time; a failing field leaves the flow awaiting input with nothing
    /// performed.
    pub fn submit(
        &mut self,
        session: &mut Session,
        client: &AccountClient,
    ) -> Option<TransactionReceipt> {
        if self.state == FlowState::Completed {
            debug!("{} flow already completed, ignoring submit", self.kind);
            return None;
        }

        info!("Making {}: {}", self.kind, self.field);

        self.submit_enabled = false;

        let outcome = validator::validate(&self.field, self.kind, session);
        let amount = match outcome.amount {
            Some(amount) if outcome.valid && amount >= self.kind.minimum() => amount,
            _ => {
                debug!(
                    "Account {}: failed validation, no {} performed",
                    self.kind.action(),
                    self.kind
                );
                self.status = outcome.message;
                return None;
            }
        };

        self.submit_enabled = true;
        // Keeps the overdraft advisory visible through the completed view
        self.status = outcome.message;

        let receipt = mutator::apply_transaction(session, client, self.kind, amount);
        if receipt.overdraft_fee.is_some() {
            self.notices.push(OVERDRAFT_NOTICE.to_string());
        }

        self.state = FlowState::Completed;
        Some(receipt)
    }

    /// "Make another transaction": clear the field and await input again
    pub fn reset(&mut self) {
        self.field.clear();
        self.status = None;
        self.submit_enabled = false;
        self.state = FlowState::AwaitingInput;
    }
}
