use tracing::{info, warn};

use crate::api::AccountClient;
use crate::models::{Session, TransactionKind};

/// Flat fee charged when a withdraw drives the balance below zero
pub const OVERDRAFT_FEE: f64 = 35.00;

/// Result of a confirmed balance mutation
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionReceipt {
    pub kind: TransactionKind,
    pub amount: f64,
    /// Balance after the transaction, including any overdraft fee
    pub new_balance: f64,
    pub overdraft_fee: Option<f64>,
}

/// Apply a confirmed transaction to the session balance.
///
/// The balance is updated locally first; the remote store is synchronized
/// in the background and never consulted for the outcome. A withdraw that
/// drives the balance negative is charged a flat fee as a second,
/// independent mutation with its own sync call.
pub fn apply_transaction(
    session: &mut Session,
    client: &AccountClient,
    kind: TransactionKind,
    amount: f64,
) -> TransactionReceipt {
    let new_balance = session.apply_delta(kind.signed(amount));
    info!(
        "New balance will be: {:.2} after {} of: {:.2}",
        new_balance,
        kind.action(),
        amount
    );

    client.sync_in_background(kind.action(), session.email(), amount);

    let mut overdraft_fee = None;
    if kind == TransactionKind::Withdraw && session.balance() < 0.0 {
        let after_fee = session.apply_delta(-OVERDRAFT_FEE);
        warn!(
            "Account overdrawn, charged a {:.2} fee; new balance will be: {:.2}",
            OVERDRAFT_FEE, after_fee
        );

        client.sync_in_background(
            TransactionKind::Withdraw.action(),
            session.email(),
            OVERDRAFT_FEE,
        );
        overdraft_fee = Some(OVERDRAFT_FEE);
    }

    TransactionReceipt {
        kind,
        amount,
        new_balance: session.balance(),
        overdraft_fee,
    }
}
