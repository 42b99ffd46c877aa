//! Transaction kinds and their per-kind rules

/// The two supported transaction kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionKind {
    Deposit,
    Withdraw,
}

impl TransactionKind {
    /// Smallest amount the kind accepts
    pub fn minimum(&self) -> f64 {
        match self {
            TransactionKind::Deposit => 10.0,
            TransactionKind::Withdraw => 5.0,
        }
    }

    /// Sign an amount for balance arithmetic (credit or debit)
    pub fn signed(&self, amount: f64) -> f64 {
        match self {
            TransactionKind::Deposit => amount,
            TransactionKind::Withdraw => -amount,
        }
    }

    /// Route segment for the remote account endpoint
    pub fn action(&self) -> &'static str {
        match self {
            TransactionKind::Deposit => "deposit",
            TransactionKind::Withdraw => "withdraw",
        }
    }

    /// Display name used in user-facing messages
    pub fn label(&self) -> &'static str {
        match self {
            TransactionKind::Deposit => "Deposit",
            TransactionKind::Withdraw => "Withdraw",
        }
    }
}

impl std::fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
