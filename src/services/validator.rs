use crate::models::{InputError, Session, TransactionKind, ValidationOutcome};

/// Advisory shown when a withdraw exceeds the current balance. The
/// transaction still goes through; the overdraft fee is charged on apply.
pub const OVERDRAFT_ADVISORY: &str = "OVERDRAFT: Withdraw is more than your balance.";

/// Validate a raw amount field against a transaction kind.
///
/// The field must be present, numeric, non-negative and at or above the
/// kind's minimum. A withdraw larger than the current balance is still
/// accepted, with an overdraft advisory for the surface to display.
pub fn validate(raw: &str, kind: TransactionKind, session: &Session) -> ValidationOutcome {
    let field = raw.trim();

    if field.is_empty() {
        return ValidationOutcome::rejected(kind, InputError::Required);
    }

    let amount: f64 = match field.parse() {
        Ok(amount) => amount,
        Err(_) => return ValidationOutcome::rejected(kind, InputError::NotANumber),
    };

    // "NaN" and "inf" parse as floats but are not usable amounts
    if !amount.is_finite() {
        return ValidationOutcome::rejected(kind, InputError::NotANumber);
    }

    if amount < 0.0 {
        return ValidationOutcome::rejected(kind, InputError::Negative);
    }

    if amount < kind.minimum() {
        return ValidationOutcome::rejected(kind, InputError::BelowMinimum);
    }

    if kind == TransactionKind::Withdraw && amount > session.balance() {
        return ValidationOutcome::advisory(amount, OVERDRAFT_ADVISORY);
    }

    ValidationOutcome::accepted(amount)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::time::Duration;

    fn session(balance: f64) -> Session {
        Session::new("user@example.com", balance, Duration::from_millis(5000))
    }

    #[rstest]
    #[case(TransactionKind::Deposit, "", InputError::Required, "Error: deposit is required")]
    #[case(TransactionKind::Withdraw, "   ", InputError::Required, "Error: withdraw is required")]
    #[case(TransactionKind::Deposit, "abc", InputError::NotANumber, "Error NaN: Deposit must be a number.")]
    #[case(TransactionKind::Deposit, "12.3.4", InputError::NotANumber, "Error NaN: Deposit must be a number.")]
    #[case(TransactionKind::Withdraw, "NaN", InputError::NotANumber, "Error NaN: Withdraw must be a number.")]
    #[case(TransactionKind::Withdraw, "inf", InputError::NotANumber, "Error NaN: Withdraw must be a number.")]
    #[case(TransactionKind::Deposit, "-1", InputError::Negative, "Error: Deposit cannot be negative.")]
    #[case(TransactionKind::Withdraw, "-0.5", InputError::Negative, "Error: Withdraw cannot be negative.")]
    #[case(TransactionKind::Deposit, "5", InputError::BelowMinimum, "Error: Deposit is less than minimum.")]
    #[case(TransactionKind::Deposit, "9.99", InputError::BelowMinimum, "Error: Deposit is less than minimum.")]
    #[case(TransactionKind::Withdraw, "4.99", InputError::BelowMinimum, "Error: Withdraw is less than minimum.")]
    fn rejects_bad_input(
        #[case] kind: TransactionKind,
        #[case] raw: &str,
        #[case] error: InputError,
        #[case] message: &str,
    ) {
        let outcome = validate(raw, kind, &session(100.0));

        assert!(!outcome.valid);
        assert_eq!(outcome.error, Some(error));
        assert_eq!(outcome.message.as_deref(), Some(message));
        assert_eq!(outcome.amount, None);
    }

    #[rstest]
    #[case(TransactionKind::Deposit, "10", 10.0)]
    #[case(TransactionKind::Deposit, "50", 50.0)]
    #[case(TransactionKind::Withdraw, "5", 5.0)]
    #[case(TransactionKind::Withdraw, "25.50", 25.5)]
    fn accepts_amounts_at_or_above_minimum(
        #[case] kind: TransactionKind,
        #[case] raw: &str,
        #[case] amount: f64,
    ) {
        let outcome = validate(raw, kind, &session(100.0));

        assert!(outcome.valid);
        assert_eq!(outcome.error, None);
        assert_eq!(outcome.message, None);
        assert_eq!(outcome.amount, Some(amount));
    }

    #[test]
    fn withdraw_above_balance_is_an_advisory_not_a_rejection() {
        let outcome = validate("25", TransactionKind::Withdraw, &session(20.0));

        assert!(outcome.valid);
        assert_eq!(outcome.message.as_deref(), Some(OVERDRAFT_ADVISORY));
        assert_eq!(outcome.amount, Some(25.0));
    }

    #[test]
    fn withdraw_of_exactly_the_balance_carries_no_advisory() {
        let outcome = validate("20", TransactionKind::Withdraw, &session(20.0));

        assert!(outcome.valid);
        assert_eq!(outcome.message, None);
    }

    #[test]
    fn deposit_above_balance_never_advisories() {
        let outcome = validate("500", TransactionKind::Deposit, &session(20.0));

        assert!(outcome.valid);
        assert_eq!(outcome.message, None);
    }

    #[test]
    fn validation_is_idempotent() {
        let session = session(20.0);
        let first = validate("25", TransactionKind::Withdraw, &session);
        let second = validate("25", TransactionKind::Withdraw, &session);

        assert_eq!(first, second);
    }
}
