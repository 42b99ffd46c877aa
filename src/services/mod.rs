pub mod mutator;
pub mod validator;

pub use mutator::{apply_transaction, TransactionReceipt, OVERDRAFT_FEE};
pub use validator::{validate, OVERDRAFT_ADVISORY};
