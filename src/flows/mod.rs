pub mod controller;

pub use controller::{FlowController, FlowState};
