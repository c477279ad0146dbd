//! Sign-in request validation.

mod result;
mod validator;

pub use result::{SignInOutcome, SignInValidationResult, ValidationSummary};
pub use validator::{Freshness, SignInValidator, evaluate_freshness};
