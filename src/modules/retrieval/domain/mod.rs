pub mod fetch_outcome;
pub mod request;

pub use fetch_outcome::{FetchErrorKind, FetchOutcome, OutcomeError};
pub use request::{HttpRequest, HttpResponse};
