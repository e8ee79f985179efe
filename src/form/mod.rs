pub mod flow;
pub mod form_data;
pub mod validation;

pub use flow::{FetchTicket, FieldState, FormPhase, PostAdFlow, Step};
pub use form_data::{FormData, FormValue};
pub use validation::{validate, FormErrors};
