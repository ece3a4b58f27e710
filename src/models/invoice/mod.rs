pub mod types;
pub mod validate;
pub mod queries;

pub use types::*;
pub use validate::parse_invoice_form;
pub use queries::*;
