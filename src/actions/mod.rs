//! Form actions for the invoice dashboard.
//!
//! Each action runs validate → persist → revalidate → respond against
//! injected collaborators, so the same code serves the HTTP handlers and
//! tests with in-memory stand-ins.

pub mod invoice;
pub mod login;

use chrono::{NaiveDate, Utc};
use serde::Serialize;

use crate::cache::Revalidate;
use crate::models::invoice::{FieldErrors, InvoiceStore, ValidationMode};

pub use invoice::{create_invoice, delete_invoice, update_invoice};
pub use login::{LoginOutcome, authenticate};

/// Invoice list page; revalidated after every write and the redirect target
/// of create/update.
pub const INVOICES_PATH: &str = "/dashboard/invoices";

/// State handed back to the form for re-rendering.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FormState {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<FieldErrors>,
}

impl FormState {
    pub fn message(message: impl Into<String>) -> Self {
        Self { message: Some(message.into()), errors: None }
    }
}

/// What the caller should do once an action finishes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome {
    /// Stay on the form and show this state.
    Respond(FormState),
    /// Navigate away; nothing else is returned.
    Redirect(&'static str),
}

/// Collaborators and settings shared by the invoice actions.
pub struct ActionContext<'a> {
    pub store: &'a dyn InvoiceStore,
    pub cache: &'a dyn Revalidate,
    pub mode: ValidationMode,
    /// Creation date stamped on new invoices.
    pub today: NaiveDate,
}

impl<'a> ActionContext<'a> {
    pub fn new(store: &'a dyn InvoiceStore, cache: &'a dyn Revalidate, mode: ValidationMode) -> Self {
        Self { store, cache, mode, today: Utc::now().date_naive() }
    }

    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = today;
        self
    }
}
