//! Shared test infrastructure for action and HTTP tests.
//!
//! Provides in-memory stand-ins for every collaborator so no database is
//! needed:
//! - `MemoryStore` - `InvoiceStore` over a `Vec`, with fault injection
//! - `RecordingCache` - `Revalidate` that remembers every path
//! - `ScriptedAuthenticator` - `Authenticator` returning a canned result
#![allow(dead_code)]

use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use async_trait::async_trait;
use chrono::NaiveDate;
use uuid::Uuid;

use invoice_desk::auth::{Authenticator, Principal, SignInError};
use invoice_desk::cache::Revalidate;
use invoice_desk::form::FormData;
use invoice_desk::models::invoice::{
    InvoiceChanges, InvoiceListItem, InvoiceStatus, InvoiceStore, NewInvoice, PersistenceError,
};

// ============================================================================
// TEST CONSTANTS
// ============================================================================

pub const CUSTOMER_ID: &str = "3958dc9e-712f-4377-85e9-fec4b6a6442a";
pub const OTHER_CUSTOMER_ID: &str = "d6e15727-9fe1-4961-8c5b-ea44a9bd81aa";
pub const USER_EMAIL: &str = "user@nextmail.com";

pub fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 1).expect("valid date")
}

pub fn form(pairs: &[(&str, &str)]) -> FormData {
    pairs.iter().copied().collect()
}

// ============================================================================
// INVOICE STORE
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct StoredInvoice {
    pub id: String,
    pub customer_id: String,
    pub amount_cents: i64,
    pub status: InvoiceStatus,
    pub date: NaiveDate,
}

/// In-memory `InvoiceStore`. Set `fail` to make every call return a driver
/// fault; `calls` counts statements issued, successful or not.
#[derive(Default)]
pub struct MemoryStore {
    pub rows: Mutex<Vec<StoredInvoice>>,
    pub fail: AtomicBool,
    pub calls: AtomicUsize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        let store = Self::default();
        store.fail.store(true, Ordering::SeqCst);
        store
    }

    /// Insert a row directly, bypassing the statement counter.
    pub fn seed(&self, customer_id: &str, amount_cents: i64, status: InvoiceStatus, date: NaiveDate) -> String {
        let id = Uuid::new_v4().to_string();
        self.rows.lock().unwrap().push(StoredInvoice {
            id: id.clone(),
            customer_id: customer_id.to_string(),
            amount_cents,
            status,
            date,
        });
        id
    }

    pub fn rows(&self) -> Vec<StoredInvoice> {
        self.rows.lock().unwrap().clone()
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn statement(&self) -> Result<(), PersistenceError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail.load(Ordering::SeqCst) {
            return Err(PersistenceError::Db(sqlx::Error::PoolTimedOut));
        }
        Ok(())
    }
}

#[async_trait]
impl InvoiceStore for MemoryStore {
    async fn insert_invoice(&self, invoice: &NewInvoice) -> Result<String, PersistenceError> {
        self.statement()?;
        let id = Uuid::new_v4().to_string();
        self.rows.lock().unwrap().push(StoredInvoice {
            id: id.clone(),
            customer_id: invoice.customer_id.clone(),
            amount_cents: invoice.amount_cents,
            status: invoice.status,
            date: invoice.date,
        });
        Ok(id)
    }

    async fn update_invoice(&self, id: &str, changes: &InvoiceChanges) -> Result<(), PersistenceError> {
        self.statement()?;
        let mut rows = self.rows.lock().unwrap();
        if let Some(row) = rows.iter_mut().find(|r| r.id == id) {
            row.customer_id = changes.customer_id.clone();
            row.amount_cents = changes.amount_cents;
            row.status = changes.status;
        }
        Ok(())
    }

    async fn delete_invoice(&self, id: &str) -> Result<(), PersistenceError> {
        self.statement()?;
        self.rows.lock().unwrap().retain(|r| r.id != id);
        Ok(())
    }

    async fn list_invoices(&self) -> Result<Vec<InvoiceListItem>, PersistenceError> {
        self.statement()?;
        let mut rows = self.rows();
        rows.sort_by(|a, b| b.date.cmp(&a.date).then_with(|| a.id.cmp(&b.id)));
        Ok(rows
            .into_iter()
            .map(|r| InvoiceListItem {
                id: r.id,
                customer_name: format!("Customer {}", r.customer_id.chars().take(8).collect::<String>()),
                customer_id: r.customer_id,
                amount_cents: r.amount_cents,
                status: r.status.to_string(),
                date: r.date.to_string(),
            })
            .collect())
    }
}

// ============================================================================
// CACHE
// ============================================================================

#[derive(Default)]
pub struct RecordingCache {
    pub paths: Mutex<Vec<String>>,
}

impl RecordingCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn paths(&self) -> Vec<String> {
        self.paths.lock().unwrap().clone()
    }
}

impl Revalidate for RecordingCache {
    fn revalidate_path(&self, path: &str) {
        self.paths.lock().unwrap().push(path.to_string());
    }
}

// ============================================================================
// AUTHENTICATOR
// ============================================================================

type SignInFn = dyn Fn(&FormData) -> Result<Principal, SignInError> + Send + Sync;

/// `Authenticator` that answers with a closure and records what it was given.
pub struct ScriptedAuthenticator {
    respond: Box<SignInFn>,
    pub seen: Mutex<Vec<(String, FormData)>>,
}

impl ScriptedAuthenticator {
    pub fn new<F>(respond: F) -> Self
    where
        F: Fn(&FormData) -> Result<Principal, SignInError> + Send + Sync + 'static,
    {
        Self { respond: Box::new(respond), seen: Mutex::new(Vec::new()) }
    }

    /// Accepts only `USER_EMAIL` / `123456`.
    pub fn single_user() -> Self {
        use invoice_desk::auth::{AuthError, AuthErrorKind};

        Self::new(|form| {
            if form.get("email") == Some(USER_EMAIL) && form.get("password") == Some("123456") {
                Ok(Principal { user_id: Uuid::nil(), email: USER_EMAIL.to_string() })
            } else {
                Err(AuthError::new(AuthErrorKind::CredentialsSignin, "bad login").into())
            }
        })
    }

    pub fn seen(&self) -> Vec<(String, FormData)> {
        self.seen.lock().unwrap().clone()
    }
}

#[async_trait]
impl Authenticator for ScriptedAuthenticator {
    async fn sign_in(&self, provider: &str, form: &FormData) -> Result<Principal, SignInError> {
        self.seen.lock().unwrap().push((provider.to_string(), form.clone()));
        (self.respond)(form)
    }
}
