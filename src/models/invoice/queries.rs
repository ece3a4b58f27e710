use async_trait::async_trait;
use sqlx::PgPool;

use super::types::{InvoiceChanges, InvoiceListItem, NewInvoice};

/// Storage fault raised by an invoice statement.
#[derive(Debug, thiserror::Error)]
pub enum PersistenceError {
    #[error("database error: {0}")]
    Db(#[from] sqlx::Error),
}

/// Invoice persistence. Every mutating call is exactly one statement; a
/// statement that matches no row is not an error.
#[async_trait]
pub trait InvoiceStore: Send + Sync {
    /// Insert one invoice and return its generated id.
    async fn insert_invoice(&self, invoice: &NewInvoice) -> Result<String, PersistenceError>;

    async fn update_invoice(&self, id: &str, changes: &InvoiceChanges) -> Result<(), PersistenceError>;

    async fn delete_invoice(&self, id: &str) -> Result<(), PersistenceError>;

    /// All invoices with their customer name, newest first.
    async fn list_invoices(&self) -> Result<Vec<InvoiceListItem>, PersistenceError>;
}

/// `InvoiceStore` backed by the Postgres `invoices` table.
#[derive(Clone, Debug)]
pub struct PgInvoiceStore {
    pool: PgPool,
}

impl PgInvoiceStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl InvoiceStore for PgInvoiceStore {
    async fn insert_invoice(&self, invoice: &NewInvoice) -> Result<String, PersistenceError> {
        let id: String = sqlx::query_scalar(
            "INSERT INTO invoices (customer_id, amount, status, date) \
             VALUES ($1::uuid, $2, $3, $4) \
             RETURNING id::text",
        )
        .bind(&invoice.customer_id)
        .bind(invoice.amount_cents)
        .bind(invoice.status.as_str())
        .bind(invoice.date)
        .fetch_one(&self.pool)
        .await?;

        Ok(id)
    }

    async fn update_invoice(&self, id: &str, changes: &InvoiceChanges) -> Result<(), PersistenceError> {
        sqlx::query(
            "UPDATE invoices SET \
                 customer_id = $2::uuid, \
                 amount = $3, \
                 status = $4 \
             WHERE id = $1::uuid",
        )
        .bind(id)
        .bind(&changes.customer_id)
        .bind(changes.amount_cents)
        .bind(changes.status.as_str())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn delete_invoice(&self, id: &str) -> Result<(), PersistenceError> {
        sqlx::query("DELETE FROM invoices WHERE id = $1::uuid")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn list_invoices(&self) -> Result<Vec<InvoiceListItem>, PersistenceError> {
        let rows = sqlx::query_as::<_, InvoiceListItem>(
            "SELECT i.id::text AS id, \
                    i.customer_id::text AS customer_id, \
                    c.name AS customer_name, \
                    i.amount AS amount_cents, \
                    i.status, \
                    i.date::text AS date \
             FROM invoices i \
             JOIN customers c ON c.id = i.customer_id \
             ORDER BY i.date DESC, i.id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }
}
