use crate::form::FormData;
use crate::models::invoice::{
    FieldErrors, InvoiceChanges, InvoiceFields, NewInvoice, ValidationMode, parse_invoice_form,
};
use super::{ActionContext, ActionOutcome, FormState, INVOICES_PATH};

pub const CREATE_MISSING_FIELDS: &str = "Missing fields. Failed to create the invoice.";
pub const UPDATE_MISSING_FIELDS: &str = "Missing fields. Failed to update the invoice.";
pub const CREATE_FAILED: &str = "Failed to create the invoice";
pub const UPDATE_FAILED: &str = "Failed to update the invoice";
pub const DELETE_FAILED: &str = "Failed to delete the invoice";
pub const DELETED: &str = "Deleted Invoice";

/// Turn a validation failure into the form state for the configured mode.
fn rejected(mode: ValidationMode, errors: FieldErrors, missing_fields: &str, failed: &str) -> ActionOutcome {
    match mode {
        ValidationMode::Lenient => ActionOutcome::Respond(FormState {
            message: Some(missing_fields.to_string()),
            errors: Some(errors),
        }),
        ValidationMode::Strict => {
            log::error!("Invoice form rejected: {errors:?}");
            ActionOutcome::Respond(FormState::message(failed))
        }
    }
}

pub async fn create_invoice(ctx: &ActionContext<'_>, _prev_state: &FormState, form: &FormData) -> ActionOutcome {
    let fields: InvoiceFields = match parse_invoice_form(form) {
        Ok(f) => f,
        Err(errors) => return rejected(ctx.mode, errors, CREATE_MISSING_FIELDS, CREATE_FAILED),
    };

    let new = NewInvoice {
        amount_cents: fields.amount_in_cents(),
        customer_id: fields.customer_id,
        status: fields.status,
        date: ctx.today,
    };

    match ctx.store.insert_invoice(&new).await {
        Ok(id) => log::info!("Created invoice {id} for customer {}", new.customer_id),
        Err(e) => {
            log::error!("Failed to create invoice: {e}");
            return ActionOutcome::Respond(FormState::message(CREATE_FAILED));
        }
    }

    ctx.cache.revalidate_path(INVOICES_PATH);
    ActionOutcome::Redirect(INVOICES_PATH)
}

pub async fn update_invoice(
    ctx: &ActionContext<'_>,
    invoice_id: &str,
    _prev_state: &FormState,
    form: &FormData,
) -> ActionOutcome {
    let fields = match parse_invoice_form(form) {
        Ok(f) => f,
        Err(errors) => return rejected(ctx.mode, errors, UPDATE_MISSING_FIELDS, UPDATE_FAILED),
    };

    let changes = InvoiceChanges {
        amount_cents: fields.amount_in_cents(),
        customer_id: fields.customer_id,
        status: fields.status,
    };

    if let Err(e) = ctx.store.update_invoice(invoice_id, &changes).await {
        log::error!("Failed to update invoice {invoice_id}: {e}");
        return ActionOutcome::Respond(FormState::message(UPDATE_FAILED));
    }

    ctx.cache.revalidate_path(INVOICES_PATH);
    ActionOutcome::Redirect(INVOICES_PATH)
}

/// Delete never redirects; it is usually triggered from the list itself.
pub async fn delete_invoice(ctx: &ActionContext<'_>, invoice_id: &str) -> ActionOutcome {
    if let Err(e) = ctx.store.delete_invoice(invoice_id).await {
        log::error!("Failed to delete invoice {invoice_id}: {e}");
        return ActionOutcome::Respond(FormState::message(DELETE_FAILED));
    }

    ctx.cache.revalidate_path(INVOICES_PATH);
    ActionOutcome::Respond(FormState::message(DELETED))
}
