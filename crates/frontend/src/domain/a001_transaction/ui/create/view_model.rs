use contracts::domain::a001_transaction::form::{FormField, TransactionForm};
use leptos::ev::SubmitEvent;
use leptos::prelude::*;

use crate::shared::dialogs;

/// ViewModel for the create-transaction form
#[derive(Clone, Copy)]
pub struct CreateTransactionViewModel {
    pub form: RwSignal<TransactionForm>,
}

impl CreateTransactionViewModel {
    pub fn new() -> Self {
        Self {
            form: RwSignal::new(TransactionForm::default()),
        }
    }

    pub fn field(&self, field: FormField) -> String {
        self.form.with(|f| f.get(field).to_string())
    }

    pub fn set_field(&self, field: FormField, value: String) {
        self.form.update(|f| f.set(field, value));
    }

    /// Show the submitted values.
    ///
    /// The form is read once, at submit time. Sending to the server is not
    /// wired yet: the confirmation is only displayed.
    pub fn submit_command(&self, ev: SubmitEvent) {
        ev.prevent_default();

        let message = self.form.with_untracked(TransactionForm::confirmation_message);
        log::info!("transaction form submitted: {:?}", self.form.get_untracked());
        dialogs::alert(&message);
    }
}

impl Default for CreateTransactionViewModel {
    fn default() -> Self {
        Self::new()
    }
}
