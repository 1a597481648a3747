use crate::domain::a001_transaction::ui::create::CreateTransactionPage;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <main class="app-shell">
            <CreateTransactionPage />
        </main>
    }
}
