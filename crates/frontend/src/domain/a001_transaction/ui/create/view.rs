use super::view_model::CreateTransactionViewModel;
use crate::shared::page_frame::PageFrame;
use contracts::domain::a001_transaction::form::FormField;
use leptos::prelude::*;

#[component]
pub fn CreateTransactionPage() -> impl IntoView {
    let vm = CreateTransactionViewModel::new();

    view! {
        <PageFrame page_id="a001_transaction--create" class="transaction-create">
            <h2 class="transaction-create__title">"Создать транзакцию"</h2>

            <form on:submit=move |ev| vm.submit_command(ev)>
                <div class="form-group">
                    <label for="amount">"Сумма:"</label>
                    <input
                        type=FormField::Amount.input_type()
                        id="amount"
                        required=FormField::Amount.is_required()
                        prop:value=move || vm.field(FormField::Amount)
                        on:input=move |ev| vm.set_field(FormField::Amount, event_target_value(&ev))
                    />
                </div>

                <div class="form-group">
                    <label for="participants">"Участники (ID через запятую):"</label>
                    <input
                        type=FormField::Participants.input_type()
                        id="participants"
                        placeholder="1,2,3"
                        required=FormField::Participants.is_required()
                        prop:value=move || vm.field(FormField::Participants)
                        on:input=move |ev| {
                            vm.set_field(FormField::Participants, event_target_value(&ev))
                        }
                    />
                </div>

                <div class="form-group">
                    <label for="description">"Описание:"</label>
                    <input
                        type=FormField::Description.input_type()
                        id="description"
                        required=FormField::Description.is_required()
                        prop:value=move || vm.field(FormField::Description)
                        on:input=move |ev| {
                            vm.set_field(FormField::Description, event_target_value(&ev))
                        }
                    />
                </div>

                <button type="submit" class="btn btn-primary transaction-create__submit">
                    "Создать"
                </button>
            </form>
        </PageFrame>
    }
}
