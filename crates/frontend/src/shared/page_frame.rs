//! PageFrame — standard root wrapper for a page.
//!
//! Sets `id` to `"{entity}--{category}"`, e.g. `"a001_transaction--create"`,
//! so pages can be found in the DOM by the entity they render.

use leptos::prelude::*;

#[component]
pub fn PageFrame(
    /// HTML id in format `{entity}--{category}`
    page_id: &'static str,
    /// Additional CSS classes appended after the base class.
    #[prop(optional)]
    class: &'static str,
    children: Children,
) -> impl IntoView {
    let full_class = if class.is_empty() {
        "page".to_string()
    } else {
        format!("page {class}")
    };

    view! {
        <div id=page_id class=full_class>
            {children()}
        </div>
    }
}
