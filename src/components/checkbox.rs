use leptos::prelude::*;

/// A labeled checkbox whose checked state is fully owned by the parent.
///
/// The input never stores its own copy of the state: it renders whatever
/// `checked_status` holds and reports clicks upward through `check_handler`.
#[component]
pub fn Checkbox(
    /// Stable identifier, also used to associate the label with the input.
    #[prop(into)]
    index: String,
    #[prop(into)] label: String,
    #[prop(optional, into)] check_handler: Option<Callback<()>>,
    #[prop(optional, into)] checked_status: Option<Signal<bool>>,
) -> impl IntoView {
    let on_change = move |_ev: web_sys::Event| {
        if let Some(handler) = check_handler {
            handler.run(());
        }
    };

    view! {
        <div class="toggle-option">
            <input
                type="checkbox"
                id=index.clone()
                name=index.clone()
                prop:checked=move || checked_status.map(|status| status.get()).unwrap_or(false)
                on:change=on_change
            />
            <label for=index>{label}</label>
        </div>
    }
}
