//! Collapsible sidebar hosting the map filter controls.

use leptos::prelude::*;

#[component]
pub fn Sidebar(is_open: RwSignal<bool>, children: Children) -> impl IntoView {
    view! {
        <aside
            class="toggle-sidebar"
            class:toggle-sidebar-open=move || is_open.get()
            class:toggle-sidebar-collapsed=move || !is_open.get()
        >
            <button
                class="toggle-sidebar-button"
                on:click=move |_| is_open.update(|open| *open = !*open)
                title=move || if is_open.get() { "Collapse filters" } else { "Expand filters" }
            >
                {move || if is_open.get() { "Hide filters" } else { "Show filters" }}
            </button>
            <div class="toggle-sidebar-content">{children()}</div>
        </aside>
    }
}
