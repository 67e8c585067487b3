use leptos::logging;
use leptos::prelude::*;

use crate::bylaws::{LayerVisibility, ToggleEvent};
use crate::components::{BylawToggle, Sidebar};

#[component]
pub fn App() -> impl IntoView {
    // Both marker layers start visible.
    let (is_no_parking_checked, set_is_no_parking_checked) = signal(true);
    let (is_valid_parking_checked, set_is_valid_parking_checked) = signal(true);

    // What the map is currently showing. Stands in for the marker layers
    // themselves, which are rendered by the map, not by this crate.
    let layers = RwSignal::new(LayerVisibility::default());

    let sidebar_open = RwSignal::new(true);

    let on_bylaw_toggle = Callback::new(move |event: ToggleEvent| {
        layers.update(|current| current.apply(event));
        logging::log!(
            "{} markers {}",
            event.category.label(),
            if event.next_checked() { "shown" } else { "hidden" }
        );
    });

    let visible_summary = move || {
        let labels = layers.get().visible_labels();
        if labels.is_empty() {
            "no marker layers".to_string()
        } else {
            labels.join(", ")
        }
    };

    view! {
        <div class="app">
            <header class="app-header">
                <h1>"Where to Park"</h1>
            </header>

            <div class="app-body">
                <Sidebar is_open=sidebar_open>
                    <BylawToggle
                        toggle_handler=on_bylaw_toggle
                        is_no_parking_checked=is_no_parking_checked
                        is_valid_parking_checked=is_valid_parking_checked
                        set_is_no_parking_checked=set_is_no_parking_checked
                        set_is_valid_parking_checked=set_is_valid_parking_checked
                    />
                </Sidebar>

                <main class="main-content">
                    <div class="map-placeholder">
                        <p>"Showing: " {visible_summary}</p>
                    </div>
                </main>
            </div>
        </div>
    }
}
