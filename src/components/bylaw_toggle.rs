//! Sidebar toggles for the two bylaw marker layers.

use leptos::prelude::*;

use super::checkbox::Checkbox;
use crate::bylaws::{MarkerCategory, ToggleEvent};

/// Two controlled checkboxes, one per marker category.
///
/// The checked flags live in the owner; this component only reads them. On a
/// toggle it first runs `toggle_handler` with the pre-toggle value, then flips
/// the owner's flag through the matching setter.
#[component]
pub fn BylawToggle(
    #[prop(optional, into)] toggle_handler: Option<Callback<ToggleEvent>>,
    #[prop(into)] is_no_parking_checked: Signal<bool>,
    #[prop(into)] is_valid_parking_checked: Signal<bool>,
    set_is_no_parking_checked: WriteSignal<bool>,
    set_is_valid_parking_checked: WriteSignal<bool>,
) -> impl IntoView {
    let on_no_parking = Callback::new(move |_: ()| {
        let previous = is_no_parking_checked.get_untracked();
        if let Some(handler) = toggle_handler {
            handler.run(ToggleEvent {
                category: MarkerCategory::NoParking,
                previous_checked: previous,
            });
        }
        set_is_no_parking_checked.set(!previous);
    });

    let on_valid_parking = Callback::new(move |_: ()| {
        let previous = is_valid_parking_checked.get_untracked();
        if let Some(handler) = toggle_handler {
            handler.run(ToggleEvent {
                category: MarkerCategory::ValidParking,
                previous_checked: previous,
            });
        }
        set_is_valid_parking_checked.set(!previous);
    });

    view! {
        <div class="toggle-options">
            <Checkbox
                index=MarkerCategory::NoParking.element_id()
                label=MarkerCategory::NoParking.label()
                check_handler=on_no_parking
                checked_status=is_no_parking_checked
            />
            <Checkbox
                index=MarkerCategory::ValidParking.element_id()
                label=MarkerCategory::ValidParking.label()
                check_handler=on_valid_parking
                checked_status=is_valid_parking_checked
            />
        </div>
    }
}
