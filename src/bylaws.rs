//! Parking bylaw marker categories and the layer bookkeeping they drive.

/// One of the two bylaw marker layers shown on the map.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerCategory {
    NoParking,
    ValidParking,
}

impl MarkerCategory {
    /// Stable identifier used for the checkbox `id`/`name` and its label's `for`.
    pub fn element_id(self) -> &'static str {
        match self {
            MarkerCategory::NoParking => "noParking",
            MarkerCategory::ValidParking => "validParking",
        }
    }

    /// Label shown next to the checkbox.
    pub fn label(self) -> &'static str {
        match self {
            MarkerCategory::NoParking => "No Parking",
            MarkerCategory::ValidParking => "Valid Parking",
        }
    }
}

/// A toggle reported by the sidebar: which category changed, and the checked
/// value the control showed before the click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToggleEvent {
    pub category: MarkerCategory,
    pub previous_checked: bool,
}

impl ToggleEvent {
    /// Checked state the owner should store after this toggle.
    pub fn next_checked(self) -> bool {
        !self.previous_checked
    }
}

/// Which marker layers the map is currently showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayerVisibility {
    pub no_parking: bool,
    pub valid_parking: bool,
}

impl Default for LayerVisibility {
    fn default() -> Self {
        Self {
            no_parking: true,
            valid_parking: true,
        }
    }
}

impl LayerVisibility {
    /// Apply a reported toggle: the layer ends up at the inverse of the
    /// checked value it showed before the click. The other layer is untouched.
    pub fn apply(&mut self, event: ToggleEvent) {
        let shown = event.next_checked();
        match event.category {
            MarkerCategory::NoParking => self.no_parking = shown,
            MarkerCategory::ValidParking => self.valid_parking = shown,
        }
    }

    pub fn is_shown(self, category: MarkerCategory) -> bool {
        match category {
            MarkerCategory::NoParking => self.no_parking,
            MarkerCategory::ValidParking => self.valid_parking,
        }
    }

    /// Labels of the visible layers, in display order.
    pub fn visible_labels(self) -> Vec<&'static str> {
        let mut labels = Vec::new();
        if self.no_parking {
            labels.push(MarkerCategory::NoParking.label());
        }
        if self.valid_parking {
            labels.push(MarkerCategory::ValidParking.label());
        }
        labels
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_element_ids() {
        assert_eq!(MarkerCategory::NoParking.element_id(), "noParking");
        assert_eq!(MarkerCategory::ValidParking.element_id(), "validParking");
    }

    #[test]
    fn test_labels() {
        assert_eq!(MarkerCategory::NoParking.label(), "No Parking");
        assert_eq!(MarkerCategory::ValidParking.label(), "Valid Parking");
    }

    #[test]
    fn test_next_checked_inverts_previous_value() {
        let shown = ToggleEvent {
            category: MarkerCategory::NoParking,
            previous_checked: true,
        };
        assert!(!shown.next_checked());

        let hidden = ToggleEvent {
            category: MarkerCategory::NoParking,
            previous_checked: false,
        };
        assert!(hidden.next_checked());
    }

    #[test]
    fn test_default_shows_both_layers() {
        let layers = LayerVisibility::default();
        assert!(layers.is_shown(MarkerCategory::NoParking));
        assert!(layers.is_shown(MarkerCategory::ValidParking));
    }

    #[test]
    fn test_apply_hides_layer_that_was_checked() {
        let mut layers = LayerVisibility::default();
        layers.apply(ToggleEvent {
            category: MarkerCategory::NoParking,
            previous_checked: true,
        });
        assert!(!layers.is_shown(MarkerCategory::NoParking));
        assert!(layers.is_shown(MarkerCategory::ValidParking));
    }

    #[test]
    fn test_apply_shows_layer_that_was_unchecked() {
        let mut layers = LayerVisibility {
            no_parking: true,
            valid_parking: false,
        };
        layers.apply(ToggleEvent {
            category: MarkerCategory::ValidParking,
            previous_checked: false,
        });
        assert!(layers.is_shown(MarkerCategory::ValidParking));
        assert!(layers.is_shown(MarkerCategory::NoParking));
    }

    #[test]
    fn test_apply_never_touches_other_layer() {
        for &other_shown in &[true, false] {
            let mut layers = LayerVisibility {
                no_parking: true,
                valid_parking: other_shown,
            };
            layers.apply(ToggleEvent {
                category: MarkerCategory::NoParking,
                previous_checked: true,
            });
            assert_eq!(layers.is_shown(MarkerCategory::ValidParking), other_shown);

            let mut layers = LayerVisibility {
                no_parking: other_shown,
                valid_parking: true,
            };
            layers.apply(ToggleEvent {
                category: MarkerCategory::ValidParking,
                previous_checked: true,
            });
            assert_eq!(layers.is_shown(MarkerCategory::NoParking), other_shown);
        }
    }

    #[test]
    fn test_toggling_twice_round_trips() {
        let mut layers = LayerVisibility::default();
        layers.apply(ToggleEvent {
            category: MarkerCategory::NoParking,
            previous_checked: true,
        });
        layers.apply(ToggleEvent {
            category: MarkerCategory::NoParking,
            previous_checked: false,
        });
        assert_eq!(layers, LayerVisibility::default());
    }

    #[test]
    fn test_visible_labels_per_state() {
        let both = LayerVisibility {
            no_parking: true,
            valid_parking: true,
        };
        assert_eq!(both.visible_labels(), vec!["No Parking", "Valid Parking"]);

        let no_parking_only = LayerVisibility {
            no_parking: true,
            valid_parking: false,
        };
        assert_eq!(no_parking_only.visible_labels(), vec!["No Parking"]);

        let valid_only = LayerVisibility {
            no_parking: false,
            valid_parking: true,
        };
        assert_eq!(valid_only.visible_labels(), vec!["Valid Parking"]);

        let neither = LayerVisibility {
            no_parking: false,
            valid_parking: false,
        };
        assert!(neither.visible_labels().is_empty());
    }

    #[test]
    fn test_hiding_no_parking_keeps_valid_parking_visible() {
        // Both layers start visible; the user unchecks "No Parking".
        let mut layers = LayerVisibility::default();
        layers.apply(ToggleEvent {
            category: MarkerCategory::NoParking,
            previous_checked: true,
        });
        assert_eq!(layers.visible_labels(), vec!["Valid Parking"]);
    }
}
