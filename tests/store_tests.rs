// Host-side tests for the subsystem vocabulary and interaction store.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod subsystem {
    include!("../src/core/subsystem.rs");
}

use subsystem::*;

#[test]
fn hover_dedupes_and_bumps_revision_on_change() {
    let store = InteractionStore::new();
    assert_eq!(store.hovered(), None);
    let rev0 = store.hovered_rev();

    store.set_hovered(Some(SubsystemKey::Adcs));
    assert_eq!(store.hovered(), Some(SubsystemKey::Adcs));
    assert_eq!(store.hovered_rev(), rev0 + 1);

    // Same key again: no bump
    store.set_hovered(Some(SubsystemKey::Adcs));
    assert_eq!(store.hovered_rev(), rev0 + 1);

    store.set_hovered(None);
    assert_eq!(store.hovered(), None);
    assert_eq!(store.hovered_rev(), rev0 + 2);
}

#[test]
fn selection_tracks_independently_of_hover() {
    let store = InteractionStore::new();
    store.set_hovered(Some(SubsystemKey::Eps));
    assert_eq!(store.selected_rev(), 0);

    store.set_selected(Some(SubsystemKey::Obc));
    assert_eq!(store.selected(), Some(SubsystemKey::Obc));
    assert_eq!(store.selected_rev(), 1);
    assert_eq!(store.hovered(), Some(SubsystemKey::Eps));

    // Clearing hover leaves the selection alone
    store.set_hovered(None);
    assert_eq!(store.selected(), Some(SubsystemKey::Obc));
}

#[test]
fn slugs_round_trip_for_every_subsystem() {
    for key in SubsystemKey::ALL {
        assert_eq!(SubsystemKey::from_slug(key.slug()), Some(key));
    }
    assert_eq!(SubsystemKey::from_slug("propulsion"), None);
    assert_eq!(SubsystemKey::from_slug(""), None);
}

#[test]
fn indices_are_stable_and_dense() {
    for (i, key) in SubsystemKey::ALL.iter().enumerate() {
        assert_eq!(key.index(), i);
    }
}

#[test]
fn routes_use_the_slug() {
    assert_eq!(SubsystemKey::Adcs.route(), "/subsystems/adcs");
    assert_eq!(SubsystemKey::Payload.route(), "/subsystems/payload");
}

#[test]
fn every_subsystem_has_exactly_one_anchor() {
    assert_eq!(SCENE_ANCHORS.len(), SubsystemKey::ALL.len());
    for key in SubsystemKey::ALL {
        let count = SCENE_ANCHORS
            .iter()
            .filter(|a| a.subsystem == key)
            .count();
        assert_eq!(count, 1, "{key} should have one anchor");
    }
}

#[test]
fn labels_and_colors_are_nonempty() {
    for key in SubsystemKey::ALL {
        assert!(!key.label().is_empty());
        assert!(!key.name().is_empty());
        assert!(!key.summary().is_empty());
        assert!(key.css_color().starts_with('#'));
        for channel in key.color_rgb() {
            assert!((0.0..=1.0).contains(&channel));
        }
    }
}
