//! Integration tests for the full session pipeline.
//!
//! Tests: add control → cart manager → store → render sink, across
//! simulated reloads.
//!
//! Verifies:
//! - cart state survives a reload through the persistent slot
//! - corrupted persisted data degrades to an empty cart, reported not
//!   raised
//! - a failing store never blocks mutation or rendering

use std::rc::Rc;

use menucart_cart::{AddItem, Totals};
use menucart_core::{ItemId, RecordingReporter};
use menucart_menu::{AddControl, MenuEntry};
use menucart_render::CartView;
use menucart_storage::{
    FileKvStore, MemoryKvStore, PersistentCartStore, CART_STORAGE_KEY,
};
use menucart_ui::ModalClick;

use crate::controls::PageControls;
use crate::menu_browser::MenuBrowser;
use crate::prompt::ScriptedPrompt;
use crate::session::{CheckoutOutcome, Session};

fn file_session(dir: &std::path::Path, reporter: Rc<RecordingReporter>) -> Session {
    let store = PersistentCartStore::new(FileKvStore::new(dir), reporter);
    Session::start(Box::new(store), Box::new(ScriptedPrompt::new()))
}

#[test]
fn cart_survives_a_reload() {
    let dir = tempfile::tempdir().unwrap();
    let reporter = Rc::new(RecordingReporter::new());

    {
        let mut session = file_session(dir.path(), Rc::clone(&reporter));
        session.add(AddItem::new("p1", "Margherita", 9.5));
        session.add(AddItem::new("p2", "Diavola", 11.0));
        session.increase_qty(&ItemId::new("p1"));
    }

    // New session over the same slot simulates the page reload.
    let reloaded = file_session(dir.path(), Rc::clone(&reporter));
    assert_eq!(reloaded.cart().len(), 2);
    assert_eq!(reloaded.cart().lines()[0].qty, 2);
    assert_eq!(reloaded.totals(), Totals { total: 30.0, count: 3 });
    assert!(reporter.is_empty());

    // The restored cart is rendered before any event is handled.
    let CartView::Rows(rows) = reloaded.current_view() else {
        panic!("expected rows");
    };
    assert_eq!(rows.len(), 2);
}

#[test]
fn corrupted_slot_degrades_to_empty_cart() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join(CART_STORAGE_KEY), "{definitely not json").unwrap();

    let reporter = Rc::new(RecordingReporter::new());
    let session = file_session(dir.path(), Rc::clone(&reporter));

    assert!(session.cart().is_empty());
    assert_eq!(session.current_view(), CartView::Empty);
    let events = reporter.events();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].event_type(), "storage.load_failed");
}

#[test]
fn failing_store_never_blocks_the_session() {
    let reporter = Rc::new(RecordingReporter::new());
    // Quota of zero: every save fails.
    let store = PersistentCartStore::new(MemoryKvStore::with_quota(0), reporter.clone());
    let mut session = Session::start(Box::new(store), Box::new(ScriptedPrompt::new()));

    session.add(AddItem::new("p1", "Margherita", 9.5));
    session.add(AddItem::new("p1", "Margherita", 9.5));

    // In-memory cart and view stay correct without durability.
    assert_eq!(session.totals(), Totals { total: 19.0, count: 2 });
    let CartView::Rows(rows) = session.current_view() else {
        panic!("expected rows");
    };
    assert_eq!(rows[0].qty, 2);
    assert_eq!(reporter.events().len(), 2);
    assert!(reporter
        .events()
        .iter()
        .all(|e| e.event_type() == "storage.save_failed"));
}

#[test]
fn browse_filter_add_and_checkout_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    let reporter = Rc::new(RecordingReporter::new());
    let prompt = Rc::new(ScriptedPrompt::new());
    let store = PersistentCartStore::new(FileKvStore::new(dir.path()), reporter.clone());
    let mut session = Session::start(Box::new(store), Box::new(Rc::clone(&prompt)));

    // Narrow the menu down to the entry being ordered.
    let mut menu = MenuBrowser::new(vec![
        MenuEntry::new("p1", "Vegan Pizza").with_category("vegan"),
        MenuEntry::new("p2", "Pepperoni Pizza").with_category("meat"),
    ]);
    menu.select_category(Some("vegan"));
    menu.set_search_term("pizza");
    let visible = menu.visible();
    assert_eq!(visible.len(), 1);

    // Add it twice through its add control.
    let control = AddControl::new(visible[0].id.clone())
        .with_name(visible[0].name.clone())
        .with_price("9.5");
    session.add_from_control(&control);
    session.add_from_control(&control);

    // Peripheral surfaces: open the cart, glance at the location modal.
    let mut controls = PageControls::new();
    controls.cart_panel.toggle();
    assert!(controls.cart_panel.is_open());
    controls.location.open();
    controls.location.on_click(ModalClick::Backdrop);
    assert!(!controls.location.is_open());
    controls.on_scroll(450.0);
    assert!(controls.back_to_top.is_visible());

    let outcome = session.checkout();
    assert_eq!(
        outcome,
        CheckoutOutcome::Completed(Totals { total: 19.0, count: 2 })
    );
    assert!(prompt
        .messages()
        .contains(&"Thanks! You ordered 2 items. Total: $19.00".to_string()));

    // Checkout's clear reached the slot: a reload starts empty.
    let reloaded = file_session(dir.path(), reporter);
    assert!(reloaded.cart().is_empty());
}
