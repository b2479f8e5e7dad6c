//! Browser tests for click handling on the client card.
//!
//! Run with `wasm-pack test --headless --firefox frontend`.

#![cfg(target_arch = "wasm32")]

use std::cell::Cell;
use std::rc::Rc;

use clientcard::{Client, ClientCategory};
use clientcard_frontend::ClientCard;
use leptos::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[derive(Default)]
struct Counters {
    click: Cell<u32>,
    context_menu: Cell<u32>,
    toggle: Cell<u32>,
    history: Cell<u32>,
}

fn client() -> Client {
    Client {
        id: "c-1".to_string(),
        first_name: "Ерлан".to_string(),
        last_name: "Нурланов".to_string(),
        phone: "+7 705 111 22 33".to_string(),
        object_name: None,
        total_amount: 1_000_000.0,
        construction_days: 10,
        created_at: None,
        is_icons_visible: true,
    }
}

fn mount_card(category: ClientCategory) -> (web_sys::HtmlElement, Rc<Counters>) {
    let document = leptos::document();
    let root: web_sys::HtmlElement = document.create_element("div").unwrap().unchecked_into();
    document.body().unwrap().append_child(&root).unwrap();

    let counters = Rc::new(Counters::default());
    let c = counters.clone();

    mount_to(root.clone(), move || {
        let (click, menu, toggle, history) = (c.clone(), c.clone(), c.clone(), c.clone());
        view! {
            <ClientCard
                client=client()
                category=category
                row_number="1"
                on_client_click=move |_| click.click.set(click.click.get() + 1)
                on_context_menu=move |_| menu.context_menu.set(menu.context_menu.get() + 1)
                on_toggle_visibility=move |_| toggle.toggle.set(toggle.toggle.get() + 1)
                on_view_history=move |_| history.history.set(history.history.get() + 1)
            />
        }
    });

    (root, counters)
}

fn element(root: &web_sys::HtmlElement, selector: &str) -> web_sys::HtmlElement {
    root.query_selector(selector)
        .unwrap()
        .unwrap_or_else(|| panic!("no element matches {}", selector))
        .unchecked_into()
}

#[wasm_bindgen_test]
fn card_click_reports_client() {
    let (root, counters) = mount_card(ClientCategory::Building);

    element(&root, ".client-card").click();

    assert_eq!(counters.click.get(), 1);
    assert_eq!(counters.history.get(), 0);
}

#[wasm_bindgen_test]
fn history_button_does_not_open_card() {
    let (root, counters) = mount_card(ClientCategory::Building);

    element(&root, "button[data-action='history']").click();

    assert_eq!(counters.history.get(), 1);
    assert_eq!(counters.click.get(), 0);
}

#[wasm_bindgen_test]
fn visibility_button_does_not_open_card() {
    let (root, counters) = mount_card(ClientCategory::Deposit);

    element(&root, "button[data-action='visibility']").click();

    assert_eq!(counters.toggle.get(), 1);
    assert_eq!(counters.click.get(), 0);
}

#[wasm_bindgen_test]
fn context_menu_reports_client() {
    let (root, counters) = mount_card(ClientCategory::Built);

    let init = web_sys::MouseEventInit::new();
    init.set_bubbles(true);
    let event = web_sys::MouseEvent::new_with_mouse_event_init_dict("contextmenu", &init).unwrap();
    element(&root, ".client-card").dispatch_event(&event).unwrap();

    assert_eq!(counters.context_menu.get(), 1);
    assert_eq!(counters.click.get(), 0);
}

#[wasm_bindgen_test]
fn amount_is_formatted() {
    let (root, _) = mount_card(ClientCategory::Building);

    let text = root.text_content().unwrap_or_default();
    assert!(text.contains("1\u{a0}000\u{a0}000 ₸"));
    assert!(text.contains("Нурланов Ерлан"));
}
