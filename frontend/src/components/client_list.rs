//! Category sections of client cards.

use clientcard::{Client, ClientCategory};
use leptos::*;
use web_sys::MouseEvent;

use super::client_card::ClientCard;
use crate::types::ClientRow;

/// Section heading for a category.
pub fn section_title(category: ClientCategory) -> &'static str {
    match category {
        ClientCategory::Building => "Строятся",
        ClientCategory::Deposit => "Задаток",
        ClientCategory::Built => "Построены",
    }
}

/// Flip the icon visibility of the client with `client_id`.
pub fn toggle_icons(rows: &mut [ClientRow], client_id: &str) {
    if let Some(row) = rows.iter_mut().find(|row| row.client.id == client_id) {
        row.client.is_icons_visible = !row.client.is_icons_visible;
    }
}

/// Cards of one category, numbered from 1 in list order.
///
/// Rows are keyed on the full client record, so editing any field of a
/// client re-renders its card.
#[component]
pub fn ClientSection(
    rows: RwSignal<Vec<ClientRow>>,
    category: ClientCategory,
    /// Message describing the last card interaction
    last_action: WriteSignal<Option<String>>,
) -> impl IntoView {
    let section_rows = move || {
        rows.get()
            .into_iter()
            .filter(|row| row.category == category)
            .enumerate()
            .collect::<Vec<_>>()
    };

    let on_client_click = move |client: Client| {
        log::info!("🖱 Opened client {}", client.id);
        last_action.set(Some(format!("Открыт клиент: {}", client.display_name())));
    };
    let on_context_menu = move |(ev, client): (MouseEvent, Client)| {
        ev.prevent_default();
        log::info!("📋 Context menu for client {}", client.id);
        last_action.set(Some(format!("Меню клиента: {}", client.display_name())));
    };
    let on_toggle_visibility = move |client: Client| {
        rows.update(|rows| toggle_icons(rows, &client.id));
    };
    let on_view_history = move |client: Client| {
        last_action.set(Some(format!("История транзакций: {}", client.display_name())));
    };

    view! {
        <section class="client-section space-y-2">
            <h2 class="text-sm font-semibold text-gray-700">
                {section_title(category)} " (" {move || section_rows().len()} ")"
            </h2>
            <For
                each=section_rows
                key=|(idx, row)| (*idx, row.render_key())
                children=move |(idx, row)| {
                    view! {
                        <ClientCard
                            client=row.client
                            category=row.category
                            row_number=(idx + 1).to_string()
                            on_client_click=on_client_click
                            on_context_menu=on_context_menu
                            on_toggle_visibility=on_toggle_visibility
                            on_view_history=on_view_history
                        />
                    }
                }
            />
        </section>
    }
}
