//! Client payment-status card.
//!
//! Renders one client as a compact block on phones and as a grid row on
//! wider screens. Both layouts show the same fields; CSS picks one.

use chrono::Utc;
use clientcard::{format_money, name_class, Client, ClientCategory, DeadlineStatus};
use leptos::*;
use web_sys::MouseEvent;

use super::icons::{Building2Icon, EyeIcon, EyeOffIcon, HistoryIcon};
use super::payment_progress::PaymentProgressBar;
use crate::config::DESKTOP_GRID;
use crate::events::icon_click;
use crate::hooks::use_client_payments;

const HISTORY_TITLE: &str = "История транзакций";

/// Tooltip of the visibility toggle.
fn visibility_title(visible: bool) -> &'static str {
    if visible {
        "Скрыть иконки"
    } else {
        "Показать иконки"
    }
}

fn card_class(category: ClientCategory) -> String {
    format!(
        "client-card bg-white rounded-lg shadow hover:shadow-md transition-all duration-200 border-l-4 {}",
        category.palette().card_classes()
    )
}

#[component]
pub fn ClientCard(
    /// Client to summarise
    client: Client,
    /// Right click on the card
    #[prop(into)]
    on_context_menu: Callback<(MouseEvent, Client)>,
    /// Left click anywhere on the card except the icon buttons
    #[prop(into)]
    on_client_click: Callback<Client>,
    /// Eye button
    #[prop(into)]
    on_toggle_visibility: Callback<Client>,
    /// History button
    #[prop(into)]
    on_view_history: Callback<Client>,
    /// List the card is shown in
    category: ClientCategory,
    /// Label in the first column
    #[prop(into)]
    row_number: String,
) -> impl IntoView {
    let payments = use_client_payments(&client);
    let deadline = DeadlineStatus::evaluate(&client, category, Utc::now());
    if deadline.passed {
        log::debug!("⏰ Deadline passed for client {}", client.id);
    }

    let name = client.display_name();
    let name_classes = format!("font-medium text-sm truncate {}", name_class(deadline.is_alert()));
    let object = client.object_label().to_string();
    let phone = client.phone.clone();
    let amount = format_money(client.total_amount);
    let avatar_class = format!(
        "w-7 h-7 rounded-full flex items-center justify-center {}",
        category.palette().avatar
    );

    let on_click = {
        let client = client.clone();
        move |_: MouseEvent| on_client_click.call(client.clone())
    };
    let on_contextmenu = {
        let client = client.clone();
        move |ev: MouseEvent| on_context_menu.call((ev, client.clone()))
    };

    view! {
        <div class=card_class(category) on:contextmenu=on_contextmenu on:click=on_click>
            <div class="p-3 sm:p-4">
                // Mobile
                <div class="sm:hidden">
                    <div class="flex items-center justify-between mb-2">
                        <div class="flex items-center gap-2">
                            <span class="text-xs font-medium text-gray-500">{row_number.clone()}</span>
                            <span class=name_classes.clone()>{name.clone()}</span>
                        </div>
                    </div>

                    <div class="space-y-2">
                        <div class="text-xs text-gray-600 truncate">{object.clone()}</div>
                        <div class="text-xs text-gray-600">{phone.clone()}</div>
                        <div class="text-xs text-gray-600">"Сумма: " {amount.clone()}</div>

                        <div class="flex items-center justify-between pt-2">
                            <PaymentProgressBar
                                progress=payments.progress
                                remaining_amount=payments.remaining_amount
                            />
                            <CardActions
                                client=client.clone()
                                on_toggle_visibility=on_toggle_visibility
                                on_view_history=on_view_history
                                desktop=false
                            />
                        </div>
                    </div>
                </div>

                // Tablet and desktop
                <div class="hidden sm:block">
                    <div class=DESKTOP_GRID>
                        <div class="text-sm font-medium text-gray-500">{row_number}</div>

                        <div class=avatar_class>
                            <Building2Icon class="w-4 h-4 text-gray-600"/>
                        </div>

                        <div class="flex items-center gap-2 min-w-0">
                            <span class=name_classes>{name}</span>
                        </div>

                        <div class="text-sm text-gray-600 truncate">{object}</div>

                        <div class="text-sm text-gray-600 truncate">{phone}</div>

                        <div class="text-sm text-gray-600 font-medium whitespace-nowrap">{amount}</div>

                        <PaymentProgressBar
                            progress=payments.progress
                            remaining_amount=payments.remaining_amount
                        />

                        <CardActions
                            client=client
                            on_toggle_visibility=on_toggle_visibility
                            on_view_history=on_view_history
                            desktop=true
                        />
                    </div>
                </div>
            </div>
        </div>
    }
}

/// History and visibility buttons. Their clicks never reach the card.
#[component]
fn CardActions(
    client: Client,
    on_toggle_visibility: Callback<Client>,
    on_view_history: Callback<Client>,
    desktop: bool,
) -> impl IntoView {
    let visible = client.is_icons_visible;
    let (wrapper_class, button_class) = if desktop {
        (
            "flex items-center gap-1 justify-end",
            "p-1.5 text-gray-400 hover:text-gray-600 rounded-full hover:bg-gray-100",
        )
    } else {
        ("flex items-center gap-1", "p-1.5 text-gray-400 hover:text-gray-600 rounded-full")
    };

    let on_history = {
        let client = client.clone();
        move |ev: MouseEvent| {
            icon_click(&ev, || {
                log::info!("📜 History requested for client {}", client.id);
                on_view_history.call(client.clone());
            })
        }
    };
    let on_toggle = move |ev: MouseEvent| {
        icon_click(&ev, || {
            log::info!("👁 Toggling icons for client {}", client.id);
            on_toggle_visibility.call(client.clone());
        })
    };

    view! {
        <div class=wrapper_class>
            <button
                type="button"
                class=button_class
                data-action="history"
                title=desktop.then_some(HISTORY_TITLE)
                on:click=on_history
            >
                <HistoryIcon/>
            </button>
            <button
                type="button"
                class=button_class
                data-action="visibility"
                title=desktop.then_some(visibility_title(visible))
                on:click=on_toggle
            >
                {if visible {
                    view! { <EyeIcon/> }.into_view()
                } else {
                    view! { <EyeOffIcon/> }.into_view()
                }}
            </button>
        </div>
    }
}
