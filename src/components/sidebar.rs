use leptos::prelude::*;

use crate::state::AppState;

/// Left panel: a dropdown picker over the channel list.
#[component]
pub fn Sidebar() -> impl IntoView {
    let state = expect_context::<AppState>();

    let toggle = {
        let state = state.clone();
        move |_| state.toggle_menu()
    };

    let current_label = {
        let state = state.clone();
        move || {
            state
                .selected_channel
                .get()
                .map(|channel| channel.name)
                .unwrap_or_else(|| "Select Channel".to_string())
        }
    };

    let chevron = {
        let state = state.clone();
        move || if state.menu_open.get() { "▲" } else { "▼" }
    };

    view! {
        <aside class="sidebar">
            <h2 class="sidebar-title">"Slack Channels"</h2>
            <div class="channel-picker">
                <button class="picker-toggle" on:click=toggle>
                    <span>{current_label}</span>
                    <span class="picker-chevron">{chevron}</span>
                </button>
                {move || {
                    state.menu_open.get().then(|| {
                        let state = state.clone();
                        view! {
                            <ul class="channel-menu">
                                <For
                                    each=move || state.channels.get()
                                    key=|channel| channel.id
                                    let:channel
                                >
                                    {
                                        let state = state.clone();
                                        let name = channel.name.clone();
                                        view! {
                                            <li
                                                class="channel-item"
                                                on:click=move |_| state.select_channel(channel.clone())
                                            >
                                                {name}
                                            </li>
                                        }
                                    }
                                </For>
                            </ul>
                        }
                    })
                }}
            </div>
        </aside>
    }
}
