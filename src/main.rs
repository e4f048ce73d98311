mod api;
mod components;
mod config;
mod error;
mod models;
mod state;

use leptos::mount::mount_to_body;
use leptos::prelude::*;

use components::chat::ChatArea;
use components::sidebar::Sidebar;
use config::ClientConfig;
use state::AppState;

/// Root application component.
#[component]
fn App() -> impl IntoView {
    let state = AppState::provide(ClientConfig::default());

    // Load the channel list on mount
    state.load_channels();

    view! {
        <div class="app-container">
            <Sidebar />
            <ChatArea />
        </div>
    }
}

fn main() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Debug).expect("Failed to init logger");
    mount_to_body(App);
}
