use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::config::ClientConfig;
use crate::models::{Channel, Message};

/// Shared application state, provided via Leptos context.
///
/// One instance owns every piece of view state; components subscribe to
/// the read signals and mutate through the methods below. The busy flags
/// (`loading`, `sending`) and the picker flag (`menu_open`) are
/// independent booleans — a user can open the picker while a send is in
/// flight.
#[derive(Clone)]
pub struct AppState {
    pub config: ClientConfig,

    // --- Read signals (for components to subscribe to) ---
    pub channels: ReadSignal<Vec<Channel>>,
    pub selected_channel: ReadSignal<Option<Channel>>,
    pub messages: ReadSignal<Vec<Message>>,
    pub loading: ReadSignal<bool>,
    pub draft: ReadSignal<String>,
    pub sending: ReadSignal<bool>,
    pub menu_open: ReadSignal<bool>,

    // --- Write signals (for mutating state) ---
    pub set_channels: WriteSignal<Vec<Channel>>,
    pub set_selected_channel: WriteSignal<Option<Channel>>,
    pub set_messages: WriteSignal<Vec<Message>>,
    pub set_loading: WriteSignal<bool>,
    pub set_draft: WriteSignal<String>,
    pub set_sending: WriteSignal<bool>,
    pub set_menu_open: WriteSignal<bool>,

    // Stamp for message fetches; bumped on every selection so a late
    // response for an earlier channel can be recognised and dropped.
    fetch_generation: ArcStoredValue<u64>,
}

impl AppState {
    /// Create a new `AppState` and provide it in the current Leptos context.
    pub fn provide(config: ClientConfig) -> Self {
        let (channels, set_channels) = signal(Vec::<Channel>::new());
        let (selected_channel, set_selected_channel) = signal(None::<Channel>);
        let (messages, set_messages) = signal(Vec::<Message>::new());
        let (loading, set_loading) = signal(false);
        let (draft, set_draft) = signal(String::new());
        let (sending, set_sending) = signal(false);
        let (menu_open, set_menu_open) = signal(false);

        let state = Self {
            config,
            channels,
            selected_channel,
            messages,
            loading,
            draft,
            sending,
            menu_open,
            set_channels,
            set_selected_channel,
            set_messages,
            set_loading,
            set_draft,
            set_sending,
            set_menu_open,
            fetch_generation: ArcStoredValue::new(0),
        };

        provide_context(state.clone());
        state
    }

    /// Load the channel list from the server.
    ///
    /// Runs once at startup; a failed load leaves the picker empty with
    /// nothing more than a log line.
    pub fn load_channels(&self) {
        let state = self.clone();
        spawn_local(async move {
            match api::fetch_channels(&state.config.api_base).await {
                Ok(channels) => state.set_channels.set(channels),
                Err(e) => log::error!("Error fetching channels: {e}"),
            }
        });
    }

    /// Select a channel: close the picker, clear the pane, and fetch that
    /// channel's messages.
    pub fn select_channel(&self, channel: Channel) {
        let channel_id = channel.id;
        self.set_selected_channel.set(Some(channel));
        self.set_menu_open.set(false);
        self.set_messages.set(Vec::new());
        self.set_loading.set(true);

        let generation = bump_generation(&self.fetch_generation);
        let state = self.clone();
        spawn_local(async move {
            let result = api::fetch_messages(&state.config.api_base, channel_id).await;
            if !generation_is_current(&state.fetch_generation, generation) {
                // A newer selection owns the pane now.
                return;
            }
            match result {
                Ok(messages) => state.set_messages.set(display_order(messages)),
                Err(e) => log::error!("Error fetching messages: {e}"),
            }
            state.set_loading.set(false);
        });
    }

    /// Replace the draft text; called on every composer keystroke.
    pub fn set_draft_text(&self, text: String) {
        self.set_draft.set(text);
    }

    /// True when the composer's send action should be available.
    pub fn can_send(&self) -> bool {
        send_allowed(
            &self.draft.get(),
            self.selected_channel.get().is_some(),
            self.sending.get(),
        )
    }

    /// Post the current draft to the selected channel.
    ///
    /// On success the locally built message is appended and the draft
    /// cleared; on failure the draft survives so the user can retry.
    pub fn send_message(&self) {
        if self.sending.get_untracked() {
            return;
        }
        let Some(channel) = self.selected_channel.get_untracked() else {
            return;
        };
        let Some(message) =
            outgoing_message(&self.config.username, &self.draft.get_untracked())
        else {
            return;
        };

        self.set_sending.set(true);
        let state = self.clone();
        spawn_local(async move {
            match api::post_message(&state.config.api_base, channel.id, &message).await {
                Ok(()) => {
                    state.set_messages.update(|messages| messages.push(message));
                    state.set_draft.set(String::new());
                }
                Err(e) => log::error!("Error sending message: {e}"),
            }
            state.set_sending.set(false);
        });
    }

    /// Open or close the channel picker.
    pub fn toggle_menu(&self) {
        self.set_menu_open.update(|open| *open = !*open);
    }
}

/// The server sends messages newest-first; the pane shows oldest-first, so
/// every fetch is reversed exactly once.
fn display_order(mut messages: Vec<Message>) -> Vec<Message> {
    messages.reverse();
    messages
}

/// Builds the message a send would post, or `None` when the trimmed draft
/// is empty.
fn outgoing_message(username: &str, draft: &str) -> Option<Message> {
    let text = draft.trim();
    if text.is_empty() {
        return None;
    }
    Some(Message {
        username: username.to_string(),
        text: text.to_string(),
    })
}

fn send_allowed(draft: &str, channel_selected: bool, sending: bool) -> bool {
    channel_selected && !sending && !draft.trim().is_empty()
}

fn bump_generation(generation: &ArcStoredValue<u64>) -> u64 {
    let next = generation.get_value() + 1;
    generation.set_value(next);
    next
}

fn generation_is_current(generation: &ArcStoredValue<u64>, dispatched: u64) -> bool {
    generation.get_value() == dispatched
}

#[cfg(test)]
mod tests {
    use super::*;

    fn msg(username: &str, text: &str) -> Message {
        Message {
            username: username.to_string(),
            text: text.to_string(),
        }
    }

    #[test]
    fn fetched_messages_display_in_reverse_order() {
        let fetched = vec![msg("a", "hi"), msg("b", "yo")];
        let displayed = display_order(fetched);
        assert_eq!(displayed, vec![msg("b", "yo"), msg("a", "hi")]);
    }

    #[test]
    fn empty_fetch_displays_empty() {
        assert_eq!(display_order(Vec::new()), Vec::new());
    }

    #[test]
    fn outgoing_message_trims_the_draft() {
        let message = outgoing_message("Parth Bhanushali", "  hello\n").unwrap();
        assert_eq!(message, msg("Parth Bhanushali", "hello"));
    }

    #[test]
    fn outgoing_message_keeps_interior_newlines() {
        let message = outgoing_message("Parth Bhanushali", "line1\nline2").unwrap();
        assert_eq!(message.text, "line1\nline2");
    }

    #[test]
    fn whitespace_only_draft_produces_no_message() {
        assert_eq!(outgoing_message("Parth Bhanushali", ""), None);
        assert_eq!(outgoing_message("Parth Bhanushali", "   \n\t  "), None);
    }

    #[test]
    fn send_gate() {
        assert!(send_allowed("hi", true, false));
        assert!(!send_allowed("", true, false));
        assert!(!send_allowed("   ", true, false));
        assert!(!send_allowed("hi", false, false));
        assert!(!send_allowed("hi", true, true));
    }

    #[test]
    fn only_the_latest_fetch_generation_commits() {
        let generation = ArcStoredValue::new(0u64);
        let first = bump_generation(&generation);
        let second = bump_generation(&generation);
        assert!(!generation_is_current(&generation, first));
        assert!(generation_is_current(&generation, second));
    }
}
