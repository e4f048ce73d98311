use leptos::ev;
use leptos::prelude::*;

use crate::models::Message;
use crate::state::AppState;

/// Right panel: header, message pane, and composer for the selected
/// channel, or a placeholder when nothing is selected yet.
#[component]
pub fn ChatArea() -> impl IntoView {
    let state = expect_context::<AppState>();

    view! {
        <main class="chat-area">
            {move || match state.selected_channel.get() {
                Some(channel) => {
                    view! {
                        <div class="chat-header">
                            <h2>{format!("{} Messages", channel.name)}</h2>
                        </div>
                        <MessagePane />
                        <Composer />
                    }
                        .into_any()
                }
                None => {
                    view! {
                        <div class="placeholder">
                            <p>"Select a channel to see messages"</p>
                        </div>
                    }
                        .into_any()
                }
            }}
        </main>
    }
}

/// The message list, with its transient loading and empty states.
#[component]
fn MessagePane() -> impl IntoView {
    let state = expect_context::<AppState>();

    view! {
        <div class="messages-container">
            {move || {
                if state.loading.get() {
                    return view! { <div class="loading-notice">"Loading messages..."</div> }
                        .into_any();
                }
                if state.messages.get().is_empty() {
                    return view! {
                        <div class="empty-notice">"No messages in this channel yet."</div>
                    }
                        .into_any();
                }
                view! {
                    <ul class="message-list">
                        <For
                            each=move || state.messages.get().into_iter().enumerate()
                            key=|(idx, _)| *idx
                            let:entry
                        >
                            {
                                let (_, message) = entry;
                                view! { <MessageItem message=message /> }
                            }
                        </For>
                    </ul>
                }
                    .into_any()
            }}
        </div>
    }
}

/// A single `sender: body` entry. Newlines in the body become explicit
/// `<br/>` elements rather than relying on the surrounding element to
/// preserve whitespace.
#[component]
fn MessageItem(message: Message) -> impl IntoView {
    let body = body_segments(&message.text)
        .into_iter()
        .enumerate()
        .map(|(idx, segment)| {
            view! {
                {(idx > 0).then(|| view! { <br/> })}
                {segment}
            }
        })
        .collect_view();

    view! {
        <li class="message">
            <strong class="message-sender">{format!("{}: ", message.username)}</strong>
            <span class="message-body">{body}</span>
        </li>
    }
}

/// Splits a body on bare `\n`. Empty segments are kept so blank lines
/// survive rendering.
fn body_segments(text: &str) -> Vec<String> {
    text.split('\n').map(str::to_string).collect()
}

/// Composer: textarea plus send button.
#[component]
fn Composer() -> impl IntoView {
    let state = expect_context::<AppState>();

    let send = {
        let state = state.clone();
        move || state.send_message()
    };

    let on_keydown = {
        let send = send.clone();
        move |ev: ev::KeyboardEvent| {
            if ev.key() == "Enter" && !ev.shift_key() {
                ev.prevent_default();
                send();
            }
        }
    };

    let on_click = {
        let send = send.clone();
        move |_| send()
    };

    let disabled = {
        let state = state.clone();
        move || !state.can_send()
    };

    let input_state = state.clone();
    view! {
        <div class="input-area">
            <textarea
                rows="3"
                placeholder="Type a message..."
                prop:value=move || state.draft.get()
                on:input=move |ev| input_state.set_draft_text(event_target_value(&ev))
                on:keydown=on_keydown
            />
            <button class="send-btn" on:click=on_click disabled=disabled>
                {move || if state.sending.get() { "Sending..." } else { "Send" }}
            </button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn multi_line_bodies_split_on_newlines() {
        assert_eq!(body_segments("line1\nline2"), vec!["line1", "line2"]);
    }

    #[test]
    fn single_line_bodies_stay_whole() {
        assert_eq!(body_segments("hello"), vec!["hello"]);
    }

    #[test]
    fn blank_lines_are_preserved_as_empty_segments() {
        assert_eq!(body_segments("a\n\nb"), vec!["a", "", "b"]);
        assert_eq!(body_segments("\n"), vec!["", ""]);
    }
}
