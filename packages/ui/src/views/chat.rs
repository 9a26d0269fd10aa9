//! # Chat page — one conversation with the AI advisor
//!
//! Exactly one [`advisor::ChatSession`] is opened per page lifetime, seeded
//! with a fixed instruction context. The visible transcript is a [`ChatLog`]:
//! append-only, starting with a fixed greeting, with the user's message added
//! optimistically before the request goes out. A failed send appends a fixed
//! fallback line instead of surfacing the underlying error, so the transcript
//! stays in strict user/model alternation no matter what the service does.
//!
//! Sends are ignored while a request is in flight — one outstanding request
//! per page, which also keeps the alternation invariant trivially true.

use dioxus::prelude::*;

use crate::make_advisor;
use advisor::Role;

const CHAT_CSS: Asset = asset!("/assets/styling/chat.css");

const SYSTEM_PROMPT: &str = "You are Edulynx AI, a specialized study abroad \
    consultant. Help students find universities, understand visa requirements, \
    compare programs, and provide tips for SOPs and LORs. Be professional, \
    encouraging, and informative.";

/// Greeting shown before the first exchange.
pub const GREETING: &str = "Hello! I'm your Edulynx AI Advisor. How can I \
    help you with your study abroad plans today?";

/// Shown in place of a reply when the request fails.
pub const SEND_FALLBACK: &str = "Oops! I ran into an error. Please try again later.";

/// Shown when the service answers with empty text.
pub const EMPTY_REPLY_FALLBACK: &str = "I'm sorry, I couldn't process that.";

/// One transcript entry.
#[derive(Clone, Debug, PartialEq)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
    pub timestamp: String,
}

/// Append-only transcript for the chat view.
#[derive(Clone, Debug, PartialEq)]
pub struct ChatLog {
    messages: Vec<ChatMessage>,
}

impl ChatLog {
    /// A log holding only the fixed greeting.
    pub fn seeded() -> Self {
        let mut log = Self {
            messages: Vec::new(),
        };
        log.push(Role::Model, GREETING);
        log
    }

    pub fn push_user(&mut self, content: &str) {
        self.push(Role::User, content);
    }

    /// Append a model reply, substituting the empty-reply fallback for blank
    /// text.
    pub fn push_reply(&mut self, content: &str) {
        if content.trim().is_empty() {
            self.push(Role::Model, EMPTY_REPLY_FALLBACK);
        } else {
            self.push(Role::Model, content);
        }
    }

    /// Append the fixed failure line as the model's entry.
    pub fn push_fallback(&mut self) {
        self.push(Role::Model, SEND_FALLBACK);
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    fn push(&mut self, role: Role, content: &str) {
        self.messages.push(ChatMessage {
            role,
            content: content.to_string(),
            timestamp: current_time(),
        });
    }
}

#[cfg(target_arch = "wasm32")]
fn current_time() -> String {
    let date = js_sys::Date::new_0();
    let h = date.get_hours();
    let m = date.get_minutes();
    format!("{h:02}:{m:02}")
}

#[cfg(not(target_arch = "wasm32"))]
fn current_time() -> String {
    "00:00".to_string()
}

#[component]
pub fn ChatView() -> Element {
    let session = use_signal(|| make_advisor().start_session(SYSTEM_PROMPT));
    let mut log = use_signal(ChatLog::seeded);
    let mut draft = use_signal(String::new);
    let mut typing = use_signal(|| false);

    let mut send_message = move || {
        let message = draft().trim().to_string();
        if message.is_empty() || typing() {
            return;
        }
        draft.set(String::new());
        log.write().push_user(&message);
        typing.set(true);

        spawn(async move {
            let session = session();
            match session.send(&message).await {
                Ok(reply) => log.write().push_reply(&reply.text),
                Err(e) => {
                    tracing::error!("chat send failed: {e}");
                    log.write().push_fallback();
                }
            }
            typing.set(false);
        });
    };

    let messages = log().messages().to_vec();

    rsx! {
        document::Stylesheet { href: CHAT_CSS }

        div {
            class: "chat-page",

            header {
                class: "chat-header",
                div { class: "chat-header-avatar", "AI" }
                div {
                    h3 { class: "chat-header-title", "Edulynx AI Advisor" }
                    span { class: "chat-header-status", "Online • 24/7 Support" }
                }
            }

            div {
                class: "chat-messages",
                for (idx, msg) in messages.into_iter().enumerate() {
                    div {
                        key: "{idx}",
                        class: if msg.role == Role::User { "chat-row user" } else { "chat-row model" },
                        div {
                            class: "chat-bubble",
                            p { class: "chat-bubble-text", "{msg.content}" }
                            span { class: "chat-bubble-time", "{msg.timestamp}" }
                        }
                    }
                }
                if typing() {
                    div {
                        class: "chat-row model",
                        div {
                            class: "chat-bubble chat-typing",
                            span { class: "chat-typing-dot" }
                            span { class: "chat-typing-dot" }
                            span { class: "chat-typing-dot" }
                        }
                    }
                }
            }

            div {
                class: "chat-input-row",
                input {
                    class: "chat-input",
                    r#type: "text",
                    placeholder: "Ask about universities, documents, or visa help...",
                    value: draft(),
                    oninput: move |evt| draft.set(evt.value()),
                    onkeydown: move |evt| {
                        if evt.key() == Key::Enter {
                            send_message();
                        }
                    },
                }
                button {
                    class: "chat-send",
                    disabled: typing() || draft().trim().is_empty(),
                    onclick: move |_| send_message(),
                    "Send"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_log_starts_with_greeting() {
        let log = ChatLog::seeded();
        assert_eq!(log.messages().len(), 1);
        assert_eq!(log.messages()[0].role, Role::Model);
        assert_eq!(log.messages()[0].content, GREETING);
    }

    #[test]
    fn test_sends_alternate_strictly_after_greeting() {
        let mut log = ChatLog::seeded();
        log.push_user("one");
        log.push_reply("reply one");
        log.push_user("two");
        log.push_fallback();
        log.push_user("three");
        log.push_reply("reply three");

        let messages = log.messages();
        // Greeting, then N user entries interleaved with N model-or-fallback
        // entries in strict alternation.
        assert_eq!(messages.len(), 7);
        for (idx, msg) in messages.iter().enumerate() {
            let expected = if idx % 2 == 1 { Role::User } else { Role::Model };
            assert_eq!(msg.role, expected, "entry {idx}");
        }
    }

    #[test]
    fn test_failed_send_appends_fixed_fallback() {
        let mut log = ChatLog::seeded();
        log.push_user("hello");
        log.push_fallback();
        assert_eq!(log.messages().last().unwrap().content, SEND_FALLBACK);
    }

    #[test]
    fn test_blank_reply_substitutes_fallback_copy() {
        let mut log = ChatLog::seeded();
        log.push_user("hello");
        log.push_reply("   ");
        assert_eq!(
            log.messages().last().unwrap().content,
            EMPTY_REPLY_FALLBACK
        );
    }
}
