//! Canned-response chat assistant: keyword lookup plus the chat panel
//! component.

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlInputElement, KeyboardEvent};
use yew::prelude::*;

use crate::config;

const REPLY_DELAY_MS: u32 = 800;
const WELCOME_DELAY_MS: u32 = 1500;

/// Reply for a visitor message: first canned row whose keyword appears in
/// the lowercased message, else a handoff to the human team.
pub fn respond(message: &str) -> String {
    let lower = message.to_lowercase();
    for (keyword, reply) in config::CANNED_RESPONSES {
        if lower.contains(keyword) {
            return (*reply).to_string();
        }
    }
    format!(
        "That's a great question! For detailed information about {message}, I'd recommend \
         speaking directly with our team. You can call us at {} or WhatsApp at {} for \
         personalized assistance. Our experts can provide specific answers for your business \
         needs.",
        config::CONTACT_PHONE,
        config::CONTACT_WHATSAPP
    )
}

#[derive(Clone, PartialEq)]
struct ChatMessage {
    text: String,
    from_user: bool,
}

/// Append-only message log. A reducer rather than plain state so that
/// delayed appends (the welcome message, the canned reply) always apply
/// to the latest log instead of the render they were scheduled in.
#[derive(Default, PartialEq)]
struct ChatLog {
    messages: Vec<ChatMessage>,
}

impl Reducible for ChatLog {
    type Action = ChatMessage;

    fn reduce(self: std::rc::Rc<Self>, message: ChatMessage) -> std::rc::Rc<Self> {
        let mut messages = self.messages.clone();
        messages.push(message);
        std::rc::Rc::new(ChatLog { messages })
    }
}

#[function_component(ChatAssistant)]
pub fn chat_assistant() -> Html {
    let log = use_reducer(ChatLog::default);
    let draft = use_state(String::new);
    let list_ref = use_node_ref();

    // Welcome message shortly after mount.
    {
        let log = log.clone();
        use_effect_with_deps(
            move |_| {
                let timeout = Timeout::new(WELCOME_DELAY_MS, move || {
                    log.dispatch(ChatMessage {
                        text: "Hi! I'm your AI assistant. I can help answer questions about our \
                               services, pricing, timelines, and more. What would you like to know?"
                            .to_string(),
                        from_user: false,
                    });
                });
                move || drop(timeout)
            },
            (),
        );
    }

    // Keep the newest message in view.
    {
        let list_ref = list_ref.clone();
        use_effect_with_deps(
            move |_| {
                if let Some(list) = list_ref.cast::<Element>() {
                    list.set_scroll_top(list.scroll_height());
                }
                || ()
            },
            log.messages.len(),
        );
    }

    let send = {
        let log = log.clone();
        Callback::from(move |text: String| {
            let text = text.trim().to_string();
            if text.is_empty() {
                return;
            }
            log.dispatch(ChatMessage {
                text: text.clone(),
                from_user: true,
            });

            let log = log.clone();
            Timeout::new(REPLY_DELAY_MS, move || {
                log.dispatch(ChatMessage {
                    text: respond(&text),
                    from_user: false,
                });
            })
            .forget();
        })
    };

    let on_send_click = {
        let draft = draft.clone();
        let send = send.clone();
        Callback::from(move |_| {
            send.emit((*draft).clone());
            draft.set(String::new());
        })
    };

    let on_keypress = {
        let draft = draft.clone();
        let send = send.clone();
        Callback::from(move |event: KeyboardEvent| {
            if event.key() == "Enter" {
                send.emit((*draft).clone());
                draft.set(String::new());
            }
        })
    };

    let on_input = {
        let draft = draft.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event
                .target()
                .and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
            {
                draft.set(input.value());
            }
        })
    };

    html! {
        <div class="chat-panel">
            <div id="chatMessages" class="chat-messages" ref={list_ref}>
                { for log.messages.iter().map(render_message) }
            </div>
            <div class="chat-quick-questions">
                { for config::QUICK_QUESTIONS.iter().map(|&question| {
                    let send = send.clone();
                    let text = question.to_string();
                    let onclick = Callback::from(move |_| send.emit(text.clone()));
                    html! {
                        <button class="quick-question" {onclick}>{question}</button>
                    }
                })}
            </div>
            <div class="chat-input-row">
                <input
                    id="chatInput"
                    class="chat-input"
                    type="text"
                    placeholder="Ask about pricing, timelines, SEO..."
                    value={(*draft).clone()}
                    oninput={on_input}
                    onkeypress={on_keypress}
                />
                <button class="chat-send btn" onclick={on_send_click}>
                    <i class="fas fa-paper-plane"></i>
                </button>
            </div>
        </div>
    }
}

fn render_message(message: &ChatMessage) -> Html {
    if message.from_user {
        html! {
            <div class="flex items-start justify-end mb-3">
                <div class="bg-blue-500 text-white rounded-lg p-3 max-w-xs">
                    <p class="text-sm">{&message.text}</p>
                </div>
                <div class="w-8 h-8 bg-blue-500 rounded-full flex items-center justify-center ml-2 flex-shrink-0">
                    <i class="fas fa-user text-white text-xs"></i>
                </div>
            </div>
        }
    } else {
        html! {
            <div class="flex items-start mb-3">
                <div class="w-8 h-8 bg-gradient-to-r from-blue-500 to-purple-600 rounded-full flex items-center justify-center mr-2 flex-shrink-0">
                    <i class="fas fa-robot text-white text-xs"></i>
                </div>
                <div class="bg-gray-100 rounded-lg p-3 max-w-xs">
                    <p class="text-sm text-gray-800">{&message.text}</p>
                </div>
            </div>
        }
    }
}

#[cfg(test)]
mod tests {
    use super::respond;

    #[test]
    fn keyword_match_is_case_insensitive() {
        let reply = respond("How Much Does A Website Cost?");
        assert!(reply.starts_with("Our website packages start from ₹7,999"));
    }

    #[test]
    fn keyword_matches_anywhere_in_the_message() {
        let reply = respond("hello, what is your timeline for delivery");
        assert!(reply.starts_with("Standard delivery: 5-7 days."));
    }

    #[test]
    fn more_specific_phrase_wins_over_its_substring() {
        // "how much does a website cost" contains "website cost"; the
        // longer row comes first in the table and must win.
        let specific = respond("how much does a website cost");
        let generic = respond("website cost estimate please");
        assert_ne!(specific, generic);
        assert!(generic.starts_with("Website costs vary by features"));
    }

    #[test]
    fn unknown_question_falls_back_to_contact_handoff() {
        let reply = respond("do you build spaceships");
        assert!(reply.contains("do you build spaceships"));
        assert!(reply.contains("951-172-1668"));
        assert!(reply.contains("787-584-5879"));
    }
}
