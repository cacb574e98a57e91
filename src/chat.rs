#[cfg(feature = "ssr")]
pub mod completion;
#[cfg(feature = "ssr")]
pub mod prompt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::content::OWNER_FIRST_NAME;

pub const CONNECTION_ERROR_TEXT: &str =
    "I'm sorry, I'm having trouble connecting right now. Please try again later.";

/// Body of `POST /api/chatbot`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    #[serde(default)]
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_bot_message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatReply {
    pub reply: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub id: u32,
    pub text: String,
    pub is_bot: bool,
    pub timestamp: DateTime<Utc>,
    pub is_error: bool,
    pub is_typing: bool,
}

/// The chat widget's session: an ordered list of messages with at most one
/// request in flight.
#[derive(Debug, Clone)]
pub struct Transcript {
    messages: Vec<ChatMessage>,
    next_id: u32,
    pending: bool,
}

impl Default for Transcript {
    fn default() -> Self {
        Self::new()
    }
}

impl Transcript {
    pub fn new() -> Self {
        let mut transcript = Self {
            messages: Vec::new(),
            next_id: 1,
            pending: false,
        };
        transcript.push(
            format!("Hi! I'm {OWNER_FIRST_NAME}'s AI assistant. How can I help you learn more about him? 😊"),
            true,
        );
        transcript
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Text of the latest real bot message, skipping the typing placeholder.
    pub fn last_bot_text(&self) -> Option<&str> {
        self.messages
            .iter()
            .rev()
            .find(|m| m.is_bot && !m.is_typing)
            .map(|m| m.text.as_str())
    }

    fn push(&mut self, text: String, is_bot: bool) -> &mut ChatMessage {
        let id = self.next_id;
        self.next_id += 1;
        self.messages.push(ChatMessage {
            id,
            text,
            is_bot,
            timestamp: Utc::now(),
            is_error: false,
            is_typing: false,
        });
        self.messages
            .last_mut()
            .expect("a message was just pushed")
    }

    /// Records the user's message and a typing placeholder, returning the
    /// request to send. Returns `None` for blank input or while a request is
    /// already pending.
    pub fn submit(&mut self, text: &str) -> Option<ChatRequest> {
        if self.pending || text.trim().is_empty() {
            return None;
        }
        let last_bot_message = self.last_bot_text().map(str::to_string);
        self.push(text.to_string(), false);
        self.push(String::new(), true).is_typing = true;
        self.pending = true;
        Some(ChatRequest {
            message: text.to_string(),
            last_bot_message,
        })
    }

    /// Replaces the typing placeholder with the reply, or with an error
    /// message when the request failed.
    pub fn resolve<E>(&mut self, result: Result<String, E>) {
        self.messages.retain(|m| !m.is_typing);
        self.pending = false;
        match result {
            Ok(reply) => {
                self.push(reply, true);
            }
            Err(_) => {
                self.push(CONNECTION_ERROR_TEXT.to_string(), true).is_error = true;
            }
        }
    }
}

/// A piece of a bot reply, as rendered by the widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Text(String),
    Bold(String),
    /// Contains an anchor; rendered as raw HTML.
    Html(String),
}

const LINK_ATTRS: &str =
    r#"<a class="text-accent-blue hover:underline" target="_blank" rel="noopener noreferrer" href="#;

/// Splits a reply on `**bold**` markers. Markers inside HTML tags are left
/// alone, and text carrying `<a href=` anchors is passed through as HTML
/// with the anchors opening in a new tab.
pub fn format_reply(text: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut plain = String::new();
    let mut rest = text;

    let flush = |plain: &mut String, segments: &mut Vec<Segment>| {
        if plain.is_empty() {
            return;
        }
        let s = std::mem::take(plain);
        if s.contains("<a href=") {
            segments.push(Segment::Html(s.replace("<a href=", LINK_ATTRS)));
        } else {
            segments.push(Segment::Text(s));
        }
    };

    while !rest.is_empty() {
        let tag = rest.find('<');
        let bold = rest.find("**");
        match (tag, bold) {
            (Some(t), b) if b.map_or(true, |b| t < b) => {
                let after = &rest[t + 1..];
                let end = match after.find(&['<', '>'][..]) {
                    // a complete tag is copied verbatim
                    Some(e) if e > 0 && after[e..].starts_with('>') => t + 1 + e + 1,
                    // a lone `<` is plain text
                    _ => t + 1,
                };
                plain.push_str(&rest[..end]);
                rest = &rest[end..];
            }
            (_, Some(b)) => match rest[b + 2..].find("**") {
                Some(close) => {
                    plain.push_str(&rest[..b]);
                    flush(&mut plain, &mut segments);
                    segments.push(Segment::Bold(rest[b + 2..b + 2 + close].to_string()));
                    rest = &rest[b + 2 + close + 2..];
                }
                None => {
                    plain.push_str(rest);
                    rest = "";
                }
            },
            _ => {
                plain.push_str(rest);
                rest = "";
            }
        }
    }
    flush(&mut plain, &mut segments);
    segments
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transcript_starts_with_greeting() {
        let t = Transcript::new();
        assert_eq!(t.messages().len(), 1);
        assert!(t.messages()[0].is_bot);
        assert_eq!(t.last_bot_text(), Some(t.messages()[0].text.as_str()));
    }

    #[test]
    fn test_submit_appends_user_and_placeholder() {
        let mut t = Transcript::new();
        let greeting = t.messages()[0].text.clone();
        let req = t.submit("What does he study?").unwrap();
        assert_eq!(req.message, "What does he study?");
        assert_eq!(req.last_bot_message, Some(greeting));
        assert!(t.is_pending());

        let msgs = t.messages();
        assert_eq!(msgs.len(), 3);
        assert!(!msgs[1].is_bot);
        assert!(msgs[2].is_typing);
    }

    #[test]
    fn test_blank_and_concurrent_submits_are_ignored() {
        let mut t = Transcript::new();
        assert!(t.submit("   ").is_none());
        assert!(t.submit("first").is_some());
        assert!(t.submit("second").is_none());
        assert_eq!(t.messages().len(), 3);
    }

    #[test]
    fn test_resolve_replaces_placeholder() {
        let mut t = Transcript::new();
        t.submit("hello").unwrap();
        t.resolve::<()>(Ok("Hi there".to_string()));
        assert!(!t.is_pending());
        let msgs = t.messages();
        assert_eq!(msgs.len(), 3);
        assert!(msgs.iter().all(|m| !m.is_typing));
        assert_eq!(msgs[2].text, "Hi there");
        assert_eq!(t.last_bot_text(), Some("Hi there"));
    }

    #[test]
    fn test_resolve_failure_marks_error() {
        let mut t = Transcript::new();
        t.submit("hello").unwrap();
        t.resolve::<&str>(Err("offline"));
        let last = t.messages().last().unwrap();
        assert!(last.is_error);
        assert_eq!(last.text, CONNECTION_ERROR_TEXT);
    }

    #[test]
    fn test_ids_strictly_increase() {
        let mut t = Transcript::new();
        for i in 0..3 {
            t.submit(&format!("question {i}")).unwrap();
            t.resolve::<()>(Ok(format!("answer {i}")));
        }
        let ids = t.messages().iter().map(|m| m.id).collect::<Vec<_>>();
        assert!(ids.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_request_wire_format() {
        let req = ChatRequest {
            message: "hi".to_string(),
            last_bot_message: Some("hello".to_string()),
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["lastBotMessage"], "hello");

        let parsed: ChatRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(parsed.message, "");
        assert_eq!(parsed.last_bot_message, None);
    }

    #[test]
    fn test_format_bold() {
        assert_eq!(
            format_reply("He studies **Data & AI** at ECE."),
            vec![
                Segment::Text("He studies ".to_string()),
                Segment::Bold("Data & AI".to_string()),
                Segment::Text(" at ECE.".to_string()),
            ]
        );
    }

    #[test]
    fn test_format_link_and_unclosed_bold() {
        let segments =
            format_reply(r#"See <a href="https://github.com/x">GitHub</a> **not closed"#);
        assert_eq!(segments.len(), 1);
        match &segments[0] {
            Segment::Html(html) => {
                assert!(html.contains(r#"target="_blank""#));
                assert!(html.contains(r#"href="https://github.com/x""#));
                assert!(html.ends_with("**not closed"));
            }
            other => panic!("expected html, got {other:?}"),
        }
    }

    #[test]
    fn test_format_ignores_markers_inside_tags() {
        let segments = format_reply(r#"<a href="https://x.io/**y**">x</a>"#);
        assert_eq!(segments.len(), 1);
        assert!(matches!(&segments[0], Segment::Html(h) if h.contains("/**y**")));
    }

    #[test]
    fn test_format_stray_angle_bracket_keeps_bold() {
        assert_eq!(
            format_reply("He has <5 years of **Python** experience."),
            vec![
                Segment::Text("He has <5 years of ".to_string()),
                Segment::Bold("Python".to_string()),
                Segment::Text(" experience.".to_string()),
            ]
        );
        assert_eq!(
            format_reply("a < b <i>**c**</i>"),
            vec![
                Segment::Text("a < b <i>".to_string()),
                Segment::Bold("c".to_string()),
                Segment::Text("</i>".to_string()),
            ]
        );
    }
}
