use serde::{Deserialize, Serialize};

/// A channel as returned by `GET /api/channels`.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct Channel {
    pub id: i64,
    pub name: String,
}

/// A single chat message.
///
/// The same shape is used by `GET /api/messages/{id}` responses and the
/// `POST /api/messages/{id}` body. The server assigns no identifier or
/// timestamp that this client ever sees.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct Message {
    pub username: String,
    pub text: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn channel_listing_decodes_in_server_order() {
        let body = r#"[{"id":1,"name":"general"},{"id":2,"name":"random"}]"#;
        let channels: Vec<Channel> = serde_json::from_str(body).unwrap();
        assert_eq!(
            channels,
            vec![
                Channel { id: 1, name: "general".to_string() },
                Channel { id: 2, name: "random".to_string() },
            ]
        );
    }

    #[test]
    fn message_listing_decodes() {
        let body = r#"[{"username":"a","text":"hi"},{"username":"b","text":"yo"}]"#;
        let messages: Vec<Message> = serde_json::from_str(body).unwrap();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0], Message { username: "a".to_string(), text: "hi".to_string() });
        assert_eq!(messages[1], Message { username: "b".to_string(), text: "yo".to_string() });
    }

    #[test]
    fn post_body_carries_exactly_username_and_text() {
        let message = Message {
            username: "Parth Bhanushali".to_string(),
            text: "line1\nline2".to_string(),
        };
        let value = serde_json::to_value(&message).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"username": "Parth Bhanushali", "text": "line1\nline2"})
        );
    }
}
