/// Client configuration, injected at startup.
///
/// The deployment this client was written for pins both values, so
/// `Default` carries them; nothing outside this module hard-codes either.
#[derive(Clone, Debug)]
pub struct ClientConfig {
    /// Base URL of the chat API server.
    pub api_base: String,
    /// Identity attached to every message this client posts.
    pub username: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: "http://localhost:3001".to_string(),
            username: "Parth Bhanushali".to_string(),
        }
    }
}
