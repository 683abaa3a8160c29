use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Greeting {
    text: String,
}

impl Greeting {
    pub fn hello_world() -> Self {
        Self {
            text: "Hello World".to_string(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for Greeting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hello_world_greeting_text() {
        let greeting = Greeting::hello_world();
        assert_eq!(greeting.as_str(), "Hello World");
    }

    #[test]
    fn test_greeting_display_matches_text() {
        let greeting = Greeting::hello_world();
        assert_eq!(greeting.to_string(), "Hello World");
    }

    #[test]
    fn test_greeting_serializes_as_plain_string() {
        let greeting = Greeting::hello_world();
        let json = serde_json::to_string(&greeting).unwrap();
        assert_eq!(json, "\"Hello World\"");
    }

    #[test]
    fn test_greeting_deserializes_from_plain_string() {
        let greeting: Greeting = serde_json::from_str("\"Hello World\"").unwrap();
        assert_eq!(greeting, Greeting::hello_world());
    }
}
