//! Joke record types
//!
//! `Joke` is the stored form. `RawJoke` is what the data file may contain
//! (the id is optional there). `NewJoke` and `JokePatch` carry request
//! payloads into the store.
//!
//! Fields the service does not know about ride along in `extra`, so a
//! snapshot writes back everything that was loaded.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A stored joke
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Joke {
    /// Unique, immutable, never reused
    pub id: u64,

    /// Category label, e.g. "general" or "programming"
    #[serde(rename = "type")]
    pub kind: String,

    pub setup: String,

    pub punchline: String,

    /// Absent until the first like or dislike
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub likes: Option<i64>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A joke as found in the backing file, before ids are settled
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawJoke {
    #[serde(default)]
    pub id: Option<u64>,

    #[serde(rename = "type")]
    pub kind: String,

    pub setup: String,

    pub punchline: String,

    #[serde(default)]
    pub likes: Option<i64>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl RawJoke {
    /// Convenience constructor for a record without id or likes
    pub fn new(kind: impl Into<String>, setup: impl Into<String>, punchline: impl Into<String>) -> Self {
        Self {
            id: None,
            kind: kind.into(),
            setup: setup.into(),
            punchline: punchline.into(),
            likes: None,
            extra: Map::new(),
        }
    }

    /// Set an explicit id
    pub fn with_id(mut self, id: u64) -> Self {
        self.id = Some(id);
        self
    }
}

/// Validated fields for a joke that has not been assigned an id yet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewJoke {
    pub kind: String,
    pub setup: String,
    pub punchline: String,
}

impl NewJoke {
    pub fn new(kind: impl Into<String>, setup: impl Into<String>, punchline: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            setup: setup.into(),
            punchline: punchline.into(),
        }
    }

    /// Attach an id, producing a storable record
    pub fn into_joke(self, id: u64) -> Joke {
        Joke {
            id,
            kind: self.kind,
            setup: self.setup,
            punchline: self.punchline,
            likes: None,
            extra: Map::new(),
        }
    }
}

/// Partial update. A field that is `None` or empty leaves the stored value alone.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct JokePatch {
    #[serde(default, rename = "type")]
    pub kind: Option<String>,

    #[serde(default)]
    pub setup: Option<String>,

    #[serde(default)]
    pub punchline: Option<String>,
}

impl JokePatch {
    /// Apply the non-empty fields to `joke`. `id` and `likes` are never touched.
    pub fn apply(&self, joke: &mut Joke) {
        overwrite_if_present(&mut joke.kind, &self.kind);
        overwrite_if_present(&mut joke.setup, &self.setup);
        overwrite_if_present(&mut joke.punchline, &self.punchline);
    }
}

fn overwrite_if_present(target: &mut String, value: &Option<String>) {
    if let Some(value) = value.as_deref().filter(|v| !v.is_empty()) {
        *target = value.to_string();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> Joke {
        NewJoke::new("pun", "Why?", "Because.").into_joke(3)
    }

    #[test]
    fn test_serializes_type_and_omits_unset_likes() {
        let value = serde_json::to_value(sample()).unwrap();
        assert_eq!(
            value,
            json!({"id": 3, "type": "pun", "setup": "Why?", "punchline": "Because."})
        );
    }

    #[test]
    fn test_serializes_negative_likes() {
        let mut joke = sample();
        joke.likes = Some(-1);
        let value = serde_json::to_value(joke).unwrap();
        assert_eq!(value["likes"], json!(-1));
    }

    #[test]
    fn test_raw_joke_without_id() {
        let raw: RawJoke = serde_json::from_value(json!({
            "type": "general",
            "setup": "a",
            "punchline": "b"
        }))
        .unwrap();
        assert_eq!(raw.id, None);
        assert_eq!(raw.likes, None);
        assert_eq!(raw.kind, "general");
    }

    #[test]
    fn test_unknown_fields_survive_round_trip() {
        let raw: RawJoke = serde_json::from_value(json!({
            "id": 5,
            "type": "general",
            "setup": "a",
            "punchline": "b",
            "author": "anon",
            "tags": ["short"]
        }))
        .unwrap();
        assert_eq!(raw.extra.get("author"), Some(&json!("anon")));
        assert!(!raw.extra.contains_key("setup"));

        let joke = Joke {
            id: 5,
            kind: raw.kind,
            setup: raw.setup,
            punchline: raw.punchline,
            likes: raw.likes,
            extra: raw.extra,
        };
        let value = serde_json::to_value(&joke).unwrap();
        assert_eq!(value["author"], json!("anon"));
        assert_eq!(value["tags"], json!(["short"]));
        assert_eq!(value["type"], json!("general"));
    }

    #[test]
    fn test_patch_ignores_empty_strings() {
        let mut joke = sample();
        let patch = JokePatch {
            kind: Some(String::new()),
            setup: Some("New setup".to_string()),
            punchline: None,
        };
        patch.apply(&mut joke);

        assert_eq!(joke.kind, "pun");
        assert_eq!(joke.setup, "New setup");
        assert_eq!(joke.punchline, "Because.");
        assert_eq!(joke.id, 3);
    }

    #[test]
    fn test_patch_is_idempotent() {
        let mut joke = sample();
        let patch = JokePatch {
            kind: Some("dad".to_string()),
            setup: None,
            punchline: Some("Just because.".to_string()),
        };
        patch.apply(&mut joke);
        let once = joke.clone();
        patch.apply(&mut joke);
        assert_eq!(joke, once);
    }
}
