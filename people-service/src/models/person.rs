use serde::{Deserialize, Serialize};

/// A person record as stored in the `people` collection and exchanged over
/// HTTP. `name` is the lookup key but nothing enforces its uniqueness.
///
/// The MongoDB `_id` is never exposed; unknown fields are ignored on decode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub name: String,
    pub phone: String,
}

impl Person {
    pub fn new(name: impl Into<String>, phone: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            phone: phone.into(),
        }
    }
}
