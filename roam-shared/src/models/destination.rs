use serde::{Deserialize, Serialize};

/// A destination card shown in the popular destinations gallery.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Destination {
    pub title: String,
    pub description: String,
    pub image: String,
}

impl Destination {
    pub fn new(title: &str, description: &str, image: &str) -> Self {
        Self {
            title: title.to_string(),
            description: description.to_string(),
            image: image.to_string(),
        }
    }
}
