use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Director {
    pub id: i32,
    pub name: String,
}

impl Director {
    pub fn new(id: i32, name: String) -> Self {
        Self { id, name }
    }
}

impl std::fmt::Display for Director {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Partial update for [`Director`]. Only declared fields can be patched;
/// unknown keys in incoming data are dropped during deserialization.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DirectorPatch {
    pub id: i32,
    pub name: Option<String>,
}

impl DirectorPatch {
    pub fn new(id: i32) -> Self {
        Self { id, name: None }
    }

    pub fn with_name(mut self, name: String) -> Self {
        self.name = Some(name);
        self
    }

    pub fn apply_to(&self, director: &mut Director) {
        if let Some(name) = &self.name {
            director.name = name.clone();
        }
    }
}
