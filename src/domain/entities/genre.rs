use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Genre {
    pub id: i32,
    pub name: String,
}

impl Genre {
    pub fn new(id: i32, name: String) -> Self {
        Self { id, name }
    }
}

impl std::fmt::Display for Genre {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Partial update for [`Genre`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GenrePatch {
    pub id: i32,
    pub name: Option<String>,
}

impl GenrePatch {
    pub fn new(id: i32) -> Self {
        Self { id, name: None }
    }

    pub fn with_name(mut self, name: String) -> Self {
        self.name = Some(name);
        self
    }

    pub fn apply_to(&self, genre: &mut Genre) {
        if let Some(name) = &self.name {
            genre.name = name.clone();
        }
    }
}
