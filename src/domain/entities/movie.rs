use serde::{Deserialize, Serialize};

/// A catalog entry. `genre_id` and `director_id` are opaque references,
/// not validated at this layer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Movie {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub trailer: String,
    pub year: i32,
    pub rating: f32,
    pub genre_id: i32,
    pub director_id: i32,
}

impl std::fmt::Display for Movie {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.title, self.year)
    }
}

/// Partial update for [`Movie`]. One `Option` per declared field; anything
/// else arriving in incoming data is dropped during deserialization.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct MoviePatch {
    pub id: i32,
    pub title: Option<String>,
    pub description: Option<String>,
    pub trailer: Option<String>,
    pub year: Option<i32>,
    pub rating: Option<f32>,
    pub genre_id: Option<i32>,
    pub director_id: Option<i32>,
}

impl MoviePatch {
    pub fn new(id: i32) -> Self {
        Self {
            id,
            ..Default::default()
        }
    }

    pub fn with_title(mut self, title: String) -> Self {
        self.title = Some(title);
        self
    }

    pub fn with_description(mut self, description: String) -> Self {
        self.description = Some(description);
        self
    }

    pub fn with_trailer(mut self, trailer: String) -> Self {
        self.trailer = Some(trailer);
        self
    }

    pub fn with_year(mut self, year: i32) -> Self {
        self.year = Some(year);
        self
    }

    pub fn with_rating(mut self, rating: f32) -> Self {
        self.rating = Some(rating);
        self
    }

    pub fn with_genre_id(mut self, genre_id: i32) -> Self {
        self.genre_id = Some(genre_id);
        self
    }

    pub fn with_director_id(mut self, director_id: i32) -> Self {
        self.director_id = Some(director_id);
        self
    }

    pub fn apply_to(&self, movie: &mut Movie) {
        if let Some(title) = &self.title {
            movie.title = title.clone();
        }
        if let Some(description) = &self.description {
            movie.description = description.clone();
        }
        if let Some(trailer) = &self.trailer {
            movie.trailer = trailer.clone();
        }
        if let Some(year) = self.year {
            movie.year = year;
        }
        if let Some(rating) = self.rating {
            movie.rating = rating;
        }
        if let Some(genre_id) = self.genre_id {
            movie.genre_id = genre_id;
        }
        if let Some(director_id) = self.director_id {
            movie.director_id = director_id;
        }
    }
}
