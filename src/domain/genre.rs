//! Genre catalog for category browsing
//!
//! The external API filters discovery by numeric genre id. The
//! name-to-id table is static and owned by the caller side; the
//! favorites repository never sees genres.

use serde::{Deserialize, Serialize};

/// Browsable movie genres with their external API ids
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Genre {
    Action,
    Adventure,
    Comedy,
    Drama,
    Fantasy,
    Horror,
    Romance,
    SciFi,
    Thriller,
}

impl Genre {
    /// All browsable genres, in display order
    pub const ALL: [Genre; 9] = [
        Genre::Action,
        Genre::Adventure,
        Genre::Comedy,
        Genre::Drama,
        Genre::Fantasy,
        Genre::Horror,
        Genre::Romance,
        Genre::SciFi,
        Genre::Thriller,
    ];

    /// External API genre id
    pub fn id(&self) -> u32 {
        match self {
            Genre::Action => 28,
            Genre::Adventure => 12,
            Genre::Comedy => 35,
            Genre::Drama => 18,
            Genre::Fantasy => 14,
            Genre::Horror => 27,
            Genre::Romance => 10749,
            Genre::SciFi => 878,
            Genre::Thriller => 53,
        }
    }

    /// Display name
    pub fn name(&self) -> &'static str {
        match self {
            Genre::Action => "Action",
            Genre::Adventure => "Adventure",
            Genre::Comedy => "Comedy",
            Genre::Drama => "Drama",
            Genre::Fantasy => "Fantasy",
            Genre::Horror => "Horror",
            Genre::Romance => "Romance",
            Genre::SciFi => "Sci-Fi",
            Genre::Thriller => "Thriller",
        }
    }

    /// Case-insensitive lookup by display name
    ///
    /// Unknown names return None; callers reject them instead of
    /// querying the API with a meaningless genre id.
    pub fn from_name(name: &str) -> Option<Genre> {
        match name.trim().to_lowercase().as_str() {
            "action" => Some(Genre::Action),
            "adventure" => Some(Genre::Adventure),
            "comedy" => Some(Genre::Comedy),
            "drama" => Some(Genre::Drama),
            "fantasy" => Some(Genre::Fantasy),
            "horror" => Some(Genre::Horror),
            "romance" => Some(Genre::Romance),
            "sci-fi" | "scifi" => Some(Genre::SciFi),
            "thriller" => Some(Genre::Thriller),
            _ => None,
        }
    }
}

impl std::fmt::Display for Genre {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
