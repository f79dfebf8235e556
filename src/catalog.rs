//! Option catalog
//!
//! The fixed lists of foods, drinks and movies the picker offers. The
//! catalog is immutable for the lifetime of a session.

use crate::state_machine::Category;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// A movie option; the title is the selection key
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovieOption {
    pub title: String,
    pub actor: String,
}

impl MovieOption {
    #[must_use]
    pub fn new(title: impl Into<String>, actor: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            actor: actor.into(),
        }
    }
}

/// Errors raised while loading a catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Malformed catalog: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Catalog has no {0:?} options")]
    EmptyCategory(Category),
    #[error("Catalog lists {category:?} option {key:?} more than once")]
    DuplicateKey { category: Category, key: String },
}

/// The three ordered option lists
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    pub foods: Vec<String>,
    pub drinks: Vec<String>,
    pub movies: Vec<MovieOption>,
}

impl Catalog {
    /// Build a catalog, rejecting empty lists and duplicate keys
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::EmptyCategory`] or [`CatalogError::DuplicateKey`].
    pub fn new(
        foods: Vec<String>,
        drinks: Vec<String>,
        movies: Vec<MovieOption>,
    ) -> Result<Self, CatalogError> {
        let catalog = Self {
            foods,
            drinks,
            movies,
        };
        catalog.validate()?;
        Ok(catalog)
    }

    /// The lists the card ships with
    #[must_use]
    pub fn builtin() -> Self {
        let to_owned = |items: &[&str]| items.iter().map(|s| (*s).to_string()).collect();
        Self {
            foods: to_owned(&BUILTIN_FOODS),
            drinks: to_owned(&BUILTIN_DRINKS),
            movies: BUILTIN_MOVIES
                .iter()
                .map(|(title, actor)| MovieOption::new(*title, *actor))
                .collect(),
        }
    }

    /// # Errors
    ///
    /// Fails on malformed JSON or a catalog that does not validate.
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let catalog: Self = serde_json::from_str(json)?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// # Errors
    ///
    /// Fails if the file cannot be read, or as [`Catalog::from_json_str`].
    pub fn from_json_file(path: &Path) -> Result<Self, CatalogError> {
        let json = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::from_json_str(&json)?;
        tracing::info!(
            path = %path.display(),
            foods = catalog.foods.len(),
            drinks = catalog.drinks.len(),
            movies = catalog.movies.len(),
            "Loaded catalog"
        );
        Ok(catalog)
    }

    /// Selection keys for a category, in catalog order
    #[must_use]
    pub fn keys(&self, category: Category) -> Vec<&str> {
        match category {
            Category::Food => self.foods.iter().map(String::as_str).collect(),
            Category::Drink => self.drinks.iter().map(String::as_str).collect(),
            Category::Movie => self.movies.iter().map(|m| m.title.as_str()).collect(),
        }
    }

    #[must_use]
    pub fn contains(&self, category: Category, key: &str) -> bool {
        match category {
            Category::Food => self.foods.iter().any(|f| f == key),
            Category::Drink => self.drinks.iter().any(|d| d == key),
            Category::Movie => self.movies.iter().any(|m| m.title == key),
        }
    }

    #[must_use]
    pub fn movie_titles(&self) -> Vec<String> {
        self.movies.iter().map(|m| m.title.clone()).collect()
    }

    #[must_use]
    pub fn actor_for(&self, title: &str) -> Option<&str> {
        self.movies
            .iter()
            .find(|m| m.title == title)
            .map(|m| m.actor.as_str())
    }

    fn validate(&self) -> Result<(), CatalogError> {
        for category in Category::ALL {
            let keys = self.keys(category);
            if keys.is_empty() {
                return Err(CatalogError::EmptyCategory(category));
            }
            let mut seen = HashSet::new();
            for key in keys {
                if !seen.insert(key) {
                    return Err(CatalogError::DuplicateKey {
                        category,
                        key: key.to_string(),
                    });
                }
            }
        }
        Ok(())
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

const BUILTIN_FOODS: [&str; 12] = [
    "Strawberry pancakes",
    "Sushi platter",
    "Truffle pasta",
    "Margherita pizza",
    "Tacos al pastor",
    "Korean fried chicken",
    "Caprese salad",
    "Ramen",
    "Steak bites",
    "Chocolate fondue",
    "Macarons",
    "Cheesecake",
];

const BUILTIN_DRINKS: [&str; 12] = [
    "Sparkling rose",
    "Hot cocoa",
    "Matcha latte",
    "Iced coffee",
    "Lavender lemonade",
    "Boba tea",
    "Strawberry milk",
    "Mocktail spritz",
    "Chai",
    "Cold brew",
    "Berry smoothie",
    "Vanilla milkshake",
];

const BUILTIN_MOVIES: [(&str, &str); 15] = [
    ("The Notebook", "Ryan Gosling"),
    ("Pride and Prejudice", "Keira Knightley"),
    ("A Walk to Remember", "Mandy Moore"),
    ("The Vow", "Rachel McAdams"),
    ("Dear John", "Channing Tatum"),
    ("Safe Haven", "Julianne Hough"),
    ("The Best of Me", "James Marsden"),
    ("The Longest Ride", "Scott Eastwood"),
    ("The Lucky One", "Zac Efron"),
    ("About Time", "Domhnall Gleeson"),
    ("Before Sunrise", "Ethan Hawke"),
    ("Notting Hill", "Julia Roberts"),
    ("One Day", "Anne Hathaway"),
    ("Me Before You", "Emilia Clarke"),
    ("The Fault in Our Stars", "Shailene Woodley"),
];
