//! Random but plausible Books and Authors for scenarios that do not need the
//! static fixtures.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::types::{Author, Book};

/// Last name used when a generated full name has no second token.
pub const FALLBACK_LAST_NAME: &str = "TestLastName";

pub const RANDOM_BOOK_DESCRIPTION: &str = "Auto-generated book description for testing purposes";
pub const RANDOM_BOOK_EXCERPT: &str = "This is an auto-generated excerpt for testing";
pub const RANDOM_BOOK_PUBLISH_DATE: &str = "2024-01-01T00:00:00.000Z";

const FIRST_NAMES: &[&str] = &[
    "Amelia", "Bruno", "Clara", "Dmitri", "Elena", "Farid", "Grace", "Hugo", "Ingrid", "Jonas", "Keiko",
    "Luis", "Maya", "Nikolai", "Olivia", "Pablo", "Quinn", "Rosa", "Samuel", "Tamsin", "Uma", "Victor",
    "Wen", "Ximena", "Yusuf", "Zora",
];

const LAST_NAMES: &[&str] = &[
    "Abernathy", "Baptiste", "Castellano", "Dubois", "Eriksen", "Fitzgerald", "Gallagher", "Hoffmann",
    "Ishikawa", "Jablonski", "Kowalczyk", "Lindqvist", "Moreau", "Nakamura", "O'Connell", "Petrov",
    "Quintero", "Rasmussen", "Schneider", "Takahashi", "Underwood", "Valdez", "Whitaker", "Yamamoto",
];

const PREFIXES: &[&str] = &["Dr.", "Mr.", "Mrs.", "Ms."];

const MONONYMS: &[&str] = &["Homer", "Voltaire", "Colette", "Moliere", "Sappho"];

const TITLES: &[&str] = &[
    "A Time to Kill",
    "Vile Bodies",
    "The Way of All Flesh",
    "Of Human Bondage",
    "Tender Is the Night",
    "The Needle's Eye",
    "Precious Bane",
    "A Glass of Blessings",
    "The Golden Bowl",
    "Blithe Spirit",
    "Everything is Illuminated",
    "The Moving Toyshop",
    "Nectar in a Sieve",
    "This Lime Tree Bower",
];

const TITLE_ADJECTIVES: &[&str] = &["Silent", "Crimson", "Hidden", "Last", "Wandering", "Broken", "Distant"];

const TITLE_NOUNS: &[&str] = &["Harbor", "Orchard", "Lantern", "Kingdom", "Meridian", "Archive", "Garden"];

/// Source of synthetic fixture values. Not reproducible unless built with
/// [`FixtureGenerator::with_seed`].
#[derive(Debug)]
pub struct FixtureGenerator {
    rng: StdRng,
}

impl Default for FixtureGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl FixtureGenerator {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// A full name. Usually "First Last"; sometimes carries an honorific
    /// prefix, and occasionally is a single word.
    pub fn random_name(&mut self) -> String {
        let roll: u8 = self.rng.gen_range(0..20);
        let first = pick(&mut self.rng, FIRST_NAMES);
        let last = pick(&mut self.rng, LAST_NAMES);
        match roll {
            0 => pick(&mut self.rng, MONONYMS).to_string(),
            1 | 2 => format!("{} {first} {last}", pick(&mut self.rng, PREFIXES)),
            _ => format!("{first} {last}"),
        }
    }

    pub fn random_book_title(&mut self) -> String {
        if self.rng.gen_bool(0.5) {
            pick(&mut self.rng, TITLES).to_string()
        } else {
            let adjective = pick(&mut self.rng, TITLE_ADJECTIVES);
            let noun = pick(&mut self.rng, TITLE_NOUNS);
            format!("The {adjective} {noun}")
        }
    }

    /// A year in `1950..2024`.
    pub fn random_year(&mut self) -> i32 {
        self.rng.gen_range(1950..2024)
    }

    /// A valid, not-yet-persisted book.
    pub fn random_book(&mut self) -> Book {
        Book {
            id: 0,
            title: self.random_book_title(),
            description: RANDOM_BOOK_DESCRIPTION.to_string(),
            page_count: self.random_year() % 500 + 100,
            excerpt: RANDOM_BOOK_EXCERPT.to_string(),
            publish_date: RANDOM_BOOK_PUBLISH_DATE.to_string(),
        }
    }

    /// A valid, not-yet-persisted author attached to `id_book`.
    pub fn random_author(&mut self, id_book: i32) -> Author {
        let (first_name, last_name) = split_name(&self.random_name());
        Author {
            id: 0,
            id_book,
            first_name,
            last_name,
        }
    }
}

fn pick<'a>(rng: &mut StdRng, items: &[&'a str]) -> &'a str {
    items.choose(rng).copied().unwrap_or_default()
}

/// Split a full name into first and last name on spaces. Tokens 0 and 1 are
/// used; a missing or empty second token becomes [`FALLBACK_LAST_NAME`].
pub fn split_name(full_name: &str) -> (String, String) {
    let mut tokens = full_name.split(' ');
    let first = tokens.next().unwrap_or_default().to_string();
    let last = match tokens.next() {
        Some(token) if !token.is_empty() => token.to_string(),
        _ => FALLBACK_LAST_NAME.to_string(),
    };
    (first, last)
}
