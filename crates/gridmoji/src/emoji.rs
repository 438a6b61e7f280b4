//! Emoji palettes for player marks.

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::instrument;

const ANIMALS: [char; 12] = [
    '🐱', '🐶', '🦊', '🐰', '🐼', '🐨', '🦁', '🐯', '🐻', '🐷', '🐸', '🦄',
];

const FRUITS: [char; 12] = [
    '🍎', '🍌', '🍇', '🍓', '🍉', '🍑', '🍍', '🥝', '🍒', '🍋', '🥭', '🍊',
];

const FACES: [char; 12] = [
    '😀', '😁', '😂', '😍', '😎', '🤓', '😇', '🥳', '😜', '🤠', '🥶', '😈',
];

/// Emoji category a player picks their mark from.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Animal emoji.
    #[default]
    Animals,
    /// Fruit emoji.
    Fruits,
    /// Face emoji.
    Faces,
    /// Every palette combined.
    Free,
}

impl Category {
    /// Returns the display label for this category.
    pub fn label(self) -> &'static str {
        match self {
            Self::Animals => "Animals",
            Self::Fruits => "Fruits",
            Self::Faces => "Faces",
            Self::Free => "Free pick",
        }
    }

    /// Returns the emoji in this category.
    pub fn palette(self) -> Vec<char> {
        match self {
            Self::Animals => ANIMALS.to_vec(),
            Self::Fruits => FRUITS.to_vec(),
            Self::Faces => FACES.to_vec(),
            Self::Free => ANIMALS
                .iter()
                .chain(FRUITS.iter())
                .chain(FACES.iter())
                .copied()
                .collect(),
        }
    }

    /// Cycles to the next category.
    pub fn next(self) -> Self {
        match self {
            Self::Animals => Self::Fruits,
            Self::Fruits => Self::Faces,
            Self::Faces => Self::Free,
            Self::Free => Self::Animals,
        }
    }

    /// Cycles to the previous category.
    pub fn previous(self) -> Self {
        match self {
            Self::Animals => Self::Free,
            Self::Fruits => Self::Animals,
            Self::Faces => Self::Fruits,
            Self::Free => Self::Faces,
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Picks a random emoji for the computer, never the human's pick.
#[instrument(skip(rng))]
pub fn random_ai_emoji<R: Rng>(category: Category, taken: char, rng: &mut R) -> char {
    let pool: Vec<char> = category
        .palette()
        .into_iter()
        .filter(|e| *e != taken)
        .collect();
    pool[rng.gen_range(0..pool.len())]
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use strum::IntoEnumIterator;

    #[test]
    fn test_fixed_palettes_have_twelve_emoji() {
        for category in [Category::Animals, Category::Fruits, Category::Faces] {
            assert_eq!(category.palette().len(), 12, "{category}");
        }
    }

    #[test]
    fn test_free_palette_is_the_union() {
        assert_eq!(Category::Free.palette().len(), 36);
    }

    #[test]
    fn test_palettes_have_no_duplicates() {
        for category in Category::iter() {
            let palette = category.palette();
            let mut unique = palette.clone();
            unique.sort_unstable();
            unique.dedup();
            assert_eq!(palette.len(), unique.len(), "{category}");
        }
    }

    #[test]
    fn test_category_cycle_round_trip() {
        for category in Category::iter() {
            assert_eq!(category.next().previous(), category);
        }
    }

    #[test]
    fn test_ai_emoji_never_matches_player() {
        let mut rng = StdRng::seed_from_u64(17);
        let player = '🐱';
        for _ in 0..100 {
            let pick = random_ai_emoji(Category::Animals, player, &mut rng);
            assert_ne!(pick, player);
            assert!(Category::Animals.palette().contains(&pick));
        }
    }

    #[test]
    fn test_category_serde_round_trip() {
        let json = serde_json::to_string(&Category::Fruits).unwrap();
        assert_eq!(json, "\"fruits\"");
        let back: Category = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Category::Fruits);
    }
}
