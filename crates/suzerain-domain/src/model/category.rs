//! Category - The capability axis an asset or rating belongs to
//!
//! Category is a Value Object - two categories with the same variant are
//! equal. Every asset belongs to exactly one category, and every faction
//! carries one rating per category.

/// The three capability categories of a faction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Military strength: troops, strike forces, hardened bases
    Force,

    /// Espionage and subversion: informers, saboteurs, seditionists
    Cunning,

    /// Economic reach: franchises, freighters, marketeers
    Wealth,
}

impl Category {
    /// Get the display name of this category
    pub fn display_name(&self) -> &'static str {
        match self {
            Category::Force => "force",
            Category::Cunning => "cunning",
            Category::Wealth => "wealth",
        }
    }

    /// Get all categories (useful for iteration)
    pub fn all() -> &'static [Category] {
        &[Category::Force, Category::Cunning, Category::Wealth]
    }
}

impl core::fmt::Display for Category {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Error returned when a string does not name a category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseCategoryError {
    pub input: String,
}

impl core::fmt::Display for ParseCategoryError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "'{}' is not a category (force, cunning, wealth)", self.input)
    }
}

impl std::error::Error for ParseCategoryError {}

impl core::str::FromStr for Category {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "force" => Ok(Category::Force),
            "cunning" => Ok(Category::Cunning),
            "wealth" => Ok(Category::Wealth),
            _ => Err(ParseCategoryError {
                input: s.to_string(),
            }),
        }
    }
}
