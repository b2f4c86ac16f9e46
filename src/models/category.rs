//! Expense categories
//!
//! The entry form offers nine fixed categories plus "Others", which asks the
//! user for free-form text. A recorded expense keeps either the fixed
//! category or the custom text; both display as a plain name.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Label of the tenth selector option that switches to free-form text
pub const OTHERS_LABEL: &str = "Others";

/// The nine built-in categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FixedCategory {
    Food,
    Transport,
    Entertainment,
    Rent,
    Utilities,
    Shopping,
    Health,
    Education,
    Travel,
}

impl FixedCategory {
    /// All built-in categories in selector order
    pub const ALL: [FixedCategory; 9] = [
        Self::Food,
        Self::Transport,
        Self::Entertainment,
        Self::Rent,
        Self::Utilities,
        Self::Shopping,
        Self::Health,
        Self::Education,
        Self::Travel,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Self::Food => "Food",
            Self::Transport => "Transport",
            Self::Entertainment => "Entertainment",
            Self::Rent => "Rent",
            Self::Utilities => "Utilities",
            Self::Shopping => "Shopping",
            Self::Health => "Health",
            Self::Education => "Education",
            Self::Travel => "Travel",
        }
    }

    /// Look up a built-in category by name, ignoring case
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.name().eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for FixedCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One of the ten options in the category selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CategoryChoice {
    Fixed(FixedCategory),
    Others,
}

impl CategoryChoice {
    /// All selector options, "Others" last
    pub fn all() -> Vec<CategoryChoice> {
        FixedCategory::ALL
            .into_iter()
            .map(CategoryChoice::Fixed)
            .chain(std::iter::once(CategoryChoice::Others))
            .collect()
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Fixed(category) => category.name(),
            Self::Others => OTHERS_LABEL,
        }
    }

    pub fn is_others(self) -> bool {
        matches!(self, Self::Others)
    }

    /// Position of this option in `all()`
    pub fn index(self) -> usize {
        match self {
            Self::Fixed(category) => FixedCategory::ALL
                .iter()
                .position(|c| *c == category)
                .unwrap_or(0),
            Self::Others => FixedCategory::ALL.len(),
        }
    }

    /// Option after this one, wrapping around
    pub fn next(self) -> Self {
        let all = Self::all();
        all[(self.index() + 1) % all.len()]
    }

    /// Option before this one, wrapping around
    pub fn prev(self) -> Self {
        let all = Self::all();
        all[(self.index() + all.len() - 1) % all.len()]
    }
}

impl Default for CategoryChoice {
    fn default() -> Self {
        Self::Fixed(FixedCategory::Food)
    }
}

impl fmt::Display for CategoryChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for CategoryChoice {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case(OTHERS_LABEL) {
            return Ok(Self::Others);
        }
        FixedCategory::from_name(s)
            .map(Self::Fixed)
            .ok_or_else(|| format!("unknown category '{}'", s.trim()))
    }
}

/// The category a recorded expense is filed under
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub enum Category {
    Fixed(FixedCategory),
    Custom(String),
}

impl Category {
    /// Name shown to the user and used as the aggregation key
    pub fn name(&self) -> &str {
        match self {
            Self::Fixed(category) => category.name(),
            Self::Custom(text) => text,
        }
    }

    pub fn is_custom(&self) -> bool {
        matches!(self, Self::Custom(_))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<Category> for String {
    fn from(category: Category) -> Self {
        match category {
            Category::Fixed(fixed) => fixed.name().to_string(),
            Category::Custom(text) => text,
        }
    }
}

impl From<String> for Category {
    fn from(name: String) -> Self {
        match FixedCategory::ALL.into_iter().find(|c| c.name() == name) {
            Some(fixed) => Self::Fixed(fixed),
            None => Self::Custom(name),
        }
    }
}
