//! Exact keyword and tag predicates.

use crate::models::Player;
use crate::registry::PlayerPredicate;

/// Matches players whose name contains any of the keywords as a whole word,
/// ignoring case. `"ali"` matches `"Ali Khan"` but not `"Alice"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameContainsKeywords {
    keywords: Vec<String>,
}

impl NameContainsKeywords {
    /// Blank keywords are dropped; an empty keyword list matches nobody.
    pub fn new<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            keywords: keywords
                .into_iter()
                .map(|k| k.as_ref().trim().to_lowercase())
                .filter(|k| !k.is_empty())
                .collect(),
        }
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }
}

impl PlayerPredicate for NameContainsKeywords {
    fn test(&self, player: &Player) -> bool {
        let name = player.name().as_str().to_lowercase();
        let words: Vec<&str> = name.split_whitespace().collect();
        self.keywords
            .iter()
            .any(|keyword| words.iter().any(|word| word == keyword))
    }
}

/// Matches players carrying the given tag, ignoring case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HasTag {
    tag: String,
}

impl HasTag {
    pub fn new(tag: impl AsRef<str>) -> Self {
        Self {
            tag: tag.as_ref().trim().to_lowercase(),
        }
    }
}

impl PlayerPredicate for HasTag {
    fn test(&self, player: &Player) -> bool {
        player
            .tags()
            .iter()
            .any(|t| t.as_str().to_lowercase() == self.tag)
    }
}
