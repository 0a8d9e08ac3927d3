//! Fuzzy name matching for player lookup.
//!
//! Scores a query against a player's name on a 0-95 scale:
//! - 95 for an exact match after normalization
//! - 10-95 when the query is a substring of the name, scaled by coverage
//! - 85 when the name is a substring of the query
//! - up to 85 by Levenshtein similarity, or 0 when more than half differs

use crate::models::Player;
use crate::registry::PlayerPredicate;

/// Highest score a fuzzy comparison can produce.
pub const MAX_FUZZY_SCORE: u8 = 95;

/// A fuzzy name predicate with a confidence floor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FuzzyNameMatcher {
    query: String,
    min_confidence: u8,
}

/// A player paired with how well its name matched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameMatch<'a> {
    pub player: &'a Player,
    pub confidence: u8,
}

impl FuzzyNameMatcher {
    /// Create a matcher for `query`. Players match when their score is at
    /// least `min_confidence`.
    pub fn new(query: impl AsRef<str>, min_confidence: u8) -> Self {
        Self {
            query: Self::normalize_name(query.as_ref()),
            min_confidence,
        }
    }

    /// Confidence (0-95) that `name` is what the query meant.
    pub fn score(&self, name: &str) -> u8 {
        Self::calculate_fuzzy_score(&self.query, &Self::normalize_name(name))
    }

    /// Every matching player, best first. Ties keep registry order.
    pub fn rank<'a>(&self, players: &'a [Player]) -> Vec<NameMatch<'a>> {
        let mut matches: Vec<NameMatch<'a>> = players
            .iter()
            .map(|player| NameMatch {
                player,
                confidence: self.score(player.name().as_str()),
            })
            .filter(|m| m.confidence > 0 && m.confidence >= self.min_confidence)
            .collect();
        matches.sort_by(|a, b| b.confidence.cmp(&a.confidence));
        matches
    }

    /// Lowercase and collapse whitespace.
    pub fn normalize_name(name: &str) -> String {
        name.split_whitespace()
            .collect::<Vec<_>>()
            .join(" ")
            .to_lowercase()
    }

    fn calculate_fuzzy_score(query: &str, target: &str) -> u8 {
        if query.is_empty() || target.is_empty() {
            return 0;
        }

        if query == target {
            return MAX_FUZZY_SCORE;
        }

        if target.contains(query) {
            let ratio = query.chars().count() as f64 / target.chars().count() as f64;
            return (85.0 * ratio + 10.0) as u8;
        }

        if query.contains(target) {
            return 85;
        }

        let distance = Self::levenshtein_distance(query, target);
        let max_len = query.chars().count().max(target.chars().count());

        if distance as f64 / max_len as f64 > 0.5 {
            return 0;
        }

        let similarity = 1.0 - (distance as f64 / max_len as f64);
        (similarity * 85.0) as u8
    }

    /// Edit distance over chars, using a rolling row.
    fn levenshtein_distance(s1: &str, s2: &str) -> usize {
        let s1: Vec<char> = s1.chars().collect();
        let s2: Vec<char> = s2.chars().collect();

        if s1.is_empty() {
            return s2.len();
        }
        if s2.is_empty() {
            return s1.len();
        }

        let mut prev: Vec<usize> = (0..=s2.len()).collect();
        let mut curr = vec![0; s2.len() + 1];

        for (i, c1) in s1.iter().enumerate() {
            curr[0] = i + 1;
            for (j, c2) in s2.iter().enumerate() {
                let cost = usize::from(c1 != c2);
                curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
            }
            std::mem::swap(&mut prev, &mut curr);
        }

        prev[s2.len()]
    }
}

impl PlayerPredicate for FuzzyNameMatcher {
    fn test(&self, player: &Player) -> bool {
        let score = self.score(player.name().as_str());
        score > 0 && score >= self.min_confidence
    }
}
