//! Keyword heuristics that derive a [`FeatureRecord`] from scenario text.

use std::sync::LazyLock;

use regex::Regex;
use strata_core::config::defaults::DEFAULT_MIN_PLAYER_COUNT;
use strata_core::models::FeatureRecord;

/// Role nouns counted toward the player estimate.
static ROLE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(players?|part(?:y|ies)|participants?|stakeholders?|sides?|actors?|agents?|firms?|companies|company|competitors?|rivals?|nations?|countries|country|governments?|bidders?|buyers?|sellers?|negotiators?|opponents?)\b",
    )
    .unwrap()
});

static COOPERATION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(cooperat\w*|collaborat\w*|allian\w*|allies|ally|partner\w*|coalition\w*|joint|mutual\w*|agreement\w*)\b")
        .unwrap()
});

static CONFLICT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(conflict\w*|compet\w*|rival\w*|dispute\w*|war|wars|warfare|fight\w*|hostil\w*|oppos\w*|threat\w*|retaliat\w*|escalat\w*)\b")
        .unwrap()
});

static ASYMMETRY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(secret\w*|hidden|private|confidential|bluff\w*|asymmetr\w*|unknown|unaware|conceal\w*|insider|signal\w*|informed)\b")
        .unwrap()
});

static SEQUENTIAL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(first|then|after\w*|before|sequen\w*|next|later|follow\w*|respond\w*|turns?|leader|stages?)\b")
        .unwrap()
});

static REPEATED_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(repeat\w*|recurr\w*|ongoing|iterat\w*|rounds?|again|continu\w*|long[- ]term|reputation|every\s+(?:year|month|week|quarter))\b")
        .unwrap()
});

/// Derive structural features from `text`.
///
/// `participants` overrides the keyword-based player estimate when known.
/// Otherwise the estimate is the number of role-noun occurrences, floored
/// at two players. Every boolean attribute is always set.
pub fn extract_features(text: &str, participants: Option<u32>) -> FeatureRecord {
    extract_features_with_floor(text, participants, DEFAULT_MIN_PLAYER_COUNT)
}

/// [`extract_features`] with an explicit floor for the player estimate.
pub fn extract_features_with_floor(
    text: &str,
    participants: Option<u32>,
    min_players: u32,
) -> FeatureRecord {
    let player_count = participants.unwrap_or_else(|| {
        let mentions = u32::try_from(ROLE_RE.find_iter(text).count()).unwrap_or(u32::MAX);
        mentions.max(min_players)
    });

    FeatureRecord {
        player_count: Some(player_count),
        has_cooperation: Some(COOPERATION_RE.is_match(text)),
        has_conflict: Some(CONFLICT_RE.is_match(text)),
        has_information_asymmetry: Some(ASYMMETRY_RE.is_match(text)),
        has_sequential_moves: Some(SEQUENTIAL_RE.is_match(text)),
        has_repeated_interaction: Some(REPEATED_RE.is_match(text)),
    }
}
