//! Character lookup by name.

use super::character::Character;

/// Find a character by name.
///
/// An exact case-insensitive match wins; otherwise the first character
/// whose name contains the query (case-insensitive) is returned.
/// Characters without a name never match.
pub fn find_character<'a>(roster: &'a [Character], query: &str) -> Option<&'a Character> {
    let query = query.to_lowercase();
    let lowered: Vec<(Option<String>, &Character)> = roster
        .iter()
        .map(|c| (c.name.as_ref().map(|n| n.to_lowercase()), c))
        .collect();

    lowered
        .iter()
        .find(|(name, _)| name.as_deref() == Some(query.as_str()))
        .or_else(|| {
            lowered
                .iter()
                .find(|(name, _)| name.as_ref().is_some_and(|n| n.contains(&query)))
        })
        .map(|(_, c)| *c)
}
