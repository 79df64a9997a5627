//! Comma-separated `--filter` parsing and per-kind selection.

use crate::domain::kind::ItemKind;

/// Split a `--filter` value into trimmed, non-empty terms.
///
/// Order and duplicates are preserved. `None` and `""` yield no terms, which
/// install and list read as "no filtering" and remove reads as "nothing".
#[must_use]
pub fn parse_filter(raw: Option<&str>) -> Vec<String> {
    raw.map(|s| {
        s.split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .collect()
    })
    .unwrap_or_default()
}

/// Keep the items whose name matches at least one term under `kind`'s rule.
///
/// Input order is kept. An empty term list selects nothing; callers decide
/// what an absent filter means before calling this.
pub fn select<T>(
    kind: ItemKind,
    terms: &[String],
    items: impl IntoIterator<Item = T>,
    name: impl Fn(&T) -> &str,
) -> Vec<T> {
    items
        .into_iter()
        .filter(|item| terms.iter().any(|term| kind.matches(term, name(item))))
        .collect()
}
