use crate::catalog::{Catalog, Source};
use crate::model::Match;

/// Lazily filter one source's full list by a free-text query.
///
/// A blank query yields every item. Otherwise an item matches when the
/// query is a case-insensitive substring of its name, sport, address area,
/// or address city. Arrival order is preserved and nothing is re-ranked.
/// The returned iterator is `Clone`, so a view can restart it without
/// re-fetching; clearing the query restores the full list because the
/// catalog always retains the unfiltered set.
pub fn filter<'a>(
    catalog: &'a Catalog,
    source: Source,
    query: &str,
) -> impl Iterator<Item = &'a Match> + Clone + 'a {
    let needle = query.trim().to_lowercase();
    catalog
        .get(source)
        .iter()
        .filter(move |m| needle.is_empty() || matches_query(m, &needle))
}

fn matches_query(m: &Match, needle: &str) -> bool {
    [
        m.name.as_str(),
        m.sport.as_str(),
        m.address.area.as_str(),
        m.address.city.as_str(),
    ]
    .iter()
    .any(|field| field.to_lowercase().contains(needle))
}
