// Utility functions
use std::collections::HashSet;
use url::Url;

/// Drops empty values and duplicates, keeping first-seen order.
pub fn uniq<I>(values: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let mut seen = HashSet::new();
    values
        .into_iter()
        .filter(|v| !v.is_empty() && seen.insert(v.clone()))
        .collect()
}

/// Resolves `href` against `base`, yielding an absolute URL string.
pub fn absolutize(base: &Url, href: &str) -> Option<String> {
    base.join(href).ok().map(String::from)
}
