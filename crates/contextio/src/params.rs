//! Call parameters and whitelist filtering.

use std::collections::BTreeMap;

/// Call parameters, keyed by parameter name.
///
/// A sorted map, so iteration order (and therefore query-string order
/// and duplicate resolution in [`filter_params`]) is deterministic.
pub type Params = BTreeMap<String, String>;

/// Restricts `given` to the parameters named in `valid`.
///
/// Keys are matched ASCII case-insensitively and copied into the result
/// under the canonical `valid` spelling; keys with no whitelist match
/// are silently dropped. When several case-variant keys match the same
/// whitelist entry, the lexicographically last given key wins.
#[must_use]
pub fn filter_params(given: &Params, valid: &[&str]) -> Params {
    let mut filtered = Params::new();
    for (key, value) in given {
        if let Some(canonical) = valid.iter().find(|name| name.eq_ignore_ascii_case(key)) {
            filtered.insert((*canonical).to_string(), value.clone());
        }
    }
    filtered
}
