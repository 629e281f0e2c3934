use std::cmp::Ordering;
use std::collections::HashMap;

/// Value with identity, compared on `key` only. Used to observe stability.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Tagged {
    pub key: i32,
    /// Occurrence count of `key` in the input, ascending in input order.
    pub tag: u32,
}

impl Tagged {
    /// Tags every value with how often it was seen before, `[3, 1, 3]` becomes
    /// `[(3, 0), (1, 0), (3, 1)]`.
    pub fn tag_all(keys: &[i32]) -> Vec<Tagged> {
        let mut seen = HashMap::new();

        keys.iter()
            .map(|&key| {
                let count = seen.entry(key).or_insert(0u32);
                let tag = *count;
                *count += 1;
                Tagged { key, tag }
            })
            .collect()
    }

    pub fn cmp_key(a: &Tagged, b: &Tagged) -> Ordering {
        a.key.cmp(&b.key)
    }
}
