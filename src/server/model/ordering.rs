//! Client-selected sort order for list endpoints.

/// One term of an `ordering` query value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortKey<F> {
    pub field: F,
    pub descending: bool,
}

/// Parses a comma-separated ordering value such as `-start_date,status`.
///
/// A leading `-` sorts that field descending. Unknown and repeated fields are
/// skipped, so a value with no usable terms yields an empty list and the caller's
/// default order applies.
///
/// # Arguments
/// - `value` - Raw query value
/// - `field` - Maps a field name to the endpoint's sortable field type
pub fn parse_ordering<F: Copy + PartialEq>(
    value: &str,
    field: impl Fn(&str) -> Option<F>,
) -> Vec<SortKey<F>> {
    let mut keys: Vec<SortKey<F>> = Vec::new();

    for term in value.split(',').map(str::trim) {
        let (name, descending) = match term.strip_prefix('-') {
            Some(name) => (name, true),
            None => (term, false),
        };

        let Some(field) = field(name) else {
            continue;
        };
        if keys.iter().any(|k| k.field == field) {
            continue;
        }

        keys.push(SortKey { field, descending });
    }

    keys
}
