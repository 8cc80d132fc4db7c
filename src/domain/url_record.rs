//! URL record entity: the mapping between a short identifier and its target.

/// A stored URL record.
///
/// `id` is the store-assigned surrogate key and is never exposed through the
/// API. `original_url` holds the caller-submitted target verbatim; any scheme
/// fixup happens at read time when building a redirect target, never here.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct UrlRecord {
    pub id: i32,
    pub short_id: String,
    pub original_url: String,
}

/// Input data for creating a new record.
#[derive(Debug, Clone)]
pub struct NewUrl {
    pub short_id: String,
    pub original_url: String,
}

/// Full replacement of a record's caller-visible fields.
///
/// Updates replace both `original_url` and `short_id` together; there is no
/// partial form. The new `short_id` is caller-supplied and only checked for
/// uniqueness by the store, not for format (generation is the only place the
/// 6-character alphanumeric shape is enforced).
#[derive(Debug, Clone)]
pub struct UrlUpdate {
    pub original_url: String,
    pub short_id: String,
}
