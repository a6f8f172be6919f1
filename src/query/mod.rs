/// In-memory search, filtering, grouping and sorting over catalog records
use crate::errors::{ApiError, ApiResult};
use std::borrow::Cow;
use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::str::FromStr;

/// A record whose text fields can be matched by a search query.
pub trait Searchable {
    type Field: Copy;

    fn field_text(&self, field: Self::Field) -> Cow<'_, str>;
}

/// A record that can be ordered by one of several derived keys.
pub trait Sortable {
    type SortKey: Copy;

    fn sort_value(&self, key: Self::SortKey) -> SortValue<'_>;
}

/// A record that belongs to exactly one enumerated kind.
pub trait Classified {
    type Kind: PartialEq;

    fn kind(&self) -> Self::Kind;
}

/// Value a record exposes for one sort key.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SortValue<'a> {
    Number(f64),
    Text(&'a str),
}

impl SortValue<'_> {
    /// Total order. NaN compares as 0.0, numbers sort before text.
    fn compare(&self, other: &Self) -> Ordering {
        match (self, other) {
            (SortValue::Number(a), SortValue::Number(b)) => zero_nan(*a)
                .partial_cmp(&zero_nan(*b))
                .unwrap_or(Ordering::Equal),
            (SortValue::Text(a), SortValue::Text(b)) => a.cmp(b),
            (SortValue::Number(_), SortValue::Text(_)) => Ordering::Less,
            (SortValue::Text(_), SortValue::Number(_)) => Ordering::Greater,
        }
    }
}

fn zero_nan(v: f64) -> f64 {
    if v.is_nan() {
        0.0
    } else {
        v
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl FromStr for SortDirection {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match token(s).as_str() {
            "asc" | "ascending" => Ok(SortDirection::Ascending),
            "desc" | "descending" => Ok(SortDirection::Descending),
            _ => Err(ApiError::InvalidInput(format!("unknown sort direction '{}'", s))),
        }
    }
}

/// Category selector; `All` disables the filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection<E> {
    All,
    Only(E),
}

impl<E> Default for Selection<E> {
    fn default() -> Self {
        Selection::All
    }
}

impl<E: FromStr<Err = ApiError>> Selection<E> {
    /// Parse a query parameter. Missing, blank or "all" selects everything.
    pub fn parse(raw: Option<&str>) -> ApiResult<Self> {
        match raw.map(str::trim) {
            None | Some("") => Ok(Selection::All),
            Some(value) if value.eq_ignore_ascii_case("all") => Ok(Selection::All),
            Some(value) => value.parse().map(Selection::Only),
        }
    }
}

/// Lowercase and drop everything that is not alphanumeric, so that
/// "Gas Giant", "gas_giant" and "gas-giant" compare equal.
pub fn token(s: &str) -> String {
    s.chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect()
}

/// Keep records where any of `fields` contains `query`, ignoring case.
/// A blank query keeps everything.
pub fn search<T: Searchable>(items: Vec<T>, query: &str, fields: &[T::Field]) -> Vec<T> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return items;
    }
    items
        .into_iter()
        .filter(|item| matches_any(item, &needle, fields))
        .collect()
}

fn matches_any<T: Searchable>(item: &T, needle: &str, fields: &[T::Field]) -> bool {
    fields
        .iter()
        .any(|field| item.field_text(*field).to_lowercase().contains(needle))
}

pub fn filter_by_enum<T, E, F>(items: Vec<T>, selector: F, desired: &Selection<E>) -> Vec<T>
where
    E: PartialEq,
    F: Fn(&T) -> E,
{
    match desired {
        Selection::All => items,
        Selection::Only(wanted) => items
            .into_iter()
            .filter(|item| selector(item) == *wanted)
            .collect(),
    }
}

pub fn filter_by_kind<T: Classified>(items: Vec<T>, desired: &Selection<T::Kind>) -> Vec<T> {
    filter_by_enum(items, T::kind, desired)
}

/// Group records by a derived key.
///
/// Records keep their input order inside a group. Groups are ordered by
/// `rank_fn`; keys with the same rank fall back to the key's own order.
pub fn group_by<T, K, R, F, O>(items: Vec<T>, key_fn: F, rank_fn: O) -> Vec<(K, Vec<T>)>
where
    K: Ord,
    R: Ord,
    F: Fn(&T) -> K,
    O: Fn(&K) -> R,
{
    let mut groups: BTreeMap<K, Vec<T>> = BTreeMap::new();
    for item in items {
        groups.entry(key_fn(&item)).or_default().push(item);
    }

    let mut ordered: Vec<(K, Vec<T>)> = groups.into_iter().collect();
    ordered.sort_by_key(|(key, _)| rank_fn(key));
    ordered
}

/// Stable sort by one key. Descending reverses the comparator, so ties
/// keep their input order in both directions.
pub fn sort<T: Sortable>(mut items: Vec<T>, key: T::SortKey, direction: SortDirection) -> Vec<T> {
    items.sort_by(|a, b| {
        let ord = a.sort_value(key).compare(&b.sort_value(key));
        match direction {
            SortDirection::Ascending => ord,
            SortDirection::Descending => ord.reverse(),
        }
    });
    items
}

/// Best-effort number from display text such as "1,427" or "149.6 (with Earth)".
///
/// Keeps only ASCII digits and dots. Anything that still fails to parse is
/// 0.0, so signs and ranges are lost ("-65°C" reads as 65).
pub fn parse_lossy_number(text: &str) -> f64 {
    let cleaned: String = text
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();
    cleaned.parse().unwrap_or(0.0)
}

/// Combined list view: kind filter, then text search, then sort.
pub struct ListQuery<T: Searchable + Sortable + Classified> {
    pub text: String,
    pub fields: Vec<T::Field>,
    pub kind: Selection<T::Kind>,
    pub sort: Option<(T::SortKey, SortDirection)>,
}

impl<T: Searchable + Sortable + Classified> ListQuery<T> {
    pub fn new(fields: &[T::Field]) -> Self {
        Self {
            text: String::new(),
            fields: fields.to_vec(),
            kind: Selection::All,
            sort: None,
        }
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn kind(mut self, kind: Selection<T::Kind>) -> Self {
        self.kind = kind;
        self
    }

    pub fn sorted(mut self, key: T::SortKey, direction: SortDirection) -> Self {
        self.sort = Some((key, direction));
        self
    }

    pub fn apply(&self, items: Vec<T>) -> Vec<T> {
        let narrowed = filter_by_kind(items, &self.kind);
        let found = search(narrowed, &self.text, &self.fields);
        match self.sort {
            Some((key, direction)) => sort(found, key, direction),
            None => found,
        }
    }
}
