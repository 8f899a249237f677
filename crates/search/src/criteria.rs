//! Search criteria: what the user asked for, resolved into typed values.

use crate::error::{Result, SearchError};
use grocer_catalog::{Category, Store};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// What results are ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    /// Natural, case-insensitive name order
    #[default]
    Name,
    /// Price at the pricing store
    Price,
    /// Number of stores with the product in stock
    Popularity,
}

impl SortKey {
    pub const ALL: [SortKey; 3] = [SortKey::Name, SortKey::Price, SortKey::Popularity];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Name => "name",
            SortKey::Price => "price",
            SortKey::Popularity => "popularity",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self> {
        let key = s.trim();
        SortKey::ALL
            .into_iter()
            .find(|k| k.as_str().eq_ignore_ascii_case(key))
            .ok_or_else(|| SearchError::Configuration(format!("unknown sort key '{}'", s)))
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }

    /// Orient an ascending comparison result.
    #[inline]
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortDirection {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Ok(SortDirection::Asc),
            "desc" | "descending" => Ok(SortDirection::Desc),
            _ => Err(SearchError::Configuration(format!("unknown sort direction '{}'", s))),
        }
    }
}

/// Fully resolved search criteria.
///
/// The default is an empty query with no filters, sorted by name ascending.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchCriteria {
    /// Free text; blank means "no text filter"
    #[serde(default)]
    pub query: String,
    #[serde(default)]
    pub category: Option<Category>,
    /// Only products in stock at this store
    #[serde(default)]
    pub store: Option<Store>,
    #[serde(default)]
    pub sort_key: SortKey,
    #[serde(default)]
    pub direction: SortDirection,
}

impl SearchCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    pub fn in_category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    pub fn at_store(mut self, store: Store) -> Self {
        self.store = Some(store);
        self
    }

    pub fn sorted_by(mut self, key: SortKey, direction: SortDirection) -> Self {
        self.sort_key = key;
        self.direction = direction;
        self
    }

    /// True when the query has no text to match on.
    #[inline]
    pub fn has_blank_query(&self) -> bool {
        self.query.trim().is_empty()
    }
}

/// Criteria as they arrive from a form, query string or JSON payload.
///
/// `category` and `store` accept `"all"` or an empty string for "no filter".
/// Missing `sort` and `direction` fall back to name ascending; values that are
/// present but unknown are rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawCriteria {
    #[serde(default)]
    pub query: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub store: Option<String>,
    #[serde(default)]
    pub sort: Option<String>,
    #[serde(default)]
    pub direction: Option<String>,
}

fn selection(value: Option<&str>) -> Option<&str> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty() && !v.eq_ignore_ascii_case("all"))
}

impl TryFrom<&RawCriteria> for SearchCriteria {
    type Error = SearchError;

    fn try_from(raw: &RawCriteria) -> Result<Self> {
        let category = selection(raw.category.as_deref())
            .map(str::parse::<Category>)
            .transpose()?;
        let store = selection(raw.store.as_deref())
            .map(str::parse::<Store>)
            .transpose()?;
        let sort_key = match raw.sort.as_deref() {
            Some(key) => key.parse()?,
            None => SortKey::default(),
        };
        let direction = match raw.direction.as_deref() {
            Some(direction) => direction.parse()?,
            None => SortDirection::default(),
        };

        Ok(SearchCriteria {
            query: raw.query.clone(),
            category,
            store,
            sort_key,
            direction,
        })
    }
}

impl TryFrom<RawCriteria> for SearchCriteria {
    type Error = SearchError;

    fn try_from(raw: RawCriteria) -> Result<Self> {
        SearchCriteria::try_from(&raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_name_ascending() {
        let criteria = SearchCriteria::default();
        assert_eq!(criteria.sort_key, SortKey::Name);
        assert_eq!(criteria.direction, SortDirection::Asc);
        assert!(criteria.has_blank_query());
        assert!(criteria.category.is_none());
        assert!(criteria.store.is_none());
    }

    #[test]
    fn test_blank_query_detection() {
        assert!(SearchCriteria::new().with_query("   ").has_blank_query());
        assert!(!SearchCriteria::new().with_query(" milk ").has_blank_query());
    }

    #[test]
    fn test_sort_key_parsing() {
        assert_eq!("Price".parse::<SortKey>().unwrap(), SortKey::Price);
        assert_eq!("popularity".parse::<SortKey>().unwrap(), SortKey::Popularity);
        assert!(matches!(
            "rating".parse::<SortKey>(),
            Err(SearchError::Configuration(_))
        ));
    }

    #[test]
    fn test_direction_apply() {
        assert_eq!(SortDirection::Asc.apply(Ordering::Less), Ordering::Less);
        assert_eq!(SortDirection::Desc.apply(Ordering::Less), Ordering::Greater);
        assert_eq!(SortDirection::Desc.apply(Ordering::Equal), Ordering::Equal);
    }

    #[test]
    fn test_raw_criteria_resolves() {
        let raw = RawCriteria {
            query: "milk".to_string(),
            category: Some("Dairy & Eggs".to_string()),
            store: Some("aldi".to_string()),
            sort: Some("price".to_string()),
            direction: Some("desc".to_string()),
        };
        let criteria = SearchCriteria::try_from(&raw).unwrap();
        assert_eq!(criteria.category, Some(Category::DairyAndEggs));
        assert_eq!(criteria.store, Some(Store::Aldi));
        assert_eq!(criteria.sort_key, SortKey::Price);
        assert_eq!(criteria.direction, SortDirection::Desc);
    }

    #[test]
    fn test_raw_criteria_all_means_unfiltered() {
        let raw = RawCriteria {
            category: Some("all".to_string()),
            store: Some(String::new()),
            ..Default::default()
        };
        let criteria = SearchCriteria::try_from(raw).unwrap();
        assert_eq!(criteria, SearchCriteria::default());
    }

    #[test]
    fn test_raw_criteria_fails_fast() {
        let bad_sort = RawCriteria {
            sort: Some("rating".to_string()),
            ..Default::default()
        };
        assert!(SearchCriteria::try_from(&bad_sort).is_err());

        let bad_store = RawCriteria {
            store: Some("Costco".to_string()),
            ..Default::default()
        };
        let err = SearchCriteria::try_from(&bad_store).unwrap_err();
        assert!(err.to_string().contains("Costco"));
    }

    #[test]
    fn test_raw_criteria_from_json() {
        let raw: RawCriteria =
            serde_json::from_str(r#"{"query":"bread","sort":"popularity"}"#).unwrap();
        let criteria = SearchCriteria::try_from(raw).unwrap();
        assert_eq!(criteria.query, "bread");
        assert_eq!(criteria.sort_key, SortKey::Popularity);
        assert_eq!(criteria.direction, SortDirection::Asc);
    }
}
