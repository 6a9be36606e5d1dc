use crate::domain::model::Item;
use crate::utils::error::{LibraryError, Result};
use std::fmt;
use std::str::FromStr;

/// Item attributes that can be searched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchField {
    Title,
    Author,
}

impl SearchField {
    pub const ALL: [SearchField; 2] = [SearchField::Title, SearchField::Author];

    pub fn name(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Author => "author",
        }
    }

    fn value(self, item: &Item) -> &str {
        match self {
            Self::Title => &item.title,
            Self::Author => &item.author,
        }
    }
}

impl fmt::Display for SearchField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SearchField {
    type Err = LibraryError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|field| field.name() == wanted)
            .ok_or_else(|| LibraryError::UnknownSearchField {
                field: s.trim().to_string(),
            })
    }
}

/// Case-insensitive substring filters, combined with AND.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchCriteria {
    terms: Vec<(SearchField, String)>,
}

impl SearchCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, field: SearchField, value: impl AsRef<str>) -> Self {
        self.terms.push((field, value.as_ref().to_lowercase()));
        self
    }

    /// Builds criteria from `field name -> substring` pairs, rejecting unknown field names.
    pub fn from_pairs<I, K, V>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        pairs
            .into_iter()
            .try_fold(Self::new(), |criteria, (key, value)| {
                Ok(criteria.with(key.as_ref().parse()?, value))
            })
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn matches(&self, item: &Item) -> bool {
        self.terms.iter().all(|(field, needle)| {
            let haystack = field.value(item);
            // an empty attribute never matches
            !haystack.is_empty() && haystack.to_lowercase().contains(needle.as_str())
        })
    }
}
