use crate::models::{Property, PropertyType, Status};
use serde::{Deserialize, Serialize};

/// Status facet of a listing query
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusFilter {
    #[default]
    All,
    Only(Status),
}

impl StatusFilter {
    fn matches(&self, status: Status) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(wanted) => *wanted == status,
        }
    }
}

/// Type facet of a listing query
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeFilter {
    #[default]
    All,
    Only(PropertyType),
}

impl TypeFilter {
    fn matches(&self, property_type: PropertyType) -> bool {
        match self {
            TypeFilter::All => true,
            TypeFilter::Only(wanted) => *wanted == property_type,
        }
    }
}

/// A listing-view query: all three facets must match (logical AND).
/// The default query matches every listing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PropertyQuery {
    pub status: StatusFilter,
    pub property_type: TypeFilter,
    /// Case-insensitive substring matched against title or location;
    /// empty matches everything
    pub search: String,
}

impl PropertyQuery {
    pub fn matches(&self, property: &Property) -> bool {
        self.matches_lowered(property, &self.search.to_lowercase())
    }

    /// `needle` is the pre-lowercased search term, so scanning a whole
    /// collection lowers it once instead of once per record
    fn matches_lowered(&self, property: &Property, needle: &str) -> bool {
        if !self.status.matches(property.status) {
            return false;
        }
        if !self.property_type.matches(property.property_type) {
            return false;
        }
        if needle.is_empty() {
            return true;
        }
        property.title.to_lowercase().contains(needle)
            || property.location.to_lowercase().contains(needle)
    }
}

/// Pure derivation of the listing view: the ordered subsequence of
/// `properties` matching `query`. No hidden state, no side effects.
pub fn filter_properties(properties: &[Property], query: &PropertyQuery) -> Vec<Property> {
    let needle = query.search.to_lowercase();
    properties
        .iter()
        .filter(|p| query.matches_lowered(p, &needle))
        .cloned()
        .collect()
}

/// Per-status tallies shown as badges next to the filter buttons
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StatusCounts {
    pub all: usize,
    pub verified: usize,
    pub pending: usize,
    pub rejected: usize,
}

pub fn status_counts(properties: &[Property]) -> StatusCounts {
    let mut counts = StatusCounts {
        all: properties.len(),
        ..Default::default()
    };
    for property in properties {
        match property.status {
            Status::Verified => counts.verified += 1,
            Status::Pending => counts.pending += 1,
            Status::Rejected => counts.rejected += 1,
        }
    }
    counts
}
