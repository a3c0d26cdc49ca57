//! Response DTOs for the PokeAPI
//!
//! Defines the shape of the paginated listing bodies the client decodes.

use serde::{Deserialize, Serialize};

/// A named link to another API resource
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedResource {
    /// Resource name, e.g. `canalave-city-area`
    pub name: String,
    /// Absolute URL of the resource
    pub url: String,
}

/// One page of the `location-area` listing
///
/// `next` and `previous` are absolute URLs of the neighbouring pages, or
/// `null` at either end of the listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationAreaPage {
    /// Total number of location areas
    pub count: u64,
    /// URL of the next page
    pub next: Option<String>,
    /// URL of the previous page
    pub previous: Option<String>,
    /// Areas on this page
    pub results: Vec<NamedResource>,
}

impl LocationAreaPage {
    /// Iterates over the area names on this page.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.results.iter().map(|area| area.name.as_str())
    }
}
