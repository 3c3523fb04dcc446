//! Configuration for projects service module

use serde::{Deserialize, Serialize};

/// Projects service configuration
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Heading and document title of the listing page
    #[serde(default = "default_listing_title")]
    pub listing_title: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listing_title: default_listing_title(),
        }
    }
}

fn default_listing_title() -> String {
    "my killer page".to_string()
}
