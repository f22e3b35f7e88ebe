use crate::location::LocationRecord;

/// Message shown when the location list could not be fetched.
pub const FETCH_ERROR_MESSAGE: &str = "Could not load locations. Please try again later.";

/// Load state of the bulk-fetched location list.
///
/// Until the list is loaded every option set is empty and nothing resolves;
/// a failed load is reported once and not retried.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LocationCatalog {
    #[default]
    Loading,
    Loaded(Vec<LocationRecord>),
    Failed(String),
}

impl LocationCatalog {
    /// Builds the catalog from the outcome of a fetch.
    #[must_use]
    pub fn from_fetch<E: std::fmt::Display>(result: Result<Vec<LocationRecord>, E>) -> Self {
        match result {
            Ok(records) => LocationCatalog::Loaded(records),
            Err(e) => LocationCatalog::Failed(e.to_string()),
        }
    }

    /// The loaded records, or an empty slice while loading or after a failure.
    #[must_use]
    pub fn records(&self) -> &[LocationRecord] {
        match self {
            LocationCatalog::Loaded(records) => records,
            LocationCatalog::Loading | LocationCatalog::Failed(_) => &[],
        }
    }

    /// The user-facing fetch-error message, if the load failed.
    #[must_use]
    pub fn error(&self) -> Option<&'static str> {
        match self {
            LocationCatalog::Failed(_) => Some(FETCH_ERROR_MESSAGE),
            LocationCatalog::Loading | LocationCatalog::Loaded(_) => None,
        }
    }

    /// Underlying failure detail, for logs.
    #[must_use]
    pub fn failure_detail(&self) -> Option<&str> {
        match self {
            LocationCatalog::Failed(detail) => Some(detail),
            LocationCatalog::Loading | LocationCatalog::Loaded(_) => None,
        }
    }
}
