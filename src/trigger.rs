//! Stage triggers and the search-store trigger rule
//!
//! A stage that is created together with a search store must carry the
//! system trigger that feeds ingested files into that store, and it must
//! be the first trigger of the list.

use crate::models::Trigger;

/// Name of the system search-store trigger
pub const SEARCH_STORE_TRIGGER_NAME: &str = "search-store-trigger";

/// Transformation that turns documents into indexable text
pub const TRANSFORMATION_DOCUMENT_TO_TEXT: &str = "DocumentToText";

/// Destination: a repository
pub const DESTINATION_REPOSITORY: &str = "DataPlatform:Repository";

/// Destination: a stage
pub const DESTINATION_STAGE: &str = "DataPlatform:Stage";

/// Destination: a search store
pub const DESTINATION_SEARCH_STORE: &str = "DataPlatform:SearchStore";

/// Connector: document index collection
pub const CONNECTOR_DOCUMENT_INDEX_COLLECTION: &str = "DocumentIndex:Collection";

/// Connector: document index search store
pub const CONNECTOR_DOCUMENT_INDEX_SEARCH_STORE: &str = "DocumentIndex:SearchStore";

/// Connector: creates search store entries
pub const CONNECTOR_SEARCH_STORE_CREATE: &str = "DataPlatform:SearchStore:CREATE";

/// The trigger every stage with an attached search store starts with
pub fn search_store_trigger() -> Trigger {
    Trigger::new(
        SEARCH_STORE_TRIGGER_NAME,
        TRANSFORMATION_DOCUMENT_TO_TEXT,
        DESTINATION_SEARCH_STORE,
    )
    .with_connector_type(CONNECTOR_SEARCH_STORE_CREATE)
}

/// Prepend the search-store trigger to the caller's triggers.
///
/// Caller triggers keep their order and are not de-duplicated.
pub fn with_search_store_trigger(triggers: Option<&[Trigger]>) -> Vec<Trigger> {
    let extra = triggers.unwrap_or_default();
    let mut all = Vec::with_capacity(extra.len() + 1);
    all.push(search_store_trigger());
    all.extend_from_slice(extra);
    all
}
