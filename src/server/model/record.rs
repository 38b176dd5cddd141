//! Traits every entity plugs into to get the generic CRUD behaviour.

use serde::{de::DeserializeOwned, Serialize};

use crate::model::api::{BaseForm, InputErrors};

/// Shared attribute contract of a persisted domain record.
///
/// `unique_key` names the natural key field used for duplicate detection. An empty
/// key opts the entity out of the uniqueness check.
pub trait Record: Clone + Send + Sync + 'static {
    /// Transport form of the record.
    type Dto: Serialize + Send;

    fn id(&self) -> Option<i32>;

    /// Wire name of the natural key field, e.g. `"loginId"`.
    fn unique_key() -> &'static str;

    fn unique_value(&self) -> String;

    /// Human readable name used in conflict messages.
    fn label() -> &'static str;

    fn into_dto(self) -> Self::Dto;

    /// Identity of a record that has already been persisted.
    ///
    /// `None` and `0` both mean "not yet persisted".
    fn persisted_id(&self) -> Option<i32> {
        self.id().filter(|id| *id > 0)
    }
}

/// Request form bound to a record type.
///
/// The same form doubles as the search filter template: fields left empty are
/// wildcards.
pub trait EntityForm: DeserializeOwned + Send + Sync + 'static {
    type Record: Record;

    fn base_mut(&mut self) -> &mut BaseForm;

    /// Field-level validation run before a save touches storage.
    fn validate(&self) -> InputErrors;

    /// Record to persist when the form is saved.
    fn to_record(&self) -> Self::Record;

    /// Record used as a search filter template.
    fn to_filter(&self) -> Self::Record {
        self.to_record()
    }
}
