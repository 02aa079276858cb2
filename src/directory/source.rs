use crate::core::error::Result;
use crate::core::types::EntityRecord;

/// Enumerates the persisted records of one entity kind
///
/// Implemented by the store that owns the records; called once when an
/// index is first built.
pub trait IndexSource<T>: Send + Sync {
    fn records(&self) -> Result<Vec<EntityRecord<T>>>;
}

impl<T, F> IndexSource<T> for F
where
    F: Fn() -> Result<Vec<EntityRecord<T>>> + Send + Sync,
{
    fn records(&self) -> Result<Vec<EntityRecord<T>>> {
        self()
    }
}

/// Fixed record set, handy for tests and fixtures
pub struct StaticSource<T> {
    records: Vec<EntityRecord<T>>,
}

impl<T> StaticSource<T> {
    pub fn new(records: Vec<EntityRecord<T>>) -> Self {
        StaticSource { records }
    }
}

impl<T: Clone + Send + Sync> IndexSource<T> for StaticSource<T> {
    fn records(&self) -> Result<Vec<EntityRecord<T>>> {
        Ok(self.records.clone())
    }
}
