//! Join-table name bookkeeping for one metadata build.

use std::{
    collections::HashMap,
    sync::{Mutex, MutexGuard, PoisonError},
};
use tracing::debug;

///
/// TableDescription
///
/// The association that claimed a join-table name.
///

#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct TableDescription {
    pub owner_entity: String,
    pub associated_entity: String,
    pub owner_property: Option<String>,
}

impl TableDescription {
    #[must_use]
    pub fn new(
        owner_entity: impl Into<String>,
        associated_entity: impl Into<String>,
        owner_property: Option<&str>,
    ) -> Self {
        Self {
            owner_entity: owner_entity.into(),
            associated_entity: associated_entity.into(),
            owner_property: owner_property.map(str::to_string),
        }
    }
}

///
/// JoinTableNames
///
/// Maps each issued join-table name to the association that first claimed
/// it. Entries are never removed during a build; `clear` starts a new one.
/// Lookup, decision and insert happen under a single lock.
///

#[derive(Debug, Default)]
pub struct JoinTableNames {
    names: Mutex<HashMap<String, TableDescription>>,
}

impl JoinTableNames {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    ///
    /// Claim the first free name among `candidate(0)`, `candidate(1)`, ...
    ///
    /// A candidate already held by `description` is returned as is; one held
    /// by a different association is skipped. The same description always
    /// gets the same answer, and two descriptions never share a name.
    /// `candidate` must eventually yield a name nobody holds.
    ///
    pub fn resolve(
        &self,
        description: TableDescription,
        candidate: impl Fn(usize) -> String,
    ) -> String {
        let mut names = self.lock();
        let mut attempt = 0;

        loop {
            let name = candidate(attempt);

            match names.get(&name) {
                None => {
                    if attempt > 0 {
                        debug!(
                            name = %name,
                            attempt,
                            owner = %description.owner_entity,
                            property = ?description.owner_property,
                            "join table name disambiguated"
                        );
                    }
                    names.insert(name.clone(), description);

                    return name;
                }
                Some(claimed) if *claimed == description => return name,
                Some(claimed) => {
                    debug!(
                        name = %name,
                        claimed_by = %claimed.owner_entity,
                        claimed_property = ?claimed.owner_property,
                        "join table name held by another association"
                    );
                }
            }

            attempt += 1;
        }
    }

    /// The association holding `name`, if any.
    #[must_use]
    pub fn claimed_by(&self, name: &str) -> Option<TableDescription> {
        self.lock().get(name).cloned()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    // the map is consistent after every statement, so a poisoned lock is safe to reuse
    fn lock(&self) -> MutexGuard<'_, HashMap<String, TableDescription>> {
        self.names.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
