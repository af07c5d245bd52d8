//! Schema change events and the handler table that maps them to a
//! regeneration pass.

use crate::error::{Result, TypegenError};
use crate::sync::{SyncReport, TypeSyncer};
use std::collections::BTreeMap;
use std::str::FromStr;
use std::sync::Arc;
use strum::{Display, EnumIter, EnumString, IntoEnumIterator, IntoStaticStr};
use tracing::{debug, info};

/// Lifecycle events that change the schema.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display, EnumString, EnumIter,
    IntoStaticStr,
)]
pub enum SchemaEvent {
    #[strum(serialize = "collections.create")]
    CollectionsCreate,
    #[strum(serialize = "collections.update")]
    CollectionsUpdate,
    #[strum(serialize = "collections.delete")]
    CollectionsDelete,
    #[strum(serialize = "fields.create")]
    FieldsCreate,
    #[strum(serialize = "fields.update")]
    FieldsUpdate,
    #[strum(serialize = "fields.delete")]
    FieldsDelete,
    #[strum(serialize = "relations.create")]
    RelationsCreate,
    #[strum(serialize = "relations.update")]
    RelationsUpdate,
    #[strum(serialize = "relations.delete")]
    RelationsDelete,
}

impl SchemaEvent {
    pub fn name(self) -> &'static str {
        self.into()
    }
}

/// Handler table keyed by event name.
///
/// Every entry shares the same [`TypeSyncer`]; a pass holds no state beyond
/// its own call.
pub struct HookRegistry {
    handlers: BTreeMap<&'static str, Arc<TypeSyncer>>,
}

impl HookRegistry {
    pub fn new() -> Self {
        Self {
            handlers: BTreeMap::new(),
        }
    }

    /// Registers `syncer` for every [`SchemaEvent`].
    pub fn for_syncer(syncer: TypeSyncer) -> Self {
        let syncer = Arc::new(syncer);
        let mut registry = Self::new();
        for event in SchemaEvent::iter() {
            registry.register(event, Arc::clone(&syncer));
        }
        registry
    }

    pub fn register(&mut self, event: SchemaEvent, syncer: Arc<TypeSyncer>) {
        debug!(event = event.name(), "Registering schema hook");
        self.handlers.insert(event.name(), syncer);
    }

    pub fn events(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.handlers.keys().copied()
    }

    /// Runs the handler registered for `event_name`.
    ///
    /// Returns `Ok(None)` when no handler is registered for that name.
    pub async fn dispatch(&self, event_name: &str) -> Result<Option<SyncReport>> {
        let Some(syncer) = self.handlers.get(event_name) else {
            debug!(event = event_name, "No hook registered");
            return Ok(None);
        };

        info!(event = event_name, "Schema changed, regenerating types");
        syncer.sync().await.map(Some)
    }

    /// Like [`HookRegistry::dispatch`], but rejects names that are not schema
    /// events at all.
    pub async fn dispatch_strict(&self, event_name: &str) -> Result<Option<SyncReport>> {
        SchemaEvent::from_str(event_name)
            .map_err(|_| TypegenError::UnknownEvent(event_name.to_string()))?;
        self.dispatch(event_name).await
    }
}

impl Default for HookRegistry {
    fn default() -> Self {
        Self::new()
    }
}
