//! The interpretation pipeline and the shared processor that owns the
//! device/room snapshot.

use std::sync::{Arc, PoisonError, RwLock};

use hc_protocol::{ControlPlan, DeviceRecord, ProcessedContext, RoomMap};
use hc_taxonomy::{CategoryCatalog, StaticCatalog};

use crate::confidence::aggregate;
use crate::config::{DispatchConfig, ProcessorConfig};
use crate::dispatch::{self, DispatchOptions};
use crate::error::{ConfigResult, DispatchResult};
use crate::intent::classify;
use crate::matcher::find_matches;
use crate::normalize::normalize;
use crate::params;
use crate::snapshot::Snapshot;
use crate::suggestions::{SUGGESTION_THRESHOLD, suggest};

/// Interpret one command against a snapshot.
///
/// Never fails: an unrecognised command comes back as `Intent::Unknown` with
/// low confidence and suggestions.
pub fn interpret(
    text: &str,
    snapshot: &Snapshot,
    catalog: &dyn CategoryCatalog,
    config: &ProcessorConfig,
) -> ProcessedContext {
    let normalized = normalize(text);
    let intent = classify(&normalized);
    let device_matches = find_matches(&normalized, snapshot, catalog, config);
    let parameters = params::extract(&normalized, intent, snapshot.rooms());
    let confidence = aggregate(intent, &device_matches, &parameters);

    let suggestions = (confidence < SUGGESTION_THRESHOLD)
        .then(|| suggest(&normalized, snapshot, catalog, config));

    tracing::debug!(
        %intent,
        matches = device_matches.len(),
        parameters = parameters.len(),
        confidence,
        "interpreted command"
    );

    ProcessedContext {
        intent,
        device_matches,
        parameters,
        confidence,
        suggestions,
    }
}

/// Long-lived interpreter shared across threads.
///
/// Updates swap in a fresh `Arc<Snapshot>`; every call works on whichever
/// snapshot was current when it started.
pub struct ContextProcessor {
    catalog: Arc<dyn CategoryCatalog>,
    config: ProcessorConfig,
    dispatch: DispatchConfig,
    snapshot: RwLock<Arc<Snapshot>>,
}

impl ContextProcessor {
    pub fn new(devices: Vec<DeviceRecord>, rooms: RoomMap) -> Self {
        Self {
            catalog: Arc::new(StaticCatalog),
            config: ProcessorConfig::default(),
            dispatch: DispatchConfig::default(),
            snapshot: RwLock::new(Arc::new(Snapshot::new(devices, rooms))),
        }
    }

    pub fn with_catalog(mut self, catalog: Arc<dyn CategoryCatalog>) -> Self {
        self.catalog = catalog;
        self
    }

    /// Use custom ranking limits. Fails if they are looser than the defaults.
    pub fn with_config(mut self, config: ProcessorConfig) -> ConfigResult<Self> {
        config.validate()?;
        self.config = config;
        Ok(self)
    }

    pub fn with_dispatch_config(mut self, dispatch: DispatchConfig) -> ConfigResult<Self> {
        dispatch.validate()?;
        self.dispatch = dispatch;
        Ok(self)
    }

    pub fn config(&self) -> &ProcessorConfig {
        &self.config
    }

    pub fn catalog(&self) -> &dyn CategoryCatalog {
        self.catalog.as_ref()
    }

    /// The current snapshot. Later updates do not affect the returned value.
    pub fn snapshot(&self) -> Arc<Snapshot> {
        let guard = self.snapshot.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&*guard)
    }

    /// Replace the device list, keeping rooms.
    pub fn update_devices(&self, devices: Vec<DeviceRecord>) {
        let count = devices.len();
        self.swap(|current| current.with_devices(devices));
        tracing::info!(devices = count, "device snapshot updated");
    }

    /// Replace the room map, keeping devices.
    pub fn update_rooms(&self, rooms: RoomMap) {
        let count = rooms.len();
        self.swap(|current| current.with_rooms(rooms));
        tracing::info!(rooms = count, "room snapshot updated");
    }

    /// Replace devices and rooms together.
    pub fn replace_snapshot(&self, devices: Vec<DeviceRecord>, rooms: RoomMap) {
        let (device_count, room_count) = (devices.len(), rooms.len());
        self.swap(|_| Snapshot::new(devices, rooms));
        tracing::info!(
            devices = device_count,
            rooms = room_count,
            "snapshot replaced"
        );
    }

    pub fn process_context(&self, text: &str) -> ProcessedContext {
        let snapshot = self.snapshot();
        interpret(text, &snapshot, self.catalog(), &self.config)
    }

    /// Interpret `text` and plan a device command for it.
    pub fn plan(&self, text: &str, options: &DispatchOptions) -> DispatchResult<ControlPlan> {
        let snapshot = self.snapshot();
        let ctx = interpret(text, &snapshot, self.catalog(), &self.config);
        dispatch::plan(&ctx, &snapshot, self.catalog(), &self.dispatch, options)
    }

    /// Plan a device command for an already processed context.
    pub fn plan_context(
        &self,
        ctx: &ProcessedContext,
        options: &DispatchOptions,
    ) -> DispatchResult<ControlPlan> {
        let snapshot = self.snapshot();
        dispatch::plan(ctx, &snapshot, self.catalog(), &self.dispatch, options)
    }

    fn swap(&self, next: impl FnOnce(&Snapshot) -> Snapshot) {
        let mut guard = self.snapshot.write().unwrap_or_else(PoisonError::into_inner);
        let updated = next(&guard);
        *guard = Arc::new(updated);
    }
}

impl Default for ContextProcessor {
    fn default() -> Self {
        Self::new(Vec::new(), RoomMap::new())
    }
}
