//! Todo Store
//!
//! Owns the canonical collection. `dispatch` is the only way to change it:
//! reduce, write the full snapshot, then notify subscribers.

use crate::action::TodoAction;
use crate::config::StoreConfig;
use crate::error::ActionResult;
use crate::persist::{self, Storage};
use crate::reducer;
use crate::todo::TodoCollection;
use crate::tree;

/// Callback invoked with the new state after every successful dispatch
pub type Listener = Box<dyn Fn(&TodoCollection) + Send + Sync>;

/// Handle returned by [`TodoStore::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

pub struct TodoStore<S: Storage> {
    state: TodoCollection,
    storage: S,
    config: StoreConfig,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: u64,
}

impl<S: Storage> TodoStore<S> {
    /// Load the persisted snapshot from `storage`.
    ///
    /// Read failures and malformed snapshots start from an empty collection.
    pub fn open(storage: S, config: StoreConfig) -> Self {
        let raw = match storage.load(&config.storage_key) {
            Ok(raw) => raw,
            Err(e) => {
                log::error!("[STORE] Could not read '{}': {}", config.storage_key, e);
                None
            }
        };
        let state = persist::decode(raw.as_deref());

        let dangling = tree::dangling_references(&state);
        if !dangling.is_empty() {
            log::warn!("[STORE] {} dangling child reference(s) in snapshot", dangling.len());
            for (parent, child) in &dangling {
                log::debug!("[STORE] {} lists missing child {}", parent, child);
            }
        }
        log::info!("[STORE] Loaded {} todos from '{}'", state.len(), config.storage_key);

        Self {
            state,
            storage,
            config,
            listeners: Vec::new(),
            next_subscription: 0,
        }
    }

    pub fn state(&self) -> &TodoCollection {
        &self.state
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Apply one action.
    ///
    /// On `Err` nothing changed, nothing was written and no listener ran.
    pub fn dispatch(&mut self, action: TodoAction) -> ActionResult<()> {
        self.log_overwrite(&action);

        let next = match reducer::reduce(&self.state, &action, self.config.delete_policy) {
            Ok(next) => next,
            Err(e) => {
                log::warn!("[STORE] Ignored {}: {}", action.name(), e);
                return Err(e);
            }
        };

        log::debug!("[STORE] {} on {}", action.name(), action.target());
        self.state = next;
        self.persist();
        self.notify();
        Ok(())
    }

    /// Register a listener; it runs after every successful dispatch
    pub fn subscribe(
        &mut self,
        listener: impl Fn(&TodoCollection) + Send + Sync + 'static,
    ) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Returns false if `id` was not subscribed
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(sub, _)| *sub != id);
        self.listeners.len() != before
    }

    // Last writer wins; a failed write keeps the in-memory state.
    fn persist(&mut self) {
        let result = persist::encode(&self.state)
            .and_then(|json| self.storage.save(&self.config.storage_key, &json));
        if let Err(e) = result {
            log::error!("[STORE] Snapshot not saved: {}", e);
        }
    }

    fn notify(&self) {
        for (_, listener) in &self.listeners {
            listener(&self.state);
        }
    }

    fn log_overwrite(&self, action: &TodoAction) {
        let id = match action {
            TodoAction::AddTodo { id, .. } => id,
            TodoAction::AddChildTodo { child_id, .. } => child_id,
            _ => return,
        };
        if self.state.contains(id) {
            log::debug!("[STORE] {} overwrites existing todo {}", action.name(), id);
        }
    }
}
