//! Host state container for translation modules.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fmt::{Debug, Formatter, Result as FmtResult};
use std::mem;
use std::rc::Rc;

use tracing::debug;

use crate::store::action::Action;
use crate::store::error::StoreError;
use crate::store::mutation::Mutation;
use crate::store::state::TranslationState;

/// Shared handle to a [`Store`].
///
/// Execution is single-threaded and every operation runs to completion, so
/// the handle is a plain `Rc<RefCell<_>>`. Clone it to give several
/// components access to the same state.
pub type StoreHandle = Rc<RefCell<Store>>;

/// The translation module: owns one [`TranslationState`] and is the only
/// writer of it.
#[derive(Debug, Clone, Default)]
pub struct TranslationModule {
    state: TranslationState,
}

impl TranslationModule {
    /// Create a module with no active locale and no translations.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a module from preloaded state.
    pub fn with_state(state: TranslationState) -> Self {
        Self { state }
    }

    /// Get the module state (read-only).
    pub fn state(&self) -> &TranslationState {
        &self.state
    }
}

/// Identifies a subscription created by [`Store::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// A committed mutation, as seen by subscribers.
#[derive(Debug)]
pub struct CommitEvent<'a> {
    /// Name of the module the mutation was committed to.
    pub module: &'a str,
    /// The mutation that was applied.
    pub mutation: &'a Mutation,
    /// Module state after the mutation.
    pub state: &'a TranslationState,
}

type Subscriber = Box<dyn FnMut(&CommitEvent<'_>)>;

type SubscriberList = Rc<RefCell<Vec<(SubscriptionId, Subscriber)>>>;

/// A mutation that has been applied but not yet reported to subscribers.
///
/// Returned by [`Store::dispatch_deferred`] so a caller holding the store
/// through a [`StoreHandle`] can release its mutable borrow before
/// subscribers run. Subscribers may then read the store, for example to
/// re-render text through an [`I18n`](crate::I18n) facade.
#[must_use = "subscribers are not notified until `notify` is called"]
pub struct PendingCommit {
    module: String,
    mutation: Mutation,
    subscribers: SubscriberList,
}

impl Debug for PendingCommit {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("PendingCommit")
            .field("module", &self.module)
            .field("mutation", &self.mutation)
            .finish_non_exhaustive()
    }
}

impl PendingCommit {
    /// The mutation that was committed.
    pub fn mutation(&self) -> &Mutation {
        &self.mutation
    }

    /// Notify subscribers in registration order.
    ///
    /// `store` must be the store that produced this commit; its current
    /// module state is passed to every subscriber.
    pub fn notify(self, store: &Store) {
        let Some(state) = store.state(&self.module) else {
            return;
        };
        let event = CommitEvent {
            module: &self.module,
            mutation: &self.mutation,
            state,
        };

        // Subscribers can only be added or removed through `&mut Store`,
        // which is unavailable while `store` is borrowed here.
        let mut active = mem::take(&mut *self.subscribers.borrow_mut());
        for (_, subscriber) in &mut active {
            subscriber(&event);
        }
        let mut slot = self.subscribers.borrow_mut();
        active.append(&mut slot);
        *slot = active;
    }
}

/// An observable state container holding named translation modules.
///
/// Modules are registered by name. State is read through [`Store::state`]
/// and changed only by dispatching an [`Action`], which commits one
/// mutation and then notifies subscribers in registration order. Mutations
/// are applied in call order.
///
/// [`Store::dispatch`] notifies subscribers before returning. Code that
/// reaches the store through a [`StoreHandle`] should use
/// [`Store::dispatch_deferred`] and call [`PendingCommit::notify`] after
/// releasing its mutable borrow, so subscribers can read the store.
///
/// # Example
///
/// ```
/// use i18n_store::{Action, Store, TranslationModule};
///
/// let mut store = Store::new();
/// store.register_module("i18n", TranslationModule::new());
/// assert!(store.has_module("i18n"));
///
/// store.dispatch("i18n", Action::set_locale("de")).unwrap();
/// assert!(store.dispatch("missing", Action::set_locale("de")).is_err());
/// ```
#[derive(Default)]
pub struct Store {
    modules: BTreeMap<String, TranslationModule>,
    subscribers: SubscriberList,
    next_subscription: u64,
}

impl Debug for Store {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("Store")
            .field("modules", &self.modules)
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}

impl Store {
    /// Create an empty store with no modules.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap this store in a shared handle.
    pub fn into_handle(self) -> StoreHandle {
        Rc::new(RefCell::new(self))
    }

    // =========================================================================
    // Modules
    // =========================================================================

    /// Register a module under `name`, returning any module it replaced.
    pub fn register_module(
        &mut self,
        name: impl Into<String>,
        module: TranslationModule,
    ) -> Option<TranslationModule> {
        self.modules.insert(name.into(), module)
    }

    /// Check whether a module is registered under `name`.
    pub fn has_module(&self, name: &str) -> bool {
        self.modules.contains_key(name)
    }

    /// Get the state of the module registered under `name`.
    pub fn state(&self, name: &str) -> Option<&TranslationState> {
        self.modules.get(name).map(TranslationModule::state)
    }

    // =========================================================================
    // Dispatch
    // =========================================================================

    /// Dispatch an action to the module registered under `module`.
    ///
    /// Commits the action's mutation and notifies subscribers before
    /// returning. Fails only if no such module is registered.
    pub fn dispatch(&mut self, module: &str, action: Action) -> Result<(), StoreError> {
        let pending = self.dispatch_deferred(module, action)?;
        pending.notify(self);
        Ok(())
    }

    /// Dispatch an action and commit its mutation without notifying
    /// subscribers.
    ///
    /// The returned [`PendingCommit`] notifies them once the caller is done
    /// with its mutable access.
    pub fn dispatch_deferred(
        &mut self,
        module: &str,
        action: Action,
    ) -> Result<PendingCommit, StoreError> {
        debug!(module, action = action.name(), "dispatching action");
        let mutation = action.into_mutation();
        let Some(target) = self.modules.get_mut(module) else {
            return Err(StoreError::UnknownModule {
                name: module.to_string(),
            });
        };

        target.state.apply(&mutation);
        debug!(
            module,
            mutation = mutation.kind(),
            locale = %mutation.locale(),
            "committed mutation"
        );

        Ok(PendingCommit {
            module: module.to_string(),
            mutation,
            subscribers: Rc::clone(&self.subscribers),
        })
    }

    // =========================================================================
    // Subscriptions
    // =========================================================================

    /// Register a callback invoked after every committed mutation.
    pub fn subscribe(
        &mut self,
        subscriber: impl FnMut(&CommitEvent<'_>) + 'static,
    ) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.subscribers.borrow_mut().push((id, Box::new(subscriber)));
        id
    }

    /// Remove a subscription. Returns false if it was already removed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let mut subscribers = self.subscribers.borrow_mut();
        let before = subscribers.len();
        subscribers.retain(|(existing, _)| *existing != id);
        subscribers.len() != before
    }

    /// Number of registered subscriptions.
    ///
    /// Subscriptions being notified are not counted while they run.
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.borrow().len()
    }
}
