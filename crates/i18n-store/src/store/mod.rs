//! The translation state container.
//!
//! A [`Store`] holds named [`TranslationModule`]s. Each module owns a
//! [`TranslationState`] that changes only through the two dispatched
//! [`Action`]s, each committing one [`Mutation`].

mod action;
mod container;
mod error;
mod mutation;
mod state;

pub use action::Action;
pub use container::{
    CommitEvent, PendingCommit, Store, StoreHandle, SubscriptionId, TranslationModule,
};
pub use error::StoreError;
pub use mutation::Mutation;
pub use state::TranslationState;
