//! Client-side tour store for Panotour.
//!
//! The persistence service owns durable state; this crate maintains the
//! in-memory reflection the UI reads from. Mutations are sequential
//! confirm-then-apply (never optimistic), failures surface as user-facing
//! notices and re-raise to the caller, and every asynchronous operation
//! carries a cancellation token so results outliving their caller are
//! discarded.

pub mod auth;
pub mod cancel;
pub mod error;
pub mod notify;
pub mod store;

pub use auth::AuthSession;
pub use cancel::CancelToken;
pub use error::{Result, StoreError};
pub use notify::{LogSink, MemorySink, Notice, NoticeLevel, NoticeSink};
pub use store::{ImageUpload, TourStore};
