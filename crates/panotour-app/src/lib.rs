//! Page shell for Panotour.
//!
//! The shell holds the in-memory navigation state and the pieces of
//! presentation logic with actual behavior: auth form validation, upload
//! file validation, dashboard search filtering, and share-link
//! construction. Rendering is someone else's job.

pub mod cli;
pub mod dashboard;
pub mod demo;
pub mod forms;
pub mod pages;

pub use dashboard::{can_share, filter_tours, share_url};
pub use forms::{
    partition_uploads, validate_upload, AuthSubmission, FieldErrors, FileError, LoginForm,
    SignupForm, MAX_UPLOAD_BYTES, MIN_PASSWORD_LEN,
};
pub use pages::{AuthMode, Page, PageShell};
