//! Form and upload validation.
//!
//! All checks run before any network call. Field errors are keyed by
//! field name so the shell can render them inline; file problems carry
//! the message shown in the rejection notice.

use std::collections::BTreeMap;
use std::sync::OnceLock;

use regex::Regex;
use thiserror::Error;

use panotour_store::ImageUpload;

/// Minimum password length.
pub const MIN_PASSWORD_LEN: usize = 8;

/// Upload size limit (50 MB).
pub const MAX_UPLOAD_BYTES: usize = 50 * 1024 * 1024;

fn email_regex() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| Regex::new(r"^\S+@\S+\.\S+$").unwrap())
}

/// Validation errors keyed by field name.
pub type FieldErrors = BTreeMap<&'static str, String>;

/// What a valid form submits.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthSubmission {
    pub email: String,
    pub password: String,
    /// Present for sign-up only.
    pub name: Option<String>,
}

/// Sign-in form state.
#[derive(Debug, Clone, Default)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        validate_email(&self.email, &mut errors);
        validate_password(&self.password, &mut errors);
        errors
    }

    /// Validates and, when clean, invokes `on_submit` exactly once.
    pub fn submit(&self, mut on_submit: impl FnMut(AuthSubmission)) -> FieldErrors {
        let errors = self.validate();
        if errors.is_empty() {
            on_submit(AuthSubmission {
                email: self.email.clone(),
                password: self.password.clone(),
                name: None,
            });
        }
        errors
    }
}

/// Sign-up form state.
#[derive(Debug, Clone, Default)]
pub struct SignupForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl SignupForm {
    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        if self.name.is_empty() {
            errors.insert("name", "Name is required".to_string());
        }
        validate_email(&self.email, &mut errors);
        validate_password(&self.password, &mut errors);
        if self.password != self.confirm_password {
            errors.insert("confirm_password", "Passwords do not match".to_string());
        }
        errors
    }

    /// Validates and, when clean, invokes `on_submit` exactly once.
    pub fn submit(&self, mut on_submit: impl FnMut(AuthSubmission)) -> FieldErrors {
        let errors = self.validate();
        if errors.is_empty() {
            on_submit(AuthSubmission {
                email: self.email.clone(),
                password: self.password.clone(),
                name: Some(self.name.clone()),
            });
        }
        errors
    }
}

fn validate_email(email: &str, errors: &mut FieldErrors) {
    if email.is_empty() {
        errors.insert("email", "Email is required".to_string());
    } else if !email_regex().is_match(email) {
        errors.insert("email", "Please enter a valid email".to_string());
    }
}

fn validate_password(password: &str, errors: &mut FieldErrors) {
    if password.is_empty() {
        errors.insert("password", "Password is required".to_string());
    } else if password.len() < MIN_PASSWORD_LEN {
        errors.insert(
            "password",
            "Password must be at least 8 characters".to_string(),
        );
    }
}

/// Why a selected file was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FileError {
    #[error("Please select image files only")]
    NotAnImage,

    #[error("Please select images smaller than 50MB")]
    TooLarge,
}

/// Validates one selected file before it is uploaded.
pub fn validate_upload(upload: &ImageUpload) -> Result<(), FileError> {
    if !upload.content_type.starts_with("image/") {
        return Err(FileError::NotAnImage);
    }
    if upload.bytes.len() > MAX_UPLOAD_BYTES {
        return Err(FileError::TooLarge);
    }
    Ok(())
}

/// Splits a selection into uploadable files and rejections.
pub fn partition_uploads(
    uploads: Vec<ImageUpload>,
) -> (Vec<ImageUpload>, Vec<(String, FileError)>) {
    let mut valid = Vec::new();
    let mut rejected = Vec::new();
    for upload in uploads {
        match validate_upload(&upload) {
            Ok(()) => valid.push(upload),
            Err(err) => rejected.push((upload.file_name, err)),
        }
    }
    (valid, rejected)
}
