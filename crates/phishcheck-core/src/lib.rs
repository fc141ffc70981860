pub mod config;
pub mod logging;

pub mod fetch;
pub mod patterns;
pub mod url_model;
pub mod validator;

pub use validator::{validate, validate_with, ValidationReport};
