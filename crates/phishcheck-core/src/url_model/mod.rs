//! URL modeling: the format check the validator gates on, and the
//! scheme defaulting the CLI applies before calling it.

mod format;
mod scheme;

pub use format::{check_format, UrlParts};
pub use scheme::with_default_scheme;
