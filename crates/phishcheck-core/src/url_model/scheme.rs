//! Caller-side scheme defaulting.

/// Prepends `"{default_scheme}://"` unless `input` already starts with
/// `http://` or `https://` (case-sensitive).
///
/// The validator never does this itself; it is applied by the CLI to
/// operator input before validation.
pub fn with_default_scheme(input: &str, default_scheme: &str) -> String {
    if input.starts_with("http://") || input.starts_with("https://") {
        input.to_string()
    } else {
        format!("{}://{}", default_scheme, input)
    }
}
