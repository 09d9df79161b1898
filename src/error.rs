//! Rendering errors.

/// Errors that can occur while rendering colored text.
///
/// Malformed markup is never an error: unmatched or out-of-order tags are
/// substituted as they appear.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RenderError {
    #[error("Unknown color name: '{name}'")]
    UnknownColorName { name: String },
}

impl RenderError {
    pub(crate) fn unknown_color(name: &str) -> Self {
        Self::UnknownColorName {
            name: name.to_string(),
        }
    }
}
