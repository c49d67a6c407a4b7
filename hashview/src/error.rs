use snafu::prelude::*;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum Error {
    #[snafu(display("Invalid route pattern `{pattern}`: {source}"))]
    Pattern {
        pattern: String,
        source: regex::Error,
    },

    #[snafu(display("Malformed location fragment `{fragment}`"))]
    MalformedFragment { fragment: String },

    #[snafu(display("{message}"))]
    View { message: String },
}

impl Error {
    /// Build a view error from a plain message. Intended for `View`
    /// implementations and navigation listeners outside this crate.
    pub fn view(message: impl Into<String>) -> Self {
        Self::View {
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
