use std::borrow::Cow;
use std::error;
use std::fmt::{self, Display, Formatter};

#[derive(Debug)]
pub enum Error {
    /// No element matched the drop zone selector.
    ZoneNotFound(Cow<'static, str>),
    /// No element matched the file input selector.
    InputNotFound(Cow<'static, str>),
    PlatformError(Cow<'static, str>),
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Error::ZoneNotFound(selector) => {
                write!(f, "drop zone `{selector}` not found")
            }
            Error::InputNotFound(selector) => {
                write!(f, "file input `{selector}` not found")
            }
            Error::PlatformError(message) => write!(f, "platform error: {message}"),
        }
    }
}

impl error::Error for Error {}
