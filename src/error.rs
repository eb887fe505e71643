//! Error types.

pub use fluent_uri::error::{BuildError, ParseError};

/// Detailed cause of an [`InvalidUriError`].
#[derive(Debug)]
pub(crate) enum InvalidUriErrorKind {
    /// The input does not match the `absolute-URI` grammar.
    Syntax(ParseError),
    /// The URI has no authority component, e.g. `mailto:user@example.com`.
    NoAuthority,
    /// The authority is present but its host is empty, e.g. `file:///etc/hosts`.
    EmptyHost,
    /// The port is not a number in `0..=65535`.
    PortOutOfRange,
    /// The host, path or fragment decodes to octets that are not UTF-8.
    NotUtf8,
    /// The scheme cannot be composed into a new URI.
    UnsupportedScheme,
}

/// An error occurred when creating a [`UriBuilder`] from a URI.
///
/// [`UriBuilder`]: crate::UriBuilder
#[derive(Debug)]
pub struct InvalidUriError(pub(crate) InvalidUriErrorKind);

impl InvalidUriError {
    /// Returns the underlying parse error if the input was syntactically invalid.
    #[must_use]
    pub fn parse_error(&self) -> Option<&ParseError> {
        match &self.0 {
            InvalidUriErrorKind::Syntax(e) => Some(e),
            _ => None,
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for InvalidUriError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.0 {
            InvalidUriErrorKind::Syntax(e) => Some(e),
            _ => None,
        }
    }
}

/// The argument rejected by a [`UriBuilder`] method.
///
/// [`UriBuilder`]: crate::UriBuilder
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum Argument {
    /// The argument of [`with_scheme`](crate::UriBuilder::with_scheme).
    Scheme,
    /// The argument of [`with_host`](crate::UriBuilder::with_host).
    Host,
    /// The argument of [`with_path`](crate::UriBuilder::with_path).
    Path,
    /// The argument of [`with_fragment`](crate::UriBuilder::with_fragment).
    Fragment,
    /// The argument of [`add_path_template`](crate::UriBuilder::add_path_template).
    Template,
    /// A key passed to [`add_query`](crate::UriBuilder::add_query).
    QueryKey,
    /// A value passed to [`add_query`](crate::UriBuilder::add_query).
    QueryValue,
}

/// Detailed cause of an [`InvalidArgumentError`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum InvalidArgumentErrorKind {
    Empty,
    Malformed,
}

/// An error occurred when a [`UriBuilder`] method received an unusable argument.
///
/// The builder is left unchanged when this error is returned.
///
/// [`UriBuilder`]: crate::UriBuilder
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InvalidArgumentError {
    pub(crate) arg: Argument,
    pub(crate) kind: InvalidArgumentErrorKind,
}

impl InvalidArgumentError {
    pub(crate) fn empty(arg: Argument) -> Self {
        debug!(?arg, "rejected empty argument");
        InvalidArgumentError {
            arg,
            kind: InvalidArgumentErrorKind::Empty,
        }
    }

    pub(crate) fn malformed(arg: Argument) -> Self {
        debug!(?arg, "rejected malformed argument");
        InvalidArgumentError {
            arg,
            kind: InvalidArgumentErrorKind::Malformed,
        }
    }

    /// Returns the argument that was rejected.
    #[must_use]
    pub fn argument(&self) -> Argument {
        self.arg
    }

    /// Checks whether the argument was rejected for being empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.kind == InvalidArgumentErrorKind::Empty
    }
}

#[cfg(feature = "std")]
impl std::error::Error for InvalidArgumentError {}

/// Any error returned by this crate.
///
/// Each fallible operation returns a more specific error type;
/// all of them convert into `Error` so that `?` can be used across a chain.
#[derive(Debug)]
pub enum Error {
    /// The source URI could not be used.
    InvalidUri(InvalidUriError),
    /// A builder method received an unusable argument.
    InvalidArgument(InvalidArgumentError),
    /// The final URI could not be composed.
    Build(BuildError),
}

impl From<InvalidUriError> for Error {
    fn from(e: InvalidUriError) -> Self {
        Error::InvalidUri(e)
    }
}

impl From<InvalidArgumentError> for Error {
    fn from(e: InvalidArgumentError) -> Self {
        Error::InvalidArgument(e)
    }
}

impl From<BuildError> for Error {
    fn from(e: BuildError) -> Self {
        Error::Build(e)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::InvalidUri(e) => Some(e),
            Error::InvalidArgument(e) => Some(e),
            Error::Build(e) => Some(e),
        }
    }
}
