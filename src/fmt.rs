use crate::{
    error::{Argument, Error, InvalidArgumentError, InvalidArgumentErrorKind, InvalidUriError, InvalidUriErrorKind},
    template::Template,
    UriBuilder,
};
use core::fmt::{Debug, Display, Formatter, Result};

impl Debug for Template {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        Debug::fmt(self.as_str(), f)
    }
}

impl Display for Template {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        Display::fmt(self.as_str(), f)
    }
}

impl Debug for UriBuilder {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.debug_struct("UriBuilder")
            .field("scheme", &self.scheme.as_str())
            .field("host", &self.host)
            .field("port", &self.port)
            .field("path", &self.path)
            .field("segments", &self.segments)
            .field("base_query", &self.base_query())
            .field("query_pairs", &self.query.pairs())
            .field("fragment", &self.fragment)
            .finish()
    }
}

impl Display for InvalidUriError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match &self.0 {
            InvalidUriErrorKind::Syntax(e) => Display::fmt(e, f),
            InvalidUriErrorKind::NoAuthority => f.write_str("authority not present"),
            InvalidUriErrorKind::EmptyHost => f.write_str("host is empty"),
            InvalidUriErrorKind::PortOutOfRange => f.write_str("port is out of range"),
            InvalidUriErrorKind::NotUtf8 => {
                f.write_str("percent-encoded octets do not form valid UTF-8")
            }
            InvalidUriErrorKind::UnsupportedScheme => f.write_str("scheme cannot be composed"),
        }
    }
}

impl Display for Argument {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let name = match self {
            Argument::Scheme => "scheme",
            Argument::Host => "host",
            Argument::Path => "path",
            Argument::Fragment => "fragment",
            Argument::Template => "path template",
            Argument::QueryKey => "query key",
            Argument::QueryValue => "query value",
        };
        f.write_str(name)
    }
}

impl Display for InvalidArgumentError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self.kind {
            InvalidArgumentErrorKind::Empty => write!(f, "{} must not be empty", self.arg),
            InvalidArgumentErrorKind::Malformed => write!(f, "{} is malformed", self.arg),
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Error::InvalidUri(e) => write!(f, "invalid source URI: {e}"),
            Error::InvalidArgument(e) => write!(f, "invalid argument: {e}"),
            Error::Build(e) => write!(f, "failed to build URI: {e}"),
        }
    }
}
