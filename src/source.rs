use crate::{
    error::{InvalidUriError, InvalidUriErrorKind},
    query::QueryBuf,
};
use alloc::{
    borrow::Cow,
    string::String,
};
use borrow_or_share::Bos;
use fluent_uri::{
    component::{Host, Scheme},
    encoding::{EStr, Encoder},
    Uri,
};

/// A validated scheme, held as the URI `<scheme>:` so that it can be
/// borrowed as a [`Scheme`] at any time.
#[derive(Clone)]
pub(crate) struct SchemeBuf(Uri<String>);

impl SchemeBuf {
    pub(crate) fn new(scheme: &Scheme) -> Option<Self> {
        Uri::builder()
            .scheme(scheme)
            .path(EStr::EMPTY)
            .build()
            .ok()
            .map(SchemeBuf)
    }

    pub(crate) fn get(&self) -> &Scheme {
        self.0.scheme()
    }

    pub(crate) fn as_str(&self) -> &str {
        self.get().as_str()
    }
}

/// The components of a source URI, with host, path and fragment decoded.
pub(crate) struct Parts {
    pub(crate) scheme: SchemeBuf,
    pub(crate) host: String,
    pub(crate) port: Option<u16>,
    pub(crate) path: String,
    pub(crate) query: QueryBuf,
    pub(crate) fragment: Option<String>,
}

/// Percent-encodes the placeholder delimiters, which a URI cannot contain literally.
fn escape_braces(s: &str) -> Cow<'_, str> {
    if !s.contains(['{', '}']) {
        return Cow::Borrowed(s);
    }

    let mut buf = String::with_capacity(s.len() + 8);
    for ch in s.chars() {
        match ch {
            '{' => buf.push_str("%7B"),
            '}' => buf.push_str("%7D"),
            _ => buf.push(ch),
        }
    }
    Cow::Owned(buf)
}

/// Decodes a component, refusing octets that do not form UTF-8
/// since they could not be encoded back as they were.
fn decode<E: Encoder>(s: &EStr<E>) -> Result<String, InvalidUriError> {
    s.decode()
        .into_string()
        .map(Cow::into_owned)
        .map_err(|_| InvalidUriError(InvalidUriErrorKind::NotUtf8))
}

pub(crate) fn parse(s: &str) -> Result<Parts, InvalidUriError> {
    let s = escape_braces(s);
    let uri = Uri::parse(&*s).map_err(|e| InvalidUriError(InvalidUriErrorKind::Syntax(e)))?;
    decompose(&uri)
}

pub(crate) fn decompose<T: Bos<str>>(uri: &Uri<T>) -> Result<Parts, InvalidUriError> {
    let auth = uri
        .authority()
        .ok_or(InvalidUriError(InvalidUriErrorKind::NoAuthority))?;

    // IP literals are kept as written; only registered names carry encoded octets.
    let host = match auth.host_parsed() {
        Host::RegName(name) => decode(name)?,
        _ => auth.host().into(),
    };
    if host.is_empty() {
        return Err(InvalidUriError(InvalidUriErrorKind::EmptyHost));
    }

    let port = auth
        .port_to_u16()
        .map_err(|_| InvalidUriError(InvalidUriErrorKind::PortOutOfRange))?;

    let scheme = SchemeBuf::new(uri.scheme())
        .ok_or(InvalidUriError(InvalidUriErrorKind::UnsupportedScheme))?;

    Ok(Parts {
        scheme,
        host,
        port,
        path: decode(uri.path())?,
        query: QueryBuf::from_source(uri.query()),
        fragment: uri.fragment().map(decode).transpose()?,
    })
}
