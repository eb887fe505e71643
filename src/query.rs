use fluent_uri::encoding::{encoder::Query, EStr, EString, Encoder, Table};
use alloc::{string::String, vec::Vec};

/// An encoder for a key or value inside a query.
///
/// Keeps what `Query` keeps except the characters that delimit or
/// reinterpret form data.
struct QueryData;

impl Encoder for QueryData {
    const TABLE: &'static Table = &Query::TABLE.sub(&Table::new(b"&=+;"));
}

/// The query of a URI under construction.
///
/// The query of the source URI is kept verbatim. Parameters added afterwards are
/// kept unencoded in call order; delimiters are only produced by [`render`](Self::render).
#[derive(Clone, Default)]
pub(crate) struct QueryBuf {
    base: Option<EString<Query>>,
    pairs: Vec<(String, String)>,
}

impl QueryBuf {
    pub(crate) fn from_source(base: Option<&EStr<Query>>) -> Self {
        QueryBuf {
            base: base.map(EString::from),
            pairs: Vec::new(),
        }
    }

    pub(crate) fn push(&mut self, key: String, value: String) {
        self.pairs.push((key, value));
    }

    pub(crate) fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }

    pub(crate) fn base(&self) -> Option<&EStr<Query>> {
        self.base.as_deref()
    }

    pub(crate) fn clear(&mut self) {
        self.base = None;
        self.pairs.clear();
    }

    /// Renders the query without the leading `'?'`,
    /// or `None` when the URI should have no query at all.
    pub(crate) fn render(&self) -> Option<EString<Query>> {
        if self.base.is_none() && self.pairs.is_empty() {
            return None;
        }

        let mut buf = self.base.clone().unwrap_or_else(EString::new);
        for (key, value) in &self.pairs {
            if !buf.is_empty() && !buf.as_str().ends_with('&') {
                buf.push('&');
            }
            buf.encode::<QueryData>(key);
            buf.push('=');
            buf.encode::<QueryData>(value);
        }
        Some(buf)
    }
}
