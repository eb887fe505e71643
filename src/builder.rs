use crate::{
    error::{Argument, BuildError, InvalidArgumentError, InvalidUriError},
    query::QueryBuf,
    source::{self, Parts, SchemeBuf},
    template::Template,
};
use alloc::{
    borrow::ToOwned,
    collections::BTreeMap,
    string::String,
    vec::Vec,
};
use borrow_or_share::Bos;
use core::{net::Ipv6Addr, str::FromStr};
use fluent_uri::{
    component::Scheme,
    encoding::{
        encoder::{Fragment, Path, RegName},
        EStr, EString,
    },
    Builder, Uri,
};

#[cfg(feature = "serde")]
use serde::{de, Deserialize, Deserializer};

/// A fluent builder deriving URIs from a base URI.
///
/// A `UriBuilder` is created from an absolute URI with an authority,
/// by [parsing](Self::parse) a string or [taking apart](Self::from_uri)
/// an already parsed [`Uri`]. Its methods mutate it in place and return
/// `&mut Self`, so calls can be chained; the ones that validate their
/// argument return `Result<&mut Self, InvalidArgumentError>` instead and
/// leave the builder untouched on error.
///
/// [`build`](Self::build) composes a new [`Uri<String>`](Uri) from the current
/// state without consuming the builder, so one base can produce many URIs.
///
/// # Components
///
/// - The host, path and fragment are held *decoded* and are percent-encoded
///   again by [`build`](Self::build). Note that this makes an encoded slash
///   (`%2F`) in the source path indistinguishable from a literal one.
/// - The query of the source URI is kept verbatim. Parameters added with
///   [`add_query`](Self::add_query) follow it in call order.
/// - The path may contain `{name}` placeholders, which are substituted
///   with the values bound by [`with_segment`](Self::with_segment)
///   when building. Placeholders without a binding are kept and end up
///   percent-encoded (`%7Bname%7D`).
///
/// # Examples
///
/// ```
/// use fluent_uri_builder::UriBuilder;
///
/// let mut builder = UriBuilder::parse("http://host:1234/{seg1}")?;
/// builder
///     .with_segment("seg1", "segone")
///     .add_path_template("{newseg}/someseg")?
///     .with_segment("newseg", "test")
///     .with_fragment("top")?;
///
/// assert_eq!(builder.build()?, "http://host:1234/segone/test/someseg#top");
/// # Ok::<_, fluent_uri_builder::Error>(())
/// ```
#[derive(Clone)]
#[must_use]
pub struct UriBuilder {
    pub(crate) scheme: SchemeBuf,
    pub(crate) host: String,
    pub(crate) port: Option<u16>,
    pub(crate) path: String,
    pub(crate) segments: BTreeMap<String, String>,
    pub(crate) query: QueryBuf,
    pub(crate) fragment: Option<String>,
}

impl UriBuilder {
    fn from_parts(parts: Parts) -> Self {
        UriBuilder {
            scheme: parts.scheme,
            host: parts.host,
            port: parts.port,
            path: parts.path,
            segments: BTreeMap::new(),
            query: parts.query,
            fragment: parts.fragment,
        }
    }

    /// Creates a builder from a URI string.
    ///
    /// Placeholders such as `{id}` may appear in the path even though
    /// braces are not allowed in a URI.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the string is not an absolute URI, if it has no
    /// authority or an empty host, if its port does not fit in `u16`,
    /// or if its host, path or fragment decodes to octets that are not UTF-8.
    ///
    /// # Examples
    ///
    /// ```
    /// use fluent_uri_builder::UriBuilder;
    ///
    /// let builder = UriBuilder::parse("http://example.com:8080/a%20b?x=1#top")?;
    /// assert_eq!(builder.scheme(), "http");
    /// assert_eq!(builder.host(), "example.com");
    /// assert_eq!(builder.port(), Some(8080));
    /// assert_eq!(builder.path(), "/a b");
    /// assert_eq!(builder.fragment(), Some("top"));
    ///
    /// assert!(UriBuilder::parse("/relative/path").is_err());
    /// assert!(UriBuilder::parse("mailto:user@example.com").is_err());
    /// # Ok::<_, fluent_uri_builder::error::InvalidUriError>(())
    /// ```
    pub fn parse(s: &str) -> Result<Self, InvalidUriError> {
        source::parse(s).map(Self::from_parts)
    }

    /// Creates a builder from a parsed URI.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the URI has no authority or an empty host,
    /// if its port does not fit in `u16`, or if its host, path or
    /// fragment decodes to octets that are not UTF-8.
    ///
    /// # Examples
    ///
    /// ```
    /// use fluent_uri_builder::{UriBuilder, Uri};
    ///
    /// let uri = Uri::parse("https://example.com/docs/")?;
    /// let mut builder = UriBuilder::from_uri(&uri)?;
    /// builder.add_path_template("intro.html")?;
    /// assert_eq!(builder.build()?, "https://example.com/docs/intro.html");
    /// # Ok::<_, Box<dyn std::error::Error>>(())
    /// ```
    pub fn from_uri<T: Bos<str>>(uri: &Uri<T>) -> Result<Self, InvalidUriError> {
        source::decompose(uri).map(Self::from_parts)
    }

    /// Returns the scheme.
    #[must_use]
    pub fn scheme(&self) -> &str {
        self.scheme.as_str()
    }

    /// Returns the host.
    ///
    /// A registered name is returned decoded; an IP literal is returned as written.
    #[must_use]
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Returns the port, or `None` if the URI carries no port.
    #[must_use]
    pub fn port(&self) -> Option<u16> {
        self.port
    }

    /// Returns the decoded path, with placeholders unsubstituted.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Returns the decoded fragment.
    #[must_use]
    pub fn fragment(&self) -> Option<&str> {
        self.fragment.as_deref()
    }

    /// Returns the value bound to a placeholder name.
    #[must_use]
    pub fn segment(&self, name: &str) -> Option<&str> {
        self.segments.get(name).map(String::as_str)
    }

    /// Returns the query of the source URI, still percent-encoded.
    #[must_use]
    pub fn base_query(&self) -> Option<&str> {
        self.query.base().map(EStr::as_str)
    }

    /// Returns an iterator over the query parameters added so far, in call order.
    ///
    /// Parameters from the source URI are not included; see [`base_query`](Self::base_query).
    pub fn query_pairs(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.query
            .pairs()
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Returns the names of the placeholders in the path that have no binding yet,
    /// in order of appearance and without duplicates.
    ///
    /// # Examples
    ///
    /// ```
    /// use fluent_uri_builder::UriBuilder;
    ///
    /// let mut builder = UriBuilder::parse("http://example.com/{org}/{repo}/{org}")?;
    /// builder.with_segment("repo", "uri");
    /// assert_eq!(builder.unbound_placeholders(), ["org"]);
    /// # Ok::<_, fluent_uri_builder::Error>(())
    /// ```
    #[must_use]
    pub fn unbound_placeholders(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        for name in Template::new_validated(&self.path).placeholders() {
            if !self.segments.contains_key(name) && !names.contains(&name) {
                names.push(name);
            }
        }
        names
    }

    /// Replaces the scheme.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the scheme is empty or is not a valid scheme name
    /// according to [Section 3.1 of RFC 3986][scheme].
    ///
    /// [scheme]: https://datatracker.ietf.org/doc/html/rfc3986#section-3.1
    pub fn with_scheme(&mut self, scheme: &str) -> Result<&mut Self, InvalidArgumentError> {
        if scheme.is_empty() {
            return Err(InvalidArgumentError::empty(Argument::Scheme));
        }
        self.scheme = Scheme::new(scheme)
            .and_then(SchemeBuf::new)
            .ok_or_else(|| InvalidArgumentError::malformed(Argument::Scheme))?;
        Ok(self)
    }

    /// Replaces the host.
    ///
    /// The host is taken as decoded text and percent-encoded when building,
    /// except for an IPv6 literal in brackets, such as `[::1]`.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the host is empty.
    pub fn with_host(&mut self, host: &str) -> Result<&mut Self, InvalidArgumentError> {
        if host.is_empty() {
            return Err(InvalidArgumentError::empty(Argument::Host));
        }
        host.clone_into(&mut self.host);
        Ok(self)
    }

    /// Sets the port.
    ///
    /// The port is rendered even when it is the default port of the scheme.
    pub fn with_port(&mut self, port: u16) -> &mut Self {
        self.port = Some(port);
        self
    }

    /// Removes the port, so that the default port of the scheme applies.
    pub fn clear_port(&mut self) -> &mut Self {
        self.port = None;
        self
    }

    /// Replaces the whole path.
    ///
    /// A path not starting with `'/'` is rendered with one prepended.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the path is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use fluent_uri_builder::UriBuilder;
    ///
    /// let mut builder = UriBuilder::parse("http://host/old/path")?;
    /// builder.with_path("mypath/hello")?;
    /// assert_eq!(builder.build()?, "http://host/mypath/hello");
    /// # Ok::<_, fluent_uri_builder::Error>(())
    /// ```
    pub fn with_path(&mut self, path: &str) -> Result<&mut Self, InvalidArgumentError> {
        if path.is_empty() {
            return Err(InvalidArgumentError::empty(Argument::Path));
        }
        path.clone_into(&mut self.path);
        Ok(self)
    }

    /// Appends a path template to the path.
    ///
    /// A `'/'` is inserted in between unless the path already ends with one
    /// or the template starts with one. Slashes elsewhere are left alone.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the template is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use fluent_uri_builder::UriBuilder;
    ///
    /// let mut builder = UriBuilder::parse("http://host/api")?;
    /// builder
    ///     .add_path_template("v1")?
    ///     .add_path_template("/users/")?
    ///     .add_path_template("{id}")?
    ///     .with_segment("id", "7");
    /// assert_eq!(builder.build()?, "http://host/api/v1/users/7");
    /// # Ok::<_, fluent_uri_builder::Error>(())
    /// ```
    pub fn add_path_template(&mut self, template: &str) -> Result<&mut Self, InvalidArgumentError> {
        let template =
            Template::new(template).ok_or_else(|| InvalidArgumentError::empty(Argument::Template))?;
        template.append_to(&mut self.path);
        Ok(self)
    }

    /// Binds a value to the placeholder `{name}`, replacing any previous binding.
    ///
    /// The path is left as is until [`build`](Self::build).
    pub fn with_segment(&mut self, name: &str, value: &str) -> &mut Self {
        self.segments.insert(name.to_owned(), value.to_owned());
        self
    }

    /// Appends a query parameter.
    ///
    /// The key and the value are taken as decoded text and percent-encoded
    /// when building, so they may contain `'&'`, `'='` and the like.
    /// Adding the same key again adds another parameter.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the key or the value is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use fluent_uri_builder::UriBuilder;
    ///
    /// let mut builder = UriBuilder::parse("http://host/search?lang=en")?;
    /// builder.add_query("q", "fish & chips")?.add_query("q", "tea")?;
    /// assert_eq!(
    ///     builder.build()?,
    ///     "http://host/search?lang=en&q=fish%20%26%20chips&q=tea"
    /// );
    /// # Ok::<_, fluent_uri_builder::Error>(())
    /// ```
    pub fn add_query(&mut self, key: &str, value: &str) -> Result<&mut Self, InvalidArgumentError> {
        check_query_pair(key, value)?;
        self.query.push(key.to_owned(), value.to_owned());
        Ok(self)
    }

    /// Appends query parameters in the given order.
    ///
    /// Either all of the parameters are added or none is.
    ///
    /// # Errors
    ///
    /// Returns `Err` if any key or value is empty.
    pub fn add_queries<I, K, V>(&mut self, pairs: I) -> Result<&mut Self, InvalidArgumentError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let pairs: Vec<(K, V)> = pairs.into_iter().collect();
        for (key, value) in &pairs {
            check_query_pair(key.as_ref(), value.as_ref())?;
        }
        for (key, value) in pairs {
            self.query
                .push(key.as_ref().to_owned(), value.as_ref().to_owned());
        }
        Ok(self)
    }

    /// Removes the query, including the one from the source URI.
    pub fn clear_query(&mut self) -> &mut Self {
        self.query.clear();
        self
    }

    /// Replaces the fragment.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the fragment is empty.
    pub fn with_fragment(&mut self, fragment: &str) -> Result<&mut Self, InvalidArgumentError> {
        if fragment.is_empty() {
            return Err(InvalidArgumentError::empty(Argument::Fragment));
        }
        self.fragment = Some(fragment.to_owned());
        Ok(self)
    }

    /// Removes the fragment.
    pub fn clear_fragment(&mut self) -> &mut Self {
        self.fragment = None;
        self
    }

    /// Builds a URI from the current state.
    ///
    /// Placeholders in the path are substituted, every component is
    /// percent-encoded, and the parts are composed into a new URI.
    /// The builder itself is not modified.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the composer rejects the combination of components.
    pub fn build(&self) -> Result<Uri<String>, BuildError> {
        let host = HostRepr::new(&self.host);

        let substituted = Template::new_validated(&self.path).substitute(&self.segments);
        let mut path = EString::<Path>::new();
        if !substituted.is_empty() && !substituted.starts_with('/') {
            path.push('/');
        }
        path.encode::<Path>(&substituted);

        let query = self.query.render();
        let fragment = self.fragment.as_deref().map(|s| {
            let mut buf = EString::<Fragment>::new();
            buf.encode::<Fragment>(s);
            buf
        });

        let uri = Uri::builder()
            .scheme(self.scheme.get())
            .authority_with(|b| {
                let b = match &host {
                    HostRepr::Ipv6(addr) => b.host(*addr),
                    HostRepr::RegName(name) => b.host(name.as_estr()),
                };
                b.optional(Builder::port, self.port)
            })
            .path(path.as_estr())
            .optional(Builder::query, query.as_deref())
            .optional(Builder::fragment, fragment.as_deref())
            .build()?;

        trace!(%uri, "built URI");
        Ok(uri)
    }
}

fn check_query_pair(key: &str, value: &str) -> Result<(), InvalidArgumentError> {
    if key.is_empty() {
        return Err(InvalidArgumentError::empty(Argument::QueryKey));
    }
    if value.is_empty() {
        return Err(InvalidArgumentError::empty(Argument::QueryValue));
    }
    Ok(())
}

/// A host ready to be handed to the composer.
enum HostRepr {
    Ipv6(Ipv6Addr),
    RegName(EString<RegName>),
}

impl HostRepr {
    fn new(host: &str) -> Self {
        let ipv6 = host
            .strip_prefix('[')
            .and_then(|s| s.strip_suffix(']'))
            .and_then(|s| s.parse().ok());

        match ipv6 {
            Some(addr) => HostRepr::Ipv6(addr),
            None => {
                let mut buf = EString::<RegName>::new();
                buf.encode::<RegName>(host);
                HostRepr::RegName(buf)
            }
        }
    }
}

impl FromStr for UriBuilder {
    type Err = InvalidUriError;

    fn from_str(s: &str) -> Result<Self, InvalidUriError> {
        UriBuilder::parse(s)
    }
}

impl TryFrom<&str> for UriBuilder {
    type Error = InvalidUriError;

    fn try_from(s: &str) -> Result<Self, InvalidUriError> {
        UriBuilder::parse(s)
    }
}

impl<T: Bos<str>> TryFrom<&Uri<T>> for UriBuilder {
    type Error = InvalidUriError;

    fn try_from(uri: &Uri<T>) -> Result<Self, InvalidUriError> {
        UriBuilder::from_uri(uri)
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for UriBuilder {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        UriBuilder::parse(&s).map_err(de::Error::custom)
    }
}
