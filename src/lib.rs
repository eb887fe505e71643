#![warn(
    future_incompatible,
    missing_debug_implementations,
    missing_docs,
    nonstandard_style,
    rust_2018_idioms,
    clippy::if_not_else,
    clippy::map_unwrap_or,
    clippy::missing_errors_doc,
    clippy::must_use_candidate,
    clippy::semicolon_if_nothing_returned,
    clippy::single_match_else,
)]
#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![no_std]

//! A fluent builder for deriving URIs from a base URI.
//!
//! A [`UriBuilder`] takes an absolute URI apart, lets you override its scheme,
//! host, port, path and fragment, append [path templates](UriBuilder::add_path_template)
//! containing `{name}` placeholders, bind those placeholders
//! ([`with_segment`](UriBuilder::with_segment)) and accumulate query parameters
//! ([`add_query`](UriBuilder::add_query)). [`build`](UriBuilder::build) then
//! composes a fresh [`Uri<String>`](Uri), percent-encoding every component.
//!
//! Parsing and composition are delegated to [`fluent_uri`], which is re-exported.
//!
//! # Examples
//!
//! ```
//! use fluent_uri_builder::UriBuilder;
//!
//! let mut builder = UriBuilder::parse("http://example.com:8080/users/{id}")?;
//! builder
//!     .with_segment("id", "42")
//!     .add_path_template("posts")?
//!     .add_query("page", "2")?
//!     .add_query("sort", "new")?;
//!
//! let uri = builder.build()?;
//! assert_eq!(uri, "http://example.com:8080/users/42/posts?page=2&sort=new");
//!
//! // The builder is still usable: rebinding a segment only affects later builds.
//! builder.with_segment("id", "43");
//! assert_eq!(
//!     builder.build()?,
//!     "http://example.com:8080/users/43/posts?page=2&sort=new"
//! );
//! # Ok::<_, fluent_uri_builder::Error>(())
//! ```
//!
//! # Crate features
//!
//! - `std` (default): Enables [`std`] support. Required for [`Error`](std::error::Error)
//!   implementations.
//!
//! - `serde`: Enables [`serde`] support. A [`UriBuilder`] can then be deserialized
//!   from a URI string, and built URIs can be serialized.
//!
//! - `tracing`: Emits [`tracing`] events when an argument is rejected
//!   and when a URI is built.

macro_rules! debug {
    ($($t:tt)*) => {
        #[cfg(feature = "tracing")]
        tracing::debug!($($t)*);
    };
}

macro_rules! trace {
    ($($t:tt)*) => {
        #[cfg(feature = "tracing")]
        tracing::trace!($($t)*);
    };
}

mod builder;
pub mod error;
mod fmt;
mod query;
mod source;
mod template;

pub use builder::UriBuilder;
pub use error::Error;
pub use fluent_uri::{self, Uri};
pub use template::{Placeholders, Template};

#[cfg(feature = "std")]
extern crate std;

extern crate alloc;
