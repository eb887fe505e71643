//! Path templates with `{name}` placeholders.

use alloc::{collections::BTreeMap, string::String};
use core::iter::FusedIterator;
use ref_cast::{ref_cast_custom, RefCastCustom};

/// A path template, i.e., a path fragment that may contain `{name}` placeholders.
///
/// Placeholders are plain text: a `{`, a name containing neither `{` nor `}`,
/// and a `}`. There is no escaping and no nesting. A `{` that is never closed
/// is ordinary text.
///
/// # Examples
///
/// ```
/// use fluent_uri_builder::Template;
/// use std::collections::BTreeMap;
///
/// let template = Template::new("/users/{id}/posts/{post}").unwrap();
/// assert!(template.placeholders().eq(["id", "post"]));
///
/// let mut bindings = BTreeMap::new();
/// bindings.insert("id".to_owned(), "42".to_owned());
/// assert_eq!(template.substitute(&bindings), "/users/42/posts/{post}");
///
/// assert!(Template::new("").is_none());
/// ```
#[derive(RefCastCustom)]
#[repr(transparent)]
pub struct Template {
    inner: str,
}

impl Template {
    #[ref_cast_custom]
    #[inline]
    pub(crate) const fn new_validated(s: &str) -> &Template;

    /// Converts a string slice to `&Template`, returning `None` if it is empty.
    #[inline]
    #[must_use]
    pub const fn new(s: &str) -> Option<&Template> {
        if s.is_empty() {
            None
        } else {
            Some(Template::new_validated(s))
        }
    }

    /// Returns the template as a string slice.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.inner
    }

    /// Returns an iterator over the names of the placeholders in the template,
    /// from left to right, duplicates included.
    #[inline]
    pub fn placeholders(&self) -> Placeholders<'_> {
        Placeholders { rest: &self.inner }
    }

    /// Replaces every placeholder that has a binding with the bound value.
    ///
    /// The template is scanned once from left to right; substituted values
    /// are never scanned again, so a value containing `{other}` is kept as is.
    /// Placeholders without a binding are left untouched.
    #[must_use]
    pub fn substitute(&self, bindings: &BTreeMap<String, String>) -> String {
        let mut out = String::with_capacity(self.inner.len());
        let mut rest = &self.inner;

        while let Some((start, end)) = find_placeholder(rest) {
            out.push_str(&rest[..start]);
            match bindings.get(&rest[start + 1..end - 1]) {
                Some(value) => out.push_str(value),
                None => out.push_str(&rest[start..end]),
            }
            rest = &rest[end..];
        }
        out.push_str(rest);
        out
    }

    /// Appends the template to a path, joining the two with exactly one `'/'`
    /// when neither side provides it.
    pub(crate) fn append_to(&self, path: &mut String) {
        if !path.ends_with('/') && !self.inner.starts_with('/') {
            path.push('/');
        }
        path.push_str(&self.inner);
    }
}

/// Returns the byte range of the first `{name}` token in `s`, braces included.
fn find_placeholder(s: &str) -> Option<(usize, usize)> {
    let mut from = 0;
    loop {
        let open = from + s[from..].find('{')?;
        let next = open + 1 + s[open + 1..].find(['{', '}'])?;
        if s.as_bytes()[next] == b'}' {
            return Some((open, next + 1));
        }
        // Another `{` before any `}`: the earlier one is plain text.
        from = next;
    }
}

/// An iterator over the placeholder names of a [`Template`].
///
/// This struct is created by [`Template::placeholders`].
#[derive(Clone, Debug)]
pub struct Placeholders<'a> {
    rest: &'a str,
}

impl<'a> Iterator for Placeholders<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        let Some((start, end)) = find_placeholder(self.rest) else {
            self.rest = "";
            return None;
        };
        let name = &self.rest[start + 1..end - 1];
        self.rest = &self.rest[end..];
        Some(name)
    }
}

impl FusedIterator for Placeholders<'_> {}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::{borrow::ToOwned, vec::Vec};

    fn bindings(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|&(k, v)| (k.to_owned(), v.to_owned()))
            .collect()
    }

    fn names(s: &str) -> Vec<&str> {
        Template::new_validated(s).placeholders().collect()
    }

    #[test]
    fn placeholder_scan() {
        assert_eq!(names("/a/{b}/c/{d}"), ["b", "d"]);
        assert_eq!(names("{x}{x}"), ["x", "x"]);
        assert_eq!(names("/{}"), [""]);
        assert_eq!(names("/{open"), Vec::<&str>::new());
        assert_eq!(names("/{a{b}"), ["b"]);
        assert_eq!(names("/}a{"), Vec::<&str>::new());
        assert_eq!(names("/plain/path"), Vec::<&str>::new());
    }

    #[test]
    fn substitute() {
        let t = Template::new_validated("/{seg1}/{newseg}/someseg");
        assert_eq!(
            t.substitute(&bindings(&[("seg1", "segone"), ("newseg", "test")])),
            "/segone/test/someseg"
        );
        assert_eq!(
            t.substitute(&bindings(&[("seg1", "segone")])),
            "/segone/{newseg}/someseg"
        );
        assert_eq!(
            t.substitute(&bindings(&[("unused", "x")])),
            "/{seg1}/{newseg}/someseg"
        );

        let t = Template::new_validated("/{a}-{a}");
        assert_eq!(t.substitute(&bindings(&[("a", "1")])), "/1-1");
    }

    #[test]
    fn substitute_does_not_rescan() {
        let t = Template::new_validated("/{a}/{b}");
        assert_eq!(
            t.substitute(&bindings(&[("a", "{b}"), ("b", "x")])),
            "/{b}/x"
        );
    }

    #[test]
    fn append() {
        let mut path = String::new();
        Template::new_validated("{x}/y").append_to(&mut path);
        assert_eq!(path, "/{x}/y");

        let mut path = "/a/".to_owned();
        Template::new_validated("b").append_to(&mut path);
        assert_eq!(path, "/a/b");

        let mut path = "/a".to_owned();
        Template::new_validated("/b").append_to(&mut path);
        assert_eq!(path, "/a/b");

        // Only the join point is looked at.
        let mut path = "/a/".to_owned();
        Template::new_validated("/b").append_to(&mut path);
        assert_eq!(path, "/a//b");
    }
}
