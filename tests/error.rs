use fluent_uri_builder::{error::Argument, Error, UriBuilder};
use std::error::Error as _;

#[test]
fn argument_messages() {
    let mut b = UriBuilder::parse("http://host").unwrap();

    let e = b.with_scheme("").unwrap_err();
    assert_eq!(e.to_string(), "scheme must not be empty");

    let e = b.with_scheme("-x").unwrap_err();
    assert_eq!(e.to_string(), "scheme is malformed");

    let e = b.add_path_template("").unwrap_err();
    assert_eq!(e.to_string(), "path template must not be empty");

    let e = b.add_query("k", "").unwrap_err();
    assert_eq!(e.to_string(), "query value must not be empty");

    assert_eq!(Argument::QueryKey.to_string(), "query key");
    assert_eq!(Argument::Host.to_string(), "host");
}

#[test]
fn unified_error() {
    fn run(src: &str, fragment: &str) -> Result<String, Error> {
        let mut b = UriBuilder::parse(src)?;
        b.with_fragment(fragment)?;
        Ok(b.build()?.as_str().to_owned())
    }

    assert_eq!(run("http://host", "x").unwrap(), "http://host#x");

    let e = run("http://host", "").unwrap_err();
    assert!(matches!(e, Error::InvalidArgument(_)));
    assert_eq!(e.to_string(), "invalid argument: fragment must not be empty");
    assert!(e.source().is_some());

    let e = run("mailto:a@b", "x").unwrap_err();
    assert!(matches!(e, Error::InvalidUri(_)));
    assert_eq!(e.to_string(), "invalid source URI: authority not present");
    assert!(e.source().unwrap().source().is_none());

    let e = run("no scheme", "x").unwrap_err();
    assert!(e.source().unwrap().source().is_some());
}
