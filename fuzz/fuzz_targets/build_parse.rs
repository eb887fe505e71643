#![no_main]
use fluent_uri_builder::{Uri, UriBuilder};
use libfuzzer_sys::{
    arbitrary::{self, *},
    fuzz_target,
};

#[derive(Arbitrary, Debug)]
enum Op<'a> {
    Scheme(&'a str),
    Host(&'a str),
    Port(Option<u16>),
    Path(&'a str),
    Template(&'a str),
    Segment(&'a str, &'a str),
    Query(&'a str, &'a str),
    Fragment(Option<&'a str>),
    ClearQuery,
}

#[derive(Arbitrary, Debug)]
struct Input<'a> {
    base: &'a str,
    ops: Vec<Op<'a>>,
}

fn apply(b: &mut UriBuilder, op: &Op<'_>) {
    // Rejected arguments must leave the builder as it was.
    let before = b.clone();
    let res = match *op {
        Op::Scheme(s) => b.with_scheme(s).map(drop),
        Op::Host(s) => b.with_host(s).map(drop),
        Op::Port(Some(p)) => Ok(drop(b.with_port(p))),
        Op::Port(None) => Ok(drop(b.clear_port())),
        Op::Path(s) => b.with_path(s).map(drop),
        Op::Template(s) => b.add_path_template(s).map(drop),
        Op::Segment(k, v) => Ok(drop(b.with_segment(k, v))),
        Op::Query(k, v) => b.add_query(k, v).map(drop),
        Op::Fragment(Some(s)) => b.with_fragment(s).map(drop),
        Op::Fragment(None) => Ok(drop(b.clear_fragment())),
        Op::ClearQuery => Ok(drop(b.clear_query())),
    };
    if res.is_err() {
        assert_eq!(format!("{b:?}"), format!("{before:?}"));
    }
}

fuzz_target!(|input: Input<'_>| {
    let Ok(mut b) = UriBuilder::parse(input.base) else {
        return;
    };
    for op in &input.ops {
        apply(&mut b, op);
    }

    let u1 = b.build().unwrap();
    assert_eq!(u1.scheme().as_str(), b.scheme());
    assert_eq!(u1.authority().unwrap().port_to_u16().unwrap(), b.port());
    assert_eq!(
        u1.fragment()
            .map(|s| s.decode().into_string_lossy().into_owned())
            .as_deref(),
        b.fragment()
    );

    let u2 = Uri::parse(u1.as_str()).unwrap();
    assert_eq!(u1.as_str(), u2.as_str());

    // Taking a built URI apart and building it again is the identity.
    let u3 = UriBuilder::from_uri(&u1).unwrap().build().unwrap();
    assert_eq!(u1, u3);
});
