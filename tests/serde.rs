use fluent_uri_builder::UriBuilder;

#[test]
fn deserialize() {
    let mut b: UriBuilder = serde_json::from_str(r#""http://host:1234/{id}?a=1""#).unwrap();
    b.with_segment("id", "42");
    let uri = b.build().unwrap();
    assert_eq!(uri, "http://host:1234/42?a=1");

    assert_eq!(
        serde_json::to_string(&uri).unwrap(),
        r#""http://host:1234/42?a=1""#
    );

    assert!(serde_json::from_str::<UriBuilder>(r#""mailto:a@b""#).is_err());
    assert!(serde_json::from_str::<UriBuilder>("42").is_err());
}

#[test]
fn deserialize_in_config() {
    #[derive(serde::Deserialize)]
    struct Endpoints {
        api: UriBuilder,
    }

    let cfg: Endpoints =
        serde_json::from_str(r#"{ "api": "https://api.example.com/v1/{resource}" }"#).unwrap();
    let mut api = cfg.api;
    api.with_segment("resource", "users")
        .add_query("limit", "10")
        .unwrap();
    assert_eq!(
        api.build().unwrap(),
        "https://api.example.com/v1/users?limit=10"
    );
}
