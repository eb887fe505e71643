use fluent_uri_builder::UriBuilder;
use std::{
    fmt,
    sync::{Arc, Mutex},
};
use tracing::{
    field::{Field, Visit},
    span::{Attributes, Id, Record},
    subscriber::with_default,
    Event, Level, Metadata, Subscriber,
};

#[derive(Clone, Debug)]
struct CapturedEvent {
    level: Level,
    fields: Vec<(String, String)>,
}

impl CapturedEvent {
    fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }
}

#[derive(Clone, Default)]
struct RecordingSubscriber {
    events: Arc<Mutex<Vec<CapturedEvent>>>,
}

impl RecordingSubscriber {
    fn events(&self) -> Vec<CapturedEvent> {
        self.events.lock().unwrap().clone()
    }
}

#[derive(Default)]
struct FieldVisitor {
    fields: Vec<(String, String)>,
}

impl Visit for FieldVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        self.fields
            .push((field.name().to_owned(), format!("{value:?}")));
    }
}

impl Subscriber for RecordingSubscriber {
    fn enabled(&self, _: &Metadata<'_>) -> bool {
        true
    }

    fn new_span(&self, _: &Attributes<'_>) -> Id {
        Id::from_u64(1)
    }

    fn record(&self, _: &Id, _: &Record<'_>) {}

    fn record_follows_from(&self, _: &Id, _: &Id) {}

    fn event(&self, event: &Event<'_>) {
        let mut visitor = FieldVisitor::default();
        event.record(&mut visitor);
        self.events.lock().unwrap().push(CapturedEvent {
            level: *event.metadata().level(),
            fields: visitor.fields,
        });
    }

    fn enter(&self, _: &Id) {}

    fn exit(&self, _: &Id) {}
}

#[test]
fn rejected_argument_is_logged() {
    let collector = RecordingSubscriber::default();
    with_default(collector.clone(), || {
        let mut b = UriBuilder::parse("http://host").unwrap();
        assert!(b.with_path("").is_err());
        assert!(b.with_scheme("1x").is_err());
        assert!(b.with_fragment("ok").is_ok());
    });

    let events = collector.events();
    assert_eq!(events.len(), 2);

    assert_eq!(events[0].level, Level::DEBUG);
    assert_eq!(events[0].field("arg"), Some("Path"));
    assert_eq!(events[0].field("message"), Some("rejected empty argument"));

    assert_eq!(events[1].field("arg"), Some("Scheme"));
    assert_eq!(
        events[1].field("message"),
        Some("rejected malformed argument")
    );
}

#[test]
fn build_is_logged() {
    let collector = RecordingSubscriber::default();
    with_default(collector.clone(), || {
        let mut b = UriBuilder::parse("http://host/{id}").unwrap();
        b.with_segment("id", "7");
        b.build().unwrap();
    });

    let events = collector.events();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].level, Level::TRACE);
    assert_eq!(events[0].field("uri"), Some("http://host/7"));
    assert_eq!(events[0].field("message"), Some("built URI"));
}
