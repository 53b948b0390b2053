#![forbid(unsafe_code)]

//! Diagnostics emitted when a message falls back to unlocalized text.
//!
//! A fallback must surface as exactly one WARN event carrying the rule, the
//! field, the parameter and the failure cause. Successful formatting must stay
//! silent.
//!
//! Run:
//!   cargo test -p valmsg --test fallback_diagnostics

use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, Mutex};

use tracing_subscriber::layer::SubscriberExt;
use valmsg::{FailureRecord, FieldKind, MessageFormatter, TemplateCatalog, ValueKind};

// ============================================================================
// Test Infrastructure
// ============================================================================

#[derive(Debug, Clone)]
struct CapturedEvent {
    level: tracing::Level,
    message: String,
    fields: HashMap<String, String>,
}

/// A tracing Layer that records every event it sees.
struct EventCapture {
    events: Arc<Mutex<Vec<CapturedEvent>>>,
}

struct FieldVisitor(Vec<(String, String)>);

impl tracing::field::Visit for FieldVisitor {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        self.0.push((field.name().to_string(), format!("{value:?}")));
    }

    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        self.0.push((field.name().to_string(), value.to_string()));
    }

    fn record_u64(&mut self, field: &tracing::field::Field, value: u64) {
        self.0.push((field.name().to_string(), value.to_string()));
    }
}

impl<S: tracing::Subscriber> tracing_subscriber::Layer<S> for EventCapture {
    fn on_event(
        &self,
        event: &tracing::Event<'_>,
        _ctx: tracing_subscriber::layer::Context<'_, S>,
    ) {
        let mut visitor = FieldVisitor(Vec::new());
        event.record(&mut visitor);

        let fields: HashMap<String, String> = visitor.0.into_iter().collect();
        let message = fields.get("message").cloned().unwrap_or_default();

        self.events.lock().unwrap().push(CapturedEvent {
            level: *event.metadata().level(),
            message,
            fields,
        });
    }
}

fn with_captured_events<F>(f: F) -> Vec<CapturedEvent>
where
    F: FnOnce(),
{
    let events = Arc::new(Mutex::new(Vec::new()));
    let layer = EventCapture {
        events: events.clone(),
    };
    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::filter::LevelFilter::TRACE)
        .with(layer);
    tracing::subscriber::with_default(subscriber, f);
    events.lock().unwrap().clone()
}

// ============================================================================
// Fallback events
// ============================================================================

#[test]
fn unsupported_kind_emits_one_warning() {
    let catalog = TemplateCatalog::russian();
    let formatter = MessageFormatter::new(&catalog);
    let record = FailureRecord::new("lt", "StartAt", "", ValueKind::Other);

    let mut message = String::new();
    let events = with_captured_events(|| message = formatter.format(&record));

    assert_eq!(message, record.fallback_message());
    assert_eq!(events.len(), 1, "{events:?}");
    let event = &events[0];
    assert_eq!(event.level, tracing::Level::WARN);
    assert_eq!(event.message, "validation message fell back to unlocalized text");
    assert_eq!(event.fields["locale"], "ru");
    assert_eq!(event.fields["rule"], "lt");
    assert_eq!(event.fields["field"], "StartAt");
    assert_eq!(event.fields["param"], "");
    assert_eq!(
        event.fields["error"],
        "unsupported rule/kind combination: 'lt' on other value"
    );
}

#[test]
fn unparseable_parameter_reports_parse_error() {
    let catalog = TemplateCatalog::russian();
    let formatter = MessageFormatter::new(&catalog);
    let record = FailureRecord::new("max", "Title", "ten", FieldKind::Text);

    let events = with_captured_events(|| {
        let _ = formatter.format(&record);
    });

    assert_eq!(events.len(), 1);
    assert_eq!(events[0].fields["param"], "ten");
    assert!(events[0].fields["error"].contains("ten"), "{:?}", events[0]);
}

#[test]
fn unknown_rule_warns_with_rule_name() {
    let catalog = TemplateCatalog::russian();
    let formatter = MessageFormatter::new(&catalog);
    let record = FailureRecord::new("uuid7", "EventID", "", ValueKind::Text);

    let events = with_captured_events(|| {
        let _ = formatter.format(&record);
    });

    assert_eq!(events.len(), 1);
    assert_eq!(events[0].fields["rule"], "uuid7");
    assert!(events[0].fields["error"].contains("uuid7"));
}

#[test]
fn successful_format_is_silent() {
    let catalog = TemplateCatalog::russian();
    let formatter = MessageFormatter::new(&catalog);
    let records = [
        FailureRecord::new("required", "Title", "", ValueKind::Text),
        FailureRecord::new("min", "Title", "5", ValueKind::Text),
        FailureRecord::new("gt", "StartAt", "", ValueKind::Temporal),
    ];

    let events = with_captured_events(|| {
        let _ = formatter.format_all(&records);
    });

    assert!(events.is_empty(), "{events:?}");
}

#[test]
fn try_format_never_logs() {
    let catalog = TemplateCatalog::russian();
    let formatter = MessageFormatter::new(&catalog);
    let record = FailureRecord::new("lt", "StartAt", "", ValueKind::Other);

    let events = with_captured_events(|| {
        assert!(formatter.try_format(&record).is_err());
    });

    assert!(events.is_empty());
}

#[test]
fn format_all_warns_once_per_failing_record() {
    let catalog = TemplateCatalog::russian();
    let formatter = MessageFormatter::new(&catalog);
    let records = [
        FailureRecord::new("min", "Title", "x", ValueKind::Text).with_namespace("A.Title"),
        FailureRecord::new("required", "Page", "", ValueKind::Number),
        FailureRecord::new("len", "EndAt", "", ValueKind::Temporal).with_namespace("A.EndAt"),
    ];

    let mut messages: BTreeMap<String, String> = BTreeMap::new();
    let events = with_captured_events(|| messages = formatter.format_all(&records));

    let rules: Vec<&str> = events.iter().map(|e| e.fields["rule"].as_str()).collect();
    assert_eq!(rules, ["min", "len"]);
    assert_eq!(messages.len(), 3);
    assert_eq!(messages["Page"], "Страница обязательное поле");
}
