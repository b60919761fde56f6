//! Shared test utilities for `mazeworks-core`.

use std::{
    collections::HashMap,
    env, fmt,
    sync::{Arc, Mutex, PoisonError},
};

use proptest::test_runner::Config as ProptestConfig;
use tracing::{
    Event, Level, Subscriber,
    field::{Field, Visit},
    span,
};
use tracing_subscriber::{Layer, layer::Context, registry::LookupSpan};

/// Environment variable overriding the number of proptest cases.
const PROGTEST_CASES_ENV_KEY: &str = "PROGTEST_CASES";

/// Builds a proptest configuration, letting `PROGTEST_CASES` override the
/// suite default so CI can run deeper sweeps than local runs.
#[must_use]
pub(crate) fn suite_proptest_config(default_cases: u32) -> ProptestConfig {
    let cases = env::var(PROGTEST_CASES_ENV_KEY)
        .ok()
        .and_then(|raw| raw.trim().parse::<u32>().ok())
        .filter(|&cases| cases > 0)
        .unwrap_or(default_cases);
    ProptestConfig {
        cases,
        ..ProptestConfig::default()
    }
}

/// Snapshot of an emitted tracing event.
#[derive(Clone, Debug)]
pub(crate) struct EventRecord {
    pub level: Level,
    pub fields: HashMap<String, String>,
}

/// Layer capturing span names and events so tests can assert instrumentation.
#[derive(Clone, Default)]
pub(crate) struct RecordingLayer {
    spans: Arc<Mutex<Vec<String>>>,
    events: Arc<Mutex<Vec<EventRecord>>>,
}

impl RecordingLayer {
    /// Names of the spans opened while the layer was installed.
    pub(crate) fn span_names(&self) -> Vec<String> {
        self.spans
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Events emitted while the layer was installed, in emission order.
    pub(crate) fn events(&self) -> Vec<EventRecord> {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Returns `true` when an event at `level` carried `message`.
    pub(crate) fn has_event(&self, level: Level, message: &str) -> bool {
        self.events().iter().any(|event| {
            event.level == level
                && event
                    .fields
                    .get("message")
                    .is_some_and(|value| value == message)
        })
    }
}

impl<S> Layer<S> for RecordingLayer
where
    S: Subscriber + for<'span> LookupSpan<'span>,
{
    fn on_new_span(&self, attrs: &span::Attributes<'_>, _id: &span::Id, _ctx: Context<'_, S>) {
        self.spans
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(attrs.metadata().name().to_owned());
    }

    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut fields = HashMap::new();
        event.record(&mut FieldRecorder {
            fields: &mut fields,
        });
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(EventRecord {
                level: *event.metadata().level(),
                fields,
            });
    }
}

struct FieldRecorder<'a> {
    fields: &'a mut HashMap<String, String>,
}

impl Visit for FieldRecorder<'_> {
    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        self.fields
            .insert(field.name().to_owned(), format!("{value:?}"));
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        self.fields
            .insert(field.name().to_owned(), value.to_owned());
    }
}
