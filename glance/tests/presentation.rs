use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use glance::api::{ColorSchemeRequest, PaletteSpec};
use glance::palette::{CATEGORICAL, FALLBACK_COLOR, SEQUENTIAL, categorical_names};
use glance::{
    BuiltinPalettes, ColorMapper, Diagnostic, PaletteError, bin_color, format_duration,
    map_colors, map_colors_with,
};
use serde_json::{Value, json};

#[derive(Clone, Default)]
struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl LogBuffer {
    fn contents(&self) -> String {
        String::from_utf8(self.0.lock().expect("lock log buffer").clone()).expect("utf-8 logs")
    }
}

impl Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0
            .lock()
            .expect("lock log buffer")
            .extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Runs `f` with a thread-local subscriber and returns what it logged.
fn with_captured_logs<T>(f: impl FnOnce() -> T) -> (T, String) {
    let logs = LogBuffer::default();
    let writer = logs.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .with_max_level(tracing::Level::WARN)
        .finish();

    let result = tracing::subscriber::with_default(subscriber, f);
    (result, logs.contents())
}

fn topic_domain(count: usize) -> Vec<String> {
    (1..=count).map(|idx| format!("topic-{idx}")).collect()
}

#[test]
fn every_categorical_palette_covers_its_own_length() {
    for name in categorical_names() {
        let size = CATEGORICAL
            .iter()
            .find(|palette| palette.name == name)
            .map(|palette| palette.colors.len())
            .expect("registered palette");

        let (mapping, logs) = with_captured_logs(|| map_colors(&topic_domain(size), name));
        let mapping = mapping.expect("map colors");
        assert_eq!(mapping.len(), size, "{name}");
        assert!(mapping.diagnostics().is_empty(), "{name}");
        assert!(logs.is_empty(), "{name} logged: {logs}");
    }
}

#[test]
fn accent_with_twelve_topics_pads_four_keys() {
    let domain = topic_domain(12);

    let (mapping, logs) = with_captured_logs(|| map_colors(&domain, "Accent"));
    let mapping = mapping.expect("map colors");

    assert!(logs.contains("WARN"), "{logs}");
    assert!(logs.contains("glance::colorscheme"), "{logs}");
    assert!(logs.contains("not enough colors for all domains"), "{logs}");
    assert!(logs.contains("domain=12"), "{logs}");
    assert!(logs.contains("colors=8"), "{logs}");
    assert!(logs.contains("padded=4"), "{logs}");

    assert_eq!(
        mapping.diagnostics(),
        &[Diagnostic::InsufficientColors {
            domain: 12,
            colors: 8,
            padded: 4,
        }]
    );
    assert_eq!(mapping.get("topic-8"), Some("#666666"));
    for key in ["topic-9", "topic-10", "topic-11", "topic-12"] {
        assert_eq!(mapping.get(key), Some(FALLBACK_COLOR));
    }
}

#[test]
fn greys_with_thirteen_topics_is_exhausted() {
    let err = map_colors(&topic_domain(13), "Greys").expect_err("exhausted");
    assert_eq!(
        err,
        PaletteError::PaletteExhausted {
            domain: 13,
            colors: 6,
        }
    );
}

#[test]
fn inline_and_registry_call_shapes_agree() {
    let domain = topic_domain(3);
    let colors = CATEGORICAL
        .iter()
        .find(|palette| palette.name == "Observable10")
        .map(|palette| palette.colors)
        .expect("registered palette");

    let by_name = map_colors(&domain, "Observable10").expect("by name");
    let inline = map_colors_with(&domain, colors).expect("inline");
    assert_eq!(by_name, inline);

    let mapper = ColorMapper::builtin();
    assert_eq!(mapper.map(&domain, "Observable10").expect("mapper"), by_name);
}

#[test]
fn sequential_lookups_share_the_builtin_registry() {
    let mapper = ColorMapper::new(BuiltinPalettes);
    for palette in SEQUENTIAL {
        for value in [0.0, 0.3, 0.6, 1.0] {
            assert_eq!(mapper.bin(value, palette.name), bin_color(value, palette.name));
        }
    }
}

#[test]
fn request_json_round_trips_through_the_api() {
    let request: ColorSchemeRequest = serde_json::from_value(json!({
        "domain": ["intro", "demo", "qa"],
        "palette": "Tableau10"
    }))
    .expect("parse request");
    assert_eq!(request.palette, PaletteSpec::Named("Tableau10".into()));

    let response = request.resolve(&BuiltinPalettes).expect("resolve request");
    let value: Value = serde_json::to_value(&response).expect("serialize response");

    assert_eq!(
        value,
        json!({"colors": {"intro": "#4e79a7", "demo": "#76b7b2", "qa": "#af7aa1"}})
    );
}

#[test]
fn timeline_labels() {
    let labels: Vec<String> = [0.0, 59.0, 3661.0, 7199.9]
        .into_iter()
        .map(format_duration)
        .collect();

    assert_eq!(labels, ["01:00:00", "01:00:59", "02:01:01", "02:59:59"]);
}
