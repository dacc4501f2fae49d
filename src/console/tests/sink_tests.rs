use crate::console::sink::{BufferSink, Sink};

#[test]
fn buffer_sink_records_lines_in_order() {
    let sink = BufferSink::new();
    sink.write_line("first");
    sink.write_line("second");
    assert_eq!(sink.lines(), vec!["first", "second"]);
}

#[test]
fn buffer_sink_counts_clear_invocations() {
    let sink = BufferSink::new();
    assert_eq!(sink.clear_count(), 0);
    sink.clear_line();
    sink.clear_line();
    assert_eq!(sink.clear_count(), 2);
}

#[test]
fn buffer_sink_reports_configured_columns() {
    assert_eq!(BufferSink::new().columns(), None);
    assert_eq!(BufferSink::with_columns(120).columns(), Some(120));
}

#[test]
fn sink_defaults_are_inert() {
    struct NullSink;
    impl Sink for NullSink {
        fn write_line(&self, _text: &str) {}
    }

    let sink = NullSink;
    sink.clear_line();
    assert_eq!(sink.columns(), None);
}
