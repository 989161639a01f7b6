use std::io::Write;

use parking_lot::Mutex;

use crate::metrics::snapshot::FillerMetricsSnapshot;
use crate::metrics::traits::MetricsExporter;

/// Prometheus text exporter for filler metrics snapshots.
///
/// This exporter writes in the Prometheus text exposition format so it can be
/// scraped by Prometheus or forwarded to an OpenTelemetry collector.
#[derive(Debug)]
pub struct PrometheusTextExporter<W: Write + Send> {
    prefix: String,
    writer: Mutex<W>,
}

impl<W: Write + Send> PrometheusTextExporter<W> {
    pub fn new(prefix: impl Into<String>, writer: W) -> Self {
        Self {
            prefix: prefix.into(),
            writer: Mutex::new(writer),
        }
    }

    /// Consumes the exporter and returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer.into_inner()
    }

    fn write_metric(&self, kind: &str, name: &str, value: u64) {
        let mut writer = self.writer.lock();
        let _ = writeln!(writer, "# TYPE {} {}", name, kind);
        let _ = writeln!(writer, "{} {}", name, value);
    }

    fn write_counter(&self, name: &str, value: u64) {
        self.write_metric("counter", name, value);
    }

    fn write_gauge(&self, name: &str, value: u64) {
        self.write_metric("gauge", name, value);
    }

    fn metric_name(&self, suffix: &str) -> String {
        if self.prefix.is_empty() {
            suffix.to_string()
        } else {
            format!("{}_{}", self.prefix, suffix)
        }
    }
}

impl<W: Write + Send> MetricsExporter<FillerMetricsSnapshot> for PrometheusTextExporter<W> {
    fn export(&self, snapshot: &FillerMetricsSnapshot) {
        self.write_counter(
            &self.metric_name("find_next_calls_total"),
            snapshot.find_next_calls,
        );
        self.write_counter(
            &self.metric_name("items_yielded_total"),
            snapshot.items_yielded,
        );
        self.write_counter(
            &self.metric_name("exhausted_calls_total"),
            snapshot.exhausted_calls,
        );
        self.write_counter(&self.metric_name("queue_probes_total"), snapshot.queue_probes);
        self.write_counter(&self.metric_name("slots_filled_total"), snapshot.slots_filled);
        self.write_counter(
            &self.metric_name("slots_skipped_total"),
            snapshot.slots_skipped,
        );
        self.write_counter(
            &self.metric_name("slots_starved_total"),
            snapshot.slots_starved,
        );
        self.write_gauge(
            &self.metric_name("remaining_items"),
            snapshot.remaining_items as u64,
        );
        self.write_gauge(&self.metric_name("queue_count"), snapshot.queue_count as u64);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exporter_writes_prefixed_prometheus_text() {
        let exporter = PrometheusTextExporter::new("feed", Vec::new());
        let snapshot = FillerMetricsSnapshot {
            find_next_calls: 4,
            items_yielded: 3,
            remaining_items: 2,
            queue_count: 2,
            ..Default::default()
        };
        exporter.export(&snapshot);

        let text = String::from_utf8(exporter.into_inner()).unwrap();
        assert!(text.contains("# TYPE feed_find_next_calls_total counter"));
        assert!(text.contains("feed_find_next_calls_total 4"));
        assert!(text.contains("feed_items_yielded_total 3"));
        assert!(text.contains("# TYPE feed_remaining_items gauge"));
        assert!(text.contains("feed_queue_count 2"));
    }

    #[test]
    fn exporter_without_prefix_uses_bare_names() {
        let exporter = PrometheusTextExporter::new("", Vec::new());
        exporter.export(&FillerMetricsSnapshot::default());
        let text = String::from_utf8(exporter.into_inner()).unwrap();
        assert!(text.contains("\nqueue_probes_total 0\n"));
    }
}
