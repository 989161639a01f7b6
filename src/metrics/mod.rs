pub mod exporter;
pub mod metrics_impl;
pub mod snapshot;
pub mod traits;

pub use exporter::PrometheusTextExporter;
pub use metrics_impl::FillerMetrics;
pub use snapshot::FillerMetricsSnapshot;
pub use traits::{
    FillerMetricsRecorder, GapMetricsRecorder, MetricsExporter, MetricsReset,
    MetricsSnapshotProvider,
};
