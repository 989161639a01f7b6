//! Example exporting filler metrics in Prometheus text format.
//!
//! Run with: cargo run --example metrics_export --features metrics

use slotweave::fill::{SequentialFiller, empty_slots, fill_gaps};
use slotweave::metrics::{MetricsExporter, MetricsSnapshotProvider, PrometheusTextExporter};

fn main() {
    let filler = SequentialFiller::from_lists(vec![vec![1u32, 2, 3], vec![10, 20], vec![100]]);

    let mut slots: Vec<Option<u32>> = (0..10).map(|i| (i % 3 == 0).then_some(0)).collect();
    let targets: Vec<usize> = (0..slots.len()).collect();
    fill_gaps(&mut slots, &targets, &filler);
    println!("slots: {slots:?}");
    println!("still empty: {:?}\n", empty_slots(&slots));

    let exporter = PrometheusTextExporter::new("slotweave_filler", Vec::new());
    exporter.export(&filler.snapshot());
    let text = String::from_utf8(exporter.into_inner()).unwrap_or_default();
    print!("{text}");
}
