use metrics::{Unit, counter, describe_counter};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};

use crate::types::Fill;

pub const ORDERS_TOTAL: &str = "crossbook_orders_total";
pub const ORDERS_REJECTED_TOTAL: &str = "crossbook_orders_rejected_total";
pub const FILLS_TOTAL: &str = "crossbook_fills_total";
pub const TRADED_QUANTITY_TOTAL: &str = "crossbook_traded_quantity_total";
pub const REPORT_LINES_TOTAL: &str = "crossbook_report_lines_total";

pub fn install_recorder() -> anyhow::Result<PrometheusHandle> {
    let builder = PrometheusBuilder::new();
    let handle = builder.install_recorder()?;
    describe();
    Ok(handle)
}

fn describe() {
    describe_counter!(ORDERS_TOTAL, Unit::Count, "Orders accepted by the engine");
    describe_counter!(ORDERS_REJECTED_TOTAL, Unit::Count, "Orders rejected for an unknown side");
    describe_counter!(FILLS_TOTAL, Unit::Count, "Executions against resting orders");
    describe_counter!(TRADED_QUANTITY_TOTAL, Unit::Count, "Quantity exchanged across all fills");
    describe_counter!(REPORT_LINES_TOTAL, Unit::Count, "Settlement lines appended to the report");
}

pub(crate) fn record_execution(fills: &[Fill], reported: bool) {
    counter!(ORDERS_TOTAL).increment(1);
    if !fills.is_empty() {
        counter!(FILLS_TOTAL).increment(fills.len() as u64);
        counter!(TRADED_QUANTITY_TOTAL).increment(fills.iter().map(|f| f.quantity).sum());
    }
    if reported {
        counter!(REPORT_LINES_TOTAL).increment(1);
    }
}

pub(crate) fn record_rejected() {
    counter!(ORDERS_REJECTED_TOTAL).increment(1);
}
