//! Delivery of finished reports to whoever is waiting for them.
//!
//! The orchestrator hands each [`TravelDataReport`] to a [`TravelDataSink`]
//! exactly once. Closures act as callbacks; an unbounded Tokio sender forwards
//! the report to a receiving task.

use tokio::sync::mpsc::UnboundedSender;

use crate::TravelDataReport;

/// Receive one report per completed request cycle.
pub trait TravelDataSink {
    /// Accept a finished report.
    fn deliver(&mut self, report: TravelDataReport);
}

impl<F> TravelDataSink for F
where
    F: FnMut(TravelDataReport),
{
    fn deliver(&mut self, report: TravelDataReport) {
        self(report);
    }
}

impl TravelDataSink for UnboundedSender<TravelDataReport> {
    fn deliver(&mut self, report: TravelDataReport) {
        if self.send(report).is_err() {
            log::warn!("travel data receiver closed before the report was delivered");
        }
    }
}
