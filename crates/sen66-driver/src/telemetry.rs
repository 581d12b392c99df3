//! Metric names recorded by the driver.
//!
//! Every counter carries a `command` label with the catalog name of the
//! command. Call [`describe_metrics`] once at startup if a recorder is
//! installed; without a recorder the counters are no-ops.

use metrics::{describe_counter, Unit};

/// Opcodes written to the bus.
pub const COMMANDS_SENT: &str = "sen66.commands.sent";
/// Bus writes or reads that failed.
pub const TRANSPORT_ERRORS: &str = "sen66.transport.errors";
/// Responses rejected by a CRC-8 mismatch.
pub const CHECKSUM_FAILURES: &str = "sen66.checksum.failures";
/// Responses that validated and updated the snapshot.
pub const READS_VALIDATED: &str = "sen66.reads.validated";

/// Register descriptions for all driver metrics.
pub fn describe_metrics() {
    describe_counter!(COMMANDS_SENT, Unit::Count, "SEN66 commands written to the bus");
    describe_counter!(TRANSPORT_ERRORS, Unit::Count, "SEN66 I2C transfers that failed");
    describe_counter!(CHECKSUM_FAILURES, Unit::Count, "SEN66 responses rejected by CRC-8");
    describe_counter!(READS_VALIDATED, Unit::Count, "SEN66 responses accepted into the snapshot");
}

pub(crate) fn increment(name: &'static str, command: &'static str) {
    metrics::counter!(name, "command" => command).increment(1);
}
