//! Timing Model.
//!
//! Maps an operation to the number of milliseconds its resource is busy.
//! The mapping is a pure function of the operation and the timing table,
//! which keeps runs over identical inputs deterministic.

use crate::common::Operation;
use crate::config::ResourceTimingTable;

/// A timed resource with its own cycle-time constant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Resource {
    /// Processor, shared by the `start`, `run` and `end` labels.
    Processor,
    /// Hard drive.
    HardDrive,
    /// Keyboard.
    Keyboard,
    /// Monitor.
    Monitor,
    /// Printer.
    Printer,
}

impl Resource {
    /// Resolves an operation name to its resource.
    ///
    /// Matching is exact and case-sensitive. Returns `None` for names that
    /// no timing rule covers.
    pub fn for_name(name: &str) -> Option<Self> {
        match name {
            "start" | "run" | "end" => Some(Resource::Processor),
            "hard drive" => Some(Resource::HardDrive),
            "keyboard" => Some(Resource::Keyboard),
            "monitor" => Some(Resource::Monitor),
            "printer" => Some(Resource::Printer),
            _ => None,
        }
    }
}

/// Simulated duration of an operation in milliseconds.
///
/// `cycle_count * cycle_time` of the matched resource, or zero when the name
/// matches no resource. Saturates instead of overflowing.
pub fn duration_ms(op: &Operation, table: &ResourceTimingTable) -> u64 {
    Resource::for_name(op.name())
        .map(|resource| op.cycle_count().saturating_mul(table.cycle_time(resource)))
        .unwrap_or(0)
}
