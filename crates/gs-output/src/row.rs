//! Plain data row types written by output backends.

/// One drone's state at a snapshot tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DroneSnapshotRow {
    pub drone_id: u32,
    pub tick:     u64,
    pub row:      u32,
    pub col:      u32,
    /// Whether the drone's cell holds a site.
    pub on_site:  bool,
    /// Claim count of the drone's cell (drones sharing it, itself included).
    pub claims:   u32,
}

/// Movement statistics for one tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickSummaryRow {
    pub tick:       u64,
    pub rejected:   u32,
    pub direct:     u32,
    pub recruited:  u32,
    pub stranded:   u32,
    pub mean_speed: f64,
}
