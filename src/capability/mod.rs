//! Capability snapshot provider.
//!
//! Gathers a point-in-time picture of host hardware capacity (CPU, RAM,
//! GPU/VRAM, free disk) by shelling out to the usual OS utilities. Every
//! probe degrades independently to a zero/unknown value on failure, so a
//! snapshot can always be produced. Snapshots are never cached; callers
//! request a fresh one per view render.

mod snapshot;

pub use snapshot::{collect_snapshot, dir_size_gb, CapabilitySnapshot};
