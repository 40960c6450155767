pub mod rooms;

pub use rooms::{Deliveries, JoinReport, LeaveReport, PlayReport, RoomRegistry};
