//! Services: offline canned responder.

mod canned;

pub use canned::CannedResponder;
