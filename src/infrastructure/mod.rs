pub mod throttle;

pub use throttle::{FixedDelayThrottle, Throttle};
