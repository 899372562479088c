use std::time::Duration;

/// Fixed waits the pack needs around bus traffic.
///
/// The defaults are the values the pack firmware is known to tolerate. Every wait is
/// executed through [`BusTransport::delay`](crate::BusTransport::delay).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timing {
    /// Wait after every bus reset before the first byte.
    pub reset_settle: Duration,
    /// Gap before each byte written or read.
    pub inter_byte: Duration,
    /// Wait after the wake byte for the pack to leave its low-power state.
    pub wake_settle: Duration,
    /// Wait after asserting the power gate for the transceiver to stabilise.
    pub power_up: Duration,
}

impl Timing {
    /// No waits at all. Useful with simulated buses.
    pub const fn zero() -> Self {
        Self {
            reset_settle: Duration::ZERO,
            inter_byte: Duration::ZERO,
            wake_settle: Duration::ZERO,
            power_up: Duration::ZERO,
        }
    }
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            reset_settle: Duration::from_micros(400),
            inter_byte: Duration::from_micros(90),
            wake_settle: Duration::from_millis(400),
            power_up: Duration::from_millis(400),
        }
    }
}

#[test]
fn test_default_timing() {
    let timing = Timing::default();
    assert_eq!(timing.reset_settle, Duration::from_micros(400));
    assert_eq!(timing.inter_byte, Duration::from_micros(90));
    assert_eq!(timing.wake_settle, Duration::from_millis(400));
    assert_eq!(timing.power_up, Duration::from_millis(400));
}
