use std::time::Duration;

/// Byte-level access to the single-wire bus the battery sits on.
///
/// Bit timing, reset pulses and presence detection belong to the implementor.
/// The driver only sequences whole bytes and the delays between them.
pub trait BusTransport {
    /// Issue a reset pulse. Returns whether a presence pulse was seen.
    fn reset(&mut self) -> anyhow::Result<bool>;

    fn write_byte(&mut self, value: u8) -> anyhow::Result<()>;

    fn read_byte(&mut self) -> anyhow::Result<u8>;

    /// Block for `duration`.
    ///
    /// Simulators and test doubles can override this to skip or scale the wait.
    fn delay(&mut self, duration: Duration) {
        std::thread::sleep(duration);
    }
}

/// The line that powers the bus transceiver. Both calls must be idempotent.
pub trait PowerGate {
    fn assert(&mut self);

    fn deassert(&mut self);
}

impl<T: BusTransport + ?Sized> BusTransport for &mut T {
    fn reset(&mut self) -> anyhow::Result<bool> {
        (**self).reset()
    }

    fn write_byte(&mut self, value: u8) -> anyhow::Result<()> {
        (**self).write_byte(value)
    }

    fn read_byte(&mut self) -> anyhow::Result<u8> {
        (**self).read_byte()
    }

    fn delay(&mut self, duration: Duration) {
        (**self).delay(duration)
    }
}

impl<T: PowerGate + ?Sized> PowerGate for &mut T {
    fn assert(&mut self) {
        (**self).assert()
    }

    fn deassert(&mut self) {
        (**self).deassert()
    }
}
