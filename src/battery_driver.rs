use crate::battery_data::BatteryData;
use crate::bus::{BusTransport, PowerGate};
use crate::command::Command;
use crate::error::Error;
use crate::framer::{CommandFramer, RawResponse};
use crate::message::data_message::{self, DataMessage};
use crate::message::info_message::{self, InfoMessage};
use crate::message::model_message::{self, ModelMessage};
use crate::message::test_mode_message;
use crate::timing::Timing;

/// Longest failure message kept by [`BatteryDriver::last_error`], in bytes.
pub const LAST_ERROR_CAPACITY: usize = 63;

/// Keeps the transceiver powered for as long as it lives.
struct PowerSession<'a, G: PowerGate> {
    gate: &'a mut G,
}

impl<'a, G: PowerGate> PowerSession<'a, G> {
    fn open(gate: &'a mut G) -> Self {
        gate.assert();
        log::trace!("power gate asserted");
        Self { gate }
    }
}

impl<G: PowerGate> Drop for PowerSession<'_, G> {
    fn drop(&mut self) {
        self.gate.deassert();
        log::trace!("power gate deasserted");
    }
}

/// Reads and controls a battery pack attached to a single-wire bus.
///
/// Each operation powers the bus transceiver, runs its transactions and powers it down
/// again, whether or not the transactions succeeded. Operations block for their whole
/// duration, which is dominated by the power-up wait.
pub struct BatteryDriver<B, G: PowerGate> {
    framer: CommandFramer<B>,
    gate: G,
    last_error: Option<String>,
}

impl<B: BusTransport, G: PowerGate> BatteryDriver<B, G> {
    pub fn new(bus: B, gate: G) -> Self {
        Self::with_timing(bus, gate, Timing::default())
    }

    /// Create a driver with custom delays. The power gate is driven low immediately.
    pub fn with_timing(bus: B, mut gate: G, timing: Timing) -> Self {
        gate.deassert();
        Self {
            framer: CommandFramer::new(bus, timing),
            gate,
            last_error: None,
        }
    }

    pub fn timing(&self) -> &Timing {
        self.framer.timing()
    }

    /// Message of the most recent failed operation. Successful operations leave it as is.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn into_parts(self) -> (B, G) {
        (self.framer.into_inner(), self.gate)
    }

    /// Read the model name, e.g. `BL1850B`.
    pub fn read_model(&mut self) -> Result<String, Error> {
        let raw = self.session(|framer| {
            transact(framer, &model_message::REQUEST, "Failed to read model")
        })?;
        Ok(ModelMessage::new(raw).model())
    }

    /// Read ROM ID, manufacturing date, charge count, lock and status flags, capacity
    /// and battery type into `data`.
    pub fn read_battery_info(&mut self, data: &mut BatteryData) -> Result<(), Error> {
        let raw = self.session(|framer| {
            transact(framer, &info_message::REQUEST, "Failed to read battery info")
        })?;

        let msg = InfoMessage::new(raw);
        data.rom_id = msg.rom_id_string();
        data.manufacturing_date = msg.manufacturing_date();
        data.charge_count = msg.charge_count();
        data.is_locked = msg.is_locked();
        data.status_code = msg.status_code();
        data.capacity_dah = msg.capacity_dah();
        data.battery_type = msg.battery_type();
        Ok(())
    }

    /// Read pack voltage, cell voltages and temperatures into `data`.
    pub fn read_battery_data(&mut self, data: &mut BatteryData) -> Result<(), Error> {
        let raw = self.session(|framer| {
            transact(framer, &data_message::REQUEST, "Failed to read battery data")
        })?;

        let msg = DataMessage::new(raw);
        data.pack_voltage_mv = msg.pack_voltage_mv();
        data.cell_voltage_mv = msg.cell_voltage_mv();
        data.temperature_cdeg = msg.temperature_cdeg();
        Ok(())
    }

    /// Read everything the pack reports, one power session per request.
    pub fn fetch_state(&mut self) -> Result<BatteryData, Error> {
        let mut data = BatteryData {
            model: self.read_model()?,
            ..Default::default()
        };
        self.read_battery_info(&mut data)?;
        self.read_battery_data(&mut data)?;
        Ok(data)
    }

    pub fn leds_on(&mut self) -> Result<(), Error> {
        self.test_mode(&test_mode_message::LEDS_ON, "Failed to turn LEDs on")
    }

    pub fn leds_off(&mut self) -> Result<(), Error> {
        self.test_mode(&test_mode_message::LEDS_OFF, "Failed to turn LEDs off")
    }

    /// Clear the error flags latched by the pack.
    pub fn clear_errors(&mut self) -> Result<(), Error> {
        self.test_mode(&test_mode_message::RESET_ERRORS, "Failed to clear errors")
    }

    /// Enter test mode and send `command` within the same power session.
    fn test_mode(&mut self, command: &Command, context: &'static str) -> Result<(), Error> {
        self.session(|framer| {
            transact(framer, &test_mode_message::ENTER, "Failed to enter test mode")?;
            transact(framer, command, context)?;
            Ok(())
        })
    }

    /// Run `op` with the transceiver powered, recording any failure.
    fn session<T>(
        &mut self,
        op: impl FnOnce(&mut CommandFramer<B>) -> Result<T, Error>,
    ) -> Result<T, Error> {
        let result = {
            let _power = PowerSession::open(&mut self.gate);
            let power_up = self.framer.timing().power_up;
            self.framer.pause(power_up);
            op(&mut self.framer)
        };

        if let Err(err) = &result {
            self.record(err);
        }
        result
    }

    fn record(&mut self, err: &Error) {
        let Error::Transaction { context, source } = err;
        log::warn!("{context}: {source}");

        let mut message = err.to_string();
        if message.len() > LAST_ERROR_CAPACITY {
            let mut end = LAST_ERROR_CAPACITY;
            while !message.is_char_boundary(end) {
                end -= 1;
            }
            message.truncate(end);
        }
        self.last_error = Some(message);
    }
}

fn transact<B: BusTransport>(
    framer: &mut CommandFramer<B>,
    command: &Command,
    context: &'static str,
) -> Result<RawResponse, Error> {
    framer
        .transact(command)
        .map_err(|source| Error::transaction(context, source))
}
