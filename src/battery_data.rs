use std::fmt;

pub use crate::decode::ManufacturingDate;

/// Everything that can be read from a pack.
///
/// Each read fills its own subset of fields. Fields that were never read stay at zero and
/// the report treats zero as absent.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BatteryData {
    /// Model name, e.g. `BL1850B`
    pub model: String,
    /// ROM ID as space separated hex bytes
    pub rom_id: String,
    /// Lifetime number of charges
    pub charge_count: u16,
    pub is_locked: bool,
    pub status_code: u8,
    pub manufacturing_date: ManufacturingDate,
    /// Rated capacity in Ah/10
    pub capacity_dah: u8,
    pub battery_type: u8,
    /// The pack voltage in mV
    pub pack_voltage_mv: u16,
    /// The voltage of each cell in mV
    pub cell_voltage_mv: [u16; 5],
    /// The two thermistor readings in °C/100
    pub temperature_cdeg: [i16; 2],
}

impl BatteryData {
    /// Difference between the highest and lowest cell voltage in mV.
    pub fn cell_voltage_spread_mv(&self) -> u16 {
        let max = self.cell_voltage_mv.iter().max().copied().unwrap_or(0);
        let min = self.cell_voltage_mv.iter().min().copied().unwrap_or(0);
        max - min
    }

    pub fn capacity_ah(&self) -> f32 {
        self.capacity_dah as f32 / 10.0
    }
}

fn volts(mv: u16) -> String {
    format!("{:.3} V", mv as f64 / 1000.0)
}

fn celsius(cdeg: i16) -> String {
    format!("{:.2} °C", cdeg as f64 / 100.0)
}

impl fmt::Display for BatteryData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== Battery Information ===")?;
        if !self.model.is_empty() {
            writeln!(f, "Model: {}", self.model)?;
        }
        if !self.rom_id.is_empty() {
            writeln!(f, "ROM ID: {}", self.rom_id)?;
        }
        if self.charge_count > 0 {
            writeln!(f, "Charge Count: {}", self.charge_count)?;
        }
        let lock = if self.is_locked { "LOCKED" } else { "UNLOCKED" };
        writeln!(f, "Lock Status: {lock}")?;
        if self.status_code > 0 {
            writeln!(f, "Status Code: 0x{:X}", self.status_code)?;
        }
        let date = &self.manufacturing_date;
        if date.is_present() {
            writeln!(
                f,
                "Manufacturing Date: {}/{}/{}",
                date.day,
                date.month,
                date.full_year()
            )?;
        }
        if self.capacity_dah > 0 {
            writeln!(f, "Capacity: {:.1} Ah", self.capacity_ah())?;
        }
        if self.battery_type > 0 {
            writeln!(f, "Battery Type: {}", self.battery_type)?;
        }

        if self.pack_voltage_mv > 0 {
            writeln!(f)?;
            writeln!(f, "=== Voltage Data ===")?;
            writeln!(f, "Pack Voltage: {}", volts(self.pack_voltage_mv))?;
            for (i, mv) in self.cell_voltage_mv.iter().enumerate() {
                writeln!(f, "Cell {}: {}", i + 1, volts(*mv))?;
            }
            writeln!(
                f,
                "Cell Voltage Difference: {}",
                volts(self.cell_voltage_spread_mv())
            )?;
        }

        let [sensor1, sensor2] = self.temperature_cdeg;
        if sensor1 != 0 {
            writeln!(f)?;
            writeln!(f, "=== Temperature Data ===")?;
            writeln!(f, "Temperature Sensor 1: {}", celsius(sensor1))?;
            if sensor2 != 0 {
                writeln!(f, "Temperature Sensor 2: {}", celsius(sensor2))?;
            }
        }

        write!(f, "===========================")
    }
}
