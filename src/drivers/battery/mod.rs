use nrf52832_hal::gpio::{Pin, Input, Floating};
use nrf52832_hal::prelude::InputPin;
use nrf52832_hal::saadc::Saadc;
use nrf52832_hal::prelude::_embedded_hal_adc_OneShot;
use nrf52832_hal::gpio::p0::P0_31;

use watchface::services::{percent_from_millivolts, BatteryChargeState};

pub struct Battery {
    // High = Discharging, Low = Charging
    charging_state_pin: Pin<Input<Floating>>,

    // Voltage, halved by a divider
    voltage_pin: P0_31<Input<Floating>>,

    // SAADC (Analog-to-Digital Converter)
    saadc: Saadc,

    state: BatteryChargeState,
}

impl Battery {
    pub fn new(
        charging_state_pin: Pin<Input<Floating>>,
        voltage_pin: P0_31<Input<Floating>>,
        saadc: Saadc,
    ) -> Battery {
        Battery {
            charging_state_pin,
            voltage_pin,
            saadc,
            state: BatteryChargeState::default(),
        }
    }

    /// Battery voltage in millivolts, `None` if the conversion failed.
    fn millivolts(&mut self) -> Option<u16> {
        let raw = self.saadc.read(&mut self.voltage_pin).ok()?;

        // 14 bit conversion, 3.6 V full scale (0.6 V reference, gain 1/6),
        // times two for the divider
        let millivolts = (raw.max(0) as u32) * 3600 * 2 / (1 << 14);
        Some(millivolts as u16)
    }

    /// Sample the gauge. Keeps the previous charge if the ADC fails.
    pub fn get_state(&mut self) -> BatteryChargeState {
        if let Some(millivolts) = self.millivolts() {
            self.state.charge_percent = percent_from_millivolts(millivolts);
        } else {
            log::warn!("battery voltage conversion failed");
        }

        if let Ok(high) = self.charging_state_pin.is_high() {
            self.state.is_charging = !high;
        }

        self.state
    }
}
