/// Battery charge as reported by the gauge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BatteryChargeState {
    /// 0 to 100
    pub charge_percent: u8,
    pub is_charging: bool,
}

/// Estimate the remaining capacity of the PineTime cell from its voltage.
///
/// Piecewise linear between 3.45 V (empty), 3.70 V (half) and 4.20 V (full).
pub fn percent_from_millivolts(millivolts: u16) -> u8 {
    let percent = match millivolts {
        0..=3449 => 0,
        3450..=3699 => (millivolts - 3450) / 5,
        3700..=4199 => 50 + (millivolts - 3700) / 10,
        _ => 100,
    };
    percent as u8
}

/// Reports battery state changes.
#[derive(Debug, Default)]
pub struct BatteryStateService {
    last: Option<BatteryChargeState>,
}

impl BatteryStateService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed a fresh reading, returns it when it differs from the previous one.
    pub fn poll(&mut self, state: BatteryChargeState) -> Option<BatteryChargeState> {
        if self.last == Some(state) {
            return None;
        }

        log::debug!(
            "battery {}% ({})",
            state.charge_percent,
            if state.is_charging { "charging" } else { "discharging" }
        );
        self.last = Some(state);
        Some(state)
    }

    pub fn peek(&self) -> Option<BatteryChargeState> {
        self.last
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn charge(percent: u8) -> BatteryChargeState {
        BatteryChargeState {
            charge_percent: percent,
            is_charging: false,
        }
    }

    #[test]
    fn voltage_curve() {
        assert_eq!(percent_from_millivolts(3000), 0);
        assert_eq!(percent_from_millivolts(3449), 0);
        assert_eq!(percent_from_millivolts(3450), 0);
        assert_eq!(percent_from_millivolts(3575), 25);
        assert_eq!(percent_from_millivolts(3700), 50);
        assert_eq!(percent_from_millivolts(3950), 75);
        assert_eq!(percent_from_millivolts(4199), 99);
        assert_eq!(percent_from_millivolts(4200), 100);
        assert_eq!(percent_from_millivolts(u16::MAX), 100);
    }

    #[test]
    fn voltage_curve_is_monotonic() {
        let mut previous = 0;
        for millivolts in (3000..4400).step_by(7) {
            let percent = percent_from_millivolts(millivolts);
            assert!(percent >= previous);
            assert!(percent <= 100);
            previous = percent;
        }
    }

    #[test]
    fn reports_only_changes() {
        let mut service = BatteryStateService::new();
        assert_eq!(service.peek(), None);

        assert_eq!(service.poll(charge(80)), Some(charge(80)));
        assert_eq!(service.poll(charge(80)), None);
        assert_eq!(service.poll(charge(79)), Some(charge(79)));
        assert_eq!(service.peek(), Some(charge(79)));

        let plugged = BatteryChargeState {
            charge_percent: 79,
            is_charging: true,
        };
        assert_eq!(service.poll(plugged), Some(plugged));
    }
}
