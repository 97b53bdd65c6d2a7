use crate::ui::background::Background;

/// State the watchface keeps between events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DeviceState {
    /// Last reported charge, 0 to 100. Trusted as delivered by the gauge.
    pub battery_level: u8,
    /// Chosen when the window loads, never re-evaluated afterwards.
    pub background: Background,
}
