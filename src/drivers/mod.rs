pub mod battery;
pub mod clock;
pub mod display;
pub mod timer;
