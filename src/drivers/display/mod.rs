use nrf52832_hal::prelude::OutputPin;
use nrf52832_hal::prelude::_embedded_hal_blocking_spi_Write as Write;
use nrf52832_hal::prelude::_embedded_hal_blocking_delay_DelayMs as DelayMs;
use nrf52832_hal::prelude::_embedded_hal_blocking_delay_DelayUs as DelayUs;
use nrf52832_hal::gpio::{Pin, Output, PushPull};
use nrf52832_hal::spim::{self, Spim};
use nrf52832_hal::pac::SPIM0;
use nrf52832_hal::delay::Delay;

use commands::{DisplayCommand, RGBPixelFormat, ControlPixelFormat};

mod commands;
mod graphics;

/// Pixels buffered per SPI transfer.
const CHUNK_PIXELS: usize = 64;

/// ST7789 panel on SPIM0, 240x240, RGB565.
pub struct Display {
    pin_backlight_low: Pin<Output<PushPull>>,   // Set backlight brightness (3 bits)
    pin_backlight_mid: Pin<Output<PushPull>>,
    pin_backlight_high: Pin<Output<PushPull>>,

    pin_reset: Pin<Output<PushPull>>,           // Low (10 µs) = reset, high = running

    pin_command_data: Pin<Output<PushPull>>,    // Low = command, High = data
    pin_chip_select: Pin<Output<PushPull>>,     // Low = enabled, High = disabled

    spi: Spim<SPIM0>,   // Serial interface (has no read!)
    delay: Delay,       // Delay source
}

impl Display {
    pub fn new(
        pin_backlight_low: Pin<Output<PushPull>>,
        pin_backlight_mid: Pin<Output<PushPull>>,
        pin_backlight_high: Pin<Output<PushPull>>,

        pin_command_data: Pin<Output<PushPull>>,
        pin_chip_select: Pin<Output<PushPull>>,
        pin_reset: Pin<Output<PushPull>>,
        spi: Spim<SPIM0>,
        delay: Delay,
    ) -> Display {
        Display {
            pin_backlight_low,
            pin_backlight_mid,
            pin_backlight_high,

            pin_reset,

            pin_command_data,
            pin_chip_select,

            spi,
            delay,
        }
    }

    pub fn init(&mut self) -> Result<(), spim::Error> {
        self.hard_reset();

        self.send(DisplayCommand::SoftwareReset)?;
        self.delay.delay_ms(120u8);

        self.send(DisplayCommand::SleepOut)?;
        self.delay.delay_ms(5u8);

        self.send(DisplayCommand::InterfacePixelFormat(
            RGBPixelFormat::Format65K,
            ControlPixelFormat::Format16bpp,
        ))?;
        self.send(DisplayCommand::MemoryDataAccessControl(0b00000000))?;

        // The panel is wired inverted
        self.send(DisplayCommand::InvertOn)?;
        self.send(DisplayCommand::NormalModeOn)?;
        self.send(DisplayCommand::DisplayOn)?;

        self.set_brightness(0b111);
        log::info!("display initialised");
        Ok(())
    }

    /// Backlight level, 0 (off) to 7. The pins are active low.
    pub fn set_brightness(&mut self, value: u8) {
        let pins = [
            (&mut self.pin_backlight_low, 0b001),
            (&mut self.pin_backlight_mid, 0b010),
            (&mut self.pin_backlight_high, 0b100),
        ];
        for (pin, bit) in pins {
            if value & bit != 0 {
                pin.set_low().ok();
            } else {
                pin.set_high().ok();
            }
        }
    }

    fn hard_reset(&mut self) {
        self.pin_reset.set_low().ok();
        self.delay.delay_us(10u8);
        self.pin_reset.set_high().ok();
    }

    fn send(&mut self, command: DisplayCommand) -> Result<(), spim::Error> {
        self.pin_chip_select.set_low().ok();
        let result = self.send_no_cs(command);
        self.pin_chip_select.set_high().ok();
        result
    }

    // Send without changing Chip Select, so pixel data can follow MemoryWrite
    fn send_no_cs(&mut self, command: DisplayCommand) -> Result<(), spim::Error> {
        self.pin_command_data.set_low().ok();
        self.write(&[command.opcode()])?;

        let parameters = command.parameters();
        if !parameters.as_slice().is_empty() {
            self.pin_command_data.set_high().ok();
            self.write(parameters.as_slice())?;
        }
        Ok(())
    }

    fn write(&mut self, bytes: &[u8]) -> Result<(), spim::Error> {
        <Spim<SPIM0> as Write<u8>>::write(&mut self.spi, bytes)
    }

    /// Restrict the following memory write to a window, bounds inclusive.
    fn select_area(
        &mut self,
        start_row: u16,
        start_col: u16,
        end_row: u16,
        end_col: u16,
    ) -> Result<(), spim::Error> {
        self.send(DisplayCommand::ColumnAddressSet(start_col, end_col))?;
        self.send(DisplayCommand::RowAddressSet(start_row, end_row))
    }

    /// Stream RGB565 words into the selected area.
    fn write_pixels<I>(&mut self, pixels: I) -> Result<(), spim::Error>
    where
        I: IntoIterator<Item = u16>,
    {
        self.pin_chip_select.set_low().ok();
        let result = self.write_pixels_no_cs(pixels);
        self.pin_chip_select.set_high().ok();
        result
    }

    fn write_pixels_no_cs<I>(&mut self, pixels: I) -> Result<(), spim::Error>
    where
        I: IntoIterator<Item = u16>,
    {
        self.send_no_cs(DisplayCommand::MemoryWrite)?;
        self.pin_command_data.set_high().ok();

        let mut buffer = [0u8; CHUNK_PIXELS * 2];
        let mut len = 0;
        for pixel in pixels {
            buffer[len..len + 2].copy_from_slice(&pixel.to_be_bytes());
            len += 2;
            if len == buffer.len() {
                self.write(&buffer)?;
                len = 0;
            }
        }
        if len > 0 {
            self.write(&buffer[..len])?;
        }
        Ok(())
    }
}
