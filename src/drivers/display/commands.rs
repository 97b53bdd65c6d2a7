//! ST7789 command set, as far as the watchface needs it.

#[derive(Debug, Clone, Copy)]
#[repr(u8)]
pub enum RGBPixelFormat {
    Format65K = 0b101,      // 65K RGB Interface (used in RGB565)
}

#[derive(Debug, Clone, Copy)]
#[repr(u8)]
pub enum ControlPixelFormat {
    Format16bpp = 0b101,    // Used in RGB565
}

#[derive(Debug, Clone, Copy)]
pub enum DisplayCommand {
    SoftwareReset,              // Soft-reset the system
    SleepOut,                   // Disable sleep mode
    NormalModeOn,               // Enable normal mode
    InvertOn,                   // Invert display on
    DisplayOn,                  // Power on display
    ColumnAddressSet(u16, u16), // Select column range (begin, end), inclusive
    RowAddressSet(u16, u16),    // Select row range (begin, end), inclusive
    MemoryWrite,                // Following data bytes go to display ram
    MemoryDataAccessControl(u8),// Control how memory is written/read
    InterfacePixelFormat(       // Set the format of the RGB data interface
        RGBPixelFormat,
        ControlPixelFormat
    ),
}

/// Parameter bytes following a command opcode.
pub struct Parameters {
    bytes: [u8; 4],
    len: usize,
}

impl Parameters {
    fn none() -> Self {
        Parameters { bytes: [0; 4], len: 0 }
    }

    fn one(b: u8) -> Self {
        Parameters { bytes: [b, 0, 0, 0], len: 1 }
    }

    fn range(start: u16, end: u16) -> Self {
        let [s_hi, s_lo] = start.to_be_bytes();
        let [e_hi, e_lo] = end.to_be_bytes();
        Parameters { bytes: [s_hi, s_lo, e_hi, e_lo], len: 4 }
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.bytes[..self.len]
    }
}

impl DisplayCommand {
    pub fn opcode(&self) -> u8 {
        match self {
            DisplayCommand::SoftwareReset => 0x01,
            DisplayCommand::SleepOut => 0x11,
            DisplayCommand::NormalModeOn => 0x13,
            DisplayCommand::InvertOn => 0x21,
            DisplayCommand::DisplayOn => 0x29,
            DisplayCommand::ColumnAddressSet(..) => 0x2a,
            DisplayCommand::RowAddressSet(..) => 0x2b,
            DisplayCommand::MemoryWrite => 0x2c,
            DisplayCommand::MemoryDataAccessControl(_) => 0x36,
            DisplayCommand::InterfacePixelFormat(..) => 0x3a,
        }
    }

    pub fn parameters(&self) -> Parameters {
        match *self {
            DisplayCommand::ColumnAddressSet(s, e) | DisplayCommand::RowAddressSet(s, e) => {
                Parameters::range(s, e)
            }
            DisplayCommand::MemoryDataAccessControl(c) => Parameters::one(c),
            DisplayCommand::InterfacePixelFormat(r, c) => Parameters::one((r as u8) << 4 | (c as u8)),
            _ => Parameters::none(),
        }
    }
}
