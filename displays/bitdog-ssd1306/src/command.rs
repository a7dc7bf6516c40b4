//! SSD1306 command set
//!
//! Every command is sent as a sequence of single command bytes, each in its
//! own framed transfer (control byte `0x00`). Arguments of multi-byte
//! commands follow the opcode as further command bytes.

/// Raw opcodes
mod opcode {
    pub const SET_CONTRAST: u8 = 0x81;
    pub const ENTIRE_DISPLAY_RESUME: u8 = 0xA4;
    pub const ENTIRE_DISPLAY_ON: u8 = 0xA5;
    pub const SET_NORMAL: u8 = 0xA6;
    pub const SET_INVERSE: u8 = 0xA7;
    pub const DISPLAY_OFF: u8 = 0xAE;
    pub const DISPLAY_ON: u8 = 0xAF;
    pub const SET_MEMORY_MODE: u8 = 0x20;
    pub const SET_COLUMN_ADDR: u8 = 0x21;
    pub const SET_PAGE_ADDR: u8 = 0x22;
    pub const SET_START_LINE: u8 = 0x40;
    pub const SET_SEG_REMAP: u8 = 0xA0;
    pub const SET_MUX_RATIO: u8 = 0xA8;
    pub const SET_COM_SCAN_INC: u8 = 0xC0;
    pub const SET_COM_SCAN_DEC: u8 = 0xC8;
    pub const SET_DISPLAY_OFFSET: u8 = 0xD3;
    pub const SET_COM_PINS: u8 = 0xDA;
    pub const SET_CLOCK_DIV: u8 = 0xD5;
    pub const SET_PRECHARGE: u8 = 0xD9;
    pub const SET_VCOM_DESELECT: u8 = 0xDB;
    pub const SET_CHARGE_PUMP: u8 = 0x8D;
}

/// Memory addressing mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AddressingMode {
    /// Column pointer advances, wraps to the next page at the column end
    Horizontal = 0x00,
    /// Page pointer advances, wraps to the next column at the page end
    Vertical = 0x01,
    /// Column pointer advances within the current page only
    Page = 0x02,
}

/// SSD1306 controller command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Command {
    /// Contrast level (0-255)
    Contrast(u8),
    /// Light every pixel regardless of RAM (`true`) or follow RAM (`false`)
    EntireDisplayOn(bool),
    /// Inverted polarity (`true`) or normal polarity (`false`)
    Invert(bool),
    /// Panel on or off (sleep)
    DisplayOn(bool),
    /// Memory addressing mode
    AddressingMode(AddressingMode),
    /// Column window for horizontal/vertical addressing (start, end)
    ColumnAddress(u8, u8),
    /// Page window for horizontal/vertical addressing (start, end)
    PageAddress(u8, u8),
    /// Display RAM start line (0-63)
    StartLine(u8),
    /// Map column 127 to SEG0 (`true`) or column 0 to SEG0 (`false`)
    SegmentRemap(bool),
    /// Multiplex ratio, given as the number of active rows minus one
    Multiplex(u8),
    /// Scan COM outputs from COM[N-1] to COM0 (`true`) or upwards (`false`)
    ReverseComScan(bool),
    /// Vertical shift of the display (0-63)
    DisplayOffset(u8),
    /// COM pins hardware configuration byte
    ComPinConfig(u8),
    /// Clock divide ratio and oscillator frequency byte
    ClockDivider(u8),
    /// Pre-charge period byte (phase 2 << 4 | phase 1)
    PreCharge(u8),
    /// VCOMH deselect level byte
    VcomDeselect(u8),
    /// Internal charge pump
    ChargePump(bool),
}

impl Command {
    /// Encode the command into `buf`, returning the used prefix
    pub fn encode<'a>(&self, buf: &'a mut [u8; 3]) -> &'a [u8] {
        let len = match *self {
            Command::Contrast(level) => {
                buf[0] = opcode::SET_CONTRAST;
                buf[1] = level;
                2
            }
            Command::EntireDisplayOn(on) => {
                buf[0] = if on {
                    opcode::ENTIRE_DISPLAY_ON
                } else {
                    opcode::ENTIRE_DISPLAY_RESUME
                };
                1
            }
            Command::Invert(inverted) => {
                buf[0] = if inverted {
                    opcode::SET_INVERSE
                } else {
                    opcode::SET_NORMAL
                };
                1
            }
            Command::DisplayOn(on) => {
                buf[0] = if on {
                    opcode::DISPLAY_ON
                } else {
                    opcode::DISPLAY_OFF
                };
                1
            }
            Command::AddressingMode(mode) => {
                buf[0] = opcode::SET_MEMORY_MODE;
                buf[1] = mode as u8;
                2
            }
            Command::ColumnAddress(start, end) => {
                buf[0] = opcode::SET_COLUMN_ADDR;
                buf[1] = start;
                buf[2] = end;
                3
            }
            Command::PageAddress(start, end) => {
                buf[0] = opcode::SET_PAGE_ADDR;
                buf[1] = start;
                buf[2] = end;
                3
            }
            Command::StartLine(line) => {
                buf[0] = opcode::SET_START_LINE | (line & 0x3F);
                1
            }
            Command::SegmentRemap(remap) => {
                buf[0] = opcode::SET_SEG_REMAP | u8::from(remap);
                1
            }
            Command::Multiplex(ratio) => {
                buf[0] = opcode::SET_MUX_RATIO;
                buf[1] = ratio;
                2
            }
            Command::ReverseComScan(reverse) => {
                buf[0] = if reverse {
                    opcode::SET_COM_SCAN_DEC
                } else {
                    opcode::SET_COM_SCAN_INC
                };
                1
            }
            Command::DisplayOffset(offset) => {
                buf[0] = opcode::SET_DISPLAY_OFFSET;
                buf[1] = offset & 0x3F;
                2
            }
            Command::ComPinConfig(config) => {
                buf[0] = opcode::SET_COM_PINS;
                buf[1] = config;
                2
            }
            Command::ClockDivider(value) => {
                buf[0] = opcode::SET_CLOCK_DIV;
                buf[1] = value;
                2
            }
            Command::PreCharge(value) => {
                buf[0] = opcode::SET_PRECHARGE;
                buf[1] = value;
                2
            }
            Command::VcomDeselect(level) => {
                buf[0] = opcode::SET_VCOM_DESELECT;
                buf[1] = level;
                2
            }
            Command::ChargePump(enabled) => {
                buf[0] = opcode::SET_CHARGE_PUMP;
                buf[1] = if enabled { 0x14 } else { 0x10 };
                2
            }
        };
        &buf[..len]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bytes(cmd: Command) -> ([u8; 3], usize) {
        let mut buf = [0u8; 3];
        let len = cmd.encode(&mut buf).len();
        (buf, len)
    }

    #[test]
    fn test_single_byte_commands() {
        assert_eq!(bytes(Command::DisplayOn(false)), ([0xAE, 0, 0], 1));
        assert_eq!(bytes(Command::DisplayOn(true)), ([0xAF, 0, 0], 1));
        assert_eq!(bytes(Command::StartLine(0)), ([0x40, 0, 0], 1));
        assert_eq!(bytes(Command::SegmentRemap(true)), ([0xA1, 0, 0], 1));
        assert_eq!(bytes(Command::ReverseComScan(true)), ([0xC8, 0, 0], 1));
        assert_eq!(bytes(Command::EntireDisplayOn(false)), ([0xA4, 0, 0], 1));
        assert_eq!(bytes(Command::Invert(false)), ([0xA6, 0, 0], 1));
        assert_eq!(bytes(Command::Invert(true)), ([0xA7, 0, 0], 1));
    }

    #[test]
    fn test_argument_commands() {
        assert_eq!(bytes(Command::ClockDivider(0x80)), ([0xD5, 0x80, 0], 2));
        assert_eq!(bytes(Command::Multiplex(0x3F)), ([0xA8, 0x3F, 0], 2));
        assert_eq!(bytes(Command::ChargePump(true)), ([0x8D, 0x14, 0], 2));
        assert_eq!(bytes(Command::ChargePump(false)), ([0x8D, 0x10, 0], 2));
        assert_eq!(
            bytes(Command::AddressingMode(AddressingMode::Horizontal)),
            ([0x20, 0x00, 0], 2)
        );
        assert_eq!(bytes(Command::ColumnAddress(0, 127)), ([0x21, 0, 127], 3));
        assert_eq!(bytes(Command::PageAddress(0, 7)), ([0x22, 0, 7], 3));
    }

    #[test]
    fn test_start_line_is_masked() {
        assert_eq!(bytes(Command::StartLine(0xFF)), ([0x7F, 0, 0], 1));
    }
}
