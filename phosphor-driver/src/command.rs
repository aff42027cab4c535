//! Controller command bytes and vendor sequences
//!
//! The init tables target the common 128x64 modules, like the fixed
//! parameter headers of the vendor reference code they come from.

use phosphor_core::{AddressingMode, ControllerFamily};

/// Controller command bytes shared by the SSD1306/SH1106 family.
pub mod cmd {
    pub const DISPLAY_OFF: u8 = 0xAE;
    pub const DISPLAY_ON: u8 = 0xAF;
    pub const SET_CONTRAST: u8 = 0x81;
    pub const SET_NORMAL: u8 = 0xA6;
    pub const SET_INVERSE: u8 = 0xA7;
    /// SSD1306 only; the SH1106 is hardwired to page addressing.
    pub const SET_MEM_MODE: u8 = 0x20;
    /// SSD1306 column window (start, end) for horizontal addressing.
    pub const SET_COLUMN_ADDR: u8 = 0x21;
    /// SSD1306 page window (start, end) for horizontal addressing.
    pub const SET_PAGE_ADDR: u8 = 0x22;
    /// Page-addressing page select, OR'd with the page index.
    pub const SET_PAGE_START: u8 = 0xB0;
    /// Column address low nibble, OR'd in.
    pub const SET_LOW_COLUMN: u8 = 0x00;
    /// Column address high nibble, OR'd in.
    pub const SET_HIGH_COLUMN: u8 = 0x10;
    pub const SET_START_LINE: u8 = 0x40;
    pub const SET_SEG_REMAP: u8 = 0xA1;
    pub const SET_COM_SCAN_DEC: u8 = 0xC8;
    pub const ENTIRE_DISPLAY_RESUME: u8 = 0xA4;
    pub const SET_MUX_RATIO: u8 = 0xA8;
    pub const SET_DISPLAY_OFFSET: u8 = 0xD3;
    pub const SET_CLOCK_DIV: u8 = 0xD5;
    pub const SET_PRECHARGE: u8 = 0xD9;
    pub const SET_COM_PINS: u8 = 0xDA;
    pub const SET_VCOM_LEVEL: u8 = 0xDB;
    /// SSD1306 charge pump control, followed by 0x14 (on) / 0x10 (off).
    pub const CHARGE_PUMP: u8 = 0x8D;
    /// SH1106 DC-DC control mode, followed by [`DCDC_ON`] / [`DCDC_OFF`].
    pub const DCDC_CONTROL: u8 = 0xAD;
    pub const DCDC_ON: u8 = 0x8B;
    pub const DCDC_OFF: u8 = 0x8A;
}

/// SSD1306 initialization, horizontal addressing.
pub const SSD1306_INIT_HORIZONTAL: [u8; 28] = ssd1306_init(0x00);

/// SSD1306 initialization, page addressing.
pub const SSD1306_INIT_PAGED: [u8; 28] = ssd1306_init(0x02);

const fn ssd1306_init(mem_mode: u8) -> [u8; 28] {
    [
        cmd::DISPLAY_OFF,
        cmd::SET_MEM_MODE,
        mem_mode,
        cmd::SET_PAGE_START,
        cmd::SET_COM_SCAN_DEC,
        cmd::SET_LOW_COLUMN,
        cmd::SET_HIGH_COLUMN,
        cmd::SET_START_LINE,
        cmd::SET_CONTRAST,
        0xFF,
        cmd::SET_SEG_REMAP,
        cmd::SET_NORMAL,
        cmd::SET_MUX_RATIO,
        0x3F, // 64 lines
        cmd::ENTIRE_DISPLAY_RESUME,
        cmd::SET_DISPLAY_OFFSET,
        0x00,
        cmd::SET_CLOCK_DIV,
        0xF0,
        cmd::SET_PRECHARGE,
        0x22,
        cmd::SET_COM_PINS,
        0x12, // Alternative COM config
        cmd::SET_VCOM_LEVEL,
        0x20,
        cmd::CHARGE_PUMP,
        0x14, // Enable charge pump
        cmd::DISPLAY_ON,
    ]
}

/// SH1106 initialization (inherently page-addressed).
pub const SH1106_INIT: [u8; 22] = [
    cmd::DISPLAY_OFF,
    cmd::SET_CLOCK_DIV,
    0x80, // Default clock
    cmd::SET_MUX_RATIO,
    0x3F, // 64 lines
    cmd::SET_DISPLAY_OFFSET,
    0x00,
    cmd::SET_START_LINE,
    cmd::DCDC_CONTROL,
    cmd::DCDC_ON,
    cmd::SET_SEG_REMAP,    // Flip horizontally
    cmd::SET_COM_SCAN_DEC, // Flip vertically
    cmd::SET_COM_PINS,
    0x12, // Alternative COM config
    cmd::SET_CONTRAST,
    0xCF, // High contrast
    cmd::SET_PRECHARGE,
    0xF1,
    cmd::SET_VCOM_LEVEL,
    0x40,
    cmd::SET_NORMAL,
    cmd::DISPLAY_ON,
];

/// SSD1306 power on/off: charge pump, then display enable.
pub const SSD1306_ON: [u8; 3] = [cmd::CHARGE_PUMP, 0x14, cmd::DISPLAY_ON];
pub const SSD1306_OFF: [u8; 3] = [cmd::CHARGE_PUMP, 0x10, cmd::DISPLAY_OFF];

/// SH1106 power on/off: DC-DC pump, then display enable.
pub const SH1106_ON: [u8; 3] = [cmd::DCDC_CONTROL, cmd::DCDC_ON, cmd::DISPLAY_ON];
pub const SH1106_OFF: [u8; 3] = [cmd::DCDC_CONTROL, cmd::DCDC_OFF, cmd::DISPLAY_OFF];

/// The full init sequence for a family/addressing pair.
pub fn init_sequence(family: ControllerFamily, addressing: AddressingMode) -> &'static [u8] {
    match (family, addressing) {
        (ControllerFamily::Ssd1306, AddressingMode::Horizontal) => &SSD1306_INIT_HORIZONTAL,
        (ControllerFamily::Ssd1306, AddressingMode::Paged) => &SSD1306_INIT_PAGED,
        (ControllerFamily::Sh1106, _) => &SH1106_INIT,
    }
}

pub fn power_on(family: ControllerFamily) -> &'static [u8] {
    match family {
        ControllerFamily::Ssd1306 => &SSD1306_ON,
        ControllerFamily::Sh1106 => &SH1106_ON,
    }
}

pub fn power_off(family: ControllerFamily) -> &'static [u8] {
    match family {
        ControllerFamily::Ssd1306 => &SSD1306_OFF,
        ControllerFamily::Sh1106 => &SH1106_OFF,
    }
}

/// Column where a 128-wide panel starts in this family's GRAM.
///
/// The SH1106 has a 132-column GRAM and centers 128-column panels.
pub fn column_offset(family: ControllerFamily) -> u8 {
    match family {
        ControllerFamily::Ssd1306 => 0,
        ControllerFamily::Sh1106 => 2,
    }
}

/// Page-addressing select sequence: page start, then the column pointer
/// split into its low and high nibbles.
pub fn page_select(page: u8, column_offset: u8) -> [u8; 3] {
    [
        cmd::SET_PAGE_START | (page & 0x0F),
        cmd::SET_LOW_COLUMN | (column_offset & 0x0F),
        cmd::SET_HIGH_COLUMN | (column_offset >> 4),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ssd1306_init_matches_the_vendor_table() {
        // Byte-for-byte the documented 128x64 reference sequence
        assert_eq!(
            SSD1306_INIT_HORIZONTAL,
            [
                0xAE, 0x20, 0x00, 0xB0, 0xC8, 0x00, 0x10, 0x40, 0x81, 0xFF, 0xA1, 0xA6, 0xA8,
                0x3F, 0xA4, 0xD3, 0x00, 0xD5, 0xF0, 0xD9, 0x22, 0xDA, 0x12, 0xDB, 0x20, 0x8D,
                0x14, 0xAF
            ]
        );
    }

    #[test]
    fn paged_init_differs_only_in_the_addressing_parameter() {
        let mut expected = SSD1306_INIT_HORIZONTAL;
        expected[2] = 0x02;
        assert_eq!(SSD1306_INIT_PAGED, expected);
    }

    #[test]
    fn sh1106_ignores_the_addressing_request() {
        assert_eq!(
            init_sequence(ControllerFamily::Sh1106, AddressingMode::Horizontal),
            &SH1106_INIT
        );
        assert_eq!(
            init_sequence(ControllerFamily::Sh1106, AddressingMode::Paged),
            &SH1106_INIT
        );
    }

    #[test]
    fn page_select_applies_the_column_offset() {
        assert_eq!(page_select(0, 0), [0xB0, 0x00, 0x10]);
        assert_eq!(page_select(3, 2), [0xB3, 0x02, 0x10]);
        assert_eq!(page_select(7, 0x13), [0xB7, 0x03, 0x11]);
    }

    #[test]
    fn power_sequences_toggle_pump_then_panel() {
        assert_eq!(power_on(ControllerFamily::Ssd1306), &[0x8D, 0x14, 0xAF]);
        assert_eq!(power_off(ControllerFamily::Ssd1306), &[0x8D, 0x10, 0xAE]);
        assert_eq!(power_on(ControllerFamily::Sh1106), &[0xAD, 0x8B, 0xAF]);
        assert_eq!(power_off(ControllerFamily::Sh1106), &[0xAD, 0x8A, 0xAE]);
    }
}
