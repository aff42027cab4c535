//! Display bus abstraction and embedded-hal implementations
//!
//! The controller exposes two write destinations: the command register
//! region and GRAM. [`DisplayBus`] captures exactly that, so the driver
//! core stays independent of the wire. Implementations are provided for
//! I2C (control-byte framing) and 4-wire SPI (data/command pin).

use embedded_hal::digital::OutputPin;
use embedded_hal::i2c::{I2c, Operation};
use embedded_hal::spi::SpiDevice;

/// 7-bit I2C address of common SSD1306/SH1106 modules (0x78 in the 8-bit
/// shifted form the datasheets quote).
pub const DEFAULT_I2C_ADDRESS: u8 = 0x3C;

/// Write destination on the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Region {
    /// Command register region.
    Command,
    /// Graphics RAM.
    Data,
}

impl Region {
    /// I2C control byte selecting this region.
    pub const fn control_byte(self) -> u8 {
        match self {
            Region::Command => 0x00,
            Region::Data => 0x40,
        }
    }
}

/// Byte-oriented transport to the display controller.
///
/// Implemented by the provided [`I2cInterface`] and [`SpiInterface`];
/// platforms with DMA-capable peripherals implement it themselves so that
/// [`dispatch`](Self::dispatch) returns once the transfer is started and
/// the completion interrupt calls back into the driver.
pub trait DisplayBus {
    type Error;

    /// Transmit `bytes` to `region`, blocking until the bus releases the
    /// buffer.
    fn write(&mut self, region: Region, bytes: &[u8]) -> Result<(), Self::Error>;

    /// Begin a transfer without waiting for completion.
    ///
    /// Used by deferred refresh. The default implementation degrades to a
    /// blocking [`write`](Self::write); callers driving a blocking bus in
    /// deferred mode must then invoke the driver's completion entry point
    /// themselves.
    fn dispatch(&mut self, region: Region, bytes: &[u8]) -> Result<(), Self::Error> {
        self.write(region, bytes)
    }
}

/// Hooks bracketing every command dispatch.
///
/// Default no-ops; hosts hang settle delays or scope triggers here when
/// their bus layer does not block until the controller has latched the
/// command.
pub trait CommandHooks {
    fn before_command(&mut self) {}
    fn after_command(&mut self) {}
}

/// The do-nothing hook set.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoHooks;

impl CommandHooks for NoHooks {}

/// I2C transport: each write is one transaction carrying the region's
/// control byte followed by the payload.
pub struct I2cInterface<I2C> {
    i2c: I2C,
    address: u8,
}

impl<I2C> I2cInterface<I2C> {
    /// # Arguments
    /// * `i2c` - I2C peripheral (takes ownership for exclusive access)
    /// * `address` - 7-bit device address, typically [`DEFAULT_I2C_ADDRESS`]
    pub fn new(i2c: I2C, address: u8) -> Self {
        Self { i2c, address }
    }

    /// Give the peripheral back.
    pub fn release(self) -> I2C {
        self.i2c
    }
}

impl<I2C> DisplayBus for I2cInterface<I2C>
where
    I2C: I2c,
{
    type Error = I2C::Error;

    fn write(&mut self, region: Region, bytes: &[u8]) -> Result<(), Self::Error> {
        // Control byte and payload share one START/STOP pair
        self.i2c.transaction(
            self.address,
            &mut [
                Operation::Write(&[region.control_byte()]),
                Operation::Write(bytes),
            ],
        )
    }
}

/// Errors from the 4-wire SPI transport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SpiError<SPI, PIN> {
    /// Bus-level failure.
    Spi(SPI),
    /// Data/command pin failure.
    Pin(PIN),
}

/// 4-wire SPI transport: the data/command pin selects the region, chip
/// select belongs to the `SpiDevice` per embedded-hal 1.0 convention.
pub struct SpiInterface<SPI, DC> {
    spi: SPI,
    dc: DC,
}

impl<SPI, DC> SpiInterface<SPI, DC> {
    /// # Arguments
    /// * `spi` - SPI device with chip-select management
    /// * `dc` - data/command pin, driven low for commands, high for data
    pub fn new(spi: SPI, dc: DC) -> Self {
        Self { spi, dc }
    }

    /// Give the peripherals back.
    pub fn release(self) -> (SPI, DC) {
        (self.spi, self.dc)
    }
}

impl<SPI, DC> DisplayBus for SpiInterface<SPI, DC>
where
    SPI: SpiDevice,
    DC: OutputPin,
{
    type Error = SpiError<SPI::Error, DC::Error>;

    fn write(&mut self, region: Region, bytes: &[u8]) -> Result<(), Self::Error> {
        match region {
            Region::Command => self.dc.set_low(),
            Region::Data => self.dc.set_high(),
        }
        .map_err(SpiError::Pin)?;
        self.spi.write(bytes).map_err(SpiError::Spi)
    }
}
