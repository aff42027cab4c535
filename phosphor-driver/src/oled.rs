//! The OLED driver object
//!
//! [`Oled`] owns the framebuffer, a bounded command staging buffer, and
//! the deferred-transfer state machine. Draw operations mutate the
//! framebuffer only; [`refresh`](Oled::refresh) pushes it to the panel
//! according to the configured addressing and transfer modes.

use heapless::Vec;
use phosphor_core::{
    text, AddressingMode, DisplayConfig, Framebuffer, TextSize, TransferMode, TransferPhase,
};

use crate::bus::{CommandHooks, DisplayBus, NoHooks, Region};
use crate::command;
use crate::error::Error;

/// Capacity of the command staging buffer. Must hold the longest vendor
/// sequence; the SSD1306 init table is 28 bytes.
const COMMAND_BUFFER_LEN: usize = 32;

/// Driver for an SSD1306/SH1106 panel of `WIDTH` x `PAGES * 8` pixels.
///
/// # Lifecycle
///
/// 1. [`new`](Self::new) - construct without bus traffic.
/// 2. [`init`](Self::init) - send the controller init sequence.
/// 3. Draw via [`set_point`](Self::set_point) / [`draw_str`](Self::draw_str)
///    or, with the `graphics` feature, through
///    [`frame_mut`](Self::frame_mut) as an `embedded-graphics` target.
/// 4. [`refresh`](Self::refresh) - push the framebuffer to the panel.
///
/// In [`TransferMode::Deferred`] a refresh only dispatches the first
/// write; the platform's transfer-complete interrupt must call
/// [`transfer_complete`](Self::transfer_complete) to keep the sequence
/// moving. Callers must not assume the panel is up to date when
/// `refresh` returns in that mode.
pub struct Oled<B, const WIDTH: usize, const PAGES: usize, H = NoHooks> {
    bus: B,
    hooks: H,
    config: DisplayConfig,
    frame: Framebuffer<WIDTH, PAGES>,
    staging: Vec<u8, COMMAND_BUFFER_LEN>,
    phase: TransferPhase,
}

/// Driver preset for the common 128x64 modules.
pub type Oled128x64<B, H = NoHooks> = Oled<B, 128, 8, H>;

/// Driver preset for 128x32 modules.
pub type Oled128x32<B, H = NoHooks> = Oled<B, 128, 4, H>;

impl<B, const WIDTH: usize, const PAGES: usize> Oled<B, WIDTH, PAGES, NoHooks>
where
    B: DisplayBus,
{
    /// Construct a driver with no command hooks. No bus traffic is
    /// generated; call [`init`](Self::init) before anything else.
    pub fn new(bus: B, config: DisplayConfig) -> Self {
        Self::with_hooks(bus, config, NoHooks)
    }
}

impl<B, const WIDTH: usize, const PAGES: usize, H> Oled<B, WIDTH, PAGES, H>
where
    B: DisplayBus,
    H: CommandHooks,
{
    /// Construct a driver whose command writes are bracketed by `hooks`.
    pub fn with_hooks(bus: B, config: DisplayConfig, hooks: H) -> Self {
        Self {
            bus,
            hooks,
            config,
            frame: Framebuffer::new(),
            staging: Vec::new(),
            phase: TransferPhase::Idle,
        }
    }

    /// Send the controller-specific initialization sequence as a single
    /// command write.
    pub fn init(&mut self) -> Result<(), Error<B::Error>> {
        self.command(command::init_sequence(
            self.config.family,
            self.config.effective_addressing(),
        ))
    }

    /// Light or unlight one pixel in the framebuffer. No bus traffic.
    pub fn set_point(&mut self, x: usize, y: usize, on: bool) -> Result<(), Error<B::Error>> {
        self.frame.set_point(x, y, on)?;
        Ok(())
    }

    /// Render text into the framebuffer at pixel column `x`, page row
    /// `page`, using the configured wrap policy. No bus traffic.
    pub fn draw_str(
        &mut self,
        x: usize,
        page: usize,
        text: &str,
        size: TextSize,
    ) -> Result<(), Error<B::Error>> {
        text::draw_str(&mut self.frame, x, page, text, size, self.config.wrap)?;
        Ok(())
    }

    /// Set every framebuffer byte to `byte` and push the frame.
    pub fn fill(&mut self, byte: u8) -> Result<(), Error<B::Error>> {
        self.frame.fill(byte);
        self.refresh()
    }

    /// Unlight the whole panel.
    pub fn clear(&mut self) -> Result<(), Error<B::Error>> {
        self.fill(0x00)
    }

    /// Push the framebuffer to the panel.
    ///
    /// Blocking transfer returns once the last byte is written. Deferred
    /// transfer dispatches the first chunk-select command and returns;
    /// fails with [`Error::Busy`] if a deferred sequence is still
    /// underway.
    pub fn refresh(&mut self) -> Result<(), Error<B::Error>> {
        match self.config.transfer {
            TransferMode::Blocking => match self.config.effective_addressing() {
                AddressingMode::Horizontal => {
                    self.command(&Self::window_sequence())?;
                    self.bus
                        .write(Region::Data, self.frame.as_bytes())
                        .map_err(Error::Bus)
                }
                AddressingMode::Paged => {
                    let offset = command::column_offset(self.config.family);
                    for page in 0..PAGES {
                        self.command(&command::page_select(page as u8, offset))?;
                        self.bus
                            .write(Region::Data, self.frame.page(page))
                            .map_err(Error::Bus)?;
                    }
                    Ok(())
                }
            },
            TransferMode::Deferred => {
                if self.phase.in_progress() {
                    return Err(Error::Busy);
                }
                self.phase = TransferPhase::ChunkCommand(0);
                self.dispatch_select(0).inspect_err(|_| {
                    self.phase = TransferPhase::Idle;
                })
            }
        }
    }

    /// Advance a deferred refresh after the platform signals that the
    /// dispatched transfer physically finished.
    ///
    /// Call from the bus-completion interrupt. Chunks are emitted in
    /// order, each select command before its data; a completion with no
    /// transfer underway is a no-op. A dispatch failure abandons the
    /// sequence (already-sent chunks stay sent) and returns the failing
    /// status.
    pub fn transfer_complete(&mut self) -> Result<(), Error<B::Error>> {
        self.phase = self.phase.advance(self.chunk_count());
        let step = match self.phase {
            TransferPhase::Idle => return Ok(()),
            TransferPhase::ChunkCommand(chunk) => self.dispatch_select(chunk),
            TransferPhase::ChunkData(chunk) => {
                let bytes: &[u8] = match self.config.effective_addressing() {
                    AddressingMode::Paged => self.frame.page(chunk as usize),
                    AddressingMode::Horizontal => self.frame.as_bytes(),
                };
                self.bus.dispatch(Region::Data, bytes).map_err(Error::Bus)
            }
        };
        if step.is_err() {
            self.phase = TransferPhase::Idle;
        }
        step
    }

    /// Whether a deferred refresh is underway.
    pub fn is_refreshing(&self) -> bool {
        self.phase.in_progress()
    }

    /// Turn the panel on (charge pump first, family-specific).
    pub fn on(&mut self) -> Result<(), Error<B::Error>> {
        self.command(command::power_on(self.config.family))
    }

    /// Turn the panel off.
    pub fn off(&mut self) -> Result<(), Error<B::Error>> {
        self.command(command::power_off(self.config.family))
    }

    /// Set the contrast register (0-255).
    pub fn set_contrast(&mut self, contrast: u8) -> Result<(), Error<B::Error>> {
        self.command(&[command::cmd::SET_CONTRAST, contrast])
    }

    /// Invert the panel colors without touching the framebuffer.
    pub fn set_invert(&mut self, inverted: bool) -> Result<(), Error<B::Error>> {
        self.command(&[if inverted {
            command::cmd::SET_INVERSE
        } else {
            command::cmd::SET_NORMAL
        }])
    }

    /// Read access to the framebuffer.
    pub fn frame(&self) -> &Framebuffer<WIDTH, PAGES> {
        &self.frame
    }

    /// Mutable access to the framebuffer, e.g. as an `embedded-graphics`
    /// draw target.
    pub fn frame_mut(&mut self) -> &mut Framebuffer<WIDTH, PAGES> {
        &mut self.frame
    }

    /// Tear the driver down and give the bus back.
    pub fn release(self) -> B {
        self.bus
    }

    /// Stage a command sequence and write it to the command region,
    /// bracketed by the hooks.
    ///
    /// The staging copy keeps the bytes alive in driver-owned storage, so
    /// a non-blocking bus may finish the transfer after the caller's
    /// sequence storage is gone.
    fn command(&mut self, bytes: &[u8]) -> Result<(), Error<B::Error>> {
        self.stage(bytes)?;
        self.hooks.before_command();
        let result = self
            .bus
            .write(Region::Command, &self.staging)
            .map_err(Error::Bus);
        self.hooks.after_command();
        result
    }

    /// As [`command`](Self::command), but dispatched without waiting for
    /// completion.
    fn dispatch_command(&mut self, bytes: &[u8]) -> Result<(), Error<B::Error>> {
        self.stage(bytes)?;
        self.hooks.before_command();
        let result = self
            .bus
            .dispatch(Region::Command, &self.staging)
            .map_err(Error::Bus);
        self.hooks.after_command();
        result
    }

    fn stage(&mut self, bytes: &[u8]) -> Result<(), Error<B::Error>> {
        self.staging.clear();
        self.staging
            .extend_from_slice(bytes)
            .map_err(|()| Error::OutOfRange)
    }

    /// Dispatch the select command for `chunk`: a page select in paged
    /// addressing, the full column/page window otherwise.
    fn dispatch_select(&mut self, chunk: u8) -> Result<(), Error<B::Error>> {
        match self.config.effective_addressing() {
            AddressingMode::Paged => {
                let offset = command::column_offset(self.config.family);
                self.dispatch_command(&command::page_select(chunk, offset))
            }
            AddressingMode::Horizontal => self.dispatch_command(&Self::window_sequence()),
        }
    }

    /// Chunks per deferred walk: one per page, or a single whole-frame
    /// chunk in horizontal addressing.
    fn chunk_count(&self) -> u8 {
        match self.config.effective_addressing() {
            AddressingMode::Paged => PAGES as u8,
            AddressingMode::Horizontal => 1,
        }
    }

    /// Reset the column/page window to the whole panel.
    fn window_sequence() -> [u8; 6] {
        [
            command::cmd::SET_COLUMN_ADDR,
            0,
            (WIDTH - 1) as u8,
            command::cmd::SET_PAGE_ADDR,
            0,
            (PAGES - 1) as u8,
        ]
    }
}
