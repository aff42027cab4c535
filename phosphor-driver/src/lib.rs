//! SSD1306/SH1106 OLED driver
//!
//! This crate provides the hardware-facing half of Phosphor:
//!
//! - [`DisplayBus`] - the byte-oriented bus contract, with I2C and SPI
//!   implementations over `embedded-hal` 1.0
//! - Controller command tables for the two supported families
//! - [`Oled`] - the driver object owning the framebuffer, the command
//!   staging buffer, and the deferred-transfer state machine
//!
//! # Quick start
//!
//! ```ignore
//! use phosphor_driver::{DisplayConfig, I2cInterface, Oled128x64, TextSize};
//!
//! let bus = I2cInterface::new(i2c, phosphor_driver::bus::DEFAULT_I2C_ADDRESS);
//! let mut oled = Oled128x64::new(bus, DisplayConfig::default());
//! oled.init()?;
//! oled.clear()?;
//! oled.draw_str(0, 0, "hello", TextSize::Small)?;
//! oled.refresh()?;
//! ```
//!
//! # Features
//!
//! - **`defmt`** - `defmt::Format` implementations on public types
//! - **`graphics`** - `embedded-graphics` `DrawTarget` on the framebuffer

#![no_std]
#![deny(unsafe_code)]

pub mod bus;
pub mod command;
pub mod error;
pub mod oled;

pub use bus::{CommandHooks, DisplayBus, I2cInterface, NoHooks, Region, SpiInterface};
pub use error::Error;
pub use oled::{Oled, Oled128x32, Oled128x64};

// Re-export the core types a typical caller needs
pub use phosphor_core::{
    AddressingMode, ControllerFamily, DisplayConfig, Framebuffer, TextSize, TransferMode,
    WrapMode,
};
