//! Mode-programming core for the DC family of dual-pipe integrated
//! display controllers.
//!
//! The chips share one programming model but differ per generation in
//! register layout, bit-field widths, FIFO sizing and PLL tables. This
//! crate turns logical mode parameters into correctly ordered, correctly
//! masked register writes; everything generation-specific is `'static`
//! data in [`chips`], threaded explicitly through every operation.
//!
//! Register access goes through the caller-supplied [`dispc_hal::RegisterBus`];
//! the core owns no hardware resources of its own. Callers serialize
//! mode-sets per device externally, single-threaded.

#![no_std]

pub mod chips;
pub mod device;
pub mod fifo;
pub mod mode;
pub mod pll;
pub mod regio;
pub mod scale;
pub mod timing;

pub use chips::{ChipGeneration, ChipId};
pub use device::Device;
pub use dispc_hal::{Delay, RegPort, RegisterBus};
pub use fifo::FifoConstants;
pub use mode::{ColorDepth, DisplayMode, FramebufferLayout, MemoryTier, ModeFlags, Pipe};
pub use scale::{ScaleAxes, ScaleKind, ScaleRequest, ScalingState, TimingPath};

/// Errors a mode-set operation can return.
///
/// Register I/O itself is infallible; every failure here is a
/// configuration problem the caller must handle before enabling the
/// pipe. Mis-authored generation tables produce silently wrong timings
/// with no feedback signal; that stays a build-time correctness concern
/// of the tables, not a runtime error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Chip id absent from the generation tables; refuse the mode-set
    /// and leave the pipe disabled.
    UnsupportedDevice(ChipId),
    /// Zero or degenerate source/destination dimensions passed to the
    /// scaling engine.
    InvalidGeometry,
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::UnsupportedDevice(chip) => write!(f, "unsupported device id {:#06x}", chip.0),
            Error::InvalidGeometry => write!(f, "invalid scaling geometry"),
        }
    }
}

impl core::error::Error for Error {}
