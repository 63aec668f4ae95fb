//! Display FIFO and request-queue tuner.
//!
//! Each pipe refetches scanout data through a FIFO whose depth and
//! watermarks must match the mode's bandwidth demand: too shallow and
//! the pipe underruns on wide modes, too deep and the memory arbiter
//! starves the other clients. Selection is pure table lookup keyed by
//! pipe, horizontal-resolution tier, color depth and memory tier; the
//! same inputs always produce the same constants.

use dispc_hal::RegisterBus;

use crate::chips::ChipGeneration;
use crate::mode::{ColorDepth, DisplayMode, MemoryTier, Pipe};
use crate::regio;

/// The hardware programs all four constants in units of four entries.
const QUANT_UNIT: u16 = 4;

/// Tuned FIFO constants for one pipe and mode, in raw entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FifoConstants {
    pub max_depth: u16,
    pub threshold: u16,
    pub high_threshold: u16,
    pub expire_num: u16,
}

/// Horizontal-resolution tier index; thresholds at 1024/1280/1400/1600.
fn hres_tier(hdisplay: u32) -> usize {
    if hdisplay <= 1024 {
        0
    } else if hdisplay <= 1280 {
        1
    } else if hdisplay <= 1400 {
        2
    } else if hdisplay <= 1600 {
        3
    } else {
        4
    }
}

/// Select the FIFO constants for `pipe` scanning out `mode`.
pub fn tune(
    gen: ChipGeneration,
    pipe: Pipe,
    mode: &DisplayMode,
    depth: ColorDepth,
    mem: MemoryTier,
) -> FifoConstants {
    let bank = gen.tables().fifo[pipe.index()];
    let tier = hres_tier(mode.hdisplay);

    // Baseline memory cannot refill the full FIFO across a wide 32 bpp
    // scanline; fall back to the reduced row there.
    let constrained =
        depth == ColorDepth::Bpp32 && mem == MemoryTier::Baseline && mode.hdisplay > 1024;
    let row = if constrained { &bank.reduced } else { &bank.base };

    let constants = FifoConstants {
        max_depth: row.max_depth,
        threshold: row.threshold,
        high_threshold: row.high_threshold,
        expire_num: bank.expire[tier],
    };
    log::debug!(
        "fifo: pipe {} tier {} {:?} -> depth {} thresholds {}/{} expire {}",
        pipe.index(),
        tier,
        depth,
        constants.max_depth,
        constants.threshold,
        constants.high_threshold,
        constants.expire_num
    );
    constants
}

/// Write previously tuned constants, quantized to hardware units.
pub fn program<B: RegisterBus>(
    bus: &mut B,
    gen: ChipGeneration,
    pipe: Pipe,
    constants: &FifoConstants,
) {
    let regs = gen.tables().fifo_regs[pipe.index()];
    regio::write_value(bus, regs.max_depth, u32::from(constants.max_depth / QUANT_UNIT));
    regio::write_value(bus, regs.threshold, u32::from(constants.threshold / QUANT_UNIT));
    regio::write_value(
        bus,
        regs.high_threshold,
        u32::from(constants.high_threshold / QUANT_UNIT),
    );
    regio::write_value(bus, regs.expire, u32::from(constants.expire_num / QUANT_UNIT));
}
