//! Timing programmer.
//!
//! Applies the per-pipe register formulas to a mode's twelve timing
//! parameters and writes each result through the field lists of the
//! active generation. The primary pipe counts horizontal quantities in
//! character clocks (pixels / 8) with the classic CRT offsets; the
//! secondary bank counts pixels and lines directly, everything biased
//! by one. No state is kept between calls.
//!
//! All twelve parameters must land before the pipe is re-enabled. An
//! interrupted sequence leaves a garbled picture but nothing worse; the
//! caller blanks the pipe around the call (see [`crate::device`]).

use dispc_hal::RegisterBus;

use crate::chips::ChipGeneration;
use crate::mode::{DisplayMode, Pipe};
use crate::regio;

/// Program all twelve timing parameters of `pipe` for `mode`.
pub fn program<B: RegisterBus>(bus: &mut B, gen: ChipGeneration, pipe: Pipe, mode: &DisplayMode) {
    log::debug!(
        "timing: pipe {} {}x{} total {}x{}",
        pipe.index(),
        mode.hdisplay,
        mode.vdisplay,
        mode.htotal,
        mode.vtotal
    );

    let set = gen.tables().timing[pipe.index()];

    let values = match pipe {
        Pipe::Primary => [
            (set.htotal, (mode.htotal / 8).saturating_sub(5)),
            (set.hdisplay, (mode.hdisplay / 8).saturating_sub(1)),
            (set.hblank_start, (mode.hblank_start / 8).saturating_sub(1)),
            (set.hblank_end, (mode.hblank_end / 8).saturating_sub(1)),
            (set.hsync_start, mode.hsync_start / 8),
            (set.hsync_end, mode.hsync_end / 8),
            (set.vtotal, mode.vtotal.saturating_sub(2)),
            (set.vdisplay, mode.vdisplay.saturating_sub(1)),
            (set.vblank_start, mode.vblank_start.saturating_sub(1)),
            (set.vblank_end, mode.vblank_end.saturating_sub(1)),
            (set.vsync_start, mode.vsync_start.saturating_sub(1)),
            (set.vsync_end, mode.vsync_end.saturating_sub(1)),
        ],
        Pipe::Secondary => [
            (set.htotal, mode.htotal.saturating_sub(1)),
            (set.hdisplay, mode.hdisplay.saturating_sub(1)),
            (set.hblank_start, mode.hblank_start.saturating_sub(1)),
            (set.hblank_end, mode.hblank_end.saturating_sub(1)),
            (set.hsync_start, mode.hsync_start.saturating_sub(1)),
            (set.hsync_end, mode.hsync_end.saturating_sub(1)),
            (set.vtotal, mode.vtotal.saturating_sub(1)),
            (set.vdisplay, mode.vdisplay.saturating_sub(1)),
            (set.vblank_start, mode.vblank_start.saturating_sub(1)),
            (set.vblank_end, mode.vblank_end.saturating_sub(1)),
            (set.vsync_start, mode.vsync_start.saturating_sub(1)),
            (set.vsync_end, mode.vsync_end.saturating_sub(1)),
        ],
    };

    for (fields, value) in values {
        regio::write_value(bus, fields, value);
    }
}
