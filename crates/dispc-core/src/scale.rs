//! Up/down scaling engine.
//!
//! The scaler sits on the secondary timing path. Factors are
//! fixed-point fractions of the axis step count: 4096 steps (12 bits)
//! horizontally, 2048 steps (11 bits) vertically, computed with exact
//! integer division the way the hardware truncates.
//!
//! Downscale is the tricky half. The secondary bank physically holds
//! one timing set, but a downscale needs two: the destination timing
//! the monitor sees, and a synthetic source timing the scaler samples
//! with. A path-select bit decides which of the two the bank currently
//! represents, so the loads must be bracketed by explicit path
//! transitions and the bit must end on the destination side before the
//! pipe is enabled. The active path is never inferred from other state.

use bitflags::bitflags;
use dispc_hal::RegisterBus;

use crate::chips::ChipGeneration;
use crate::mode::{DisplayMode, Pipe};
use crate::timing;
use crate::{regio, Error};

/// Step counts of the two factor axes.
pub const HOR_STEPS: u32 = 4096;
pub const VER_STEPS: u32 = 2048;

bitflags! {
    /// Which axes the scaler touches, and in which direction.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct ScaleAxes: u8 {
        const HOR_SHRINK = 1 << 0;
        const VER_SHRINK = 1 << 1;
        const HOR_EXPAND = 1 << 2;
        const VER_EXPAND = 1 << 3;
    }
}

/// Requested scaling direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScaleKind {
    /// Source smaller than destination (panel expansion).
    Expand,
    /// Source larger than destination (downscale).
    Shrink,
}

/// A scaling step attached to a mode-set: scale `source` onto the
/// destination timing the mode-set is programming.
#[derive(Debug, Clone, Copy)]
pub struct ScaleRequest<'a> {
    pub source: &'a DisplayMode,
    pub kind: ScaleKind,
}

/// Which timing set the shared secondary register bank represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimingPath {
    Destination,
    Source,
}

/// Result of a scaling computation, discarded after programming.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScalingState {
    pub axes: ScaleAxes,
    /// Horizontal factor in 1/4096 steps.
    pub hor_factor: u16,
    /// Vertical factor in 1/2048 steps.
    pub ver_factor: u16,
    /// Path the bank is left on.
    pub path: TimingPath,
}

/// Compute the factors for scaling `src` onto `dst`.
///
/// All four dimensions must be nonzero; Expand additionally needs
/// destination dimensions of at least 2 because the formula divides by
/// `dst - 1`. A zero factor on an axis means that axis is left
/// unscaled and its enable bit stays clear.
pub fn compute(
    src: &DisplayMode,
    dst: &DisplayMode,
    kind: ScaleKind,
) -> Result<ScalingState, Error> {
    let (sh, sv) = (src.hdisplay, src.vdisplay);
    let (dh, dv) = (dst.hdisplay, dst.vdisplay);

    if sh == 0 || sv == 0 || dh == 0 || dv == 0 {
        return Err(Error::InvalidGeometry);
    }

    let (hor, ver, axes) = match kind {
        ScaleKind::Expand => {
            if dh < 2 || dv < 2 {
                return Err(Error::InvalidGeometry);
            }
            let hor = if sh < dh { (sh - 1) * HOR_STEPS / (dh - 1) } else { 0 };
            let ver = if sv < dv { (sv - 1) * VER_STEPS / (dv - 1) } else { 0 };
            let mut axes = ScaleAxes::empty();
            axes.set(ScaleAxes::HOR_EXPAND, hor != 0);
            axes.set(ScaleAxes::VER_EXPAND, ver != 0);
            (hor, ver, axes)
        }
        ScaleKind::Shrink => {
            let hor = if sh > dh { (sh - dh) * HOR_STEPS / dh } else { 0 };
            let ver = if sv > dv { (sv - dv) * VER_STEPS / dv } else { 0 };
            let mut axes = ScaleAxes::empty();
            axes.set(ScaleAxes::HOR_SHRINK, hor != 0);
            axes.set(ScaleAxes::VER_SHRINK, ver != 0);
            (hor, ver, axes)
        }
    };

    Ok(ScalingState {
        axes,
        hor_factor: hor as u16,
        ver_factor: ver as u16,
        path: TimingPath::Destination,
    })
}

/// Point the shared secondary bank at one of its two timing sets.
///
/// Must be called before every timing load on the scaled path; a
/// downscale sequence always ends back on [`TimingPath::Destination`].
pub fn set_timing_path<B: RegisterBus>(bus: &mut B, gen: ChipGeneration, path: TimingPath) {
    let select = gen.tables().scaling.path_select;
    regio::write_bit(bus, select, path == TimingPath::Source);
}

/// Source timing as the scaler needs to sample it.
///
/// The blank and sync edges are clamped against the source's own
/// totals; the monitor never sees this timing, it only paces the
/// scaler's fetch.
pub fn synthetic_source_timing(src: &DisplayMode) -> DisplayMode {
    let mut timing = src.clone();
    let hedge = src.htotal.saturating_sub(1);
    let vedge = src.vtotal.saturating_sub(1);
    timing.hblank_start = timing.hblank_start.min(hedge);
    timing.hblank_end = timing.hblank_end.min(src.htotal);
    timing.hsync_start = timing.hsync_start.min(hedge);
    timing.hsync_end = timing.hsync_end.min(src.htotal);
    timing.vblank_start = timing.vblank_start.min(vedge);
    timing.vblank_end = timing.vblank_end.min(src.vtotal);
    timing.vsync_start = timing.vsync_start.min(vedge);
    timing.vsync_end = timing.vsync_end.min(src.vtotal);
    timing
}

/// Compute and program scaling of `src` onto `dst`.
///
/// Shrink loads both timing sets into the secondary bank under explicit
/// path transitions and ends on the destination path. Expand leaves the
/// timing load to the normal mode-set path and only programs factors.
/// Returns the computed state; the register writes have already been
/// issued when it does.
pub fn program<B: RegisterBus>(
    bus: &mut B,
    gen: ChipGeneration,
    src: &DisplayMode,
    dst: &DisplayMode,
    kind: ScaleKind,
) -> Result<ScalingState, Error> {
    let state = compute(src, dst, kind)?;
    let regs = gen.tables().scaling;
    log::debug!(
        "scale: {:?} {}x{} -> {}x{} factors {}/{}",
        kind,
        src.hdisplay,
        src.vdisplay,
        dst.hdisplay,
        dst.vdisplay,
        state.hor_factor,
        state.ver_factor
    );

    match kind {
        ScaleKind::Expand => {
            regio::write_value(bus, regs.hor_factor, u32::from(state.hor_factor));
            regio::write_value(bus, regs.ver_factor, u32::from(state.ver_factor));
            regio::write_bit(bus, regs.hor_enable, state.hor_factor != 0);
            regio::write_bit(bus, regs.ver_enable, state.ver_factor != 0);
            // The factors do not take effect on some boards unless the
            // path select is rewritten here, even though expansion never
            // touches the source path. Kept from bring-up; the datasheet
            // does not explain it.
            set_timing_path(bus, gen, TimingPath::Destination);
        }
        ScaleKind::Shrink => {
            set_timing_path(bus, gen, TimingPath::Destination);
            timing::program(bus, gen, Pipe::Secondary, dst);

            set_timing_path(bus, gen, TimingPath::Source);
            let source = synthetic_source_timing(src);
            timing::program(bus, gen, Pipe::Secondary, &source);

            set_timing_path(bus, gen, TimingPath::Destination);

            regio::write_value(bus, regs.hor_factor, u32::from(state.hor_factor));
            regio::write_value(bus, regs.ver_factor, u32::from(state.ver_factor));
            regio::write_bit(bus, regs.hor_enable, state.hor_factor != 0);
            regio::write_bit(bus, regs.ver_enable, state.ver_factor != 0);

            // Horizontal downscales wider than 1024 need the shared
            // refetch buffer regardless of how small the ratio is.
            let share = state.hor_factor != 0 && dst.hdisplay > 1024;
            regio::write_bit(bus, regs.buffer_share, share);
        }
    }

    Ok(state)
}
