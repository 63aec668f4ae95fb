//! Device front-end.
//!
//! [`Device`] owns the caller's register bus and the generation
//! resolved once at construction, and threads both through the
//! programming modules. It is also the sole owner of the register bits
//! genuinely shared between the two pipes (simultaneous-display enable,
//! secondary channel enable, the PLL control bits); callers serialize
//! mode-sets on the device instance, never on a pipe alone.

use dispc_hal::{Delay, RegisterBus};

use crate::chips::{ChipGeneration, ChipId};
use crate::fifo::{self, FifoConstants};
use crate::mode::{ColorDepth, DisplayMode, FramebufferLayout, MemoryTier, ModeFlags, Pipe};
use crate::scale::{self, ScaleKind, ScaleRequest, ScalingState};
use crate::{pll, regio, timing, Error};

/// Settle time between programming a pipe and opening scanout, covering
/// the panel power rail.
const PANEL_POWER_MS: u32 = 50;

/// One physical display controller.
pub struct Device<B> {
    bus: B,
    chip: ChipId,
    gen: ChipGeneration,
    pipe_active: [bool; 2],
}

impl<B: RegisterBus> Device<B> {
    /// Resolve the generation for `chip` and apply its fixed
    /// initialization presets.
    ///
    /// Fails with [`Error::UnsupportedDevice`] for chips absent from
    /// the generation tables; nothing is written in that case.
    pub fn new(mut bus: B, chip: ChipId) -> Result<Self, Error> {
        let gen = ChipGeneration::resolve(chip)?;
        regio::write_presets(&mut bus, gen.tables().init);
        Ok(Self { bus, chip, gen, pipe_active: [false; 2] })
    }

    pub fn chip(&self) -> ChipId {
        self.chip
    }

    pub fn generation(&self) -> ChipGeneration {
        self.gen
    }

    /// Give the bus back, e.g. to hand the register window to teardown.
    pub fn into_bus(self) -> B {
        self.bus
    }

    /// Gate scanout on `pipe`.
    pub fn blank_pipe(&mut self, pipe: Pipe) {
        self.set_pipe_active(pipe, false);
    }

    /// Open scanout on `pipe`. Every register the pipe scans out from
    /// must be programmed by now.
    pub fn unblank_pipe(&mut self, pipe: Pipe) {
        self.set_pipe_active(pipe, true);
    }

    fn set_pipe_active(&mut self, pipe: Pipe, active: bool) {
        let control = self.gen.tables().control;
        match pipe {
            // The primary gate is a screen-off bit, so the sense flips.
            Pipe::Primary => regio::write_bit(&mut self.bus, control.primary_blank, !active),
            Pipe::Secondary => regio::write_bit(&mut self.bus, control.secondary_enable, active),
        }
        self.pipe_active[pipe.index()] = active;

        // Simultaneous-display tracks both pipes scanning out at once.
        let both = self.pipe_active[0] && self.pipe_active[1];
        regio::write_bit(&mut self.bus, control.simultaneous, both);
    }

    /// Program the twelve timing parameters of `pipe`.
    pub fn program_timing(&mut self, pipe: Pipe, mode: &DisplayMode) {
        timing::program(&mut self.bus, self.gen, pipe, mode);
    }

    /// Select and write the FIFO constants for `pipe` and `mode`.
    pub fn tune_fifo(
        &mut self,
        pipe: Pipe,
        mode: &DisplayMode,
        depth: ColorDepth,
        mem: MemoryTier,
    ) -> FifoConstants {
        let constants = fifo::tune(self.gen, pipe, mode, depth, mem);
        fifo::program(&mut self.bus, self.gen, pipe, &constants);
        constants
    }

    /// Compute and program scaling of `src` onto `dst` on the
    /// secondary path.
    pub fn program_scaling(
        &mut self,
        src: &DisplayMode,
        dst: &DisplayMode,
        kind: ScaleKind,
    ) -> Result<ScalingState, Error> {
        scale::program(&mut self.bus, self.gen, src, dst, kind)
    }

    /// Program the mode's sync polarities into the shared sync control.
    pub fn set_sync_polarity(&mut self, flags: ModeFlags) {
        let control = self.gen.tables().control;
        regio::write_bit(&mut self.bus, control.hsync_polarity, flags.contains(ModeFlags::NHSYNC));
        regio::write_bit(&mut self.bus, control.vsync_polarity, flags.contains(ModeFlags::NVSYNC));
    }
}

impl<B: RegisterBus + Delay> Device<B> {
    /// Pick and program the nearest pixel clock for `pipe`.
    pub fn synthesize_pll(&mut self, pipe: Pipe, target_hz: u32) {
        pll::synthesize(&mut self.bus, self.gen, pipe, target_hz);
    }

    /// Full ordered mode-set on one pipe.
    ///
    /// Blanks the pipe, programs timing, clock, FIFO, the optional
    /// scaling step and polarity, then opens scanout again. The pipe
    /// stays blanked if any step refuses, so a failed call never leaves
    /// partial timing on the screen.
    pub fn apply_mode(
        &mut self,
        pipe: Pipe,
        mode: &DisplayMode,
        fb: &FramebufferLayout,
        mem: MemoryTier,
        scaling: Option<ScaleRequest<'_>>,
    ) -> Result<(), Error> {
        log::debug!(
            "apply_mode: pipe {} {}x{}@{} clock {} kHz",
            pipe.index(),
            mode.hdisplay,
            mode.vdisplay,
            mode.refresh,
            mode.clock_khz
        );

        self.blank_pipe(pipe);
        self.program_timing(pipe, mode);
        self.synthesize_pll(pipe, mode.clock_hz());
        self.tune_fifo(pipe, mode, fb.depth, mem);
        if let Some(request) = scaling {
            self.program_scaling(request.source, mode, request.kind)?;
        }
        self.set_sync_polarity(mode.flags);
        self.bus.delay_ms(PANEL_POWER_MS);
        self.unblank_pipe(pipe);
        Ok(())
    }
}
