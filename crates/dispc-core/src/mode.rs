//! Display mode and framebuffer descriptors handed in by the
//! mode-configuration subsystem.

use bitflags::bitflags;

bitflags! {
    /// Mode attribute flags.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct ModeFlags: u8 {
        /// Horizontal sync pulse is negative-going.
        const NHSYNC = 1 << 0;
        /// Vertical sync pulse is negative-going.
        const NVSYNC = 1 << 1;
        /// Interlaced scan.
        const INTERLACE = 1 << 2;
    }
}

/// Full timing description of one display mode.
///
/// All edge positions are in pixels (horizontal) or lines (vertical),
/// measured from the start of active display, as delivered by the mode
/// database. The timing programmer applies the per-pipe register
/// formulas; nothing here is register-encoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayMode {
    /// Pixel clock in kHz.
    pub clock_khz: u32,
    pub hdisplay: u32,
    pub hblank_start: u32,
    pub hblank_end: u32,
    pub hsync_start: u32,
    pub hsync_end: u32,
    pub htotal: u32,
    pub vdisplay: u32,
    pub vblank_start: u32,
    pub vblank_end: u32,
    pub vsync_start: u32,
    pub vsync_end: u32,
    pub vtotal: u32,
    /// Nominal refresh rate in Hz.
    pub refresh: u32,
    pub flags: ModeFlags,
}

impl DisplayMode {
    /// Build a mode from active size and refresh with estimated blanking.
    ///
    /// The estimates are good enough for bring-up on a tolerant monitor;
    /// production callers hand in real timings from their mode database.
    pub fn with_estimated_blanking(width: u32, height: u32, refresh: u32) -> Self {
        let hdisplay = width;
        let vdisplay = height;

        let htotal = hdisplay + hdisplay / 4;
        let vtotal = vdisplay + vdisplay / 20;

        let hsync_start = hdisplay + hdisplay / 16;
        let hsync_end = hsync_start + hdisplay / 10;
        let vsync_start = vdisplay + 3;
        let vsync_end = vsync_start + 4;

        let clock_khz = htotal * vtotal * refresh / 1000;

        Self {
            clock_khz,
            hdisplay,
            hblank_start: hdisplay,
            hblank_end: htotal,
            hsync_start,
            hsync_end,
            htotal,
            vdisplay,
            vblank_start: vdisplay,
            vblank_end: vtotal,
            vsync_start,
            vsync_end,
            vtotal,
            refresh,
            flags: ModeFlags::empty(),
        }
    }

    /// Target PLL frequency for this mode, in Hz.
    pub fn clock_hz(&self) -> u32 {
        self.clock_khz * 1000
    }
}

/// Framebuffer color depth, as it affects FIFO sizing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorDepth {
    Bpp8,
    Bpp16,
    Bpp32,
}

/// Memory-technology tier reported by the VRAM probe.
///
/// Slow memory cannot refill a deep FIFO in time at wide 32 bpp modes,
/// so the tuner selects a reduced row there.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemoryTier {
    Baseline,
    Fast,
}

/// Scanout layout of the framebuffer feeding a pipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FramebufferLayout {
    pub depth: ColorDepth,
    /// Bytes per scanline.
    pub pitch: u32,
}

/// One of the two independent display-timing generators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pipe {
    Primary,
    Secondary,
}

impl Pipe {
    pub fn from_index(index: u8) -> Option<Self> {
        match index {
            0 => Some(Pipe::Primary),
            1 => Some(Pipe::Secondary),
            _ => None,
        }
    }

    pub fn index(self) -> usize {
        match self {
            Pipe::Primary => 0,
            Pipe::Secondary => 1,
        }
    }
}
