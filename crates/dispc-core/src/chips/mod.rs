//! Chip generation tables.
//!
//! Every supported controller resolves to one [`ChipGeneration`], and
//! every generation is a bundle of immutable `'static` tables: timing
//! field lists, FIFO rows, the PLL table and its divider register
//! layout, and the fixed initialization presets. Supporting a new
//! generation means adding a variant and a table module; none of the
//! programming code grows a new branch.

mod common;
mod dc52;
mod dc62;
mod dc72;

use crate::regio::{RegBit, RegisterField, RegisterPreset};
use crate::Error;

/// PCI device id of the controller function, as the probe reports it.
///
/// Ids outside the known set do not resolve; the caller must refuse
/// the mode-set for them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChipId(pub u16);

impl ChipId {
    pub const DC520: ChipId = ChipId(0x0520);
    pub const DC525: ChipId = ChipId(0x0525);
    pub const DC620: ChipId = ChipId(0x0620);
    pub const DC625: ChipId = ChipId(0x0625);
    pub const DC720: ChipId = ChipId(0x0720);
}

/// The closed set of register-layout generations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChipGeneration {
    /// Early 16-bit era parts (DC520/DC525).
    Dc52,
    /// Mid-generation 32-bit capable parts (DC620/DC625).
    Dc62,
    /// Late parts with the widened timing fields (DC720).
    Dc72,
}

impl ChipGeneration {
    /// Look up the generation for a probed chip id.
    pub fn resolve(chip: ChipId) -> Result<Self, Error> {
        match chip.0 {
            0x0520 | 0x0525 => Ok(ChipGeneration::Dc52),
            0x0620 | 0x0625 => Ok(ChipGeneration::Dc62),
            0x0720 => Ok(ChipGeneration::Dc72),
            _ => Err(Error::UnsupportedDevice(chip)),
        }
    }

    /// The generation's constant tables.
    pub fn tables(self) -> &'static GenTables {
        match self {
            ChipGeneration::Dc52 => &dc52::TABLES,
            ChipGeneration::Dc62 => &dc62::TABLES,
            ChipGeneration::Dc72 => &dc72::TABLES,
        }
    }
}

/// Field lists for the twelve timing parameters of one pipe.
pub struct TimingParameterSet {
    pub htotal: &'static [RegisterField],
    pub hdisplay: &'static [RegisterField],
    pub hblank_start: &'static [RegisterField],
    pub hblank_end: &'static [RegisterField],
    pub hsync_start: &'static [RegisterField],
    pub hsync_end: &'static [RegisterField],
    pub vtotal: &'static [RegisterField],
    pub vdisplay: &'static [RegisterField],
    pub vblank_start: &'static [RegisterField],
    pub vblank_end: &'static [RegisterField],
    pub vsync_start: &'static [RegisterField],
    pub vsync_end: &'static [RegisterField],
}

/// One candidate divider setting.
///
/// Output frequency is `REF_FREQ_HZ / divisor * multiplier >> shift`
/// against the fixed 14.31818 MHz reference crystal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PllEntry {
    pub multiplier: u16,
    pub divisor: u8,
    pub shift: u8,
}

impl PllEntry {
    pub const fn new(multiplier: u16, divisor: u8, shift: u8) -> Self {
        Self { multiplier, divisor, shift }
    }
}

/// How a generation packs a [`PllEntry`] into its divider registers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PllFormat {
    /// `multiplier << 8 | shift << 6 | divisor`, two divider bytes.
    MulShiftDiv16,
    /// `(divisor - 2) << 16 | shift << 10 | (multiplier - 2)`, three.
    BiasedDivShiftMul24,
    /// As above without the `- 2` bias.
    DivShiftMul24,
}

/// A generation's clock-synthesis table and divider register layout.
pub struct PllTable {
    /// Ordered, non-empty candidate list.
    pub entries: &'static [PllEntry],
    pub format: PllFormat,
    /// Divider byte registers on the sequencer pair, low byte first,
    /// indexed by pipe.
    pub divider_regs: [&'static [u8]; 2],
}

/// FIFO depth/threshold row, in raw (unquantized) entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FifoRow {
    pub max_depth: u16,
    pub threshold: u16,
    pub high_threshold: u16,
}

impl FifoRow {
    pub const fn new(max_depth: u16, threshold: u16, high_threshold: u16) -> Self {
        Self { max_depth, threshold, high_threshold }
    }
}

/// FIFO tuning data for one pipe.
pub struct FifoBank {
    pub base: FifoRow,
    /// Row used when baseline memory cannot refill the full depth:
    /// 32 bpp and more than 1024 active columns.
    pub reduced: FifoRow,
    /// Display-queue expire counts by horizontal-resolution tier
    /// (≤1024, ≤1280, ≤1400, ≤1600, wider).
    pub expire: [u16; 5],
}

/// Register slices the quantized FIFO constants are written through.
pub struct FifoRegs {
    pub max_depth: &'static [RegisterField],
    pub threshold: &'static [RegisterField],
    pub high_threshold: &'static [RegisterField],
    pub expire: &'static [RegisterField],
}

/// Register locations for the scaling engine.
pub struct ScalingRegs {
    /// 12-bit horizontal factor, 4096 steps.
    pub hor_factor: &'static [RegisterField],
    /// 11-bit vertical factor, 2048 steps.
    pub ver_factor: &'static [RegisterField],
    pub hor_enable: RegBit,
    pub ver_enable: RegBit,
    /// Selects which timing set the shared secondary register bank
    /// currently represents: clear = destination, set = source.
    pub path_select: RegBit,
    /// Buffer-sharing workaround bit for downscales wider than 1024.
    pub buffer_share: RegBit,
}

/// The handful of genuinely shared control bits (spanning both pipes).
pub struct ControlRegs {
    /// Software clock-generator reset.
    pub pll_reset: RegBit,
    /// Per-pipe divider clock-enable bits.
    pub clock_enable: [RegBit; 2],
    pub hsync_polarity: RegBit,
    pub vsync_polarity: RegBit,
    /// Primary pipe scanout gate (screen-off when set).
    pub primary_blank: RegBit,
    /// Secondary channel enable.
    pub secondary_enable: RegBit,
    /// Simultaneous-display enable, set while both pipes scan out.
    pub simultaneous: RegBit,
}

/// Everything the programming code needs about one generation.
pub struct GenTables {
    /// Timing field lists, indexed by pipe.
    pub timing: [&'static TimingParameterSet; 2],
    /// FIFO tuning rows, indexed by pipe.
    pub fifo: [&'static FifoBank; 2],
    /// FIFO register slices, indexed by pipe.
    pub fifo_regs: [&'static FifoRegs; 2],
    pub pll: PllTable,
    pub scaling: &'static ScalingRegs,
    pub control: &'static ControlRegs,
    /// Fixed initialization presets applied once at device construction.
    pub init: &'static [RegisterPreset],
}
