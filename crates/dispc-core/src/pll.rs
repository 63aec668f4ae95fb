//! PLL frequency synthesizer.
//!
//! The pixel clock comes from an integer multiply/divide/shift of the
//! fixed 14.31818 MHz reference. Each generation ships a table of
//! usable divider settings; synthesis is a nearest-match scan over that
//! table followed by the divider programming sequence.
//!
//! The hardware sequence is order-sensitive and runs to completion in
//! one call: soft-reset the clock generator, gate the pipe's divider
//! clock, write the divider bytes low byte first, ungate, release the
//! reset, then clear the residual sync-polarity bits on the shared sync
//! control register to latch the new clock. Callers never sequence the
//! steps themselves.

use dispc_hal::{Delay, RegisterBus};

use crate::chips::{ChipGeneration, PllEntry, PllFormat};
use crate::mode::Pipe;
use crate::regio;

/// Reference crystal frequency, Hz.
pub const REF_FREQ_HZ: u32 = 14_318_180;

/// Settle time after releasing the clock-generator reset.
const SETTLE_MS: u32 = 20;

/// Output frequency of a divider setting, Hz.
///
/// Integer division of the reference happens first; the hardware
/// truncates the same way.
pub fn output_freq(entry: &PllEntry) -> u32 {
    let base = u64::from(REF_FREQ_HZ / u32::from(entry.divisor)) * u64::from(entry.multiplier);
    (base >> entry.shift) as u32
}

/// Index of the table entry whose output is nearest `target_hz`.
///
/// Ties resolve to the lowest index, so the scan is deterministic for
/// any table ordering. `entries` must be non-empty.
pub fn best_match(entries: &[PllEntry], target_hz: u32) -> usize {
    let mut best = 0;
    let mut best_delta = u32::MAX;
    for (i, entry) in entries.iter().enumerate() {
        let delta = output_freq(entry).abs_diff(target_hz);
        if delta < best_delta {
            best = i;
            best_delta = delta;
        }
    }
    best
}

/// Pack an entry into the generation's divider-register layout.
pub fn encode(format: PllFormat, entry: &PllEntry) -> u32 {
    let mult = u32::from(entry.multiplier);
    let div = u32::from(entry.divisor);
    let shift = u32::from(entry.shift);
    match format {
        PllFormat::MulShiftDiv16 => mult << 8 | shift << 6 | div,
        PllFormat::BiasedDivShiftMul24 => (div - 2) << 16 | shift << 10 | (mult - 2),
        PllFormat::DivShiftMul24 => div << 16 | shift << 10 | mult,
    }
}

/// Pick the nearest divider setting for `target_hz` and program it.
pub fn synthesize<B: RegisterBus + Delay>(
    bus: &mut B,
    gen: ChipGeneration,
    pipe: Pipe,
    target_hz: u32,
) {
    let tables = gen.tables();
    let pll = &tables.pll;
    let control = tables.control;

    let index = best_match(pll.entries, target_hz);
    let entry = &pll.entries[index];
    log::debug!(
        "pll: pipe {} target {} Hz -> entry {} ({} Hz)",
        pipe.index(),
        target_hz,
        index,
        output_freq(entry)
    );

    let encoded = encode(pll.format, entry);

    regio::write_bit(bus, control.pll_reset, true);
    regio::write_bit(bus, control.clock_enable[pipe.index()], false);

    // Divider bytes are full registers, written low byte first.
    for (i, &reg) in pll.divider_regs[pipe.index()].iter().enumerate() {
        bus.write(dispc_hal::RegPort::Seq, reg, (encoded >> (8 * i)) as u8);
    }

    regio::write_bit(bus, control.clock_enable[pipe.index()], true);
    regio::write_bit(bus, control.pll_reset, false);
    bus.delay_ms(SETTLE_MS);

    // Stale polarity bits hold off the latch; the caller reprograms the
    // mode's real polarity afterwards.
    regio::write_bit(bus, control.hsync_polarity, false);
    regio::write_bit(bus, control.vsync_polarity, false);
}
