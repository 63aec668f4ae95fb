//! PLL synthesizer tests: best-match selection, the three divider
//! encodings, and the ordered programming sequence.

mod common;

use common::MockBus;
use dispc_core::chips::{PllEntry, PllFormat};
use dispc_core::RegPort::Seq;
use dispc_core::{pll, ChipGeneration, Pipe};

// ============================================================================
// Best-match selection
// ============================================================================

mod best_match_tests {
    use super::*;

    /// No table entry may beat the chosen one, and any entry as good
    /// must sit at a higher index.
    fn assert_best(entries: &[PllEntry], target_hz: u32) {
        let chosen = pll::best_match(entries, target_hz);
        let chosen_delta = pll::output_freq(&entries[chosen]).abs_diff(target_hz);
        for (i, entry) in entries.iter().enumerate() {
            let delta = pll::output_freq(entry).abs_diff(target_hz);
            assert!(
                delta >= chosen_delta,
                "entry {i} is nearer {target_hz} Hz than chosen entry {chosen}"
            );
            if i < chosen {
                assert!(delta > chosen_delta, "tie should have resolved to entry {i}");
            }
        }
    }

    #[test]
    fn nearest_entry_wins_for_all_generations() {
        for gen in [ChipGeneration::Dc52, ChipGeneration::Dc62, ChipGeneration::Dc72] {
            let entries = gen.tables().pll.entries;
            for entry in entries {
                let freq = pll::output_freq(entry);
                for target in [freq, freq - 1, freq + 1, freq - 500_000, freq + 500_000] {
                    assert_best(entries, target);
                }
            }
            for target in (10_000_000..240_000_000).step_by(7_777_777) {
                assert_best(entries, target);
            }
        }
    }

    #[test]
    fn common_dot_clocks_hit_their_entries() {
        let entries = ChipGeneration::Dc62.tables().pll.entries;

        // 65 MHz (1024x768@60) picks multiplier 59 / divisor 13.
        let chosen = &entries[pll::best_match(entries, 65_000_000)];
        assert_eq!(*chosen, PllEntry::new(59, 13, 0));

        // 108 MHz (1280x1024@60) picks multiplier 83 / divisor 11.
        let chosen = &entries[pll::best_match(entries, 108_000_000)];
        assert_eq!(*chosen, PllEntry::new(83, 11, 0));
    }

    #[test]
    fn ties_resolve_to_the_lowest_index() {
        // Both entries synthesize exactly 31,499,996 Hz.
        let entries = [PllEntry::new(11, 5, 0), PllEntry::new(22, 10, 0)];
        assert_eq!(pll::output_freq(&entries[0]), pll::output_freq(&entries[1]));
        assert_eq!(pll::best_match(&entries, 31_500_000), 0);
    }

    #[test]
    fn output_freq_divides_before_multiplying() {
        // 14318180 / 13 truncates to 1101398 before the multiply, as
        // the hardware does.
        assert_eq!(pll::output_freq(&PllEntry::new(59, 13, 0)), 1_101_398 * 59);
    }

    #[test]
    fn shift_halves_the_output() {
        let base = pll::output_freq(&PllEntry::new(11, 5, 0));
        assert_eq!(pll::output_freq(&PllEntry::new(11, 5, 1)), base / 2);
    }
}

// ============================================================================
// Divider encodings
// ============================================================================

mod encoding_tests {
    use super::*;

    #[test]
    fn sixteen_bit_encoding_packs_mul_shift_div() {
        let entry = PllEntry::new(59, 13, 2);
        assert_eq!(pll::encode(PllFormat::MulShiftDiv16, &entry), 59 << 8 | 2 << 6 | 13);
    }

    #[test]
    fn biased_encoding_subtracts_two_from_both_dividers() {
        let entry = PllEntry::new(59, 13, 0);
        assert_eq!(pll::encode(PllFormat::BiasedDivShiftMul24, &entry), 11 << 16 | 57);
    }

    #[test]
    fn unbiased_encoding_keeps_raw_values() {
        let entry = PllEntry::new(59, 13, 1);
        assert_eq!(pll::encode(PllFormat::DivShiftMul24, &entry), 13 << 16 | 1 << 10 | 59);
    }
}

// ============================================================================
// Programming sequence
// ============================================================================

mod sequence_tests {
    use super::*;

    #[test]
    fn sequence_order_is_fixed() {
        let mut bus = MockBus::new();
        pll::synthesize(&mut bus, ChipGeneration::Dc62, Pipe::Primary, 65_000_000);

        // Encoded {59, 13, 0} biased: 0x0B0039, low byte first.
        let expected = [
            (Seq, 0x40, 0x02), // clock generator into soft reset
            (Seq, 0x1B, 0x00), // primary divider clock gated
            (Seq, 0x44, 0x39),
            (Seq, 0x45, 0x00),
            (Seq, 0x46, 0x0B),
            (Seq, 0x1B, 0x02), // clock ungated
            (Seq, 0x40, 0x00), // reset released
            (Seq, 0x2E, 0x00), // residual polarity cleared to latch
            (Seq, 0x2E, 0x00),
        ];
        assert_eq!(bus.writes(), expected);
    }

    #[test]
    fn settle_delay_follows_reset_release() {
        let mut bus = MockBus::new();
        pll::synthesize(&mut bus, ChipGeneration::Dc62, Pipe::Primary, 65_000_000);
        assert_eq!(bus.delays().len(), 1);
    }

    #[test]
    fn secondary_pipe_uses_its_own_registers_and_enable_bit() {
        let mut bus = MockBus::new();
        pll::synthesize(&mut bus, ChipGeneration::Dc62, Pipe::Secondary, 65_000_000);

        // Divider bytes land at 0x4A..0x4C, the enable bit is SR1B[4].
        assert_eq!(bus.last_write_to(Seq, 0x4A), Some(0x39));
        assert_eq!(bus.last_write_to(Seq, 0x4B), Some(0x00));
        assert_eq!(bus.last_write_to(Seq, 0x4C), Some(0x0B));
        assert!(bus.writes_to(Seq, 0x44).is_empty());
        assert_eq!(bus.writes_to(Seq, 0x1B), vec![0x00, 0x10]);
    }

    #[test]
    fn early_generation_writes_two_divider_bytes() {
        let mut bus = MockBus::new();
        pll::synthesize(&mut bus, ChipGeneration::Dc52, Pipe::Primary, 65_000_000);

        // {59, 13, 0} in the 16-bit encoding: 0x3B0D at 0x46/0x47.
        assert_eq!(bus.last_write_to(Seq, 0x46), Some(0x0D));
        assert_eq!(bus.last_write_to(Seq, 0x47), Some(0x3B));
    }

    #[test]
    fn enable_bits_of_the_other_pipe_survive() {
        let mut bus = MockBus::new();
        // Secondary clock already running.
        bus.set_reg(Seq, 0x1B, 0x10);

        pll::synthesize(&mut bus, ChipGeneration::Dc62, Pipe::Primary, 65_000_000);

        assert_eq!(bus.reg(Seq, 0x1B), 0x12);
    }
}
