//! Tests for the bitfield register table engine: value splitting,
//! masking, truncation, and literal preset writes.

mod common;

use common::MockBus;
use dispc_core::regio::{self, RegBit, RegisterField, RegisterPreset};
use dispc_core::RegPort::{Crt, Seq};

/// A 12-bit value scattered over three registers on both port pairs.
fn scattered_list() -> [RegisterField; 3] {
    [
        RegisterField::new(Seq, 0x10, 0, 3),
        RegisterField::new(Crt, 0x20, 2, 6),
        RegisterField::new(Seq, 0x11, 5, 7),
    ]
}

// ============================================================================
// write_value
// ============================================================================

mod write_value_tests {
    use super::*;

    #[test]
    fn round_trip_reproduces_value() {
        let mut bus = MockBus::new();
        let list = scattered_list();

        regio::write_value(&mut bus, &list, 0xABC);

        assert_eq!(bus.read_back(&list), 0xABC);
    }

    #[test]
    fn slices_land_at_documented_positions() {
        let mut bus = MockBus::new();
        let list = scattered_list();

        // 0xABC = low nibble 0xC, middle five bits 0b01011, top three 0b101.
        regio::write_value(&mut bus, &list, 0xABC);

        assert_eq!(bus.reg(Seq, 0x10), 0x0C);
        assert_eq!(bus.reg(Crt, 0x20), 0x0B << 2);
        assert_eq!(bus.reg(Seq, 0x11), 0b101 << 5);
    }

    #[test]
    fn bits_outside_fields_are_preserved() {
        let mut bus = MockBus::new();
        let list = scattered_list();
        bus.set_reg(Seq, 0x10, 0xF0);
        bus.set_reg(Crt, 0x20, 0x81);

        regio::write_value(&mut bus, &list, 0xABC);

        assert_eq!(bus.reg(Seq, 0x10), 0xF0 | 0x0C);
        assert_eq!(bus.reg(Crt, 0x20), 0x81 | (0x0B << 2));
    }

    #[test]
    fn excess_high_bits_are_dropped() {
        let mut bus = MockBus::new();
        let list = scattered_list();

        // 16 significant bits into a 12-bit list: the top nibble is
        // silently discarded.
        regio::write_value(&mut bus, &list, 0xFABC);

        assert_eq!(bus.read_back(&list), 0x0ABC);
    }

    #[test]
    fn cursor_follows_list_order_not_register_order() {
        let mut bus = MockBus::new();
        // Same registers as the scattered list, reversed: the first
        // field now consumes the low bits.
        let reversed = [
            RegisterField::new(Seq, 0x11, 5, 7),
            RegisterField::new(Crt, 0x20, 2, 6),
            RegisterField::new(Seq, 0x10, 0, 3),
        ];

        regio::write_value(&mut bus, &reversed, 0xABC);

        assert_eq!(bus.reg(Seq, 0x11), ((0xABCu32 & 0x7) << 5) as u8);
        assert_eq!(bus.reg(Crt, 0x20), (((0xABCu32 >> 3) & 0x1F) << 2) as u8);
        assert_eq!(bus.reg(Seq, 0x10), ((0xABCu32 >> 8) & 0xF) as u8);
    }

    #[test]
    fn disjoint_slices_of_one_register_coexist() {
        let mut bus = MockBus::new();
        // 7-bit value split as low six bits plus bit 7 of one register,
        // the layout the FIFO threshold uses.
        let list = [
            RegisterField::new(Seq, 0x16, 0, 5),
            RegisterField::new(Seq, 0x16, 7, 7),
        ];

        regio::write_value(&mut bus, &list, 82);

        assert_eq!(bus.reg(Seq, 0x16), 0x80 | (82 & 0x3F));
        assert_eq!(bus.read_back(&list), 82);
    }
}

// ============================================================================
// write_presets / write_bit
// ============================================================================

mod preset_tests {
    use super::*;

    #[test]
    fn presets_write_masked_literals() {
        let mut bus = MockBus::new();
        bus.set_reg(Crt, 0x30, 0xFF);

        let presets = [
            RegisterPreset::new(Crt, 0x30, 0x0F, 0x05),
            RegisterPreset::new(Seq, 0x12, 0xFF, 0xAA),
        ];
        regio::write_presets(&mut bus, &presets);

        assert_eq!(bus.reg(Crt, 0x30), 0xF5);
        assert_eq!(bus.reg(Seq, 0x12), 0xAA);
    }

    #[test]
    fn write_bit_touches_only_its_bit() {
        let mut bus = MockBus::new();
        bus.set_reg(Seq, 0x1B, 0x41);
        let loc = RegBit::new(Seq, 0x1B, 1);

        regio::write_bit(&mut bus, loc, true);
        assert_eq!(bus.reg(Seq, 0x1B), 0x43);

        regio::write_bit(&mut bus, loc, false);
        assert_eq!(bus.reg(Seq, 0x1B), 0x41);
    }
}

// ============================================================================
// list metadata
// ============================================================================

mod width_tests {
    use super::*;

    #[test]
    fn list_width_sums_slice_widths() {
        assert_eq!(regio::list_width(&scattered_list()), 12);
    }

    #[test]
    fn field_mask_covers_its_range() {
        let field = RegisterField::new(Crt, 0x03, 0, 4);
        assert_eq!(field.width(), 5);
        assert_eq!(field.mask(), 0x1F);

        let high = RegisterField::new(Crt, 0x05, 7, 7);
        assert_eq!(high.width(), 1);
        assert_eq!(high.mask(), 0x80);
    }
}
