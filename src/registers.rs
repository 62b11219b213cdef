// Copyright 2025 The ChromiumOS Authors
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

//! Register map and control-word composition for the GVI transmitter
//! block.
//!
//! Registers are 32 bits wide at a 4-byte stride. The transmitter control
//! register uses write-mask semantics: bits \[31:16\] gate writes to the
//! matching bits \[15:0\], so a field update carries both halves and
//! untouched fields keep their value.

use crate::config::ChannelMode;
use crate::format::FormatCode;

// Register offsets
pub const GVI_SYS_CTRL0: u32 = 0x0000;
pub const GVI_SYS_CTRL1: u32 = 0x0004;
pub const GVI_SYS_CTRL2: u32 = 0x0008;
pub const GVI_SYS_CTRL3: u32 = 0x000c;
pub const GVI_VERSION: u32 = 0x0010;
pub const GVI_SYS_RST: u32 = 0x0014;
pub const GVI_LINE_FLAG: u32 = 0x0018;
pub const GVI_STATUS: u32 = 0x001c;
pub const GVI_PHY_CTRL0: u32 = 0x0020;
pub const GVI_PHY_CTRL1: u32 = 0x0024;
pub const GVI_PHY_CTRL2: u32 = 0x0028;
// Timeout knobs for the chip's own lock watchdogs; configuration surface
// only, never driven by this core.
pub const GVI_PLL_LOCK_TIMEOUT: u32 = 0x0030;
pub const GVI_HTPDN_TIMEOUT: u32 = 0x0034;
pub const GVI_LOCKN_TIMEOUT: u32 = 0x0038;
pub const GVI_WAIT_LOCKN: u32 = 0x003c;
pub const GVI_WAIT_HTPDN: u32 = 0x0040;
pub const GVI_INTR_EN: u32 = 0x0050;
pub const GVI_INTR_CLR: u32 = 0x0054;
pub const GVI_INTR_RAW_STATUS: u32 = 0x0058;
pub const GVI_INTR_STATUS: u32 = 0x005c;

/// Transmitter control register. Lives in the companion chip's shared
/// register file rather than the GVI block itself.
pub const GVI_LVDS_CON: u32 = 0x0084;

/// Builds a write-mask field update: `value` lands in the bits at `shift`,
/// the high half carries the write-enable mask for exactly those bits.
const fn update(value: u32, mask: u32, shift: u32) -> u32 {
    ((value & mask) << shift) | (mask << (shift + 16))
}

// LVDS_CON fields
pub const LVDS_CON_CH0_POWER_UP: u32 = update(1, 0x1, 0);
pub const LVDS_CON_CH0_POWER_DOWN: u32 = update(0, 0x1, 0);
pub const LVDS_CON_CH1_POWER_UP: u32 = update(1, 0x1, 1);
pub const LVDS_CON_CH1_POWER_DOWN: u32 = update(0, 0x1, 1);
pub const LVDS_CON_CBG_POWER_UP: u32 = update(1, 0x1, 2);
pub const LVDS_CON_CBG_POWER_DOWN: u32 = update(0, 0x1, 2);
pub const LVDS_CON_PLL_POWER_UP: u32 = update(1, 0x1, 3);
pub const LVDS_CON_PLL_POWER_DOWN: u32 = update(0, 0x1, 3);
pub const LVDS_CON_CH0TTL_DISABLE: u32 = update(1, 0x1, 4);
pub const LVDS_CON_CH1TTL_DISABLE: u32 = update(1, 0x1, 5);
pub const LVDS_CON_CHASEL_SINGLE_CHANNEL: u32 = update(0, 0x1, 8);
pub const LVDS_CON_CHASEL_DOUBLE_CHANNEL: u32 = update(1, 0x1, 8);
pub const LVDS_CON_DCLK_INV: u32 = update(1, 0x1, 9);

/// Format-select field of `LVDS_CON`.
pub const fn lvds_con_select(code: FormatCode) -> u32 {
    update(code as u32, 0x3, 6)
}

/// Control word that powers the transmitter up for the given encoding and
/// lane layout.
///
/// Channel 0 is always powered while transmitting; channel 1 and the
/// inverted pixel clock only come up in double-channel mode.
pub fn enable_word(code: FormatCode, channel_mode: ChannelMode) -> u32 {
    let mut value = LVDS_CON_CH0TTL_DISABLE
        | LVDS_CON_CH1TTL_DISABLE
        | LVDS_CON_CH0_POWER_UP
        | LVDS_CON_CBG_POWER_UP
        | LVDS_CON_PLL_POWER_UP
        | lvds_con_select(code);

    match channel_mode {
        ChannelMode::Double => {
            value |=
                LVDS_CON_CH1_POWER_UP | LVDS_CON_DCLK_INV | LVDS_CON_CHASEL_DOUBLE_CHANNEL;
        }
        ChannelMode::Single => {
            value |= LVDS_CON_CH1_POWER_DOWN | LVDS_CON_CHASEL_SINGLE_CHANNEL;
        }
    }

    value
}

/// Control word that powers every transmitter block down. Channel select
/// carries no meaning in this state and is left untouched.
pub fn power_down_word() -> u32 {
    LVDS_CON_CH0_POWER_DOWN
        | LVDS_CON_CH1_POWER_DOWN
        | LVDS_CON_CBG_POWER_DOWN
        | LVDS_CON_PLL_POWER_DOWN
}

#[cfg(test)]
mod tests {
    use super::*;

    // A field update is present when its write mask is set and its value
    // bits match exactly; value-0 updates are bit-subsets of their value-1
    // counterparts, so a plain bit test is not enough.
    fn has(word: u32, field: u32) -> bool {
        let mask = field >> 16;
        word & (mask << 16) == mask << 16 && word & mask == field & mask
    }

    #[test]
    fn single_channel_word() {
        let word = enable_word(FormatCode::Vesa24, ChannelMode::Single);
        assert!(has(word, LVDS_CON_CH1_POWER_DOWN));
        assert!(has(word, LVDS_CON_CHASEL_SINGLE_CHANNEL));
        assert!(!has(word, LVDS_CON_CH1_POWER_UP));
        assert!(!has(word, LVDS_CON_CHASEL_DOUBLE_CHANNEL));
        assert!(!has(word, LVDS_CON_DCLK_INV));
        assert!(has(word, LVDS_CON_CH0_POWER_UP));
    }

    #[test]
    fn double_channel_word() {
        let word = enable_word(FormatCode::Vesa24, ChannelMode::Double);
        assert!(has(word, LVDS_CON_CH1_POWER_UP));
        assert!(has(word, LVDS_CON_CHASEL_DOUBLE_CHANNEL));
        assert!(has(word, LVDS_CON_DCLK_INV));
        assert!(!has(word, LVDS_CON_CH1_POWER_DOWN));
        assert!(!has(word, LVDS_CON_CHASEL_SINGLE_CHANNEL));
        assert!(has(word, LVDS_CON_CH0_POWER_UP));
    }

    #[test]
    fn select_field_distinguishes_codes() {
        let codes = [
            FormatCode::Vesa24,
            FormatCode::Jeida24,
            FormatCode::Jeida18,
            FormatCode::Vesa18,
        ];
        for (i, a) in codes.iter().enumerate() {
            for b in &codes[i + 1..] {
                assert_ne!(lvds_con_select(*a), lvds_con_select(*b));
            }
        }
    }

    #[test]
    fn power_down_clears_every_block() {
        let word = power_down_word();
        assert!(has(word, LVDS_CON_CH0_POWER_DOWN));
        assert!(has(word, LVDS_CON_CH1_POWER_DOWN));
        assert!(has(word, LVDS_CON_CBG_POWER_DOWN));
        assert!(has(word, LVDS_CON_PLL_POWER_DOWN));
        // Only write-enable masks, no value bits.
        assert_eq!(word & 0xffff, 0);
    }
}
