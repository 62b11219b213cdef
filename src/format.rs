// Copyright 2025 The ChromiumOS Authors
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

//! Pixel bus-format negotiation for the GVI transmitter.

use serde::Deserialize;
use serde::Serialize;

/// Pixel encodings a downstream panel can advertise on its LVDS bus.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum BusFormat {
    /// 18-bit RGB666, JEIDA packing.
    Jeida18,
    /// 24-bit RGB888, JEIDA packing.
    Jeida24,
    /// 24-bit RGB888, VESA (SPWG) packing.
    Vesa24,
    /// 30-bit RGB101010, VESA packing. Some panels advertise it, but the
    /// transmitter's encoding field cannot express it.
    Vesa30,
}

/// Encodings the transmitter's format-select field can express.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum FormatCode {
    Vesa24 = 0,
    Jeida24 = 1,
    Jeida18 = 2,
    Vesa18 = 3,
}

/// Picks the transmitter format code for a panel's advertised bus formats.
///
/// `advertised` is in the panel's own preference order and only the first
/// entry counts. A panel that advertises nothing gets 24-bit VESA.
pub fn resolve_format(advertised: &[BusFormat]) -> FormatCode {
    let format = advertised.first().copied().unwrap_or(BusFormat::Vesa24);

    // Every packing currently selects the power-on default encoding.
    // TODO: confirm the JEIDA select values against hardware and fill in
    // the table.
    match format {
        BusFormat::Jeida18 => FormatCode::Vesa24,
        BusFormat::Jeida24 => FormatCode::Vesa24,
        BusFormat::Vesa24 => FormatCode::Vesa24,
        _ => FormatCode::Vesa24,
    }
}
