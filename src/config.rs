// Copyright 2025 The ChromiumOS Authors
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

//! Per-instance bridge configuration.

use serde::Deserialize;
use serde::Serialize;
use serde_keyvalue::FromKeyValues;

/// Lane layout of the transmitter link.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ChannelMode {
    /// One data channel carries every pixel.
    Single,
    /// Pixels alternate across two channels to halve the per-channel clock
    /// rate. The downstream side then expects an inverted pixel clock.
    Double,
}

/// Host-supplied configuration for one GVI bridge instance, fixed for the
/// life of the bridge.
///
/// Parsable from a key-value option string, e.g. `division-mode=true`.
#[derive(Clone, Debug, Default, Deserialize, Serialize, FromKeyValues, PartialEq, Eq)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct GviParameters {
    /// Split the link across both channels ("division" mode).
    #[serde(default)]
    pub division_mode: bool,
}

impl GviParameters {
    pub fn channel_mode(&self) -> ChannelMode {
        if self.division_mode {
            ChannelMode::Double
        } else {
            ChannelMode::Single
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_keyvalue::*;

    fn from_arg(options: &str) -> std::result::Result<GviParameters, ParseError> {
        from_key_values(options)
    }

    #[test]
    fn params_from_key_values() {
        let params = from_arg("").unwrap();
        assert_eq!(
            params,
            GviParameters {
                division_mode: false,
            }
        );

        let params = from_arg("division-mode=true").unwrap();
        assert_eq!(
            params,
            GviParameters {
                division_mode: true,
            }
        );

        // Bare boolean flag form.
        let params = from_arg("division-mode").unwrap();
        assert!(params.division_mode);

        from_arg("lane-count=2").expect_err("unknown field accepted");
    }

    #[test]
    fn channel_mode_follows_division_mode() {
        assert_eq!(
            GviParameters::default().channel_mode(),
            ChannelMode::Single
        );
        assert_eq!(
            GviParameters {
                division_mode: true,
            }
            .channel_mode(),
            ChannelMode::Double
        );
    }
}
