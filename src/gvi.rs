// Copyright 2025 The ChromiumOS Authors
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

//! Power sequencing for one GVI transmitter instance.

use anyhow::Context;
use log::debug;
use log::error;
use serde::Deserialize;
use serde::Serialize;

use crate::bridge::DisplayBridge;
use crate::bridge::DisplayMode;
use crate::bridge::Error;
use crate::bridge::Result;
use crate::bus::RegisterBus;
use crate::clock::PixelClock;
use crate::config::ChannelMode;
use crate::config::GviParameters;
use crate::format::BusFormat;
use crate::format::resolve_format;
use crate::panel::Panel;
use crate::registers;
use crate::registers::GVI_LVDS_CON;

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
enum State {
    Disabled,
    Enabled,
}

/// Model state carried across host suspend/resume.
#[derive(Serialize, Deserialize)]
struct GviBridgeSnapshot {
    state: State,
    mode: Option<DisplayMode>,
    bus_formats: Vec<BusFormat>,
}

/// Power sequencer for a GVI transmitter.
///
/// Owns the transmitter control register and orders every transition so
/// that the lane is electrically stable before the panel starts driving
/// pixels, and the panel has stopped before the lane or its clock goes
/// away. The control word is recomputed on every enable; nothing is cached
/// across a disable/enable boundary because the panel may renegotiate its
/// format between connections.
pub struct GviBridge {
    channel_mode: ChannelMode,
    clock: Box<dyn PixelClock>,
    regmap: Box<dyn RegisterBus>,
    panel: Box<dyn Panel>,
    mode: Option<DisplayMode>,
    bus_formats: Vec<BusFormat>,
    state: State,
}

impl GviBridge {
    /// Builds a bridge instance.
    ///
    /// `panel` is `None` while the panel driver has not bound yet; that
    /// surfaces as [`Error::PanelDeferred`] so the host can retry once it
    /// shows up.
    pub fn new(
        params: &GviParameters,
        clock: Box<dyn PixelClock>,
        regmap: Box<dyn RegisterBus>,
        panel: Option<Box<dyn Panel>>,
    ) -> Result<GviBridge> {
        let panel = panel.ok_or(Error::PanelDeferred)?;
        Ok(GviBridge {
            channel_mode: params.channel_mode(),
            clock,
            regmap,
            panel,
            mode: None,
            bus_formats: Vec::new(),
            state: State::Disabled,
        })
    }

    /// Powers the transmitter down and releases the clock, best effort.
    /// Used to unwind a partially completed enable.
    fn power_down(&mut self) {
        if let Err(e) = self
            .regmap
            .write(GVI_LVDS_CON, registers::power_down_word())
        {
            error!("{}: power-down write failed: {:#}", self.debug_label(), e);
        }
        self.clock.disable_unprepare();
    }

    /// Saves the device-model state for host suspend.
    pub fn snapshot(&self) -> anyhow::Result<serde_json::Value> {
        serde_json::to_value(GviBridgeSnapshot {
            state: self.state,
            mode: self.mode,
            bus_formats: self.bus_formats.clone(),
        })
        .context("error serializing")
    }

    /// Restores state saved by [`GviBridge::snapshot`]. Only the tracked
    /// model state is restored; the hardware is reprogrammed on the next
    /// transition.
    pub fn restore(&mut self, data: serde_json::Value) -> anyhow::Result<()> {
        let snap: GviBridgeSnapshot =
            serde_json::from_value(data).context("error deserializing")?;
        self.state = snap.state;
        self.mode = snap.mode;
        self.bus_formats = snap.bus_formats;
        Ok(())
    }
}

impl DisplayBridge for GviBridge {
    fn attach(&mut self) -> Result<()> {
        // Panel presence was settled at construction time; nothing to
        // negotiate until the first mode_set.
        Ok(())
    }

    fn mode_set(&mut self, mode: &DisplayMode, bus_formats: &[BusFormat]) {
        self.mode = Some(*mode);
        self.bus_formats = bus_formats.to_vec();
    }

    fn enable(&mut self) -> Result<()> {
        if self.state == State::Enabled {
            debug!("{}: enable while already enabled", self.debug_label());
            return Ok(());
        }

        // The transmitter must be stable before the panel is told to drive
        // pixels, so the clock and control register come first. A clock
        // that will not run aborts the transition before any register is
        // touched.
        self.clock.prepare_enable().map_err(Error::ClockEnable)?;

        let code = resolve_format(&self.bus_formats);
        let value = registers::enable_word(code, self.channel_mode);
        if let Err(e) = self.regmap.write(GVI_LVDS_CON, value) {
            self.clock.disable_unprepare();
            return Err(Error::RegisterWrite(e));
        }

        if let Err(e) = self.panel.prepare() {
            self.power_down();
            return Err(Error::PanelPrepare(e));
        }
        if let Err(e) = self.panel.enable() {
            if let Err(unprep) = self.panel.unprepare() {
                error!(
                    "{}: panel unprepare after failed enable: {:#}",
                    self.debug_label(),
                    unprep
                );
            }
            self.power_down();
            return Err(Error::PanelEnable(e));
        }

        self.state = State::Enabled;
        Ok(())
    }

    fn disable(&mut self) -> Result<()> {
        if self.state == State::Disabled {
            debug!("{}: disable while already disabled", self.debug_label());
            return Ok(());
        }

        // The panel must stop driving before the lane and its clock are
        // removed. A failed step leaves the state Enabled so the host can
        // retry the teardown.
        self.panel.disable().map_err(Error::PanelDisable)?;
        self.panel.unprepare().map_err(Error::PanelUnprepare)?;

        self.regmap
            .write(GVI_LVDS_CON, registers::power_down_word())
            .map_err(Error::RegisterWrite)?;
        self.clock.disable_unprepare();

        self.state = State::Disabled;
        Ok(())
    }

    fn modes(&self) -> Vec<DisplayMode> {
        self.panel.modes()
    }

    fn debug_label(&self) -> String {
        "gvi-bridge".to_owned()
    }
}
