// Copyright 2025 The ChromiumOS Authors
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

//! Host-facing display-bridge interface.

use remain::sorted;
use serde::Deserialize;
use serde::Serialize;
use thiserror::Error as ThisError;

use crate::format::BusFormat;

#[sorted]
#[derive(ThisError, Debug)]
pub enum Error {
    #[error("failed to enable pixel clock: {0:#}")]
    ClockEnable(anyhow::Error),
    /// The panel driver has not bound yet; retry once it shows up.
    #[error("panel is not attached yet")]
    PanelDeferred,
    #[error("failed to disable panel: {0:#}")]
    PanelDisable(anyhow::Error),
    #[error("failed to enable panel: {0:#}")]
    PanelEnable(anyhow::Error),
    #[error("failed to prepare panel: {0:#}")]
    PanelPrepare(anyhow::Error),
    #[error("failed to unprepare panel: {0:#}")]
    PanelUnprepare(anyhow::Error),
    #[error("failed to write transmitter control register: {0:#}")]
    RegisterWrite(anyhow::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

/// Whether a panel is present on the connector.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ConnectorStatus {
    Connected,
    Disconnected,
}

/// One display timing advertised by the panel.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct DisplayMode {
    pub hactive: u32,
    pub vactive: u32,
    /// Pixel clock in kHz.
    pub clock_khz: u32,
}

/// Interface the host graphics stack holds a display bridge behind.
///
/// Calls arrive serialized from the host's mode-setting control flow; the
/// `&mut self` receivers rely on that exclusivity. A host with concurrent
/// callers wraps the instance in a mutex.
pub trait DisplayBridge {
    /// Confirms the bridge is ready for use by the host.
    fn attach(&mut self) -> Result<()>;

    /// Records the negotiated display mode and the panel's advertised bus
    /// formats for the next enable.
    fn mode_set(&mut self, mode: &DisplayMode, bus_formats: &[BusFormat]);

    /// Powers the transmitter and the panel up.
    fn enable(&mut self) -> Result<()>;

    /// Powers the panel and the transmitter down.
    fn disable(&mut self) -> Result<()>;

    /// Reports whether a panel is present.
    fn detect(&self) -> ConnectorStatus {
        ConnectorStatus::Connected
    }

    /// Display timings advertised by the downstream panel.
    fn modes(&self) -> Vec<DisplayMode>;

    /// Label for logs and diagnostics.
    fn debug_label(&self) -> String;
}
