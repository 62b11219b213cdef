// Copyright 2025 The ChromiumOS Authors
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

//! Configuration core for an LVDS/GVI display-bridge transmitter.
//!
//! The bridge sits between a host display controller and an LCD panel: the
//! host hands it a negotiated display mode plus the panel's advertised
//! pixel packing, and the core turns that into a single transmitter
//! control-register word and an ordered power sequence across the pixel
//! clock, the transmitter PHY and the downstream panel.
//!
//! The host owns discovery and register transport; it supplies those as the
//! [`PixelClock`], [`RegisterBus`] and [`Panel`] collaborators and drives
//! the bridge through the [`DisplayBridge`] interface.

mod bridge;
mod bus;
mod clock;
mod config;
mod format;
mod gvi;
pub mod mock;
mod panel;
pub mod registers;

pub use self::bridge::ConnectorStatus;
pub use self::bridge::DisplayBridge;
pub use self::bridge::DisplayMode;
pub use self::bridge::Error;
pub use self::bridge::Result;
pub use self::bus::RegisterBus;
pub use self::clock::PixelClock;
pub use self::config::ChannelMode;
pub use self::config::GviParameters;
pub use self::format::BusFormat;
pub use self::format::FormatCode;
pub use self::format::resolve_format;
pub use self::gvi::GviBridge;
pub use self::panel::Panel;
