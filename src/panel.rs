// Copyright 2025 The ChromiumOS Authors
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

//! Downstream panel collaborator interface.

use crate::bridge::DisplayMode;

/// Lifecycle operations of the panel driver downstream of the bridge.
///
/// `prepare`/`unprepare` switch panel power, `enable`/`disable` start and
/// stop the pixel stream and backlight. Internal timing and retry behavior
/// belong to the panel driver.
pub trait Panel {
    fn prepare(&mut self) -> anyhow::Result<()>;

    fn enable(&mut self) -> anyhow::Result<()>;

    fn disable(&mut self) -> anyhow::Result<()>;

    fn unprepare(&mut self) -> anyhow::Result<()>;

    /// Display timings this panel supports, in its preference order.
    fn modes(&self) -> Vec<DisplayMode>;
}
