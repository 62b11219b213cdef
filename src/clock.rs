// Copyright 2025 The ChromiumOS Authors
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

//! Pixel-clock collaborator interface.

/// Gate control for the transmitter pixel clock, owned by the host clock
/// framework.
pub trait PixelClock {
    /// Makes the clock ready and ungates it.
    fn prepare_enable(&mut self) -> anyhow::Result<()>;

    /// Gates the clock and releases it.
    fn disable_unprepare(&mut self);
}
