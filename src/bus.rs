// Copyright 2025 The ChromiumOS Authors
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

//! Register-access collaborator interface.

/// Write access to the companion chip's register file.
///
/// Registers are 32 bits wide at a 4-byte stride. The core only writes
/// whole words; no read-modify-write is needed because every update
/// recomputes the full value.
pub trait RegisterBus {
    fn write(&mut self, offset: u32, value: u32) -> anyhow::Result<()>;
}
