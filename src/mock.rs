// Copyright 2025 The ChromiumOS Authors
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

//! Centralized mock collaborator implementations, for unit-tests.

use std::cell::RefCell;
use std::rc::Rc;

use anyhow::bail;

use crate::bridge::DisplayMode;
use crate::bus::RegisterBus;
use crate::clock::PixelClock;
use crate::panel::Panel;

/// One hardware-facing call issued by the sequencer. Calls that fail are
/// not recorded; the log holds what actually took effect, in issue order.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum HwOp {
    ClockPrepareEnable,
    ClockDisableUnprepare,
    RegisterWrite { offset: u32, value: u32 },
    PanelPrepare,
    PanelEnable,
    PanelDisable,
    PanelUnprepare,
}

/// Call log shared between the mocks of one test.
pub type HwLog = Rc<RefCell<Vec<HwOp>>>;

pub fn new_hw_log() -> HwLog {
    Rc::new(RefCell::new(Vec::new()))
}

pub struct MockClock {
    log: HwLog,
    pub fail_prepare_enable: bool,
}

impl MockClock {
    pub fn new(log: HwLog) -> MockClock {
        MockClock {
            log,
            fail_prepare_enable: false,
        }
    }
}

impl PixelClock for MockClock {
    fn prepare_enable(&mut self) -> anyhow::Result<()> {
        if self.fail_prepare_enable {
            bail!("mock clock refused to run");
        }
        self.log.borrow_mut().push(HwOp::ClockPrepareEnable);
        Ok(())
    }

    fn disable_unprepare(&mut self) {
        self.log.borrow_mut().push(HwOp::ClockDisableUnprepare);
    }
}

pub struct MockRegisterBus {
    log: HwLog,
    pub fail_writes: bool,
}

impl MockRegisterBus {
    pub fn new(log: HwLog) -> MockRegisterBus {
        MockRegisterBus {
            log,
            fail_writes: false,
        }
    }
}

impl RegisterBus for MockRegisterBus {
    fn write(&mut self, offset: u32, value: u32) -> anyhow::Result<()> {
        if self.fail_writes {
            bail!("mock bus write error at {:#x}", offset);
        }
        self.log
            .borrow_mut()
            .push(HwOp::RegisterWrite { offset, value });
        Ok(())
    }
}

pub struct MockPanel {
    log: HwLog,
    pub modes: Vec<DisplayMode>,
    pub fail_prepare: bool,
    pub fail_enable: bool,
    pub fail_disable: bool,
    pub fail_unprepare: bool,
}

impl MockPanel {
    pub fn new(log: HwLog) -> MockPanel {
        MockPanel {
            log,
            modes: Vec::new(),
            fail_prepare: false,
            fail_enable: false,
            fail_disable: false,
            fail_unprepare: false,
        }
    }
}

impl Panel for MockPanel {
    fn prepare(&mut self) -> anyhow::Result<()> {
        if self.fail_prepare {
            bail!("mock panel prepare error");
        }
        self.log.borrow_mut().push(HwOp::PanelPrepare);
        Ok(())
    }

    fn enable(&mut self) -> anyhow::Result<()> {
        if self.fail_enable {
            bail!("mock panel enable error");
        }
        self.log.borrow_mut().push(HwOp::PanelEnable);
        Ok(())
    }

    fn disable(&mut self) -> anyhow::Result<()> {
        if self.fail_disable {
            bail!("mock panel disable error");
        }
        self.log.borrow_mut().push(HwOp::PanelDisable);
        Ok(())
    }

    fn unprepare(&mut self) -> anyhow::Result<()> {
        if self.fail_unprepare {
            bail!("mock panel unprepare error");
        }
        self.log.borrow_mut().push(HwOp::PanelUnprepare);
        Ok(())
    }

    fn modes(&self) -> Vec<DisplayMode> {
        self.modes.clone()
    }
}
