//! Scripted bus and power gate sharing one event log, for tests.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;
use std::time::Duration;

use anyhow::anyhow;

use crate::bus::{BusTransport, PowerGate};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Event {
    PowerOn,
    PowerOff,
    Reset,
    Write(u8),
    Read,
    Delay(Duration),
}

#[derive(Debug, Clone, Default)]
pub(crate) struct EventLog(Rc<RefCell<Vec<Event>>>);

impl EventLog {
    fn push(&self, event: Event) {
        self.0.borrow_mut().push(event);
    }

    pub fn events(&self) -> Vec<Event> {
        self.0.borrow().clone()
    }

    pub fn clear(&self) {
        self.0.borrow_mut().clear();
    }

    /// Bytes written to the bus, in order.
    pub fn written(&self) -> Vec<u8> {
        self.0
            .borrow()
            .iter()
            .filter_map(|e| match e {
                Event::Write(b) => Some(*b),
                _ => None,
            })
            .collect()
    }

    pub fn count(&self, event: &Event) -> usize {
        self.0.borrow().iter().filter(|e| *e == event).count()
    }
}

pub(crate) struct FakeBus {
    log: EventLog,
    rx: VecDeque<u8>,
    resets: usize,
    fail_on_reset: Option<usize>,
}

impl FakeBus {
    pub fn new(log: &EventLog) -> Self {
        Self {
            log: log.clone(),
            rx: VecDeque::new(),
            resets: 0,
            fail_on_reset: None,
        }
    }

    /// Queue bytes the pack will answer with.
    pub fn respond(mut self, bytes: &[u8]) -> Self {
        self.rx.extend(bytes.iter().copied());
        self
    }

    pub fn resets(&self) -> usize {
        self.resets
    }

    /// Make the `n`th reset (1-based) report a disconnected bus.
    pub fn fail_on_reset(mut self, n: usize) -> Self {
        self.fail_on_reset = Some(n);
        self
    }
}

impl BusTransport for FakeBus {
    fn reset(&mut self) -> anyhow::Result<bool> {
        self.resets += 1;
        if self.fail_on_reset == Some(self.resets) {
            return Err(anyhow!("bus disconnected"));
        }
        self.log.push(Event::Reset);
        Ok(true)
    }

    fn write_byte(&mut self, value: u8) -> anyhow::Result<()> {
        self.log.push(Event::Write(value));
        Ok(())
    }

    fn read_byte(&mut self) -> anyhow::Result<u8> {
        self.log.push(Event::Read);
        // An idle bus floats high.
        Ok(self.rx.pop_front().unwrap_or(0xFF))
    }

    fn delay(&mut self, duration: Duration) {
        self.log.push(Event::Delay(duration));
    }
}

pub(crate) struct FakeGate {
    log: EventLog,
}

impl FakeGate {
    pub fn new(log: &EventLog) -> Self {
        Self { log: log.clone() }
    }
}

impl PowerGate for FakeGate {
    fn assert(&mut self) {
        self.log.push(Event::PowerOn);
    }

    fn deassert(&mut self) {
        self.log.push(Event::PowerOff);
    }
}
