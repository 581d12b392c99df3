//! Scripted I2C bus and delay for exercising the driver without hardware.
//!
//! [`MockBus`] and [`MockDelay`] share one event log, so tests can assert
//! the exact interleaving of writes, waits and reads. Reads are answered
//! from a queue of pre-loaded responses; writes succeed unless a failure
//! has been queued with [`MockBus::fail_next_write`].

#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::{ErrorKind, ErrorType, I2c, NoAcknowledgeSource, Operation};
use sen66_protocol::encode_frame;

/// Something that happened on the mock bus or delay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BusEvent {
    /// Bytes written to `address`.
    Write { address: u8, bytes: Vec<u8> },
    /// `length` bytes read from `address`.
    Read { address: u8, length: usize },
    /// Blocking wait.
    Delay { ms: u32 },
}

/// Error returned by the mock bus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MockError(pub ErrorKind);

impl embedded_hal::i2c::Error for MockError {
    fn kind(&self) -> ErrorKind {
        self.0
    }
}

/// Address NACK, the usual failure when the sensor is absent or busy.
pub fn nack() -> MockError {
    MockError(ErrorKind::NoAcknowledge(NoAcknowledgeSource::Address))
}

pub type EventLog = Rc<RefCell<Vec<BusEvent>>>;

/// Scripted I2C bus.
#[derive(Debug)]
pub struct MockBus {
    log: EventLog,
    writes: usize,
    write_failures: VecDeque<(usize, MockError)>,
    reads: VecDeque<Result<Vec<u8>, MockError>>,
}

impl MockBus {
    /// Queue a raw response for the next read.
    pub fn queue_raw(&mut self, raw: Vec<u8>) {
        self.reads.push_back(Ok(raw));
    }

    /// Queue a response built from a compacted payload with valid checksums.
    pub fn queue_payload(&mut self, payload: &[u8]) {
        let raw = encode_frame(payload).expect("payload should be whole words");
        self.queue_raw(raw);
    }

    /// Make the next read fail.
    pub fn queue_read_error(&mut self, error: MockError) {
        self.reads.push_back(Err(error));
    }

    /// Make the next write fail.
    pub fn fail_next_write(&mut self, error: MockError) {
        self.fail_write_after(0, error);
    }

    /// Let `successes` more writes through, then fail the one after.
    pub fn fail_write_after(&mut self, successes: usize, error: MockError) {
        self.write_failures.push_back((self.writes + successes, error));
    }

    /// Number of queued reads not yet consumed.
    pub fn pending_reads(&self) -> usize {
        self.reads.len()
    }
}

impl ErrorType for MockBus {
    type Error = MockError;
}

impl I2c for MockBus {
    fn transaction(
        &mut self,
        address: u8,
        operations: &mut [Operation<'_>],
    ) -> Result<(), Self::Error> {
        for operation in operations {
            match operation {
                Operation::Write(bytes) => {
                    self.log.borrow_mut().push(BusEvent::Write {
                        address,
                        bytes: bytes.to_vec(),
                    });
                    let index = self.writes;
                    self.writes += 1;
                    let fails = self
                        .write_failures
                        .front()
                        .is_some_and(|(failing, _)| *failing == index);
                    if fails {
                        if let Some((_, error)) = self.write_failures.pop_front() {
                            return Err(error);
                        }
                    }
                }
                Operation::Read(buffer) => {
                    self.log.borrow_mut().push(BusEvent::Read {
                        address,
                        length: buffer.len(),
                    });
                    let response = self
                        .reads
                        .pop_front()
                        .unwrap_or(Err(MockError(ErrorKind::Other)))?;
                    assert_eq!(
                        response.len(),
                        buffer.len(),
                        "queued response length does not match read length"
                    );
                    buffer.copy_from_slice(&response);
                }
            }
        }
        Ok(())
    }
}

/// Delay that records instead of sleeping.
#[derive(Debug)]
pub struct MockDelay {
    log: EventLog,
}

impl DelayNs for MockDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.log.borrow_mut().push(BusEvent::Delay { ms: ns / 1_000_000 });
    }

    fn delay_ms(&mut self, ms: u32) {
        self.log.borrow_mut().push(BusEvent::Delay { ms });
    }
}

/// Create a bus and delay sharing one event log.
pub fn mock_pair() -> (MockBus, MockDelay, EventLog) {
    let log: EventLog = Rc::new(RefCell::new(Vec::new()));
    let bus = MockBus {
        log: Rc::clone(&log),
        writes: 0,
        write_failures: VecDeque::new(),
        reads: VecDeque::new(),
    };
    let delay = MockDelay {
        log: Rc::clone(&log),
    };
    (bus, delay, log)
}

/// The measured-values payload from the datasheet walkthrough.
pub const SAMPLE_MEASUREMENTS: [u8; 18] = [
    0x00, 0x0A, 0x00, 0x19, 0x00, 0x28, 0x00, 0x37, 0x00, 0x32, 0x01, 0x90, 0x00, 0x05, 0xFF, 0xFB,
    0x01, 0x77,
];

/// A 32-byte, NUL-padded identity string.
pub fn identity(text: &str) -> [u8; 32] {
    let mut bytes = [0u8; 32];
    bytes[..text.len()].copy_from_slice(text.as_bytes());
    bytes
}
