//! Mock register interface for testing the MPU-6050 driver

use device_driver::RegisterInterface;
use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};
use std::rc::Rc;

const PWR_MGMT_1: u8 = 0x6B;
const FIFO_COUNT_H: u8 = 0x72;
const FIFO_COUNT_L: u8 = 0x73;
const FIFO_R_W: u8 = 0x74;
const WHO_AM_I: u8 = 0x75;

/// Records operations performed on the mock interface
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// One byte read from a register
    Read {
        /// Register address
        address: u8,
        /// Value that was returned
        value: u8,
    },
    /// One byte written to a register
    Write {
        /// Register address
        address: u8,
        /// Value that was written
        value: u8,
    },
}

/// Shared state for mock interface (uses interior mutability)
#[derive(Debug)]
struct MockState {
    /// Simulated register file
    registers: HashMap<u8, u8>,

    /// Operations log for verification
    operations: Vec<Operation>,

    /// Failure injection flags
    fail_next_read: bool,
    fail_next_write: bool,

    /// Reads of `PWR_MGMT_1` before a requested reset completes
    reset_duration: Option<u32>,
    reset_reads_remaining: u32,

    /// Bytes queued in the simulated FIFO
    fifo: VecDeque<u8>,
}

impl MockState {
    fn new() -> Self {
        let mut state = Self {
            registers: HashMap::new(),
            operations: Vec::new(),
            fail_next_read: false,
            fail_next_write: false,
            reset_duration: Some(3),
            reset_reads_remaining: 0,
            fifo: VecDeque::new(),
        };

        // Power-on defaults
        state.registers.insert(WHO_AM_I, 0x68);
        state.registers.insert(PWR_MGMT_1, 0x40);

        state
    }

    fn register(&self, address: u8) -> u8 {
        self.registers.get(&address).copied().unwrap_or(0)
    }

    fn sync_fifo_count(&mut self) {
        let [high, low] = u16::try_from(self.fifo.len())
            .unwrap_or(u16::MAX)
            .to_be_bytes();
        self.registers.insert(FIFO_COUNT_H, high);
        self.registers.insert(FIFO_COUNT_L, low);
    }

    fn read(&mut self, address: u8) -> u8 {
        match address {
            FIFO_R_W => {
                let value = self.fifo.pop_front().unwrap_or(0);
                self.sync_fifo_count();
                value
            }
            PWR_MGMT_1 if self.register(PWR_MGMT_1) & 0x80 != 0 => {
                if self.reset_duration.is_some() {
                    self.reset_reads_remaining = self.reset_reads_remaining.saturating_sub(1);
                    if self.reset_reads_remaining == 0 {
                        // Reset complete: registers return to power-on state
                        self.registers.insert(PWR_MGMT_1, 0x40);
                    }
                }
                self.register(PWR_MGMT_1)
            }
            _ => self.register(address),
        }
    }

    fn write(&mut self, address: u8, value: u8) {
        match address {
            FIFO_R_W => {
                self.fifo.push_back(value);
                self.sync_fifo_count();
            }
            PWR_MGMT_1 if value & 0x80 != 0 => {
                self.reset_reads_remaining = self.reset_duration.unwrap_or(0);
                self.registers.insert(address, value);
            }
            _ => {
                self.registers.insert(address, value);
            }
        }
    }
}

/// Mock interface for testing
#[derive(Clone)]
pub struct MockInterface {
    state: Rc<RefCell<MockState>>,
}

impl MockInterface {
    /// Create a new mock interface with power-on register values
    pub fn new() -> Self {
        Self {
            state: Rc::new(RefCell::new(MockState::new())),
        }
    }

    /// Set a register value without logging an operation
    pub fn set_register(&self, address: u8, value: u8) {
        self.state.borrow_mut().registers.insert(address, value);
    }

    /// Get a register value without logging an operation
    pub fn get_register(&self, address: u8) -> u8 {
        self.state.borrow().register(address)
    }

    /// Set WHO_AM_I register value
    pub fn set_who_am_i(&self, value: u8) {
        self.set_register(WHO_AM_I, value);
    }

    /// Store a big-endian 16-bit value at `high` and `high + 1`
    pub fn set_word(&self, high: u8, value: i16) {
        let [msb, lsb] = value.to_be_bytes();
        self.set_register(high, msb);
        self.set_register(high + 1, lsb);
    }

    /// Set accelerometer data (will be returned on next read)
    pub fn set_accel_data(&self, x: i16, y: i16, z: i16) {
        self.set_word(0x3B, x);
        self.set_word(0x3D, y);
        self.set_word(0x3F, z);
    }

    /// Set gyroscope data (will be returned on next read)
    pub fn set_gyro_data(&self, x: i16, y: i16, z: i16) {
        self.set_word(0x43, x);
        self.set_word(0x45, y);
        self.set_word(0x47, z);
    }

    /// Set temperature data (will be returned on next read)
    pub fn set_temperature_data(&self, temp_raw: i16) {
        self.set_word(0x41, temp_raw);
    }

    /// Replace the FIFO content
    pub fn set_fifo(&self, bytes: &[u8]) {
        let mut state = self.state.borrow_mut();
        state.fifo = bytes.iter().copied().collect();
        state.sync_fifo_count();
    }

    /// Bytes still queued in the FIFO
    pub fn fifo_contents(&self) -> Vec<u8> {
        self.state.borrow().fifo.iter().copied().collect()
    }

    /// Number of `PWR_MGMT_1` reads a reset takes, `None` to never finish
    pub fn set_reset_duration(&self, reads: Option<u32>) {
        self.state.borrow_mut().reset_duration = reads;
    }

    /// Inject a read failure on the next read operation
    pub fn fail_next_read(&self) {
        self.state.borrow_mut().fail_next_read = true;
    }

    /// Inject a write failure on the next write operation
    pub fn fail_next_write(&self) {
        self.state.borrow_mut().fail_next_write = true;
    }

    /// Get the operations log
    pub fn operations(&self) -> Vec<Operation> {
        self.state.borrow().operations.clone()
    }

    /// Clear the operations log
    pub fn clear_operations(&self) {
        self.state.borrow_mut().operations.clear();
    }

    /// Addresses of all logged reads, in order
    pub fn read_addresses(&self) -> Vec<u8> {
        self.operations()
            .into_iter()
            .filter_map(|op| match op {
                Operation::Read { address, .. } => Some(address),
                Operation::Write { .. } => None,
            })
            .collect()
    }

    /// `(address, value)` of all logged writes, in order
    pub fn writes(&self) -> Vec<(u8, u8)> {
        self.operations()
            .into_iter()
            .filter_map(|op| match op {
                Operation::Write { address, value } => Some((address, value)),
                Operation::Read { .. } => None,
            })
            .collect()
    }
}

/// Mock error type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MockError {
    /// Simulated communication error
    Communication,
}

impl RegisterInterface for MockInterface {
    type Error = MockError;
    type AddressType = u8;

    fn read_register(
        &mut self,
        address: Self::AddressType,
        _size_bits: u32,
        read_data: &mut [u8],
    ) -> Result<(), Self::Error> {
        let mut state = self.state.borrow_mut();

        // Check for injected failure
        if state.fail_next_read {
            state.fail_next_read = false;
            return Err(MockError::Communication);
        }

        for (reg_addr, byte) in (address..=u8::MAX).zip(read_data.iter_mut()) {
            *byte = state.read(reg_addr);
            state.operations.push(Operation::Read {
                address: reg_addr,
                value: *byte,
            });
        }

        Ok(())
    }

    fn write_register(
        &mut self,
        address: Self::AddressType,
        _size_bits: u32,
        write_data: &[u8],
    ) -> Result<(), Self::Error> {
        let mut state = self.state.borrow_mut();

        // Check for injected failure
        if state.fail_next_write {
            state.fail_next_write = false;
            return Err(MockError::Communication);
        }

        for (reg_addr, &value) in (address..=u8::MAX).zip(write_data) {
            state.write(reg_addr, value);
            state.operations.push(Operation::Write {
                address: reg_addr,
                value,
            });
        }

        Ok(())
    }
}

impl Default for MockInterface {
    fn default() -> Self {
        Self::new()
    }
}
