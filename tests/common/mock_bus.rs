//! Recording bus controller with a simulated MPU-6050 slave behind it

use mpu6050_regs::{BusController, Command, Direction};
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// One call made on the bus controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BusEvent {
    /// `set_slave_address`
    SetSlaveAddress(u8, Direction),
    /// `put_data`
    PutData(u8),
    /// `get_data`, with the byte handed out
    GetData(u8),
    /// `control`
    Control(Command),
    /// `is_busy`, with the answer given
    BusyPoll(bool),
}

#[derive(Debug)]
struct BusState {
    events: Vec<BusEvent>,
    registers: HashMap<u8, u8>,
    slave_address: u8,
    target: Option<(u8, Direction)>,
    data_out: u8,
    data_in: u8,
    pointer: u8,
    /// Busy answers given after each framing command
    busy_per_command: u32,
    busy_remaining: u32,
    stuck_busy: bool,
}

/// Bus controller that records every call and answers like an MPU-6050
///
/// Burst-start loads the register pointer, burst-finish stores the data byte
/// at the pointer, single-receive fetches the byte at the pointer. Frames sent
/// to another slave address are ignored.
#[derive(Clone)]
pub struct SimulatedBus {
    state: Rc<RefCell<BusState>>,
}

impl SimulatedBus {
    /// Simulated device at `slave_address` with WHO_AM_I = 0x68
    pub fn new(slave_address: u8) -> Self {
        let mut registers = HashMap::new();
        registers.insert(0x75, 0x68);
        registers.insert(0x6B, 0x40);
        Self {
            state: Rc::new(RefCell::new(BusState {
                events: Vec::new(),
                registers,
                slave_address,
                target: None,
                data_out: 0,
                data_in: 0,
                pointer: 0,
                busy_per_command: 0,
                busy_remaining: 0,
                stuck_busy: false,
            })),
        }
    }

    /// Report busy `polls` times after each framing command
    pub fn set_busy_polls(&self, polls: u32) {
        self.state.borrow_mut().busy_per_command = polls;
    }

    /// Never report idle again
    pub fn set_stuck_busy(&self) {
        self.state.borrow_mut().stuck_busy = true;
    }

    /// Set a register of the simulated device
    pub fn set_register(&self, address: u8, value: u8) {
        self.state.borrow_mut().registers.insert(address, value);
    }

    /// Get a register of the simulated device
    pub fn get_register(&self, address: u8) -> u8 {
        self.state
            .borrow()
            .registers
            .get(&address)
            .copied()
            .unwrap_or(0)
    }

    /// All recorded calls
    pub fn events(&self) -> Vec<BusEvent> {
        self.state.borrow().events.clone()
    }

    /// Clear the call log
    pub fn clear_events(&self) {
        self.state.borrow_mut().events.clear();
    }
}

impl BusState {
    fn addressed(&self) -> Option<Direction> {
        match self.target {
            Some((address, direction)) if address == self.slave_address => Some(direction),
            _ => None,
        }
    }
}

impl BusController for SimulatedBus {
    fn set_slave_address(&mut self, address: u8, direction: Direction) {
        let mut state = self.state.borrow_mut();
        state.events.push(BusEvent::SetSlaveAddress(address, direction));
        state.target = Some((address, direction));
    }

    fn put_data(&mut self, byte: u8) {
        let mut state = self.state.borrow_mut();
        state.events.push(BusEvent::PutData(byte));
        state.data_out = byte;
    }

    fn get_data(&mut self) -> u8 {
        let mut state = self.state.borrow_mut();
        let byte = state.data_in;
        state.events.push(BusEvent::GetData(byte));
        byte
    }

    fn control(&mut self, command: Command) {
        let mut state = self.state.borrow_mut();
        state.events.push(BusEvent::Control(command));
        state.busy_remaining = state.busy_per_command;

        match (command, state.addressed()) {
            (Command::BurstSendStart, Some(Direction::Write)) => {
                state.pointer = state.data_out;
            }
            (Command::BurstSendFinish, Some(Direction::Write)) => {
                let (pointer, value) = (state.pointer, state.data_out);
                // DEVICE_RESET clears itself once the reset has run
                let value = if pointer == 0x6B && value & 0x80 != 0 {
                    0x40
                } else {
                    value
                };
                state.registers.insert(pointer, value);
                state.pointer = pointer.wrapping_add(1);
            }
            (Command::SingleReceive, Some(Direction::Read)) => {
                let pointer = state.pointer;
                state.data_in = state.registers.get(&pointer).copied().unwrap_or(0);
                state.pointer = pointer.wrapping_add(1);
            }
            // No slave answers: the controller reads an idle (high) bus
            (Command::SingleReceive, None) => state.data_in = 0xFF,
            _ => {}
        }
    }

    fn is_busy(&mut self) -> bool {
        let mut state = self.state.borrow_mut();
        let busy = if state.stuck_busy {
            true
        } else if state.busy_remaining > 0 {
            state.busy_remaining -= 1;
            true
        } else {
            false
        };
        state.events.push(BusEvent::BusyPoll(busy));
        busy
    }
}
