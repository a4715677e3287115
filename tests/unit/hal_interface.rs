//! Unit tests for the embedded-hal I2C transport

use embedded_hal::i2c::{ErrorKind, ErrorType, I2c, Operation as I2cOperation};
use mpu6050_regs::{Error, I2cInterface, Mpu6050};
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct HalError;

impl embedded_hal::i2c::Error for HalError {
    fn kind(&self) -> ErrorKind {
        ErrorKind::Other
    }
}

/// One bus transaction: bytes written and number of bytes read
#[derive(Debug, Clone, PartialEq, Eq)]
struct Transaction {
    address: u8,
    written: Vec<u8>,
    read_len: usize,
}

/// I2C bus with an MPU-6050 register file behind address `device`
#[derive(Default)]
struct MockI2c {
    device: u8,
    registers: HashMap<u8, u8>,
    transactions: Vec<Transaction>,
}

impl MockI2c {
    fn new(device: u8) -> Self {
        let mut registers = HashMap::new();
        registers.insert(0x75, 0x68);
        Self {
            device,
            registers,
            transactions: Vec::new(),
        }
    }
}

impl ErrorType for MockI2c {
    type Error = HalError;
}

impl I2c for MockI2c {
    fn transaction(
        &mut self,
        address: u8,
        operations: &mut [I2cOperation<'_>],
    ) -> Result<(), Self::Error> {
        let mut record = Transaction {
            address,
            written: Vec::new(),
            read_len: 0,
        };
        if address != self.device {
            self.transactions.push(record);
            return Err(HalError);
        }

        let mut pointer = 0u8;
        for operation in operations.iter_mut() {
            match operation {
                I2cOperation::Write(bytes) => {
                    if let Some((&register, data)) = bytes.split_first() {
                        pointer = register;
                        for &byte in data {
                            self.registers.insert(pointer, byte);
                            pointer = pointer.wrapping_add(1);
                        }
                    }
                    record.written.extend_from_slice(bytes);
                }
                I2cOperation::Read(buffer) => {
                    for byte in buffer.iter_mut() {
                        *byte = self.registers.get(&pointer).copied().unwrap_or(0);
                        pointer = pointer.wrapping_add(1);
                    }
                    record.read_len += buffer.len();
                }
            }
        }

        self.transactions.push(record);
        Ok(())
    }
}

#[test]
fn test_register_read_is_write_then_single_byte_read() {
    let mut driver = Mpu6050::new(I2cInterface::default(MockI2c::new(0x68)));

    assert_eq!(driver.read_who_am_i().unwrap(), 0x68);

    let i2c = driver.release().release();
    assert_eq!(
        i2c.transactions,
        vec![Transaction {
            address: 0x68,
            written: vec![0x75],
            read_len: 1,
        }]
    );
}

#[test]
fn test_register_write_is_two_byte_burst() {
    let mut driver = Mpu6050::new(I2cInterface::default(MockI2c::new(0x68)));

    driver
        .write_raw(mpu6050_regs::RegisterAddress::SmplrtDiv, 9)
        .unwrap();

    let i2c = driver.release().release();
    assert_eq!(
        i2c.transactions,
        vec![Transaction {
            address: 0x68,
            written: vec![0x19, 9],
            read_len: 0,
        }]
    );
    assert_eq!(i2c.registers.get(&0x19), Some(&9));
}

#[test]
fn test_measurement_is_two_transactions_high_first() {
    let mut i2c = MockI2c::new(0x69);
    i2c.registers.insert(0x43, 0xFC);
    i2c.registers.insert(0x44, 0x18);
    let mut driver = Mpu6050::new(I2cInterface::alternative(i2c));

    assert_eq!(driver.read_gyro_x().unwrap(), -1000);

    let written: Vec<Vec<u8>> = driver
        .release()
        .release()
        .transactions
        .into_iter()
        .map(|t| t.written)
        .collect();
    assert_eq!(written, vec![vec![0x43], vec![0x44]]);
}

#[test]
fn test_hal_error_is_bus_error() {
    // Device at 0x69, interface configured for 0x68
    let mut driver = Mpu6050::new(I2cInterface::new(MockI2c::new(0x69), 0x68));

    assert_eq!(driver.read_who_am_i(), Err(Error::Bus(HalError)));
}
