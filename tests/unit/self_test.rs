//! Unit tests for the self-test registers

use crate::common::create_mock_driver;
use mpu6050_regs::SelfTest;

#[test]
fn test_read_combines_split_accel_values() {
    let (mut driver, interface) = create_mock_driver();
    // XA = 0b10110, YA = 0b01001, ZA = 0b11111
    interface.set_register(0x0D, 0b1010_0011); // XA[4:2]=101, XG=3
    interface.set_register(0x0E, 0b0100_1100); // YA[4:2]=010, YG=12
    interface.set_register(0x0F, 0b1111_1111); // ZA[4:2]=111, ZG=31
    interface.set_register(0x10, 0b0010_0111); // XA[1:0]=10, YA[1:0]=01, ZA[1:0]=11

    let self_test = driver.read_self_test().unwrap();

    assert_eq!(
        self_test,
        SelfTest {
            xa_test: 0b10110,
            ya_test: 0b01001,
            za_test: 0b11111,
            xg_test: 3,
            yg_test: 12,
            zg_test: 31,
        }
    );
    assert_eq!(interface.read_addresses(), vec![0x0D, 0x0E, 0x0F, 0x10]);
}

#[test]
fn test_write_splits_accel_values() {
    let (mut driver, interface) = create_mock_driver();

    driver
        .write_self_test(&SelfTest {
            xa_test: 0b10110,
            ya_test: 0b01001,
            za_test: 0b11111,
            xg_test: 3,
            yg_test: 12,
            zg_test: 31,
        })
        .unwrap();

    assert_eq!(
        interface.writes(),
        vec![
            (0x0D, 0b1010_0011),
            (0x0E, 0b0100_1100),
            (0x0F, 0b1111_1111),
            (0x10, 0b0010_0111),
        ]
    );
}

#[test]
fn test_write_truncates_to_five_bits() {
    let (mut driver, interface) = create_mock_driver();

    driver
        .write_self_test(&SelfTest {
            xa_test: 0xFF,
            xg_test: 0xFF,
            ..SelfTest::default()
        })
        .unwrap();

    assert_eq!(interface.get_register(0x0D), 0xFF);
    assert_eq!(interface.get_register(0x10), 0b0011_0000);

    let self_test = driver.read_self_test().unwrap();
    assert_eq!(self_test.xa_test, 0x1F);
    assert_eq!(self_test.xg_test, 0x1F);
}
