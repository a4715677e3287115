//! Register definitions for the MPU-6050
//!
//! Each entry lists the fields of one 8-bit register as `name: type = lsb..msb+1`.
//! Bits not listed are reserved: they decode to nothing and encode as zero.
//!
//! ## Register groups
//! - **Self test**: `SELF_TEST_X/Y/Z/A` (0x0D-0x10)
//! - **Configuration**: sample rate, DLPF, full-scale ranges, FIFO enable
//! - **I2C master**: master control/status/delay and the five slave channels
//! - **Interrupts**: pin configuration, enable and status
//! - **Power**: signal path reset, user control, power management 1/2
//! - **Identification**: `WHO_AM_I`
//!
//! Measurement registers, `EXT_SENS_DATA_xx`, the FIFO port and the slave
//! data-out bytes are plain bytes and are accessed through the driver.

use crate::address::RegisterAddress;
use crate::codec::register;

register! {
    // ==================== SELF TEST ====================

    /// SELF_TEST_X - Self test X axis (0x0D)
    SelfTestX @ RegisterAddress::SelfTestX {
        /// Accelerometer X self-test value, bits 4:2
        xa_test_hi: u8 = 5..8,
        /// Gyroscope X self-test value
        xg_test: u8 = 0..5,
    }

    /// SELF_TEST_Y - Self test Y axis (0x0E)
    SelfTestY @ RegisterAddress::SelfTestY {
        /// Accelerometer Y self-test value, bits 4:2
        ya_test_hi: u8 = 5..8,
        /// Gyroscope Y self-test value
        yg_test: u8 = 0..5,
    }

    /// SELF_TEST_Z - Self test Z axis (0x0F)
    SelfTestZ @ RegisterAddress::SelfTestZ {
        /// Accelerometer Z self-test value, bits 4:2
        za_test_hi: u8 = 5..8,
        /// Gyroscope Z self-test value
        zg_test: u8 = 0..5,
    }

    /// SELF_TEST_A - Accelerometer self test low bits (0x10)
    SelfTestA @ RegisterAddress::SelfTestA {
        /// Accelerometer X self-test value, bits 1:0
        xa_test_lo: u8 = 4..6,
        /// Accelerometer Y self-test value, bits 1:0
        ya_test_lo: u8 = 2..4,
        /// Accelerometer Z self-test value, bits 1:0
        za_test_lo: u8 = 0..2,
    }

    // ==================== CONFIGURATION ====================

    /// SMPLRT_DIV - Sample rate divider (0x19)
    ///
    /// Sample Rate = Gyroscope Output Rate / (1 + `smplrt_div`)
    SmplrtDiv @ RegisterAddress::SmplrtDiv {
        /// Divider from the gyroscope output rate
        smplrt_div: u8 = 0..8,
    }

    /// CONFIG - Configuration (0x1A)
    Config @ RegisterAddress::Config {
        /// FSYNC pin sampling location
        ext_sync_set: u8 = 3..6,
        /// Digital low pass filter setting
        dlpf_cfg: u8 = 0..3,
    }

    /// GYRO_CONFIG - Gyroscope configuration (0x1B)
    GyroConfig @ RegisterAddress::GyroConfig {
        /// X-axis gyroscope self test
        xg_st: bool = 7..8,
        /// Y-axis gyroscope self test
        yg_st: bool = 6..7,
        /// Z-axis gyroscope self test
        zg_st: bool = 5..6,
        /// Full scale range (0=±250, 1=±500, 2=±1000, 3=±2000 °/s)
        fs_sel: u8 = 3..5,
    }

    /// ACCEL_CONFIG - Accelerometer configuration (0x1C)
    AccelConfig @ RegisterAddress::AccelConfig {
        /// X-axis accelerometer self test
        xa_st: bool = 7..8,
        /// Y-axis accelerometer self test
        ya_st: bool = 6..7,
        /// Z-axis accelerometer self test
        za_st: bool = 5..6,
        /// Full scale range (0=±2g, 1=±4g, 2=±8g, 3=±16g)
        afs_sel: u8 = 3..5,
    }

    /// FIFO_EN - FIFO enable (0x23)
    FifoEn @ RegisterAddress::FifoEn {
        /// Write TEMP_OUT to the FIFO
        temp_fifo_en: bool = 7..8,
        /// Write GYRO_XOUT to the FIFO
        xg_fifo_en: bool = 6..7,
        /// Write GYRO_YOUT to the FIFO
        yg_fifo_en: bool = 5..6,
        /// Write GYRO_ZOUT to the FIFO
        zg_fifo_en: bool = 4..5,
        /// Write all ACCEL_xOUT registers to the FIFO
        accel_fifo_en: bool = 3..4,
        /// Write slave 2 external sensor data to the FIFO
        slv2_fifo_en: bool = 2..3,
        /// Write slave 1 external sensor data to the FIFO
        slv1_fifo_en: bool = 1..2,
        /// Write slave 0 external sensor data to the FIFO
        slv0_fifo_en: bool = 0..1,
    }

    // ==================== I2C MASTER ====================

    /// I2C_MST_CTRL - I2C master control (0x24)
    I2cMstCtrl @ RegisterAddress::I2cMstCtrl {
        /// Multi-master capability
        mult_mst_en: bool = 7..8,
        /// Delay data ready interrupt until external sensor data is loaded
        wait_for_es: bool = 6..7,
        /// Write slave 3 external sensor data to the FIFO
        slv_3_fifo_en: bool = 5..6,
        /// Stop between reads (1) or restart (0)
        i2c_mst_p_nsr: bool = 4..5,
        /// I2C master clock divider
        i2c_mst_clk: u8 = 0..4,
    }

    /// I2C_SLVx_ADDR - Slave address, shared by slaves 0-4
    I2cSlvAddr {
        /// Transfer direction (1 = read from the slave)
        rnw: bool = 7..8,
        /// 7-bit slave address
        addr: u8 = 0..7,
    }

    /// I2C_SLVx_CTRL - Slave control, shared by slaves 0-3
    I2cSlvCtrl {
        /// Enable the slave for data transfer
        en: bool = 7..8,
        /// Swap bytes of word pairs
        byte_sw: bool = 6..7,
        /// Transfer data only, without writing a register address
        reg_dis: bool = 5..6,
        /// Word pair grouping (0 = pairs end on even register, 1 = on odd)
        grp: bool = 4..5,
        /// Number of bytes to transfer
        len: u8 = 0..4,
    }

    /// I2C_SLV4_CTRL - Slave 4 control (0x34)
    I2cSlv4Ctrl @ RegisterAddress::I2cSlv4Ctrl {
        /// Enable a single slave 4 transfer
        en: bool = 7..8,
        /// Raise an interrupt when the transfer completes
        int_en: bool = 6..7,
        /// Transfer data only, without writing a register address
        reg_dis: bool = 5..6,
        /// Slave access rate decimation
        i2c_mst_dly: u8 = 0..5,
    }

    /// I2C_MST_STATUS - I2C master status (0x36)
    I2cMstStatus @ RegisterAddress::I2cMstStatus {
        /// Status of the FSYNC interrupt
        pass_through: bool = 7..8,
        /// Slave 4 transfer complete
        i2c_slv4_done: bool = 6..7,
        /// Master lost arbitration
        i2c_lost_arb: bool = 5..6,
        /// Slave 4 NACK
        i2c_slv4_nack: bool = 4..5,
        /// Slave 3 NACK
        i2c_slv3_nack: bool = 3..4,
        /// Slave 2 NACK
        i2c_slv2_nack: bool = 2..3,
        /// Slave 1 NACK
        i2c_slv1_nack: bool = 1..2,
        /// Slave 0 NACK
        i2c_slv0_nack: bool = 0..1,
    }

    /// I2C_MST_DELAY_CTRL - I2C master delay control (0x67)
    I2cMstDelayCtrl @ RegisterAddress::I2cMstDelayCtrl {
        /// Delay shadowing of external sensor data until all data is received
        delay_es_shadow: bool = 7..8,
        /// Reduce slave 4 access rate
        i2c_slv4_dly_en: bool = 4..5,
        /// Reduce slave 3 access rate
        i2c_slv3_dly_en: bool = 3..4,
        /// Reduce slave 2 access rate
        i2c_slv2_dly_en: bool = 2..3,
        /// Reduce slave 1 access rate
        i2c_slv1_dly_en: bool = 1..2,
        /// Reduce slave 0 access rate
        i2c_slv0_dly_en: bool = 0..1,
    }

    // ==================== INTERRUPTS ====================

    /// INT_PIN_CFG - INT pin / bypass enable configuration (0x37)
    IntPinCfg @ RegisterAddress::IntPinCfg {
        /// INT pin active low
        int_level: bool = 7..8,
        /// INT pin open drain
        int_open: bool = 6..7,
        /// Hold INT high until cleared
        latch_int_en: bool = 5..6,
        /// Clear interrupt status on any read
        int_rd_clear: bool = 4..5,
        /// FSYNC interrupt active low
        fsync_int_level: bool = 3..4,
        /// FSYNC pin used as interrupt
        fsync_int_en: bool = 2..3,
        /// Host can access the auxiliary bus directly
        i2c_bypass_en: bool = 1..2,
    }

    /// INT_ENABLE - Interrupt enable (0x38)
    IntEnable @ RegisterAddress::IntEnable {
        /// FIFO overflow interrupt
        fifo_oflow_en: bool = 4..5,
        /// I2C master interrupt sources
        i2c_mst_int_en: bool = 3..4,
        /// Data ready interrupt
        data_rdy_en: bool = 0..1,
    }

    /// INT_STATUS - Interrupt status (0x3A)
    IntStatus @ RegisterAddress::IntStatus {
        /// FIFO overflow occurred
        fifo_oflow_int: bool = 4..5,
        /// I2C master interrupt occurred
        i2c_mst_int: bool = 3..4,
        /// Data ready interrupt occurred
        data_rdy_int: bool = 0..1,
    }

    // ==================== RESET AND POWER ====================

    /// SIGNAL_PATH_RESET - Signal path reset (0x68)
    SignalPathReset @ RegisterAddress::SignalPathReset {
        /// Reset gyroscope analog and digital paths
        gyro_reset: bool = 2..3,
        /// Reset accelerometer analog and digital paths
        accel_reset: bool = 1..2,
        /// Reset temperature sensor analog and digital paths
        temp_reset: bool = 0..1,
    }

    /// USER_CTRL - User control (0x6A)
    UserCtrl @ RegisterAddress::UserCtrl {
        /// FIFO enable
        fifo_en: bool = 6..7,
        /// I2C master mode enable
        i2c_mst_en: bool = 5..6,
        /// Disable the primary I2C interface (MPU-6000 SPI only)
        i2c_if_dis: bool = 4..5,
        /// Reset the FIFO
        fifo_reset: bool = 2..3,
        /// Reset the I2C master
        i2c_mst_reset: bool = 1..2,
        /// Reset all signal paths and sensor registers
        sig_cond_reset: bool = 0..1,
    }

    /// PWR_MGMT_1 - Power management 1 (0x6B)
    PwrMgmt1 @ RegisterAddress::PwrMgmt1 {
        /// Reset all registers to their defaults
        device_reset: bool = 7..8,
        /// Sleep mode
        sleep: bool = 6..7,
        /// Cycle between sleep and a single sample
        cycle: bool = 5..6,
        /// Disable the temperature sensor
        temp_dis: bool = 3..4,
        /// Clock source
        clksel: u8 = 0..3,
    }

    /// PWR_MGMT_2 - Power management 2 (0x6C)
    PwrMgmt2 @ RegisterAddress::PwrMgmt2 {
        /// Wake-up frequency in accelerometer-only low power mode
        lp_wake_ctrl: u8 = 6..8,
        /// X-axis accelerometer standby
        stby_xa: bool = 5..6,
        /// Y-axis accelerometer standby
        stby_ya: bool = 4..5,
        /// Z-axis accelerometer standby
        stby_za: bool = 3..4,
        /// X-axis gyroscope standby
        stby_xg: bool = 2..3,
        /// Y-axis gyroscope standby
        stby_yg: bool = 1..2,
        /// Z-axis gyroscope standby
        stby_zg: bool = 0..1,
    }

    // ==================== IDENTIFICATION ====================

    /// WHO_AM_I - Device identity (0x75)
    WhoAmI @ RegisterAddress::WhoAmI {
        /// Device identity, reads 0x68
        who_am_i: u8 = 0..8,
    }
}
