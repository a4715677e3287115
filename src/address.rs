//! Register address map of the MPU-6050
//!
//! Addresses follow the MPU-6000/MPU-6050 Register Map (rev. 4.2). The table is
//! the binary contract with the device: every entry is a fixed 8-bit address
//! and no two entries share one.
//!
//! Paired measurement registers are listed high byte first. The high byte must
//! be read before the low byte so the device latches a consistent sample.

/// Number of `EXT_SENS_DATA_xx` registers
pub const EXT_SENS_DATA_COUNT: usize = 24;

/// Every named register of the MPU-6050
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum RegisterAddress {
    // Self test
    SelfTestX = 0x0D,
    SelfTestY = 0x0E,
    SelfTestZ = 0x0F,
    SelfTestA = 0x10,

    // Configuration
    SmplrtDiv = 0x19,
    Config = 0x1A,
    GyroConfig = 0x1B,
    AccelConfig = 0x1C,
    FifoEn = 0x23,

    // I2C master and slave channels
    I2cMstCtrl = 0x24,
    I2cSlv0Addr = 0x25,
    I2cSlv0Reg = 0x26,
    I2cSlv0Ctrl = 0x27,
    I2cSlv1Addr = 0x28,
    I2cSlv1Reg = 0x29,
    I2cSlv1Ctrl = 0x2A,
    I2cSlv2Addr = 0x2B,
    I2cSlv2Reg = 0x2C,
    I2cSlv2Ctrl = 0x2D,
    I2cSlv3Addr = 0x2E,
    I2cSlv3Reg = 0x2F,
    I2cSlv3Ctrl = 0x30,
    I2cSlv4Addr = 0x31,
    I2cSlv4Reg = 0x32,
    I2cSlv4Do = 0x33,
    I2cSlv4Ctrl = 0x34,
    I2cSlv4Di = 0x35,
    I2cMstStatus = 0x36,

    // Interrupts
    IntPinCfg = 0x37,
    IntEnable = 0x38,
    IntStatus = 0x3A,

    // Measurements
    AccelXoutH = 0x3B,
    AccelXoutL = 0x3C,
    AccelYoutH = 0x3D,
    AccelYoutL = 0x3E,
    AccelZoutH = 0x3F,
    AccelZoutL = 0x40,
    TempOutH = 0x41,
    TempOutL = 0x42,
    GyroXoutH = 0x43,
    GyroXoutL = 0x44,
    GyroYoutH = 0x45,
    GyroYoutL = 0x46,
    GyroZoutH = 0x47,
    GyroZoutL = 0x48,

    // External sensor data
    ExtSensData00 = 0x49,
    ExtSensData01 = 0x4A,
    ExtSensData02 = 0x4B,
    ExtSensData03 = 0x4C,
    ExtSensData04 = 0x4D,
    ExtSensData05 = 0x4E,
    ExtSensData06 = 0x4F,
    ExtSensData07 = 0x50,
    ExtSensData08 = 0x51,
    ExtSensData09 = 0x52,
    ExtSensData10 = 0x53,
    ExtSensData11 = 0x54,
    ExtSensData12 = 0x55,
    ExtSensData13 = 0x56,
    ExtSensData14 = 0x57,
    ExtSensData15 = 0x58,
    ExtSensData16 = 0x59,
    ExtSensData17 = 0x5A,
    ExtSensData18 = 0x5B,
    ExtSensData19 = 0x5C,
    ExtSensData20 = 0x5D,
    ExtSensData21 = 0x5E,
    ExtSensData22 = 0x5F,
    ExtSensData23 = 0x60,

    // Slave data out
    I2cSlv0Do = 0x63,
    I2cSlv1Do = 0x64,
    I2cSlv2Do = 0x65,
    I2cSlv3Do = 0x66,
    I2cMstDelayCtrl = 0x67,

    // Resets and power
    SignalPathReset = 0x68,
    UserCtrl = 0x6A,
    PwrMgmt1 = 0x6B,
    PwrMgmt2 = 0x6C,

    // FIFO
    FifoCountH = 0x72,
    FifoCountL = 0x73,
    FifoRW = 0x74,

    // Identification
    WhoAmI = 0x75,
}

impl RegisterAddress {
    /// All registers in ascending address order
    pub const ALL: [Self; 82] = [
        Self::SelfTestX,
        Self::SelfTestY,
        Self::SelfTestZ,
        Self::SelfTestA,
        Self::SmplrtDiv,
        Self::Config,
        Self::GyroConfig,
        Self::AccelConfig,
        Self::FifoEn,
        Self::I2cMstCtrl,
        Self::I2cSlv0Addr,
        Self::I2cSlv0Reg,
        Self::I2cSlv0Ctrl,
        Self::I2cSlv1Addr,
        Self::I2cSlv1Reg,
        Self::I2cSlv1Ctrl,
        Self::I2cSlv2Addr,
        Self::I2cSlv2Reg,
        Self::I2cSlv2Ctrl,
        Self::I2cSlv3Addr,
        Self::I2cSlv3Reg,
        Self::I2cSlv3Ctrl,
        Self::I2cSlv4Addr,
        Self::I2cSlv4Reg,
        Self::I2cSlv4Do,
        Self::I2cSlv4Ctrl,
        Self::I2cSlv4Di,
        Self::I2cMstStatus,
        Self::IntPinCfg,
        Self::IntEnable,
        Self::IntStatus,
        Self::AccelXoutH,
        Self::AccelXoutL,
        Self::AccelYoutH,
        Self::AccelYoutL,
        Self::AccelZoutH,
        Self::AccelZoutL,
        Self::TempOutH,
        Self::TempOutL,
        Self::GyroXoutH,
        Self::GyroXoutL,
        Self::GyroYoutH,
        Self::GyroYoutL,
        Self::GyroZoutH,
        Self::GyroZoutL,
        Self::ExtSensData00,
        Self::ExtSensData01,
        Self::ExtSensData02,
        Self::ExtSensData03,
        Self::ExtSensData04,
        Self::ExtSensData05,
        Self::ExtSensData06,
        Self::ExtSensData07,
        Self::ExtSensData08,
        Self::ExtSensData09,
        Self::ExtSensData10,
        Self::ExtSensData11,
        Self::ExtSensData12,
        Self::ExtSensData13,
        Self::ExtSensData14,
        Self::ExtSensData15,
        Self::ExtSensData16,
        Self::ExtSensData17,
        Self::ExtSensData18,
        Self::ExtSensData19,
        Self::ExtSensData20,
        Self::ExtSensData21,
        Self::ExtSensData22,
        Self::ExtSensData23,
        Self::I2cSlv0Do,
        Self::I2cSlv1Do,
        Self::I2cSlv2Do,
        Self::I2cSlv3Do,
        Self::I2cMstDelayCtrl,
        Self::SignalPathReset,
        Self::UserCtrl,
        Self::PwrMgmt1,
        Self::PwrMgmt2,
        Self::FifoCountH,
        Self::FifoCountL,
        Self::FifoRW,
        Self::WhoAmI,
    ];

    /// Raw 8-bit register address
    #[must_use]
    pub const fn addr(self) -> u8 {
        self as u8
    }

    /// Datasheet name of the register
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::SelfTestX => "SELF_TEST_X",
            Self::SelfTestY => "SELF_TEST_Y",
            Self::SelfTestZ => "SELF_TEST_Z",
            Self::SelfTestA => "SELF_TEST_A",
            Self::SmplrtDiv => "SMPLRT_DIV",
            Self::Config => "CONFIG",
            Self::GyroConfig => "GYRO_CONFIG",
            Self::AccelConfig => "ACCEL_CONFIG",
            Self::FifoEn => "FIFO_EN",
            Self::I2cMstCtrl => "I2C_MST_CTRL",
            Self::I2cSlv0Addr => "I2C_SLV0_ADDR",
            Self::I2cSlv0Reg => "I2C_SLV0_REG",
            Self::I2cSlv0Ctrl => "I2C_SLV0_CTRL",
            Self::I2cSlv1Addr => "I2C_SLV1_ADDR",
            Self::I2cSlv1Reg => "I2C_SLV1_REG",
            Self::I2cSlv1Ctrl => "I2C_SLV1_CTRL",
            Self::I2cSlv2Addr => "I2C_SLV2_ADDR",
            Self::I2cSlv2Reg => "I2C_SLV2_REG",
            Self::I2cSlv2Ctrl => "I2C_SLV2_CTRL",
            Self::I2cSlv3Addr => "I2C_SLV3_ADDR",
            Self::I2cSlv3Reg => "I2C_SLV3_REG",
            Self::I2cSlv3Ctrl => "I2C_SLV3_CTRL",
            Self::I2cSlv4Addr => "I2C_SLV4_ADDR",
            Self::I2cSlv4Reg => "I2C_SLV4_REG",
            Self::I2cSlv4Do => "I2C_SLV4_DO",
            Self::I2cSlv4Ctrl => "I2C_SLV4_CTRL",
            Self::I2cSlv4Di => "I2C_SLV4_DI",
            Self::I2cMstStatus => "I2C_MST_STATUS",
            Self::IntPinCfg => "INT_PIN_CFG",
            Self::IntEnable => "INT_ENABLE",
            Self::IntStatus => "INT_STATUS",
            Self::AccelXoutH => "ACCEL_XOUT_H",
            Self::AccelXoutL => "ACCEL_XOUT_L",
            Self::AccelYoutH => "ACCEL_YOUT_H",
            Self::AccelYoutL => "ACCEL_YOUT_L",
            Self::AccelZoutH => "ACCEL_ZOUT_H",
            Self::AccelZoutL => "ACCEL_ZOUT_L",
            Self::TempOutH => "TEMP_OUT_H",
            Self::TempOutL => "TEMP_OUT_L",
            Self::GyroXoutH => "GYRO_XOUT_H",
            Self::GyroXoutL => "GYRO_XOUT_L",
            Self::GyroYoutH => "GYRO_YOUT_H",
            Self::GyroYoutL => "GYRO_YOUT_L",
            Self::GyroZoutH => "GYRO_ZOUT_H",
            Self::GyroZoutL => "GYRO_ZOUT_L",
            Self::ExtSensData00 => "EXT_SENS_DATA_00",
            Self::ExtSensData01 => "EXT_SENS_DATA_01",
            Self::ExtSensData02 => "EXT_SENS_DATA_02",
            Self::ExtSensData03 => "EXT_SENS_DATA_03",
            Self::ExtSensData04 => "EXT_SENS_DATA_04",
            Self::ExtSensData05 => "EXT_SENS_DATA_05",
            Self::ExtSensData06 => "EXT_SENS_DATA_06",
            Self::ExtSensData07 => "EXT_SENS_DATA_07",
            Self::ExtSensData08 => "EXT_SENS_DATA_08",
            Self::ExtSensData09 => "EXT_SENS_DATA_09",
            Self::ExtSensData10 => "EXT_SENS_DATA_10",
            Self::ExtSensData11 => "EXT_SENS_DATA_11",
            Self::ExtSensData12 => "EXT_SENS_DATA_12",
            Self::ExtSensData13 => "EXT_SENS_DATA_13",
            Self::ExtSensData14 => "EXT_SENS_DATA_14",
            Self::ExtSensData15 => "EXT_SENS_DATA_15",
            Self::ExtSensData16 => "EXT_SENS_DATA_16",
            Self::ExtSensData17 => "EXT_SENS_DATA_17",
            Self::ExtSensData18 => "EXT_SENS_DATA_18",
            Self::ExtSensData19 => "EXT_SENS_DATA_19",
            Self::ExtSensData20 => "EXT_SENS_DATA_20",
            Self::ExtSensData21 => "EXT_SENS_DATA_21",
            Self::ExtSensData22 => "EXT_SENS_DATA_22",
            Self::ExtSensData23 => "EXT_SENS_DATA_23",
            Self::I2cSlv0Do => "I2C_SLV0_DO",
            Self::I2cSlv1Do => "I2C_SLV1_DO",
            Self::I2cSlv2Do => "I2C_SLV2_DO",
            Self::I2cSlv3Do => "I2C_SLV3_DO",
            Self::I2cMstDelayCtrl => "I2C_MST_DELAY_CTRL",
            Self::SignalPathReset => "SIGNAL_PATH_RESET",
            Self::UserCtrl => "USER_CTRL",
            Self::PwrMgmt1 => "PWR_MGMT_1",
            Self::PwrMgmt2 => "PWR_MGMT_2",
            Self::FifoCountH => "FIFO_COUNTH",
            Self::FifoCountL => "FIFO_COUNTL",
            Self::FifoRW => "FIFO_R_W",
            Self::WhoAmI => "WHO_AM_I",
        }
    }

    /// Look up a register by its raw address
    #[must_use]
    pub fn from_addr(addr: u8) -> Option<Self> {
        Self::ALL.iter().copied().find(|reg| reg.addr() == addr)
    }

    /// Address of `EXT_SENS_DATA_{index}`, or `None` if `index` is past the bank
    #[must_use]
    pub const fn ext_sens_data(index: u8) -> Option<u8> {
        if (index as usize) < EXT_SENS_DATA_COUNT {
            Some(Self::ExtSensData00.addr() + index)
        } else {
            None
        }
    }
}

impl From<RegisterAddress> for u8 {
    fn from(reg: RegisterAddress) -> Self {
        reg.addr()
    }
}
