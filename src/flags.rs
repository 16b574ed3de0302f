//! Mode, status and feature flags
//!
//! Bitfields reported by or handed to the driver are modelled as
//! `bitflags` types so mask-and-compare logic reads the same way the
//! register documentation does. Enumerations that are not bitfields
//! (controller type, bus type, filter selector) are plain enums.

use bitflags::bitflags;

bitflags! {
    /// Interpretation of a [`BitTimingValue2`](crate::BitTimingValue2)
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct BitrateModeFlags: u32 {
        /// Logical mode, the driver computes the registers
        const NONE = 0x0000_0000;
        /// Values are written directly into the controller registers
        const RAW = 0x0000_0001;
        /// Triple sampling
        const TRIPLE_SAMPLING = 0x0000_0002;
    }
}

bitflags! {
    /// Operating mode of a CAN controller
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct OperatingModeFlags: u8 {
        const UNDEFINED = 0x00;
        /// Reception of 11-bit id messages
        const STANDARD = 0x01;
        /// Reception of 29-bit id messages
        const EXTENDED = 0x02;
        /// Selects the Standard/Extended/Undefined subfield
        const MODE_MASK = Self::STANDARD.bits() | Self::EXTENDED.bits();
        /// Reception of error frames
        const ERR_FRAME = 0x04;
        /// Listen only (TX passive)
        const LISTEN_ONLY = 0x08;
        /// Low speed bus interface
        const LOW_SPEED = 0x10;
        /// Automatic bitrate detection
        const AUTO_BAUDRATE = 0x20;
    }
}

bitflags! {
    /// Extended (CAN-FD) operating mode of a CAN controller
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct ExtendedOperatingModeFlags: u8 {
        const UNDEFINED = 0x00;
        /// Extended data length (up to 64 bytes)
        const EXTENDED_DATA_LENGTH = 0x01;
        /// Fast data bit rate
        const FAST_DATA_RATE = 0x02;
        /// Non-ISO CAN-FD frames
        const NON_ISO_CANFD = 0x04;
    }
}

bitflags! {
    /// Status of a CAN controller
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct CtrlStatusFlags: u32 {
        /// Transmission pending
        const TX_PENDING = 0x0000_0001;
        /// Data overrun occurred
        const OVERRUN = 0x0000_0002;
        /// Error warning limit exceeded
        const ERR_LIMIT = 0x0000_0004;
        /// Bus off
        const BUS_OFF = 0x0000_0008;
        /// Init mode active
        const IN_INIT = 0x0000_0010;
        /// Bus coupling error
        const BUS_COUPLING_ERROR = 0x0000_0020;
    }
}

bitflags! {
    /// Operating mode of a LIN controller
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct LinOperatingModeFlags: u8 {
        /// Slave mode is the absence of `MASTER`
        const SLAVE = 0x00;
        const MASTER = 0x01;
        /// Reception of error frames
        const ERRORS = 0x02;
    }
}

bitflags! {
    /// Status of a LIN controller
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct LinCtrlStatusFlags: u32 {
        /// Data overrun occurred
        const OVERRUN = 0x01;
        /// Init mode active
        const IN_INIT = 0x10;
    }
}

bitflags! {
    /// Features a CAN controller may support
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct CanFeatures: u32 {
        /// 11 or 29 bit ids, exclusively
        const STD_OR_EXT = 0x0000_0001;
        /// 11 and 29 bit ids, simultaneously
        const STD_AND_EXT = 0x0000_0002;
        const REMOTE_FRAME = 0x0000_0004;
        const ERR_FRAME = 0x0000_0008;
        const BUSLOAD = 0x0000_0010;
        /// Exact message filter
        const ID_FILTER = 0x0000_0020;
        const LISTEN_ONLY = 0x0000_0040;
        /// Cyclic message scheduler
        const SCHEDULER = 0x0000_0080;
        /// Error frame generation
        const GEN_ERR_FRAME = 0x0000_0100;
        /// Delayed transmission
        const DELAYED_TX = 0x0000_0200;
        const SINGLE_SHOT = 0x0000_0400;
        const HIGH_PRIORITY_MSG = 0x0000_0800;
        const AUTO_BAUDRATE = 0x0000_1000;
        const EXTENDED_DATA_LENGTH = 0x0000_2000;
        const FAST_DATA_RATE = 0x0000_4000;
        const ISO_CANFD = 0x0000_8000;
        const NON_ISO_CANFD = 0x0001_0000;
        /// 64-bit time stamps
        const LONG_BIT_TIMESTAMP = 0x0002_0000;
    }
}

bitflags! {
    /// Physical bus couplings of a CAN controller
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct CanBusCouplings: u32 {
        const UNDEFINED = 0x0000;
        const LOW_SPEED = 0x0001;
        const HIGH_SPEED = 0x0002;
    }
}

bitflags! {
    /// Features a LIN controller may support
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct LinFeatures: u32 {
        const MASTER = 0x0001;
        /// Automatic bitrate detection
        const AUTORATE = 0x0002;
        const ERR_FRAME = 0x0004;
        const BUSLOAD = 0x0008;
        const SLEEP = 0x0010;
        const WAKEUP = 0x0020;
    }
}

macro_rules! impl_flags_display {
    ($($ty:ty => $empty:literal),* $(,)?) => {
        $(
            impl std::fmt::Display for $ty {
                fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                    let mut names = self.iter_names().map(|(name, _)| name).peekable();
                    let unknown = self.bits() & !Self::all().bits();

                    if names.peek().is_none() && unknown == 0 {
                        return f.write_str($empty);
                    }

                    let mut first = true;
                    for name in names {
                        if !first {
                            f.write_str(" | ")?;
                        }
                        f.write_str(name)?;
                        first = false;
                    }
                    if unknown != 0 {
                        if !first {
                            f.write_str(" | ")?;
                        }
                        write!(f, "0x{:X}", unknown)?;
                    }
                    Ok(())
                }
            }
        )*
    };
}

impl_flags_display! {
    BitrateModeFlags => "NONE",
    OperatingModeFlags => "UNDEFINED",
    ExtendedOperatingModeFlags => "UNDEFINED",
    CtrlStatusFlags => "0",
    LinOperatingModeFlags => "SLAVE",
    LinCtrlStatusFlags => "0",
    CanFeatures => "0",
    CanBusCouplings => "UNDEFINED",
    LinFeatures => "0",
}

/// CAN controller type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u32)]
pub enum CanCtrlType {
    #[default]
    Unknown = 0,
    Intel82527 = 1,
    Intel82C200 = 2,
    Intel81C90 = 3,
    Intel81C92 = 4,
    Sja1000 = 5,
    Infineon82C900 = 6,
    TouCan = 7,
    MsCan = 8,
    FlexCan = 9,
    IfiCan = 10,
    CCan = 11,
    BxCan = 12,
    IfiCanFd = 13,
    MCan = 14,
}

impl CanCtrlType {
    /// Decode a native controller type, unknown values map to `Unknown`
    pub fn from_raw(raw: u32) -> Self {
        match raw {
            1 => CanCtrlType::Intel82527,
            2 => CanCtrlType::Intel82C200,
            3 => CanCtrlType::Intel81C90,
            4 => CanCtrlType::Intel81C92,
            5 => CanCtrlType::Sja1000,
            6 => CanCtrlType::Infineon82C900,
            7 => CanCtrlType::TouCan,
            8 => CanCtrlType::MsCan,
            9 => CanCtrlType::FlexCan,
            10 => CanCtrlType::IfiCan,
            11 => CanCtrlType::CCan,
            12 => CanCtrlType::BxCan,
            13 => CanCtrlType::IfiCanFd,
            14 => CanCtrlType::MCan,
            _ => CanCtrlType::Unknown,
        }
    }

    /// Check if the controller is one of the CAN-FD capable families
    pub fn is_fd_family(&self) -> bool {
        matches!(self, CanCtrlType::IfiCanFd | CanCtrlType::MCan)
    }
}

/// Bus type of a controller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u32)]
pub enum VciBusType {
    #[default]
    Unknown = 0,
    Can = 1,
    Lin = 2,
    FlexRay = 4,
}

impl VciBusType {
    /// Decode a native bus type, unknown values map to `Unknown`
    pub fn from_raw(raw: u32) -> Self {
        match raw {
            1 => VciBusType::Can,
            2 => VciBusType::Lin,
            4 => VciBusType::FlexRay,
            _ => VciBusType::Unknown,
        }
    }
}

/// Selects the 11-bit or 29-bit acceptance filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum CanFilter {
    Std = 1,
    Ext = 2,
}

/// Acceptance code that lets every id through
pub const CAN_ACC_CODE_ALL: u32 = 0x0000_0000;
/// Acceptance code that blocks every id
pub const CAN_ACC_CODE_NONE: u32 = 0x8000_0000;
/// Acceptance mask that lets every id through
pub const CAN_ACC_MASK_ALL: u32 = 0x0000_0000;
/// Acceptance mask that blocks every id
pub const CAN_ACC_MASK_NONE: u32 = 0xFFFF_FFFF;
