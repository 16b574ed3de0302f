//! VCI4 Bit Timing and Line Status Model for Rust
//!
//! This crate provides the value types of the VCI4 driver contract for
//! CAN, CAN-FD and LIN controllers: bit timing values and their preset
//! catalogs, line and channel status snapshots, socket capabilities, and the
//! native records exchanged with the driver.
//!
//! # Features
//!
//! - SJA1000 style BTR0/BTR1 timing with the CiA preset table
//! - Six field CAN-FD timing with CiA, IFI and CAN-FD catalogs
//! - Arbitration/data bitrate pairs for short and long bus lines
//! - LIN bitrates with presets and range checks
//! - Line status predicates over operating mode and controller status
//! - `#[repr(C)]` driver records with little-endian pack/unpack
//! - Driver traits mapping VCI result codes into [`VciError`]
//!
//! # Example
//!
//! ```
//! use vci4::{
//!     BitTimingValue, CtrlStatusFlags, FdBitratePair, LineStatusModel, OperatingModeFlags,
//! };
//!
//! // Classic CAN presets
//! for bitrate in BitTimingValue::cia_all() {
//!     println!("{:<16} {:04X} ticks={}", bitrate.name(), bitrate.as_u16(), bitrate.bit_time_ticks());
//! }
//!
//! // CAN-FD on a short bus line
//! let pair = &FdBitratePair::short_line_all()[1];
//! println!("{}", pair);
//!
//! // Interpret a status snapshot
//! let status = LineStatusModel::new(
//!     OperatingModeFlags::STANDARD | OperatingModeFlags::ERR_FRAME,
//!     12,
//!     CtrlStatusFlags::ERR_LIMIT,
//!     BitTimingValue::cia_500k(),
//! );
//! assert!(status.is_mode_standard());
//! assert!(status.has_error_overrun());
//! assert!(!status.is_bus_off());
//! ```

pub mod bitrate;
pub mod constants;
pub mod control;
pub mod error;
pub mod flags;
pub mod native;
pub mod socket;
pub mod status;

// Re-export main types at crate root
pub use constants::{
    // Result codes
    is_error_code,
    is_vci_code,
    // LIN bitrate limits
    LIN_BITRATE_AUTO,
    LIN_BITRATE_MAX,
    LIN_BITRATE_MIN,
    LIN_BITRATE_UNDEF,
    VCI_OK,
    VCI_SUCCESS,
};

pub use bitrate::{BitTimingValue, BitTimingValue2, FdBitratePair, LinBitrate};
pub use control::{
    CanChannel, CanControl, CanControl2, CanFilterControl, CanFilterMode, CanInitLine,
    CanInitLine2, LinControl, LinInitLine, LinMonitor, LineControl,
};
pub use error::{check, Result, VciError};
pub use flags::{
    BitrateModeFlags, CanBusCouplings, CanCtrlType, CanFeatures, CanFilter, CtrlStatusFlags,
    ExtendedOperatingModeFlags, LinCtrlStatusFlags, LinFeatures, LinOperatingModeFlags,
    OperatingModeFlags, VciBusType, CAN_ACC_CODE_ALL, CAN_ACC_CODE_NONE, CAN_ACC_MASK_ALL,
    CAN_ACC_MASK_NONE,
};
pub use socket::{CanSocketInfo, CanSocketInfo2, LinSocketInfo};
pub use status::{
    CanChannelStatus, LineStatusModel, LineStatusModel2, LinLineStatusModel, LinMonitorStatus,
};
