//! VCI4 contract constants
//!
//! This module contains the literal tables the value model is built from:
//! SJA1000 bit timing register values, LIN bitrate limits, VCI result codes
//! and the byte sizes of the native records exchanged with the driver.

// ============================================================================
// SJA1000 Bit Timing Registers (16 MHz controller clock)
// ============================================================================

/// BTR0 for 10 kbit/s
pub const CAN_BT0_10KB: u8 = 0x31;
/// BTR1 for 10 kbit/s
pub const CAN_BT1_10KB: u8 = 0x1C;
/// BTR0 for 20 kbit/s
pub const CAN_BT0_20KB: u8 = 0x18;
/// BTR1 for 20 kbit/s
pub const CAN_BT1_20KB: u8 = 0x1C;
/// BTR0 for 50 kbit/s
pub const CAN_BT0_50KB: u8 = 0x09;
/// BTR1 for 50 kbit/s
pub const CAN_BT1_50KB: u8 = 0x1C;
/// BTR0 for 100 kbit/s
pub const CAN_BT0_100KB: u8 = 0x04;
/// BTR1 for 100 kbit/s
pub const CAN_BT1_100KB: u8 = 0x1C;
/// BTR0 for 125 kbit/s
pub const CAN_BT0_125KB: u8 = 0x03;
/// BTR1 for 125 kbit/s
pub const CAN_BT1_125KB: u8 = 0x1C;
/// BTR0 for 250 kbit/s
pub const CAN_BT0_250KB: u8 = 0x01;
/// BTR1 for 250 kbit/s
pub const CAN_BT1_250KB: u8 = 0x1C;
/// BTR0 for 500 kbit/s
pub const CAN_BT0_500KB: u8 = 0x00;
/// BTR1 for 500 kbit/s
pub const CAN_BT1_500KB: u8 = 0x1C;
/// BTR0 for 800 kbit/s
pub const CAN_BT0_800KB: u8 = 0x00;
/// BTR1 for 800 kbit/s
pub const CAN_BT1_800KB: u8 = 0x16;
/// BTR0 for 1000 kbit/s
pub const CAN_BT0_1000KB: u8 = 0x00;
/// BTR1 for 1000 kbit/s
pub const CAN_BT1_1000KB: u8 = 0x14;

/// Baud rate prescaler field of BTR0
pub const BTR0_BRP_MASK: u8 = 0x3F;
/// Time segment 1 field of BTR1
pub const BTR1_TSEG1_MASK: u8 = 0x0F;
/// Time segment 2 field of BTR1
pub const BTR1_TSEG2_MASK: u8 = 0x70;
/// Shift of the time segment 2 field in BTR1
pub const BTR1_TSEG2_SHIFT: u8 = 4;

// ============================================================================
// LIN Bitrates
// ============================================================================

/// Bitrate not yet configured
pub const LIN_BITRATE_UNDEF: u16 = 65535;
/// Automatic bitrate detection
pub const LIN_BITRATE_AUTO: u16 = 0;
/// Lowest supported LIN bitrate
pub const LIN_BITRATE_MIN: u16 = 1000;
/// Highest supported LIN bitrate
pub const LIN_BITRATE_MAX: u16 = 20000;

pub const LIN_BITRATE_1000: u16 = 1000;
pub const LIN_BITRATE_1200: u16 = 1200;
pub const LIN_BITRATE_2400: u16 = 2400;
pub const LIN_BITRATE_4800: u16 = 4800;
pub const LIN_BITRATE_9600: u16 = 9600;
pub const LIN_BITRATE_10400: u16 = 10400;
pub const LIN_BITRATE_19200: u16 = 19200;
pub const LIN_BITRATE_20000: u16 = 20000;

// ============================================================================
// VCI Result Codes (HRESULT layout)
// ============================================================================

/// VCI facility code
pub const FACILITY_VCI: u32 = 0x0001_0000;
/// Reserved bit
pub const RESERVED_FLAG: u32 = 0x1000_0000;
/// Severity field mask
pub const SEVERITY_MASK: u32 = 0xC000_0000;
/// Customer bit, set on all VCI codes
pub const CUSTOMER_FLAG: u32 = 0x2000_0000;
/// Informational severity
pub const SEVERITY_INFO: u32 = 0x4000_0000;
/// Warning severity
pub const SEVERITY_WARN: u32 = 0x8000_0000;
/// Error severity
pub const SEVERITY_ERROR: u32 = 0xC000_0000;
/// Common prefix of every VCI error code
pub const SEV_VCI_ERROR: u32 = SEVERITY_ERROR | CUSTOMER_FLAG | FACILITY_VCI;
/// Mask selecting the VCI error index
pub const VCI_ERROR_INDEX_MASK: u32 = 0x0000_FFFF;

/// Operation succeeded
pub const VCI_SUCCESS: u32 = 0;
/// Alias for [`VCI_SUCCESS`]
pub const VCI_OK: u32 = VCI_SUCCESS;

pub const VCI_E_UNEXPECTED: u32 = SEV_VCI_ERROR | 0x0001;
pub const VCI_E_NOT_IMPLEMENTED: u32 = SEV_VCI_ERROR | 0x0002;
pub const VCI_E_OUTOFMEMORY: u32 = SEV_VCI_ERROR | 0x0003;
pub const VCI_E_INVALIDARG: u32 = SEV_VCI_ERROR | 0x0004;
pub const VCI_E_NOINTERFACE: u32 = SEV_VCI_ERROR | 0x0005;
pub const VCI_E_INVPOINTER: u32 = SEV_VCI_ERROR | 0x0006;
pub const VCI_E_INVHANDLE: u32 = SEV_VCI_ERROR | 0x0007;
pub const VCI_E_ABORT: u32 = SEV_VCI_ERROR | 0x0008;
pub const VCI_E_FAIL: u32 = SEV_VCI_ERROR | 0x0009;
pub const VCI_E_ACCESSDENIED: u32 = SEV_VCI_ERROR | 0x000A;
pub const VCI_E_TIMEOUT: u32 = SEV_VCI_ERROR | 0x000B;
pub const VCI_E_BUSY: u32 = SEV_VCI_ERROR | 0x000C;
pub const VCI_E_PENDING: u32 = SEV_VCI_ERROR | 0x000D;
pub const VCI_E_NO_DATA: u32 = SEV_VCI_ERROR | 0x000E;
pub const VCI_E_NO_MORE_ITEMS: u32 = SEV_VCI_ERROR | 0x000F;
pub const VCI_E_NOT_INITIALIZED: u32 = SEV_VCI_ERROR | 0x0010;
pub const VCI_E_ALREADY_INITIALIZED: u32 = SEV_VCI_ERROR | 0x0011;
pub const VCI_E_RXQUEUE_EMPTY: u32 = SEV_VCI_ERROR | 0x0012;
pub const VCI_E_TXQUEUE_FULL: u32 = SEV_VCI_ERROR | 0x0013;
pub const VCI_E_BUFFER_OVERFLOW: u32 = SEV_VCI_ERROR | 0x0014;
pub const VCI_E_INVALID_STATE: u32 = SEV_VCI_ERROR | 0x0015;
pub const VCI_E_OBJECT_ALREADY_EXISTS: u32 = SEV_VCI_ERROR | 0x0016;
pub const VCI_E_INVALID_INDEX: u32 = SEV_VCI_ERROR | 0x0017;
pub const VCI_E_END_OF_FILE: u32 = SEV_VCI_ERROR | 0x0018;
pub const VCI_E_DISCONNECTED: u32 = SEV_VCI_ERROR | 0x0019;
pub const VCI_E_INVALID_FIRMWARE: u32 = SEV_VCI_ERROR | 0x001A;
/// Alias for [`VCI_E_INVALID_FIRMWARE`]
pub const VCI_E_WRONG_FLASHFWVERSION: u32 = VCI_E_INVALID_FIRMWARE;
pub const VCI_E_INVALID_LICENSE: u32 = SEV_VCI_ERROR | 0x001B;
pub const VCI_E_NO_SUCH_LICENSE: u32 = SEV_VCI_ERROR | 0x001C;
pub const VCI_E_LICENSE_EXPIRED: u32 = SEV_VCI_ERROR | 0x001D;
pub const VCI_E_LICENSE_QUOTA_EXCEEDED: u32 = SEV_VCI_ERROR | 0x001E;
pub const VCI_E_INVALID_TIMING: u32 = SEV_VCI_ERROR | 0x001F;
pub const VCI_E_IN_USE: u32 = SEV_VCI_ERROR | 0x0020;
pub const VCI_E_NO_SUCH_DEVICE: u32 = SEV_VCI_ERROR | 0x0021;
pub const VCI_E_DEVICE_NOT_CONNECTED: u32 = SEV_VCI_ERROR | 0x0022;
pub const VCI_E_DEVICE_NOT_READY: u32 = SEV_VCI_ERROR | 0x0023;
pub const VCI_E_TYPE_MISMATCH: u32 = SEV_VCI_ERROR | 0x0024;
pub const VCI_E_NOT_SUPPORTED: u32 = SEV_VCI_ERROR | 0x0025;
pub const VCI_E_DUPLICATE_OBJECTID: u32 = SEV_VCI_ERROR | 0x0026;
pub const VCI_E_OBJECTID_NOT_FOUND: u32 = SEV_VCI_ERROR | 0x0027;
pub const VCI_E_WRONG_LEVEL: u32 = SEV_VCI_ERROR | 0x0028;
pub const VCI_E_WRONG_DRV_VERSION: u32 = SEV_VCI_ERROR | 0x0029;
pub const VCI_E_LUIDS_EXHAUSTED: u32 = SEV_VCI_ERROR | 0x002A;

/// Check whether a result code carries error severity
pub fn is_error_code(code: u32) -> bool {
    (code & SEVERITY_MASK) == SEVERITY_ERROR
}

/// Check whether a result code belongs to the VCI facility
pub fn is_vci_code(code: u32) -> bool {
    (code & (CUSTOMER_FLAG | FACILITY_VCI)) == (CUSTOMER_FLAG | FACILITY_VCI)
}

// ============================================================================
// Native Record Sizes
// ============================================================================

/// CANBTP: mode, bps, ts1, ts2, sjw, tdo
pub const NATIVE_CAN_BTP_SIZE: usize = 16;
/// CANINITLINE: opmode, btr0, btr1, reserved
pub const NATIVE_CAN_INIT_LINE_SIZE: usize = 4;
/// CANINITLINE2: modes, filter sizes, SDR and FDR timing
pub const NATIVE_CAN_INIT_LINE2_SIZE: usize = 44;
/// CANLINESTATUS: opmode, btr0, btr1, busload, status
pub const NATIVE_CAN_LINE_STATUS_SIZE: usize = 8;
/// CANLINESTATUS2: modes, busload, SDR and FDR timing, status
pub const NATIVE_CAN_LINE_STATUS2_SIZE: usize = 40;
/// CANCHANSTATUS: line status, activation, overrun, FIFO loads
pub const NATIVE_CAN_CHAN_STATUS_SIZE: usize = 20;
/// LININITLINE: opmode, reserved, bitrate
pub const NATIVE_LIN_INIT_LINE_SIZE: usize = 4;
/// LINLINESTATUS: opmode, busload, bitrate, status
pub const NATIVE_LIN_LINE_STATUS_SIZE: usize = 8;
/// LINMONITORSTATUS: line status, activation, overrun, FIFO load
pub const NATIVE_LIN_MONITOR_STATUS_SIZE: usize = 20;

// ============================================================================
// CAN Filter Modes (CANINITLINE2.bSFMode / bEFMode)
// ============================================================================

/// Invalid or unknown filter mode
pub const CAN_FILTER_VOID: u8 = 0x00;
/// Lock filter, all ids are rejected
pub const CAN_FILTER_LOCK: u8 = 0x01;
/// Bypass filter, all ids pass
pub const CAN_FILTER_PASS: u8 = 0x02;
/// Inclusive filtering, registered ids pass
pub const CAN_FILTER_INCL: u8 = 0x03;
/// Exclusive filtering, registered ids are rejected
pub const CAN_FILTER_EXCL: u8 = 0x04;
/// Flag: pass self-reception messages from all channels
pub const CAN_FILTER_SRRA: u8 = 0x80;
