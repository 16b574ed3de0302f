//! Error types for the VCI4 contract
//!
//! The value model itself never fails. Errors only arise at the driver
//! boundary: result codes reported by the native driver and native records
//! that are too short to decode.

use thiserror::Error;

use crate::constants::*;

/// Result type alias for VCI operations
pub type Result<T> = std::result::Result<T, VciError>;

/// Error types for VCI operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VciError {
    /// Unexpected failure inside the driver
    #[error("Unexpected error")]
    Unexpected,

    /// Function is not implemented by the driver
    #[error("Function not implemented")]
    NotImplemented,

    /// Driver ran out of memory
    #[error("Out of memory")]
    OutOfMemory,

    /// One or more arguments are invalid
    #[error("Invalid argument")]
    InvalidArgument,

    /// Requested interface is not supported
    #[error("Interface not supported")]
    NoInterface,

    /// Invalid pointer passed to the driver
    #[error("Invalid pointer")]
    InvalidPointer,

    /// Invalid handle passed to the driver
    #[error("Invalid handle")]
    InvalidHandle,

    /// Operation was aborted
    #[error("Operation aborted")]
    Aborted,

    /// Unspecified failure
    #[error("Operation failed")]
    Failed,

    /// Access denied
    #[error("Access denied")]
    AccessDenied,

    /// Operation timed out
    #[error("Timeout")]
    Timeout,

    /// Resource is busy
    #[error("Resource busy")]
    Busy,

    /// Operation is pending
    #[error("Operation pending")]
    Pending,

    /// No data available
    #[error("No data available")]
    NoData,

    /// No more items to enumerate
    #[error("No more items")]
    NoMoreItems,

    /// Component is not initialized
    #[error("Not initialized")]
    NotInitialized,

    /// Component is already initialized
    #[error("Already initialized")]
    AlreadyInitialized,

    /// Receive queue is empty
    #[error("Receive queue empty")]
    RxQueueEmpty,

    /// Transmit queue is full
    #[error("Transmit queue full")]
    TxQueueFull,

    /// Buffer overflow
    #[error("Buffer overflow")]
    BufferOverflow,

    /// Object is in an invalid state for the request
    #[error("Invalid state")]
    InvalidState,

    /// Object already exists
    #[error("Object already exists")]
    ObjectAlreadyExists,

    /// Index out of range
    #[error("Invalid index")]
    InvalidIndex,

    /// End of file reached
    #[error("End of file")]
    EndOfFile,

    /// Device was disconnected
    #[error("Device disconnected")]
    Disconnected,

    /// Firmware is invalid or has the wrong version
    #[error("Invalid firmware")]
    InvalidFirmware,

    /// License is invalid
    #[error("Invalid license")]
    InvalidLicense,

    /// Required license is missing
    #[error("No such license")]
    NoSuchLicense,

    /// License has expired
    #[error("License expired")]
    LicenseExpired,

    /// License quota exceeded
    #[error("License quota exceeded")]
    LicenseQuotaExceeded,

    /// Bit timing rejected by the controller
    #[error("Invalid bit timing")]
    InvalidTiming,

    /// Resource is in use
    #[error("Resource in use")]
    InUse,

    /// No such device
    #[error("No such device")]
    NoSuchDevice,

    /// Device is not connected
    #[error("Device not connected")]
    DeviceNotConnected,

    /// Device is not ready
    #[error("Device not ready")]
    DeviceNotReady,

    /// Type mismatch
    #[error("Type mismatch")]
    TypeMismatch,

    /// Feature not supported by the controller
    #[error("Not supported")]
    NotSupported,

    /// Object id already registered
    #[error("Duplicate object id")]
    DuplicateObjectId,

    /// Object id not found
    #[error("Object id not found")]
    ObjectIdNotFound,

    /// Wrong access level
    #[error("Wrong level")]
    WrongLevel,

    /// Driver version mismatch
    #[error("Wrong driver version")]
    WrongDriverVersion,

    /// No more locally unique ids available
    #[error("LUIDs exhausted")]
    LuidsExhausted,

    /// Error code without a known VCI meaning
    #[error("Unknown VCI error 0x{0:08X}")]
    Unknown(u32),

    /// Native record buffer too short to decode
    #[error("Invalid {record} record: expected {expected} bytes, got {actual}")]
    InvalidRecord {
        record: &'static str,
        expected: usize,
        actual: usize,
    },
}

impl VciError {
    /// Map a native result code to an error
    ///
    /// Returns `None` for codes without error severity.
    pub fn from_code(code: u32) -> Option<Self> {
        if !is_error_code(code) {
            return None;
        }

        let err = match code {
            VCI_E_UNEXPECTED => VciError::Unexpected,
            VCI_E_NOT_IMPLEMENTED => VciError::NotImplemented,
            VCI_E_OUTOFMEMORY => VciError::OutOfMemory,
            VCI_E_INVALIDARG => VciError::InvalidArgument,
            VCI_E_NOINTERFACE => VciError::NoInterface,
            VCI_E_INVPOINTER => VciError::InvalidPointer,
            VCI_E_INVHANDLE => VciError::InvalidHandle,
            VCI_E_ABORT => VciError::Aborted,
            VCI_E_FAIL => VciError::Failed,
            VCI_E_ACCESSDENIED => VciError::AccessDenied,
            VCI_E_TIMEOUT => VciError::Timeout,
            VCI_E_BUSY => VciError::Busy,
            VCI_E_PENDING => VciError::Pending,
            VCI_E_NO_DATA => VciError::NoData,
            VCI_E_NO_MORE_ITEMS => VciError::NoMoreItems,
            VCI_E_NOT_INITIALIZED => VciError::NotInitialized,
            VCI_E_ALREADY_INITIALIZED => VciError::AlreadyInitialized,
            VCI_E_RXQUEUE_EMPTY => VciError::RxQueueEmpty,
            VCI_E_TXQUEUE_FULL => VciError::TxQueueFull,
            VCI_E_BUFFER_OVERFLOW => VciError::BufferOverflow,
            VCI_E_INVALID_STATE => VciError::InvalidState,
            VCI_E_OBJECT_ALREADY_EXISTS => VciError::ObjectAlreadyExists,
            VCI_E_INVALID_INDEX => VciError::InvalidIndex,
            VCI_E_END_OF_FILE => VciError::EndOfFile,
            VCI_E_DISCONNECTED => VciError::Disconnected,
            VCI_E_INVALID_FIRMWARE => VciError::InvalidFirmware,
            VCI_E_INVALID_LICENSE => VciError::InvalidLicense,
            VCI_E_NO_SUCH_LICENSE => VciError::NoSuchLicense,
            VCI_E_LICENSE_EXPIRED => VciError::LicenseExpired,
            VCI_E_LICENSE_QUOTA_EXCEEDED => VciError::LicenseQuotaExceeded,
            VCI_E_INVALID_TIMING => VciError::InvalidTiming,
            VCI_E_IN_USE => VciError::InUse,
            VCI_E_NO_SUCH_DEVICE => VciError::NoSuchDevice,
            VCI_E_DEVICE_NOT_CONNECTED => VciError::DeviceNotConnected,
            VCI_E_DEVICE_NOT_READY => VciError::DeviceNotReady,
            VCI_E_TYPE_MISMATCH => VciError::TypeMismatch,
            VCI_E_NOT_SUPPORTED => VciError::NotSupported,
            VCI_E_DUPLICATE_OBJECTID => VciError::DuplicateObjectId,
            VCI_E_OBJECTID_NOT_FOUND => VciError::ObjectIdNotFound,
            VCI_E_WRONG_LEVEL => VciError::WrongLevel,
            VCI_E_WRONG_DRV_VERSION => VciError::WrongDriverVersion,
            VCI_E_LUIDS_EXHAUSTED => VciError::LuidsExhausted,
            other => VciError::Unknown(other),
        };

        Some(err)
    }

    /// Get the native result code for this error
    ///
    /// `InvalidRecord` has no native counterpart and reports `VCI_E_INVALIDARG`.
    pub fn code(&self) -> u32 {
        match self {
            VciError::Unexpected => VCI_E_UNEXPECTED,
            VciError::NotImplemented => VCI_E_NOT_IMPLEMENTED,
            VciError::OutOfMemory => VCI_E_OUTOFMEMORY,
            VciError::InvalidArgument => VCI_E_INVALIDARG,
            VciError::NoInterface => VCI_E_NOINTERFACE,
            VciError::InvalidPointer => VCI_E_INVPOINTER,
            VciError::InvalidHandle => VCI_E_INVHANDLE,
            VciError::Aborted => VCI_E_ABORT,
            VciError::Failed => VCI_E_FAIL,
            VciError::AccessDenied => VCI_E_ACCESSDENIED,
            VciError::Timeout => VCI_E_TIMEOUT,
            VciError::Busy => VCI_E_BUSY,
            VciError::Pending => VCI_E_PENDING,
            VciError::NoData => VCI_E_NO_DATA,
            VciError::NoMoreItems => VCI_E_NO_MORE_ITEMS,
            VciError::NotInitialized => VCI_E_NOT_INITIALIZED,
            VciError::AlreadyInitialized => VCI_E_ALREADY_INITIALIZED,
            VciError::RxQueueEmpty => VCI_E_RXQUEUE_EMPTY,
            VciError::TxQueueFull => VCI_E_TXQUEUE_FULL,
            VciError::BufferOverflow => VCI_E_BUFFER_OVERFLOW,
            VciError::InvalidState => VCI_E_INVALID_STATE,
            VciError::ObjectAlreadyExists => VCI_E_OBJECT_ALREADY_EXISTS,
            VciError::InvalidIndex => VCI_E_INVALID_INDEX,
            VciError::EndOfFile => VCI_E_END_OF_FILE,
            VciError::Disconnected => VCI_E_DISCONNECTED,
            VciError::InvalidFirmware => VCI_E_INVALID_FIRMWARE,
            VciError::InvalidLicense => VCI_E_INVALID_LICENSE,
            VciError::NoSuchLicense => VCI_E_NO_SUCH_LICENSE,
            VciError::LicenseExpired => VCI_E_LICENSE_EXPIRED,
            VciError::LicenseQuotaExceeded => VCI_E_LICENSE_QUOTA_EXCEEDED,
            VciError::InvalidTiming => VCI_E_INVALID_TIMING,
            VciError::InUse => VCI_E_IN_USE,
            VciError::NoSuchDevice => VCI_E_NO_SUCH_DEVICE,
            VciError::DeviceNotConnected => VCI_E_DEVICE_NOT_CONNECTED,
            VciError::DeviceNotReady => VCI_E_DEVICE_NOT_READY,
            VciError::TypeMismatch => VCI_E_TYPE_MISMATCH,
            VciError::NotSupported => VCI_E_NOT_SUPPORTED,
            VciError::DuplicateObjectId => VCI_E_DUPLICATE_OBJECTID,
            VciError::ObjectIdNotFound => VCI_E_OBJECTID_NOT_FOUND,
            VciError::WrongLevel => VCI_E_WRONG_LEVEL,
            VciError::WrongDriverVersion => VCI_E_WRONG_DRV_VERSION,
            VciError::LuidsExhausted => VCI_E_LUIDS_EXHAUSTED,
            VciError::Unknown(code) => *code,
            VciError::InvalidRecord { .. } => VCI_E_INVALIDARG,
        }
    }

    /// Check if this error is a timeout error
    pub fn is_timeout(&self) -> bool {
        matches!(self, VciError::Timeout)
    }

    /// Check if this error reports a FIFO condition rather than a fault
    pub fn is_queue_condition(&self) -> bool {
        matches!(
            self,
            VciError::RxQueueEmpty | VciError::TxQueueFull | VciError::NoData
        )
    }

    /// Check if this error means the device went away
    pub fn is_device_lost(&self) -> bool {
        matches!(
            self,
            VciError::Disconnected | VciError::DeviceNotConnected | VciError::NoSuchDevice
        )
    }
}

/// Turn a native result code into a `Result`
pub fn check(code: u32) -> Result<()> {
    match VciError::from_code(code) {
        Some(err) => Err(err),
        None => Ok(()),
    }
}

/// Ensure a native buffer holds at least `expected` bytes
pub(crate) fn ensure_len(record: &'static str, data: &[u8], expected: usize) -> Result<()> {
    if data.len() < expected {
        return Err(VciError::InvalidRecord {
            record,
            expected,
            actual: data.len(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_codes_are_not_errors() {
        assert_eq!(VciError::from_code(VCI_SUCCESS), None);
        assert_eq!(VciError::from_code(SEVERITY_WARN | FACILITY_VCI | 1), None);
        assert!(check(VCI_OK).is_ok());
    }

    #[test]
    fn test_code_mapping_is_stable() {
        let codes = [
            VCI_E_UNEXPECTED,
            VCI_E_TIMEOUT,
            VCI_E_RXQUEUE_EMPTY,
            VCI_E_INVALID_TIMING,
            VCI_E_NOT_SUPPORTED,
            VCI_E_LUIDS_EXHAUSTED,
        ];
        for code in codes {
            let err = VciError::from_code(code).unwrap();
            assert_eq!(err.code(), code);
        }
    }

    #[test]
    fn test_invalid_firmware_alias() {
        assert_eq!(
            VciError::from_code(VCI_E_WRONG_FLASHFWVERSION),
            Some(VciError::InvalidFirmware)
        );
    }

    #[test]
    fn test_unknown_error_code() {
        let code = SEV_VCI_ERROR | 0x0100;
        assert_eq!(VciError::from_code(code), Some(VciError::Unknown(code)));
        assert_eq!(check(code), Err(VciError::Unknown(code)));
        assert_eq!(
            VciError::Unknown(code).to_string(),
            format!("Unknown VCI error 0x{:08X}", code)
        );
    }

    #[test]
    fn test_error_classification() {
        assert!(VciError::Timeout.is_timeout());
        assert!(!VciError::Busy.is_timeout());
        assert!(VciError::RxQueueEmpty.is_queue_condition());
        assert!(VciError::TxQueueFull.is_queue_condition());
        assert!(VciError::Disconnected.is_device_lost());
        assert!(!VciError::InvalidTiming.is_device_lost());
    }

    #[test]
    fn test_vci_code_detection() {
        assert!(is_vci_code(VCI_E_TIMEOUT));
        assert!(is_vci_code(VCI_E_INVALIDARG));
        assert!(is_error_code(VCI_E_TIMEOUT));
        // generic HRESULT error, no customer flag or VCI facility
        assert!(!is_vci_code(0x8000_4005));
        // facility without customer flag
        assert!(!is_vci_code(SEVERITY_ERROR | FACILITY_VCI | 0x0001));
        assert!(!is_vci_code(VCI_OK));
    }

    #[test]
    fn test_ensure_len() {
        assert!(ensure_len("CANBTP", &[0u8; 16], 16).is_ok());
        let err = ensure_len("CANBTP", &[0u8; 3], 16).unwrap_err();
        assert_eq!(
            err,
            VciError::InvalidRecord {
                record: "CANBTP",
                expected: 16,
                actual: 3
            }
        );
        assert_eq!(err.code(), VCI_E_INVALIDARG);
    }
}
