//! Driver control traits
//!
//! The VCI driver is an external collaborator. It is represented by a set of
//! traits whose required `raw_*` methods take native records and return the
//! driver's result code. The provided methods build those records from the
//! typed init structures, trace them, and map result codes into [`Result`].

use log::{debug, warn};

use crate::bitrate::{BitTimingValue, FdBitratePair, LinBitrate};
use crate::constants::*;
use crate::error::{check, Result, VciError};
use crate::flags::{
    CanFilter, ExtendedOperatingModeFlags, LinOperatingModeFlags, OperatingModeFlags,
};
use crate::native::{
    NativeCanBtp, NativeCanChanStatus, NativeCanInitLine, NativeCanInitLine2,
    NativeCanLineStatus, NativeCanLineStatus2, NativeLinInitLine, NativeLinLineStatus,
    NativeLinMonitorStatus,
};
use crate::status::{
    CanChannelStatus, LineStatusModel, LineStatusModel2, LinLineStatusModel, LinMonitorStatus,
};

/// Maximum number of entries in a baud rate detection table
pub const CAN_BTR_TABLE_MAX: usize = 64;

fn checked(operation: &str, code: u32) -> Result<()> {
    check(code).map_err(|err| {
        warn!("{} failed: {} (0x{:08X})", operation, err, code);
        err
    })
}

/// Filter mode of a CAN-FD acceptance filter list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum CanFilterMode {
    /// All ids are rejected
    Lock = CAN_FILTER_LOCK,
    /// All ids pass
    #[default]
    Pass = CAN_FILTER_PASS,
    /// Registered ids pass
    Inclusive = CAN_FILTER_INCL,
    /// Registered ids are rejected
    Exclusive = CAN_FILTER_EXCL,
}

impl CanFilterMode {
    /// Decode a native filter mode, ignoring the self-reception flag
    pub fn from_raw(raw: u8) -> Option<Self> {
        match raw & !CAN_FILTER_SRRA {
            CAN_FILTER_LOCK => Some(CanFilterMode::Lock),
            CAN_FILTER_PASS => Some(CanFilterMode::Pass),
            CAN_FILTER_INCL => Some(CanFilterMode::Inclusive),
            CAN_FILTER_EXCL => Some(CanFilterMode::Exclusive),
            _ => None,
        }
    }

    /// Native filter mode value
    pub fn as_raw(&self) -> u8 {
        *self as u8
    }
}

/// Classic CAN line configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanInitLine {
    pub operating_mode: OperatingModeFlags,
    pub bitrate: BitTimingValue,
}

impl CanInitLine {
    pub fn new(operating_mode: OperatingModeFlags, bitrate: BitTimingValue) -> Self {
        Self {
            operating_mode,
            bitrate,
        }
    }
}

impl From<&CanInitLine> for NativeCanInitLine {
    fn from(init: &CanInitLine) -> Self {
        Self {
            op_mode: init.operating_mode.bits(),
            btr0: init.bitrate.btr0(),
            btr1: init.bitrate.btr1(),
            reserved: 0,
        }
    }
}

/// CAN-FD line configuration
///
/// Filters default to [`CanFilterMode::Pass`] with empty id lists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanInitLine2 {
    pub operating_mode: OperatingModeFlags,
    pub extended_mode: ExtendedOperatingModeFlags,
    pub std_filter_mode: CanFilterMode,
    /// Number of 11-bit ids the filter list can hold
    pub std_filter_size: u32,
    pub ext_filter_mode: CanFilterMode,
    /// Number of 29-bit ids the filter list can hold
    pub ext_filter_size: u32,
    pub bitrates: FdBitratePair,
}

impl CanInitLine2 {
    /// Create a configuration with pass-all filters
    ///
    /// # Arguments
    /// * `operating_mode` - Frame format and controller options
    /// * `extended_mode` - CAN-FD options
    /// * `bitrates` - Arbitration and data phase timing
    pub fn new(
        operating_mode: OperatingModeFlags,
        extended_mode: ExtendedOperatingModeFlags,
        bitrates: FdBitratePair,
    ) -> Self {
        Self {
            operating_mode,
            extended_mode,
            std_filter_mode: CanFilterMode::Pass,
            std_filter_size: 0,
            ext_filter_mode: CanFilterMode::Pass,
            ext_filter_size: 0,
            bitrates,
        }
    }

    /// Set the 11-bit filter mode and list size
    pub fn with_std_filter(mut self, mode: CanFilterMode, size: u32) -> Self {
        self.std_filter_mode = mode;
        self.std_filter_size = size;
        self
    }

    /// Set the 29-bit filter mode and list size
    pub fn with_ext_filter(mut self, mode: CanFilterMode, size: u32) -> Self {
        self.ext_filter_mode = mode;
        self.ext_filter_size = size;
        self
    }
}

impl From<&CanInitLine2> for NativeCanInitLine2 {
    fn from(init: &CanInitLine2) -> Self {
        Self {
            op_mode: init.operating_mode.bits(),
            ex_mode: init.extended_mode.bits(),
            sf_mode: init.std_filter_mode.as_raw(),
            ef_mode: init.ext_filter_mode.as_raw(),
            sf_ids: init.std_filter_size,
            ef_ids: init.ext_filter_size,
            btp_sdr: NativeCanBtp::from(init.bitrates.standard_bitrate()),
            btp_fdr: NativeCanBtp::from(init.bitrates.fast_bitrate()),
        }
    }
}

/// LIN line configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinInitLine {
    pub operating_mode: LinOperatingModeFlags,
    pub bitrate: LinBitrate,
}

impl LinInitLine {
    pub fn new(operating_mode: LinOperatingModeFlags, bitrate: LinBitrate) -> Self {
        Self {
            operating_mode,
            bitrate,
        }
    }
}

impl From<&LinInitLine> for NativeLinInitLine {
    fn from(init: &LinInitLine) -> Self {
        Self {
            op_mode: init.operating_mode.bits(),
            reserved: 0,
            bitrate: init.bitrate.as_u16(),
        }
    }
}

/// Start, stop and reset of a controller line
pub trait LineControl {
    fn raw_reset_line(&mut self) -> u32;
    fn raw_start_line(&mut self) -> u32;
    fn raw_stop_line(&mut self) -> u32;

    /// Reset the controller, stopping the line and clearing its configuration
    fn reset_line(&mut self) -> Result<()> {
        debug!("reset line");
        checked("reset line", self.raw_reset_line())
    }

    /// Start the line, the controller joins the bus
    fn start_line(&mut self) -> Result<()> {
        debug!("start line");
        checked("start line", self.raw_start_line())
    }

    /// Stop the line, the configuration is kept
    fn stop_line(&mut self) -> Result<()> {
        debug!("stop line");
        checked("stop line", self.raw_stop_line())
    }
}

/// Acceptance filter and filter id list of a CAN controller
pub trait CanFilterControl {
    fn raw_set_acc_filter(&mut self, select: u8, code: u32, mask: u32) -> u32;
    fn raw_add_filter_ids(&mut self, select: u8, code: u32, mask: u32) -> u32;
    fn raw_rem_filter_ids(&mut self, select: u8, code: u32, mask: u32) -> u32;

    /// Set the acceptance code and mask of a filter
    ///
    /// Use [`CAN_ACC_CODE_ALL`](crate::CAN_ACC_CODE_ALL) and
    /// [`CAN_ACC_MASK_ALL`](crate::CAN_ACC_MASK_ALL) to let every id through.
    fn set_acc_filter(&mut self, select: CanFilter, code: u32, mask: u32) -> Result<()> {
        debug!(
            "set acc filter {:?} code=0x{:08X} mask=0x{:08X}",
            select, code, mask
        );
        checked(
            "set acc filter",
            self.raw_set_acc_filter(select as u8, code, mask),
        )
    }

    /// Register the ids matching `code`/`mask` in the filter list
    fn add_filter_ids(&mut self, select: CanFilter, code: u32, mask: u32) -> Result<()> {
        debug!(
            "add filter ids {:?} code=0x{:08X} mask=0x{:08X}",
            select, code, mask
        );
        checked(
            "add filter ids",
            self.raw_add_filter_ids(select as u8, code, mask),
        )
    }

    /// Remove the ids matching `code`/`mask` from the filter list
    fn rem_filter_ids(&mut self, select: CanFilter, code: u32, mask: u32) -> Result<()> {
        debug!(
            "remove filter ids {:?} code=0x{:08X} mask=0x{:08X}",
            select, code, mask
        );
        checked(
            "remove filter ids",
            self.raw_rem_filter_ids(select as u8, code, mask),
        )
    }
}

/// Classic CAN controller
///
/// # Example
///
/// ```no_run
/// use vci4::{BitTimingValue, CanControl, CanInitLine, LineControl, OperatingModeFlags};
///
/// fn bring_up(ctrl: &mut impl CanControl) -> vci4::Result<()> {
///     let init = CanInitLine::new(
///         OperatingModeFlags::STANDARD | OperatingModeFlags::ERR_FRAME,
///         BitTimingValue::cia_500k(),
///     );
///     ctrl.init_line(&init)?;
///     ctrl.start_line()?;
///
///     let status = ctrl.line_status()?;
///     println!("{}", status);
///     Ok(())
/// }
/// ```
pub trait CanControl: LineControl + CanFilterControl {
    fn raw_init_line(&mut self, init: &NativeCanInitLine) -> u32;
    fn raw_line_status(&self, status: &mut NativeCanLineStatus) -> u32;
    /// Run baud rate detection over a BTR0/BTR1 table
    ///
    /// On success `index` holds the position of the detected entry.
    fn raw_detect_baud(&mut self, timeout_ms: u16, btr0: &[u8], btr1: &[u8], index: &mut i32)
        -> u32;

    /// Initialize the line with an operating mode and bit timing
    fn init_line(&mut self, init: &CanInitLine) -> Result<()> {
        let native = NativeCanInitLine::from(init);
        debug!(
            "CANINITLINE {{ op_mode=0x{:02X}, btr0=0x{:02X}, btr1=0x{:02X} }} ({})",
            native.op_mode,
            native.btr0,
            native.btr1,
            init.bitrate
        );
        checked("init line", self.raw_init_line(&native))
    }

    /// Query the current line status
    fn line_status(&self) -> Result<LineStatusModel> {
        let mut native = NativeCanLineStatus::default();
        checked("line status", self.raw_line_status(&mut native))?;
        Ok(LineStatusModel::from(&native))
    }

    /// Detect which bit timing of `table` the bus is running at
    ///
    /// The table is handed to the driver in batches of at most
    /// [`CAN_BTR_TABLE_MAX`] entries, stopping at the first batch that
    /// detects a match.
    ///
    /// # Arguments
    /// * `timeout_ms` - Time to listen per table entry
    /// * `table` - Candidate timings
    ///
    /// # Returns
    /// Index of the detected entry in `table`
    fn detect_baud(&mut self, timeout_ms: u16, table: &[BitTimingValue]) -> Result<usize> {
        if table.is_empty() {
            return Err(VciError::InvalidArgument);
        }
        let mut last_err = VciError::Failed;
        for (batch, chunk) in table.chunks(CAN_BTR_TABLE_MAX).enumerate() {
            let offset = batch * CAN_BTR_TABLE_MAX;
            let btr0: Vec<u8> = chunk.iter().map(BitTimingValue::btr0).collect();
            let btr1: Vec<u8> = chunk.iter().map(BitTimingValue::btr1).collect();
            let mut index = -1;
            debug!(
                "detect baud over entries {}..{}, {} ms each",
                offset,
                offset + chunk.len(),
                timeout_ms
            );
            match checked(
                "detect baud",
                self.raw_detect_baud(timeout_ms, &btr0, &btr1, &mut index),
            ) {
                Ok(()) => {
                    return usize::try_from(index)
                        .ok()
                        .filter(|&i| i < chunk.len())
                        .map(|i| offset + i)
                        .ok_or(VciError::InvalidIndex);
                }
                Err(err) => last_err = err,
            }
        }
        Err(last_err)
    }
}

/// CAN-FD capable controller
pub trait CanControl2: LineControl + CanFilterControl {
    fn raw_init_line(&mut self, init: &NativeCanInitLine2) -> u32;
    fn raw_line_status(&self, status: &mut NativeCanLineStatus2) -> u32;

    /// Initialize the line with modes, filter setup and both phase timings
    fn init_line(&mut self, init: &CanInitLine2) -> Result<()> {
        let native = NativeCanInitLine2::from(init);
        debug!(
            "CANINITLINE2 {{ op_mode=0x{:02X}, ex_mode=0x{:02X}, sf_mode={}, ef_mode={}, sf_ids={}, ef_ids={} }}",
            native.op_mode,
            native.ex_mode,
            native.sf_mode,
            native.ef_mode,
            native.sf_ids,
            native.ef_ids
        );
        debug!("  sdr {:?}", native.btp_sdr);
        debug!("  fdr {:?}", native.btp_fdr);
        checked("init line", self.raw_init_line(&native))
    }

    /// Query the current line status
    fn line_status(&self) -> Result<LineStatusModel2> {
        let mut native = NativeCanLineStatus2::default();
        checked("line status", self.raw_line_status(&mut native))?;
        Ok(LineStatusModel2::from(&native))
    }
}

/// CAN message channel
pub trait CanChannel {
    fn raw_channel_status(&self, status: &mut NativeCanChanStatus) -> u32;

    /// Query the channel status
    fn channel_status(&self) -> Result<CanChannelStatus> {
        let mut native = NativeCanChanStatus::default();
        checked("channel status", self.raw_channel_status(&mut native))?;
        Ok(CanChannelStatus::from(&native))
    }
}

/// LIN controller
pub trait LinControl: LineControl {
    fn raw_init_line(&mut self, init: &NativeLinInitLine) -> u32;
    fn raw_line_status(&self, status: &mut NativeLinLineStatus) -> u32;

    /// Initialize the line with an operating mode and bitrate
    fn init_line(&mut self, init: &LinInitLine) -> Result<()> {
        let native = NativeLinInitLine::from(init);
        debug!(
            "LININITLINE {{ op_mode=0x{:02X}, bitrate={} }}",
            native.op_mode, native.bitrate
        );
        checked("init line", self.raw_init_line(&native))
    }

    /// Query the current line status
    fn line_status(&self) -> Result<LinLineStatusModel> {
        let mut native = NativeLinLineStatus::default();
        checked("line status", self.raw_line_status(&mut native))?;
        Ok(LinLineStatusModel::from(&native))
    }
}

/// LIN bus monitor
pub trait LinMonitor {
    fn raw_monitor_status(&self, status: &mut NativeLinMonitorStatus) -> u32;

    /// Query the monitor status
    fn monitor_status(&self) -> Result<LinMonitorStatus> {
        let mut native = NativeLinMonitorStatus::default();
        checked("monitor status", self.raw_monitor_status(&mut native))?;
        Ok(LinMonitorStatus::from(&native))
    }
}
