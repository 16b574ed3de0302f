//! Native driver records
//!
//! This module contains the `#[repr(C)]` records exchanged with the VCI
//! driver when a line is initialized or its status is queried. Every record
//! packs into and unpacks from its little-endian wire image, and converts
//! into the matching value model.

use log::trace;

use crate::bitrate::{BitTimingValue, BitTimingValue2};
use crate::constants::*;
use crate::error::{ensure_len, Result};
use crate::flags::{
    BitrateModeFlags, CtrlStatusFlags, ExtendedOperatingModeFlags, LinCtrlStatusFlags,
    LinOperatingModeFlags, OperatingModeFlags,
};
use crate::status::{
    CanChannelStatus, LineStatusModel, LineStatusModel2, LinLineStatusModel, LinMonitorStatus,
};

fn read_u16(data: &[u8], offset: usize) -> u16 {
    u16::from_le_bytes([data[offset], data[offset + 1]])
}

fn read_u32(data: &[u8], offset: usize) -> u32 {
    u32::from_le_bytes([
        data[offset],
        data[offset + 1],
        data[offset + 2],
        data[offset + 3],
    ])
}

/// CANBTP: bit timing parameters of one CAN-FD phase
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NativeCanBtp {
    /// Timing mode (`BitrateModeFlags`)
    pub mode: u32,
    /// Bit/s or prescaler, depending on `mode`
    pub bps: u32,
    pub ts1: u16,
    pub ts2: u16,
    pub sjw: u16,
    /// Transmitter delay offset
    pub tdo: u16,
}

impl NativeCanBtp {
    /// Pack into the native byte layout
    pub fn pack(&self) -> [u8; NATIVE_CAN_BTP_SIZE] {
        let mut buf = [0u8; NATIVE_CAN_BTP_SIZE];
        buf[0..4].copy_from_slice(&self.mode.to_le_bytes());
        buf[4..8].copy_from_slice(&self.bps.to_le_bytes());
        buf[8..10].copy_from_slice(&self.ts1.to_le_bytes());
        buf[10..12].copy_from_slice(&self.ts2.to_le_bytes());
        buf[12..14].copy_from_slice(&self.sjw.to_le_bytes());
        buf[14..16].copy_from_slice(&self.tdo.to_le_bytes());
        buf
    }

    /// Unpack from the native byte layout
    pub fn unpack(data: &[u8]) -> Result<Self> {
        ensure_len("CANBTP", data, NATIVE_CAN_BTP_SIZE)?;
        Ok(Self::read(data))
    }

    fn read(data: &[u8]) -> Self {
        Self {
            mode: read_u32(data, 0),
            bps: read_u32(data, 4),
            ts1: read_u16(data, 8),
            ts2: read_u16(data, 10),
            sjw: read_u16(data, 12),
            tdo: read_u16(data, 14),
        }
    }
}

impl From<&BitTimingValue2> for NativeCanBtp {
    fn from(value: &BitTimingValue2) -> Self {
        Self {
            mode: value.mode().bits(),
            bps: value.prescaler(),
            ts1: value.time_segment1(),
            ts2: value.time_segment2(),
            sjw: value.sjw(),
            tdo: value.transmitter_delay(),
        }
    }
}

impl From<&NativeCanBtp> for BitTimingValue2 {
    fn from(btp: &NativeCanBtp) -> Self {
        BitTimingValue2::new(
            BitrateModeFlags::from_bits_retain(btp.mode),
            btp.bps,
            btp.ts1,
            btp.ts2,
            btp.sjw,
            btp.tdo,
        )
    }
}

/// CANINITLINE: classic CAN line initialization
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NativeCanInitLine {
    pub op_mode: u8,
    pub btr0: u8,
    pub btr1: u8,
    pub reserved: u8,
}

impl NativeCanInitLine {
    /// Pack into the native byte layout
    pub fn pack(&self) -> [u8; NATIVE_CAN_INIT_LINE_SIZE] {
        [self.op_mode, self.btr0, self.btr1, self.reserved]
    }

    /// Unpack from the native byte layout
    pub fn unpack(data: &[u8]) -> Result<Self> {
        ensure_len("CANINITLINE", data, NATIVE_CAN_INIT_LINE_SIZE)?;
        Ok(Self {
            op_mode: data[0],
            btr0: data[1],
            btr1: data[2],
            reserved: data[3],
        })
    }
}

/// CANINITLINE2: CAN-FD line initialization
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NativeCanInitLine2 {
    pub op_mode: u8,
    pub ex_mode: u8,
    /// Standard id filter mode
    pub sf_mode: u8,
    /// Extended id filter mode
    pub ef_mode: u8,
    /// Size of the standard id filter list
    pub sf_ids: u32,
    /// Size of the extended id filter list
    pub ef_ids: u32,
    /// Arbitration (standard data rate) timing
    pub btp_sdr: NativeCanBtp,
    /// Fast data rate timing
    pub btp_fdr: NativeCanBtp,
}

impl NativeCanInitLine2 {
    /// Pack into the native byte layout
    pub fn pack(&self) -> [u8; NATIVE_CAN_INIT_LINE2_SIZE] {
        let mut buf = [0u8; NATIVE_CAN_INIT_LINE2_SIZE];
        buf[0] = self.op_mode;
        buf[1] = self.ex_mode;
        buf[2] = self.sf_mode;
        buf[3] = self.ef_mode;
        buf[4..8].copy_from_slice(&self.sf_ids.to_le_bytes());
        buf[8..12].copy_from_slice(&self.ef_ids.to_le_bytes());
        buf[12..28].copy_from_slice(&self.btp_sdr.pack());
        buf[28..44].copy_from_slice(&self.btp_fdr.pack());
        buf
    }

    /// Unpack from the native byte layout
    pub fn unpack(data: &[u8]) -> Result<Self> {
        ensure_len("CANINITLINE2", data, NATIVE_CAN_INIT_LINE2_SIZE)?;
        Ok(Self {
            op_mode: data[0],
            ex_mode: data[1],
            sf_mode: data[2],
            ef_mode: data[3],
            sf_ids: read_u32(data, 4),
            ef_ids: read_u32(data, 8),
            btp_sdr: NativeCanBtp::read(&data[12..28]),
            btp_fdr: NativeCanBtp::read(&data[28..44]),
        })
    }
}

/// CANLINESTATUS: classic CAN line status
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NativeCanLineStatus {
    pub op_mode: u8,
    pub btr0: u8,
    pub btr1: u8,
    /// Bus load in percent
    pub bus_load: u8,
    /// Controller status (`CtrlStatusFlags`)
    pub status: u32,
}

impl NativeCanLineStatus {
    /// Pack into the native byte layout
    pub fn pack(&self) -> [u8; NATIVE_CAN_LINE_STATUS_SIZE] {
        let mut buf = [0u8; NATIVE_CAN_LINE_STATUS_SIZE];
        buf[0] = self.op_mode;
        buf[1] = self.btr0;
        buf[2] = self.btr1;
        buf[3] = self.bus_load;
        buf[4..8].copy_from_slice(&self.status.to_le_bytes());
        buf
    }

    /// Unpack from the native byte layout
    pub fn unpack(data: &[u8]) -> Result<Self> {
        ensure_len("CANLINESTATUS", data, NATIVE_CAN_LINE_STATUS_SIZE)?;
        let record = Self::read(data);
        trace!("CANLINESTATUS {:?}", record);
        Ok(record)
    }

    fn read(data: &[u8]) -> Self {
        Self {
            op_mode: data[0],
            btr0: data[1],
            btr1: data[2],
            bus_load: data[3],
            status: read_u32(data, 4),
        }
    }
}

impl From<&NativeCanLineStatus> for LineStatusModel {
    fn from(record: &NativeCanLineStatus) -> Self {
        LineStatusModel::new(
            OperatingModeFlags::from_bits_retain(record.op_mode),
            record.bus_load,
            CtrlStatusFlags::from_bits_retain(record.status),
            BitTimingValue::new(record.btr0, record.btr1),
        )
    }
}

/// CANLINESTATUS2: CAN-FD line status
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NativeCanLineStatus2 {
    pub op_mode: u8,
    pub ex_mode: u8,
    pub bus_load: u8,
    pub reserved: u8,
    pub btp_sdr: NativeCanBtp,
    pub btp_fdr: NativeCanBtp,
    pub status: u32,
}

impl NativeCanLineStatus2 {
    /// Pack into the native byte layout
    pub fn pack(&self) -> [u8; NATIVE_CAN_LINE_STATUS2_SIZE] {
        let mut buf = [0u8; NATIVE_CAN_LINE_STATUS2_SIZE];
        buf[0] = self.op_mode;
        buf[1] = self.ex_mode;
        buf[2] = self.bus_load;
        buf[3] = self.reserved;
        buf[4..20].copy_from_slice(&self.btp_sdr.pack());
        buf[20..36].copy_from_slice(&self.btp_fdr.pack());
        buf[36..40].copy_from_slice(&self.status.to_le_bytes());
        buf
    }

    /// Unpack from the native byte layout
    pub fn unpack(data: &[u8]) -> Result<Self> {
        ensure_len("CANLINESTATUS2", data, NATIVE_CAN_LINE_STATUS2_SIZE)?;
        let record = Self {
            op_mode: data[0],
            ex_mode: data[1],
            bus_load: data[2],
            reserved: data[3],
            btp_sdr: NativeCanBtp::read(&data[4..20]),
            btp_fdr: NativeCanBtp::read(&data[20..36]),
            status: read_u32(data, 36),
        };
        trace!("CANLINESTATUS2 {:?}", record);
        Ok(record)
    }
}

impl From<&NativeCanLineStatus2> for LineStatusModel2 {
    fn from(record: &NativeCanLineStatus2) -> Self {
        LineStatusModel2::new(
            OperatingModeFlags::from_bits_retain(record.op_mode),
            ExtendedOperatingModeFlags::from_bits_retain(record.ex_mode),
            record.bus_load,
            CtrlStatusFlags::from_bits_retain(record.status),
            BitTimingValue2::from(&record.btp_sdr),
            BitTimingValue2::from(&record.btp_fdr),
        )
    }
}

/// CANCHANSTATUS: CAN message channel status
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NativeCanChanStatus {
    pub line_status: NativeCanLineStatus,
    /// Non-zero if the channel is activated
    pub activated: u32,
    /// Non-zero if the receive FIFO overflowed
    pub rx_overrun: u32,
    pub rx_fifo_load: u8,
    pub tx_fifo_load: u8,
    pub reserved: u16,
}

impl NativeCanChanStatus {
    /// Pack into the native byte layout
    pub fn pack(&self) -> [u8; NATIVE_CAN_CHAN_STATUS_SIZE] {
        let mut buf = [0u8; NATIVE_CAN_CHAN_STATUS_SIZE];
        buf[0..8].copy_from_slice(&self.line_status.pack());
        buf[8..12].copy_from_slice(&self.activated.to_le_bytes());
        buf[12..16].copy_from_slice(&self.rx_overrun.to_le_bytes());
        buf[16] = self.rx_fifo_load;
        buf[17] = self.tx_fifo_load;
        buf[18..20].copy_from_slice(&self.reserved.to_le_bytes());
        buf
    }

    /// Unpack from the native byte layout
    pub fn unpack(data: &[u8]) -> Result<Self> {
        ensure_len("CANCHANSTATUS", data, NATIVE_CAN_CHAN_STATUS_SIZE)?;
        let record = Self {
            line_status: NativeCanLineStatus::read(&data[0..8]),
            activated: read_u32(data, 8),
            rx_overrun: read_u32(data, 12),
            rx_fifo_load: data[16],
            tx_fifo_load: data[17],
            reserved: read_u16(data, 18),
        };
        trace!("CANCHANSTATUS {:?}", record);
        Ok(record)
    }
}

impl From<&NativeCanChanStatus> for CanChannelStatus {
    fn from(record: &NativeCanChanStatus) -> Self {
        CanChannelStatus::new(
            record.activated != 0,
            record.rx_overrun != 0,
            record.rx_fifo_load,
            record.tx_fifo_load,
        )
    }
}

/// LININITLINE: LIN line initialization
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NativeLinInitLine {
    pub op_mode: u8,
    pub reserved: u8,
    /// Bit rate in bit/s
    pub bitrate: u16,
}

impl NativeLinInitLine {
    /// Pack into the native byte layout
    pub fn pack(&self) -> [u8; NATIVE_LIN_INIT_LINE_SIZE] {
        let mut buf = [0u8; NATIVE_LIN_INIT_LINE_SIZE];
        buf[0] = self.op_mode;
        buf[1] = self.reserved;
        buf[2..4].copy_from_slice(&self.bitrate.to_le_bytes());
        buf
    }

    /// Unpack from the native byte layout
    pub fn unpack(data: &[u8]) -> Result<Self> {
        ensure_len("LININITLINE", data, NATIVE_LIN_INIT_LINE_SIZE)?;
        Ok(Self {
            op_mode: data[0],
            reserved: data[1],
            bitrate: read_u16(data, 2),
        })
    }
}

/// LINLINESTATUS: LIN line status
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NativeLinLineStatus {
    pub op_mode: u8,
    pub bus_load: u8,
    pub bitrate: u16,
    pub status: u32,
}

impl NativeLinLineStatus {
    /// Pack into the native byte layout
    pub fn pack(&self) -> [u8; NATIVE_LIN_LINE_STATUS_SIZE] {
        let mut buf = [0u8; NATIVE_LIN_LINE_STATUS_SIZE];
        buf[0] = self.op_mode;
        buf[1] = self.bus_load;
        buf[2..4].copy_from_slice(&self.bitrate.to_le_bytes());
        buf[4..8].copy_from_slice(&self.status.to_le_bytes());
        buf
    }

    /// Unpack from the native byte layout
    pub fn unpack(data: &[u8]) -> Result<Self> {
        ensure_len("LINLINESTATUS", data, NATIVE_LIN_LINE_STATUS_SIZE)?;
        let record = Self::read(data);
        trace!("LINLINESTATUS {:?}", record);
        Ok(record)
    }

    fn read(data: &[u8]) -> Self {
        Self {
            op_mode: data[0],
            bus_load: data[1],
            bitrate: read_u16(data, 2),
            status: read_u32(data, 4),
        }
    }
}

impl From<&NativeLinLineStatus> for LinLineStatusModel {
    fn from(record: &NativeLinLineStatus) -> Self {
        LinLineStatusModel::new(
            LinOperatingModeFlags::from_bits_retain(record.op_mode),
            record.bus_load,
            LinCtrlStatusFlags::from_bits_retain(record.status),
            u32::from(record.bitrate),
        )
    }
}

/// LINMONITORSTATUS: LIN monitor status
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NativeLinMonitorStatus {
    pub line_status: NativeLinLineStatus,
    pub activated: u32,
    pub rx_overrun: u32,
    pub rx_fifo_load: u8,
    pub reserved: [u8; 3],
}

impl NativeLinMonitorStatus {
    /// Pack into the native byte layout
    pub fn pack(&self) -> [u8; NATIVE_LIN_MONITOR_STATUS_SIZE] {
        let mut buf = [0u8; NATIVE_LIN_MONITOR_STATUS_SIZE];
        buf[0..8].copy_from_slice(&self.line_status.pack());
        buf[8..12].copy_from_slice(&self.activated.to_le_bytes());
        buf[12..16].copy_from_slice(&self.rx_overrun.to_le_bytes());
        buf[16] = self.rx_fifo_load;
        buf[17..20].copy_from_slice(&self.reserved);
        buf
    }

    /// Unpack from the native byte layout
    pub fn unpack(data: &[u8]) -> Result<Self> {
        ensure_len("LINMONITORSTATUS", data, NATIVE_LIN_MONITOR_STATUS_SIZE)?;
        let record = Self {
            line_status: NativeLinLineStatus::read(&data[0..8]),
            activated: read_u32(data, 8),
            rx_overrun: read_u32(data, 12),
            rx_fifo_load: data[16],
            reserved: [data[17], data[18], data[19]],
        };
        trace!("LINMONITORSTATUS {:?}", record);
        Ok(record)
    }
}

impl From<&NativeLinMonitorStatus> for LinMonitorStatus {
    fn from(record: &NativeLinMonitorStatus) -> Self {
        LinMonitorStatus::new(
            record.activated != 0,
            record.rx_overrun != 0,
            record.rx_fifo_load,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::VciError;

    #[test]
    fn test_record_sizes_match_repr_c() {
        assert_eq!(std::mem::size_of::<NativeCanBtp>(), NATIVE_CAN_BTP_SIZE);
        assert_eq!(std::mem::size_of::<NativeCanInitLine>(), NATIVE_CAN_INIT_LINE_SIZE);
        assert_eq!(std::mem::size_of::<NativeCanInitLine2>(), NATIVE_CAN_INIT_LINE2_SIZE);
        assert_eq!(std::mem::size_of::<NativeCanLineStatus>(), NATIVE_CAN_LINE_STATUS_SIZE);
        assert_eq!(std::mem::size_of::<NativeCanLineStatus2>(), NATIVE_CAN_LINE_STATUS2_SIZE);
        assert_eq!(std::mem::size_of::<NativeCanChanStatus>(), NATIVE_CAN_CHAN_STATUS_SIZE);
        assert_eq!(std::mem::size_of::<NativeLinInitLine>(), NATIVE_LIN_INIT_LINE_SIZE);
        assert_eq!(std::mem::size_of::<NativeLinLineStatus>(), NATIVE_LIN_LINE_STATUS_SIZE);
        assert_eq!(
            std::mem::size_of::<NativeLinMonitorStatus>(),
            NATIVE_LIN_MONITOR_STATUS_SIZE
        );
    }

    #[test]
    fn test_btp_layout() {
        let btp = NativeCanBtp::from(&BitTimingValue2::canfd_500k());
        let bytes = btp.pack();
        assert_eq!(&bytes[0..4], &[0, 0, 0, 0]);
        assert_eq!(&bytes[4..8], &500_000u32.to_le_bytes());
        assert_eq!(&bytes[8..10], &6400u16.to_le_bytes());
        assert_eq!(&bytes[10..12], &1600u16.to_le_bytes());
        assert_eq!(&bytes[12..14], &1600u16.to_le_bytes());
        assert_eq!(&bytes[14..16], &6400u16.to_le_bytes());
        assert_eq!(NativeCanBtp::unpack(&bytes).unwrap(), btp);
    }

    #[test]
    fn test_btp_keeps_raw_mode() {
        let btp = NativeCanBtp::from(&BitTimingValue2::ifi_1000k());
        assert_eq!(btp.mode, 1);
        let value = BitTimingValue2::from(&btp);
        assert!(value.is_raw());
        assert_eq!(value, BitTimingValue2::ifi_1000k());
    }

    #[test]
    fn test_init_line2_layout() {
        let record = NativeCanInitLine2 {
            op_mode: 0x03,
            ex_mode: 0x03,
            sf_mode: CAN_FILTER_PASS,
            ef_mode: CAN_FILTER_INCL,
            sf_ids: 0x0800,
            ef_ids: 0x0100,
            btp_sdr: NativeCanBtp::from(&BitTimingValue2::canfd_500k()),
            btp_fdr: NativeCanBtp::from(&BitTimingValue2::canfd_2000k()),
        };
        let bytes = record.pack();
        assert_eq!(&bytes[0..4], &[0x03, 0x03, 0x02, 0x03]);
        assert_eq!(&bytes[4..8], &[0x00, 0x08, 0x00, 0x00]);
        assert_eq!(&bytes[8..12], &[0x00, 0x01, 0x00, 0x00]);
        // SDR record at 12..28, FDR record at 28..44, each starting with its mode word
        assert_eq!(&bytes[12..16], &[0x00, 0x00, 0x00, 0x00]);
        assert_eq!(&bytes[16..20], &500_000u32.to_le_bytes());
        assert_eq!(&bytes[28..32], &[0x00, 0x00, 0x00, 0x00]);
        assert_eq!(&bytes[32..36], &2_000_000u32.to_le_bytes());
        assert_eq!(NativeCanInitLine2::unpack(&bytes).unwrap(), record);
    }

    #[test]
    fn test_line_status_to_model() {
        let bytes = [0x05, 0x00, 0x1C, 0x2A, 0x08, 0x00, 0x00, 0x00];
        let record = NativeCanLineStatus::unpack(&bytes).unwrap();
        let status = LineStatusModel::from(&record);
        assert!(status.is_mode_standard());
        assert!(status.is_error_frames_enabled());
        assert!(status.is_bus_off());
        assert_eq!(status.bus_load_percent(), 42);
        assert_eq!(*status.bitrate(), BitTimingValue::cia_500k());
        assert_eq!(record.pack(), bytes);
    }

    #[test]
    fn test_line_status_keeps_unknown_bits() {
        let record = NativeCanLineStatus {
            op_mode: 0x80 | 0x02,
            status: 0x0000_0100,
            ..Default::default()
        };
        let status = LineStatusModel::from(&record);
        assert!(status.is_mode_extended());
        assert_eq!(status.operating_mode().bits(), 0x82);
        assert_eq!(status.controller_status().bits(), 0x100);
    }

    #[test]
    fn test_line_status2_to_model() {
        let record = NativeCanLineStatus2 {
            op_mode: 0x01,
            ex_mode: 0x03,
            bus_load: 7,
            reserved: 0,
            btp_sdr: NativeCanBtp::from(&BitTimingValue2::canfd_250k()),
            btp_fdr: NativeCanBtp::from(&BitTimingValue2::canfd_1000k()),
            status: 0x10,
        };
        let decoded = NativeCanLineStatus2::unpack(&record.pack()).unwrap();
        assert_eq!(decoded, record);

        let status = LineStatusModel2::from(&decoded);
        assert!(status.is_extended_data_length_enabled());
        assert!(status.is_fast_data_enabled());
        assert!(status.is_in_init_mode());
        assert_eq!(*status.std_bitrate(), BitTimingValue2::canfd_250k());
        assert_eq!(*status.fast_bitrate(), BitTimingValue2::canfd_1000k());
    }

    #[test]
    fn test_chan_status_to_model() {
        let record = NativeCanChanStatus {
            line_status: NativeCanLineStatus::default(),
            activated: 1,
            rx_overrun: 0,
            rx_fifo_load: 10,
            tx_fifo_load: 90,
            reserved: 0,
        };
        let decoded = NativeCanChanStatus::unpack(&record.pack()).unwrap();
        let status = CanChannelStatus::from(&decoded);
        assert!(status.is_activated());
        assert!(!status.has_fifo_overrun());
        assert_eq!(status.receive_fifo_load(), 10);
        assert_eq!(status.transmit_fifo_load(), 90);
    }

    #[test]
    fn test_lin_records() {
        let init = NativeLinInitLine {
            op_mode: 0x01,
            reserved: 0,
            bitrate: LIN_BITRATE_19200,
        };
        assert_eq!(init.pack(), [0x01, 0x00, 0x00, 0x4B]);
        assert_eq!(NativeLinInitLine::unpack(&init.pack()).unwrap(), init);

        let monitor = NativeLinMonitorStatus {
            line_status: NativeLinLineStatus {
                op_mode: 0x00,
                bus_load: 3,
                bitrate: LIN_BITRATE_9600,
                status: 0x01,
            },
            activated: 1,
            rx_overrun: 1,
            rx_fifo_load: 0x2A,
            reserved: [0; 3],
        };
        let decoded = NativeLinMonitorStatus::unpack(&monitor.pack()).unwrap();
        assert_eq!(decoded, monitor);
        assert_eq!(
            LinMonitorStatus::from(&decoded).to_string(),
            "active: true, overrun: true, fifoload: 2A"
        );

        let line = LinLineStatusModel::from(&decoded.line_status);
        assert!(line.is_in_slave_mode());
        assert!(line.has_data_overrun());
        assert_eq!(line.bitrate(), 9600);
    }

    #[test]
    fn test_short_buffer_is_rejected() {
        let err = NativeCanLineStatus2::unpack(&[0u8; 12]).unwrap_err();
        assert_eq!(
            err,
            VciError::InvalidRecord {
                record: "CANLINESTATUS2",
                expected: 40,
                actual: 12,
            }
        );
        assert!(NativeCanBtp::unpack(&[0u8; 15]).is_err());
        assert!(NativeLinMonitorStatus::unpack(&[0u8; 8]).is_err());
    }
}
