//! Line and channel status snapshots
//!
//! The driver fills these structures when a line or channel status is
//! queried. They are immutable snapshots; all predicates are pure bit tests
//! over the reported fields.

use crate::bitrate::{BitTimingValue, BitTimingValue2, FdBitratePair};
use crate::flags::{
    CtrlStatusFlags, ExtendedOperatingModeFlags, LinCtrlStatusFlags, LinOperatingModeFlags,
    OperatingModeFlags,
};

/// Status of a classic CAN controller
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineStatusModel {
    operating_mode: OperatingModeFlags,
    bus_load_percent: u8,
    controller_status: CtrlStatusFlags,
    bitrate: BitTimingValue,
}

impl LineStatusModel {
    /// Create a status snapshot from driver reported values
    pub fn new(
        operating_mode: OperatingModeFlags,
        bus_load_percent: u8,
        controller_status: CtrlStatusFlags,
        bitrate: BitTimingValue,
    ) -> Self {
        Self {
            operating_mode,
            bus_load_percent,
            controller_status,
            bitrate,
        }
    }

    /// Current operating mode
    pub fn operating_mode(&self) -> OperatingModeFlags {
        self.operating_mode
    }

    /// Average bus load (0..100 %)
    pub fn bus_load_percent(&self) -> u8 {
        self.bus_load_percent
    }

    /// Current controller status
    pub fn controller_status(&self) -> CtrlStatusFlags {
        self.controller_status
    }

    /// Current bit timing
    pub fn bitrate(&self) -> &BitTimingValue {
        &self.bitrate
    }

    /// Neither standard nor extended frame mode is selected
    pub fn is_mode_undefined(&self) -> bool {
        mode_subfield(self.operating_mode) == OperatingModeFlags::UNDEFINED
    }

    /// Standard (11-bit) frame mode only
    pub fn is_mode_standard(&self) -> bool {
        mode_subfield(self.operating_mode) == OperatingModeFlags::STANDARD
    }

    /// Extended (29-bit) frame mode only
    pub fn is_mode_extended(&self) -> bool {
        mode_subfield(self.operating_mode) == OperatingModeFlags::EXTENDED
    }

    /// Check if reception of error frames is enabled
    pub fn is_error_frames_enabled(&self) -> bool {
        self.operating_mode.contains(OperatingModeFlags::ERR_FRAME)
    }

    /// Check if the controller is in listen only mode
    pub fn is_listen_only(&self) -> bool {
        self.operating_mode.contains(OperatingModeFlags::LISTEN_ONLY)
    }

    /// Check if the low speed bus interface is used
    pub fn is_low_speed_enabled(&self) -> bool {
        self.operating_mode.contains(OperatingModeFlags::LOW_SPEED)
    }

    /// Check if automatic bitrate detection is enabled
    pub fn is_auto_baudrate_enabled(&self) -> bool {
        self.operating_mode.contains(OperatingModeFlags::AUTO_BAUDRATE)
    }

    /// Check if a transmission is pending
    pub fn is_transmit_pending(&self) -> bool {
        self.controller_status.contains(CtrlStatusFlags::TX_PENDING)
    }

    /// Check if a message was lost in the controller
    pub fn has_data_overrun(&self) -> bool {
        self.controller_status.contains(CtrlStatusFlags::OVERRUN)
    }

    /// Check if an error counter reached the warning limit
    pub fn has_error_overrun(&self) -> bool {
        self.controller_status.contains(CtrlStatusFlags::ERR_LIMIT)
    }

    /// Check if the controller is bus off
    pub fn is_bus_off(&self) -> bool {
        self.controller_status.contains(CtrlStatusFlags::BUS_OFF)
    }

    /// Check if the controller is in init mode
    pub fn is_in_init_mode(&self) -> bool {
        self.controller_status.contains(CtrlStatusFlags::IN_INIT)
    }

    /// Check if the bus coupling signals an error
    pub fn is_bus_coupling_error(&self) -> bool {
        self.controller_status
            .contains(CtrlStatusFlags::BUS_COUPLING_ERROR)
    }

    /// Diagnostic one-liner with all fields
    pub fn to_display_string(&self) -> String {
        self.to_string()
    }
}

impl std::fmt::Display for LineStatusModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "opmode: {}, busload: {}, ctrlstat: {}, bitrate: {}",
            self.operating_mode, self.bus_load_percent, self.controller_status, self.bitrate
        )
    }
}

/// Status of a CAN-FD capable controller
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineStatusModel2 {
    operating_mode: OperatingModeFlags,
    extended_operating_mode: ExtendedOperatingModeFlags,
    bus_load_percent: u8,
    controller_status: CtrlStatusFlags,
    std_bitrate: BitTimingValue2,
    fast_bitrate: BitTimingValue2,
}

impl LineStatusModel2 {
    /// Create a status snapshot from driver reported values
    pub fn new(
        operating_mode: OperatingModeFlags,
        extended_operating_mode: ExtendedOperatingModeFlags,
        bus_load_percent: u8,
        controller_status: CtrlStatusFlags,
        std_bitrate: BitTimingValue2,
        fast_bitrate: BitTimingValue2,
    ) -> Self {
        Self {
            operating_mode,
            extended_operating_mode,
            bus_load_percent,
            controller_status,
            std_bitrate,
            fast_bitrate,
        }
    }

    pub fn operating_mode(&self) -> OperatingModeFlags {
        self.operating_mode
    }

    pub fn extended_operating_mode(&self) -> ExtendedOperatingModeFlags {
        self.extended_operating_mode
    }

    pub fn bus_load_percent(&self) -> u8 {
        self.bus_load_percent
    }

    pub fn controller_status(&self) -> CtrlStatusFlags {
        self.controller_status
    }

    /// Arbitration phase bit timing
    pub fn std_bitrate(&self) -> &BitTimingValue2 {
        &self.std_bitrate
    }

    /// Data phase bit timing
    pub fn fast_bitrate(&self) -> &BitTimingValue2 {
        &self.fast_bitrate
    }

    /// Both phases as a pair
    pub fn bitrate_pair(&self) -> FdBitratePair {
        FdBitratePair::new(self.std_bitrate.clone(), self.fast_bitrate.clone())
    }

    /// Neither standard nor extended frame mode is selected
    pub fn is_mode_undefined(&self) -> bool {
        mode_subfield(self.operating_mode) == OperatingModeFlags::UNDEFINED
    }

    /// Standard (11-bit) frame mode only
    pub fn is_mode_standard(&self) -> bool {
        mode_subfield(self.operating_mode) == OperatingModeFlags::STANDARD
    }

    /// Extended (29-bit) frame mode only
    pub fn is_mode_extended(&self) -> bool {
        mode_subfield(self.operating_mode) == OperatingModeFlags::EXTENDED
    }

    /// Check if the standard frame bit is set
    pub fn is_std_mode_enabled(&self) -> bool {
        self.operating_mode.contains(OperatingModeFlags::STANDARD)
    }

    /// Extended mode as reported by the status interface
    ///
    /// This tests the `ERR_FRAME` bit, exactly like
    /// [`is_err_mode_enabled`](Self::is_err_mode_enabled). Use
    /// [`is_mode_extended`](Self::is_mode_extended) for the 29-bit frame mode.
    // TODO: confirm with the driver maintainers whether this should test EXTENDED
    pub fn is_ext_mode_enabled(&self) -> bool {
        self.operating_mode.contains(OperatingModeFlags::ERR_FRAME)
    }

    /// Check if reception of error frames is enabled
    pub fn is_err_mode_enabled(&self) -> bool {
        self.operating_mode.contains(OperatingModeFlags::ERR_FRAME)
    }

    /// Alias of [`is_err_mode_enabled`](Self::is_err_mode_enabled)
    pub fn is_error_frames_enabled(&self) -> bool {
        self.is_err_mode_enabled()
    }

    pub fn is_listen_only(&self) -> bool {
        self.operating_mode.contains(OperatingModeFlags::LISTEN_ONLY)
    }

    pub fn is_low_speed_enabled(&self) -> bool {
        self.operating_mode.contains(OperatingModeFlags::LOW_SPEED)
    }

    pub fn is_auto_baudrate_enabled(&self) -> bool {
        self.operating_mode.contains(OperatingModeFlags::AUTO_BAUDRATE)
    }

    /// Check if frames with up to 64 data bytes are enabled
    pub fn is_extended_data_length_enabled(&self) -> bool {
        self.extended_operating_mode
            .contains(ExtendedOperatingModeFlags::EXTENDED_DATA_LENGTH)
    }

    /// Check if the data phase runs at the fast bit rate
    pub fn is_fast_data_enabled(&self) -> bool {
        self.extended_operating_mode
            .contains(ExtendedOperatingModeFlags::FAST_DATA_RATE)
    }

    /// Check if non-ISO CAN-FD frames are used
    pub fn is_non_iso_canfd_enabled(&self) -> bool {
        self.extended_operating_mode
            .contains(ExtendedOperatingModeFlags::NON_ISO_CANFD)
    }

    pub fn is_transmit_pending(&self) -> bool {
        self.controller_status.contains(CtrlStatusFlags::TX_PENDING)
    }

    pub fn has_data_overrun(&self) -> bool {
        self.controller_status.contains(CtrlStatusFlags::OVERRUN)
    }

    pub fn has_error_overrun(&self) -> bool {
        self.controller_status.contains(CtrlStatusFlags::ERR_LIMIT)
    }

    pub fn is_bus_off(&self) -> bool {
        self.controller_status.contains(CtrlStatusFlags::BUS_OFF)
    }

    pub fn is_in_init_mode(&self) -> bool {
        self.controller_status.contains(CtrlStatusFlags::IN_INIT)
    }

    pub fn is_bus_coupling_error(&self) -> bool {
        self.controller_status
            .contains(CtrlStatusFlags::BUS_COUPLING_ERROR)
    }

    /// Diagnostic one-liner with all fields
    pub fn to_display_string(&self) -> String {
        self.to_string()
    }
}

impl std::fmt::Display for LineStatusModel2 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "opmode: {}, exmode: {}, busload: {}, ctrlstat: {}, stdbitrate: {}, fastbitrate: {}",
            self.operating_mode,
            self.extended_operating_mode,
            self.bus_load_percent,
            self.controller_status,
            self.std_bitrate,
            self.fast_bitrate
        )
    }
}

/// Status of a LIN controller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LinLineStatusModel {
    operating_mode: LinOperatingModeFlags,
    bus_load_percent: u8,
    controller_status: LinCtrlStatusFlags,
    bitrate: u32,
}

impl LinLineStatusModel {
    /// Create a status snapshot from driver reported values
    pub fn new(
        operating_mode: LinOperatingModeFlags,
        bus_load_percent: u8,
        controller_status: LinCtrlStatusFlags,
        bitrate: u32,
    ) -> Self {
        Self {
            operating_mode,
            bus_load_percent,
            controller_status,
            bitrate,
        }
    }

    pub fn operating_mode(&self) -> LinOperatingModeFlags {
        self.operating_mode
    }

    pub fn bus_load_percent(&self) -> u8 {
        self.bus_load_percent
    }

    pub fn controller_status(&self) -> LinCtrlStatusFlags {
        self.controller_status
    }

    /// Bit rate in bit/s
    pub fn bitrate(&self) -> u32 {
        self.bitrate
    }

    /// The master bit is clear
    pub fn is_in_slave_mode(&self) -> bool {
        (self.operating_mode & LinOperatingModeFlags::MASTER).is_empty()
    }

    /// The master bit is set
    pub fn is_in_master_mode(&self) -> bool {
        self.operating_mode.intersects(LinOperatingModeFlags::MASTER)
    }

    /// Check if reception of error frames is enabled
    pub fn is_err_mode_enabled(&self) -> bool {
        self.operating_mode.intersects(LinOperatingModeFlags::ERRORS)
    }

    /// Check if a message was lost in the controller
    pub fn has_data_overrun(&self) -> bool {
        self.controller_status.contains(LinCtrlStatusFlags::OVERRUN)
    }

    /// Check if the controller is in init mode
    pub fn is_in_init_mode(&self) -> bool {
        self.controller_status.contains(LinCtrlStatusFlags::IN_INIT)
    }

    /// Diagnostic one-liner with all fields
    pub fn to_display_string(&self) -> String {
        self.to_string()
    }
}

impl std::fmt::Display for LinLineStatusModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "opmode: {}, busload: {}, ctrlstat: {}, bitrate: {}",
            self.operating_mode, self.bus_load_percent, self.controller_status, self.bitrate
        )
    }
}

/// Status of a CAN message channel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CanChannelStatus {
    activated: bool,
    rx_overrun: bool,
    rx_fifo_load: u8,
    tx_fifo_load: u8,
}

impl CanChannelStatus {
    /// Create a channel status from driver reported values
    pub fn new(activated: bool, rx_overrun: bool, rx_fifo_load: u8, tx_fifo_load: u8) -> Self {
        Self {
            activated,
            rx_overrun,
            rx_fifo_load,
            tx_fifo_load,
        }
    }

    /// Check if the channel is activated
    pub fn is_activated(&self) -> bool {
        self.activated
    }

    /// Check if the receive FIFO overflowed
    pub fn has_fifo_overrun(&self) -> bool {
        self.rx_overrun
    }

    /// Receive FIFO load (0..100 %)
    pub fn receive_fifo_load(&self) -> u8 {
        self.rx_fifo_load
    }

    /// Transmit FIFO load (0..100 %)
    pub fn transmit_fifo_load(&self) -> u8 {
        self.tx_fifo_load
    }
}

impl std::fmt::Display for CanChannelStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "active: {}, overrun: {}, rxload: {}, txload: {}",
            self.activated, self.rx_overrun, self.rx_fifo_load, self.tx_fifo_load
        )
    }
}

/// Status of a LIN monitor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct LinMonitorStatus {
    activated: bool,
    rx_overrun: bool,
    rx_fifo_load: u8,
}

impl LinMonitorStatus {
    /// Create a monitor status from driver reported values
    pub fn new(activated: bool, rx_overrun: bool, rx_fifo_load: u8) -> Self {
        Self {
            activated,
            rx_overrun,
            rx_fifo_load,
        }
    }

    pub fn is_activated(&self) -> bool {
        self.activated
    }

    pub fn has_fifo_overrun(&self) -> bool {
        self.rx_overrun
    }

    pub fn receive_fifo_load(&self) -> u8 {
        self.rx_fifo_load
    }
}

impl std::fmt::Display for LinMonitorStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "active: {}, overrun: {}, fifoload: {:02X}",
            self.activated, self.rx_overrun, self.rx_fifo_load
        )
    }
}

fn mode_subfield(mode: OperatingModeFlags) -> OperatingModeFlags {
    mode & OperatingModeFlags::MODE_MASK
}

#[cfg(test)]
mod tests {
    use super::*;

    fn can_status(mode: OperatingModeFlags, status: CtrlStatusFlags) -> LineStatusModel {
        LineStatusModel::new(mode, 12, status, BitTimingValue::cia_500k())
    }

    fn can_status2(mode: OperatingModeFlags, ext: ExtendedOperatingModeFlags) -> LineStatusModel2 {
        LineStatusModel2::new(
            mode,
            ext,
            0,
            CtrlStatusFlags::empty(),
            BitTimingValue2::canfd_500k(),
            BitTimingValue2::canfd_2000k(),
        )
    }

    #[test]
    fn test_mode_subfield_is_exclusive() {
        let both = can_status(
            OperatingModeFlags::STANDARD | OperatingModeFlags::EXTENDED,
            CtrlStatusFlags::empty(),
        );
        assert!(!both.is_mode_standard());
        assert!(!both.is_mode_extended());
        assert!(!both.is_mode_undefined());

        let std = can_status(
            OperatingModeFlags::STANDARD | OperatingModeFlags::ERR_FRAME,
            CtrlStatusFlags::empty(),
        );
        assert!(std.is_mode_standard());
        assert!(!std.is_mode_extended());

        let ext = can_status(OperatingModeFlags::EXTENDED, CtrlStatusFlags::empty());
        assert!(ext.is_mode_extended());
        assert!(!ext.is_mode_standard());

        let none = can_status(OperatingModeFlags::LISTEN_ONLY, CtrlStatusFlags::empty());
        assert!(none.is_mode_undefined());
    }

    #[test]
    fn test_mode_predicates_over_all_subfields() {
        for bits in 0u8..=0x3F {
            let mode = OperatingModeFlags::from_bits_retain(bits);
            let status = can_status(mode, CtrlStatusFlags::empty());
            let sub = bits & 0x03;
            assert_eq!(status.is_mode_undefined(), sub == 0);
            assert_eq!(status.is_mode_standard(), sub == 1);
            assert_eq!(status.is_mode_extended(), sub == 2);
        }
    }

    #[test]
    fn test_operating_mode_bits() {
        let status = can_status(
            OperatingModeFlags::ERR_FRAME
                | OperatingModeFlags::LISTEN_ONLY
                | OperatingModeFlags::LOW_SPEED
                | OperatingModeFlags::AUTO_BAUDRATE,
            CtrlStatusFlags::empty(),
        );
        assert!(status.is_error_frames_enabled());
        assert!(status.is_listen_only());
        assert!(status.is_low_speed_enabled());
        assert!(status.is_auto_baudrate_enabled());

        let status = can_status(OperatingModeFlags::STANDARD, CtrlStatusFlags::empty());
        assert!(!status.is_error_frames_enabled());
        assert!(!status.is_listen_only());
        assert!(!status.is_low_speed_enabled());
        assert!(!status.is_auto_baudrate_enabled());
    }

    #[test]
    fn test_controller_status_bits() {
        let checks: [(CtrlStatusFlags, fn(&LineStatusModel) -> bool); 6] = [
            (CtrlStatusFlags::TX_PENDING, LineStatusModel::is_transmit_pending),
            (CtrlStatusFlags::OVERRUN, LineStatusModel::has_data_overrun),
            (CtrlStatusFlags::ERR_LIMIT, LineStatusModel::has_error_overrun),
            (CtrlStatusFlags::BUS_OFF, LineStatusModel::is_bus_off),
            (CtrlStatusFlags::IN_INIT, LineStatusModel::is_in_init_mode),
            (
                CtrlStatusFlags::BUS_COUPLING_ERROR,
                LineStatusModel::is_bus_coupling_error,
            ),
        ];
        for (flag, predicate) in checks {
            let set = can_status(OperatingModeFlags::STANDARD, flag);
            assert!(predicate(&set), "{}", flag);
            let others = can_status(OperatingModeFlags::STANDARD, CtrlStatusFlags::all() - flag);
            assert!(!predicate(&others), "{}", flag);
        }
    }

    #[test]
    fn test_display_string() {
        let status = can_status(
            OperatingModeFlags::STANDARD | OperatingModeFlags::ERR_FRAME,
            CtrlStatusFlags::BUS_OFF,
        );
        assert_eq!(
            status.to_display_string(),
            "opmode: STANDARD | ERR_FRAME, busload: 12, ctrlstat: BUS_OFF, bitrate: CiA 500 kbit/s"
        );
    }

    #[test]
    fn test_extended_mode_bits() {
        let status = can_status2(
            OperatingModeFlags::STANDARD,
            ExtendedOperatingModeFlags::EXTENDED_DATA_LENGTH
                | ExtendedOperatingModeFlags::FAST_DATA_RATE,
        );
        assert!(status.is_extended_data_length_enabled());
        assert!(status.is_fast_data_enabled());
        assert!(!status.is_non_iso_canfd_enabled());
        assert!(status.is_std_mode_enabled());
        assert!(status.is_mode_standard());

        let status = can_status2(
            OperatingModeFlags::STANDARD,
            ExtendedOperatingModeFlags::NON_ISO_CANFD,
        );
        assert!(status.is_non_iso_canfd_enabled());
        assert!(!status.is_fast_data_enabled());
    }

    #[test]
    fn test_ext_mode_tests_err_frame_bit() {
        // Documents the reported behavior: "ext mode" follows ERR_FRAME,
        // not EXTENDED. See the TODO on is_ext_mode_enabled.
        let extended_only = can_status2(
            OperatingModeFlags::EXTENDED,
            ExtendedOperatingModeFlags::empty(),
        );
        assert!(!extended_only.is_ext_mode_enabled());
        assert!(extended_only.is_mode_extended());

        let err_only = can_status2(
            OperatingModeFlags::ERR_FRAME,
            ExtendedOperatingModeFlags::empty(),
        );
        assert!(err_only.is_ext_mode_enabled());
        assert!(err_only.is_err_mode_enabled());
        assert_eq!(err_only.is_ext_mode_enabled(), err_only.is_err_mode_enabled());
    }

    #[test]
    fn test_status2_bitrates() {
        let status = can_status2(OperatingModeFlags::STANDARD, ExtendedOperatingModeFlags::empty());
        assert_eq!(*status.std_bitrate(), BitTimingValue2::canfd_500k());
        assert_eq!(*status.fast_bitrate(), BitTimingValue2::canfd_2000k());
        let pair = status.bitrate_pair();
        assert_eq!(pair, FdBitratePair::short_line_all()[1]);
    }

    #[test]
    fn test_status2_display_string() {
        let status = can_status2(
            OperatingModeFlags::EXTENDED,
            ExtendedOperatingModeFlags::FAST_DATA_RATE,
        );
        assert_eq!(
            status.to_display_string(),
            "opmode: EXTENDED, exmode: FAST_DATA_RATE, busload: 0, ctrlstat: 0, \
             stdbitrate: CANFD 500 kbit/s, fastbitrate: CANFD 2000 kbit/s"
        );
    }

    #[test]
    fn test_lin_slave_master_complement() {
        for bits in 0u8..=0xFF {
            let mode = LinOperatingModeFlags::from_bits_retain(bits);
            let status = LinLineStatusModel::new(mode, 0, LinCtrlStatusFlags::empty(), 19200);
            assert_eq!(status.is_in_master_mode(), bits & 0x01 != 0);
            assert_eq!(status.is_in_slave_mode(), bits & 0x01 == 0);
            assert_ne!(status.is_in_slave_mode(), status.is_in_master_mode());
            assert_eq!(status.is_err_mode_enabled(), bits & 0x02 != 0);
        }
    }

    #[test]
    fn test_lin_status_bits() {
        let status = LinLineStatusModel::new(
            LinOperatingModeFlags::MASTER,
            40,
            LinCtrlStatusFlags::OVERRUN | LinCtrlStatusFlags::IN_INIT,
            9600,
        );
        assert!(status.has_data_overrun());
        assert!(status.is_in_init_mode());
        assert_eq!(status.bitrate(), 9600);
        assert_eq!(
            status.to_display_string(),
            "opmode: MASTER, busload: 40, ctrlstat: OVERRUN | IN_INIT, bitrate: 9600"
        );

        let idle = LinLineStatusModel::new(
            LinOperatingModeFlags::SLAVE,
            0,
            LinCtrlStatusFlags::empty(),
            0,
        );
        assert!(!idle.has_data_overrun());
        assert!(!idle.is_in_init_mode());
        assert!(idle.is_in_slave_mode());
    }

    #[test]
    fn test_channel_status() {
        let status = CanChannelStatus::new(true, false, 30, 95);
        assert!(status.is_activated());
        assert!(!status.has_fifo_overrun());
        assert_eq!(status.receive_fifo_load(), 30);
        assert_eq!(status.transmit_fifo_load(), 95);
    }

    #[test]
    fn test_monitor_status_display() {
        let status = LinMonitorStatus::new(true, true, 0x2A);
        assert_eq!(status.to_string(), "active: true, overrun: true, fifoload: 2A");
    }
}
