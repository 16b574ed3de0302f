//! Socket capability snapshots
//!
//! A socket describes what a controller can do: its type, bus coupling,
//! time bases and feature set. The `supports_*` predicates are derived from
//! the reported feature bits.

use crate::bitrate::BitTimingValue2;
use crate::flags::{CanBusCouplings, CanCtrlType, CanFeatures, LinFeatures};

/// Capabilities of a classic CAN socket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CanSocketInfo {
    pub controller_type: CanCtrlType,
    pub bus_coupling: CanBusCouplings,
    pub features: CanFeatures,
    /// Controller clock in Hz
    pub clock_frequency: u32,
    pub time_stamp_counter_divisor: u32,
    pub cyclic_message_timer_divisor: u32,
    pub max_cyclic_message_ticks: u32,
    pub delayed_tx_timer_divisor: u32,
    pub max_delayed_tx_ticks: u32,
}

impl CanSocketInfo {
    /// Time stamp counter rate in Hz, `None` if the divisor is zero
    pub fn time_stamp_frequency(&self) -> Option<u32> {
        self.clock_frequency
            .checked_div(self.time_stamp_counter_divisor)
    }

    /// Cyclic message timer rate in Hz, `None` if the divisor is zero
    pub fn cyclic_message_frequency(&self) -> Option<u32> {
        self.clock_frequency
            .checked_div(self.cyclic_message_timer_divisor)
    }

    pub fn supports_std_or_ext_frames(&self) -> bool {
        self.features.contains(CanFeatures::STD_OR_EXT)
    }

    pub fn supports_std_and_ext_frames(&self) -> bool {
        self.features.contains(CanFeatures::STD_AND_EXT)
    }

    pub fn supports_remote_frames(&self) -> bool {
        self.features.contains(CanFeatures::REMOTE_FRAME)
    }

    pub fn supports_error_frames(&self) -> bool {
        self.features.contains(CanFeatures::ERR_FRAME)
    }

    pub fn supports_bus_load_computation(&self) -> bool {
        self.features.contains(CanFeatures::BUSLOAD)
    }

    pub fn supports_exact_message_filter(&self) -> bool {
        self.features.contains(CanFeatures::ID_FILTER)
    }

    pub fn supports_listen_only_mode(&self) -> bool {
        self.features.contains(CanFeatures::LISTEN_ONLY)
    }

    pub fn supports_cyclic_message_scheduler(&self) -> bool {
        self.features.contains(CanFeatures::SCHEDULER)
    }

    pub fn supports_error_frame_generation(&self) -> bool {
        self.features.contains(CanFeatures::GEN_ERR_FRAME)
    }

    pub fn supports_delayed_transmission(&self) -> bool {
        self.features.contains(CanFeatures::DELAYED_TX)
    }
}

/// Capabilities of a CAN-FD capable socket
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanSocketInfo2 {
    pub controller_type: CanCtrlType,
    pub bus_coupling: CanBusCouplings,
    pub features: CanFeatures,
    /// CAN controller clock in Hz
    pub can_clock_frequency: u32,
    pub min_arbitration_bitrate: BitTimingValue2,
    pub max_arbitration_bitrate: BitTimingValue2,
    pub min_fast_data_bitrate: BitTimingValue2,
    pub max_fast_data_bitrate: BitTimingValue2,
    pub time_stamp_counter_clock_frequency: u32,
    pub time_stamp_counter_divisor: u32,
    pub cyclic_message_timer_clock_frequency: u32,
    pub cyclic_message_timer_divisor: u32,
    pub max_cyclic_message_ticks: u32,
    pub delayed_tx_timer_clock_frequency: u32,
    pub delayed_tx_timer_divisor: u32,
    pub max_delayed_tx_ticks: u32,
}

impl Default for CanSocketInfo2 {
    fn default() -> Self {
        Self {
            controller_type: CanCtrlType::Unknown,
            bus_coupling: CanBusCouplings::UNDEFINED,
            features: CanFeatures::empty(),
            can_clock_frequency: 0,
            min_arbitration_bitrate: BitTimingValue2::empty(),
            max_arbitration_bitrate: BitTimingValue2::empty(),
            min_fast_data_bitrate: BitTimingValue2::empty(),
            max_fast_data_bitrate: BitTimingValue2::empty(),
            time_stamp_counter_clock_frequency: 0,
            time_stamp_counter_divisor: 0,
            cyclic_message_timer_clock_frequency: 0,
            cyclic_message_timer_divisor: 0,
            max_cyclic_message_ticks: 0,
            delayed_tx_timer_clock_frequency: 0,
            delayed_tx_timer_divisor: 0,
            max_delayed_tx_ticks: 0,
        }
    }
}

impl CanSocketInfo2 {
    /// Time stamp counter rate in Hz, `None` if the divisor is zero
    pub fn time_stamp_frequency(&self) -> Option<u32> {
        self.time_stamp_counter_clock_frequency
            .checked_div(self.time_stamp_counter_divisor)
    }

    /// Check if a logical bitrate lies within the arbitration range
    ///
    /// Raw timings and sockets reporting raw limits are never in range.
    pub fn accepts_arbitration_bitrate(&self, bitrate: &BitTimingValue2) -> bool {
        within(
            bitrate,
            &self.min_arbitration_bitrate,
            &self.max_arbitration_bitrate,
        )
    }

    /// Check if a logical bitrate lies within the fast data range
    pub fn accepts_fast_data_bitrate(&self, bitrate: &BitTimingValue2) -> bool {
        within(
            bitrate,
            &self.min_fast_data_bitrate,
            &self.max_fast_data_bitrate,
        )
    }

    pub fn supports_std_or_ext_frames(&self) -> bool {
        self.features.contains(CanFeatures::STD_OR_EXT)
    }

    pub fn supports_std_and_ext_frames(&self) -> bool {
        self.features.contains(CanFeatures::STD_AND_EXT)
    }

    pub fn supports_remote_frames(&self) -> bool {
        self.features.contains(CanFeatures::REMOTE_FRAME)
    }

    pub fn supports_error_frames(&self) -> bool {
        self.features.contains(CanFeatures::ERR_FRAME)
    }

    pub fn supports_bus_load_computation(&self) -> bool {
        self.features.contains(CanFeatures::BUSLOAD)
    }

    pub fn supports_exact_message_filter(&self) -> bool {
        self.features.contains(CanFeatures::ID_FILTER)
    }

    pub fn supports_listen_only_mode(&self) -> bool {
        self.features.contains(CanFeatures::LISTEN_ONLY)
    }

    pub fn supports_cyclic_message_scheduler(&self) -> bool {
        self.features.contains(CanFeatures::SCHEDULER)
    }

    pub fn supports_error_frame_generation(&self) -> bool {
        self.features.contains(CanFeatures::GEN_ERR_FRAME)
    }

    pub fn supports_delayed_transmission(&self) -> bool {
        self.features.contains(CanFeatures::DELAYED_TX)
    }

    pub fn supports_single_shot_messages(&self) -> bool {
        self.features.contains(CanFeatures::SINGLE_SHOT)
    }

    pub fn supports_high_priority_messages(&self) -> bool {
        self.features.contains(CanFeatures::HIGH_PRIORITY_MSG)
    }

    pub fn supports_auto_baudrate_detection(&self) -> bool {
        self.features.contains(CanFeatures::AUTO_BAUDRATE)
    }

    pub fn supports_extended_data_length(&self) -> bool {
        self.features.contains(CanFeatures::EXTENDED_DATA_LENGTH)
    }

    pub fn supports_fast_data_rate(&self) -> bool {
        self.features.contains(CanFeatures::FAST_DATA_RATE)
    }

    pub fn supports_iso_canfd_frames(&self) -> bool {
        self.features.contains(CanFeatures::ISO_CANFD)
    }

    pub fn supports_non_iso_canfd_frames(&self) -> bool {
        self.features.contains(CanFeatures::NON_ISO_CANFD)
    }

    pub fn supports_64bit_time_stamps(&self) -> bool {
        self.features.contains(CanFeatures::LONG_BIT_TIMESTAMP)
    }
}

fn within(value: &BitTimingValue2, min: &BitTimingValue2, max: &BitTimingValue2) -> bool {
    match (
        value.bits_per_second(),
        min.bits_per_second(),
        max.bits_per_second(),
    ) {
        (Some(bps), Some(lo), Some(hi)) => (lo..=hi).contains(&bps),
        _ => false,
    }
}

/// Capabilities of a LIN socket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LinSocketInfo {
    pub features: LinFeatures,
    /// Controller clock in Hz
    pub clock_frequency: u32,
    pub time_stamp_counter_divisor: u32,
}

impl LinSocketInfo {
    pub fn time_stamp_frequency(&self) -> Option<u32> {
        self.clock_frequency
            .checked_div(self.time_stamp_counter_divisor)
    }

    pub fn supports_master_mode(&self) -> bool {
        self.features.contains(LinFeatures::MASTER)
    }

    pub fn supports_autorate(&self) -> bool {
        self.features.contains(LinFeatures::AUTORATE)
    }

    pub fn supports_error_frames(&self) -> bool {
        self.features.contains(LinFeatures::ERR_FRAME)
    }

    pub fn supports_bus_load_computation(&self) -> bool {
        self.features.contains(LinFeatures::BUSLOAD)
    }

    pub fn supports_sleep(&self) -> bool {
        self.features.contains(LinFeatures::SLEEP)
    }

    pub fn supports_wakeup(&self) -> bool {
        self.features.contains(LinFeatures::WAKEUP)
    }
}
