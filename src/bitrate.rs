//! CAN, CAN-FD and LIN bit timing values
//!
//! This module contains the value types handed to the driver when a line is
//! initialized and reported back in line status snapshots:
//!
//! - [`BitTimingValue`]: classic CAN timing as a SJA1000 BTR0/BTR1 register pair
//! - [`BitTimingValue2`]: CAN/CAN-FD timing as a six field descriptor
//! - [`FdBitratePair`]: arbitration and data phase timing of a CAN-FD line
//! - [`LinBitrate`]: LIN bitrate in bit/s
//!
//! All of them are immutable once constructed. The human readable name is
//! materialized lazily behind a `OnceLock`, so values may be shared between
//! threads and read concurrently.

use std::hash::{Hash, Hasher};
use std::sync::OnceLock;

use crate::constants::*;
use crate::flags::BitrateModeFlags;

/// Classic CAN bit timing
///
/// Encodes a bit rate as the two bit timing registers of a Philips SJA1000
/// running at 16 MHz. Two values are equal when their registers are equal;
/// the name is for display only.
#[derive(Clone)]
pub struct BitTimingValue {
    btr0: u8,
    btr1: u8,
    name: OnceLock<String>,
}

impl BitTimingValue {
    /// Create a bit timing value from BTR0/BTR1
    pub fn new(btr0: u8, btr1: u8) -> Self {
        Self {
            btr0,
            btr1,
            name: OnceLock::new(),
        }
    }

    /// Create a bit timing value with a human readable name
    pub fn with_name(btr0: u8, btr1: u8, name: impl Into<String>) -> Self {
        Self {
            btr0,
            btr1,
            name: OnceLock::from(name.into()),
        }
    }

    /// Value of bit timing register 0
    pub fn btr0(&self) -> u8 {
        self.btr0
    }

    /// Value of bit timing register 1
    pub fn btr1(&self) -> u8 {
        self.btr1
    }

    /// Both registers as one word, BTR1 in the high byte
    pub fn as_u16(&self) -> u16 {
        ((self.btr1 as u16) << 8) | self.btr0 as u16
    }

    /// Baud rate prescaler field of BTR0
    pub fn brp(&self) -> u8 {
        self.btr0 & BTR0_BRP_MASK
    }

    /// Time segment 1 field of BTR1
    pub fn tseg1(&self) -> u8 {
        self.btr1 & BTR1_TSEG1_MASK
    }

    /// Time segment 2 field of BTR1
    pub fn tseg2(&self) -> u8 {
        (self.btr1 & BTR1_TSEG2_MASK) >> BTR1_TSEG2_SHIFT
    }

    /// Length of one bit in controller clock ticks
    pub fn bit_time_ticks(&self) -> u32 {
        let brp = self.brp() as u32;
        let ts1 = self.tseg1() as u32;
        let ts2 = self.tseg2() as u32;
        2 * (brp + 1) * (ts1 + ts2 + 3)
    }

    /// Human readable name
    ///
    /// Falls back to the registers formatted as `BTR0:BTR1` in hex.
    pub fn name(&self) -> &str {
        self.name
            .get_or_init(|| format!("{:02X}:{:02X}", self.btr0, self.btr1))
    }

    /// Empty timing, both registers zero
    pub fn empty() -> Self {
        Self::with_name(0, 0, "<Empty>")
    }

    /// CiA 10 kbit/s
    pub fn cia_10k() -> Self {
        Self::with_name(CAN_BT0_10KB, CAN_BT1_10KB, "CiA 10 kbit/s")
    }

    /// CiA 20 kbit/s
    pub fn cia_20k() -> Self {
        Self::with_name(CAN_BT0_20KB, CAN_BT1_20KB, "CiA 20 kbit/s")
    }

    /// CiA 50 kbit/s
    pub fn cia_50k() -> Self {
        Self::with_name(CAN_BT0_50KB, CAN_BT1_50KB, "CiA 50 kbit/s")
    }

    /// CiA 125 kbit/s
    pub fn cia_125k() -> Self {
        Self::with_name(CAN_BT0_125KB, CAN_BT1_125KB, "CiA 125 kbit/s")
    }

    /// CiA 250 kbit/s
    pub fn cia_250k() -> Self {
        Self::with_name(CAN_BT0_250KB, CAN_BT1_250KB, "CiA 250 kbit/s")
    }

    /// CiA 500 kbit/s
    pub fn cia_500k() -> Self {
        Self::with_name(CAN_BT0_500KB, CAN_BT1_500KB, "CiA 500 kbit/s")
    }

    /// CiA 800 kbit/s
    pub fn cia_800k() -> Self {
        Self::with_name(CAN_BT0_800KB, CAN_BT1_800KB, "CiA 800 kbit/s")
    }

    /// CiA 1000 kbit/s
    pub fn cia_1000k() -> Self {
        Self::with_name(CAN_BT0_1000KB, CAN_BT1_1000KB, "CiA 1000 kbit/s")
    }

    /// 100 kbit/s (not part of the CiA table)
    pub fn kbit_100() -> Self {
        Self::with_name(CAN_BT0_100KB, CAN_BT1_100KB, "100 kbit/s")
    }

    /// All CiA bitrates in ascending order
    pub fn cia_all() -> [Self; 8] {
        [
            Self::cia_10k(),
            Self::cia_20k(),
            Self::cia_50k(),
            Self::cia_125k(),
            Self::cia_250k(),
            Self::cia_500k(),
            Self::cia_800k(),
            Self::cia_1000k(),
        ]
    }
}

impl PartialEq for BitTimingValue {
    fn eq(&self, other: &Self) -> bool {
        self.btr0 == other.btr0 && self.btr1 == other.btr1
    }
}

impl Eq for BitTimingValue {}

impl Hash for BitTimingValue {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.btr0.hash(state);
        self.btr1.hash(state);
    }
}

impl std::fmt::Display for BitTimingValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::fmt::Debug for BitTimingValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BitTimingValue")
            .field("btr0", &format_args!("0x{:02X}", self.btr0))
            .field("btr1", &format_args!("0x{:02X}", self.btr1))
            .field("name", &self.name.get())
            .finish()
    }
}

/// CAN and CAN-FD bit timing
///
/// Without [`BitrateModeFlags::RAW`] the prescaler field holds a bit rate in
/// bit/s and the time segments are relative quanta; the driver computes the
/// controller registers from them. With `RAW` every field is written to the
/// controller unchanged and the prescaler field is the prescaler.
///
/// Two values are equal when all six timing fields are equal.
#[derive(Clone)]
pub struct BitTimingValue2 {
    mode: BitrateModeFlags,
    prescaler: u32,
    time_segment1: u16,
    time_segment2: u16,
    sjw: u16,
    transmitter_delay: u16,
    name: OnceLock<String>,
}

impl BitTimingValue2 {
    /// Create a bit timing value
    ///
    /// # Arguments
    /// * `mode` - Interpretation of the remaining fields
    /// * `prescaler` - Bit/s in logical mode, prescaler in raw mode
    /// * `time_segment1` - Quanta before the sample point
    /// * `time_segment2` - Quanta after the sample point
    /// * `sjw` - Synchronization jump width in quanta
    /// * `transmitter_delay` - Transmitter delay compensation offset, 0 disables it
    pub fn new(
        mode: BitrateModeFlags,
        prescaler: u32,
        time_segment1: u16,
        time_segment2: u16,
        sjw: u16,
        transmitter_delay: u16,
    ) -> Self {
        Self {
            mode,
            prescaler,
            time_segment1,
            time_segment2,
            sjw,
            transmitter_delay,
            name: OnceLock::new(),
        }
    }

    /// Create a bit timing value with a human readable name
    pub fn with_name(
        mode: BitrateModeFlags,
        prescaler: u32,
        time_segment1: u16,
        time_segment2: u16,
        sjw: u16,
        transmitter_delay: u16,
        name: impl Into<String>,
    ) -> Self {
        let value = Self::new(
            mode,
            prescaler,
            time_segment1,
            time_segment2,
            sjw,
            transmitter_delay,
        );
        Self {
            name: OnceLock::from(name.into()),
            ..value
        }
    }

    /// Timing mode
    pub fn mode(&self) -> BitrateModeFlags {
        self.mode
    }

    /// Prescaler (raw mode) or bit/s (logical mode)
    pub fn prescaler(&self) -> u32 {
        self.prescaler
    }

    /// Time segment 1 in quanta
    pub fn time_segment1(&self) -> u16 {
        self.time_segment1
    }

    /// Time segment 2 in quanta
    pub fn time_segment2(&self) -> u16 {
        self.time_segment2
    }

    /// Synchronization jump width in quanta
    pub fn sjw(&self) -> u16 {
        self.sjw
    }

    /// Transmitter delay compensation offset in quanta
    pub fn transmitter_delay(&self) -> u16 {
        self.transmitter_delay
    }

    /// Check if the fields are raw register values
    pub fn is_raw(&self) -> bool {
        self.mode.contains(BitrateModeFlags::RAW)
    }

    /// Check if triple sampling is requested
    pub fn is_triple_sampling(&self) -> bool {
        self.mode.contains(BitrateModeFlags::TRIPLE_SAMPLING)
    }

    /// Bit rate in bit/s, `None` in raw mode
    pub fn bits_per_second(&self) -> Option<u32> {
        if self.is_raw() {
            None
        } else {
            Some(self.prescaler)
        }
    }

    /// Length of one bit in controller clock ticks
    ///
    /// There is no agreed representation for this yet; always 0.
    // TODO: define bit time for logical mode once the driver exposes the controller clock
    pub fn bit_time_ticks(&self) -> u32 {
        0
    }

    /// Human readable name, `"not specified"` if none was given
    pub fn name(&self) -> &str {
        self.name.get_or_init(|| "not specified".to_string())
    }

    /// Empty timing, all fields zero
    pub fn empty() -> Self {
        Self::with_name(BitrateModeFlags::NONE, 0, 0, 0, 0, 0, "<Empty>")
    }

    // ------------------------------------------------------------------------
    // CiA bitrates (logical mode)
    // ------------------------------------------------------------------------

    /// CiA 10 kbit/s
    pub fn cia_10k() -> Self {
        Self::with_name(BitrateModeFlags::NONE, 10_000, 14, 2, 1, 0, "CiA 10 kbit/s")
    }

    /// CiA 20 kbit/s
    pub fn cia_20k() -> Self {
        Self::with_name(BitrateModeFlags::NONE, 20_000, 14, 2, 1, 0, "CiA 20 kbit/s")
    }

    /// CiA 50 kbit/s
    pub fn cia_50k() -> Self {
        Self::with_name(BitrateModeFlags::NONE, 50_000, 14, 2, 1, 0, "CiA 50 kbit/s")
    }

    /// CiA 125 kbit/s
    pub fn cia_125k() -> Self {
        Self::with_name(BitrateModeFlags::NONE, 125_000, 14, 2, 1, 0, "CiA 125 kbit/s")
    }

    /// CiA 250 kbit/s
    pub fn cia_250k() -> Self {
        Self::with_name(BitrateModeFlags::NONE, 250_000, 14, 2, 1, 0, "CiA 250 kbit/s")
    }

    /// CiA 500 kbit/s
    pub fn cia_500k() -> Self {
        Self::with_name(BitrateModeFlags::NONE, 500_000, 14, 2, 1, 0, "CiA 500 kbit/s")
    }

    /// CiA 800 kbit/s
    pub fn cia_800k() -> Self {
        Self::with_name(BitrateModeFlags::NONE, 800_000, 8, 2, 1, 0, "CiA 800 kbit/s")
    }

    /// CiA 1000 kbit/s
    pub fn cia_1000k() -> Self {
        Self::with_name(BitrateModeFlags::NONE, 1_000_000, 6, 2, 1, 0, "CiA 1000 kbit/s")
    }

    /// 100 kbit/s (not part of the CiA table)
    pub fn kbit_100() -> Self {
        Self::with_name(BitrateModeFlags::NONE, 100_000, 14, 2, 1, 0, "100 kbit/s")
    }

    /// All CiA bitrates in ascending order
    pub fn cia_all() -> [Self; 8] {
        [
            Self::cia_10k(),
            Self::cia_20k(),
            Self::cia_50k(),
            Self::cia_125k(),
            Self::cia_250k(),
            Self::cia_500k(),
            Self::cia_800k(),
            Self::cia_1000k(),
        ]
    }

    // ------------------------------------------------------------------------
    // IFI CAN-FD controller (raw mode)
    // ------------------------------------------------------------------------

    /// IFI 833 kbit/s
    ///
    /// The name is "IFI CAN-FD 1000 kbit/s", as shipped by the vendor table.
    pub fn ifi_833k() -> Self {
        Self::with_name(BitrateModeFlags::RAW, 6, 12, 3, 3, 78, "IFI CAN-FD 1000 kbit/s")
    }

    /// IFI 1000 kbit/s
    pub fn ifi_1000k() -> Self {
        Self::with_name(BitrateModeFlags::RAW, 4, 15, 4, 4, 64, "IFI CAN-FD 1000 kbit/s")
    }

    /// IFI 2000 kbit/s
    pub fn ifi_2000k() -> Self {
        Self::with_name(BitrateModeFlags::RAW, 2, 15, 4, 4, 32, "IFI CAN-FD 2000 kbit/s")
    }

    /// IFI 4000 kbit/s
    pub fn ifi_4000k() -> Self {
        Self::with_name(BitrateModeFlags::RAW, 2, 7, 2, 2, 16, "IFI CAN-FD 4000 kbit/s")
    }

    /// IFI 5000 kbit/s
    pub fn ifi_5000k() -> Self {
        Self::with_name(BitrateModeFlags::RAW, 2, 5, 2, 2, 12, "IFI CAN-FD 5000 kbit/s")
    }

    /// IFI 6667 kbit/s
    pub fn ifi_6667k() -> Self {
        Self::with_name(BitrateModeFlags::RAW, 2, 3, 2, 2, 8, "IFI CAN-FD 6667 kbit/s")
    }

    /// IFI 8000 kbit/s
    pub fn ifi_8000k() -> Self {
        Self::with_name(BitrateModeFlags::RAW, 2, 3, 1, 1, 5, "IFI CAN-FD 8000 kbit/s")
    }

    /// IFI 10000 kbit/s
    pub fn ifi_10000k() -> Self {
        Self::with_name(BitrateModeFlags::RAW, 2, 2, 1, 1, 4, "IFI CAN-FD 10000 kbit/s")
    }

    /// IFI data bitrates 1000..10000 kbit/s in ascending order
    pub fn ifi_all() -> [Self; 7] {
        [
            Self::ifi_1000k(),
            Self::ifi_2000k(),
            Self::ifi_4000k(),
            Self::ifi_5000k(),
            Self::ifi_6667k(),
            Self::ifi_8000k(),
            Self::ifi_10000k(),
        ]
    }

    // ------------------------------------------------------------------------
    // CAN-FD bitrates (logical mode)
    //
    // TDO is a per-entry fraction of TSEG1 + TSEG2, truncated.
    // ------------------------------------------------------------------------

    /// CAN-FD 250 kbit/s
    pub fn canfd_250k() -> Self {
        // (6400 + 1600) * 0.8
        Self::with_name(BitrateModeFlags::NONE, 250_000, 6400, 1600, 1600, 6400, "CANFD 250 kbit/s")
    }

    /// CAN-FD 500 kbit/s
    pub fn canfd_500k() -> Self {
        // (6400 + 1600) * 0.8
        Self::with_name(BitrateModeFlags::NONE, 500_000, 6400, 1600, 1600, 6400, "CANFD 500 kbit/s")
    }

    /// CAN-FD 833 kbit/s
    pub fn canfd_833k() -> Self {
        // (6400 + 1600) * 0.81, taken from the 250/500 kbit/s segments
        Self::with_name(BitrateModeFlags::NONE, 833_333, 1600, 400, 400, 6480, "CANFD 833 kbit/s")
    }

    /// CAN-FD 1000 kbit/s
    pub fn canfd_1000k() -> Self {
        // (1600 + 400) * 0.8
        Self::with_name(BitrateModeFlags::NONE, 1_000_000, 1600, 400, 400, 1600, "CANFD 1000 kbit/s")
    }

    /// CAN-FD 1538 kbit/s
    pub fn canfd_1538k() -> Self {
        // (1000 + 300) * 0.8
        Self::with_name(BitrateModeFlags::NONE, 1_538_461, 1000, 300, 300, 1040, "CANFD 1538 kbit/s")
    }

    /// CAN-FD 2000 kbit/s
    pub fn canfd_2000k() -> Self {
        // (1600 + 400) * 0.8
        Self::with_name(BitrateModeFlags::NONE, 2_000_000, 1600, 400, 400, 1600, "CANFD 2000 kbit/s")
    }

    /// CAN-FD 4000 kbit/s
    pub fn canfd_4000k() -> Self {
        // (800 + 200) * 0.8
        Self::with_name(BitrateModeFlags::NONE, 4_000_000, 800, 200, 200, 800, "CANFD 4000 kbit/s")
    }

    /// CAN-FD 5000 kbit/s
    pub fn canfd_5000k() -> Self {
        // (600 + 200) * 0.75
        Self::with_name(BitrateModeFlags::NONE, 5_000_000, 600, 200, 200, 600, "CANFD 5000 kbit/s")
    }

    /// CAN-FD 6667 kbit/s
    pub fn canfd_6667k() -> Self {
        // (400 + 200) * 0.67
        Self::with_name(BitrateModeFlags::NONE, 6_666_666, 400, 200, 200, 402, "CANFD 6667 kbit/s")
    }

    /// CAN-FD 8000 kbit/s
    pub fn canfd_8000k() -> Self {
        // (400 + 100) * 0.5
        Self::with_name(BitrateModeFlags::NONE, 8_000_000, 400, 100, 100, 250, "CANFD 8000 kbit/s")
    }

    /// CAN-FD 10000 kbit/s
    pub fn canfd_10000k() -> Self {
        // (300 + 100) * 0.5
        Self::with_name(BitrateModeFlags::NONE, 10_000_000, 300, 100, 100, 200, "CANFD 10000 kbit/s")
    }

    /// CAN-FD data bitrates 1000..10000 kbit/s in ascending order
    pub fn canfd_all() -> [Self; 7] {
        [
            Self::canfd_1000k(),
            Self::canfd_2000k(),
            Self::canfd_4000k(),
            Self::canfd_5000k(),
            Self::canfd_6667k(),
            Self::canfd_8000k(),
            Self::canfd_10000k(),
        ]
    }
}

impl PartialEq for BitTimingValue2 {
    fn eq(&self, other: &Self) -> bool {
        self.mode == other.mode
            && self.prescaler == other.prescaler
            && self.time_segment1 == other.time_segment1
            && self.time_segment2 == other.time_segment2
            && self.sjw == other.sjw
            && self.transmitter_delay == other.transmitter_delay
    }
}

impl Eq for BitTimingValue2 {}

impl Hash for BitTimingValue2 {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.mode.hash(state);
        self.prescaler.hash(state);
        self.time_segment1.hash(state);
        self.time_segment2.hash(state);
        self.sjw.hash(state);
        self.transmitter_delay.hash(state);
    }
}

impl std::fmt::Display for BitTimingValue2 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::fmt::Debug for BitTimingValue2 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BitTimingValue2")
            .field("mode", &self.mode)
            .field("prescaler", &self.prescaler)
            .field("time_segment1", &self.time_segment1)
            .field("time_segment2", &self.time_segment2)
            .field("sjw", &self.sjw)
            .field("transmitter_delay", &self.transmitter_delay)
            .field("name", &self.name.get())
            .finish()
    }
}

/// CAN-FD bit rate configuration
///
/// Pairs the arbitration phase timing with the data phase timing used
/// after the bit rate switch.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FdBitratePair {
    standard_bitrate: BitTimingValue2,
    fast_bitrate: BitTimingValue2,
}

impl FdBitratePair {
    /// Create a pair from arbitration and data phase timing
    pub fn new(standard_bitrate: BitTimingValue2, fast_bitrate: BitTimingValue2) -> Self {
        Self {
            standard_bitrate,
            fast_bitrate,
        }
    }

    /// Create a pair that runs both phases at the same timing (classic CAN)
    pub fn from_single(bitrate: BitTimingValue2) -> Self {
        Self {
            fast_bitrate: bitrate.clone(),
            standard_bitrate: bitrate,
        }
    }

    /// Arbitration phase timing
    pub fn standard_bitrate(&self) -> &BitTimingValue2 {
        &self.standard_bitrate
    }

    /// Data phase timing
    pub fn fast_bitrate(&self) -> &BitTimingValue2 {
        &self.fast_bitrate
    }

    /// Check if both phases use the same timing
    pub fn is_single_rate(&self) -> bool {
        self.standard_bitrate == self.fast_bitrate
    }

    /// CiA bitrates, same timing in both phases
    pub fn cia_all() -> [Self; 8] {
        BitTimingValue2::cia_all().map(Self::from_single)
    }

    /// Short bus lines: 500 kbit/s arbitration, 1000..10000 kbit/s data
    pub fn short_line_all() -> [Self; 7] {
        BitTimingValue2::canfd_all().map(|fast| Self::new(BitTimingValue2::canfd_500k(), fast))
    }

    /// Long bus lines: 250 kbit/s arbitration, 500..4000 kbit/s data
    pub fn long_line_all() -> [Self; 6] {
        [
            BitTimingValue2::canfd_500k(),
            BitTimingValue2::canfd_833k(),
            BitTimingValue2::canfd_1000k(),
            BitTimingValue2::canfd_1538k(),
            BitTimingValue2::canfd_2000k(),
            BitTimingValue2::canfd_4000k(),
        ]
        .map(|fast| Self::new(BitTimingValue2::canfd_250k(), fast))
    }
}

impl From<BitTimingValue2> for FdBitratePair {
    fn from(bitrate: BitTimingValue2) -> Self {
        Self::from_single(bitrate)
    }
}

impl std::fmt::Display for FdBitratePair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} / {}", self.standard_bitrate, self.fast_bitrate)
    }
}

/// LIN bitrate in bit/s
///
/// Equal when the bit rates are equal; the name is for display only.
#[derive(Clone)]
pub struct LinBitrate {
    bitrate: u16,
    name: OnceLock<String>,
}

impl LinBitrate {
    /// Create a LIN bitrate
    pub fn new(bitrate: u16) -> Self {
        Self {
            bitrate,
            name: OnceLock::new(),
        }
    }

    /// Create a LIN bitrate with a human readable name
    pub fn with_name(bitrate: u16, name: impl Into<String>) -> Self {
        Self {
            bitrate,
            name: OnceLock::from(name.into()),
        }
    }

    /// Bit rate in bit/s
    pub fn as_u16(&self) -> u16 {
        self.bitrate
    }

    /// Human readable name, `"<n> bit/s"` if none was given
    pub fn name(&self) -> &str {
        self.name
            .get_or_init(|| format!("{} bit/s", self.bitrate))
    }

    /// Check if the controller should detect the bitrate
    pub fn is_auto(&self) -> bool {
        self.bitrate == LIN_BITRATE_AUTO
    }

    /// Check if the bitrate is unset
    pub fn is_undefined(&self) -> bool {
        self.bitrate == LIN_BITRATE_UNDEF
    }

    /// Check if the bitrate lies within the LIN range
    pub fn is_in_range(&self) -> bool {
        (LIN_BITRATE_MIN..=LIN_BITRATE_MAX).contains(&self.bitrate)
    }

    pub fn undefined() -> Self {
        Self::with_name(LIN_BITRATE_UNDEF, "Undefined")
    }

    pub fn auto_rate() -> Self {
        Self::with_name(LIN_BITRATE_AUTO, "Automatic")
    }

    pub fn min() -> Self {
        Self::with_name(LIN_BITRATE_MIN, "Lowest")
    }

    pub fn max() -> Self {
        Self::with_name(LIN_BITRATE_MAX, "Highest")
    }

    pub fn lin_1000() -> Self {
        Self::new(LIN_BITRATE_1000)
    }

    pub fn lin_1200() -> Self {
        Self::new(LIN_BITRATE_1200)
    }

    pub fn lin_2400() -> Self {
        Self::new(LIN_BITRATE_2400)
    }

    pub fn lin_4800() -> Self {
        Self::new(LIN_BITRATE_4800)
    }

    pub fn lin_9600() -> Self {
        Self::new(LIN_BITRATE_9600)
    }

    pub fn lin_10400() -> Self {
        Self::new(LIN_BITRATE_10400)
    }

    pub fn lin_19200() -> Self {
        Self::new(LIN_BITRATE_19200)
    }

    pub fn lin_20000() -> Self {
        Self::new(LIN_BITRATE_20000)
    }

    /// Standard LIN bitrates in ascending order
    pub fn standard_all() -> [Self; 8] {
        [
            Self::lin_1000(),
            Self::lin_1200(),
            Self::lin_2400(),
            Self::lin_4800(),
            Self::lin_9600(),
            Self::lin_10400(),
            Self::lin_19200(),
            Self::lin_20000(),
        ]
    }
}

impl PartialEq for LinBitrate {
    fn eq(&self, other: &Self) -> bool {
        self.bitrate == other.bitrate
    }
}

impl Eq for LinBitrate {}

impl Hash for LinBitrate {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.bitrate.hash(state);
    }
}

impl std::fmt::Display for LinBitrate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::fmt::Debug for LinBitrate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LinBitrate")
            .field("bitrate", &self.bitrate)
            .field("name", &self.name.get())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;
    use std::collections::HashSet;
    use std::sync::Arc;

    fn hash_of<T: Hash>(value: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn test_as_u16() {
        for b0 in 0..=0xFFu8 {
            for b1 in 0..=0xFFu8 {
                let value = BitTimingValue::new(b0, b1);
                assert_eq!(value.as_u16(), ((b1 as u16) << 8) | b0 as u16);
            }
        }
    }

    #[test]
    fn test_name_does_not_affect_equality() {
        for b0 in 0..=0xFFu8 {
            for b1 in 0..=0xFFu8 {
                let plain = BitTimingValue::new(b0, b1);
                let named = BitTimingValue::with_name(b0, b1, "X");
                assert_eq!(plain, named);
                assert_eq!(hash_of(&plain), hash_of(&named));
            }
        }
        assert_ne!(BitTimingValue::new(0x00, 0x14), BitTimingValue::new(0x00, 0x16));
    }

    #[test]
    fn test_bit_time_ticks_cia_250k() {
        let value = BitTimingValue::cia_250k();
        assert_eq!(value.brp(), 1);
        assert_eq!(value.tseg1(), 12);
        assert_eq!(value.tseg2(), 1);
        assert_eq!(value.bit_time_ticks(), 64);
    }

    #[test]
    fn test_bit_time_ticks_table() {
        // 16 MHz clock: ticks * bitrate == 16_000_000 across the table
        let expected = [
            (BitTimingValue::cia_10k(), 10_000),
            (BitTimingValue::cia_20k(), 20_000),
            (BitTimingValue::cia_50k(), 50_000),
            (BitTimingValue::kbit_100(), 100_000),
            (BitTimingValue::cia_125k(), 125_000),
            (BitTimingValue::cia_250k(), 250_000),
            (BitTimingValue::cia_500k(), 500_000),
            (BitTimingValue::cia_800k(), 800_000),
            (BitTimingValue::cia_1000k(), 1_000_000),
        ];
        for (value, bitrate) in expected {
            assert_eq!(value.bit_time_ticks() * bitrate, 16_000_000, "{}", value);
        }
        // 800 kbit/s: 2 * 1 * (6 + 1 + 3)
        assert_eq!(BitTimingValue::cia_800k().bit_time_ticks(), 20);
    }

    #[test]
    fn test_name_fallback() {
        let value = BitTimingValue::new(0x0A, 0x1C);
        assert_eq!(value.name(), "0A:1C");
        let first = value.name().as_ptr();
        assert_eq!(value.name().as_ptr(), first);
        assert_eq!(value.to_string(), "0A:1C");
        assert_eq!(BitTimingValue::cia_500k().name(), "CiA 500 kbit/s");
    }

    #[test]
    fn test_name_concurrent_access() {
        let value = Arc::new(BitTimingValue::new(0x01, 0x1C));
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let value = Arc::clone(&value);
                std::thread::spawn(move || value.name().to_string())
            })
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), "01:1C");
        }
    }

    #[test]
    fn test_cia_all_order() {
        let rates = BitTimingValue::cia_all();
        assert_eq!(rates.len(), 8);
        let names: Vec<_> = rates.iter().map(|r| r.name().to_string()).collect();
        assert_eq!(
            names,
            [
                "CiA 10 kbit/s",
                "CiA 20 kbit/s",
                "CiA 50 kbit/s",
                "CiA 125 kbit/s",
                "CiA 250 kbit/s",
                "CiA 500 kbit/s",
                "CiA 800 kbit/s",
                "CiA 1000 kbit/s"
            ]
        );
        // strictly shorter bit times means strictly ascending rates
        for pair in rates.windows(2) {
            assert!(pair[0].bit_time_ticks() > pair[1].bit_time_ticks());
        }
        assert!(!rates.contains(&BitTimingValue::kbit_100()));
    }

    #[test]
    fn test_cia_register_table() {
        let regs: Vec<_> = BitTimingValue::cia_all()
            .iter()
            .map(|r| (r.btr0(), r.btr1()))
            .collect();
        assert_eq!(
            regs,
            [
                (0x31, 0x1C),
                (0x18, 0x1C),
                (0x09, 0x1C),
                (0x03, 0x1C),
                (0x01, 0x1C),
                (0x00, 0x1C),
                (0x00, 0x16),
                (0x00, 0x14)
            ]
        );
    }

    #[test]
    fn test_empty_presets() {
        let empty = BitTimingValue::empty();
        assert_eq!(empty, BitTimingValue::new(0, 0));
        assert_eq!(empty.name(), "<Empty>");

        let empty2 = BitTimingValue2::empty();
        assert_eq!(empty2, BitTimingValue2::new(BitrateModeFlags::NONE, 0, 0, 0, 0, 0));
        assert_eq!(empty2.name(), "<Empty>");
    }

    #[test]
    fn test_bitrate2_equality_covers_all_fields() {
        let base = BitTimingValue2::new(BitrateModeFlags::NONE, 500_000, 14, 2, 1, 0);
        assert_eq!(base, BitTimingValue2::new(BitrateModeFlags::NONE, 500_000, 14, 2, 1, 0));

        let variants = [
            BitTimingValue2::new(BitrateModeFlags::RAW, 500_000, 14, 2, 1, 0),
            BitTimingValue2::new(BitrateModeFlags::NONE, 500_001, 14, 2, 1, 0),
            BitTimingValue2::new(BitrateModeFlags::NONE, 500_000, 15, 2, 1, 0),
            BitTimingValue2::new(BitrateModeFlags::NONE, 500_000, 14, 3, 1, 0),
            BitTimingValue2::new(BitrateModeFlags::NONE, 500_000, 14, 2, 2, 0),
            BitTimingValue2::new(BitrateModeFlags::NONE, 500_000, 14, 2, 1, 1),
        ];
        for variant in &variants {
            assert_ne!(&base, variant);
        }
    }

    #[test]
    fn test_bitrate2_name_does_not_affect_equality() {
        let named = BitTimingValue2::cia_250k();
        let plain = BitTimingValue2::new(BitrateModeFlags::NONE, 250_000, 14, 2, 1, 0);
        assert_eq!(named, plain);
        assert_eq!(hash_of(&named), hash_of(&plain));
    }

    #[test]
    fn test_bitrate2_name_fallback() {
        let value = BitTimingValue2::new(BitrateModeFlags::RAW, 2, 3, 1, 1, 5);
        assert_eq!(value.name(), "not specified");
        assert_eq!(value.to_string(), "not specified");
    }

    #[test]
    fn test_bitrate2_bit_time_is_unspecified() {
        // Known gap: no bit time representation is defined, the sentinel is 0
        assert_eq!(BitTimingValue2::cia_250k().bit_time_ticks(), 0);
        assert_eq!(BitTimingValue2::ifi_1000k().bit_time_ticks(), 0);
        let ticks: u32 = BitTimingValue2::canfd_2000k().bit_time_ticks();
        assert_eq!(ticks, 0);
    }

    #[test]
    fn test_ifi_1000k() {
        let value = BitTimingValue2::ifi_1000k();
        assert_eq!(value, BitTimingValue2::new(BitrateModeFlags::RAW, 4, 15, 4, 4, 64));
        assert!(value.is_raw());
        assert_eq!(value.bits_per_second(), None);
    }

    #[test]
    fn test_ifi_833k_keeps_vendor_name() {
        let value = BitTimingValue2::ifi_833k();
        assert_eq!(value, BitTimingValue2::new(BitrateModeFlags::RAW, 6, 12, 3, 3, 78));
        assert_eq!(value.name(), "IFI CAN-FD 1000 kbit/s");
        assert!(!BitTimingValue2::ifi_all().contains(&value));
    }

    #[test]
    fn test_canfd_1000k() {
        let value = BitTimingValue2::canfd_1000k();
        let tdo = ((1600.0 + 400.0) * 0.8f64) as u16;
        assert_eq!(
            value,
            BitTimingValue2::new(BitrateModeFlags::NONE, 1_000_000, 1600, 400, 400, tdo)
        );
        assert_eq!(value.transmitter_delay(), 1600);
        assert_eq!(value.bits_per_second(), Some(1_000_000));
    }

    #[test]
    fn test_canfd_transmitter_delays() {
        let table = [
            (BitTimingValue2::canfd_250k(), 6400),
            (BitTimingValue2::canfd_500k(), 6400),
            (BitTimingValue2::canfd_833k(), 6480),
            (BitTimingValue2::canfd_1000k(), 1600),
            (BitTimingValue2::canfd_1538k(), 1040),
            (BitTimingValue2::canfd_2000k(), 1600),
            (BitTimingValue2::canfd_4000k(), 800),
            (BitTimingValue2::canfd_5000k(), 600),
            (BitTimingValue2::canfd_6667k(), 402),
            (BitTimingValue2::canfd_8000k(), 250),
            (BitTimingValue2::canfd_10000k(), 200),
        ];
        for (value, tdo) in table {
            assert_eq!(value.transmitter_delay(), tdo, "{}", value);
            assert_eq!(value.mode(), BitrateModeFlags::NONE);
        }
    }

    #[test]
    fn test_cia2_quanta_split() {
        for value in BitTimingValue2::cia_all() {
            let expected_ts1 = match value.prescaler() {
                800_000 => 8,
                1_000_000 => 6,
                _ => 14,
            };
            assert_eq!(value.time_segment1(), expected_ts1, "{}", value);
            assert_eq!(value.time_segment2(), 2);
            assert_eq!(value.sjw(), 1);
            assert_eq!(value.transmitter_delay(), 0);
            assert!(!value.is_raw());
        }
    }

    #[test]
    fn test_preset_round_trip() {
        let presets = BitTimingValue2::cia_all()
            .into_iter()
            .chain(BitTimingValue2::ifi_all())
            .chain(BitTimingValue2::canfd_all())
            .chain([BitTimingValue2::canfd_250k(), BitTimingValue2::canfd_833k()]);
        for preset in presets {
            let rebuilt = BitTimingValue2::new(
                preset.mode(),
                preset.prescaler(),
                preset.time_segment1(),
                preset.time_segment2(),
                preset.sjw(),
                preset.transmitter_delay(),
            );
            assert_eq!(rebuilt, preset);
        }
    }

    #[test]
    fn test_catalogs_have_distinct_entries() {
        let ifi: HashSet<_> = BitTimingValue2::ifi_all().into_iter().collect();
        assert_eq!(ifi.len(), 7);
        let fd: HashSet<_> = BitTimingValue2::canfd_all().into_iter().collect();
        assert_eq!(fd.len(), 7);
    }

    #[test]
    fn test_fd_pair_from_single() {
        let pair = FdBitratePair::from_single(BitTimingValue2::cia_500k());
        assert_eq!(pair.standard_bitrate(), pair.fast_bitrate());
        assert!(pair.is_single_rate());
        assert_eq!(FdBitratePair::from(BitTimingValue2::cia_500k()), pair);
    }

    #[test]
    fn test_fd_pair_catalogs() {
        let cia = FdBitratePair::cia_all();
        assert_eq!(cia.len(), 8);
        assert!(cia.iter().all(FdBitratePair::is_single_rate));

        let short = FdBitratePair::short_line_all();
        assert_eq!(short.len(), 7);
        assert!(short
            .iter()
            .all(|p| *p.standard_bitrate() == BitTimingValue2::canfd_500k()));
        assert_eq!(*short[0].fast_bitrate(), BitTimingValue2::canfd_1000k());
        assert_eq!(*short[6].fast_bitrate(), BitTimingValue2::canfd_10000k());

        let long = FdBitratePair::long_line_all();
        assert_eq!(long.len(), 6);
        assert!(long
            .iter()
            .all(|p| *p.standard_bitrate() == BitTimingValue2::canfd_250k()));
        assert_eq!(*long[0].fast_bitrate(), BitTimingValue2::canfd_500k());
        assert_eq!(*long[5].fast_bitrate(), BitTimingValue2::canfd_4000k());
    }

    #[test]
    fn test_lin_bitrate() {
        assert_eq!(LinBitrate::lin_9600().name(), "9600 bit/s");
        assert_eq!(LinBitrate::auto_rate().name(), "Automatic");
        assert!(LinBitrate::auto_rate().is_auto());
        assert!(LinBitrate::undefined().is_undefined());
        assert!(!LinBitrate::undefined().is_in_range());
        assert!(LinBitrate::lin_19200().is_in_range());
        assert_eq!(LinBitrate::min(), LinBitrate::lin_1000());
        assert_eq!(LinBitrate::max(), LinBitrate::lin_20000());
        assert_eq!(LinBitrate::with_name(9600, "fast"), LinBitrate::lin_9600());
    }
}
