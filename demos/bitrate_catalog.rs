//! Bitrate Catalog Example
//!
//! Prints every preset the crate ships:
//! - CiA classic CAN timings (BTR0/BTR1 and six field form)
//! - IFI raw CAN-FD timings
//! - CAN-FD short and long bus line pairs
//! - LIN bitrates

use vci4::{BitTimingValue, BitTimingValue2, FdBitratePair, LinBitrate};

const CONTROLLER_CLOCK_HZ: u32 = 16_000_000;

fn header(title: &str) {
    println!();
    println!("{}", "-".repeat(60));
    println!("{}", title);
    println!("{}", "-".repeat(60));
}

fn print_btp(value: &BitTimingValue2) {
    let rate = match value.bits_per_second() {
        Some(bps) => format!("{} bit/s", bps),
        None => format!("prescaler {}", value.prescaler()),
    };
    println!(
        "  {:<24} {:<20} ts1={:<5} ts2={:<5} sjw={:<5} tdo={}",
        value.name(),
        rate,
        value.time_segment1(),
        value.time_segment2(),
        value.sjw(),
        value.transmitter_delay()
    );
}

fn main() {
    env_logger::init();

    println!("{}", "=".repeat(60));
    println!("VCI4 Bitrate Catalog");
    println!("{}", "=".repeat(60));

    header("CiA bitrates (BTR0:BTR1)");
    for value in BitTimingValue::cia_all() {
        let ticks = value.bit_time_ticks();
        println!(
            "  {:<16} {:02X}:{:02X}  ticks={:<4} => {} bit/s",
            value.name(),
            value.btr0(),
            value.btr1(),
            ticks,
            CONTROLLER_CLOCK_HZ / ticks
        );
    }

    header("CiA bitrates (logical)");
    for value in BitTimingValue2::cia_all() {
        print_btp(&value);
    }

    header("IFI CAN-FD bitrates (raw)");
    for value in BitTimingValue2::ifi_all() {
        print_btp(&value);
    }

    header("CAN-FD short bus lines");
    for pair in FdBitratePair::short_line_all() {
        println!("  {}", pair);
    }

    header("CAN-FD long bus lines");
    for pair in FdBitratePair::long_line_all() {
        println!("  {}", pair);
    }

    header("LIN bitrates");
    for bitrate in LinBitrate::standard_all() {
        println!("  {:<12} in range: {}", bitrate.name(), bitrate.is_in_range());
    }
    for special in [LinBitrate::auto_rate(), LinBitrate::undefined()] {
        println!("  {:<12} value: {}", special.name(), special.as_u16());
    }
}
