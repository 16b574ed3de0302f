//! Loopback Line Example
//!
//! Drives an in-process controller through the driver traits:
//! 1. Initializes a CAN-FD line at 500 kbit/s / 2000 kbit/s
//! 2. Starts the line and prints the line status
//! 3. Tries a bitrate outside the socket limits and prints the driver error
//! 4. Stops and resets the line
//!
//! Run with `RUST_LOG=debug` to see the native records handed to the driver.

use vci4::constants::{VCI_E_INVALID_TIMING, VCI_E_NOT_INITIALIZED, VCI_OK};
use vci4::native::{NativeCanInitLine2, NativeCanLineStatus2};
use vci4::{
    BitTimingValue2, CanBusCouplings, CanControl2, CanCtrlType, CanFeatures, CanFilter,
    CanFilterControl, CanFilterMode, CanInitLine2, CanSocketInfo2, CtrlStatusFlags,
    ExtendedOperatingModeFlags, FdBitratePair, LineControl, OperatingModeFlags,
    CAN_ACC_CODE_ALL, CAN_ACC_MASK_ALL,
};

struct LoopbackController {
    socket: CanSocketInfo2,
    init: Option<NativeCanInitLine2>,
    started: bool,
}

impl LoopbackController {
    fn new() -> Self {
        Self {
            socket: CanSocketInfo2 {
                controller_type: CanCtrlType::IfiCanFd,
                bus_coupling: CanBusCouplings::HIGH_SPEED,
                features: CanFeatures::STD_AND_EXT
                    | CanFeatures::ERR_FRAME
                    | CanFeatures::BUSLOAD
                    | CanFeatures::EXTENDED_DATA_LENGTH
                    | CanFeatures::FAST_DATA_RATE
                    | CanFeatures::ISO_CANFD,
                can_clock_frequency: 80_000_000,
                min_arbitration_bitrate: BitTimingValue2::cia_10k(),
                max_arbitration_bitrate: BitTimingValue2::cia_1000k(),
                min_fast_data_bitrate: BitTimingValue2::canfd_1000k(),
                max_fast_data_bitrate: BitTimingValue2::canfd_8000k(),
                ..Default::default()
            },
            init: None,
            started: false,
        }
    }
}

impl LineControl for LoopbackController {
    fn raw_reset_line(&mut self) -> u32 {
        self.init = None;
        self.started = false;
        VCI_OK
    }

    fn raw_start_line(&mut self) -> u32 {
        if self.init.is_none() {
            return VCI_E_NOT_INITIALIZED;
        }
        self.started = true;
        VCI_OK
    }

    fn raw_stop_line(&mut self) -> u32 {
        self.started = false;
        VCI_OK
    }
}

impl CanFilterControl for LoopbackController {
    fn raw_set_acc_filter(&mut self, _select: u8, _code: u32, _mask: u32) -> u32 {
        VCI_OK
    }

    fn raw_add_filter_ids(&mut self, _select: u8, _code: u32, _mask: u32) -> u32 {
        VCI_OK
    }

    fn raw_rem_filter_ids(&mut self, _select: u8, _code: u32, _mask: u32) -> u32 {
        VCI_OK
    }
}

impl CanControl2 for LoopbackController {
    fn raw_init_line(&mut self, init: &NativeCanInitLine2) -> u32 {
        let sdr = BitTimingValue2::from(&init.btp_sdr);
        let fdr = BitTimingValue2::from(&init.btp_fdr);
        if !self.socket.accepts_arbitration_bitrate(&sdr)
            || !self.socket.accepts_fast_data_bitrate(&fdr)
        {
            return VCI_E_INVALID_TIMING;
        }
        self.init = Some(*init);
        VCI_OK
    }

    fn raw_line_status(&self, status: &mut NativeCanLineStatus2) -> u32 {
        if let Some(init) = self.init {
            status.op_mode = init.op_mode;
            status.ex_mode = init.ex_mode;
            status.btp_sdr = init.btp_sdr;
            status.btp_fdr = init.btp_fdr;
        }
        status.bus_load = if self.started { 3 } else { 0 };
        if !self.started {
            status.status = CtrlStatusFlags::IN_INIT.bits();
        }
        VCI_OK
    }
}

fn main() {
    env_logger::init();

    println!("{}", "=".repeat(60));
    println!("VCI4 Loopback Line");
    println!("{}", "=".repeat(60));

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> vci4::Result<()> {
    let mut ctrl = LoopbackController::new();
    println!("Controller: {:?}", ctrl.socket.controller_type);
    println!("Features: {}", ctrl.socket.features);
    println!();

    let init = CanInitLine2::new(
        OperatingModeFlags::STANDARD | OperatingModeFlags::EXTENDED | OperatingModeFlags::ERR_FRAME,
        ExtendedOperatingModeFlags::EXTENDED_DATA_LENGTH
            | ExtendedOperatingModeFlags::FAST_DATA_RATE,
        FdBitratePair::new(BitTimingValue2::canfd_500k(), BitTimingValue2::canfd_2000k()),
    )
    .with_std_filter(CanFilterMode::Pass, 2048)
    .with_ext_filter(CanFilterMode::Pass, 2048);

    ctrl.init_line(&init)?;
    ctrl.set_acc_filter(CanFilter::Std, CAN_ACC_CODE_ALL, CAN_ACC_MASK_ALL)?;
    println!("After init:  {}", ctrl.line_status()?);

    ctrl.start_line()?;
    let status = ctrl.line_status()?;
    println!("After start: {}", status);
    println!(
        "  fast data: {}, in init: {}, bus off: {}",
        status.is_fast_data_enabled(),
        status.is_in_init_mode(),
        status.is_bus_off()
    );
    println!();

    ctrl.stop_line()?;
    let too_fast = CanInitLine2::new(
        OperatingModeFlags::STANDARD,
        ExtendedOperatingModeFlags::FAST_DATA_RATE,
        FdBitratePair::new(BitTimingValue2::canfd_500k(), BitTimingValue2::canfd_10000k()),
    );
    match ctrl.init_line(&too_fast) {
        Ok(()) => println!("Unexpected: {} accepted", too_fast.bitrates),
        Err(e) => println!("Rejected {}: {} (0x{:08X})", too_fast.bitrates, e, e.code()),
    }

    ctrl.reset_line()?;
    match ctrl.start_line() {
        Ok(()) => println!("Unexpected: started without init"),
        Err(e) => println!("Start after reset: {}", e),
    }

    Ok(())
}
