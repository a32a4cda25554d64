//! Rangelink - Serial Distance Receiver Firmware
//!
//! Main firmware binary for RP2040 boards wired to a ranging sensor.
//! Reads one decimal reading per line from UART0 and answers each with a
//! `Distance: N cm` line on the same UART.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::bind_interrupts;
use embassy_rp::peripherals::UART0;
use embassy_rp::uart::{BufferedInterruptHandler, Uart};
use embassy_time::Timer;
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use rangelink_core::{Receiver, ReceiverConfig};
use rangelink_hal_rp2040::uart::{to_embassy_config, SerialPort};

bind_interrupts!(struct Irqs {
    UART0_IRQ => BufferedInterruptHandler<UART0>;
});

// Static cells for UART buffers (must live forever)
static TX_BUF: StaticCell<[u8; 64]> = StaticCell::new();
static RX_BUF: StaticCell<[u8; 256]> = StaticCell::new();

/// Main entry point
#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    info!("Rangelink firmware starting...");

    // Initialize RP2040 peripherals
    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    let config = ReceiverConfig::default();

    // Setup UART0 for the sensor link (GPIO0 = TX, GPIO1 = RX)
    let tx_buf = TX_BUF.init([0u8; 64]);
    let rx_buf = RX_BUF.init([0u8; 256]);

    let uart = Uart::new_blocking(p.UART0, p.PIN_0, p.PIN_1, to_embassy_config(&config.uart));
    let uart = uart.into_buffered(Irqs, tx_buf, rx_buf);

    info!("UART initialized at {} baud", config.uart.baudrate);

    let mut receiver = Receiver::new(SerialPort::new(uart), config);

    match receiver.start() {
        Ok(()) => info!("Banner sent"),
        Err(e) => warn!("Failed to send banner: {:?}", e),
    }

    let mut last_dropped = 0;

    loop {
        match receiver.poll() {
            Ok(0) => {}
            Ok(n) => debug!("{} report(s) sent", n),
            Err(e) => warn!("UART error: {:?}", e),
        }

        let stats = receiver.stats();
        if stats.dropped_bytes != last_dropped {
            warn!(
                "Line buffer overflow: {} byte(s) dropped so far",
                stats.dropped_bytes
            );
            last_dropped = stats.dropped_bytes;
        }

        // Idle wait between drain passes
        Timer::after_millis(config.poll_interval_ms.into()).await;
    }
}
