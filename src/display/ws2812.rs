//! WS2812 output through PIO0 and DMA.
//!
//! See [`Ws2812Transmitter`].

use embassy_rp::Peri;
use embassy_rp::dma::Channel;
use embassy_rp::peripherals::PIO0;
use embassy_rp::pio::{Common, Pio, PioPin};
use embassy_rp::pio_programs::ws2812::{Grb, PioWs2812, PioWs2812Program};

use crate::Result;
use crate::display::PixelTransmitter;
use crate::frame::Frame;
use crate::pio_irqs::Pio0Irqs;

/// Drives `N` WS2812 LEDs from state machine 0 of PIO0.
///
/// The PIO program owns the 800 kHz bit timing and the DMA channel feeds it, so
/// a frame goes out without the CPU touching individual bits. Colors are sent
/// in the GRB channel order WS2812 parts expect.
///
/// # Example
///
/// ```rust,no_run
/// # #![no_std]
/// # #![no_main]
/// use digit_matrix::display::ws2812::Ws2812Transmitter;
/// use digit_matrix::frame::PIXEL_COUNT;
/// # #[panic_handler]
/// # fn panic(_info: &core::panic::PanicInfo) -> ! { loop {} }
///
/// async fn example(p: embassy_rp::Peripherals) {
///     let ws2812 = Ws2812Transmitter::<PIXEL_COUNT>::new(p.PIO0, p.DMA_CH0, p.PIN_7);
/// }
/// ```
pub struct Ws2812Transmitter<'d, const N: usize> {
    // Holds the PIO's instruction memory for as long as the driver runs.
    _common: Common<'d, PIO0>,
    driver: PioWs2812<'d, PIO0, 0, N, Grb>,
}

impl<'d, const N: usize> Ws2812Transmitter<'d, N> {
    /// Loads the WS2812 program into PIO0 and binds it to `pin`.
    #[must_use]
    pub fn new(
        pio: Peri<'d, PIO0>,
        dma: Peri<'d, impl Channel>,
        pin: Peri<'d, impl PioPin>,
    ) -> Self {
        let Pio {
            mut common, sm0, ..
        } = Pio::new(pio, Pio0Irqs);
        let program = PioWs2812Program::new(&mut common);
        let driver = PioWs2812::new(&mut common, sm0, dma, pin, &program);
        Self {
            _common: common,
            driver,
        }
    }
}

impl<const N: usize> PixelTransmitter<N> for Ws2812Transmitter<'_, N> {
    async fn transmit(&mut self, frame: &Frame<N>) -> Result<()> {
        self.driver.write(&frame.0).await;
        Ok(())
    }
}
