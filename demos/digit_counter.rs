#![no_std]
#![no_main]
#![cfg(not(feature = "host"))]

use core::{convert::Infallible, panic};

use digit_matrix::{
    Error, Result,
    button::{EdgeButton, PressedTo},
    debounce::ButtonId,
    display::{DigitDisplay, ws2812::Ws2812Transmitter},
    frame::PIXEL_COUNT,
    layout::BITDOGLAB_5X5,
    state::DigitDisplayState,
    status_led::StatusLed,
};
use embassy_executor::Spawner;
use embassy_rp::Peri;
use embassy_rp::peripherals::{PIN_5, PIN_6, PIN_13};
use {defmt_rtt as _, panic_probe as _};

static DIGIT_STATE: DigitDisplayState = DigitDisplayState::new();

#[embassy_executor::main]
async fn main(spawner: Spawner) -> ! {
    let err = inner_main(spawner).await.unwrap_err();
    panic!("{err}");
}

async fn inner_main(spawner: Spawner) -> Result<Infallible> {
    let p = embassy_rp::init(Default::default());

    spawner
        .spawn(button_a_task(p.PIN_5))
        .map_err(Error::TaskSpawn)?;
    spawner
        .spawn(button_b_task(p.PIN_6))
        .map_err(Error::TaskSpawn)?;
    spawner
        .spawn(status_led_task(p.PIN_13))
        .map_err(Error::TaskSpawn)?;

    let ws2812 = Ws2812Transmitter::<PIXEL_COUNT>::new(p.PIO0, p.DMA_CH0, p.PIN_7);
    let mut digit_display = DigitDisplay::new(ws2812, &BITDOGLAB_5X5);

    defmt::info!("digit_counter: showing {}", DIGIT_STATE.digit());
    DIGIT_STATE.request_render();
    digit_display.run(&DIGIT_STATE).await
}

#[embassy_executor::task]
async fn button_a_task(pin: Peri<'static, PIN_5>) -> ! {
    EdgeButton::new(pin, PressedTo::Ground)
        .watch(ButtonId::A, &DIGIT_STATE)
        .await
}

#[embassy_executor::task]
async fn button_b_task(pin: Peri<'static, PIN_6>) -> ! {
    EdgeButton::new(pin, PressedTo::Ground)
        .watch(ButtonId::B, &DIGIT_STATE)
        .await
}

#[embassy_executor::task]
async fn status_led_task(pin: Peri<'static, PIN_13>) -> ! {
    StatusLed::new(pin).blink_forever().await
}
