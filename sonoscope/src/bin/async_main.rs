#![no_std]
#![no_main]

use core::mem::MaybeUninit;
use defmt::{info, warn};
use defmt_rtt as _;
use embassy_executor::Spawner;
use embedded_hal_bus::spi::ExclusiveDevice;
use esp_backtrace as _;
use esp_hal::{
    delay::Delay,
    gpio::{Level, Output, OutputConfig},
    rng::Rng,
    spi::master::{Config as SpiConfig, Spi},
    time::Rate,
    timer::timg::TimerGroup,
};
use mipidsi::{interface::SpiInterface, models::ST7735s, Builder};
use static_cell::StaticCell;

use sono_pipeline::{DrawTargetSink, Pipeline, PipelineError};
use sonoscope::display::{draw_header, screen_test};

static SPI_CMD_BUFFER: StaticCell<[u8; 512]> = StaticCell::new();

// esp-wifi needs a heap for its internal allocations.
fn init_heap() {
    const HEAP_SIZE: usize = 72 * 1024;
    static mut HEAP: MaybeUninit<[u8; HEAP_SIZE]> = MaybeUninit::uninit();

    unsafe {
        esp_alloc::HEAP.add_region(esp_alloc::HeapRegion::new(
            HEAP.as_mut_ptr() as *mut u8,
            HEAP_SIZE,
            esp_alloc::MemoryCapability::Internal.into(),
        ));
    }
}

#[esp_hal_embassy::main]
async fn main(_spawner: Spawner) {
    info!("Init!");

    init_heap();

    let peripherals = esp_hal::init(esp_hal::Config::default());

    let timg0 = TimerGroup::new(peripherals.TIMG0);
    esp_hal_embassy::init(timg0.timer0);

    // SPI panel wiring
    let spi = Spi::new(
        peripherals.SPI2,
        SpiConfig::default()
            .with_frequency(Rate::from_mhz(26))
            .with_mode(esp_hal::spi::Mode::_0),
    )
    .unwrap()
    .with_sck(peripherals.GPIO18)
    .with_mosi(peripherals.GPIO23);

    let config_out = OutputConfig::default();
    let cs = Output::new(peripherals.GPIO5, Level::High, config_out);
    let dc = Output::new(peripherals.GPIO2, Level::Low, config_out);
    let rst = Output::new(peripherals.GPIO4, Level::Low, config_out);

    let spi_device = ExclusiveDevice::new_no_delay(spi, cs).unwrap();
    let di = SpiInterface::new(spi_device, dc, SPI_CMD_BUFFER.init([0; 512]));

    let mut delay = Delay::new();
    let mut panel = Builder::new(ST7735s, di)
        .reset_pin(rst)
        .display_size(128, 160)
        .init(&mut delay)
        .unwrap();

    screen_test(&mut panel).await.unwrap();
    draw_header(&mut panel).unwrap();

    // Wireless link: raw ESP-NOW frame delivery, no association.
    let timg1 = TimerGroup::new(peripherals.TIMG1);
    let esp_wifi_ctrl = esp_wifi::init(
        timg1.timer0,
        Rng::new(peripherals.RNG),
        peripherals.RADIO_CLK,
    )
    .unwrap();
    let mut esp_now = esp_wifi::esp_now::EspNow::new(&esp_wifi_ctrl, peripherals.WIFI).unwrap();
    info!("esp-now ready, waiting for frames");

    let mut pipeline = match Pipeline::new(DrawTargetSink::new(panel)) {
        Ok(pipeline) => pipeline,
        Err(e) => {
            // Configuration faults are fatal: never start the pipeline.
            defmt::panic!("invalid build-time geometry: {}", e);
        }
    };

    loop {
        // The sender identity is irrelevant; only the payload matters.
        let received = esp_now.receive_async().await;
        match pipeline.ingest(received.data()) {
            Ok(()) => {}
            Err(PipelineError::MalformedFrame { len }) => {
                warn!("dropped malformed frame of {} bytes", len)
            }
            Err(PipelineError::PipelineBusy) => warn!("dropped frame: pipeline busy"),
            Err(PipelineError::Flush(e)) => {
                warn!("panel flush failed: {:?}", defmt::Debug2Format(&e))
            }
        }

        let drops = pipeline.drops();
        if drops.total() != 0 && drops.total() % 64 == 0 {
            info!(
                "dropped frames: {} malformed, {} while busy",
                drops.malformed(),
                drops.busy()
            );
        }
    }
}
