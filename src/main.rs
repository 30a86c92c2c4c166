//! Thermgrad firmware — main entry point.
//!
//! Periodic sample loop: one engine tick per interval, logging the
//! converted temperature and, once the delta window has filled, the
//! smoothed gradient.

#![deny(unused_must_use)]

use anyhow::Result;
use esp_idf_hal::delay::FreeRtos;
use log::info;

use thermgrad::config::EngineConfig;
use thermgrad::engine::GradientEngine;
use thermgrad::sink::LogSink;
use thermgrad::source::AdcSource;

fn main() -> Result<()> {
    // ── ESP-IDF bootstrap ─────────────────────────────────────
    esp_idf_svc::sys::link_patches();
    esp_idf_logger::init()?;

    info!("thermgrad v{}", env!("CARGO_PKG_VERSION"));

    let config = EngineConfig::default();
    let source = AdcSource::new(config.pin).map_err(|e| anyhow::anyhow!("{e}"))?;
    let mut engine =
        GradientEngine::new(&config, source).map_err(|e| anyhow::anyhow!("{e}"))?;
    let mut sink = LogSink::new();

    info!(
        "sampling every {} ms, window = {}",
        config.sample_interval_ms, config.window
    );

    let mut ticks: u32 = 0;
    loop {
        let sample = engine.update();
        match sample.gradient {
            Some(grad) => info!(
                "T = {:.1} F | grad = {:+.3} F/tick (raw={})",
                sample.fahrenheit, grad, sample.raw
            ),
            None => info!(
                "T = {:.1} F | grad = -- (window filling, raw={})",
                sample.fahrenheit, sample.raw
            ),
        }

        // Periodic state report for bring-up debugging.
        ticks = ticks.wrapping_add(1);
        if ticks % 60 == 0 {
            engine.dump(&mut sink);
        }

        FreeRtos::delay_ms(config.sample_interval_ms);
    }
}
