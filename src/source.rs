//! Raw-sample source adapters.
//!
//! Two [`RawSource`] implementations: the production ADC read and a
//! byte-stream decoder used when sample data arrives over a serial link
//! instead of a physical sensor. Which one the engine gets is decided
//! at construction — the engine itself is agnostic.
//!
//! ## Dual-target design
//!
//! On ESP-IDF: [`AdcSource`] owns an ADC1 oneshot unit. On host/test:
//! it reads from a static `AtomicU16` for injection.

use core::sync::atomic::AtomicU16;
#[cfg(not(target_os = "espidf"))]
use core::sync::atomic::Ordering;

use heapless::Deque;

#[cfg(target_os = "espidf")]
use esp_idf_svc::sys::*;

#[cfg(target_os = "espidf")]
use crate::error::Error;
use crate::error::Result;
use crate::ports::RawSource;

static SIM_RAW_ADC: AtomicU16 = AtomicU16::new(0);

#[cfg(not(target_os = "espidf"))]
pub fn sim_set_raw_adc(raw: u16) {
    SIM_RAW_ADC.store(raw, Ordering::Relaxed);
}

// ── ADC source ────────────────────────────────────────────────

/// Samples the TMP36 through an ADC1 oneshot channel.
pub struct AdcSource {
    #[cfg_attr(not(target_os = "espidf"), allow(dead_code))]
    channel: u32,
    #[cfg(target_os = "espidf")]
    handle: adc_oneshot_unit_handle_t,
}

impl AdcSource {
    /// Configure ADC1 for the given channel.
    ///
    /// 10-bit width to match the board's TMP36 calibration full-scale
    /// (see [`convert`](crate::convert)).
    #[cfg(target_os = "espidf")]
    pub fn new(pin: i32) -> Result<Self> {
        let init_cfg = adc_oneshot_unit_init_cfg_t {
            unit_id: adc_unit_t_ADC_UNIT_1,
            ulp_mode: adc_ulp_mode_t_ADC_ULP_MODE_DISABLE,
            ..Default::default()
        };
        let mut handle: adc_oneshot_unit_handle_t = core::ptr::null_mut();
        // SAFETY: handle is written once here and owned by this struct;
        // construction happens before the sample loop starts.
        let ret = unsafe { adc_oneshot_new_unit(&init_cfg, &mut handle) };
        if ret != ESP_OK as i32 {
            return Err(Error::Init(ret));
        }

        let chan_cfg = adc_oneshot_chan_cfg_t {
            atten: adc_atten_t_ADC_ATTEN_DB_12,
            bitwidth: adc_bitwidth_t_ADC_BITWIDTH_10,
        };
        let channel = pin as u32;
        let ret = unsafe { adc_oneshot_config_channel(handle, channel, &chan_cfg) };
        if ret != ESP_OK as i32 {
            return Err(Error::Init(ret));
        }

        Ok(Self { channel, handle })
    }

    #[cfg(not(target_os = "espidf"))]
    pub fn new(pin: i32) -> Result<Self> {
        Ok(Self {
            channel: pin as u32,
        })
    }
}

impl RawSource for AdcSource {
    #[cfg(target_os = "espidf")]
    fn read_raw(&mut self) -> u16 {
        let mut raw: i32 = 0;
        // SAFETY: handle configured in new(); single-threaded sample loop.
        let ret = unsafe { adc_oneshot_read(self.handle, self.channel, &mut raw) };
        if ret != ESP_OK as i32 {
            return 0;
        }
        raw.max(0) as u16
    }

    #[cfg(not(target_os = "espidf"))]
    fn read_raw(&mut self) -> u16 {
        SIM_RAW_ADC.load(Ordering::Relaxed)
    }
}

// ── Stream source ─────────────────────────────────────────────

/// Decodes raw samples from an externally fed byte stream.
///
/// Each sample is a 2-byte big-endian frame. One frame is consumed per
/// `read_raw()` call when at least two bytes are buffered; otherwise
/// the last decoded value is repeated (zero before any frame arrives).
#[derive(Debug, Default)]
pub struct StreamSource {
    pending: Deque<u8, 64>,
    last: u16,
}

impl StreamSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Buffer incoming bytes. Bytes beyond the 64-byte backlog are
    /// dropped; the feed is expected to pace roughly with the sample
    /// loop.
    pub fn feed(&mut self, bytes: &[u8]) {
        for &b in bytes {
            let _ = self.pending.push_back(b);
        }
    }
}

impl RawSource for StreamSource {
    fn read_raw(&mut self) -> u16 {
        if self.pending.len() >= 2 {
            let hi = self.pending.pop_front().unwrap_or(0);
            let lo = self.pending.pop_front().unwrap_or(0);
            self.last = u16::from_be_bytes([hi, lo]);
        }
        self.last
    }
}
