// src/session/mock.rs
//
// Scripted bus + timer shared by the session tests.

use crate::common::{
    address::{BusHandle, DeviceAddr},
    command::MEASUREMENT_RESPONSE_LEN,
    crc::calculate_crc8,
    frame::BusProfile,
    hal_traits::{EssBus, EssTimer},
};
use core::convert::Infallible;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) struct MockBusError;

/// One bus call as seen by the mock, stamped with the mock uptime.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) enum BusEvent {
    Write { bus: BusHandle, address: DeviceAddr, bytes: [u8; 2], at_ms: u64 },
    Read { bus: BusHandle, address: DeviceAddr, len: usize, at_ms: u64 },
}

pub(crate) struct MockInterface {
    pub now_ms: u64,
    pub configured_with: Option<(BusHandle, BusProfile)>,
    pub fail_configure: bool,
    pub fail_writes: bool,
    pub fail_reads: bool,
    pub thermal_frame: [u8; MEASUREMENT_RESPONSE_LEN],
    pub air_quality_frame: [u8; MEASUREMENT_RESPONSE_LEN],
    pub events: heapless::Vec<BusEvent, 32>,
    pub delays_ms: heapless::Vec<u32, 32>,
    pub polls: u32,
    delay_deadline_ms: Option<u64>,
}

/// Builds a six-byte response frame with valid CRCs for both words.
pub(crate) fn frame(first: u16, second: u16) -> [u8; MEASUREMENT_RESPONSE_LEN] {
    let [a0, a1] = first.to_be_bytes();
    let [b0, b1] = second.to_be_bytes();
    [a0, a1, calculate_crc8(&[a0, a1]), b0, b1, calculate_crc8(&[b0, b1])]
}

impl MockInterface {
    pub(crate) fn new() -> Self {
        MockInterface {
            now_ms: 10_000,
            configured_with: None,
            fail_configure: false,
            fail_writes: false,
            fail_reads: false,
            // 25 °C, 50 %RH
            thermal_frame: frame(0x6666, 0x8000),
            // 400 ppm CO2eq, 0 ppb TVOC
            air_quality_frame: frame(400, 0),
            events: heapless::Vec::new(),
            delays_ms: heapless::Vec::new(),
            polls: 0,
            delay_deadline_ms: None,
        }
    }

    pub(crate) fn advance_time(&mut self, ms: u64) {
        self.now_ms = self.now_ms.saturating_add(ms);
    }

    pub(crate) fn writes_to(&self, address: DeviceAddr) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, BusEvent::Write { address: a, .. } if *a == address))
            .count()
    }

    pub(crate) fn reads_from(&self, address: DeviceAddr) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, BusEvent::Read { address: a, .. } if *a == address))
            .count()
    }

    fn log(&mut self, event: BusEvent) {
        self.events.push(event).expect("mock event log full");
    }
}

impl EssTimer for MockInterface {
    fn uptime_ms(&self) -> u64 {
        self.now_ms
    }

    fn start_delay(&mut self, ms: u32) {
        self.delays_ms.push(ms).expect("mock delay log full");
        self.delay_deadline_ms = Some(self.now_ms + u64::from(ms));
    }

    // Cooperative countdown: each poll lets 5 ms of host time pass.
    fn poll_delay(&mut self) -> nb::Result<(), Infallible> {
        self.polls += 1;
        match self.delay_deadline_ms {
            Some(deadline) if self.now_ms < deadline => {
                self.advance_time(5);
                Err(nb::Error::WouldBlock)
            }
            _ => {
                self.delay_deadline_ms = None;
                Ok(())
            }
        }
    }
}

impl EssBus for MockInterface {
    type Error = MockBusError;

    fn configure(&mut self, bus: BusHandle, profile: BusProfile) -> Result<(), Self::Error> {
        if self.fail_configure {
            return Err(MockBusError);
        }
        self.configured_with = Some((bus, profile));
        Ok(())
    }

    fn write(
        &mut self,
        bus: BusHandle,
        address: DeviceAddr,
        bytes: &[u8],
    ) -> Result<(), Self::Error> {
        if self.fail_writes {
            return Err(MockBusError);
        }
        let bytes: [u8; 2] = bytes.try_into().map_err(|_| MockBusError)?;
        let at_ms = self.now_ms;
        self.log(BusEvent::Write { bus, address, bytes, at_ms });
        Ok(())
    }

    fn read(
        &mut self,
        bus: BusHandle,
        address: DeviceAddr,
        buffer: &mut [u8],
    ) -> Result<(), Self::Error> {
        if self.fail_reads {
            return Err(MockBusError);
        }
        let source = if address == DeviceAddr::THERMAL {
            self.thermal_frame
        } else {
            self.air_quality_frame
        };
        if buffer.len() != source.len() {
            return Err(MockBusError);
        }
        buffer.copy_from_slice(&source);
        let at_ms = self.now_ms;
        self.log(BusEvent::Read { bus, address, len: buffer.len(), at_ms });
        Ok(())
    }
}
