//! Fake sources shared by the integration tests

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use pice::source::{CommandSource, FileSource, Subcommand};
use pice::{Error, Result};

/// Thermal zone that cycles through scripted readings; `None` fails the read
pub struct ScriptedThermal {
    readings: Vec<Option<&'static str>>,
    next: usize,
    pub closed: Arc<AtomicUsize>,
}

impl ScriptedThermal {
    pub fn new(readings: &[Option<&'static str>]) -> Self {
        Self { readings: readings.to_vec(), next: 0, closed: Arc::new(AtomicUsize::new(0)) }
    }

    pub fn fixed(reading: &'static str) -> Self {
        Self::new(&[Some(reading)])
    }
}

#[async_trait]
impl FileSource for ScriptedThermal {
    async fn read_raw(&mut self) -> Result<String> {
        let reading = self.readings[self.next % self.readings.len()];
        self.next += 1;
        reading
            .map(str::to_string)
            .ok_or_else(|| Error::Io(std::io::Error::from(std::io::ErrorKind::NotFound)))
    }

    fn close(&mut self) {
        self.closed.fetch_add(1, Ordering::SeqCst);
    }
}

/// Firmware tool answering every subcommand with a fixed line
#[derive(Clone)]
pub struct FixedFirmware {
    pub throttled: Option<&'static str>,
    pub temp: Option<&'static str>,
    pub volts: Option<&'static str>,
    pub calls: Arc<AtomicUsize>,
}

impl FixedFirmware {
    pub fn healthy() -> Self {
        Self {
            throttled: Some("throttled=0x0\n"),
            temp: Some("temp=42.0'C\n"),
            volts: Some("volt=0.8500V\n"),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn throttled() -> Self {
        Self { throttled: Some("throttled=0x50005\n"), ..Self::healthy() }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CommandSource for FixedFirmware {
    async fn read_raw(&self, subcommand: Subcommand) -> Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let reply = match subcommand {
            Subcommand::GetThrottled => self.throttled,
            Subcommand::MeasureTemp => self.temp,
            Subcommand::MeasureVolts => self.volts,
        };
        reply
            .map(str::to_string)
            .ok_or_else(|| Error::InvalidData(format!("no reply to {}", subcommand)))
    }
}

/// Firmware tool that never answers
pub struct HangingFirmware;

#[async_trait]
impl CommandSource for HangingFirmware {
    async fn read_raw(&self, _subcommand: Subcommand) -> Result<String> {
        std::future::pending().await
    }
}

/// Lines of controller output that report a sample
pub fn sample_lines(output: &str) -> Vec<&str> {
    output.lines().filter(|line| line.starts_with("CPU: ")).collect()
}
