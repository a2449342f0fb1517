use std::time::Duration;

use pice::prelude::*;

use crate::common::{sample_lines, FixedFirmware, HangingFirmware, ScriptedThermal};

fn config(interval: Duration, count: i64) -> MonitorConfig {
    MonitorConfig { interval, count, ..MonitorConfig::default() }
}

fn output(controller: Controller<Vec<u8>>) -> String {
    String::from_utf8(controller.into_inner()).unwrap()
}

#[tokio::test(start_paused = true)]
async fn test_count_stops_after_exact_ticks() {
    let firmware = FixedFirmware::healthy();
    let sampler = Sampler::new(Box::new(firmware.clone()));
    let mut monitor = Monitor::new(Box::new(ScriptedThermal::fixed("55000")));
    let mut controller = Controller::new(&config(Duration::from_secs(2), 3), Vec::new());

    let reason = controller
        .run(&mut monitor, &sampler, std::future::pending::<()>())
        .await
        .unwrap();

    assert_eq!(reason, StopReason::Completed);
    assert_eq!(controller.state(), RunState::Stopped);
    assert_eq!(monitor.counters().reads, 3);
    assert_eq!(firmware.calls(), 9);

    let out = output(controller);
    assert_eq!(sample_lines(&out), vec!["CPU: +55.0°C \tGPU: +42.0°C \tVcore: 0.8500V"; 3]);
    assert!(out.contains("\n\n\x1b[1m Summary"));
    assert!(out.ends_with("Throttles: 0\n  Samples: 3\n\n"));
}

#[tokio::test(start_paused = true)]
async fn test_count_zero_takes_one_sample() {
    let sampler = Sampler::new(Box::new(FixedFirmware::healthy()));
    let mut monitor = Monitor::new(Box::new(ScriptedThermal::fixed("55000")));
    let mut controller = Controller::new(&config(Duration::from_secs(2), 0), Vec::new());

    let reason = controller
        .run(&mut monitor, &sampler, std::future::pending::<()>())
        .await
        .unwrap();

    assert_eq!(reason, StopReason::Completed);
    assert_eq!(monitor.counters().reads, 1);
}

#[tokio::test(start_paused = true)]
async fn test_incomplete_sample_prints_nothing() {
    let sampler = Sampler::new(Box::new(FixedFirmware { volts: None, ..FixedFirmware::healthy() }));
    let mut monitor = Monitor::new(Box::new(ScriptedThermal::fixed("55000")));
    let mut controller = Controller::new(&config(Duration::ZERO, 2), Vec::new());

    controller
        .run(&mut monitor, &sampler, std::future::pending::<()>())
        .await
        .unwrap();

    assert_eq!(monitor.counters().reads, 2);
    let out = output(controller);
    assert!(sample_lines(&out).is_empty());
    assert!(out.contains("PKG ( V)     n/a     n/a\n"));
    assert!(out.contains("  Samples: 2\n"));
}

#[tokio::test(start_paused = true)]
async fn test_throttled_samples() {
    let sampler = Sampler::new(Box::new(FixedFirmware::throttled()));
    let mut monitor = Monitor::new(Box::new(ScriptedThermal::fixed("81000")));
    let mut controller = Controller::new(&config(Duration::from_millis(100), 2), Vec::new());

    controller
        .run(&mut monitor, &sampler, std::future::pending::<()>())
        .await
        .unwrap();

    let out = output(controller);
    assert_eq!(
        sample_lines(&out),
        vec!["CPU: +81.0°C \tGPU: +42.0°C \tVcore: 0.8500V \tThrottled: True"; 2]
    );
    assert!(out.contains("Throttles: 2\n"));
}

#[tokio::test(start_paused = true)]
async fn test_interrupt_during_sleep() {
    let firmware = FixedFirmware::healthy();
    let sampler = Sampler::new(Box::new(firmware.clone()));
    let mut monitor = Monitor::new(Box::new(ScriptedThermal::fixed("55000")));
    let mut controller = Controller::new(&config(Duration::from_secs(60), -1), Vec::new());

    let reason = controller
        .run(&mut monitor, &sampler, tokio::time::sleep(Duration::from_secs(90)))
        .await
        .unwrap();

    assert_eq!(reason, StopReason::Interrupted);
    assert_eq!(controller.state(), RunState::Stopped);
    assert_eq!(monitor.counters().reads, 2);
    assert_eq!(firmware.calls(), 6);

    let out = output(controller);
    assert_eq!(sample_lines(&out).len(), 2);
    assert!(out.contains("  Samples: 2\n"));
}

#[tokio::test(start_paused = true)]
async fn test_interrupt_during_sample_discards_tick() {
    let sampler = Sampler::new(Box::new(HangingFirmware));
    let mut monitor = Monitor::new(Box::new(ScriptedThermal::fixed("55000")));
    let mut controller = Controller::new(&config(Duration::from_secs(2), -1), Vec::new());

    let reason = controller
        .run(&mut monitor, &sampler, tokio::time::sleep(Duration::from_secs(1)))
        .await
        .unwrap();

    assert_eq!(reason, StopReason::Interrupted);
    assert_eq!(monitor.counters().reads, 0);

    let out = output(controller);
    assert!(out.contains("CPU (°C)     n/a     n/a\n"));
    assert!(out.ends_with("Throttles: 0\n  Samples: 0\n\n"));
}

#[tokio::test(start_paused = true)]
async fn test_pending_interrupt_skips_sampling() {
    let firmware = FixedFirmware::healthy();
    let sampler = Sampler::new(Box::new(firmware.clone()));
    let mut monitor = Monitor::new(Box::new(ScriptedThermal::fixed("55000")));
    let mut controller = Controller::new(&config(Duration::from_secs(2), 5), Vec::new());

    let reason = controller
        .run(&mut monitor, &sampler, std::future::ready(()))
        .await
        .unwrap();

    assert_eq!(reason, StopReason::Interrupted);
    assert_eq!(firmware.calls(), 0);
    assert_eq!(monitor.counters().reads, 0);
}

#[tokio::test(start_paused = true)]
async fn test_stopped_controller_does_not_resume() {
    let firmware = FixedFirmware::healthy();
    let sampler = Sampler::new(Box::new(firmware.clone()));
    let mut monitor = Monitor::new(Box::new(ScriptedThermal::fixed("55000")));
    let mut controller = Controller::new(&config(Duration::ZERO, 1), Vec::new());

    let first = controller
        .run(&mut monitor, &sampler, std::future::pending::<()>())
        .await
        .unwrap();
    let second = controller
        .run(&mut monitor, &sampler, std::future::pending::<()>())
        .await
        .unwrap();

    assert_eq!(first, StopReason::Completed);
    assert_eq!(second, StopReason::Completed);
    assert_eq!(monitor.counters().reads, 1);
    assert_eq!(firmware.calls(), 3);
}
