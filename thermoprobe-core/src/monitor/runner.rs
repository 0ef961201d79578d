//! Monitor implementation

use thermoprobe_protocol::{Command, CommandError, LineError, Response, ThresholdKind, HELP_LINES};

use crate::state::{IntervalUpdate, SensorReading, SensorState};
use crate::traits::{AlertSensor, Console, SensorError};

/// Sensor plus the state the loop keeps about it
///
/// The monitor is the single owner of both; every state change happens
/// inside one of its methods, on the loop's thread.
pub struct Monitor<S> {
    sensor: S,
    state: SensorState,
}

impl<S: AlertSensor> Monitor<S> {
    /// Create a monitor around an unconfigured sensor
    pub fn new(sensor: S, state: SensorState) -> Self {
        Self { sensor, state }
    }

    /// Current state
    pub fn state(&self) -> &SensorState {
        &self.state
    }

    /// Access to the underlying sensor
    pub fn sensor(&self) -> &S {
        &self.sensor
    }

    /// Current loop interval in milliseconds
    pub fn interval_ms(&self) -> u32 {
        self.state.polling.interval_ms()
    }

    /// Configure the device and push the stored thresholds to it
    ///
    /// Failures are reported and startup carries on; the loop then runs
    /// with whatever the device holds.
    pub fn start<C: Console>(&mut self, console: &mut C) {
        if let Err(e) = self.sensor.configure() {
            console.respond(&e.response());
        }

        for kind in [ThresholdKind::Overtemp, ThresholdKind::Hysteresis] {
            let value = self.state.config.threshold(kind);
            if let Err(e) = self.sensor.write_threshold(kind, i32::from(value)) {
                console.respond(&e.response());
            }
        }

        console.respond(&Response::Ready);
    }

    /// One loop iteration, without the sleep
    ///
    /// Polls if enabled, then handles at most one input line. Returns the
    /// interval to sleep before the next iteration.
    pub fn step<C: Console>(
        &mut self,
        input: Option<Result<&str, LineError>>,
        console: &mut C,
    ) -> u32 {
        if self.state.polling.enabled {
            self.poll(console);
        }

        match input {
            Some(Ok(line)) => self.handle_line(line, console),
            Some(Err(e)) => Self::reject_line(e, console),
            None => {}
        }

        self.interval_ms()
    }

    /// Read the sensor once and report
    ///
    /// On failure the previous reading is kept.
    pub fn poll<C: Console>(&mut self, console: &mut C) -> Option<SensorReading> {
        match self.sensor.read_temperature() {
            Ok(celsius) => {
                let overtemp = self.sensor.read_overtemp();
                let reading = SensorReading::new(celsius, overtemp);
                self.state.last_reading = Some(reading);
                console.respond(&Response::Reading {
                    celsius: reading.celsius,
                    fahrenheit: reading.fahrenheit,
                    overtemp: reading.overtemp,
                });
                Some(reading)
            }
            Err(e) => {
                console.respond(&e.response());
                None
            }
        }
    }

    /// Parse and apply one input line
    ///
    /// Blank lines are ignored; unknown commands are echoed back as errors
    /// and change nothing.
    pub fn handle_line<C: Console>(&mut self, line: &str, console: &mut C) {
        match Command::parse(line) {
            Ok(command) => self.apply(command, console),
            Err(CommandError::Empty) => {}
            Err(CommandError::Unknown) => {
                console.respond(&Response::UnknownCommand(line.trim()));
            }
        }
    }

    /// Apply a parsed command
    pub fn apply<C: Console>(&mut self, command: Command, console: &mut C) {
        match command {
            Command::SetThreshold(kind, value) => self.set_threshold(kind, value, console),
            Command::SetDelay(value) => match self.state.polling.set_interval(value) {
                Some(IntervalUpdate::Set(interval_ms)) => {
                    console.respond(&Response::IntervalSet { interval_ms });
                }
                Some(IntervalUpdate::Clamped(interval_ms)) => {
                    console.respond(&Response::IntervalClamped {
                        requested_ms: value,
                        interval_ms,
                    });
                }
                None => console.respond(&Response::IntervalOutOfRange { value }),
            },
            Command::GetTemp => {
                self.poll(console);
            }
            Command::Pause => {
                self.state.polling.enabled = false;
                console.respond(&Response::PollingPaused);
            }
            Command::Start => {
                self.state.polling.enabled = true;
                console.respond(&Response::PollingStarted);
            }
            Command::Help => {
                for line in HELP_LINES {
                    console.write_line(line);
                }
            }
            Command::Status => self.report_status(console),
        }
    }

    /// Report a line the assembler had to drop
    pub fn reject_line<C: Console>(error: LineError, console: &mut C) {
        let response = match error {
            LineError::Overflow => Response::LineTooLong,
            LineError::InvalidEncoding => Response::InvalidEncoding,
        };
        console.respond(&response);
    }

    fn set_threshold<C: Console>(&mut self, kind: ThresholdKind, value: i32, console: &mut C) {
        if !ThresholdKind::accepts(value) {
            console.respond(&Response::ThresholdOutOfRange { kind, value });
            return;
        }

        let park_failed = match self.sensor.write_threshold(kind, value) {
            Ok(_) => false,
            // The payload reached the device; only the switch-back failed
            Err(SensorError::PointerPark) => true,
            Err(e) => {
                console.respond(&e.response());
                return;
            }
        };

        self.state.config.set_threshold(kind, value);
        console.respond(&Response::ThresholdSet {
            kind,
            value_c: self.state.config.threshold(kind),
        });
        if park_failed {
            console.respond(&SensorError::PointerPark.response());
        }

        if !self.state.config.is_ordered() {
            console.respond(&Response::ThresholdOrder {
                hyst_c: self.state.config.hyst_threshold_c,
                os_c: self.state.config.os_threshold_c,
            });
        }
    }

    fn report_status<C: Console>(&mut self, console: &mut C) {
        let state = &self.state;
        console.respond(&Response::Status {
            enabled: state.polling.enabled,
            interval_ms: state.polling.interval_ms(),
            os_c: state.config.os_threshold_c,
            hyst_c: state.config.hyst_threshold_c,
        });

        match state.last_reading {
            Some(reading) => console.respond(&Response::Reading {
                celsius: reading.celsius,
                fahrenheit: reading.fahrenheit,
                overtemp: reading.overtemp,
            }),
            None => console.respond(&Response::NoReading),
        }

        let device = self
            .sensor
            .read_threshold(ThresholdKind::Overtemp)
            .and_then(|os_c| {
                self.sensor
                    .read_threshold(ThresholdKind::Hysteresis)
                    .map(|hyst_c| (os_c, hyst_c))
            });
        match device {
            Ok((os_c, hyst_c)) => console.respond(&Response::DeviceThresholds { os_c, hyst_c }),
            Err(e) => console.respond(&e.response()),
        }
    }
}
