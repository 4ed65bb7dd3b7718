//! Interactive menu — the stdin/stdout front-end over [`HomeService`].
//!
//! Generic over its input and output streams so the whole loop can be
//! driven by tests. Every failed operation is reported to the error stream
//! and the loop keeps going; only option `0` and end-of-input exit.

use std::io::{self, BufRead, Write};

use casita_app::clock::ClockTick;
use casita_app::ports::DeviceStore;
use casita_app::services::HomeService;
use casita_domain::error::HomeError;

enum Flow {
    Continue,
    Exit,
}

/// Menu loop over a pair of streams plus an error stream.
pub struct Menu<R, W, E> {
    input: R,
    output: W,
    errors: E,
}

impl<R: BufRead, W: Write, E: Write> Menu<R, W, E> {
    pub fn new(input: R, output: W, errors: E) -> Self {
        Self {
            input,
            output,
            errors,
        }
    }

    /// Run until the user exits or the input reaches end-of-file.
    ///
    /// # Errors
    ///
    /// Returns an error only when one of the streams fails; operation
    /// failures are reported to the error stream instead.
    pub fn run<S: DeviceStore>(&mut self, service: &mut HomeService<S>) -> io::Result<()> {
        loop {
            self.print_menu()?;
            let Some(line) = self.read_line()? else { break };
            match self.dispatch(line.trim(), service)? {
                Flow::Exit => break,
                Flow::Continue => {}
            }
        }
        writeln!(self.output, "Exiting Smart Home System.")
    }

    fn dispatch<S: DeviceStore>(
        &mut self,
        choice: &str,
        service: &mut HomeService<S>,
    ) -> io::Result<Flow> {
        match choice {
            "0" => return Ok(Flow::Exit),
            "1" => self.toggle(service, true)?,
            "2" => self.toggle(service, false)?,
            "3" => self.show_statuses(service)?,
            "4" => self.schedule_device(service)?,
            "5" => self.simulate(service)?,
            "6" => self.save(service)?,
            "7" => self.load(service)?,
            "8" => writeln!(self.output, "Total devices: {}", service.device_count())?,
            "9" => self.inspect(service)?,
            _ => writeln!(self.output, "Invalid choice.")?,
        }
        Ok(Flow::Continue)
    }

    fn print_menu(&mut self) -> io::Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "=== Smart Home Menu ===")?;
        writeln!(self.output, "1. Turn ON device")?;
        writeln!(self.output, "2. Turn OFF device")?;
        writeln!(self.output, "3. Show device status")?;
        writeln!(self.output, "4. Schedule a device")?;
        writeln!(self.output, "5. Simulate clock")?;
        writeln!(self.output, "6. Save to file")?;
        writeln!(self.output, "7. Load from file")?;
        writeln!(self.output, "8. Device count")?;
        writeln!(self.output, "9. Inspect a device")?;
        writeln!(self.output, "0. Exit")?;
        write!(self.output, "Enter choice: ")?;
        self.output.flush()
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut buf = String::new();
        if self.input.read_line(&mut buf)? == 0 {
            return Ok(None);
        }
        Ok(Some(buf))
    }

    /// Enumerate the roster 1-based and read one selection. Out-of-range or
    /// non-numeric input reports an invalid selection and returns `None`.
    fn select_device<S: DeviceStore>(
        &mut self,
        service: &HomeService<S>,
    ) -> io::Result<Option<usize>> {
        writeln!(self.output, "Choose a device:")?;
        for (i, device) in service.roster().iter().enumerate() {
            writeln!(self.output, "{}. {}", i + 1, device.name())?;
        }
        write!(self.output, "Enter number: ")?;
        self.output.flush()?;

        let Some(line) = self.read_line()? else {
            return Ok(None);
        };
        match line.trim().parse::<usize>() {
            Ok(n) if (1..=service.roster().len()).contains(&n) => Ok(Some(n - 1)),
            _ => {
                writeln!(self.output, "Invalid selection.")?;
                Ok(None)
            }
        }
    }

    fn toggle<S: DeviceStore>(
        &mut self,
        service: &mut HomeService<S>,
        on: bool,
    ) -> io::Result<()> {
        let Some(index) = self.select_device(service)? else {
            return Ok(());
        };
        let result = if on {
            service.turn_on(index)
        } else {
            service.turn_off(index)
        };
        match result {
            Ok(line) => writeln!(self.output, "{line}."),
            Err(err) => self.report(&err),
        }
    }

    fn show_statuses<S: DeviceStore>(&mut self, service: &HomeService<S>) -> io::Result<()> {
        for line in service.status_lines() {
            writeln!(self.output, "{line}")?;
        }
        Ok(())
    }

    fn schedule_device<S: DeviceStore>(
        &mut self,
        service: &mut HomeService<S>,
    ) -> io::Result<()> {
        write!(self.output, "Enter hour (0-23): ")?;
        self.output.flush()?;
        let Some(line) = self.read_line()? else {
            return Ok(());
        };
        let hour = match line.trim().parse::<u8>() {
            Ok(hour) if hour <= 23 => hour,
            _ => return writeln!(self.output, "Invalid hour."),
        };

        let Some(index) = self.select_device(service)? else {
            return Ok(());
        };

        write!(self.output, "Turn ON or OFF? (on/off): ")?;
        self.output.flush()?;
        let Some(state) = self.read_line()? else {
            return Ok(());
        };
        let turn_on = state.trim() == "on";

        match service.schedule_device(hour, index, turn_on) {
            Ok(name) => writeln!(self.output, "Scheduled {name} at hour {hour}."),
            Err(err) => self.report(&err),
        }
    }

    fn simulate<S: DeviceStore>(&mut self, service: &mut HomeService<S>) -> io::Result<()> {
        let output = &mut self.output;
        let mut io_result = Ok(());
        service.run_clock(|tick| {
            if io_result.is_ok() {
                io_result = write_tick(&mut *output, tick);
            }
        });
        io_result
    }

    fn save<S: DeviceStore>(&mut self, service: &HomeService<S>) -> io::Result<()> {
        match service.save() {
            Ok(()) => writeln!(self.output, "Devices saved."),
            Err(err) => self.report(&err),
        }
    }

    fn load<S: DeviceStore>(&mut self, service: &mut HomeService<S>) -> io::Result<()> {
        match service.load() {
            Ok(count) => writeln!(self.output, "Loaded {count} devices."),
            Err(err) => self.report(&err),
        }
    }

    fn inspect<S: DeviceStore>(&mut self, service: &HomeService<S>) -> io::Result<()> {
        let Some(index) = self.select_device(service)? else {
            return Ok(());
        };
        match service.inspect(index) {
            Ok(snapshot) => writeln!(
                self.output,
                "{} ({}) internal status: {}",
                snapshot.name,
                snapshot.kind,
                if snapshot.is_on { "ON" } else { "OFF" }
            ),
            Err(err) => self.report(&err),
        }
    }

    /// Report a failed operation with its source chain and keep going.
    fn report(&mut self, err: &HomeError) -> io::Result<()> {
        tracing::error!(error = %err, "operation failed");
        write!(self.errors, "Error: {err}")?;
        let mut source = std::error::Error::source(err);
        while let Some(cause) = source {
            write!(self.errors, ": {cause}")?;
            source = cause.source();
        }
        writeln!(self.errors)
    }
}

fn write_tick(output: &mut impl Write, tick: &ClockTick) -> io::Result<()> {
    writeln!(output)?;
    writeln!(output, "-- Hour {} --", tick.hour)?;
    if let Some(action) = &tick.applied {
        writeln!(
            output,
            "{} is {}.",
            action.device,
            if action.turned_on { "ON" } else { "OFF" }
        )?;
    }
    Ok(())
}
