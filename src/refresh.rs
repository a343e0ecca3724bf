use chrono::{DateTime, Local};
use std::thread;
use std::time::{Duration, Instant, SystemTime};

use crate::config::Config;
use crate::registry::ProviderRegistry;
use crate::totp::{generate, next_step_in, time_step, GetTime};
use crate::writer::OutErr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Once,
    Continuous,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Repeating,
    Completed,
}

/// Prints a block of codes for every provider, once per time step.
pub struct RefreshLoop<'a, C: GetTime> {
    registry: &'a ProviderRegistry,
    config: &'a Config,
    clock: C,
    state: LoopState,
    // Boundary after the last rendered block
    next_refresh: Option<Instant>,
}

impl<'a, C: GetTime> RefreshLoop<'a, C> {
    pub fn new(registry: &'a ProviderRegistry, config: &'a Config, clock: C) -> Self {
        RefreshLoop {
            registry,
            config,
            clock,
            state: LoopState::Repeating,
            next_refresh: None,
        }
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    /// Print blocks until the loop completes, sleeping until each step boundary.
    pub fn run<W>(mut self, writer: &mut W)
    where
        W: OutErr,
    {
        loop {
            self.tick(writer);
            if self.state() == LoopState::Completed {
                break;
            }
            self.wait();
        }
    }

    /// Render a single block from one clock reading.
    pub fn tick<W>(&mut self, writer: &mut W) -> LoopState
    where
        W: OutErr,
    {
        let now = self.clock.get_now();
        self.next_refresh = next_step_in(now, self.config.interval)
            .ok()
            .and_then(|next| Instant::now().checked_add(next));
        self.render(now, writer);
        writer.flush();

        self.state = match self.config.mode {
            Mode::Once => LoopState::Completed,
            Mode::Continuous => LoopState::Repeating,
        };
        self.state
    }

    fn render<W>(&self, now: SystemTime, writer: &mut W)
    where
        W: OutErr,
    {
        let Config {
            digits,
            interval,
            name_width,
            ..
        } = *self.config;

        let header_time = DateTime::<Local>::from(now).format(&self.config.date_format);
        match next_step_in(now, interval) {
            Ok(next) => writer.write(&format!(
                "{} - Next in {}s\n",
                header_time,
                next.as_secs_f64().ceil() as u64
            )),
            Err(_) => writer.write(&format!("{}\n", header_time)),
        }

        if let Ok(step) = time_step(now, interval) {
            tracing::debug!(step, providers = self.registry.len(), "refreshing codes");
        }

        for (name, secret) in self.registry.iter() {
            match generate(secret, now, interval, digits) {
                Ok(code) => writer.write(&format!(
                    "{:<width$.width$} {}\n",
                    name,
                    code,
                    width = name_width
                )),
                Err(err) => writer.write_err(&format!("totp: {}: {}\n", name, err)),
            }
        }
    }

    // Time left until the boundary computed from the last block's snapshot
    fn pause(&self) -> Duration {
        match self.next_refresh {
            Some(deadline) => deadline.saturating_duration_since(Instant::now()),
            None => {
                tracing::warn!("unable to schedule next refresh, waiting a full interval");
                Duration::from_secs(self.config.interval)
            }
        }
    }

    fn wait(&self) {
        thread::sleep(self.pause());
    }
}
