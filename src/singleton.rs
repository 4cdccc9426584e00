//! Singleton: the factory has exactly one chocolate boiler.
//!
//! Two boilers could each be filled while already full, so the only way to reach
//! one is [`ChocolateBoiler::get_instance`].
//!
//! Run with: cargo run --bin singleton_demo

use std::io::Write;
use std::sync::{Mutex, MutexGuard, PoisonError};

use lazy_static::lazy_static;
use tracing::debug;

use crate::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct BoilerState {
    empty: bool,
    boiled: bool,
}

impl BoilerState {
    fn fill(&mut self) -> bool {
        if !self.empty {
            return false;
        }
        self.empty = false;
        self.boiled = false;
        true
    }

    fn boil(&mut self) -> bool {
        if self.empty || self.boiled {
            return false;
        }
        self.boiled = true;
        true
    }

    fn drain(&mut self) -> bool {
        if self.empty || !self.boiled {
            return false;
        }
        self.empty = true;
        true
    }
}

#[derive(Debug)]
pub struct ChocolateBoiler {
    state: Mutex<BoilerState>,
}

lazy_static! {
    static ref UNIQUE_INSTANCE: ChocolateBoiler = {
        debug!("allocating the chocolate boiler");
        ChocolateBoiler::new()
    };
}

impl ChocolateBoiler {
    // Starts out not empty and not boiled.
    fn new() -> Self {
        Self {
            state: Mutex::new(BoilerState {
                empty: false,
                boiled: false,
            }),
        }
    }

    /// Returns the one boiler, creating it on first use.
    pub fn get_instance() -> &'static ChocolateBoiler {
        &UNIQUE_INSTANCE
    }

    fn state(&self) -> MutexGuard<'_, BoilerState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn is_empty(&self) -> bool {
        self.state().empty
    }

    pub fn is_boiled(&self) -> bool {
        self.state().boiled
    }

    /// Fills an empty boiler. Returns whether anything happened.
    pub fn fill(&self) -> bool {
        self.state().fill()
    }

    /// Boils a full, unboiled mixture. Returns whether anything happened.
    pub fn boil(&self) -> bool {
        self.state().boil()
    }

    /// Drains a full, boiled mixture. Returns whether anything happened.
    pub fn drain(&self) -> bool {
        self.state().drain()
    }
}

// =============================================================================
// Demo
// =============================================================================

fn report(boiler: &ChocolateBoiler, out: &mut dyn Write) -> Result<()> {
    writeln!(
        out,
        "Boiler state: empty = {}, boiled = {}",
        boiler.is_empty(),
        boiler.is_boiled()
    )?;
    Ok(())
}

pub fn run(out: &mut dyn Write) -> Result<()> {
    let boiler = ChocolateBoiler::get_instance();
    let again = ChocolateBoiler::get_instance();

    writeln!(out, "Same boiler instance: {}", std::ptr::eq(boiler, again))?;
    report(boiler, out)?;

    writeln!(out, "Boiling: {}", boiler.boil())?;
    writeln!(out, "Draining: {}", again.drain())?;
    writeln!(out, "Filling: {}", boiler.fill())?;
    report(again, out)?;

    Ok(())
}
