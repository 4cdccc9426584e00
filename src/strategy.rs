//! Strategy: the way a person travels is plugged into a context at runtime.
//!
//! Run with: cargo run --bin strategy_demo

use std::io::Write;

use tracing::debug;

use crate::{PatternError, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    name: String,
    location: String,
}

impl Person {
    pub fn new(name: impl Into<String>, location: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            location: location.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn set_location(&mut self, location: impl Into<String>) {
        self.location = location.into();
    }
}

pub trait TravelStrategy {
    /// Moves `person` to `location` and reports the trip.
    fn travel(&self, person: &mut Person, location: &str, out: &mut dyn Write) -> Result<()>;

    fn mode(&self) -> &str;
}

pub struct CarStrategy;

impl TravelStrategy for CarStrategy {
    fn travel(&self, person: &mut Person, location: &str, out: &mut dyn Write) -> Result<()> {
        person.set_location(location);
        writeln!(out, "{} has travelled by car to {}", person.name(), person.location())?;
        Ok(())
    }

    fn mode(&self) -> &str {
        "car"
    }
}

pub struct BusStrategy;

impl TravelStrategy for BusStrategy {
    // Bus trips are followed by a blank line.
    fn travel(&self, person: &mut Person, location: &str, out: &mut dyn Write) -> Result<()> {
        person.set_location(location);
        writeln!(out, "{} has travelled by bus to {}\n", person.name(), person.location())?;
        Ok(())
    }

    fn mode(&self) -> &str {
        "bus"
    }
}

#[derive(Default)]
pub struct TravelContext {
    strategy: Option<Box<dyn TravelStrategy>>,
}

impl TravelContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_strategy(&mut self, strategy: Box<dyn TravelStrategy>) {
        debug!(mode = strategy.mode(), "travel strategy replaced");
        self.strategy = Some(strategy);
    }

    pub fn take_trip(&self, person: &mut Person, location: &str, out: &mut dyn Write) -> Result<()> {
        let strategy = self.strategy.as_ref().ok_or(PatternError::MissingStrategy)?;
        strategy.travel(person, location, out)
    }
}

// =============================================================================
// Demo
// =============================================================================

pub fn run(out: &mut dyn Write) -> Result<()> {
    let mut bob = Person::new("Bob", "120 Street 1");
    let mut rob = Person::new("Rob", "130 Street 2");
    let mut context = TravelContext::new();

    context.set_strategy(Box::new(CarStrategy));

    context.take_trip(&mut bob, "terminal 1", out)?;
    context.take_trip(&mut rob, "terminal 2", out)?;

    // A bus strategy is built but never handed to the context, so the car stays in effect
    let _use_bus = BusStrategy;

    context.take_trip(&mut bob, "hilton hotel", out)?;
    context.take_trip(&mut rob, "fairmont hotel", out)?;

    Ok(())
}
