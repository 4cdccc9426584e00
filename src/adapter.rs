//! Adapter: make a `Turkey` usable wherever a `Duck` is expected.
//!
//! Run with: cargo run --bin adapter_demo

use std::io::Write;

use crate::Result;

// =============================================================================
// Target and adaptee capability sets
// =============================================================================

pub trait Duck {
    fn quack(&self, out: &mut dyn Write) -> Result<()>;
    fn fly(&self, out: &mut dyn Write) -> Result<()>;
}

pub trait Turkey {
    fn gobble(&self, out: &mut dyn Write) -> Result<()>;
    /// A turkey only manages a short spurt per call.
    fn fly(&self, out: &mut dyn Write) -> Result<()>;
}

pub struct MallardDuck;

impl Duck for MallardDuck {
    fn quack(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Quack!")?;
        Ok(())
    }

    fn fly(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "I'm flying for 500 metres...")?;
        Ok(())
    }
}

pub struct WildTurkey;

impl Turkey for WildTurkey {
    fn gobble(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Gobble gobble")?;
        Ok(())
    }

    fn fly(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "I'm flying! (short spurt)")?;
        Ok(())
    }
}

// =============================================================================
// The adapter
// =============================================================================

/// Number of turkey spurts that cover one duck flight.
pub const SPURTS_PER_FLIGHT: usize = 5;

/// A `Duck` backed by any `Turkey`.
pub struct TurkeyAdapter<T> {
    turkey: T,
}

impl<T: Turkey> TurkeyAdapter<T> {
    pub fn new(turkey: T) -> Self {
        Self { turkey }
    }

    pub fn into_inner(self) -> T {
        self.turkey
    }
}

impl<T: Turkey> Duck for TurkeyAdapter<T> {
    fn quack(&self, out: &mut dyn Write) -> Result<()> {
        self.turkey.gobble(out)
    }

    fn fly(&self, out: &mut dyn Write) -> Result<()> {
        for _ in 0..SPURTS_PER_FLIGHT {
            self.turkey.fly(out)?;
        }
        Ok(())
    }
}

// =============================================================================
// Demo
// =============================================================================

pub fn run(out: &mut dyn Write) -> Result<()> {
    let real_duck: Box<dyn Duck> = Box::new(MallardDuck);
    let fake_duck: Box<dyn Duck> = Box::new(TurkeyAdapter::new(WildTurkey));

    // The client only ever sees the Duck interface
    real_duck.quack(out)?;
    fake_duck.quack(out)?;

    real_duck.fly(out)?;
    fake_duck.fly(out)?;

    Ok(())
}
