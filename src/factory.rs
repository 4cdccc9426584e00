//! Factory Method: regional pizza stores decide which concrete pizza to make.
//!
//! Run with: cargo run --bin factory_demo

use std::fmt;
use std::io::Write;

use tracing::debug;

use crate::Result;

// =============================================================================
// Product
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Crust {
    Thin,
    Thick,
}

impl fmt::Display for Crust {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Crust::Thin => write!(f, "thin"),
            Crust::Thick => write!(f, "thick"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pizza {
    crust: Crust,
    kind: String,
    ingredients: Vec<String>,
}

impl Pizza {
    fn new(crust: Crust, kind: &str, ingredients: &[&str]) -> Self {
        Self {
            crust,
            kind: kind.to_string(),
            ingredients: ingredients.iter().map(|i| i.to_string()).collect(),
        }
    }

    pub fn ny_cheese() -> Self {
        Self::new(Crust::Thin, "cheese", &["cheese", "oregano"])
    }

    pub fn ny_pepperoni() -> Self {
        Self::new(Crust::Thin, "pepperoni", &["cheese", "pepperoni", "oregano"])
    }

    pub fn chicago_cheese() -> Self {
        Self::new(Crust::Thick, "cheese", &["cheese", "oil"])
    }

    pub fn chicago_pepperoni() -> Self {
        Self::new(Crust::Thick, "pepperoni", &["cheese", "pepperoni", "oil"])
    }

    pub fn crust(&self) -> Crust {
        self.crust
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn ingredients(&self) -> &[String] {
        &self.ingredients
    }

    pub fn prepare(&self, out: &mut dyn Write) -> Result<()> {
        let mut info = format!("Preparing a {} pizza with {} crust", self.kind, self.crust);
        for ingredient in &self.ingredients {
            info.push_str(" and ");
            info.push_str(ingredient);
        }
        writeln!(out, "{info}")?;
        Ok(())
    }

    pub fn bake(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Baking pizza...")?;
        Ok(())
    }

    pub fn box_up(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Boxing pizza...")?;
        Ok(())
    }
}

// =============================================================================
// Creators
// =============================================================================

pub trait PizzaStore {
    /// The factory step: pick the regional pizza for a type label.
    ///
    /// `"pepperoni"` (exact, case-sensitive) selects pepperoni; anything else is cheese.
    fn create_pizza(&self, kind: &str) -> Pizza;

    fn region(&self) -> &str;

    fn order_pizza(&self, kind: &str, out: &mut dyn Write) -> Result<Pizza> {
        let pizza = self.create_pizza(kind);
        debug!(region = self.region(), requested = kind, made = pizza.kind(), "pizza selected");

        pizza.prepare(out)?;
        pizza.bake(out)?;
        pizza.box_up(out)?;

        Ok(pizza)
    }
}

pub struct NyPizzaStore;

impl PizzaStore for NyPizzaStore {
    fn create_pizza(&self, kind: &str) -> Pizza {
        match kind {
            "pepperoni" => Pizza::ny_pepperoni(),
            _ => Pizza::ny_cheese(),
        }
    }

    fn region(&self) -> &str {
        "New York"
    }
}

pub struct ChicagoPizzaStore;

impl PizzaStore for ChicagoPizzaStore {
    fn create_pizza(&self, kind: &str) -> Pizza {
        match kind {
            "pepperoni" => Pizza::chicago_pepperoni(),
            _ => Pizza::chicago_cheese(),
        }
    }

    fn region(&self) -> &str {
        "Chicago"
    }
}

// =============================================================================
// Demo
// =============================================================================

pub fn run(out: &mut dyn Write) -> Result<()> {
    let nyc: Box<dyn PizzaStore> = Box::new(NyPizzaStore);
    let chi: Box<dyn PizzaStore> = Box::new(ChicagoPizzaStore);

    // Harvey's order
    nyc.order_pizza("pepperoni", out)?;

    // Jessica's order
    chi.order_pizza("pepperoni", out)?;

    Ok(())
}
