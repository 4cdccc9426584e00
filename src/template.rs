//! Template Method: a fixed beverage recipe with steps the beverages fill in.
//!
//! Run with: cargo run --bin template_demo

use std::io::{BufRead, Write};

use crate::{PatternError, Result};

/// The customisation points of the recipe.
pub trait CaffeineBeverage {
    fn brew(&self, out: &mut dyn Write) -> Result<()>;

    fn add_condiments(&self, out: &mut dyn Write) -> Result<()>;

    /// Hook deciding whether condiments go in. Defaults to yes.
    fn customer_wants_condiments(&mut self, _out: &mut dyn Write) -> Result<bool> {
        Ok(true)
    }

    fn boil_water(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Boiling water...")?;
        Ok(())
    }

    fn pour_in_cup(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Pouring in cup")?;
        Ok(())
    }
}

/// The recipe skeleton. Blanket-implemented, so no beverage can replace it.
pub trait PrepareRecipe {
    fn prepare_recipe(&mut self, out: &mut dyn Write) -> Result<()>;
}

impl<T: CaffeineBeverage + ?Sized> PrepareRecipe for T {
    fn prepare_recipe(&mut self, out: &mut dyn Write) -> Result<()> {
        self.boil_water(out)?;
        self.brew(out)?;
        self.pour_in_cup(out)?;
        if self.customer_wants_condiments(out)? {
            self.add_condiments(out)?;
        }
        writeln!(out, "Your beverage is ready!\n")?;
        Ok(())
    }
}

// =============================================================================
// Beverages
// =============================================================================

pub struct Tea;

impl CaffeineBeverage for Tea {
    fn brew(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Steeping tea bags...")?;
        Ok(())
    }

    fn add_condiments(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Adding lemon")?;
        Ok(())
    }
}

/// Coffee asks the customer about milk and sugar, reading the answer from `input`.
pub struct Coffee<R> {
    input: R,
}

impl<R: BufRead> Coffee<R> {
    pub fn new(input: R) -> Self {
        Self { input }
    }

    fn read_answer(&mut self) -> Result<String> {
        let mut answer = String::new();
        if self.input.read_line(&mut answer)? == 0 {
            return Err(PatternError::InputClosed);
        }
        Ok(answer.trim_end_matches(['\r', '\n']).to_string())
    }
}

impl<R: BufRead> CaffeineBeverage for Coffee<R> {
    fn brew(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Brewing coffee beans...")?;
        Ok(())
    }

    fn add_condiments(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Adding milk and sugar")?;
        Ok(())
    }

    fn customer_wants_condiments(&mut self, out: &mut dyn Write) -> Result<bool> {
        writeln!(out, "Would you like milk and sugar with your coffee?")?;
        out.flush()?;

        let answer = self.read_answer()?;
        Ok(answer.to_lowercase() == "yes")
    }
}

// =============================================================================
// Demo
// =============================================================================

pub fn run(out: &mut dyn Write, input: &mut dyn BufRead) -> Result<()> {
    Tea.prepare_recipe(out)?;
    Coffee::new(input).prepare_recipe(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const COFFEE_HEAD: &str = "Boiling water...\nBrewing coffee beans...\nPouring in cup\n\
                               Would you like milk and sugar with your coffee?\n";

    fn brew_coffee(answer: &str) -> Result<String> {
        let mut out = Vec::new();
        Coffee::new(answer.as_bytes()).prepare_recipe(&mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_tea_takes_condiments_by_default() {
        let mut out = Vec::new();
        Tea.prepare_recipe(&mut out).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Boiling water...\nSteeping tea bags...\nPouring in cup\nAdding lemon\nYour beverage is ready!\n\n"
        );
    }

    #[test]
    fn test_coffee_yes_in_any_case() {
        for answer in ["yes\n", "YES\n", "Yes\r\n", "yes"] {
            let text = brew_coffee(answer).unwrap();
            assert_eq!(text, format!("{COFFEE_HEAD}Adding milk and sugar\nYour beverage is ready!\n\n"));
        }
    }

    #[test]
    fn test_coffee_anything_else_skips_condiments() {
        for answer in ["no\n", "\n", " yes\n", "yes please\n"] {
            let text = brew_coffee(answer).unwrap();
            assert_eq!(text, format!("{COFFEE_HEAD}Your beverage is ready!\n\n"), "answer {answer:?}");
        }
    }

    #[test]
    fn test_closed_input_is_fatal() {
        assert!(matches!(brew_coffee(""), Err(PatternError::InputClosed)));
    }

    #[test]
    fn test_only_one_line_is_consumed() {
        let mut input: &[u8] = b"no\nleftover\n";
        let mut out = Vec::new();
        Coffee::new(&mut input).prepare_recipe(&mut out).unwrap();
        assert_eq!(input, b"leftover\n");
    }

    #[test]
    fn test_demo_output() {
        let mut out = Vec::new();
        let mut input: &[u8] = b"yes\n";
        run(&mut out, &mut input).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("Boiling water...\nSteeping tea bags...\n"));
        assert!(text.ends_with("Adding milk and sugar\nYour beverage is ready!\n\n"));
    }
}
