//! Decorator: stackable wrappers that extend a tree's decoration.
//!
//! Run with: cargo run --bin decorator_demo

use std::io::Write;

use crate::Result;

pub trait ChristmasTree {
    fn decorate(&self) -> String;
}

impl<T: ChristmasTree + ?Sized> ChristmasTree for Box<T> {
    fn decorate(&self) -> String {
        (**self).decorate()
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct PineChristmasTree;

impl ChristmasTree for PineChristmasTree {
    fn decorate(&self) -> String {
        "Pine christmas tree".to_string()
    }
}

// =============================================================================
// Decorators
// =============================================================================

/// Adds lights to the tree it wraps.
#[derive(Debug, Clone)]
pub struct TreeLights<T> {
    wrappee: T,
}

impl<T: ChristmasTree> TreeLights<T> {
    pub fn new(wrappee: T) -> Self {
        Self { wrappee }
    }
}

impl<T: ChristmasTree> ChristmasTree for TreeLights<T> {
    fn decorate(&self) -> String {
        self.wrappee.decorate() + " with lights"
    }
}

/// Puts a topper on the tree it wraps.
#[derive(Debug, Clone)]
pub struct TreeTopper<T> {
    wrappee: T,
}

impl<T: ChristmasTree> TreeTopper<T> {
    pub fn new(wrappee: T) -> Self {
        Self { wrappee }
    }
}

impl<T: ChristmasTree> ChristmasTree for TreeTopper<T> {
    fn decorate(&self) -> String {
        self.wrappee.decorate() + " with tree topper"
    }
}

/// Lets a stack be written in the order the decorations go on:
/// `PineChristmasTree.with_lights().with_topper()`.
pub trait TreeExt: ChristmasTree + Sized {
    fn with_lights(self) -> TreeLights<Self> {
        TreeLights::new(self)
    }

    fn with_topper(self) -> TreeTopper<Self> {
        TreeTopper::new(self)
    }
}

impl<T: ChristmasTree> TreeExt for T {}

// =============================================================================
// Demo
// =============================================================================

pub fn run(out: &mut dyn Write) -> Result<()> {
    let my_tree: Box<dyn ChristmasTree> = Box::new(TreeTopper::new(TreeLights::new(PineChristmasTree)));
    let your_tree: Box<dyn ChristmasTree> = Box::new(TreeTopper::new(PineChristmasTree));

    writeln!(out, "Let's decorate my tree: {}", my_tree.decorate())?;
    writeln!(out, "Let's decorate your tree: {}", your_tree.decorate())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_plain_tree() {
        assert_eq!(PineChristmasTree.decorate(), "Pine christmas tree");
    }

    #[test]
    fn test_innermost_decoration_comes_first() {
        let tree = TreeLights::new(TreeTopper::new(PineChristmasTree));
        assert_eq!(tree.decorate(), "Pine christmas tree with tree topper with lights");
    }

    #[test]
    fn test_extension_reads_in_application_order() {
        let tree = PineChristmasTree.with_lights().with_topper();
        assert_eq!(
            tree.decorate(),
            "Pine christmas tree with lights with tree topper"
        );
    }

    #[test]
    fn test_demo_output() {
        let mut out = Vec::new();
        run(&mut out).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Let's decorate my tree: Pine christmas tree with lights with tree topper\n\
             Let's decorate your tree: Pine christmas tree with tree topper\n"
        );
    }

    proptest! {
        #[test]
        fn test_suffixes_append_in_wrapping_order(layers in prop::collection::vec(any::<bool>(), 0..12)) {
            let mut tree: Box<dyn ChristmasTree> = Box::new(PineChristmasTree);
            let mut expected = String::from("Pine christmas tree");

            for lights in layers {
                if lights {
                    tree = Box::new(TreeLights::new(tree));
                    expected.push_str(" with lights");
                } else {
                    tree = Box::new(TreeTopper::new(tree));
                    expected.push_str(" with tree topper");
                }
            }

            prop_assert_eq!(tree.decorate(), expected);
        }
    }
}
