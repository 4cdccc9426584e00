//! Command: actions as first-class values, loaded into a home remote.
//!
//! Run with: cargo run --bin command_demo

use std::fmt;
use std::io::Write;
use std::rc::Rc;

use tracing::debug;

use crate::Result;

// =============================================================================
// Receivers
// =============================================================================

#[derive(Debug, Default)]
pub struct Alarm;

impl Alarm {
    pub fn arm(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Alarm is armed. Please exit the building in the next minute.")?;
        Ok(())
    }

    pub fn disarm(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Alarm is disarmed.")?;
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct GarageDoor;

impl GarageDoor {
    pub fn up(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Garage door is up.")?;
        Ok(())
    }

    pub fn down(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Garage door is down.")?;
        Ok(())
    }
}

#[derive(Debug)]
pub struct Light {
    location: String,
}

impl Light {
    pub fn new(location: impl Into<String>) -> Self {
        Self {
            location: location.into(),
        }
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn on(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "The light in the {} is on.", self.location)?;
        Ok(())
    }

    pub fn off(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "The light in the {} is off.", self.location)?;
        Ok(())
    }
}

// =============================================================================
// Commands
// =============================================================================

pub trait Command {
    fn execute(&self, out: &mut dyn Write) -> Result<()>;

    fn name(&self) -> &str;
}

/// Fills unassigned remote slots; does nothing.
#[derive(Debug, Default)]
pub struct NoCommand;

impl Command for NoCommand {
    fn execute(&self, _out: &mut dyn Write) -> Result<()> {
        Ok(())
    }

    fn name(&self) -> &str {
        "no command"
    }
}

/// Declares a command that forwards `execute` to one method of a shared receiver.
macro_rules! receiver_command {
    ($(#[$meta:meta])* $command:ident, $receiver:ty, $method:ident, $label:literal) => {
        $(#[$meta])*
        pub struct $command {
            receiver: Rc<$receiver>,
        }

        impl $command {
            pub fn new(receiver: Rc<$receiver>) -> Self {
                Self { receiver }
            }
        }

        impl Command for $command {
            fn execute(&self, out: &mut dyn Write) -> Result<()> {
                self.receiver.$method(out)
            }

            fn name(&self) -> &str {
                $label
            }
        }
    };
}

receiver_command!(
    /// Arms an `Alarm`.
    AlarmArmCommand, Alarm, arm, "alarm arm"
);
receiver_command!(AlarmDisarmCommand, Alarm, disarm, "alarm disarm");
receiver_command!(
    /// Opens a `GarageDoor`.
    GarageOpenCommand, GarageDoor, up, "garage open"
);
receiver_command!(GarageCloseCommand, GarageDoor, down, "garage close");
receiver_command!(
    /// Turns a `Light` on.
    LightOnCommand, Light, on, "light on"
);
receiver_command!(LightOffCommand, Light, off, "light off");

/// Runs a fixed sequence of commands in order, stopping at the first failure.
pub struct MacroCommand {
    commands: Vec<Rc<dyn Command>>,
}

impl MacroCommand {
    pub fn new(commands: Vec<Rc<dyn Command>>) -> Self {
        Self { commands }
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl Command for MacroCommand {
    fn execute(&self, out: &mut dyn Write) -> Result<()> {
        for command in &self.commands {
            command.execute(out)?;
        }
        Ok(())
    }

    fn name(&self) -> &str {
        "macro"
    }
}

// =============================================================================
// Invoker
// =============================================================================

pub const SLOT_COUNT: usize = 4;

/// A remote with four programmable buttons. Every slot always holds a command.
pub struct RemoteControl {
    slots: [Rc<dyn Command>; SLOT_COUNT],
}

impl RemoteControl {
    pub fn new() -> Self {
        let no_command: Rc<dyn Command> = Rc::new(NoCommand);
        Self {
            slots: std::array::from_fn(|_| Rc::clone(&no_command)),
        }
    }

    /// Programs `slot`. Out-of-range slots are ignored.
    pub fn set_command(&mut self, slot: usize, command: Rc<dyn Command>) {
        match self.slots.get_mut(slot) {
            Some(entry) => *entry = command,
            None => debug!(slot, "ignoring command for out-of-range slot"),
        }
    }

    /// Executes the command in `slot`. Out-of-range slots are ignored.
    pub fn button_pushed(&self, slot: usize, out: &mut dyn Write) -> Result<()> {
        match self.slots.get(slot) {
            Some(command) => command.execute(out),
            None => {
                debug!(slot, "ignoring push of out-of-range slot");
                Ok(())
            }
        }
    }

    pub fn command_name(&self, slot: usize) -> Option<&str> {
        self.slots.get(slot).map(|command| command.name())
    }
}

impl Default for RemoteControl {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RemoteControl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "------ Remote Control ------")?;
        for (slot, command) in self.slots.iter().enumerate() {
            writeln!(f, "[slot {slot}] {}", command.name())?;
        }
        Ok(())
    }
}

// =============================================================================
// Demo
// =============================================================================

pub fn run(out: &mut dyn Write) -> Result<()> {
    // Receivers
    let garage_door = Rc::new(GarageDoor);
    let alarm = Rc::new(Alarm);
    let porch_light = Rc::new(Light::new("front porch"));

    // Commands bound to the receivers
    let garage_door_up: Rc<dyn Command> = Rc::new(GarageOpenCommand::new(garage_door));
    let alarm_arm: Rc<dyn Command> = Rc::new(AlarmArmCommand::new(alarm));
    let porch_light_on: Rc<dyn Command> = Rc::new(LightOnCommand::new(porch_light));
    let come_home: Rc<dyn Command> = Rc::new(MacroCommand::new(vec![
        Rc::clone(&garage_door_up),
        Rc::clone(&porch_light_on),
    ]));

    let mut remote = RemoteControl::new();
    remote.set_command(0, garage_door_up);
    remote.set_command(1, alarm_arm);
    remote.set_command(2, porch_light_on);
    remote.set_command(3, come_home);

    for slot in 0..SLOT_COUNT {
        remote.button_pushed(slot, out)?;
    }

    Ok(())
}
