//! Actuation command — the outbound relay/LED toggle.
//!
//! The wire encoding (which JSON key the device expects: `relay_on`,
//! `led_on`, …) is transport configuration, not a domain concern.

/// A command to switch the actuator on or off.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActuationCommand {
    /// Desired actuator state.
    pub on: bool,
}

impl ActuationCommand {
    /// Command to switch the actuator on.
    #[must_use]
    pub fn on() -> Self {
        Self { on: true }
    }

    /// Command to switch the actuator off.
    #[must_use]
    pub fn off() -> Self {
        Self { on: false }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_build_on_and_off_commands() {
        assert!(ActuationCommand::on().on);
        assert!(!ActuationCommand::off().on);
    }
}
