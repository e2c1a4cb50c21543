// Discrete control actions and their integer codes

use crate::error::ActionError;

/// Steering direction requested by an action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Steering {
    Left,
    Right,
}

/// The seven discrete actions an agent can take each step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Noop,            // 0
    Accelerate,      // 1
    Brake,           // 2
    TurnLeft,        // 3
    TurnRight,       // 4
    AccelerateLeft,  // 5
    AccelerateRight, // 6
}

impl Action {
    pub const COUNT: usize = 7;

    pub const ALL: [Action; Action::COUNT] = [
        Action::Noop,
        Action::Accelerate,
        Action::Brake,
        Action::TurnLeft,
        Action::TurnRight,
        Action::AccelerateLeft,
        Action::AccelerateRight,
    ];

    /// Exact-match decode. Codes outside 0-6 yield `None`.
    pub fn from_code(code: i64) -> Option<Action> {
        match code {
            0 => Some(Action::Noop),
            1 => Some(Action::Accelerate),
            2 => Some(Action::Brake),
            3 => Some(Action::TurnLeft),
            4 => Some(Action::TurnRight),
            5 => Some(Action::AccelerateLeft),
            6 => Some(Action::AccelerateRight),
            _ => None,
        }
    }

    pub fn code(self) -> i64 {
        match self {
            Action::Noop => 0,
            Action::Accelerate => 1,
            Action::Brake => 2,
            Action::TurnLeft => 3,
            Action::TurnRight => 4,
            Action::AccelerateLeft => 5,
            Action::AccelerateRight => 6,
        }
    }

    pub fn accelerates(self) -> bool {
        matches!(
            self,
            Action::Accelerate | Action::AccelerateLeft | Action::AccelerateRight
        )
    }

    pub fn brakes(self) -> bool {
        self == Action::Brake
    }

    pub fn steering(self) -> Option<Steering> {
        match self {
            Action::TurnLeft | Action::AccelerateLeft => Some(Steering::Left),
            Action::TurnRight | Action::AccelerateRight => Some(Steering::Right),
            _ => None,
        }
    }
}

impl TryFrom<i64> for Action {
    type Error = ActionError;

    fn try_from(code: i64) -> Result<Self, Self::Error> {
        Action::from_code(code).ok_or(ActionError::OutOfRange(code))
    }
}

impl From<Action> for i64 {
    fn from(action: Action) -> Self {
        action.code()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_match_table() {
        for (index, action) in Action::ALL.iter().enumerate() {
            assert_eq!(action.code(), index as i64);
            assert_eq!(Action::from_code(index as i64), Some(*action));
        }
    }

    #[test]
    fn test_unknown_codes() {
        assert_eq!(Action::from_code(-1), None);
        assert_eq!(Action::from_code(7), None);
        assert_eq!(Action::try_from(42), Err(ActionError::OutOfRange(42)));
        assert_eq!(Action::try_from(3), Ok(Action::TurnLeft));
    }

    #[test]
    fn test_effects() {
        assert!(!Action::Noop.accelerates());
        assert_eq!(Action::Noop.steering(), None);
        assert!(!Action::Noop.brakes());

        assert!(Action::Accelerate.accelerates());
        assert_eq!(Action::Accelerate.steering(), None);

        assert!(Action::Brake.brakes());
        assert!(!Action::Brake.accelerates());

        assert_eq!(Action::TurnLeft.steering(), Some(Steering::Left));
        assert!(!Action::TurnLeft.accelerates());
        assert_eq!(Action::TurnRight.steering(), Some(Steering::Right));

        assert!(Action::AccelerateLeft.accelerates());
        assert_eq!(Action::AccelerateLeft.steering(), Some(Steering::Left));
        assert!(Action::AccelerateRight.accelerates());
        assert_eq!(Action::AccelerateRight.steering(), Some(Steering::Right));
    }
}
