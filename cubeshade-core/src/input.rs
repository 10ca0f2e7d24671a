//! Keyboard input events and the angle velocities they control

/// Keys the application reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    Q,
    W,
    A,
    S,
    Z,
    X,
    Escape,
}

/// A discrete event delivered by the input backend
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    KeyDown(Key),
    KeyUp(Key),
    /// The window was closed
    Close,
}

/// Per-frame change of each controllable angle
///
/// Every field is always `-step`, `0` or `+step`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DeltaState {
    pub phi: f64,
    pub theta: f64,
    pub alpha: f64,
    pub beta: f64,
    pub gamma: f64,
}

impl DeltaState {
    /// Update the velocity the event's key controls.
    ///
    /// A key-down sets it to `±step`, a key-up resets it to zero. Escape and
    /// window close do not touch any velocity.
    pub fn apply(&mut self, event: InputEvent, step: f64) {
        let (key, pressed) = match event {
            InputEvent::KeyDown(key) => (key, true),
            InputEvent::KeyUp(key) => (key, false),
            InputEvent::Close => return,
        };

        let (slot, direction) = match key {
            Key::Up => (&mut self.theta, -1.0),
            Key::Down => (&mut self.theta, 1.0),
            Key::Right => (&mut self.phi, -1.0),
            Key::Left => (&mut self.phi, 1.0),
            Key::Q => (&mut self.alpha, 1.0),
            Key::W => (&mut self.alpha, -1.0),
            Key::A => (&mut self.beta, 1.0),
            Key::S => (&mut self.beta, -1.0),
            Key::Z => (&mut self.gamma, 1.0),
            Key::X => (&mut self.gamma, -1.0),
            Key::Escape => return,
        };

        *slot = if pressed { direction * step } else { 0.0 };
    }

    pub fn is_idle(&self) -> bool {
        *self == Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const STEP: f64 = 0.001;

    #[test]
    fn test_key_mapping() {
        let cases = [
            (Key::Up, DeltaState { theta: -STEP, ..Default::default() }),
            (Key::Down, DeltaState { theta: STEP, ..Default::default() }),
            (Key::Right, DeltaState { phi: -STEP, ..Default::default() }),
            (Key::Left, DeltaState { phi: STEP, ..Default::default() }),
            (Key::Q, DeltaState { alpha: STEP, ..Default::default() }),
            (Key::W, DeltaState { alpha: -STEP, ..Default::default() }),
            (Key::A, DeltaState { beta: STEP, ..Default::default() }),
            (Key::S, DeltaState { beta: -STEP, ..Default::default() }),
            (Key::Z, DeltaState { gamma: STEP, ..Default::default() }),
            (Key::X, DeltaState { gamma: -STEP, ..Default::default() }),
        ];

        for (key, expected) in cases {
            let mut deltas = DeltaState::default();
            deltas.apply(InputEvent::KeyDown(key), STEP);
            assert_eq!(deltas, expected, "{key:?} down");

            deltas.apply(InputEvent::KeyUp(key), STEP);
            assert!(deltas.is_idle(), "{key:?} up");
        }
    }

    #[test]
    fn test_release_of_opposite_key_zeroes_axis() {
        // Both keys of a pair drive the same velocity; releasing either stops it
        let mut deltas = DeltaState::default();
        deltas.apply(InputEvent::KeyDown(Key::Q), STEP);
        deltas.apply(InputEvent::KeyUp(Key::W), STEP);
        assert_eq!(deltas.alpha, 0.0);
    }

    #[test]
    fn test_independent_axes() {
        let mut deltas = DeltaState::default();
        deltas.apply(InputEvent::KeyDown(Key::Q), STEP);
        deltas.apply(InputEvent::KeyDown(Key::S), STEP);
        deltas.apply(InputEvent::KeyDown(Key::Up), STEP);
        deltas.apply(InputEvent::KeyUp(Key::S), STEP);

        assert_eq!(deltas.alpha, STEP);
        assert_eq!(deltas.beta, 0.0);
        assert_eq!(deltas.theta, -STEP);
    }

    #[test]
    fn test_escape_and_close_leave_deltas() {
        let mut deltas = DeltaState::default();
        deltas.apply(InputEvent::KeyDown(Key::Z), STEP);
        let before = deltas;

        deltas.apply(InputEvent::KeyDown(Key::Escape), STEP);
        deltas.apply(InputEvent::KeyUp(Key::Escape), STEP);
        deltas.apply(InputEvent::Close, STEP);
        assert_eq!(deltas, before);
    }
}
