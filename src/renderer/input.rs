//! Keyboard state consumed by the frame loop.

/// Keys held down during one frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Keys {
    /// W: move the triangle away from the camera.
    pub forward: bool,
    /// S: move the triangle towards the camera.
    pub backward: bool,
    /// A
    pub left: bool,
    /// D
    pub right: bool,
    pub escape: bool,
}

impl Keys {
    pub const NONE: Keys = Keys {
        forward: false,
        backward: false,
        left: false,
        right: false,
        escape: false,
    };

    pub fn forward() -> Self {
        Self {
            forward: true,
            ..Self::NONE
        }
    }

    pub fn backward() -> Self {
        Self {
            backward: true,
            ..Self::NONE
        }
    }

    pub fn left() -> Self {
        Self {
            left: true,
            ..Self::NONE
        }
    }

    pub fn right() -> Self {
        Self {
            right: true,
            ..Self::NONE
        }
    }

    pub fn escape() -> Self {
        Self {
            escape: true,
            ..Self::NONE
        }
    }
}

/// Current and previous frame keys, for edge detection.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeyboardState {
    current: Keys,
    previous: Keys,
}

impl KeyboardState {
    pub fn advance(&mut self, keys: Keys) {
        self.previous = self.current;
        self.current = keys;
    }

    pub fn current(&self) -> &Keys {
        &self.current
    }

    pub fn previous(&self) -> &Keys {
        &self.previous
    }

    /// Escape is down now and was up on the previous frame.
    pub fn escape_triggered(&self) -> bool {
        !self.previous.escape && self.current.escape
    }
}
