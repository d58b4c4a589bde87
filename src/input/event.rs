/// Platform-agnostic input events.
///
/// Hosts translate their native events (DOM, winit, test scripts) into
/// these and feed them to
/// [`FloorCamEngine::handle_input`](crate::engine::FloorCamEngine::handle_input).
///
/// # Example
///
/// ```ignore
/// engine.handle_input(&InputEvent::CursorMoved { x: 100.0, y: 200.0 });
/// engine.handle_input(&InputEvent::Orientation { alpha: Some(90.0) });
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Cursor moved to absolute screen position.
    CursorMoved {
        /// Horizontal position in pixels.
        x: f32,
        /// Vertical position in pixels.
        y: f32,
    },
    /// Mouse button pressed or released.
    MouseButton {
        /// Which button changed.
        button: MouseButton,
        /// `true` for press, `false` for release.
        pressed: bool,
    },
    /// Cursor left the viewport; releases any drag in progress.
    MouseLeft,
    /// Scroll wheel, in the DOM `deltaY` convention (positive = scroll
    /// down / away from the content).
    Scroll {
        /// Vertical wheel delta.
        delta: f32,
    },
    /// Physical key pressed or released.
    Key {
        /// Key code string in `KeyboardEvent.code` / winit `KeyCode` debug
        /// format (`"KeyW"`, `"PageUp"`, ...).
        key: String,
        /// `true` for press, `false` for release.
        pressed: bool,
    },
    /// One or more fingers touched down. Carries every active touch.
    TouchStart {
        /// All touches currently on the surface.
        touches: Vec<TouchPoint>,
    },
    /// Fingers moved. Carries every active touch.
    TouchMove {
        /// All touches currently on the surface.
        touches: Vec<TouchPoint>,
    },
    /// Fingers lifted (or the touch was cancelled).
    TouchEnd {
        /// The touches that lifted.
        changed: Vec<TouchPoint>,
        /// Touches still on the surface.
        remaining: Vec<TouchPoint>,
    },
    /// Device orientation reading.
    Orientation {
        /// Compass heading in degrees, `None` when the sensor has no fix.
        alpha: Option<f32>,
    },
    /// Viewport resized.
    Resized {
        /// New width in pixels.
        width: f32,
        /// New height in pixels.
        height: f32,
    },
}

/// Platform-agnostic mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Primary (left) mouse button.
    Left,
    /// Secondary (right) mouse button.
    Right,
    /// Middle mouse button (wheel click).
    Middle,
}

/// A single touch contact.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchPoint {
    /// Identifier stable for the lifetime of the contact.
    pub id: u64,
    /// Horizontal position in pixels.
    pub x: f32,
    /// Vertical position in pixels.
    pub y: f32,
}

impl TouchPoint {
    /// Shorthand constructor.
    #[must_use]
    pub const fn new(id: u64, x: f32, y: f32) -> Self {
        Self { id, x, y }
    }
}
