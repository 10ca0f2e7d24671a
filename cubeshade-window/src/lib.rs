/// Native window frontend built on minifb
use cubeshade_core::{Backend, FrameBuffer, InputEvent, Key, SceneConfig};
use minifb::{KeyRepeat, Window, WindowOptions};
use std::time::Duration;
use thiserror::Error;

/// Errors raised by the window backend.
#[derive(Debug, Error)]
pub enum WindowError {
    #[error("failed to open window: {0}")]
    Open(#[source] minifb::Error),
    #[error("failed to present frame: {0}")]
    Present(#[source] minifb::Error),
}

/// Window settings that are not part of the scene itself
#[derive(Debug, Clone, PartialEq)]
pub struct WindowConfig {
    pub title: String,
    /// Frame rate cap; `None` runs as fast as frames can be presented
    pub max_fps: Option<u32>,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Cubeshade".to_string(),
            max_fps: None,
        }
    }
}

/// `Backend` implementation drawing into a minifb window
pub struct WindowBackend {
    window: Window,
    buffer: FrameBuffer,
    title: String,
}

impl WindowBackend {
    /// Open a fixed-size window matching the scene's canvas.
    pub fn open(scene: &SceneConfig, config: &WindowConfig) -> Result<Self, WindowError> {
        let width = scene.width as usize;
        let height = scene.height as usize;

        let mut window = Window::new(
            &config.title,
            width,
            height,
            WindowOptions {
                resize: false,
                ..WindowOptions::default()
            },
        )
        .map_err(WindowError::Open)?;

        window.limit_update_rate(
            config
                .max_fps
                .filter(|&fps| fps > 0)
                .map(|fps| Duration::from_secs_f64(1.0 / fps as f64)),
        );

        tracing::info!(width, height, max_fps = ?config.max_fps, "window opened");

        Ok(Self {
            window,
            buffer: FrameBuffer::new(width, height),
            title: config.title.clone(),
        })
    }
}

impl Backend for WindowBackend {
    type Surface = FrameBuffer;
    type Error = WindowError;

    fn poll_events(&mut self) -> Vec<InputEvent> {
        collect_events(
            &self.window.get_keys_released(),
            &self.window.get_keys_pressed(KeyRepeat::No),
            self.window.is_open(),
        )
    }

    fn canvas(&mut self) -> &mut FrameBuffer {
        &mut self.buffer
    }

    fn present(&mut self) -> Result<(), WindowError> {
        self.window
            .update_with_buffer(
                self.buffer.pixels(),
                self.buffer.width(),
                self.buffer.height(),
            )
            .map_err(WindowError::Present)
    }

    fn set_title(&mut self, title: &str) {
        if self.title != title {
            self.window.set_title(title);
            self.title = title.to_string();
        }
    }
}

/// Map a minifb key to one the application reacts to.
pub fn translate_key(key: minifb::Key) -> Option<Key> {
    use minifb::Key as K;

    Some(match key {
        K::Up => Key::Up,
        K::Down => Key::Down,
        K::Left => Key::Left,
        K::Right => Key::Right,
        K::Q => Key::Q,
        K::W => Key::W,
        K::A => Key::A,
        K::S => Key::S,
        K::Z => Key::Z,
        K::X => Key::X,
        K::Escape => Key::Escape,
        _ => return None,
    })
}

/// Turn one poll's key transitions into input events.
///
/// Releases are reported before presses so that swapping between the two
/// keys of a pair within one frame leaves the new key in effect.
pub fn collect_events(
    released: &[minifb::Key],
    pressed: &[minifb::Key],
    open: bool,
) -> Vec<InputEvent> {
    let mut events: Vec<InputEvent> = released
        .iter()
        .filter_map(|&key| translate_key(key))
        .map(InputEvent::KeyUp)
        .chain(
            pressed
                .iter()
                .filter_map(|&key| translate_key(key))
                .map(InputEvent::KeyDown),
        )
        .collect();

    if !open {
        events.push(InputEvent::Close);
    }
    events
}

#[cfg(test)]
mod tests {
    use super::*;
    use cubeshade_core::{DeltaState, SimulationState};

    #[test]
    fn test_translate_key() {
        assert_eq!(translate_key(minifb::Key::Q), Some(Key::Q));
        assert_eq!(translate_key(minifb::Key::Escape), Some(Key::Escape));
        assert_eq!(translate_key(minifb::Key::Right), Some(Key::Right));
        assert_eq!(translate_key(minifb::Key::E), None);
        assert_eq!(translate_key(minifb::Key::Space), None);
    }

    #[test]
    fn test_collect_events_order() {
        let events = collect_events(&[minifb::Key::Q], &[minifb::Key::W, minifb::Key::P], true);
        assert_eq!(
            events,
            vec![InputEvent::KeyUp(Key::Q), InputEvent::KeyDown(Key::W)]
        );
    }

    #[test]
    fn test_key_swap_within_one_frame() {
        let step = SceneConfig::default().angle_step;
        let mut deltas = DeltaState::default();
        deltas.apply(InputEvent::KeyDown(Key::Q), step);

        for event in collect_events(&[minifb::Key::Q], &[minifb::Key::W], true) {
            deltas.apply(event, step);
        }
        assert_eq!(deltas.alpha, -step);
    }

    #[test]
    fn test_closed_window_emits_close() {
        let events = collect_events(&[], &[], false);
        assert_eq!(events, vec![InputEvent::Close]);

        let mut state = SimulationState::new(&SceneConfig::default());
        state.update(events);
        assert!(!state.is_running());
    }
}
