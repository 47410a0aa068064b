//! Frame driver: the single owner of [`GameState`]

use super::InputQueue;
use crate::renderer::RenderFrame;
use crate::sim::{Control, GameState, InputEvent, handle_event, tick};

/// Runs input, update and draw against one game state, in that order
#[derive(Debug)]
pub struct FrameDriver {
    state: GameState,
    input: InputQueue,
    running: bool,
}

impl FrameDriver {
    pub fn new(state: GameState) -> Self {
        Self {
            state,
            input: InputQueue::new(),
            running: true,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Number of key events waiting for the next frame
    pub fn pending_input(&self) -> usize {
        self.input.len()
    }

    /// Queue a key event for the next frame. Ignored once quit.
    pub fn push_input(&mut self, event: InputEvent) {
        if self.running {
            self.input.push(event);
        }
    }

    /// Apply every queued event in order. A quit drops whatever follows it.
    pub fn process_input(&mut self) -> Control {
        for event in self.input.drain() {
            if !self.running {
                break;
            }
            if handle_event(&mut self.state, event) == Control::Quit {
                self.running = false;
            }
        }
        if self.running {
            Control::Continue
        } else {
            Control::Quit
        }
    }

    /// Drain queued input, then advance one frame unless a quit came in
    pub fn update(&mut self) -> Control {
        let control = self.process_input();
        if control == Control::Continue {
            tick(&mut self.state);
        }
        control
    }

    /// Snapshot for the renderer
    pub fn render_frame(&self) -> RenderFrame {
        RenderFrame::capture(&self.state)
    }

    /// Restart the game from the initial stage
    pub fn reset(&mut self) {
        self.input.clear();
        self.state.reset();
        self.running = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::Key;
    use crate::sim::test_support::new_state;

    #[test]
    fn test_input_waits_for_next_frame() {
        let mut driver = FrameDriver::new(new_state());
        driver.push_input(InputEvent::KeyDown(Key::Right));
        assert_eq!(driver.pending_input(), 1);
        assert_eq!(driver.state().player().velocity.x, 0.0);

        assert_eq!(driver.update(), Control::Continue);
        assert_eq!(driver.pending_input(), 0);
        assert_eq!(driver.state().player().velocity.x, 3.0);
        assert_eq!(driver.state().time_ticks, 1);
    }

    #[test]
    fn test_queued_events_apply_in_order() {
        let mut driver = FrameDriver::new(new_state());
        driver.push_input(InputEvent::KeyDown(Key::Left));
        driver.push_input(InputEvent::KeyDown(Key::Right));
        driver.push_input(InputEvent::KeyUp(Key::Left));
        driver.update();
        assert_eq!(driver.state().player().velocity.x, 0.0);
    }

    #[test]
    fn test_quit_stops_updates() {
        let mut driver = FrameDriver::new(new_state());
        driver.update();
        assert_eq!(driver.state().time_ticks, 1);

        driver.push_input(InputEvent::KeyDown(Key::Q));
        driver.push_input(InputEvent::KeyDown(Key::Right));
        assert_eq!(driver.update(), Control::Quit);
        assert!(!driver.is_running());
        assert_eq!(driver.state().time_ticks, 1);
        assert_eq!(driver.state().player().velocity.x, 0.0);

        driver.push_input(InputEvent::KeyDown(Key::Left));
        assert_eq!(driver.pending_input(), 0);
        assert_eq!(driver.update(), Control::Quit);
        assert_eq!(driver.state().time_ticks, 1);
    }

    #[test]
    fn test_render_frame_reflects_state() {
        let mut driver = FrameDriver::new(new_state());
        driver.push_input(InputEvent::KeyDown(Key::Right));
        driver.update();
        let frame = driver.render_frame();
        assert_eq!(frame.tick, 1);
        assert_eq!(frame.sprites.len(), 4);
    }

    #[test]
    fn test_reset_restarts() {
        let mut driver = FrameDriver::new(new_state());
        driver.update();
        driver.push_input(InputEvent::KeyDown(Key::Q));
        driver.update();
        driver.reset();
        assert!(driver.is_running());
        assert_eq!(driver.state().time_ticks, 0);
        assert_eq!(driver.pending_input(), 0);
    }
}
