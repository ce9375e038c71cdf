// Keyboard event handling
//
// This module contains the keyboard event handler that processes
// user input and updates the application state accordingly.

use super::{AppState, Section};
use crossterm::event::KeyCode;

/// Handle keyboard events and update application state
///
/// Returns `true` if the application should continue running,
/// `false` if it should exit.
///
/// # Key Bindings
/// - `q`, `Q` - Quit the application
/// - `Esc` - Close the journey detail, or quit when none is open
/// - `Tab` / `Shift+Tab`, `1`-`5` - Switch section
/// - `Left` / `Right` - Scroll the carousel, or change project tab
/// - `[` / `]` - Previous / next project image
/// - `<` / `>` - Scroll the project tab strip
/// - `Up` / `Down` - Scroll the section vertically
/// - `Enter` - Open or close the journey detail
/// - `a`, `A` - Toggle background animation
/// - `r`, `R` - Regenerate the background
/// - `+`, `=` - Faster frames (shorter interval)
/// - `-`, `_` - Slower frames (longer interval)
pub fn handle_key_event(app: &mut AppState, key: KeyCode) -> bool {
    match key {
        KeyCode::Char('q') | KeyCode::Char('Q') => {
            app.running = false;
            false
        }
        KeyCode::Esc => {
            if !app.close_modal() {
                app.running = false;
            }
            app.running
        }
        KeyCode::Tab => {
            app.next_section();
            true
        }
        KeyCode::BackTab => {
            app.previous_section();
            true
        }
        KeyCode::Char(c @ '1'..='5') => {
            let index = c as usize - '1' as usize;
            if let Some(section) = Section::from_index(index) {
                app.select_section(section);
            }
            true
        }
        KeyCode::Left => {
            app.move_left();
            true
        }
        KeyCode::Right => {
            app.move_right();
            true
        }
        KeyCode::Char('[') => {
            app.change_image(-1);
            true
        }
        KeyCode::Char(']') => {
            app.change_image(1);
            true
        }
        KeyCode::Char('<') => {
            app.scroll_project_tabs(false);
            true
        }
        KeyCode::Char('>') => {
            app.scroll_project_tabs(true);
            true
        }
        KeyCode::Up => {
            app.scroll_up();
            true
        }
        KeyCode::Down => {
            app.scroll_down();
            true
        }
        KeyCode::Enter => {
            app.activate();
            true
        }
        KeyCode::Char('a') | KeyCode::Char('A') => {
            app.toggle_animations();
            true
        }
        KeyCode::Char('r') | KeyCode::Char('R') => {
            app.reinitialize_background();
            true
        }
        KeyCode::Char('+') | KeyCode::Char('=') => {
            app.faster_frames();
            true
        }
        KeyCode::Char('-') | KeyCode::Char('_') => {
            app.slower_frames();
            true
        }
        _ => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::tests::test_app;
    use crate::sim::scheduler::LoopState;

    #[test]
    fn test_quit_keys() {
        let mut app = test_app();

        assert!(app.running);
        let result = handle_key_event(&mut app, KeyCode::Char('q'));
        assert!(!result);
        assert!(!app.running);

        app.running = true;
        let result = handle_key_event(&mut app, KeyCode::Char('Q'));
        assert!(!result);
        assert!(!app.running);

        // Esc quits when no modal is open
        app.running = true;
        let result = handle_key_event(&mut app, KeyCode::Esc);
        assert!(!result);
        assert!(!app.running);
    }

    #[test]
    fn test_esc_closes_modal_first() {
        let mut app = test_app();
        handle_key_event(&mut app, KeyCode::Char('2'));
        handle_key_event(&mut app, KeyCode::Enter);
        assert!(app.journey_modal.is_some());

        assert!(handle_key_event(&mut app, KeyCode::Esc));
        assert!(app.journey_modal.is_none());
        assert!(app.running);
    }

    #[test]
    fn test_section_keys() {
        let mut app = test_app();
        handle_key_event(&mut app, KeyCode::Char('3'));
        assert_eq!(app.section, Section::Projects);
        handle_key_event(&mut app, KeyCode::Tab);
        assert_eq!(app.section, Section::Toolkit);
        handle_key_event(&mut app, KeyCode::BackTab);
        handle_key_event(&mut app, KeyCode::BackTab);
        assert_eq!(app.section, Section::Journey);
        handle_key_event(&mut app, KeyCode::Char('5'));
        assert_eq!(app.section, Section::Certifications);
        // Out of range digits are ignored
        handle_key_event(&mut app, KeyCode::Char('9'));
        assert_eq!(app.section, Section::Certifications);
    }

    #[test]
    fn test_arrows_scroll_carousel() {
        let mut app = test_app();
        handle_key_event(&mut app, KeyCode::Char('5'));
        app.certifications.set_viewport(40);
        handle_key_event(&mut app, KeyCode::Right);
        assert_eq!(app.certifications.offset(), 32);
        handle_key_event(&mut app, KeyCode::Left);
        assert_eq!(app.certifications.offset(), 0);
    }

    #[test]
    fn test_image_keys() {
        let mut app = test_app();
        handle_key_event(&mut app, KeyCode::Char('3'));
        handle_key_event(&mut app, KeyCode::Char(']'));
        assert_eq!(app.project_images.current(), 1);
        handle_key_event(&mut app, KeyCode::Char('['));
        handle_key_event(&mut app, KeyCode::Char('['));
        assert_eq!(app.project_images.current(), 2);
    }

    #[test]
    fn test_toggle_animations() {
        let mut app = test_app();

        assert!(app.background_settings.animations_enabled);

        handle_key_event(&mut app, KeyCode::Char('a'));
        assert!(!app.background_settings.animations_enabled);
        assert_eq!(app.background.as_ref().unwrap().state(), LoopState::Paused);

        handle_key_event(&mut app, KeyCode::Char('A'));
        assert!(app.background_settings.animations_enabled);
        assert_eq!(app.background.as_ref().unwrap().state(), LoopState::Running);
    }

    #[test]
    fn test_frame_rate_controls() {
        let mut app = test_app();
        let initial = app.frame_config.frame_ms;

        handle_key_event(&mut app, KeyCode::Char('+'));
        assert!(app.frame_config.frame_ms < initial);

        handle_key_event(&mut app, KeyCode::Char('-'));
        assert_eq!(app.frame_config.frame_ms, initial);
    }

    #[test]
    fn test_regenerate_key() {
        let mut app = test_app();
        app.on_resize(50, 20);
        handle_key_event(&mut app, KeyCode::Char('r'));
        // 50 columns * 8 units / 5 units per point
        assert_eq!(
            app.background.as_ref().unwrap().simulation().points().len(),
            80
        );
    }
}
