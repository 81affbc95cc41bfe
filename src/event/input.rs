//! Drawer input events, decoupled from crossterm.
//!
//! Only what a drawer reacts to is modeled: viewport resizes, primary clicks
//! (scrim dismissal) and a handful of keys. Crossterm events convert via
//! `From`, so hosts never match on crossterm types themselves.

// ---------------------------------------------------------------------------
// Key
// ---------------------------------------------------------------------------

/// Keyboard key, decoupled from crossterm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Char(char),
    Enter,
    Escape,
    Tab,
    /// Any key the drawer has no use for.
    Other,
}

// ---------------------------------------------------------------------------
// DrawerEvent
// ---------------------------------------------------------------------------

/// An input event relevant to a drawer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DrawerEvent {
    /// The viewport changed size.
    Resize { width: u16, height: u16 },
    /// Primary-button press at a viewport position.
    Click { x: u16, y: u16 },
    /// Key press (releases and repeats are dropped).
    Key(Key),
    /// Anything else.
    Ignored,
}

// ---------------------------------------------------------------------------
// From<crossterm> conversions
// ---------------------------------------------------------------------------

impl From<crossterm::event::KeyCode> for Key {
    fn from(code: crossterm::event::KeyCode) -> Self {
        match code {
            crossterm::event::KeyCode::Char(c) => Key::Char(c),
            crossterm::event::KeyCode::Enter => Key::Enter,
            crossterm::event::KeyCode::Esc => Key::Escape,
            crossterm::event::KeyCode::Tab => Key::Tab,
            _ => Key::Other,
        }
    }
}

impl From<crossterm::event::Event> for DrawerEvent {
    fn from(ct: crossterm::event::Event) -> Self {
        match ct {
            crossterm::event::Event::Key(ke) => {
                if ke.kind == crossterm::event::KeyEventKind::Press {
                    DrawerEvent::Key(Key::from(ke.code))
                } else {
                    DrawerEvent::Ignored
                }
            }
            crossterm::event::Event::Mouse(me) => match me.kind {
                crossterm::event::MouseEventKind::Down(crossterm::event::MouseButton::Left) => {
                    DrawerEvent::Click {
                        x: me.column,
                        y: me.row,
                    }
                }
                _ => DrawerEvent::Ignored,
            },
            crossterm::event::Event::Resize(w, h) => DrawerEvent::Resize {
                width: w,
                height: h,
            },
            _ => DrawerEvent::Ignored,
        }
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{
        Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
        MouseEventKind,
    };

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    #[test]
    fn resize_converts() {
        assert_eq!(
            DrawerEvent::from(Event::Resize(120, 40)),
            DrawerEvent::Resize {
                width: 120,
                height: 40
            }
        );
    }

    #[test]
    fn left_press_is_click() {
        assert_eq!(
            DrawerEvent::from(mouse(MouseEventKind::Down(MouseButton::Left), 7, 3)),
            DrawerEvent::Click { x: 7, y: 3 }
        );
    }

    #[test]
    fn other_mouse_events_ignored() {
        assert_eq!(
            DrawerEvent::from(mouse(MouseEventKind::Down(MouseButton::Right), 1, 1)),
            DrawerEvent::Ignored
        );
        assert_eq!(
            DrawerEvent::from(mouse(MouseEventKind::Up(MouseButton::Left), 1, 1)),
            DrawerEvent::Ignored
        );
        assert_eq!(
            DrawerEvent::from(mouse(MouseEventKind::Moved, 1, 1)),
            DrawerEvent::Ignored
        );
    }

    #[test]
    fn escape_press_converts() {
        let ev = Event::Key(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE));
        assert_eq!(DrawerEvent::from(ev), DrawerEvent::Key(Key::Escape));
    }

    #[test]
    fn key_release_ignored() {
        let mut ke = KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE);
        ke.kind = KeyEventKind::Release;
        assert_eq!(DrawerEvent::from(Event::Key(ke)), DrawerEvent::Ignored);
    }

    #[test]
    fn key_codes() {
        assert_eq!(Key::from(KeyCode::Char('m')), Key::Char('m'));
        assert_eq!(Key::from(KeyCode::Enter), Key::Enter);
        assert_eq!(Key::from(KeyCode::Tab), Key::Tab);
        assert_eq!(Key::from(KeyCode::F(5)), Key::Other);
    }

    #[test]
    fn focus_events_ignored() {
        assert_eq!(DrawerEvent::from(Event::FocusGained), DrawerEvent::Ignored);
        assert_eq!(DrawerEvent::from(Event::FocusLost), DrawerEvent::Ignored);
    }
}
