use crossterm::event::Event as CrossTermEvent;
use crossterm::event::KeyCode;
use crossterm::event::KeyEvent;
use crossterm::event::KeyEventKind;
use crossterm::event::KeyModifiers;
use crossterm::event::MouseButton;
use crossterm::event::MouseEvent;
use crossterm::event::MouseEventKind;
use tracing::trace;

use crate::camera::DOTS_PER_COL;
use crate::camera::DOTS_PER_ROW;
use crate::config::Config;
use crate::events::AppEvent;
use crate::events::CameraEvent;
use crate::events::EngineEvent;
use crate::events::Event;

/// Converts crossterm events into front-end events.
///
/// Dragging with the left mouse button pans the view. Crossterm reports absolute positions, so the
/// last one seen is kept around to turn them into deltas.
#[derive(Debug, Default)]
pub struct EventDecoder {
    drag_from: Option<(u16, u16)>,
}

impl EventDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn convert_event(&mut self, event: CrossTermEvent) -> Option<Event> {
        trace!(?event, "Terminal event");

        match event {
            CrossTermEvent::Key(key_event) => convert_key(key_event),
            CrossTermEvent::Mouse(mouse_event) => self.convert_mouse(mouse_event),
            CrossTermEvent::Resize(cols, rows) => Some(CameraEvent::Resize { cols, rows }.into()),
            _ => None,
        }
    }

    fn convert_mouse(&mut self, mouse_event: MouseEvent) -> Option<Event> {
        let MouseEvent {
            kind, column, row, ..
        } = mouse_event;

        match kind {
            MouseEventKind::Down(MouseButton::Left) => {
                self.drag_from = Some((column, row));

                None
            }
            MouseEventKind::Drag(MouseButton::Left) => {
                let (from_col, from_row) = self.drag_from?;
                self.drag_from = Some((column, row));

                let dcols = column as i64 - from_col as i64;
                let drows = row as i64 - from_row as i64;

                if dcols == 0 && drows == 0 {
                    return None;
                }

                // The world follows the pointer, so the view moves the other way
                let dx = -dcols * DOTS_PER_COL as i64;
                let dy = -drows * DOTS_PER_ROW as i64;

                Some(CameraEvent::Move { dx, dy }.into())
            }
            MouseEventKind::Up(MouseButton::Left) => {
                self.drag_from = None;

                None
            }
            MouseEventKind::ScrollUp => Some(CameraEvent::ZoomIn.into()),
            MouseEventKind::ScrollDown => Some(CameraEvent::ZoomOut.into()),
            _ => None,
        }
    }
}

fn convert_key(key_event: KeyEvent) -> Option<Event> {
    if key_event.kind == KeyEventKind::Release {
        return None;
    }

    let step = Config::PAN_STEP;

    let event = match key_event {
        KeyEvent {
            code: KeyCode::Char('c'),
            modifiers: KeyModifiers::CONTROL,
            ..
        }
        | KeyEvent {
            code: KeyCode::Char('q'),
            ..
        } => AppEvent::Exit.into(),

        KeyEvent {
            code: KeyCode::Char(' '),
            ..
        } => EngineEvent::TogglePause.into(),
        KeyEvent {
            code: KeyCode::Char('n'),
            ..
        } => EngineEvent::Advance(1).into(),
        KeyEvent {
            code: KeyCode::Char('c'),
            ..
        } => EngineEvent::Clear.into(),

        KeyEvent {
            code: KeyCode::Char('K'),
            ..
        } => CameraEvent::ZoomIn.into(),
        KeyEvent {
            code: KeyCode::Char('J'),
            ..
        } => CameraEvent::ZoomOut.into(),

        KeyEvent {
            code: KeyCode::Char('h') | KeyCode::Left,
            ..
        } => CameraEvent::Move { dx: -step, dy: 0 }.into(),
        KeyEvent {
            code: KeyCode::Char('j') | KeyCode::Down,
            ..
        } => CameraEvent::Move { dx: 0, dy: step }.into(),
        KeyEvent {
            code: KeyCode::Char('k') | KeyCode::Up,
            ..
        } => CameraEvent::Move { dx: 0, dy: -step }.into(),
        KeyEvent {
            code: KeyCode::Char('l') | KeyCode::Right,
            ..
        } => CameraEvent::Move { dx: step, dy: 0 }.into(),

        KeyEvent {
            code: KeyCode::Char('0'),
            ..
        } => CameraEvent::ResetView.into(),

        _ => return None,
    };

    Some(event)
}
