use crate::ScreenSize;

/// Everything the front-end reacts to, decoded from raw terminal input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    EngineEvent(EngineEvent),
    AppEvent(AppEvent),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineEvent {
    /// Stop or resume advancing the world every frame
    TogglePause,

    /// Advance the world state by `n`
    Advance(usize),

    /// Kill every cell
    Clear,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEvent {
    CameraEvent(CameraEvent),

    /// Exit the application
    Exit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CameraEvent {
    /// Move the view, in braille dots
    Move { dx: i64, dy: i64 },
    ZoomIn,
    ZoomOut,
    ResetView,
    Resize { cols: ScreenSize, rows: ScreenSize },
}

impl From<EngineEvent> for Event {
    fn from(e: EngineEvent) -> Self {
        Event::EngineEvent(e)
    }
}

impl From<AppEvent> for Event {
    fn from(e: AppEvent) -> Self {
        Event::AppEvent(e)
    }
}

impl From<CameraEvent> for Event {
    fn from(e: CameraEvent) -> Self {
        Event::AppEvent(AppEvent::CameraEvent(e))
    }
}
