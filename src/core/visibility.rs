use crate::models::event::Event;
use crate::models::viewer::Viewer;

/// Keep only the events `viewer` is allowed to see.
///
/// Must run before row assignment: a hidden event would otherwise take a
/// row and push visible bars down.
pub fn filter_visible(events: Vec<Event>, viewer: &Viewer) -> Vec<Event> {
    events.into_iter().filter(|ev| viewer.can_see(ev)).collect()
}
