//! Drawing state for a map view.

mod session;
mod view;

pub use session::DrawingSession;
pub use view::DrawingView;
