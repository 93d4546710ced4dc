// Presentation layer for the mood shop:
// - `page`: in-memory model of the page elements the flows write to
// - `render`: view models and HTML templates, no network access
// - `session`: the emotion context shared between flows
// - `controller`: user-triggered flows wiring the API client to the page

pub mod controller;
pub mod errors;
pub mod page;
pub mod render;
pub mod session;

pub use controller::{FlowOutcome, ShopController};
pub use errors::{UiError, UiResult};
pub use page::{Element, ElementId, Page};
pub use render::Renderer;
pub use session::SessionContext;
