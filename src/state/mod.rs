//! Application state shared by the event, networking, and UI layers.

pub mod app_state;
pub mod types;

pub use app_state::AppState;
pub use types::{
    Character, CharacterPage, CharacterStatus, FetchRequest, FetchResult, FetchState, Focus,
    Origin, PageInfo, SortKey,
};
