//! Draft business logic: balancing, draft transitions, share text.

mod balance;
mod draft;
mod export;

pub use balance::{balance, serpentine_distribute, serpentine_index, shuffle_by_tier};
pub use draft::{generate_teams, return_to_edit};
pub use export::{export_text, parse_export, ExportError, ExportedPlayer, ExportedResult, EXPORT_HEADER};
