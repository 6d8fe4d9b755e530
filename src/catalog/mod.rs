//! Card catalog: printing keys, card ids, records.
//!
//! ## Key Types
//!
//! - `PrintingKey`: Unique key of one numbered printing
//! - `CardId`: Logical card identifier shared across printings
//! - `CardRecord`: Opaque per-printing data carrying a `card_id`
//! - `CardCatalog`: Insertion-ordered printing -> record mapping

pub mod ids;
pub mod printings;
pub mod record;

pub use ids::{CardId, PrintingKey};
pub use printings::CardCatalog;
pub use record::{CardRecord, CARD_ID_FIELD};
