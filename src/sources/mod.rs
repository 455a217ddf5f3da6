//! Adapters turning raw pairing lists into [`PairingInput`](crate::model::PairingInput)s.
//!
//! Every adapter yields one `Result` per source item so that a single unreadable row is
//! recorded by the importer instead of aborting the whole batch.

pub mod catalog;
pub mod csv;
pub mod html;
pub mod scraped;

pub use catalog::{catalog_inputs, standard_sides};
pub use self::csv::{read_csv, read_csv_path};
pub use html::{extract_side_dishes, HtmlSides};
pub use scraped::{extract_sides_from_markdown, parse_scraped, DEFAULT_MIN_SIDES};
