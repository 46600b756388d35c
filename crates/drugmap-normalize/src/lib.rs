//! Pure normalization functions applied to source records.
//!
//! - [`clean_text`] produces the display copy of a free-text field.
//! - [`normalize_text`] produces the lower-cased, accent-folded key used for matching
//!   and grouping.
//! - [`parse_date`] turns the date spellings seen in source files into a [`NaiveDate`].
//! - [`format_date`] writes a date back in its canonical form.
//!
//! [`NaiveDate`]: chrono::NaiveDate

mod date;
mod error;
mod text;

pub use date::{format_date, parse_date};
pub use error::DateFormatError;
pub use text::{ENCODING_ARTIFACTS, clean_text, normalize_text};
