pub mod cardinal;
pub mod digit;
pub mod electronic;
pub mod fraction;
pub mod telephone;
pub mod time;
pub mod verbatim;


pub use cardinal::Cardinal;
pub use digit::Digit;
pub use electronic::Electronic;
pub use fraction::Fraction;
pub use telephone::Telephone;
pub use time::Time;
pub use verbatim::Verbatim;

/// Lookup failure inside a converter's character table.
///
/// Only `Digit` surfaces this: its table has no pass-through default, so a
/// character outside the post-filter alphabet is a contract violation by the
/// caller's classifier. The other converters degrade to emitting the input
/// (or the bare character) instead.
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    #[error("{converter}: no spoken form for character {ch:?}")]
    UnmappedChar { converter: &'static str, ch: char },
}
