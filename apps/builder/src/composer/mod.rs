// The document composer: a pure FormData to printable-HTML transformation.
// No I/O, no timestamps, no randomness: identical input yields identical
// bytes, which is what the golden-file tests diff against.

pub mod document;
pub mod numeric;

pub use document::compose;
pub use numeric::parse_years;
