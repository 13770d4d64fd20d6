pub mod dictionary;
pub mod error;
pub mod language;
pub mod preprocess;
pub mod types;

pub use dictionary::{Dictionary, DictionaryMetadata};
pub use error::{ClassifyError, LoadError};
pub use language::{ReadingSource, Transliterator};
pub use types::{
    Classification, Frequency, HomophoneGroup, HomophoneMember, KanjiEntry, Reading, ReadingKind,
};
