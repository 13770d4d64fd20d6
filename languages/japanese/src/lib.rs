pub mod classifier;
pub mod corpus;
pub mod frequency;
pub mod homophones;
pub mod kana;
pub mod kanjidic;
pub mod loader;
pub mod processor;
pub mod tiers;
pub mod tokenizer;
pub mod transliterator;

#[cfg(test)]
mod tests;

pub use classifier::{BatchPolicy, BatchRecord, ReadingClassifier};
pub use homophones::HomophoneIndex;
pub use kanjidic::Kanjidic;
pub use loader::KanjidicLoader;
pub use processor::KanjiProcessor;
pub use tiers::{ProficiencyTier, TierList};
pub use tokenizer::VibratoTransliterator;
pub use transliterator::{LayeredTransliterator, TableTransliterator};
