use unicode_normalization::UnicodeNormalization;

pub trait Preprocessor {
    // Default JP preprocessor for single-character / single-reading input
    fn process(&self, text: &str) -> String {
        let text = text.trim();

        if text.is_empty() {
            return String::new();
        }

        // NFKC folds half-width katakana into the full-width block
        text.nfkc()
            .filter(|c| !c.is_whitespace())
            .collect()
    }
}

pub struct DefaultPreprocessor;
impl Preprocessor for DefaultPreprocessor {}
