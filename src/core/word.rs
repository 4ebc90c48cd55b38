//! Encoded words and contiguous word blocks
//!
//! Callers hand the kernel words that are already encoded as integer letter
//! codes. A single word is a plain `&[LetterCode]` slice; collections of
//! words (a guess sequence, a candidate pool) travel as a [`WordBlock`], a
//! validated view over one contiguous row-major buffer.

use super::KernelError;
use rustc_hash::FxHashMap;

/// Integer identifier for one letter of the working alphabet
///
/// The kernel only ever compares codes for equality; it attaches no meaning
/// to their numeric values and assumes no particular alphabet size.
pub type LetterCode = u32;

/// A borrowed view over words stored as one contiguous row-major block
///
/// Each word occupies `word_len` consecutive slots of the code buffer. The
/// flat layout is what lets the scoring loops sweep large candidate pools as
/// plain sequential (or chunked parallel) scans, without per-word
/// indirection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordBlock<'a> {
    codes: &'a [LetterCode],
    word_len: usize,
}

impl<'a> WordBlock<'a> {
    /// Create a block view holding `codes.len() / word_len` words
    ///
    /// # Errors
    /// Returns `KernelError::ZeroWordLength` if `word_len` is zero, and
    /// `KernelError::RaggedBlock` if the code buffer is not a whole number
    /// of words.
    ///
    /// # Examples
    /// ```
    /// use litsquares::core::WordBlock;
    ///
    /// // Two 3-letter words: [0,1,2] and [2,1,0]
    /// let codes = [0, 1, 2, 2, 1, 0];
    /// let block = WordBlock::new(&codes, 3).unwrap();
    ///
    /// assert_eq!(block.len(), 2);
    /// assert_eq!(block.get(1), Some(&[2, 1, 0][..]));
    ///
    /// assert!(WordBlock::new(&codes, 4).is_err()); // 6 codes is not 4-letter words
    /// ```
    pub const fn new(codes: &'a [LetterCode], word_len: usize) -> Result<Self, KernelError> {
        if word_len == 0 {
            return Err(KernelError::ZeroWordLength);
        }
        if codes.len() % word_len != 0 {
            return Err(KernelError::RaggedBlock {
                codes: codes.len(),
                word_len,
            });
        }
        Ok(Self { codes, word_len })
    }

    /// Build a block whose invariants the caller has already established
    pub(crate) const fn from_parts(codes: &'a [LetterCode], word_len: usize) -> Self {
        debug_assert!(word_len > 0 && codes.len() % word_len == 0);
        Self { codes, word_len }
    }

    /// Number of letters per word
    #[inline]
    #[must_use]
    pub const fn word_len(&self) -> usize {
        self.word_len
    }

    /// Number of words in the block
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.codes.len() / self.word_len
    }

    /// Whether the block holds no words
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// The underlying contiguous code buffer
    #[inline]
    #[must_use]
    pub const fn codes(&self) -> &'a [LetterCode] {
        self.codes
    }

    /// The word at `index`, in block order
    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&'a [LetterCode]> {
        let start = index.checked_mul(self.word_len)?;
        let end = start.checked_add(self.word_len)?;
        self.codes.get(start..end)
    }

    /// Iterate over the words in block order
    pub fn words(&self) -> impl Iterator<Item = &'a [LetterCode]> {
        self.codes.chunks_exact(self.word_len)
    }
}

/// Count the occurrences of each letter code in `word`
///
/// Used by the feedback comparison to track how much unclaimed capacity each
/// letter of the secret has left.
#[inline]
pub(crate) fn letter_counts(word: &[LetterCode]) -> FxHashMap<LetterCode, u32> {
    let mut counts = FxHashMap::default();
    for &code in word {
        *counts.entry(code).or_insert(0) += 1;
    }
    counts
}
