//! Similarity matrix over an arbitrary finite alphabet plus the gap symbol.
//!
//! Built once from a textual specification and immutable afterwards:
//! the first line lists the alphabet letters separated by whitespace, then
//! n+1 lines of n+1 real numbers each, where row/column 0 belongs to the
//! gap symbol `-`. Example:
//!
//! ```text
//! A G T C
//! 0 -2 -2 -2 -2
//! -2 2 -1 -1 -1
//! -2 -1 2 -1 -1
//! -2 -1 -1 2 -1
//! -2 -1 -1 -1 2
//! ```

use crate::alphabet::{Alphabet, SymbolIndex, GAP};
use crate::error::{AlignError, AlignResult};

#[derive(Clone, Debug)]
pub struct SimilarityMatrix {
    alphabet: Alphabet,
    index: SymbolIndex,
    scores: Vec<f64>,
    size: usize,
}

impl SimilarityMatrix {
    /// Parses the textual matrix format above.
    ///
    /// Scores are stored exactly as given; no symmetry is assumed or
    /// checked. Lines beyond the last expected matrix row are ignored.
    pub fn from_text(text: &str) -> AlignResult<Self> {
        let mut lines = text.lines();
        let letters = parse_alphabet_line(lines.next().unwrap_or(""))?;
        let index = SymbolIndex::new(&letters)?;
        let mut alphabet = Alphabet::new(&letters);
        alphabet.insert(GAP);

        let size = letters.len() + 1;
        let mut scores = Vec::with_capacity(size * size);
        let mut rows = 0;
        for line in lines.take(size) {
            parse_matrix_row(line, rows, size, &mut scores)?;
            rows += 1;
        }
        if rows < size {
            return Err(AlignError::MissingRow {
                expected: size,
                found: rows,
            });
        }

        Ok(SimilarityMatrix {
            alphabet,
            index,
            scores,
            size,
        })
    }

    /// Similarity of two registered symbols (gap included).
    #[inline]
    pub fn similarity(&self, a: u8, b: u8) -> AlignResult<f64> {
        let i = self.rank(a)?;
        let j = self.rank(b)?;
        Ok(self.scores[i * self.size + j])
    }

    /// Validates that `seq` is a legal input sequence: every byte an
    /// upper-case letter registered in the alphabet. Purely checking, no
    /// side effects. The gap symbol is rejected (it is not a letter).
    pub fn check_sequence(&self, seq: &[u8]) -> AlignResult<()> {
        for (pos, &c) in seq.iter().enumerate() {
            if !c.is_ascii_uppercase() {
                return Err(AlignError::NotUpperLetter {
                    symbol: c as char,
                    pos,
                });
            }
            if !self.alphabet.contains(c) {
                return Err(AlignError::UnknownSymbol { symbol: c as char });
            }
        }
        Ok(())
    }

    /// Sums the per-column similarity of two equal-length aligned rows.
    ///
    /// Legality of the pair as an alignment is the caller's concern; a
    /// gap-gap column is scored like any other lookup.
    pub fn evaluate(&self, a: &[u8], b: &[u8]) -> AlignResult<f64> {
        if a.len() != b.len() {
            return Err(AlignError::LengthMismatch {
                left: a.len(),
                right: b.len(),
            });
        }
        let mut total = 0.0;
        for (&ca, &cb) in a.iter().zip(b.iter()) {
            total += self.similarity(ca, cb)?;
        }
        Ok(total)
    }

    /// Matrix dimension, gap row included.
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    #[inline]
    fn rank(&self, a: u8) -> AlignResult<usize> {
        self.index
            .rank(a)
            .ok_or(AlignError::UnknownSymbol { symbol: a as char })
    }
}

fn parse_alphabet_line(line: &str) -> AlignResult<Vec<u8>> {
    let mut letters = Vec::new();
    for token in line.split_whitespace() {
        let bytes = token.as_bytes();
        if bytes.len() != 1 || !bytes[0].is_ascii_uppercase() {
            return Err(AlignError::InvalidAlphabet {
                token: token.to_string(),
            });
        }
        letters.push(bytes[0]);
    }
    if letters.is_empty() {
        return Err(AlignError::InvalidAlphabet {
            token: line.trim().to_string(),
        });
    }
    Ok(letters)
}

fn parse_matrix_row(
    line: &str,
    row: usize,
    expected: usize,
    scores: &mut Vec<f64>,
) -> AlignResult<()> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() != expected {
        return Err(AlignError::MalformedRow {
            row,
            expected,
            found: tokens.len(),
        });
    }
    for token in tokens {
        // Fixed decimal-point format regardless of locale.
        let value = token.parse::<f64>().map_err(|source| AlignError::NumberFormat {
            row,
            token: token.to_string(),
            source,
        })?;
        scores.push(value);
    }
    Ok(())
}
