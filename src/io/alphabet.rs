// src/io/alphabet.rs
use bio::alphabets::Alphabet;

const GAPS: &[u8] = b"-.";
const DNA_IUPAC: &[u8] = b"ACGTRYSWKMBDHVNacgtryswkmbdhvn";
const RNA_IUPAC: &[u8] = b"ACGURYSWKMBDHVNacguryswkmbdhvn";
const PROTEIN: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz*_";

/// Sequence type reported in the `type` column.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeqType {
    Dna,
    Rna,
    Protein,
    Unlimit,
}

impl SeqType {
    pub fn label(self) -> &'static str {
        match self {
            SeqType::Dna => "DNA",
            SeqType::Rna => "RNA",
            SeqType::Protein => "Protein",
            SeqType::Unlimit => "Unlimit",
        }
    }

    /// Symbol set accepted for this type, gaps included. `Unlimit` accepts anything.
    pub fn alphabet(self) -> Option<Alphabet> {
        let letters = match self {
            SeqType::Dna => DNA_IUPAC,
            SeqType::Rna => RNA_IUPAC,
            SeqType::Protein => PROTEIN,
            SeqType::Unlimit => return None,
        };
        Some(Alphabet::new(letters.iter().chain(GAPS)))
    }

    /// Guess the type from the first `guess_len` bytes of a sequence
    /// (`0` means the whole sequence). Tried from the narrowest alphabet outwards.
    pub fn guess(seq: &[u8], guess_len: usize) -> SeqType {
        let prefix = if guess_len > 0 && seq.len() > guess_len {
            &seq[..guess_len]
        } else {
            seq
        };
        for candidate in [SeqType::Dna, SeqType::Rna, SeqType::Protein] {
            if let Some(alphabet) = candidate.alphabet() {
                if alphabet.is_word(prefix) {
                    return candidate;
                }
            }
        }
        SeqType::Unlimit
    }
}
