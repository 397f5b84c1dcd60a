/// One FASTA or FASTQ entry.
///
/// Fields are raw bytes; no alphabet or quality encoding is checked.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    /// Identifier up to the first whitespace of the header line.
    pub name: Vec<u8>,
    /// Rest of the header line, empty when absent.
    pub comment: Vec<u8>,
    /// All sequence lines joined.
    pub seq: Vec<u8>,
    /// All quality lines joined, empty for FASTA.
    pub qual: Vec<u8>,
}

impl Record {
    /// Creates a record from its four fields.
    pub fn new(
        name: impl Into<Vec<u8>>,
        comment: impl Into<Vec<u8>>,
        seq: impl Into<Vec<u8>>,
        qual: impl Into<Vec<u8>>,
    ) -> Self {
        Self {
            name: name.into(),
            comment: comment.into(),
            seq: seq.into(),
            qual: qual.into(),
        }
    }

    /// Empties every field, keeping allocations.
    pub fn clear(&mut self) {
        self.name.clear();
        self.comment.clear();
        self.seq.clear();
        self.qual.clear();
    }

    /// True when the record carries a quality string.
    pub fn is_fastq(&self) -> bool {
        !self.qual.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clear_keeps_capacity() {
        let mut rec = Record::new("r1", "desc", "ACGT", "IIII");
        let cap = rec.seq.capacity();
        rec.clear();

        assert_eq!(rec, Record::default());
        assert_eq!(rec.seq.capacity(), cap);
    }

    #[test]
    fn test_is_fastq() {
        assert!(Record::new("r1", "", "AC", "II").is_fastq());
        assert!(!Record::new("r1", "", "AC", "").is_fastq());
    }
}
