use std::io::Cursor;

use proptest::prelude::*;
use seq_stream::{Mode, Record, Stream};

fn parse(data: &[u8], capacity: usize) -> Vec<Record> {
    let mut stream = Stream::with_capacity(capacity, Cursor::new(data), Mode::Input);
    stream.records().collect::<Result<_, _>>().unwrap()
}

fn fasta_record() -> impl Strategy<Value = Record> {
    ("[A-Za-z0-9_.]{1,20}", "([A-Za-z0-9=]{1,10}( [A-Za-z0-9=]{1,10}){0,3})?", "[ACGTN]{1,300}")
        .prop_map(|(name, comment, seq)| Record::new(name, comment, seq, ""))
}

fn fastq_record() -> impl Strategy<Value = Record> {
    ("[A-Za-z0-9_.]{1,20}", "[ACGTN]{1,200}").prop_flat_map(|(name, seq)| {
        let len = seq.len();
        proptest::collection::vec(b'!'..=b'I', len)
            .prop_map(move |qual| Record::new(name.clone(), "", seq.clone(), qual))
    })
}

proptest! {
    /// Records come out the same whatever the buffer capacity.
    #[test]
    fn test_capacity_does_not_change_records(
        records in proptest::collection::vec(prop_oneof![fasta_record(), fastq_record()], 1..8),
        capacity in 1usize..64,
        wrap in 0usize..80,
    ) {
        let mut writer = Stream::writer(Vec::new());
        writer.set_wrap_length(wrap);
        for rec in &records {
            writer.write(rec).unwrap();
        }
        let data = writer.into_inner();

        let small = parse(&data, capacity);
        let large = parse(&data, 1 << 20);

        prop_assert_eq!(&small, &large);
        prop_assert_eq!(&small, &records);
    }

    /// Reading then writing FASTA with the same wrap length reproduces the input.
    #[test]
    fn test_fasta_rewrite_round_trip(
        records in proptest::collection::vec(fasta_record(), 1..8),
        wrap in 1usize..100,
        crlf in any::<bool>(),
    ) {
        let mut writer = Stream::writer(Vec::new());
        writer.set_wrap_length(wrap);
        for rec in &records {
            writer.write(rec).unwrap();
        }
        let original = writer.into_inner();
        let input = if crlf {
            String::from_utf8(original.clone()).unwrap().replace('\n', "\r\n").into_bytes()
        } else {
            original.clone()
        };

        let mut reader = Stream::with_capacity(16, Cursor::new(&input[..]), Mode::Input);
        let mut rewriter = Stream::writer(Vec::new());
        rewriter.set_wrap_length(wrap);
        let mut rec = Record::default();
        while reader.read(&mut rec).unwrap() {
            prop_assert!(reader.is_usable());
            rewriter.write(&rec).unwrap();
        }

        prop_assert_eq!(rewriter.into_inner(), original);
    }
}
