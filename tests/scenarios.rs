use {
    bitvec::prelude::*,
    huffman_steps::{
        analyze, bit_string, build, compute_statistics, generate_codes, process, BuildState,
        CodeTable, Error, HuffmanTreeBuilder, StepKind,
    },
};

fn codes_of(text: &str) -> Vec<(char, String)> {
    process(text)
        .codes
        .iter()
        .map(|(symbol, code)| (symbol, bit_string(code)))
        .collect()
}

#[test]
fn aaabbc() {
    let report = process("aaabbc");

    let frequencies: Vec<_> = report.frequencies.iter().collect();
    assert_eq!(frequencies, vec![('a', 3), ('b', 2), ('c', 1)]);

    let steps = &report.build.steps;
    assert_eq!(steps.len(), 4);
    assert_eq!(steps.merge_count(), 2);
    assert_eq!(steps[0].description, "Initial nodes sorted by frequency");
    assert!(steps[0].special_nodes().is_empty());
    assert_eq!(
        steps[1].description,
        "Combining 'c' (1) and 'b' (2) to form internal node of frequency 3"
    );
    assert_eq!(
        steps[2].description,
        "Combining 'a' (3) and 'internal' (3) to form internal node of frequency 6"
    );
    assert_eq!(steps[3].description, "Final Huffman tree");
    assert!(steps[3].queue.is_empty());
    assert_eq!(steps[3].special_nodes(), vec![report.build.root().unwrap()]);

    assert_eq!(
        codes_of("aaabbc"),
        vec![
            ('a', "0".to_string()),
            ('b', "11".to_string()),
            ('c', "10".to_string()),
        ]
    );

    let statistics = report.statistics.unwrap();
    assert_eq!(statistics.compressed_bits, 9);
    assert_eq!(statistics.original_bits, 48);
    assert!((statistics.compression_ratio_percent() - 81.25).abs() < 1e-9);
    assert!((statistics.average_code_length() - 1.5).abs() < 1e-9);
}

#[test]
fn empty_text_is_no_data() {
    let frequencies = analyze("");
    assert!(frequencies.is_empty());

    let build = build(&frequencies);
    assert_eq!(build.root(), None);
    assert!(build.steps.is_empty());
    assert!(build.tree.is_empty());

    let codes = generate_codes(&build.tree);
    assert!(codes.is_empty());
    assert_eq!(compute_statistics("", &frequencies, &codes), None);

    let cursor = build.steps.cursor();
    assert_eq!(cursor.position(), "Step 0/0");
    assert!(cursor.current(&build.steps).is_none());
}

#[test]
fn single_symbol_gets_one_bit() {
    let report = process("zzzz");
    assert_eq!(report.build.steps.merge_count(), 0);
    assert_eq!(report.build.steps.len(), 2);

    let root = report.build.root().unwrap();
    assert!(report.build.tree[root].is_leaf());
    assert_eq!(codes_of("zzzz"), vec![('z', "0".to_string())]);

    let statistics = report.statistics.unwrap();
    assert_eq!(statistics.compressed_bits, 4);
    assert!((statistics.compression_ratio_percent() - 87.5).abs() < 1e-9);

    let bits = report.codes.encode("zzzz").unwrap();
    assert_eq!(bit_string(&bits), "0000");
    assert_eq!(report.build.tree.decode(&bits).unwrap(), "zzzz");
}

#[test]
fn ties_break_by_insertion_order() {
    assert_eq!(
        codes_of("abcd"),
        vec![
            ('a', "00".to_string()),
            ('b', "01".to_string()),
            ('c', "10".to_string()),
            ('d', "11".to_string()),
        ]
    );
    // First occurrence decides the order, not the symbol.
    assert_eq!(
        codes_of("dcba"),
        vec![
            ('a', "11".to_string()),
            ('b', "10".to_string()),
            ('c', "01".to_string()),
            ('d', "00".to_string()),
        ]
    );
}

#[test]
fn builder_walks_through_its_states() {
    let frequencies = analyze("aaabbc");
    let mut builder = HuffmanTreeBuilder::new(&frequencies);
    assert_eq!(builder.state(), BuildState::Seeded);
    assert_eq!(builder.steps().len(), 1);

    assert!(builder.step().unwrap().is_merge());
    assert_eq!(builder.state(), BuildState::Merging);
    assert!(builder.step().unwrap().is_merge());
    assert_eq!(builder.state(), BuildState::Merging);

    let last = builder.step().unwrap();
    assert!(matches!(last.kind, StepKind::Final { .. }));
    assert_eq!(builder.state(), BuildState::Done);
    assert!(builder.step().is_none());

    let finished = builder.finish();
    assert_eq!(finished, build(&frequencies));
}

#[test]
fn empty_builder_is_done_immediately() {
    let mut builder = HuffmanTreeBuilder::new(&analyze(""));
    assert_eq!(builder.state(), BuildState::Done);
    assert!(builder.step().is_none());
    assert!(builder.steps().is_empty());
}

#[test]
fn cursor_stays_within_history() {
    let steps = process("aaabbc").build.steps;
    let mut cursor = steps.cursor();
    assert_eq!(cursor.position(), "Step 1/4");
    assert!(!cursor.back());
    assert_eq!(cursor.index(), 0);

    assert!(cursor.forward());
    assert!(cursor.forward());
    assert!(cursor.forward());
    assert!(!cursor.forward());
    assert_eq!(cursor.position(), "Step 4/4");
    assert_eq!(cursor.current(&steps), steps.get(3));

    cursor.first();
    assert_eq!(cursor.index(), 0);
    cursor.last();
    assert_eq!(cursor.index(), 3);
    assert!(cursor.back());
    assert_eq!(cursor.index(), 2);
}

#[test]
fn decode_reports_truncated_bits() {
    let report = process("aaabbc");
    let mut bits: BitVec = BitVec::new();
    bits.push(false);
    bits.push(true);
    assert!(matches!(
        report.build.tree.decode(&bits),
        Err(Error::TruncatedCode { decoded: 1 })
    ));
}

#[test]
fn lone_leaf_only_decodes_zero_bits() {
    let tree = process("zzzz").build.tree;
    let mut bits: BitVec = BitVec::new();
    bits.push(false);
    bits.push(true);
    assert!(matches!(
        tree.decode(&bits),
        Err(Error::InvalidCode { decoded: 1 })
    ));
}

#[test]
fn statistics_need_a_code_for_every_symbol() {
    let frequencies = analyze("abc");
    let codes = CodeTable::of(&process("ab").build.tree);
    assert_eq!(compute_statistics("abc", &frequencies, &codes), None);
}

#[test]
fn decode_with_empty_tree() {
    let report = process("");
    let mut bits: BitVec = BitVec::new();
    assert_eq!(report.build.tree.decode(&bits).unwrap(), "");
    bits.push(true);
    assert!(matches!(
        report.build.tree.decode(&bits),
        Err(Error::EmptyTree)
    ));
}

#[test]
fn encode_rejects_unknown_symbols() {
    let codes = CodeTable::of(&process("ab").build.tree);
    assert!(matches!(codes.encode("abc"), Err(Error::UnknownSymbol('c'))));
}

#[test]
fn rendering() {
    let report = process("aaabbc");
    assert_eq!(
        report.build.tree.render(),
        "internal (6)\n  0: a (3)\n  1: internal (3)\n    0: c (1)\n    1: b (2)\n"
    );

    let merge = report.build.steps[1].display(&report.build.tree).to_string();
    assert!(merge.starts_with("Combining 'c' (1) and 'b' (2)"));
    assert!(merge.contains("*        c (1)"));
    assert!(merge.contains("        a (3)"));

    let table = process("a b\n").frequencies.to_string();
    assert!(table.lines().any(|line| line == "         |         1"));
    assert!(table.contains("\\n       |         1"));

    let codes = report.codes.display(&report.frequencies).to_string();
    assert!(codes.contains("a        |         3 | 0"));

    let statistics = report.statistics.unwrap().to_string();
    assert!(statistics.contains("Compression ratio:   81.25%"));
}
