use multitool::*;

const SAMPLES: &[&str] = &[
    "",
    "\n",
    "zebra\napple\nbanana",
    "b\na\nb\nc\na",
    "  a  \n b\nc ",
    "x\n\ny\n   \nz",
    "XMLHttpRequest sha256Hash\nhello-world_test\n",
    "Dup\ndup\nDup\n\n\ndup",
    "caf\u{e9}\n\u{c9}t\u{e9}\nABC",
];

#[test]
fn test_sort_za_is_reversed_sort_az() {
    for s in SAMPLES {
        let mut expected: Vec<String> = sort_lines_az(s).split('\n').map(String::from).collect();
        expected.reverse();
        assert_eq!(sort_lines_za(s), expected.join("\n"), "input {:?}", s);
    }
}

#[test]
fn test_sort_za_groups_duplicates() {
    let input = "a\nb\na\nb";
    assert_eq!(sort_lines_az(input), "a\na\nb\nb");
    assert_eq!(sort_lines_za(input), "b\nb\na\na");
}

#[test]
fn test_upper_and_lower_are_idempotent() {
    for s in SAMPLES {
        assert_eq!(to_upper_case(&to_upper_case(s)), to_upper_case(s));
        assert_eq!(to_lower_case(&to_lower_case(s)), to_lower_case(s));
    }
}

#[test]
fn test_empty_input_maps_to_empty_output() {
    let functions: &[fn(&str) -> String] = &[
        to_camel_case,
        to_snake_case,
        to_kebab_case,
        to_title_case,
        to_upper_case,
        to_lower_case,
        sort_lines_az,
        sort_lines_za,
        reverse_lines,
        remove_empty_lines,
        trim_lines,
        remove_duplicate_lines,
    ];
    for f in functions {
        assert_eq!(f(""), "");
    }
}

#[test]
fn test_documented_scenarios() {
    assert_eq!(remove_duplicate_lines("b\na\nb\nc\na"), "b\na\nc");
    assert_eq!(remove_empty_lines("x\n\ny\n   \nz"), "x\ny\nz");
    assert_eq!(trim_lines("  a  \n b\nc "), "a\nb\nc");
    assert_eq!(to_snake_case("XMLHttpRequest"), "xml_http_request");
    assert_eq!(to_snake_case("sha256"), "sha256");
    assert_eq!(to_kebab_case("sha256Hash"), "sha256-hash");
    assert_eq!(to_camel_case("hello-world-test"), "helloWorldTest");
}

#[test]
fn test_snake_then_camel_is_lossy() {
    let snake = to_snake_case("XMLParser");
    assert_eq!(snake, "xml_parser");
    assert_eq!(to_camel_case(&snake), "xmlParser");
    assert_ne!(to_camel_case(&snake), "XMLParser");
}

#[test]
fn test_line_count_is_kept_by_order_ops_and_trim() {
    for s in SAMPLES {
        let count = s.split('\n').count();
        for op in [LineOp::SortAscending, LineOp::SortDescending, LineOp::Reverse, LineOp::Trim] {
            assert_eq!(transform_lines(s, op).split('\n').count(), count);
        }
    }
}

#[test]
fn test_tokens_only_keep_letters_and_digits() {
    for s in SAMPLES {
        let joined: String = tokenize(s).iter().map(Token::as_str).collect();
        assert!(joined.bytes().all(|b| b.is_ascii_alphanumeric()));
    }
}
