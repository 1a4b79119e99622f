use kbt_logkeys::aggregator::{analyze_lines, analyze_log, KeyRecord, KeyStats, ModifierCounts};
use kbt_logkeys::parser::Modifier;
use pretty_assertions::assert_eq;
use std::io::Cursor;

const FIXTURE: &str = include_str!("data/logkeys.log");

fn record(key: &str, count: u64, modifiers: ModifierCounts) -> KeyRecord {
    KeyRecord {
        key: key.to_string(),
        count,
        modifiers,
    }
}

#[test]
fn test_fixture_counts() {
    let analysis = analyze_log(Cursor::new(FIXTURE)).unwrap();
    let stats = &analysis.stats;

    assert_eq!(stats.get("k"), Some(&record("k", 9, ModifierCounts::default())));
    assert_eq!(stats.get("ö"), Some(&record("ö", 3, ModifierCounts::default())));
    assert_eq!(
        stats.get("f"),
        Some(&record(
            "f",
            7,
            ModifierCounts {
                left_shift: 1,
                left_ctrl: 1,
                ..Default::default()
            }
        ))
    );
    assert_eq!(
        stats.get("x"),
        Some(&record(
            "x",
            1,
            ModifierCounts {
                left_shift: 1,
                right_ctrl: 1,
                ..Default::default()
            }
        ))
    );

    let enter = stats.get("<enter>").unwrap();
    assert_eq!(enter.count, 5);
    assert_eq!(enter.modifiers.get(Modifier::LeftAlt), 1);

    assert_eq!(stats.len(), 6);
    assert_eq!(stats.total_presses(), 26);
}

#[test]
fn test_fixture_session() {
    let analysis = analyze_log(Cursor::new(FIXTURE)).unwrap();

    assert_eq!(analysis.session.lines_read, 9);
    assert_eq!(analysis.session.lines_skipped, 4);
    assert_eq!(analysis.session.data_lines(), 5);

    let first = analysis.session.first_timestamp.unwrap();
    let last = analysis.session.last_timestamp.unwrap();
    assert_eq!((last - first).num_seconds(), 105);
}

#[test]
fn test_single_line_scenario() {
    let analysis = analyze_lines(["2020-01-01 12:00:00 > <lshft>fk\n"]);

    let mut expected = KeyStats::new();
    expected.record_keypress("f", &[Modifier::LeftShift]);
    expected.record_keypress("k", &[]);
    expected.record_keypress("<enter>", &[]);

    assert_eq!(analysis.stats, expected);
}

#[test]
fn test_repeated_key_scenario() {
    let analysis = analyze_lines([" > kkkkkkkkk"]);

    assert_eq!(analysis.stats.len(), 1);
    assert_eq!(
        analysis.stats.get("k"),
        Some(&record("k", 9, ModifierCounts::default()))
    );
}

#[test]
fn test_line_without_separator_is_ignored() {
    let analysis = analyze_lines(["foo"]);
    assert!(analysis.stats.is_empty());
    assert_eq!(analysis.session.lines_skipped, 1);
}

#[test]
fn test_reaggregation_is_idempotent() {
    let first = analyze_log(Cursor::new(FIXTURE)).unwrap();
    let second = analyze_log(Cursor::new(FIXTURE)).unwrap();
    assert_eq!(first.stats, second.stats);
}

#[test]
fn test_noise_lines_do_not_change_stats() {
    let clean = analyze_log(Cursor::new(FIXTURE)).unwrap();

    let mut noisy = String::from("header line\n");
    for line in FIXTURE.lines() {
        noisy.push_str(line);
        noisy.push('\n');
        noisy.push_str("noise <lshft> without separator\n\n");
    }
    let noisy = analyze_log(Cursor::new(noisy)).unwrap();

    assert_eq!(clean.stats, noisy.stats);
}

#[test]
fn test_modifiers_never_recorded_as_keys() {
    let mut log = String::from(FIXTURE);
    for modifier in Modifier::ALL {
        log.push_str(&format!("ts > {}a{}\n", modifier, modifier));
    }
    log.push_str("ts > <lshft><altgr>");
    let analysis = analyze_log(Cursor::new(log)).unwrap();

    for modifier in Modifier::ALL {
        assert!(analysis.stats.get(modifier.token()).is_none());
    }
}

#[test]
fn test_trailing_modifiers_are_dropped() {
    let base = analyze_lines(["ts > ab\n"]);
    let with_trailing = analyze_lines(["ts > ab\n", "ts > <lshft><rctrl>"]);

    assert_eq!(base.stats, with_trailing.stats);
}

#[test]
fn test_counters_match_record_keypress_calls() {
    let analysis = analyze_lines([
        "ts > <lshft>a<lshft><lshft>a<ralt>b",
        "ts > a<altgr>c",
    ]);

    let mut expected = KeyStats::new();
    expected.record_keypress("a", &[Modifier::LeftShift]);
    expected.record_keypress("a", &[Modifier::LeftShift, Modifier::LeftShift]);
    expected.record_keypress("b", &[Modifier::RightAlt]);
    expected.record_keypress("a", &[]);
    expected.record_keypress("c", &[Modifier::AltGr]);

    assert_eq!(analysis.stats, expected);
    assert_eq!(
        analysis.stats.get("a").unwrap().modifiers.get(Modifier::LeftShift),
        3
    );
}

#[test]
fn test_ranked_keys() {
    let mut stats = KeyStats::new();
    for _ in 0..9 {
        stats.record_keypress("k", &[]);
    }
    for _ in 0..7 {
        stats.record_keypress("f", &[]);
    }

    assert_eq!(stats.ranked_keys(), vec!["k", "f"]);
}

#[test]
fn test_unknown_brackets_are_keys() {
    let analysis = analyze_lines(["ts > <lshft><f12><esc>"]);

    let f12 = analysis.stats.get("<f12>").unwrap();
    assert_eq!(f12.modifiers.get(Modifier::LeftShift), 1);
    assert_eq!(analysis.stats.get("<esc>").unwrap().modifiers.total(), 0);
}

#[test]
fn test_marks_inside_brackets_are_single_keys() {
    let analysis = analyze_lines(["ts > <कि>\n"]);

    assert!(analysis.stats.get("<कि>").is_none());
    for key in ["<", "क", "\u{093F}", ">", "<enter>"] {
        assert_eq!(analysis.stats.get(key).unwrap().count, 1, "key {:?}", key);
    }
    assert_eq!(analysis.stats.len(), 5);
}

#[test]
fn test_lone_carriage_return_splits_lines() {
    let analysis = analyze_log(Cursor::new("ts > a\rb\n")).unwrap();

    let mut expected = KeyStats::new();
    expected.record_keypress("a", &[]);
    expected.record_keypress("<enter>", &[]);

    assert_eq!(analysis.stats, expected);
}
