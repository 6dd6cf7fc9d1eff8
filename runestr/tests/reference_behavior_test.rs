// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Replays the reference behavior of every operation through the public API only.

use runestr::{CodePointCount, CodePointStrExt as _, RuneStrError, assert_eq2, cp_count,
              left, len_code_points, pad_right, right, rune_at_position,
              rune_at_signed_position, split_on_nearest_space};

const FRENCH: &str = "Tout peut sortir d'un mot qu'en passant vous perdîtes.";
const MIXED: &str = "test 世界 perdîtes";

#[test]
fn test_length() {
    assert_eq2!(len_code_points("abcde12345"), 10);
    assert_eq2!(len_code_points(""), 0);
    assert_eq2!(len_code_points("¨"), 1);
    assert_eq2!(len_code_points("世界"), 2);
}

#[test]
fn test_pad_right() {
    assert_eq2!(pad_right("test", " ", 10), "test      ");
    assert_eq2!(pad_right("test", " ", 5), "test ");
    assert_eq2!(pad_right("test", " ", 4), "test");
    assert_eq2!(pad_right("test", " ", 3), "test");
    assert_eq2!(pad_right("test", "..", 10), "test......");
    assert_eq2!(pad_right("test", "..", 9), "test.....");
    assert_eq2!(pad_right("test", "_-¨", 12), "test_-¨_-¨_-");
    assert_eq2!(pad_right("test", "_-¨", 10), "test_-¨_-¨");
    assert_eq2!(pad_right("test", "_-¨", 5), "test_");
    assert_eq2!(pad_right("test", "_-¨", 4), "test");
    assert_eq2!(pad_right("test", "世界", 7), "test世界世");
    assert_eq2!(pad_right("test", "世界世界世界世界世界世界", 10), "test世界世界世界");
    assert_eq2!(pad_right("test", "", 10), "test");
}

#[test]
fn test_left() {
    assert_eq2!(left("test Left", 9), "test Left");
    assert_eq2!(left("test", 9), "test");
    assert_eq2!(left("test Left", 5), "test ");
    assert_eq2!(left("test Left", 4), "test");
    assert_eq2!(left("test Left", 1), "t");
    assert_eq2!(left("test Left", 0), "");
    assert_eq2!(left("", 7), "");
    assert_eq2!(left("1¨2", 5), "1¨2");
    assert_eq2!(left("1¨2", 3), "1¨2");
    assert_eq2!(left("1¨2", 2), "1¨");
    assert_eq2!(left("1¨2", 1), "1");
}

#[test]
fn test_right() {
    assert_eq2!(right("test Right", 9), "est Right");
    assert_eq2!(right("test Right", 5), "Right");
    assert_eq2!(right("test Right", 1), "t");
    assert_eq2!(right("test Right", 0), "");
    assert_eq2!(right("", 9), "");
    assert_eq2!(right("1¨2", 5), "1¨2");
    assert_eq2!(right("1¨2", 3), "1¨2");
    assert_eq2!(right("1¨2", 2), "¨2");
    assert_eq2!(right("1¨2", 1), "2");
}

#[test]
fn test_split_on_nearest_space() {
    let rest_after_tout_peut = "sortir d'un mot qu'en passant vous perdîtes.";
    let rest_after_sortir = "d'un mot qu'en passant vous perdîtes.";

    assert_eq2!(
        split_on_nearest_space(FRENCH, 9),
        ("Tout peut", rest_after_tout_peut)
    );
    assert_eq2!(
        split_on_nearest_space(FRENCH, 12),
        ("Tout peut", rest_after_tout_peut)
    );
    for max in [16, 17, 18] {
        assert_eq2!(
            split_on_nearest_space(FRENCH, max),
            ("Tout peut sortir", rest_after_sortir)
        );
    }
    assert_eq2!(
        split_on_nearest_space(FRENCH, 53),
        ("Tout peut sortir d'un mot qu'en passant vous", "perdîtes.")
    );
    for max in [54, 55, 100] {
        assert_eq2!(split_on_nearest_space(FRENCH, max), (FRENCH, ""));
    }
    assert_eq2!(split_on_nearest_space("", 10), ("", ""));
    assert_eq2!(
        split_on_nearest_space("Toutpeutsortird'unmotqu'enpassantvousperdîtes.", 10),
        ("Toutpeutso", "rtird'unmotqu'enpassantvousperdîtes.")
    );
    assert_eq2!(
        split_on_nearest_space("troisième ligne", 10),
        ("troisième", "ligne")
    );
}

#[test]
fn test_rune_at_position() {
    assert_eq2!(rune_at_position(MIXED, 0, 'x'), 't');
    assert!(rune_at_position(MIXED, 6, 'x') != '世');
    assert_eq2!(rune_at_position(MIXED, 5, 'x'), '世');
    assert_eq2!(rune_at_position(MIXED, 6, 'x'), '界');
    assert_eq2!(rune_at_position(MIXED, 12, 'x'), 'î');
    assert_eq2!(rune_at_position(MIXED, 20, 'x'), 'x');
}

#[test]
fn test_signed_inputs() {
    assert_eq2!(rune_at_signed_position(MIXED, -1, 'x'), 'x');
    assert_eq2!(rune_at_signed_position(MIXED, 5, 'x'), '世');

    let n: i64 = -4;
    assert_eq2!(
        CodePointCount::try_from(n),
        Err(RuneStrError::NegativeCount { value: -4 })
    );

    let n: i64 = 4;
    let count = CodePointCount::try_from(n).map_err(miette::Report::from);
    assert!(count.is_ok());
    if let Ok(count) = count {
        assert_eq2!(left(MIXED, count), "test");
    }
}

#[test]
fn test_wrap_a_paragraph_one_line_at_a_time() {
    let width = cp_count(20);
    let mut lines = vec![];
    let mut remaining = FRENCH;
    while !remaining.is_empty() {
        let (line, rest) = remaining.split_on_nearest_space(width);
        lines.push(line.pad_right_with(".", width).into_owned());
        remaining = rest;
    }
    assert_eq2!(
        lines,
        vec![
            "Tout peut sortir....".to_string(),
            "d'un mot qu'en......".to_string(),
            "passant vous........".to_string(),
            "perdîtes............".to_string(),
        ]
    );
}

#[test]
fn test_fallbacks_emit_trace_events() {
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .finish();

    tracing::subscriber::with_default(subscriber, || {
        assert_eq2!(pad_right("test", "", 10), "test");
        assert_eq2!(split_on_nearest_space("abcdef", 3), ("abc", "def"));
        assert_eq2!(rune_at_signed_position("abc", -3, '?'), '?');
    });
}
