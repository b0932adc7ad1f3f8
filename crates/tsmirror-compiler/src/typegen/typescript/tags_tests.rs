use super::tags::{field_name_from_tag, lookup, unquote};

#[test]
fn field_names() {
    let cases = [
        (r#"json:"name""#, "name"),
        (r#"json:"name,omitempty""#, "name"),
        (r#"json:"-""#, ""),
        (r#"xml:"xmlName" json:"name""#, "name"),
        ("", ""),
        (r#"xml:"xmlName""#, ""),
        (r#"json:"""#, ""),
        (r#"json:"first" json:"second""#, "first"),
        (r#"json:"-" xml:"-""#, ""),
        ("   ", ""),
        (r#"json:"",xml:"x""#, ""),
        (r#"json:"foo,bar,baz""#, "foo"),
        (r#"json:"noendingquote"#, ""),
        (r#"json:"-,""#, "-"),
    ];

    for (tag, want) in cases {
        assert_eq!(field_name_from_tag(tag, "json"), want, "tag {tag:?}");
    }
}

#[test]
fn other_keys() {
    let tag = r#"json:"id" db:"user_id" yaml:"ident,flow""#;
    assert_eq!(field_name_from_tag(tag, "db"), "user_id");
    assert_eq!(field_name_from_tag(tag, "yaml"), "ident");
    assert_eq!(field_name_from_tag(tag, "toml"), "");
}

#[test]
fn lookup_distinguishes_missing_from_empty() {
    assert_eq!(lookup(r#"json:"""#, "json"), Some(String::new()));
    assert_eq!(lookup(r#"xml:"x""#, "json"), None);
}

#[test]
fn lookup_unescapes_value() {
    assert_eq!(
        lookup(r#"json:"a\"b" xml:"c""#, "json"),
        Some(r#"a"b"#.to_owned())
    );
    assert_eq!(lookup(r#"json:"a\"b" xml:"c""#, "xml"), Some("c".to_owned()));
}

#[test]
fn malformed_entry_hides_the_rest() {
    assert_eq!(lookup(r#"json: "name""#, "json"), None);
    assert_eq!(lookup(r#"bad xml:"x" json:"name""#, "json"), None);
    assert_eq!(lookup(r#"json:"ok" :"x" xml:"y""#, "xml"), None);
    assert_eq!(lookup(r#"json:"ok" :"x""#, "json"), Some("ok".to_owned()));
}

#[test]
fn unquote_go_escapes() {
    let cases = [
        (r#""plain""#, "plain"),
        (r#""a\"b\\c""#, "a\"b\\c"),
        (r#""\a\b\f\n\r\t\v""#, "\x07\x08\x0c\n\r\t\x0b"),
        (r#""\x6e\x61me""#, "name"),
        (r#""\156\141me""#, "name"),
        (r#""café""#, "café"),
        (r#""\U0001F600""#, "\u{1F600}"),
        (r#""""#, ""),
    ];

    for (quoted, want) in cases {
        assert_eq!(unquote(quoted).as_deref(), Some(want), "{quoted}");
    }
}

#[test]
fn unquote_rejects_invalid_escapes() {
    for quoted in [
        r#""\q""#,
        r#""\x6""#,
        r#""\400""#,
        r#""\uD800""#,
        r#""\'""#,
        r#""tail\""#,
        "unquoted",
    ] {
        assert_eq!(unquote(quoted), None, "{quoted}");
    }
}

#[test]
fn hex_escaped_tag_value_is_found() {
    assert_eq!(field_name_from_tag(r#"json:"\x69d,omitempty""#, "json"), "id");
    assert_eq!(field_name_from_tag(r#"json:"café""#, "json"), "café");
}
