use tsmirror_core::{AliasTable, RecordTable};

use super::mapper::{Substitutions, TypeMapper, VisitedSet};

fn aliases() -> AliasTable {
    [
        ("MyString", "string"),
        ("MyInt", "int"),
        ("MyAlias", "MyString"),
        ("Alias2", "MyAlias"),
        ("Alias3", "Alias2"),
        ("SelfRef", "SelfRef"),
        ("Nested", "map[string][]*MyAlias"),
        ("AliasInt", "int"),
        ("AliasMap", "map[string]string"),
        ("AliasLoop1", "AliasLoop2"),
        ("AliasLoop2", "AliasLoop1"),
        ("CustomInt", "int"),
        ("Label", "Name"),
        ("Name", "Title"),
        ("Title", "Label"),
    ]
    .into_iter()
    .collect()
}

#[test]
fn mapping_table() {
    let aliases = aliases();
    let records = RecordTable::new();
    let params = vec!["T".to_owned()];
    let mapper = TypeMapper::new(&aliases, &records).type_params(&params);

    let cases = [
        ("", ""),
        ("malformed[", "any"),
        ("SelfRef", "any"),
        ("*int", "number | null"),
        ("[][]map[int]string", "({ [key: number]: string })[][]"),
        ("map[string][]*MyAlias", "{ [key: string]: string | null[] }"),
        ("Alias3", "string"),
        ("MyType[T]", "MyType<T>"),
        ("Result[K, V]", "Result<K, V>"),
        ("[]Custom[T]", "Custom<T>[]"),
        ("*Option[string]", "Option<string> | null"),
        ("UnknownAlias", "UnknownAlias"),
        ("*Custom", "Custom | null"),
        ("[]Custom", "Custom[]"),
        ("map[string", "any"),
        ("string", "string"),
        ("int", "number"),
        ("bool", "boolean"),
        ("[]byte", "Uint8Array"),
        ("pkg.Type", "any"),
        ("map[struct{ X int; Y int }]string", "{ [key: string]: string }"),
        ("struct{ X int; Y int }", "{ X: number; Y: number }"),
        ("float64", "number"),
        ("time.Time", "string"),
        ("url.URL", "string"),
        ("unsafe.Pointer", "any"),
        ("interface{}", "any"),
        ("[]string", "string[]"),
        ("map[string]int", "{ [key: string]: number }"),
        ("struct{ Field1 int; Field2 string }", "{ Field1: number; Field2: string }"),
        ("AliasInt", "number"),
        ("AliasMap", "{ [key: string]: string }"),
        ("T", "T"),
        ("*pkg.Custom", "any | null"),
        ("[]pkg.Custom", "any[]"),
        ("struct{ FieldOnly }", "{ unknown: any }"),
        ("map[UnknownStruct]string", "{ [key: string]: string }"),
        ("struct{}", "any"),
        ("error", "Error"),
        ("func", "(...args: any[]) => any"),
        ("*time.Time", "string"),
        ("*url.URL", "string"),
        ("decimal.Decimal", "string"),
        ("primitive.ObjectID", "string"),
        ("primitive.Decimal128", "string"),
        ("uuid.UUID", "string"),
        ("pgtype.UUID", "string"),
        ("sql.NullString", "string | null"),
        ("sql.NullInt64", "number | null"),
        ("pq.NullTime", "string | null"),
        ("sql.NullBool", "boolean | null"),
        ("complex64", "any"),
        ("complex128", "any"),
        ("CustomType", "CustomType"),
        ("map[AliasLoop1]string", "{ [key: string]: string }"),
    ];

    for (expr, want) in cases {
        assert_eq!(mapper.map(expr), want, "mapping {expr:?}");
    }
}

#[test]
fn scenario_examples() {
    let aliases: AliasTable = [("CustomInt", "int")].into_iter().collect();
    let records: RecordTable = ["Profile", "User"].into_iter().collect();
    let mapper = TypeMapper::new(&aliases, &records);

    assert_eq!(mapper.map("CustomInt"), "number");
    assert_eq!(mapper.map("map[string]int"), "{ [key: string]: number }");
    assert_eq!(mapper.map("*Profile"), "Profile | null");
    assert_eq!(mapper.map("struct{X int; Y string}"), "{ X: number; Y: string }");
    assert_eq!(mapper.map("Result[User]"), "Result<User>");
}

#[test]
fn self_alias_is_any() {
    let aliases: AliasTable = [("SelfRef", "SelfRef")].into_iter().collect();
    let records = RecordTable::new();
    assert_eq!(TypeMapper::new(&aliases, &records).map("SelfRef"), "any");
}

#[test]
fn mutual_cycle_does_not_leak_between_calls() {
    let aliases = aliases();
    let records = RecordTable::new();
    let mapper = TypeMapper::new(&aliases, &records);

    assert_eq!(mapper.map("AliasLoop1"), "any");
    assert_eq!(mapper.map("AliasLoop1"), "any");
    assert_eq!(mapper.map("Label"), "any");

    // Same shared guard: entries are removed on the way out.
    let mut visited = VisitedSet::new();
    assert_eq!(mapper.map_with("AliasLoop2", &mut visited), "any");
    assert!(visited.is_empty());
    assert_eq!(mapper.map_with("Alias3", &mut visited), "string");
    assert!(visited.is_empty());
}

#[test]
fn repeated_expression_on_independent_paths_is_not_a_cycle() {
    let aliases = aliases();
    let records = RecordTable::new();
    let mapper = TypeMapper::new(&aliases, &records);

    assert_eq!(
        mapper.map("map[MyString]MyString"),
        "{ [key: string]: string }"
    );
    assert_eq!(mapper.map("Pair[MyInt, MyInt]"), "Pair<number, number>");
    assert_eq!(
        mapper.map("struct{ A Alias3; B Alias3 }"),
        "{ A: string; B: string }"
    );
}

#[test]
fn visited_expression_is_any() {
    let aliases = AliasTable::new();
    let records = RecordTable::new();
    let mapper = TypeMapper::new(&aliases, &records);

    let mut visited: VisitedSet = ["loop".to_owned()].into_iter().collect();
    assert_eq!(mapper.map_with("loop", &mut visited), "any");
    assert!(visited.contains("loop"));
}

#[test]
fn substitution_wins_over_everything_but_the_guard() {
    let aliases: AliasTable = [("X", "int")].into_iter().collect();
    let records = RecordTable::new();
    let subs: Substitutions = [("X".to_owned(), "Xtype".to_owned())].into_iter().collect();
    let mapper = TypeMapper::new(&aliases, &records).substitutions(&subs);

    assert_eq!(mapper.map("X"), "Xtype");
    assert_eq!(mapper.map("[]X"), "Xtype[]");
    assert_eq!(mapper.map("NonMatchingType"), "NonMatchingType");
}

#[test]
fn nested_pointers_are_not_collapsed() {
    let aliases = AliasTable::new();
    let records = RecordTable::new();
    let mapper = TypeMapper::new(&aliases, &records);

    assert_eq!(mapper.map("**int"), "number | null | null");
    assert_eq!(mapper.map("*[]string"), "string[] | null");
}

#[test]
fn arrays_of_maps_parenthesize() {
    let aliases = AliasTable::new();
    let records = RecordTable::new();
    let mapper = TypeMapper::new(&aliases, &records);

    assert_eq!(mapper.map("[]map[string]int"), "({ [key: string]: number })[]");
}

#[test]
fn map_key_coercion() {
    let aliases: AliasTable = [
        ("CustomInt", "int"),
        ("CustomIntAlias", "Opaque"),
        ("Code", "string"),
    ]
    .into_iter()
    .collect();
    let records = RecordTable::new();
    let mapper = TypeMapper::new(&aliases, &records);

    assert_eq!(mapper.map("map[struct{X int}]string"), "{ [key: string]: string }");
    assert_eq!(mapper.map("map[CustomIntAlias]string"), "{ [key: string]: string }");
    assert_eq!(mapper.map("map[CustomInt]string"), "{ [key: number]: string }");
    assert_eq!(mapper.map("map[Code]bool"), "{ [key: string]: boolean }");
    assert_eq!(mapper.map("map[float64]bool"), "{ [key: number]: boolean }");
    assert_eq!(mapper.map("map[bool]bool"), "{ [key: string]: boolean }");
}

#[test]
fn map_value_unions_parenthesize() {
    let aliases = AliasTable::new();
    let records = RecordTable::new();
    let mapper = TypeMapper::new(&aliases, &records);

    assert_eq!(mapper.map("map[string]*int"), "{ [key: string]: (number | null) }");
    assert_eq!(
        mapper.map("map[string]sql.NullString"),
        "{ [key: string]: (string | null) }"
    );
    assert_eq!(
        mapper.map("map[string]map[int]string"),
        "{ [key: string]: { [key: number]: string } }"
    );
}

#[test]
fn map_split_uses_matching_bracket() {
    let aliases = AliasTable::new();
    let records = RecordTable::new();
    let mapper = TypeMapper::new(&aliases, &records);

    assert_eq!(
        mapper.map("map[Pair[int, string]]bool"),
        "{ [key: string]: boolean }"
    );
}

#[test]
fn generic_with_empty_argument_list() {
    let aliases = AliasTable::new();
    let records = RecordTable::new();
    let mapper = TypeMapper::new(&aliases, &records);

    assert_eq!(mapper.map("EmptyType[]"), "EmptyType<any>");
}

#[test]
fn generic_patterns() {
    let aliases: AliasTable = [("MyAlias", "string")].into_iter().collect();
    let records = RecordTable::new();
    let params = vec!["T".to_owned()];
    let subs: Substitutions = [("T".to_owned(), "T".to_owned())].into_iter().collect();
    let mapper = TypeMapper::new(&aliases, &records)
        .type_params(&params)
        .substitutions(&subs);

    let mut visited = VisitedSet::new();
    let cases = [
        ("MyGeneric[int]", "MyGeneric<number>"),
        ("Pair[string, int]", "Pair<string, number>"),
        ("MyAlias[T]", "string<T>"),
        ("Container[T]", "Container<T>"),
        ("Outer[Inner[[]string], map[string]int]", "Outer<Inner<string[]>, { [key: string]: number }>"),
    ];
    for (expr, want) in cases {
        assert_eq!(mapper.map_generic(expr, &mut visited), want, "mapping {expr:?}");
    }
}

#[test]
fn inline_struct_shapes() {
    let aliases = AliasTable::new();
    let records = RecordTable::new();
    let mapper = TypeMapper::new(&aliases, &records);
    let mut visited = VisitedSet::new();

    let cases = [
        ("struct{Id int; Name string}", "{ Id: number; Name: string }"),
        ("struct{Active bool; Score float64}", "{ Active: boolean; Score: number }"),
        (
            "struct{CreatedAt time.Time; Title sql.NullString}",
            "{ CreatedAt: string; Title: string | null }",
        ),
        ("struct{}", "{  }"),
        ("struct{JustField}", "{ unknown: any }"),
        (
            "struct{ Inner struct{ A int; B int }; C string }",
            "{ Inner: { A: number; B: number }; C: string }",
        ),
    ];
    for (expr, want) in cases {
        assert_eq!(mapper.map_inline_struct(expr, &mut visited), want, "mapping {expr:?}");
    }
}

#[test]
fn record_table_only_classifies() {
    let aliases = AliasTable::new();
    let records: RecordTable = ["User"].into_iter().collect();
    let mapper = TypeMapper::new(&aliases, &records);

    assert!(mapper.is_known_record("User"));
    assert!(!mapper.is_known_record("Unknown"));
    assert_eq!(mapper.map("User"), "User");
    assert_eq!(mapper.map("Unknown"), "Unknown");
    assert_eq!(mapper.map("lowercase"), "lowercase");
}

#[test]
fn every_finite_expression_terminates_non_empty() {
    let aliases = aliases();
    let records = RecordTable::new();
    let mapper = TypeMapper::new(&aliases, &records);

    for expr in [
        "Nested",
        "[]AliasLoop1",
        "map[AliasLoop2]AliasLoop1",
        "*SelfRef",
        "Wrapper[AliasLoop1, SelfRef]",
        "struct{ A AliasLoop1; B Label }",
    ] {
        let mapped = mapper.map(expr);
        assert!(!mapped.is_empty(), "mapping {expr:?} produced nothing");
    }
}
