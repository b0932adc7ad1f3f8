use super::generics::split_generic_type;

#[test]
fn single_type_parameter() {
    assert_eq!(split_generic_type("MyType[T]"), ("MyType", Some(vec!["T"])));
}

#[test]
fn multiple_type_parameters() {
    assert_eq!(
        split_generic_type("Result[K, V]"),
        ("Result", Some(vec!["K", "V"]))
    );
    assert_eq!(split_generic_type("Base[A,B]"), ("Base", Some(vec!["A", "B"])));
}

#[test]
fn surrounding_whitespace_is_trimmed() {
    assert_eq!(
        split_generic_type("MapEntry[  KeyType , ValueType  ]"),
        ("MapEntry", Some(vec!["KeyType", "ValueType"]))
    );
}

#[test]
fn not_generic() {
    assert_eq!(split_generic_type("PlainType"), ("PlainType", None));
}

#[test]
fn unbalanced_is_plain_name() {
    assert_eq!(
        split_generic_type("BrokenType[Param"),
        ("BrokenType[Param", None)
    );
    assert_eq!(split_generic_type("Odd]Type["), ("Odd]Type[", None));
}

#[test]
fn empty_brackets_yield_one_empty_parameter() {
    assert_eq!(split_generic_type("EmptyType[]"), ("EmptyType", Some(vec![""])));
}

#[test]
fn nested_commas_stay_inside_argument() {
    assert_eq!(
        split_generic_type("Pair[Map[K, V], T]"),
        ("Pair", Some(vec!["Map[K, V]", "T"]))
    );
    assert_eq!(
        split_generic_type("Outer[Inner[A[B, C]], D, E]"),
        ("Outer", Some(vec!["Inner[A[B, C]]", "D", "E"]))
    );
}

#[test]
fn blank_arguments_are_dropped() {
    assert_eq!(split_generic_type("Base[A, , B,]"), ("Base", Some(vec!["A", "B"])));
    assert_eq!(split_generic_type("Base[ ]"), ("Base", Some(vec![])));
}
