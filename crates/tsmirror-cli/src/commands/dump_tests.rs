use std::fs;

use insta::assert_snapshot;
use tsmirror_core::Declarations;

use super::dump::{DumpArgs, render};

const MODEL: &str = r#"package model

type Email = string

type Account struct {
	ID    int   `json:"id"`
	Email Email `json:"email"`
}
"#;

#[test]
fn dumps_pretty_json() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("account.go"), MODEL).unwrap();

    let res = render(&DumpArgs {
        input: dir.path().to_path_buf(),
        compact: false,
    })
    .unwrap();

    assert_snapshot!(res, @r#"
    {
      "records": [
        {
          "name": "Account",
          "fields": [
            {
              "name": "ID",
              "rawType": "int",
              "tag": "json:\"id\""
            },
            {
              "name": "Email",
              "rawType": "Email",
              "tag": "json:\"email\""
            }
          ],
          "genericParams": []
        }
      ],
      "aliases": [
        {
          "name": "Email",
          "genericParams": [],
          "underlyingRawType": "string"
        }
      ]
    }
    "#);
}

#[test]
fn compact_json_loads_back() {
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("account.go");
    fs::write(&source, MODEL).unwrap();

    let res = render(&DumpArgs {
        input: source,
        compact: true,
    })
    .unwrap();

    assert!(!res.contains('\n'));
    let decls = Declarations::from_json(&res).unwrap();
    assert_eq!(decls.records[0].name, "Account");
    assert_eq!(decls.aliases[0].underlying_raw_type, "string");
}
