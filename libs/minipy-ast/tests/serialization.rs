use minipy_ast::{parse_to_ast, LowerError, Statement};
use serde_json::json;

#[test]
fn statements_serialize_as_tagged_objects() {
    let stmts = parse_to_ast("x = 1 + 2\nprint(x)").unwrap();
    let value = serde_json::to_value(&stmts).unwrap();
    assert_eq!(
        value,
        json!([
            {
                "tag": "define",
                "name": "x",
                "value": {
                    "tag": "binop",
                    "op": "Plus",
                    "left": { "tag": "num", "value": 1.0 },
                    "right": { "tag": "num", "value": 2.0 }
                }
            },
            {
                "tag": "expr",
                "expr": {
                    "tag": "builtin1",
                    "name": "print",
                    "arg": { "tag": "id", "name": "x" }
                }
            }
        ])
    );

    let back: Vec<Statement> = serde_json::from_value(value).unwrap();
    assert_eq!(back, stmts);
}

#[test]
fn errors_serialize_with_span() {
    let err = parse_to_ast("[1]").unwrap_err();
    let value = serde_json::to_value(&err).unwrap();
    assert_eq!(value["Parse"]["kind"], "UnsupportedExpression");
    assert_eq!(value["Parse"]["span"], json!({ "start": 0, "end": 3 }));

    let back: LowerError = serde_json::from_value(value).unwrap();
    assert_eq!(back, err);
}
