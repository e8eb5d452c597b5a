use minipy_ast::{parse_to_ast, Builtin1, Builtin2, Expression, Statement};

#[test]
fn lowers_builtin_calls() {
    let stmts = parse_to_ast("abs(-1)\nmax(-1,1)").unwrap();
    assert_eq!(
        stmts,
        vec![
            Statement::Expr {
                expr: Expression::builtin1(Builtin1::Abs, Expression::number(-1.0)),
            },
            Statement::Expr {
                expr: Expression::builtin2(Builtin2::Max, Expression::number(-1.0), Expression::number(1.0)),
            },
        ]
    );
}

#[test]
fn comments_and_blank_lines_are_ignored() {
    let src = "# setup\nx = 1\n\n# use it\nprint(x)  # done\n";
    let stmts = parse_to_ast(src).unwrap();
    assert_eq!(stmts.len(), 2);
}

#[test]
fn semicolon_separated_statements() {
    let stmts = parse_to_ast("x = 1; y = x; print(y)").unwrap();
    assert_eq!(stmts.len(), 3);
    assert!(matches!(&stmts[1], Statement::Define { name, .. } if name == "y"));
}
