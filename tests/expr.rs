use std::{
    collections::hash_map::DefaultHasher,
    hash::{Hash, Hasher},
};

use pretty_assertions::{assert_eq, assert_ne};
use verba::{
    ast::{
        walk,
        BinaryOperator::{self, Add, Div, Mul, Pow, Sub},
        Expr,
    },
    error::RuntimeError,
    interpreter::context::Context,
};

fn lit(value: f64) -> Expr {
    Expr::literal(value)
}

fn var(name: &str) -> Expr {
    Expr::variable(name)
}

fn bin(op: BinaryOperator, lhs: Expr, rhs: Expr) -> Expr {
    Expr::binary(op, lhs, rhs)
}

fn eval(expr: &Expr) -> f64 {
    expr.evaluate(&Context::new())
        .unwrap_or_else(|e| panic!("Evaluation failed: {e}"))
}

fn emit(expr: &Expr) -> String {
    let mut out = String::new();
    expr.compile(&mut out)
        .unwrap_or_else(|e| panic!("Compilation failed: {e}"));
    out
}

fn hash_of(expr: &Expr) -> u64 {
    let mut hasher = DefaultHasher::new();
    expr.hash(&mut hasher);
    hasher.finish()
}

/// Evaluates compiled output the way the target environment would: a tiny
/// reader for the emitted grammar, which is fully parenthesized and needs
/// no precedence handling.
fn eval_emitted(src: &str, context: &Context) -> f64 {
    let mut reader = Emitted { src: src.as_bytes(),
                               pos: 0, };
    let value = reader.expr(context);
    assert_eq!(reader.pos, reader.src.len(), "trailing input in {src:?}");
    value
}

struct Emitted<'a> {
    src: &'a [u8],
    pos: usize,
}

impl Emitted<'_> {
    fn eat(&mut self, expected: u8) {
        assert_eq!(self.src[self.pos] as char, expected as char, "at {}", self.pos);
        self.pos += 1;
    }

    fn expr(&mut self, context: &Context) -> f64 {
        if self.src[self.pos..].starts_with(b"pow(") {
            self.pos += 4;
            let lhs = self.expr(context);
            self.eat(b',');
            let rhs = self.expr(context);
            self.eat(b')');
            return lhs.powf(rhs);
        }

        match self.src[self.pos] {
            b'(' => {
                self.eat(b'(');
                let lhs = self.expr(context);
                let op = self.src[self.pos];
                self.pos += 1;
                let rhs = self.expr(context);
                self.eat(b')');
                match op {
                    b'+' => lhs + rhs,
                    b'-' => lhs - rhs,
                    b'*' => lhs * rhs,
                    b'/' => lhs / rhs,
                    other => panic!("Unexpected operator '{}'", other as char),
                }
            },
            c if c.is_ascii_digit() || c == b'-' => {
                let start = self.pos;
                self.pos += 1;
                while self.pos < self.src.len()
                      && (self.src[self.pos].is_ascii_digit() || self.src[self.pos] == b'.')
                {
                    self.pos += 1;
                }
                std::str::from_utf8(&self.src[start..self.pos]).unwrap()
                                                               .parse()
                                                               .unwrap()
            },
            _ => {
                let start = self.pos;
                while self.pos < self.src.len() && self.src[self.pos].is_ascii_alphanumeric() {
                    self.pos += 1;
                }
                let name = std::str::from_utf8(&self.src[start..self.pos]).unwrap();
                context.get(name)
                       .unwrap_or_else(|| panic!("Unbound variable '{name}' in emitted text"))
            },
        }
    }
}

#[test]
fn arithmetic_matches_the_operator_table() {
    assert_eq!(eval(&bin(Add, lit(2.0), lit(3.0))), 5.0);
    assert_eq!(eval(&bin(Sub, lit(8.0), lit(5.0))), 3.0);
    assert_eq!(eval(&bin(Mul, lit(7.0), lit(9.0))), 63.0);
    assert_eq!(eval(&bin(Div, lit(10.0), lit(4.0))), 2.5);
    assert_eq!(eval(&bin(Pow, lit(2.0), lit(3.0))), 8.0);
}

#[test]
fn division_follows_ieee_float_semantics() {
    assert_eq!(eval(&bin(Div, lit(5.0), lit(0.0))), f64::INFINITY);
    assert_eq!(eval(&bin(Div, lit(-5.0), lit(0.0))), f64::NEG_INFINITY);
    assert!(eval(&bin(Div, lit(0.0), lit(0.0))).is_nan());
}

#[test]
fn exponentiation_uses_the_platform_power_function() {
    assert_eq!(eval(&bin(Pow, lit(4.0), lit(0.5))), 2.0);
    assert_eq!(eval(&bin(Pow, lit(2.0), lit(-1.0))), 0.5);
    assert!(eval(&bin(Pow, lit(-1.0), lit(0.5))).is_nan());
}

#[test]
fn infinity_propagates_through_parent_nodes() {
    // (1/0) + 1 is still infinite; no error is raised anywhere.
    let expr = bin(Add, bin(Div, lit(1.0), lit(0.0)), lit(1.0));
    assert_eq!(eval(&expr), f64::INFINITY);
}

#[test]
fn nested_subtraction_preserves_left_associativity() {
    let expr = bin(Sub, bin(Sub, lit(10.0), lit(2.0)), lit(3.0));
    assert_eq!(eval(&expr), 5.0);
    assert_eq!(emit(&expr), "((10-2)-3)");
}

#[test]
fn compilation_emits_fully_parenthesized_infix() {
    assert_eq!(emit(&bin(Add, lit(3.0), lit(4.0))), "(3+4)");
    assert_eq!(emit(&bin(Mul, lit(2.0), bin(Add, lit(3.0), lit(4.0)))), "(2*(3+4))");
    assert_eq!(emit(&bin(Div, var("x"), lit(2.0))), "(x/2)");
}

#[test]
fn exponentiation_compiles_to_a_power_call() {
    assert_eq!(emit(&bin(Pow, lit(2.0), lit(3.0))), "pow(2,3)");
    assert_eq!(emit(&bin(Pow, bin(Pow, lit(2.0), lit(3.0)), var("x"))), "pow(pow(2,3),x)");
    assert_eq!(emit(&bin(Add, lit(1.0), bin(Pow, var("x"), lit(2.0)))), "(1+pow(x,2))");
}

#[test]
fn display_is_the_compiled_text() {
    let expr = bin(Mul, lit(2.0), bin(Pow, var("x"), lit(2.0)));
    assert_eq!(expr.to_string(), emit(&expr));
}

#[test]
fn compiled_text_evaluates_like_the_tree() {
    let mut context = Context::new();
    context.define("x", 3.0);
    context.define("y", 0.25);

    let cases = [bin(Add, lit(3.0), lit(4.0)),
                 bin(Sub, bin(Sub, lit(10.0), lit(2.0)), lit(3.0)),
                 bin(Mul, var("x"), bin(Add, var("y"), lit(1.0))),
                 bin(Div, lit(1.0), var("x")),
                 bin(Pow, var("x"), bin(Div, lit(1.0), lit(2.0))),
                 bin(Add, bin(Pow, var("x"), lit(2.0)), bin(Mul, lit(-2.0), var("x")))];

    for expr in &cases {
        let direct = expr.evaluate(&context).unwrap();
        let emitted = eval_emitted(&emit(expr), &context);
        assert!((direct - emitted).abs() <= 1e-12 * direct.abs().max(1.0),
                "Tree {expr} evaluated to {direct} but its emitted text gave {emitted}");
    }
}

#[test]
fn variables_resolve_through_the_context() {
    let mut context = Context::new();
    context.define("x", 2.0);
    context.define("y", 3.0);

    let expr = bin(Mul, var("x"), bin(Add, var("y"), lit(1.0)));
    assert_eq!(expr.evaluate(&context).unwrap(), 8.0);
}

#[test]
fn unknown_variables_propagate_unchanged() {
    let context = Context::new();
    let expr = bin(Add, lit(1.0), bin(Mul, lit(2.0), var("missing")));

    let err = expr.evaluate(&context).unwrap_err();
    assert_eq!(err, RuntimeError::UnknownVariable { name: "missing".to_string() });
}

#[test]
fn operands_are_evaluated_left_before_right() {
    // Both names are unbound; the reported failure must come from the
    // left operand.
    let context = Context::new();
    let expr = bin(Add, var("a"), var("b"));

    let err = expr.evaluate(&context).unwrap_err();
    assert_eq!(err, RuntimeError::UnknownVariable { name: "a".to_string() });
}

#[test]
fn equality_is_structural_not_identity_based() {
    let first = bin(Mul, lit(2.0), bin(Add, lit(3.0), lit(4.0)));
    let second = bin(Mul, lit(2.0), bin(Add, lit(3.0), lit(4.0)));

    // Reflexive, symmetric, and independent of object identity.
    assert_eq!(first, first);
    assert_eq!(first, second);
    assert_eq!(second, first);
}

#[test]
fn equality_is_sensitive_to_operand_order_and_operator() {
    let base = bin(Add, lit(1.0), lit(2.0));

    assert_ne!(base, bin(Add, lit(2.0), lit(1.0)));
    assert_ne!(base, bin(Sub, lit(1.0), lit(2.0)));

    // Same numeric result, different structure.
    let swapped = bin(Mul, bin(Add, lit(3.0), lit(4.0)), lit(2.0));
    let original = bin(Mul, lit(2.0), bin(Add, lit(3.0), lit(4.0)));
    assert_eq!(eval(&swapped), eval(&original));
    assert_ne!(swapped, original);
}

#[test]
fn equal_trees_hash_equal() {
    let first = bin(Mul, lit(2.0), bin(Add, lit(3.0), lit(4.0)));
    let second = bin(Mul, lit(2.0), bin(Add, lit(3.0), lit(4.0)));

    assert_eq!(hash_of(&first), hash_of(&second));
    assert_ne!(hash_of(&first), hash_of(&bin(Mul, bin(Add, lit(3.0), lit(4.0)), lit(2.0))));
}

#[test]
fn children_are_enumerated_in_fixed_order() {
    let expr = bin(Sub, lit(8.0), var("x"));

    let children = expr.children();
    assert_eq!(children.len(), 2);
    assert_eq!(children[0], ("lhs", &lit(8.0)));
    assert_eq!(children[1], ("rhs", &var("x")));

    assert!(lit(1.0).children().is_empty());
    assert!(var("x").children().is_empty());
}

#[test]
fn children_reference_the_owned_operands_by_identity() {
    let expr = bin(Add, lit(3.0), lit(4.0));
    let children = expr.children();

    let Expr::Binary { lhs, rhs, .. } = &expr else {
        panic!("Expected a binary node");
    };
    assert!(std::ptr::eq(children[0].1, lhs.as_ref()));
    assert!(std::ptr::eq(children[1].1, rhs.as_ref()));
}

#[test]
fn depth_first_walk_visits_preorder_left_to_right() {
    let expr = bin(Mul, bin(Add, lit(1.0), var("x")), lit(2.0));

    let kinds: Vec<_> = walk::depth_first(&expr).map(|(role, node)| (role, node.kind()))
                                                .collect();
    assert_eq!(kinds,
               [("root", "Binary"),
                ("lhs", "Binary"),
                ("lhs", "Literal"),
                ("rhs", "Variable"),
                ("rhs", "Literal")]);
}

#[test]
fn dump_renders_an_indented_tree() {
    let expr = bin(Pow, var("x"), lit(2.0));

    assert_eq!(walk::dump(&expr),
               "root: Binary(operator=Pow)\n  \
                lhs: Variable(name=x)\n  \
                rhs: Literal(value=2)\n");
}

#[test]
fn trees_are_shareable_across_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Expr>();

    let expr = bin(Mul, lit(6.0), lit(7.0));
    std::thread::scope(|scope| {
        let handles: Vec<_> =
            (0..4).map(|_| scope.spawn(|| expr.evaluate(&Context::new()).unwrap()))
                  .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), 42.0);
        }
    });
}
