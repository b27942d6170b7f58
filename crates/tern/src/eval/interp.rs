//! Interpolation templates
//!
//! A template alternates literal text with embedded expressions.
//! Evaluation fuses everything into one string buffer, converting each
//! embedded value with the override-aware `to_s`; [`expand`] produces
//! the equivalent concatenation tree for callers that rewrite instead
//! of evaluate. Both give the same observable results, including
//! left-to-right evaluation order.
//!
//! A template that is a single embedded expression with no text is a
//! non-string interpolation position: the raw value passes through
//! unconverted.

use crate::ast::{BinOp, Expr, Literal, Segment};
use crate::context::EvalContext;
use crate::dispatch;
use crate::environment::VariableStore;
use crate::error::Result;
use crate::value::Value;

use super::Evaluate;

/// Evaluate a template to its value.
pub fn eval_template(
    segments: &[Segment],
    vars: &mut dyn VariableStore,
    ctx: &EvalContext,
) -> Result<Value> {
    // Raw substitution position: no conversion, no concatenation.
    if let [Segment::Expr(expr)] = segments {
        return expr.eval(vars, ctx);
    }

    let mut buf = String::new();
    for segment in segments {
        match segment {
            Segment::Text(text) => buf.push_str(text),
            Segment::Expr(expr) => {
                let v = expr.eval(vars, ctx)?;
                buf.push_str(&dispatch::stringify(ctx, &v)?);
            }
        }
    }
    Ok(Value::string(buf))
}

/// Rewrite a template into the equivalent expression tree:
/// `seg₀ + to_s(expr₁) + seg₁ + …`, left-associated, where `+` is
/// string concatenation and `to_s` the override-aware conversion.
pub fn expand(segments: &[Segment]) -> Expr {
    if let [Segment::Expr(expr)] = segments {
        return expr.clone();
    }

    let mut parts = segments.iter().map(|segment| match segment {
        Segment::Text(text) => Expr::str(text.clone()),
        Segment::Expr(expr) => Expr::Stringify(Box::new(expr.clone())),
    });

    let first = parts
        .next()
        .unwrap_or_else(|| Expr::Literal(Literal::Str(String::new())));
    parts.fold(first, |acc, part| Expr::binary(BinOp::Add, acc, part))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::environment::Environment;

    fn template(name: &str) -> Vec<Segment> {
        vec![
            Segment::Text("hello ".into()),
            Segment::Expr(Expr::var(name)),
            Segment::Text("!".into()),
        ]
    }

    #[test]
    fn test_template_fuses_text_and_values() {
        let mut env = Environment::new();
        let ctx = EvalContext::new();
        env.set("who", Value::string("world"));

        let v = eval_template(&template("who"), &mut env, &ctx).unwrap();
        assert_eq!(v, Value::string("hello world!"));
    }

    #[test]
    fn test_non_string_values_convert_with_to_s() {
        let mut env = Environment::new();
        let ctx = EvalContext::new();
        env.set("n", Value::Int(3));

        let segments = vec![
            Segment::Text("n=".into()),
            Segment::Expr(Expr::var("n")),
            Segment::Text(", nil=".into()),
            Segment::Expr(Expr::Literal(Literal::Nil)),
        ];
        let v = eval_template(&segments, &mut env, &ctx).unwrap();
        assert_eq!(v, Value::string("n=3, nil="));
    }

    #[test]
    fn test_raw_position_substitutes_unconverted() {
        let mut env = Environment::new();
        let ctx = EvalContext::new();
        env.set("k", Value::Int(7));

        let segments = vec![Segment::Expr(Expr::var("k"))];
        let v = eval_template(&segments, &mut env, &ctx).unwrap();
        assert_eq!(v, Value::Int(7));
    }

    #[test]
    fn test_empty_template_is_empty_string() {
        let mut env = Environment::new();
        let ctx = EvalContext::new();
        assert_eq!(
            eval_template(&[], &mut env, &ctx).unwrap(),
            Value::string("")
        );
    }

    #[test]
    fn test_expand_matches_evaluation() {
        let mut env = Environment::new();
        let ctx = EvalContext::new();
        env.set("who", Value::symbol("world"));

        let segments = template("who");
        let fused = eval_template(&segments, &mut env, &ctx).unwrap();
        let expanded = expand(&segments).eval(&mut env, &ctx).unwrap();
        assert_eq!(fused, expanded);
    }

    #[test]
    fn test_expand_raw_position_is_the_expression_itself() {
        let segments = vec![Segment::Expr(Expr::var("k"))];
        assert_eq!(expand(&segments), Expr::var("k"));
    }

    #[test]
    fn test_expand_evaluates_left_to_right() {
        let mut env = Environment::new();
        let ctx = EvalContext::new();

        // Each embedded expression reassigns `x`; left-to-right order
        // makes the rendering "12".
        let segments = vec![
            Segment::Expr(Expr::Assign {
                name: "x".into(),
                expr: Box::new(Expr::int(1)),
            }),
            Segment::Expr(Expr::Assign {
                name: "x".into(),
                expr: Box::new(Expr::int(2)),
            }),
        ];
        let fused = eval_template(&segments, &mut env, &ctx).unwrap();
        assert_eq!(fused, Value::string("12"));
        let expanded = expand(&segments).eval(&mut env, &ctx).unwrap();
        assert_eq!(expanded, Value::string("12"));
    }
}
