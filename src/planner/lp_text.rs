use std::fmt::Write;

use crate::planner::builder::lp_identifier;
use crate::planner::model::LinearProgramSpec;

/// Render a program in CPLEX LP format.
///
/// Variables default to `[0, +inf)` in this format, so a `Bounds` section is
/// only written for variables that differ.
pub fn to_lp_text(lp: &LinearProgramSpec) -> String {
    let mut out = String::new();
    let names: Vec<&str> = lp.variables().iter().map(|v| v.name.as_str()).collect();

    let _ = writeln!(out, "\\* {} *\\", lp.name());
    let _ = writeln!(out, "Minimize");
    let _ = writeln!(out, "OBJ: {}", linear_expr(lp.objective(), &names));

    let _ = writeln!(out, "Subject To");
    for row in lp.rows() {
        let _ = writeln!(
            out,
            "{}: {} {} {}",
            lp_identifier(&row.name),
            linear_expr(&row.coefficients, &names),
            row.relation.symbol(),
            format_number(row.rhs)
        );
    }

    let bounded: Vec<_> = lp
        .variables()
        .iter()
        .filter(|v| v.lower != 0.0 || v.upper.is_finite())
        .collect();
    if !bounded.is_empty() {
        let _ = writeln!(out, "Bounds");
        for v in bounded {
            let lower = if v.lower.is_finite() {
                format_number(v.lower)
            } else {
                "-inf".to_string()
            };
            let upper = if v.upper.is_finite() {
                format_number(v.upper)
            } else {
                "+inf".to_string()
            };
            let _ = writeln!(out, "{} <= {} <= {}", lower, v.name, upper);
        }
    }

    let _ = writeln!(out, "End");
    out
}

/// `c1 x1 + c2 x2 - ...`, skipping zero terms. An all-zero expression is
/// written as `0 <first variable>` so the row stays parseable.
fn linear_expr(coefficients: &[f64], names: &[&str]) -> String {
    let mut expr = String::new();
    for (c, name) in coefficients.iter().zip(names) {
        if *c == 0.0 {
            continue;
        }
        if expr.is_empty() {
            if *c < 0.0 {
                expr.push('-');
            }
        } else {
            expr.push_str(if *c < 0.0 { " - " } else { " + " });
        }
        let _ = write!(expr, "{} {}", format_number(c.abs()), name);
    }

    if expr.is_empty() {
        match names.first() {
            Some(first) => format!("0 {}", first),
            None => "0".to_string(),
        }
    } else {
        expr
    }
}

fn format_number(value: f64) -> String {
    format!("{}", value)
}
