//! Precision arithmetic

use anyhow::Result;
use clap::ValueEnum;
use handy_core::{precise_add, precise_div, precise_mul, precise_sub};

/// Arithmetic operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CalcOp {
    Add,
    Sub,
    Mul,
    Div,
}

impl CalcOp {
    pub fn apply(self, a: f64, b: f64) -> f64 {
        match self {
            CalcOp::Add => precise_add(a, b),
            CalcOp::Sub => precise_sub(a, b),
            CalcOp::Mul => precise_mul(a, b),
            CalcOp::Div => precise_div(a, b),
        }
    }
}

pub fn run(op: CalcOp, a: f64, b: f64) -> Result<()> {
    let result = op.apply(a, b);
    if !result.is_finite() {
        tracing::warn!("{:?} of {} and {} is not finite", op, a, b);
    }
    println!("{}", result);
    Ok(())
}
