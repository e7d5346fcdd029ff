use deriv_parser::{
    domain::Domain,
    parser::{ast::Binary, token::op::BinOpKind},
};
use crate::{ctxt::Bindings, eval::Eval};

impl<T: Domain> Eval<T> for Binary<T> {
    fn eval(&self, ctxt: &Bindings<T>) -> Option<T> {
        let left = self.lhs.eval(ctxt)?;
        let right = self.rhs.eval(ctxt)?;
        Some(match self.op {
            BinOpKind::Add => left + right,
            BinOpKind::Sub => left - right,
            BinOpKind::Mul => left * right,
            BinOpKind::Div => left / right,
            BinOpKind::Exp => left.pow(right),
        })
    }
}
