use deriv_parser::{
    domain::Domain,
    parser::{ast::Unary, token::op::UnaryOpKind},
};
use crate::{ctxt::Bindings, eval::Eval};

impl<T: Domain> Eval<T> for Unary<T> {
    fn eval(&self, ctxt: &Bindings<T>) -> Option<T> {
        let operand = self.operand.eval(ctxt)?;
        Some(match self.op {
            UnaryOpKind::Neg => -operand,
            UnaryOpKind::Sin => operand.sin(),
            UnaryOpKind::Cos => operand.cos(),
            UnaryOpKind::Ln => operand.ln(),
            UnaryOpKind::Exp => operand.exp(),
        })
    }
}
