// Construction operators. Each one computes the forward value eagerly and
// records its operands in an `Operation`, whose backward rule lives in
// `autograd::operation`.
pub mod arithmetic;
pub mod math_elem;
