/// Operator classification, precedence and diagnostic formatting.
///
/// This module holds the small vocabulary both engine stages share: the
/// predicate deciding which characters are operators, the precedence table
/// used by the shunting-yard pass, and the helper that gives every positional
/// syntax diagnostic the same textual shape.
pub mod ops;
