//! Expression tests.

use pretty_assertions::assert_eq;

use super::{expr, expr_error, ty};
use crate::token_set::UNARY_EXPR_START;
use crate::ParseErrorKind;
use javelin_ir::TokenKind;

#[test]
fn test_multiplication_binds_tighter() {
    assert_eq!(
        expr("1 + 2 * 3"),
        "(Binary(Add) (Literal(Integer) 1) + (Binary(Mul) (Literal(Integer) 2) * (Literal(Integer) 3)))"
    );
}

#[test]
fn test_binary_operators_are_left_associative() {
    assert_eq!(
        expr("a - b - c"),
        "(Binary(Sub) (Binary(Sub) (Name a) - (Name b)) - (Name c))"
    );
}

#[test]
fn test_assignment_is_right_associative() {
    assert_eq!(
        expr("a = b = c"),
        "(Assign(Assign) (Name a) = (Assign(Assign) (Name b) = (Name c)))"
    );
    assert_eq!(
        expr("a[i] += 1"),
        "(Assign(Add) (ArrayAccess (Name a) [ (Name i) ]) += (Literal(Integer) 1))"
    );
}

#[test]
fn test_conditional_nests_in_else_branch() {
    assert_eq!(
        expr("a ? b : c ? d : e"),
        "(Conditional (Name a) ? (Name b) : (Conditional (Name c) ? (Name d) : (Name e)))"
    );
}

#[test]
fn test_dotted_name_is_one_node() {
    assert_eq!(expr("a.b.c"), "(Name a . b . c)");
}

#[test]
fn test_method_invocation_vs_name() {
    assert_eq!(expr("foo"), "(Name foo)");
    assert_eq!(expr("foo()"), "(MethodInvocation (Name foo) (ArgumentList ( )))");
    assert_eq!(
        expr("a.b(1, 2)"),
        "(MethodInvocation (Name a . b) (ArgumentList ( (Literal(Integer) 1) , (Literal(Integer) 2) )))"
    );
}

#[test]
fn test_selector_chain() {
    assert_eq!(
        expr("a().b.c()"),
        "(MethodInvocation (FieldAccess (MethodInvocation (Name a) (ArgumentList ( ))) . b) . c (ArgumentList ( )))"
    );
    assert_eq!(
        expr("a[i][j]"),
        "(ArrayAccess (ArrayAccess (Name a) [ (Name i) ]) [ (Name j) ])"
    );
}

#[test]
fn test_explicit_type_arguments_on_call() {
    assert_eq!(
        expr("Collections.<String>emptyList()"),
        "(MethodInvocation (Name Collections) . (TypeArguments < (ClassType String) >) emptyList (ArgumentList ( )))"
    );
}

#[test]
fn test_literal_kinds() {
    assert_eq!(expr("'c'"), "(Literal(Character) 'c')");
    assert_eq!(expr("\"s\""), "(Literal(String) \"s\")");
    assert_eq!(expr("1.5f"), "(Literal(Floating) 1.5f)");
    assert_eq!(expr("0x1p3"), "(Literal(Floating) 0x1p3)");
    assert_eq!(expr("true"), "(Literal(Boolean) true)");
    assert_eq!(expr("null"), "(Literal(Null) null)");
}

#[test]
fn test_parenthesized_then_binary_minus() {
    assert_eq!(
        expr("(a) - b"),
        "(Binary(Sub) (Parenthesized ( (Name a) )) - (Name b))"
    );
    assert_eq!(
        expr("(a) + b"),
        "(Binary(Add) (Parenthesized ( (Name a) )) + (Name b))"
    );
}

#[test]
fn test_primitive_cast_takes_signed_operand() {
    assert_eq!(
        expr("(int) -b"),
        "(Cast ( (PrimitiveType int) ) (Unary(Minus) - (Name b)))"
    );
}

#[test]
fn test_reference_casts() {
    assert_eq!(
        expr("(a)(b)"),
        "(Cast ( (ClassType a) ) (Parenthesized ( (Name b) )))"
    );
    assert_eq!(expr("(Foo) bar"), "(Cast ( (ClassType Foo) ) (Name bar))");
    assert_eq!(
        expr("(a) !b"),
        "(Cast ( (ClassType a) ) (Unary(Not) ! (Name b)))"
    );
    assert_eq!(
        expr("(int[]) o"),
        "(Cast ( (ArrayType (PrimitiveType int) (Dims [ ])) ) (Name o))"
    );
    assert_eq!(
        expr("(A & B) x"),
        "(Cast ( (ClassType A) (AdditionalBound & (ClassType B)) ) (Name x))"
    );
    assert_eq!(
        expr("(List<String>) x"),
        "(Cast ( (ClassType List (TypeArguments < (ClassType String) >)) ) (Name x))"
    );
}

#[test]
fn test_relational_in_parentheses_is_not_a_cast() {
    assert_eq!(
        expr("(a < b)"),
        "(Parenthesized ( (Binary(Lt) (Name a) < (Name b)) ))"
    );
}

#[test]
fn test_lambda_forms() {
    assert_eq!(
        expr("x -> x + 1"),
        "(Lambda (LambdaParameters x) -> (Binary(Add) (Name x) + (Literal(Integer) 1)))"
    );
    assert_eq!(
        expr("(x) -> y"),
        "(Lambda (LambdaParameters ( x )) -> (Name y))"
    );
    assert_eq!(
        expr("(a, b) -> a"),
        "(Lambda (LambdaParameters ( a , b )) -> (Name a))"
    );
    assert_eq!(
        expr("(int a, String b) -> {}"),
        "(Lambda (LambdaParameters ( (FormalParameter (Modifiers) (PrimitiveType int) a) , \
         (FormalParameter (Modifiers) (ClassType String) b) )) -> (Block { }))"
    );
}

#[test]
fn test_cast_of_lambda() {
    assert_eq!(
        expr("(Runnable) () -> {}"),
        "(Cast ( (ClassType Runnable) ) (Lambda (LambdaParameters ( )) -> (Block { })))"
    );
}

#[test]
fn test_lambda_in_conditional_else_branch() {
    assert_eq!(
        expr("c ? x -> 1 : y -> 2"),
        "(Conditional (Name c) ? (Lambda (LambdaParameters x) -> (Literal(Integer) 1)) : \
         (Lambda (LambdaParameters y) -> (Literal(Integer) 2)))"
    );
}

#[test]
fn test_adjacent_angle_tokens_form_shifts() {
    assert_eq!(expr("a >> b"), "(Binary(Shr) (Name a) > > (Name b))");
    assert_eq!(expr("a >>> b"), "(Binary(UShr) (Name a) > > > (Name b))");
    assert_eq!(expr("a << b"), "(Binary(Shl) (Name a) < < (Name b))");
    assert_eq!(
        expr("a + b >> c"),
        "(Binary(Shr) (Binary(Add) (Name a) + (Name b)) > > (Name c))"
    );
    assert_eq!(expr("a >>= b"), "(Assign(Shr) (Name a) >>= (Name b))");
}

#[test]
fn test_separated_angle_tokens_are_not_shifts() {
    let err = expr_error("a > > b");
    assert_eq!(
        err.kind,
        ParseErrorKind::UnexpectedToken {
            expected: UNARY_EXPR_START,
            found: TokenKind::Gt,
        }
    );
}

#[test]
fn test_nested_generic_type_closes_on_single_tokens() {
    assert_eq!(
        ty("List<List<String>>"),
        "(ClassType List (TypeArguments < (ClassType List (TypeArguments < (ClassType String) >)) >))"
    );
    assert_eq!(
        ty("Map<? extends K, ? super V>"),
        "(ClassType Map (TypeArguments < (Wildcard ? extends (ClassType K)) , (Wildcard ? super (ClassType V)) >))"
    );
}

#[test]
fn test_instanceof_sits_at_relational_level() {
    assert_eq!(
        expr("a instanceof List<String> && b"),
        "(Binary(And) (InstanceOf (Name a) instanceof (ClassType List (TypeArguments < (ClassType String) >))) && (Name b))"
    );
}

#[test]
fn test_generic_method_reference_vs_relational() {
    assert_eq!(
        expr("List<String>::size"),
        "(MethodReference (ClassType List (TypeArguments < (ClassType String) >)) :: size)"
    );
    assert_eq!(expr("a < b"), "(Binary(Lt) (Name a) < (Name b))");
}

#[test]
fn test_method_references() {
    assert_eq!(expr("String::valueOf"), "(MethodReference (Name String) :: valueOf)");
    assert_eq!(
        expr("int[]::new"),
        "(MethodReference (ArrayType (PrimitiveType int) (Dims [ ])) :: new)"
    );
    assert_eq!(expr("super::foo"), "(MethodReference (Super super) :: foo)");
    assert_eq!(expr("this::foo"), "(MethodReference (This this) :: foo)");
}

#[test]
fn test_class_literals() {
    assert_eq!(expr("int.class"), "(ClassLiteral (PrimitiveType int) . class)");
    assert_eq!(
        expr("String[].class"),
        "(ClassLiteral (ArrayType (ClassType String) (Dims [ ])) . class)"
    );
    assert_eq!(
        expr("java.lang.String.class"),
        "(ClassLiteral (ClassType java . lang . String) . class)"
    );
    assert_eq!(expr("void.class"), "(ClassLiteral void . class)");
}

#[test]
fn test_qualified_this_and_super() {
    assert_eq!(
        expr("Outer.this.x"),
        "(FieldAccess (This (Name Outer) . this) . x)"
    );
    assert_eq!(
        expr("Outer.super.m()"),
        "(MethodInvocation (Super (Name Outer) . super) . m (ArgumentList ( )))"
    );
}

#[test]
fn test_instance_creation() {
    assert_eq!(
        expr("new ArrayList<>()"),
        "(ClassInstanceCreation new (ClassType ArrayList (Diamond < >)) (ArgumentList ( )))"
    );
    assert_eq!(
        expr("outer.new Inner()"),
        "(ClassInstanceCreation (Name outer) . new (ClassType Inner) (ArgumentList ( )))"
    );
    assert_eq!(
        expr("new Runnable() { }"),
        "(ClassInstanceCreation new (ClassType Runnable) (ArgumentList ( )) (ClassBody { }))"
    );
}

#[test]
fn test_array_creation() {
    assert_eq!(
        expr("new int[3][]"),
        "(ArrayCreation new (PrimitiveType int) (DimExpr [ (Literal(Integer) 3) ]) (Dims [ ]))"
    );
    assert_eq!(
        expr("new int[] {1, 2}"),
        "(ArrayCreation new (PrimitiveType int) (Dims [ ]) (ArrayInitializer { (Literal(Integer) 1) , (Literal(Integer) 2) }))"
    );
    // No array access directly on a creation with dimension expressions.
    assert_eq!(
        expr("new int[3].length"),
        "(FieldAccess (ArrayCreation new (PrimitiveType int) (DimExpr [ (Literal(Integer) 3) ])) . length)"
    );
}

#[test]
fn test_prefix_and_postfix() {
    assert_eq!(
        expr("-x++"),
        "(Unary(Minus) - (Postfix(Increment) (Name x) ++))"
    );
    assert_eq!(expr("!~a"), "(Unary(Not) ! (Unary(BitNot) ~ (Name a)))");
}
