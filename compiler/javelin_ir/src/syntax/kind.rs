//! Syntax node kinds, one per Java 8 grammar rule the parser reifies.

use super::{AssignOp, BinaryOp, LiteralKind, PostfixOp, UnaryOp};

/// The kind of a syntax tree node.
///
/// Expression kinds carry their operator as payload so consumers never have
/// to re-inspect child tokens to learn which operator was applied.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum NodeKind {
    // Compilation units
    CompilationUnit,
    PackageDeclaration,
    ImportDeclaration,

    // Type declarations
    ClassDeclaration,
    EnumDeclaration,
    InterfaceDeclaration,
    AnnotationTypeDeclaration,
    Superclass,
    Superinterfaces,
    ExtendsInterfaces,
    ClassBody,
    EnumBody,
    EnumConstant,
    InterfaceBody,
    AnnotationTypeBody,

    // Members
    FieldDeclaration,
    VariableDeclarator,
    ArrayInitializer,
    MethodDeclaration,
    ConstructorDeclaration,
    ConstructorBody,
    ExplicitConstructorInvocation,
    FormalParameters,
    FormalParameter,
    ReceiverParameter,
    Throws,
    InstanceInitializer,
    StaticInitializer,
    AnnotationTypeElementDeclaration,
    DefaultValue,

    // Modifiers and annotations
    Modifiers,
    Annotation,
    ElementValuePair,
    ElementValueArrayInitializer,

    // Types
    PrimitiveType,
    ClassType,
    ArrayType,
    Dims,
    TypeArguments,
    Diamond,
    Wildcard,
    TypeParameters,
    TypeParameter,
    TypeBound,
    AdditionalBound,

    // Statements
    Block,
    LocalVariableDeclarationStatement,
    LocalVariableDeclaration,
    EmptyStatement,
    LabeledStatement,
    ExpressionStatement,
    IfStatement,
    AssertStatement,
    SwitchStatement,
    SwitchBlockStatementGroup,
    SwitchLabel,
    WhileStatement,
    DoStatement,
    ForStatement,
    ForInit,
    ForUpdate,
    EnhancedForStatement,
    BreakStatement,
    ContinueStatement,
    ReturnStatement,
    ThrowStatement,
    SynchronizedStatement,
    TryStatement,
    ResourceSpecification,
    Resource,
    CatchClause,
    CatchType,
    Finally,

    // Expressions
    Name,
    Literal(LiteralKind),
    This,
    Super,
    Parenthesized,
    ClassLiteral,
    FieldAccess,
    ArrayAccess,
    MethodInvocation,
    ArgumentList,
    MethodReference,
    ClassInstanceCreation,
    ArrayCreation,
    DimExpr,
    Lambda,
    LambdaParameters,
    Cast,
    Unary(UnaryOp),
    Postfix(PostfixOp),
    Binary(BinaryOp),
    InstanceOf,
    Conditional,
    Assign(AssignOp),
}

impl NodeKind {
    /// True for kinds produced by the expression rules.
    pub const fn is_expression(self) -> bool {
        matches!(
            self,
            NodeKind::Name
                | NodeKind::Literal(_)
                | NodeKind::This
                | NodeKind::Parenthesized
                | NodeKind::ClassLiteral
                | NodeKind::FieldAccess
                | NodeKind::ArrayAccess
                | NodeKind::MethodInvocation
                | NodeKind::MethodReference
                | NodeKind::ClassInstanceCreation
                | NodeKind::ArrayCreation
                | NodeKind::Lambda
                | NodeKind::Cast
                | NodeKind::Unary(_)
                | NodeKind::Postfix(_)
                | NodeKind::Binary(_)
                | NodeKind::InstanceOf
                | NodeKind::Conditional
                | NodeKind::Assign(_)
        )
    }

    /// True for the three forms that may appear left of an assignment
    /// operator.
    pub const fn is_assignable(self) -> bool {
        matches!(
            self,
            NodeKind::Name | NodeKind::FieldAccess | NodeKind::ArrayAccess
        )
    }
}
