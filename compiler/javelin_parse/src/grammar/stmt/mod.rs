//! Blocks and statements.
//!
//! Statement dispatch is a fixed-k decision table. Before it, a block
//! statement checks for a local class or a local variable declaration with
//! a probe, since `Type name` and an expression can share any number of
//! leading tokens (`a.b.C<D> x;` vs `a.b.c < d;`).

mod control;

use javelin_ir::{Node, NodeBuilder, NodeKind, TokenKind};

use crate::decision::{Alternative, DecisionTable, Pattern, Row};
use crate::memo::Probe;
use crate::stack::ensure_sufficient_stack;
use crate::stream::TokenStream;
use crate::token_set::TYPE_START;
use crate::{ParseError, Parser};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum StatementAlt {
    Block,
    Empty,
    Labeled,
    If,
    Assert,
    Switch,
    While,
    Do,
    For,
    Break,
    Continue,
    Return,
    Throw,
    Synchronized,
    Try,
    Expression,
}

impl Alternative for StatementAlt {
    fn name(self) -> &'static str {
        match self {
            StatementAlt::Block => "block",
            StatementAlt::Empty => "empty statement",
            StatementAlt::Labeled => "labeled statement",
            StatementAlt::If => "if statement",
            StatementAlt::Assert => "assert statement",
            StatementAlt::Switch => "switch statement",
            StatementAlt::While => "while statement",
            StatementAlt::Do => "do statement",
            StatementAlt::For => "for statement",
            StatementAlt::Break => "break statement",
            StatementAlt::Continue => "continue statement",
            StatementAlt::Return => "return statement",
            StatementAlt::Throw => "throw statement",
            StatementAlt::Synchronized => "synchronized statement",
            StatementAlt::Try => "try statement",
            StatementAlt::Expression => "expression statement",
        }
    }
}

macro_rules! keyword_row {
    ($kind:ident => $alt:ident) => {
        Row {
            pattern: &[Pattern::Kind(TokenKind::$kind)],
            alt: StatementAlt::$alt,
        }
    };
}

/// Everything not listed is an expression statement.
static STATEMENT_TABLE: DecisionTable<StatementAlt> = DecisionTable {
    name: "statement",
    rows: &[
        keyword_row!(LBrace => Block),
        keyword_row!(Semi => Empty),
        keyword_row!(If => If),
        keyword_row!(Assert => Assert),
        keyword_row!(Switch => Switch),
        keyword_row!(While => While),
        keyword_row!(Do => Do),
        keyword_row!(For => For),
        keyword_row!(Break => Break),
        keyword_row!(Continue => Continue),
        keyword_row!(Return => Return),
        keyword_row!(Throw => Throw),
        keyword_row!(Synchronized => Synchronized),
        keyword_row!(Try => Try),
        Row {
            pattern: &[Pattern::Kind(TokenKind::Ident), Pattern::Kind(TokenKind::Colon)],
            alt: StatementAlt::Labeled,
        },
    ],
    fallback: Some(StatementAlt::Expression),
};

impl<S: TokenStream> Parser<S> {
    /// `{ BlockStatement* }`
    pub fn block(&mut self) -> Result<Node, ParseError> {
        ensure_sufficient_stack(|| {
            let mut node = self.start(NodeKind::Block);
            self.expect(&mut node, TokenKind::LBrace)?;
            self.block_statements(&mut node)?;
            self.expect(&mut node, TokenKind::RBrace)?;
            Ok(node.finish())
        })
    }

    /// Block statements up to (not including) `}`, `case` or `default`.
    pub(crate) fn block_statements(&mut self, node: &mut NodeBuilder) -> Result<(), ParseError> {
        while !matches!(
            self.la(1),
            TokenKind::RBrace | TokenKind::Case | TokenKind::Default | TokenKind::Eof
        ) {
            node.push_node(self.block_statement()?);
        }
        Ok(())
    }

    /// A local class, a local variable declaration statement, or a
    /// statement.
    pub fn block_statement(&mut self) -> Result<Node, ParseError> {
        if self.local_class_ahead()? {
            let modifiers = self.modifiers()?;
            return self.class_declaration_rest(modifiers);
        }
        if self.local_variable_ahead()? {
            let mut node = self.start(NodeKind::LocalVariableDeclarationStatement);
            node.push_node(self.local_variable_declaration()?);
            self.expect(&mut node, TokenKind::Semi)?;
            return Ok(node.finish());
        }
        self.statement()
    }

    fn local_class_ahead(&mut self) -> Result<bool, ParseError> {
        match self.la(1) {
            TokenKind::Class => Ok(true),
            TokenKind::Abstract | TokenKind::Final | TokenKind::Strictfp | TokenKind::At => self
                .speculate(Probe::LocalClass, |p| {
                    p.modifiers()?;
                    let mut scratch = p.start(NodeKind::ClassDeclaration);
                    p.expect(&mut scratch, TokenKind::Class)
                }),
            _ => Ok(false),
        }
    }

    /// Whether `VariableModifier* Type Ident` starts here.
    pub(crate) fn local_variable_ahead(&mut self) -> Result<bool, ParseError> {
        if !self.at_any(TYPE_START.with(TokenKind::Final)) {
            return Ok(false);
        }
        self.speculate(Probe::LocalVariable, |p| {
            p.variable_modifiers()?;
            let mut scratch = p.start(NodeKind::VariableDeclarator);
            p.type_()?;
            p.expect(&mut scratch, TokenKind::Ident)
        })
    }

    /// `VariableModifier* Type VariableDeclarator (, VariableDeclarator)*`
    pub(crate) fn local_variable_declaration(&mut self) -> Result<Node, ParseError> {
        let mut node = self.start(NodeKind::LocalVariableDeclaration);
        node.push_node(self.variable_modifiers()?);
        node.push_node(self.type_()?);
        self.variable_declarators(&mut node)?;
        Ok(node.finish())
    }

    /// `VariableDeclarator (, VariableDeclarator)*` into `node`.
    pub(crate) fn variable_declarators(&mut self, node: &mut NodeBuilder) -> Result<(), ParseError> {
        loop {
            let mut declarator = self.start(NodeKind::VariableDeclarator);
            self.expect(&mut declarator, TokenKind::Ident)?;
            node.push_node(self.variable_declarator_rest(declarator)?);
            if !self.eat(node, TokenKind::Comma)? {
                return Ok(());
            }
        }
    }

    /// `Dims? (= VariableInitializer)?` after the declarator's name.
    pub(crate) fn variable_declarator_rest(
        &mut self,
        mut declarator: NodeBuilder,
    ) -> Result<Node, ParseError> {
        if self.dims_ahead()? {
            declarator.push_node(self.dims()?);
        }
        if self.eat(&mut declarator, TokenKind::Eq)? {
            declarator.push_node(self.variable_initializer()?);
        }
        Ok(declarator.finish())
    }

    /// Any statement except local declarations.
    pub(crate) fn statement(&mut self) -> Result<Node, ParseError> {
        ensure_sufficient_stack(|| self.statement_inner())
    }

    fn statement_inner(&mut self) -> Result<Node, ParseError> {
        let alt = STATEMENT_TABLE.predict(&self.stream, self.options.detect_ambiguity)?;
        match alt {
            StatementAlt::Block => self.block(),
            StatementAlt::Empty => {
                let mut node = self.start(NodeKind::EmptyStatement);
                self.bump_into(&mut node)?;
                Ok(node.finish())
            }
            StatementAlt::Labeled => {
                let mut node = self.start(NodeKind::LabeledStatement);
                self.bump_into(&mut node)?;
                self.bump_into(&mut node)?;
                node.push_node(self.statement()?);
                Ok(node.finish())
            }
            StatementAlt::If => self.if_statement(),
            StatementAlt::Assert => self.assert_statement(),
            StatementAlt::Switch => self.switch_statement(),
            StatementAlt::While => self.while_statement(),
            StatementAlt::Do => self.do_statement(),
            StatementAlt::For => self.for_statement(),
            StatementAlt::Break => self.jump_statement(NodeKind::BreakStatement),
            StatementAlt::Continue => self.jump_statement(NodeKind::ContinueStatement),
            StatementAlt::Return => self.return_statement(),
            StatementAlt::Throw => self.throw_statement(),
            StatementAlt::Synchronized => self.synchronized_statement(),
            StatementAlt::Try => self.try_statement(),
            StatementAlt::Expression => {
                let mut node = self.start(NodeKind::ExpressionStatement);
                node.push_node(self.expression()?);
                self.expect(&mut node, TokenKind::Semi)?;
                Ok(node.finish())
            }
        }
    }
}
