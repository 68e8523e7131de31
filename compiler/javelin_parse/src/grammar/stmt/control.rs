//! Compound and control-flow statements.

use javelin_ir::{Node, NodeBuilder, NodeKind, TokenKind};

use crate::memo::Probe;
use crate::stream::TokenStream;
use crate::{ParseError, Parser, TokenSet};

impl<S: TokenStream> Parser<S> {
    /// `( Expression )` into `node`.
    fn paren_condition(&mut self, node: &mut NodeBuilder) -> Result<(), ParseError> {
        self.expect(node, TokenKind::LParen)?;
        node.push_node(self.expression()?);
        self.expect(node, TokenKind::RParen)
    }

    /// `if ( Expression ) Statement (else Statement)?`
    ///
    /// A dangling `else` binds to the nearest `if`.
    pub(super) fn if_statement(&mut self) -> Result<Node, ParseError> {
        let mut node = self.start(NodeKind::IfStatement);
        self.expect(&mut node, TokenKind::If)?;
        self.paren_condition(&mut node)?;
        node.push_node(self.statement()?);
        if self.eat(&mut node, TokenKind::Else)? {
            node.push_node(self.statement()?);
        }
        Ok(node.finish())
    }

    /// `assert Expression (: Expression)? ;`
    pub(super) fn assert_statement(&mut self) -> Result<Node, ParseError> {
        let mut node = self.start(NodeKind::AssertStatement);
        self.expect(&mut node, TokenKind::Assert)?;
        node.push_node(self.expression()?);
        if self.eat(&mut node, TokenKind::Colon)? {
            node.push_node(self.expression()?);
        }
        self.expect(&mut node, TokenKind::Semi)?;
        Ok(node.finish())
    }

    /// `switch ( Expression ) { SwitchBlockStatementGroup* SwitchLabel* }`
    pub(super) fn switch_statement(&mut self) -> Result<Node, ParseError> {
        let mut node = self.start(NodeKind::SwitchStatement);
        self.expect(&mut node, TokenKind::Switch)?;
        self.paren_condition(&mut node)?;
        self.expect(&mut node, TokenKind::LBrace)?;
        loop {
            match self.la(1) {
                TokenKind::Case | TokenKind::Default => {}
                TokenKind::RBrace => break,
                _ => {
                    return Err(self.unexpected(TokenSet::of(&[
                        TokenKind::Case,
                        TokenKind::Default,
                        TokenKind::RBrace,
                    ])));
                }
            }
            let mut group = self.start(NodeKind::SwitchBlockStatementGroup);
            while matches!(self.la(1), TokenKind::Case | TokenKind::Default) {
                group.push_node(self.switch_label()?);
            }
            self.block_statements(&mut group)?;
            // Labels with no statements before `}` stay as a bare group.
            node.push_node(group.finish());
        }
        self.expect(&mut node, TokenKind::RBrace)?;
        Ok(node.finish())
    }

    /// `case ConstantExpression :` or `default :`
    fn switch_label(&mut self) -> Result<Node, ParseError> {
        let mut node = self.start(NodeKind::SwitchLabel);
        if self.eat(&mut node, TokenKind::Case)? {
            node.push_node(self.conditional_expression()?);
        } else {
            self.expect(&mut node, TokenKind::Default)?;
        }
        self.expect(&mut node, TokenKind::Colon)?;
        Ok(node.finish())
    }

    /// `while ( Expression ) Statement`
    pub(super) fn while_statement(&mut self) -> Result<Node, ParseError> {
        let mut node = self.start(NodeKind::WhileStatement);
        self.expect(&mut node, TokenKind::While)?;
        self.paren_condition(&mut node)?;
        node.push_node(self.statement()?);
        Ok(node.finish())
    }

    /// `do Statement while ( Expression ) ;`
    pub(super) fn do_statement(&mut self) -> Result<Node, ParseError> {
        let mut node = self.start(NodeKind::DoStatement);
        self.expect(&mut node, TokenKind::Do)?;
        node.push_node(self.statement()?);
        self.expect(&mut node, TokenKind::While)?;
        self.paren_condition(&mut node)?;
        self.expect(&mut node, TokenKind::Semi)?;
        Ok(node.finish())
    }

    /// Basic or enhanced `for`. The two share `for (` and then an arbitrary
    /// type; the enhanced form is confirmed by probing for the `:`.
    pub(super) fn for_statement(&mut self) -> Result<Node, ParseError> {
        let mut node = self.start(NodeKind::ForStatement);
        self.expect(&mut node, TokenKind::For)?;
        self.expect(&mut node, TokenKind::LParen)?;

        if self.enhanced_for_ahead()? {
            node.set_kind(NodeKind::EnhancedForStatement);
            node.push_node(self.variable_modifiers()?);
            node.push_node(self.type_()?);
            self.expect(&mut node, TokenKind::Ident)?;
            if self.dims_ahead()? {
                node.push_node(self.dims()?);
            }
            self.expect(&mut node, TokenKind::Colon)?;
            node.push_node(self.expression()?);
            self.expect(&mut node, TokenKind::RParen)?;
            node.push_node(self.statement()?);
            return Ok(node.finish());
        }

        if !self.at(TokenKind::Semi) {
            let mut init = self.start(NodeKind::ForInit);
            if self.local_variable_ahead()? {
                init.push_node(self.local_variable_declaration()?);
            } else {
                self.expression_list(&mut init)?;
            }
            node.push_node(init.finish());
        }
        self.expect(&mut node, TokenKind::Semi)?;
        if !self.at(TokenKind::Semi) {
            node.push_node(self.expression()?);
        }
        self.expect(&mut node, TokenKind::Semi)?;
        if !self.at(TokenKind::RParen) {
            let mut update = self.start(NodeKind::ForUpdate);
            self.expression_list(&mut update)?;
            node.push_node(update.finish());
        }
        self.expect(&mut node, TokenKind::RParen)?;
        node.push_node(self.statement()?);
        Ok(node.finish())
    }

    fn enhanced_for_ahead(&mut self) -> Result<bool, ParseError> {
        self.speculate(Probe::EnhancedFor, |p| {
            p.variable_modifiers()?;
            p.type_()?;
            let mut scratch = p.start(NodeKind::VariableDeclarator);
            p.expect(&mut scratch, TokenKind::Ident)?;
            if p.dims_ahead()? {
                p.dims()?;
            }
            p.expect(&mut scratch, TokenKind::Colon)
        })
    }

    /// `Expression (, Expression)*` into `node`.
    fn expression_list(&mut self, node: &mut NodeBuilder) -> Result<(), ParseError> {
        loop {
            node.push_node(self.expression()?);
            if !self.eat(node, TokenKind::Comma)? {
                return Ok(());
            }
        }
    }

    /// `break Ident? ;` or `continue Ident? ;`
    pub(super) fn jump_statement(&mut self, kind: NodeKind) -> Result<Node, ParseError> {
        let mut node = self.start(kind);
        self.bump_into(&mut node)?;
        self.eat(&mut node, TokenKind::Ident)?;
        self.expect(&mut node, TokenKind::Semi)?;
        Ok(node.finish())
    }

    /// `return Expression? ;`
    pub(super) fn return_statement(&mut self) -> Result<Node, ParseError> {
        let mut node = self.start(NodeKind::ReturnStatement);
        self.expect(&mut node, TokenKind::Return)?;
        if !self.at(TokenKind::Semi) {
            node.push_node(self.expression()?);
        }
        self.expect(&mut node, TokenKind::Semi)?;
        Ok(node.finish())
    }

    /// `throw Expression ;`
    pub(super) fn throw_statement(&mut self) -> Result<Node, ParseError> {
        let mut node = self.start(NodeKind::ThrowStatement);
        self.expect(&mut node, TokenKind::Throw)?;
        node.push_node(self.expression()?);
        self.expect(&mut node, TokenKind::Semi)?;
        Ok(node.finish())
    }

    /// `synchronized ( Expression ) Block`
    pub(super) fn synchronized_statement(&mut self) -> Result<Node, ParseError> {
        let mut node = self.start(NodeKind::SynchronizedStatement);
        self.expect(&mut node, TokenKind::Synchronized)?;
        self.paren_condition(&mut node)?;
        node.push_node(self.block()?);
        Ok(node.finish())
    }

    /// `try ResourceSpecification? Block CatchClause* Finally?`
    ///
    /// Without resources at least one `catch` or the `finally` is required.
    pub(super) fn try_statement(&mut self) -> Result<Node, ParseError> {
        let mut node = self.start(NodeKind::TryStatement);
        self.expect(&mut node, TokenKind::Try)?;
        let has_resources = self.at(TokenKind::LParen);
        if has_resources {
            node.push_node(self.resource_specification()?);
        }
        node.push_node(self.block()?);
        let mut handlers = 0usize;
        while self.at(TokenKind::Catch) {
            node.push_node(self.catch_clause()?);
            handlers += 1;
        }
        if self.at(TokenKind::Finally) {
            let mut finally = self.start(NodeKind::Finally);
            self.bump_into(&mut finally)?;
            finally.push_node(self.block()?);
            node.push_node(finally.finish());
            handlers += 1;
        }
        if handlers == 0 && !has_resources {
            return Err(self
                .unexpected(TokenSet::of(&[TokenKind::Catch, TokenKind::Finally]))
                .with_context("a try statement without resources needs a catch or finally"));
        }
        Ok(node.finish())
    }

    /// `( Resource (; Resource)* ;? )`
    fn resource_specification(&mut self) -> Result<Node, ParseError> {
        let mut node = self.start(NodeKind::ResourceSpecification);
        self.expect(&mut node, TokenKind::LParen)?;
        loop {
            node.push_node(self.resource()?);
            if !self.eat(&mut node, TokenKind::Semi)? || self.at(TokenKind::RParen) {
                break;
            }
        }
        self.expect(&mut node, TokenKind::RParen)?;
        Ok(node.finish())
    }

    /// `VariableModifier* Type Ident = Expression`
    fn resource(&mut self) -> Result<Node, ParseError> {
        let mut node = self.start(NodeKind::Resource);
        node.push_node(self.variable_modifiers()?);
        node.push_node(self.type_()?);
        self.expect(&mut node, TokenKind::Ident)?;
        self.expect(&mut node, TokenKind::Eq)?;
        node.push_node(self.expression()?);
        Ok(node.finish())
    }

    /// `catch ( VariableModifier* CatchType Ident ) Block`
    fn catch_clause(&mut self) -> Result<Node, ParseError> {
        let mut node = self.start(NodeKind::CatchClause);
        self.expect(&mut node, TokenKind::Catch)?;
        self.expect(&mut node, TokenKind::LParen)?;
        node.push_node(self.variable_modifiers()?);
        let mut catch_type = self.start(NodeKind::CatchType);
        loop {
            catch_type.push_node(self.class_type()?);
            if !self.eat(&mut catch_type, TokenKind::Pipe)? {
                break;
            }
        }
        node.push_node(catch_type.finish());
        self.expect(&mut node, TokenKind::Ident)?;
        self.expect(&mut node, TokenKind::RParen)?;
        node.push_node(self.block()?);
        Ok(node.finish())
    }
}
