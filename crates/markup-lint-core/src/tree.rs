//! Data model for JSX-like markup trees.
//!
//! Trees are supplied whole by the embedding host (an existing parser); this
//! crate never parses source text. Node kinds the checker does not understand
//! map to [`Node::Opaque`] / [`Expression::Other`] and are ignored by rules.

use serde::{Deserialize, Serialize};

/// Source span of a node within the host document.
///
/// Hosts that track positions fill this in for diagnostic reporting; a
/// zeroed span is valid and simply produces location-less diagnostics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span {
    /// Line number (1-indexed, 0 if unknown).
    pub line: usize,
    /// Column number (1-indexed, 0 if unknown).
    pub column: usize,
    /// Byte offset from the start of the document.
    pub offset: usize,
    /// Length of the span in bytes.
    pub length: usize,
}

impl Span {
    /// Creates a new span.
    #[must_use]
    pub fn new(line: usize, column: usize, offset: usize, length: usize) -> Self {
        Self {
            line,
            column,
            offset,
            length,
        }
    }
}

/// A raw text node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Text {
    /// Text content, whitespace preserved as parsed.
    pub value: String,
    /// Source span.
    #[serde(default)]
    pub span: Span,
}

impl Text {
    /// Returns true if the trimmed value is non-empty.
    ///
    /// This is the whitespace rule that decides whether a text node counts
    /// as a meaningful child: indentation and newlines between elements are
    /// parsed as text nodes but do not render anything.
    #[must_use]
    pub fn is_meaningful(&self) -> bool {
        !self.value.trim().is_empty()
    }
}

/// An expression embedded in markup position (`{expr}` in JSX).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpressionSlot {
    /// The embedded expression.
    pub expression: Expression,
    /// Source span of the whole `{...}` slot.
    #[serde(default)]
    pub span: Span,
}

/// A named element with an ordered child sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Element {
    /// Tag name (e.g., "div", "span").
    pub name: String,
    /// Children in document order.
    pub children: Vec<Node>,
    /// Source span.
    #[serde(default)]
    pub span: Span,
}

impl Element {
    /// Returns a container view of this element.
    #[must_use]
    pub fn as_container(&self) -> ContainerRef<'_> {
        ContainerRef {
            kind: ContainerKind::Element { name: &self.name },
            children: &self.children,
            span: self.span,
        }
    }
}

/// An anonymous fragment (`<>...</>`) with an ordered child sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fragment {
    /// Children in document order.
    pub children: Vec<Node>,
    /// Source span.
    #[serde(default)]
    pub span: Span,
}

impl Fragment {
    /// Returns a container view of this fragment.
    #[must_use]
    pub fn as_container(&self) -> ContainerRef<'_> {
        ContainerRef {
            kind: ContainerKind::Fragment,
            children: &self.children,
            span: self.span,
        }
    }
}

/// A node in the markup tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum Node {
    /// Raw text.
    Text(Text),
    /// An embedded expression (`{expr}`).
    ExpressionSlot(ExpressionSlot),
    /// A named element.
    Element(Element),
    /// An anonymous fragment.
    Fragment(Fragment),
    /// Any host node kind the linter does not model (e.g., comments).
    Opaque,
}

impl Node {
    /// Creates a text node.
    #[must_use]
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(Text {
            value: value.into(),
            span: Span::default(),
        })
    }

    /// Creates an element node.
    #[must_use]
    pub fn element(name: impl Into<String>, children: Vec<Node>) -> Self {
        Self::Element(Element {
            name: name.into(),
            children,
            span: Span::default(),
        })
    }

    /// Creates a fragment node.
    #[must_use]
    pub fn fragment(children: Vec<Node>) -> Self {
        Self::Fragment(Fragment {
            children,
            span: Span::default(),
        })
    }

    /// Creates an expression slot node.
    #[must_use]
    pub fn slot(expression: Expression) -> Self {
        Self::ExpressionSlot(ExpressionSlot {
            expression,
            span: Span::default(),
        })
    }

    /// Sets the source span on this node. No-op for [`Node::Opaque`].
    #[must_use]
    pub fn with_span(mut self, span: Span) -> Self {
        match &mut self {
            Self::Text(t) => t.span = span,
            Self::ExpressionSlot(s) => s.span = span,
            Self::Element(e) => e.span = span,
            Self::Fragment(f) => f.span = span,
            Self::Opaque => {}
        }
        self
    }

    /// Returns the source span of this node.
    #[must_use]
    pub fn span(&self) -> Span {
        match self {
            Self::Text(t) => t.span,
            Self::ExpressionSlot(s) => s.span,
            Self::Element(e) => e.span,
            Self::Fragment(f) => f.span,
            Self::Opaque => Span::default(),
        }
    }

    /// Returns a container view if this node owns children.
    #[must_use]
    pub fn as_container(&self) -> Option<ContainerRef<'_>> {
        match self {
            Self::Element(e) => Some(e.as_container()),
            Self::Fragment(f) => Some(f.as_container()),
            _ => None,
        }
    }
}

/// Discriminates the two container kinds in a [`ContainerRef`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContainerKind<'a> {
    /// A named element.
    Element {
        /// Tag name.
        name: &'a str,
    },
    /// An anonymous fragment.
    Fragment,
}

/// Borrowed view of a container node: its kind, children, and span.
///
/// Rules receive one of these per container and only ever look at the child
/// list; recursion into nested containers is the analyzer's job.
#[derive(Debug, Clone, Copy)]
pub struct ContainerRef<'a> {
    /// Element or fragment.
    pub kind: ContainerKind<'a>,
    /// Children in document order.
    pub children: &'a [Node],
    /// Source span of the container node.
    pub span: Span,
}

/// The operator of a [`Expression::Logical`] expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LogicalOp {
    /// `&&`
    And,
    /// `||`
    Or,
    /// `??`
    NullishCoalescing,
}

/// A literal value appearing in expression position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LiteralValue {
    /// String literal.
    Str(String),
    /// Numeric literal.
    Number(f64),
    /// Boolean literal.
    Bool(bool),
    /// `null`
    Null,
}

/// A literal expression.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Literal {
    /// The literal value.
    pub value: LiteralValue,
}

/// An expression inside an [`ExpressionSlot`].
///
/// Only the shapes the linter classifies are modeled; everything else is
/// [`Expression::Other`]. Unrecognized shapes are never treated as
/// conditional rendering, so hosts may map unknown constructs to `Other`
/// without producing false positives.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum Expression {
    /// A literal value (renders as a text node).
    Literal(Literal),
    /// An identifier reference, kept for readability of host trees.
    Ident {
        /// Identifier name.
        name: String,
    },
    /// A binary logical expression.
    Logical {
        /// The operator.
        op: LogicalOp,
        /// Left operand.
        left: Box<Expression>,
        /// Right operand.
        right: Box<Expression>,
    },
    /// A ternary conditional expression.
    Conditional {
        /// Condition.
        test: Box<Expression>,
        /// Value when the condition is truthy.
        consequent: Box<Expression>,
        /// Value when the condition is falsy.
        alternate: Box<Expression>,
    },
    /// An element in expression position (e.g., the arm of a ternary).
    Element(Element),
    /// Any expression shape the linter does not model.
    Other,
}

impl Expression {
    /// Creates a string literal expression.
    #[must_use]
    pub fn str_lit(value: impl Into<String>) -> Self {
        Self::Literal(Literal {
            value: LiteralValue::Str(value.into()),
        })
    }

    /// Creates a numeric literal expression.
    #[must_use]
    pub fn number(value: f64) -> Self {
        Self::Literal(Literal {
            value: LiteralValue::Number(value),
        })
    }

    /// Creates an identifier expression.
    #[must_use]
    pub fn ident(name: impl Into<String>) -> Self {
        Self::Ident { name: name.into() }
    }

    /// Creates an `&&` expression.
    #[must_use]
    pub fn and(left: Expression, right: Expression) -> Self {
        Self::Logical {
            op: LogicalOp::And,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    /// Creates an `||` expression.
    #[must_use]
    pub fn or(left: Expression, right: Expression) -> Self {
        Self::Logical {
            op: LogicalOp::Or,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    /// Creates a ternary conditional expression.
    #[must_use]
    pub fn ternary(test: Expression, consequent: Expression, alternate: Expression) -> Self {
        Self::Conditional {
            test: Box::new(test),
            consequent: Box::new(consequent),
            alternate: Box::new(alternate),
        }
    }

    /// Creates an element expression.
    #[must_use]
    pub fn element(name: impl Into<String>, children: Vec<Node>) -> Self {
        Self::Element(Element {
            name: name.into(),
            children,
            span: Span::default(),
        })
    }

    /// Returns true if this expression is exactly a literal.
    #[must_use]
    pub fn is_literal(&self) -> bool {
        matches!(self, Self::Literal(_))
    }
}
