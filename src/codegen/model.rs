//! Language-neutral method descriptors.
//!
//! A [`GeneratedMethod`] describes one compilable routine: signature, body
//! statements, and documentation. The tree carries no target-language
//! syntax; rendering is the emission backend's concern.

use serde::{Deserialize, Serialize};

/// Where a generated method is visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Visibility {
    /// Restricted to the generated source unit.
    Private,
    Public,
}

/// A type reference in a generated signature.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TypeRef {
    Text,
    Boolean,
    /// The two-variant statement outcome: no result, or a table of rows.
    QueryOutcome,
    /// Ordered list of text values.
    TextList,
    /// Ordered text-to-text mapping.
    TextMap,
    /// Ordered list of (key, value) text pairs.
    PairList,
    /// Handle to a statement's result cursor.
    ResultHandle,
    /// Any other named type.
    Named(String),
}

/// A named, typed method parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parameter {
    pub name: String,
    pub ty: TypeRef,
}

impl Parameter {
    pub fn new(name: impl Into<String>, ty: TypeRef) -> Self {
        Self {
            name: name.into(),
            ty,
        }
    }
}

/// One body statement or control-flow block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Stmt {
    /// A single line of code.
    Line(String),
    /// A source comment.
    Comment(String),
    If {
        condition: String,
        then_block: Vec<Stmt>,
        else_block: Vec<Stmt>,
    },
    While {
        condition: String,
        body: Vec<Stmt>,
    },
    ForEach {
        binding: String,
        iterable: String,
        body: Vec<Stmt>,
    },
    /// Counted loop over an inclusive range.
    ForRange {
        binding: String,
        from: String,
        to: String,
        body: Vec<Stmt>,
    },
    /// Scoped acquisition: the resource is released on every exit path of
    /// `body`, including after a thrown failure.
    WithResource {
        binding: String,
        acquire: String,
        body: Vec<Stmt>,
    },
    Return(String),
}

impl Stmt {
    pub fn line(text: impl Into<String>) -> Self {
        Stmt::Line(text.into())
    }

    pub fn comment(text: impl Into<String>) -> Self {
        Stmt::Comment(text.into())
    }

    pub fn ret(expr: impl Into<String>) -> Self {
        Stmt::Return(expr.into())
    }
}

/// The substitutability view of a method: everything a caller compiles
/// against. Two methods with equal signatures are drop-in replacements for
/// each other.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodSignature {
    pub name: String,
    pub parameters: Vec<Parameter>,
    pub return_type: TypeRef,
    pub throws: Vec<String>,
}

/// A structured, compilable routine description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedMethod {
    pub name: String,
    pub visibility: Visibility,
    pub is_static: bool,
    pub parameters: Vec<Parameter>,
    pub return_type: TypeRef,
    /// Declared checked failure type names.
    pub throws: Vec<String>,
    pub doc: String,
    pub body: Vec<Stmt>,
}

impl GeneratedMethod {
    /// A private static method, the default shape of generated helpers.
    pub fn new(name: impl Into<String>, return_type: TypeRef) -> Self {
        Self {
            name: name.into(),
            visibility: Visibility::Private,
            is_static: true,
            parameters: Vec::new(),
            return_type,
            throws: Vec::new(),
            doc: String::new(),
            body: Vec::new(),
        }
    }

    pub fn visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    pub fn param(mut self, name: impl Into<String>, ty: TypeRef) -> Self {
        self.parameters.push(Parameter::new(name, ty));
        self
    }

    pub fn fails_with(mut self, failure_type: impl Into<String>) -> Self {
        self.throws.push(failure_type.into());
        self
    }

    pub fn doc(mut self, text: impl Into<String>) -> Self {
        self.doc = text.into();
        self
    }

    pub fn stmt(mut self, stmt: Stmt) -> Self {
        self.body.push(stmt);
        self
    }

    /// The signature callers compile against.
    pub fn signature(&self) -> MethodSignature {
        MethodSignature {
            name: self.name.clone(),
            parameters: self.parameters.clone(),
            return_type: self.return_type.clone(),
            throws: self.throws.clone(),
        }
    }
}
