//! Syntactic candidate scan.
//!
//! The scanner keeps only method declarations that carry at least one
//! attribute. It never consults semantic information, so it stays cheap
//! enough to re-run on every evaluation. The walk is lazy and restartable:
//! calling [`candidates`] again starts a fresh traversal.

use crate::{Declaration, MethodDecl, SourceUnit};

/// A scanned method together with the scopes that enclose it.
///
/// Scope chains are ordered outermost to innermost, built while walking the
/// declaration tree, so later stages never have to chase parent links.
#[derive(Debug, Clone)]
pub struct Candidate<'a> {
    /// Path of the unit the method was found in.
    pub unit: &'a str,
    /// Enclosing namespaces, outermost first.
    pub namespaces: Vec<&'a str>,
    /// Enclosing types, outermost first.
    pub types: Vec<&'a str>,
    pub method: &'a MethodDecl,
}

/// Lazily walk a unit and yield its attribute-bearing methods in source order.
pub fn candidates(unit: &SourceUnit) -> Candidates<'_> {
    let mut stack = Vec::with_capacity(unit.declarations.len());
    for decl in unit.declarations.iter().rev() {
        stack.push(Frame::Node(decl));
    }
    Candidates {
        unit: &unit.path,
        stack,
        namespaces: Vec::new(),
        types: Vec::new(),
    }
}

enum Frame<'a> {
    Node(&'a Declaration),
    LeaveNamespace,
    LeaveType,
}

/// Depth-first iterator over a unit's candidates.
pub struct Candidates<'a> {
    unit: &'a str,
    stack: Vec<Frame<'a>>,
    namespaces: Vec<&'a str>,
    types: Vec<&'a str>,
}

impl<'a> Iterator for Candidates<'a> {
    type Item = Candidate<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(frame) = self.stack.pop() {
            match frame {
                Frame::LeaveNamespace => {
                    self.namespaces.pop();
                }
                Frame::LeaveType => {
                    self.types.pop();
                }
                Frame::Node(Declaration::Namespace { name, members }) => {
                    self.namespaces.push(name);
                    self.stack.push(Frame::LeaveNamespace);
                    for member in members.iter().rev() {
                        self.stack.push(Frame::Node(member));
                    }
                }
                Frame::Node(Declaration::Type { name, members }) => {
                    self.types.push(name);
                    self.stack.push(Frame::LeaveType);
                    for member in members.iter().rev() {
                        self.stack.push(Frame::Node(member));
                    }
                }
                Frame::Node(Declaration::Method(method)) => {
                    if method.has_attributes() {
                        return Some(Candidate {
                            unit: self.unit,
                            namespaces: self.namespaces.clone(),
                            types: self.types.clone(),
                            method,
                        });
                    }
                }
            }
        }
        None
    }
}
