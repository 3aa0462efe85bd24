use crate::Loc;

/// Trait implemented by all AST node types.
///
/// Node structs implement it via `#[inherent] impl AstNode`, so the
/// methods are callable without importing the trait while still being
/// usable as a bound for generic utilities. Enums dispatch to their
/// variants.
pub trait AstNode {
    /// The source range this node was parsed from, or `None` when parsed
    /// with [`ParseOptions::no_location`](crate::ParseOptions::no_location).
    fn loc(&self) -> Option<&Loc>;

    /// Append this node's original source text to `sink`.
    ///
    /// Appends nothing when the node has no [`Loc`].
    fn append_source(&self, sink: &mut String) {
        if let Some(loc) = self.loc() {
            sink.push_str(loc.source_slice());
        }
    }

    /// Return this node's original source text.
    fn to_source(&self) -> String {
        let mut s = String::new();
        self.append_source(&mut s);
        s
    }
}

/// Implements [`AstNode`] for structs carrying a `loc: Option<Loc>` field.
macro_rules! impl_ast_node {
    ($($node:ty),* $(,)?) => {
        $(
            #[inherent::inherent]
            impl $crate::ast::AstNode for $node {
                pub fn loc(&self) -> Option<&$crate::Loc> {
                    self.loc.as_ref()
                }
                pub fn append_source(&self, sink: &mut String);
                pub fn to_source(&self) -> String;
            }
        )*
    };
}

/// Implements [`AstNode`] for enums whose variants each wrap one node.
macro_rules! impl_ast_node_for_enum {
    ($node:ident { $($variant:ident),* $(,)? }) => {
        #[inherent::inherent]
        impl $crate::ast::AstNode for $node {
            pub fn loc(&self) -> Option<&$crate::Loc> {
                match self {
                    $($node::$variant(inner) => inner.loc(),)*
                }
            }
            pub fn append_source(&self, sink: &mut String);
            pub fn to_source(&self) -> String;
        }
    };
}

pub(crate) use impl_ast_node;
pub(crate) use impl_ast_node_for_enum;
