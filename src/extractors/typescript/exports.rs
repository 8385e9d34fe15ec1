//! Export declaration extraction
//!
//! Only top-level `export <declaration>` statements are considered. Default
//! exports, export clauses (`export { a }`), re-exports (`export * from`,
//! `export { a } from`), `export =` and `export as namespace` carry no
//! declaration of their own and are skipped.

use crate::error::IndexError;
use crate::extractors::base::{ExportKind, ExportedDeclaration};
use crate::extractors::typescript::TypeScriptExtractor;
use tree_sitter::{Node, Tree};

/// Collect every exported declaration at the top level of the file
pub(super) fn extract_export_declarations(
    extractor: &TypeScriptExtractor,
    tree: &Tree,
) -> Result<Vec<ExportedDeclaration>, IndexError> {
    let root = tree.root_node();
    let mut declarations = Vec::new();

    let mut cursor = root.walk();
    for statement in root.named_children(&mut cursor) {
        if statement.kind() != "export_statement" {
            continue;
        }

        let Some(declaration) = statement.child_by_field_name("declaration") else {
            continue;
        };

        // export default class/function ...
        if extractor
            .base()
            .find_child_by_type(&statement, "default")
            .is_some()
        {
            continue;
        }

        let Some((kind, name)) = classify_declaration(extractor, declaration)? else {
            continue;
        };

        declarations.push(ExportedDeclaration {
            name,
            kind,
            node_kind: declaration.kind().to_string(),
            start_line: extractor.base().line_of(&statement),
            doc_comment: extractor.base().find_doc_comment(&statement),
        });
    }

    Ok(declarations)
}

/// Decide whether a declaration is a symbol or a type export and find its name
///
/// Returns `Ok(None)` for declarations that bind nothing re-exportable
/// (a variable statement made only of destructuring patterns).
fn classify_declaration(
    extractor: &TypeScriptExtractor,
    declaration: Node,
) -> Result<Option<(ExportKind, String)>, IndexError> {
    match declaration.kind() {
        // Value-level exports
        "class_declaration"
        | "abstract_class_declaration"
        | "function_declaration"
        | "generator_function_declaration"
        | "function_signature" => {
            let name = declared_name(extractor, declaration)?;
            Ok(Some((ExportKind::Symbol, name)))
        }
        "lexical_declaration" | "variable_declaration" => {
            let names = variable_names(extractor, declaration);
            if names.is_empty() {
                Ok(None)
            } else {
                Ok(Some((ExportKind::Symbol, names.join(","))))
            }
        }

        // Type-level exports
        "type_alias_declaration" | "interface_declaration" => {
            let name = declared_name(extractor, declaration)?;
            Ok(Some((ExportKind::Type, name)))
        }
        "internal_module" | "module" => {
            let name = module_name(extractor, declaration)?;
            Ok(Some((ExportKind::Type, name)))
        }

        // export declare ...
        "ambient_declaration" => match declaration.named_child(0) {
            Some(inner) if inner.kind() != "statement_block" => {
                classify_declaration(extractor, inner)
            }
            _ => Err(unsupported(extractor, declaration)),
        },

        _ => Err(unsupported(extractor, declaration)),
    }
}

/// Text of the `name` field of a declaration
fn declared_name(extractor: &TypeScriptExtractor, declaration: Node) -> Result<String, IndexError> {
    declaration
        .child_by_field_name("name")
        .map(|name| extractor.base().get_node_text(&name))
        .ok_or_else(|| unsupported(extractor, declaration))
}

/// Identifier bindings of a `const`/`let`/`var` statement, in order
fn variable_names(extractor: &TypeScriptExtractor, declaration: Node) -> Vec<String> {
    extractor
        .base()
        .get_children_of_type(&declaration, "variable_declarator")
        .into_iter()
        .filter_map(|declarator| declarator.child_by_field_name("name"))
        .filter(|name| name.kind() == "identifier")
        .map(|name| extractor.base().get_node_text(&name))
        .collect()
}

/// Exported binding of `namespace A {}` / `module A.B {}`
///
/// Dotted names export their leftmost segment. String-named modules
/// (`declare module 'pkg'`) declare nothing importable.
fn module_name(extractor: &TypeScriptExtractor, declaration: Node) -> Result<String, IndexError> {
    let name = declaration
        .child_by_field_name("name")
        .ok_or_else(|| unsupported(extractor, declaration))?;

    match name.kind() {
        "identifier" => Ok(extractor.base().get_node_text(&name)),
        "nested_identifier" => {
            let text = extractor.base().get_node_text(&name);
            Ok(text.split('.').next().unwrap_or_default().trim().to_string())
        }
        _ => Err(unsupported(extractor, declaration)),
    }
}

fn unsupported(extractor: &TypeScriptExtractor, declaration: Node) -> IndexError {
    IndexError::UnsupportedDeclaration {
        path: extractor.base().file_path.clone(),
        kind: declaration.kind().to_string(),
        line: extractor.base().line_of(&declaration),
    }
}
