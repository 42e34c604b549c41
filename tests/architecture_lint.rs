//! Architecture enforcement lint - ensures `UiState` is only mutated by the store.
//!
//! The UI store is the single owner of `UiState`. Every change must go through
//! one of its actions so the root layout class, persistence and the UI bus stay
//! consistent with the state.
//!
//! This test parses every source file and flags assignments to `UiState` fields
//! reached through a `state` binding or field (`self.state.layout = ..`,
//! `state.is_drawer_open = ..`) anywhere outside `src/layout/store.rs`.

use std::fs;
use std::path::Path;
use syn::visit::Visit;
use syn::{Expr, ExprAssign, File, Member};
use walkdir::WalkDir;

/// Fields of `UiState`
const UI_STATE_FIELDS: &[&str] = &[
    "layout",
    "effective_layout",
    "viewport",
    "orientation",
    "is_drawer_open",
    "is_search_open",
    "is_loading",
];

/// Files allowed to assign `UiState` fields
const ALLOWED_FILES: &[&str] = &["layout/store.rs"];

struct StateAssignVisitor {
    current_file: String,
    violations: Vec<(String, String)>,
}

impl StateAssignVisitor {
    fn new(file: String) -> Self {
        Self {
            current_file: file,
            violations: Vec::new(),
        }
    }
}

/// Whether `expr` names a binding or field called `state`
fn is_state_expr(expr: &Expr) -> bool {
    match expr {
        Expr::Path(path) => path.path.is_ident("state"),
        Expr::Field(field) => matches!(&field.member, Member::Named(name) if name == "state"),
        Expr::Paren(paren) => is_state_expr(&paren.expr),
        Expr::Unary(unary) => is_state_expr(&unary.expr),
        _ => false,
    }
}

impl<'ast> Visit<'ast> for StateAssignVisitor {
    fn visit_expr_assign(&mut self, assign: &'ast ExprAssign) {
        if let Expr::Field(field) = &*assign.left {
            if let Member::Named(name) = &field.member {
                let name = name.to_string();
                if UI_STATE_FIELDS.contains(&name.as_str()) && is_state_expr(&field.base) {
                    self.violations.push((
                        self.current_file.clone(),
                        format!("direct assignment to UiState::{}", name),
                    ));
                }
            }
        }
        syn::visit::visit_expr_assign(self, assign);
    }
}

fn analyze_source(file: &str, content: &str) -> Vec<(String, String)> {
    let syntax: File = match syn::parse_file(content) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Warning: Failed to parse {}: {}", file, e);
            return vec![];
        }
    };

    let mut visitor = StateAssignVisitor::new(file.to_string());
    visitor.visit_file(&syntax);
    visitor.violations
}

#[test]
fn detects_assignment_outside_store() {
    let bad_code = r#"
        fn open(ctx: &mut Ctx) {
            ctx.store.state.is_drawer_open = true;
        }
    "#;
    let violations = analyze_source("app/header.rs", bad_code);
    assert_eq!(violations.len(), 1);
    assert!(violations[0].1.contains("is_drawer_open"));
}

#[test]
fn ignores_unrelated_fields() {
    let good_code = r#"
        fn resize(config: &mut Config, plan: &mut Plan) {
            config.layout = Layout::Grid;
            plan.state.width = 3;
        }
    "#;
    assert!(analyze_source("app/header.rs", good_code).is_empty());
}

#[test]
fn ui_state_is_only_assigned_by_the_store() {
    let src_dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("src");

    let mut all_violations = Vec::new();

    for entry in WalkDir::new(&src_dir)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.path().extension().is_some_and(|ext| ext == "rs"))
    {
        let path = entry.path().display().to_string().replace('\\', "/");
        if ALLOWED_FILES.iter().any(|allowed| path.ends_with(allowed)) {
            continue;
        }
        let Ok(content) = fs::read_to_string(entry.path()) else {
            continue;
        };
        all_violations.extend(analyze_source(&path, &content));
    }

    if !all_violations.is_empty() {
        let mut error_msg = String::from(
            "\n\n\
            ╔══════════════════════════════════════════════════════════════════════════════╗\n\
            ║  ARCHITECTURE VIOLATION: UiState must only change through UiStore actions    ║\n\
            ╚══════════════════════════════════════════════════════════════════════════════╝\n\n\
            Call set_layout / set_viewport / toggle_drawer / toggle_search /\n\
            set_is_loading instead of writing fields directly, so the root class,\n\
            persisted preference and UI bus stay in step.\n\n\
            Violations found:\n\n",
        );

        for (location, violation) in &all_violations {
            error_msg.push_str(&format!("  {}: {}\n", location, violation));
        }

        panic!("{}", error_msg);
    }
}

#[test]
fn store_owns_ui_state() {
    let store = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("src")
        .join("layout")
        .join("store.rs");

    let content = fs::read_to_string(&store).expect("Failed to read layout/store.rs");

    assert!(
        content.contains("pub struct UiStore {\n    state: UiState,"),
        "UiStore must own a private `state: UiState` field"
    );
}
