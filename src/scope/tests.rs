//! Unit tests for scopes and the scope stack.

use super::scope::{Scope, ScopeStack};
use crate::errors::errors::ErrorImpl;

#[test]
fn test_scope_declare_and_lookup() {
    let mut scope = Scope::new();

    assert!(scope.is_empty());
    scope.declare(String::from("x"), String::from("int")).unwrap();

    assert_eq!(scope.lookup_local("x"), Some("int"));
    assert_eq!(scope.lookup_local("y"), None);
    assert_eq!(scope.len(), 1);
}

#[test]
fn test_scope_redeclaration_keeps_first_binding() {
    let mut scope = Scope::new();
    scope.declare(String::from("x"), String::from("int")).unwrap();

    let result = scope.declare(String::from("x"), String::from("bool"));

    assert_eq!(
        result,
        Err(ErrorImpl::AlreadyDeclared {
            name: String::from("x")
        })
    );
    assert_eq!(scope.lookup_local("x"), Some("int"));
}

#[test]
fn test_stack_resolves_innermost_first() {
    let mut stack = ScopeStack::new();
    stack.push_new();
    stack.declare(String::from("x"), String::from("int")).unwrap();
    stack.declare(String::from("y"), String::from("char")).unwrap();
    stack.push_new();
    stack.declare(String::from("x"), String::from("bool")).unwrap();

    assert_eq!(stack.resolve("x"), Some("bool"));
    assert_eq!(stack.resolve("y"), Some("char"));
    assert_eq!(stack.resolve("z"), None);
}

#[test]
fn test_stack_resolve_leaves_stack_untouched() {
    let mut stack = ScopeStack::new();
    stack.push_new();
    stack.declare(String::from("a"), String::from("int")).unwrap();
    stack.push_new();
    stack.push_new();

    assert_eq!(stack.resolve("a"), Some("int"));
    assert_eq!(stack.resolve("missing"), None);
    assert_eq!(stack.depth(), 3);
    assert!(stack.innermost().unwrap().is_empty());
}

#[test]
fn test_stack_declare_only_checks_innermost() {
    let mut stack = ScopeStack::new();
    stack.push_new();
    stack.declare(String::from("x"), String::from("int")).unwrap();
    stack.push_new();

    assert!(stack.declare(String::from("x"), String::from("char")).is_ok());
    assert!(stack.declare(String::from("x"), String::from("char")).is_err());
}

#[test]
fn test_stack_pop_drops_bindings() {
    let mut stack = ScopeStack::new();
    stack.push_new();
    stack.declare(String::from("x"), String::from("int")).unwrap();
    stack.push_new();
    stack.declare(String::from("x"), String::from("bool")).unwrap();

    let popped = stack.pop().unwrap();
    assert_eq!(popped.lookup_local("x"), Some("bool"));
    assert_eq!(stack.resolve("x"), Some("int"));

    stack.pop();
    assert_eq!(stack.depth(), 0);
    assert_eq!(stack.resolve("x"), None);
    assert!(stack.pop().is_none());
}

#[test]
fn test_stack_declare_without_open_scope() {
    let mut stack = ScopeStack::new();

    let result = stack.declare(String::from("x"), String::from("int"));

    assert_eq!(
        result,
        Err(ErrorImpl::DeclarationOutsideBlock {
            name: String::from("x")
        })
    );
    assert_eq!(stack.depth(), 0);
}
