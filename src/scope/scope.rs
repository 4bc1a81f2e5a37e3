use std::collections::HashMap;

use log::debug;

use crate::errors::errors::ErrorImpl;

/// Name to type bindings of a single block.
#[derive(Debug, Default, Clone)]
pub struct Scope {
    variable_lookup: HashMap<String, String>,
}

impl Scope {
    pub fn new() -> Self {
        Scope {
            variable_lookup: HashMap::new(),
        }
    }

    /// Binds `name` to `variable_type`. The first binding of a name wins.
    pub fn declare(&mut self, name: String, variable_type: String) -> Result<(), ErrorImpl> {
        if self.variable_lookup.contains_key(&name) {
            Err(ErrorImpl::AlreadyDeclared { name })
        } else {
            self.variable_lookup.insert(name, variable_type);
            Ok(())
        }
    }

    pub fn lookup_local(&self, name: &str) -> Option<&str> {
        self.variable_lookup.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.variable_lookup.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variable_lookup.is_empty()
    }
}

/// Open scopes, index 0 being the outermost block.
#[derive(Debug, Default)]
pub struct ScopeStack {
    scopes: Vec<Scope>,
}

impl ScopeStack {
    pub fn new() -> Self {
        ScopeStack { scopes: vec![] }
    }

    pub fn push_new(&mut self) {
        self.scopes.push(Scope::new());
        debug!("opened scope at depth {}", self.scopes.len());
    }

    /// Closes the innermost scope, dropping its bindings.
    pub fn pop(&mut self) -> Option<Scope> {
        let scope = self.scopes.pop();
        debug!("closed scope at depth {}", self.scopes.len() + 1);
        scope
    }

    pub fn depth(&self) -> usize {
        self.scopes.len()
    }

    pub fn innermost(&self) -> Option<&Scope> {
        self.scopes.last()
    }

    /// Declares `name` in the innermost scope only.
    ///
    /// Fails with `DeclarationOutsideBlock` when no block is open.
    pub fn declare(&mut self, name: String, variable_type: String) -> Result<(), ErrorImpl> {
        let depth = self.scopes.len();
        match self.scopes.last_mut() {
            Some(scope) => {
                debug!("declaring {}: {} at depth {}", name, variable_type, depth);
                scope.declare(name, variable_type)
            }
            None => Err(ErrorImpl::DeclarationOutsideBlock { name }),
        }
    }

    /// Finds the type of `name`, searching from the innermost scope outwards.
    pub fn resolve(&self, name: &str) -> Option<&str> {
        self.scopes
            .iter()
            .rev()
            .find_map(|scope| scope.lookup_local(name))
    }
}
