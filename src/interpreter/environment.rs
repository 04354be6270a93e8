use crate::interpreter::value::Value;

/// One name binding in a scope.
#[derive(Debug)]
struct Binding<'a> {
    name: Box<str>,
    value: Value<'a>,
}

/// The scope stack mapping names to values.
///
/// A scope is pushed for every block and every function call and searched
/// from the innermost outward. Within one scope, redeclaring a name
/// appends a new binding that shadows the earlier one, so lookups scan
/// each scope backward.
pub struct Environment<'a> {
    scopes: Vec<Vec<Binding<'a>>>,
}

impl<'a> Environment<'a> {
    /// Creates an environment holding only the global scope.
    #[must_use]
    pub fn new() -> Self {
        Self {
            scopes: vec![Vec::new()],
        }
    }

    /// Whether only the global scope is open.
    #[must_use]
    pub fn is_global(&self) -> bool {
        self.scopes.len() == 1
    }

    /// Opens a new innermost scope.
    pub fn push_scope(&mut self) {
        self.scopes.push(Vec::new());
    }

    /// Closes the innermost scope, dropping its bindings.
    ///
    /// The global scope is never popped.
    pub fn pop_scope(&mut self) {
        if self.scopes.len() > 1 {
            self.scopes.pop();
        }
    }

    /// Declares `name` in the innermost scope.
    ///
    /// An existing binding of the same name is shadowed, not replaced;
    /// it becomes visible again once this scope closes.
    pub fn declare(&mut self, name: &str, value: Value<'a>) {
        if let Some(scope) = self.scopes.last_mut() {
            scope.push(Binding {
                name: name.into(),
                value,
            });
        }
    }

    /// Looks `name` up, innermost scope first.
    #[must_use]
    pub fn get(&self, name: &[u8]) -> Option<Value<'a>> {
        self.scopes.iter().rev().find_map(|scope| {
            scope
                .iter()
                .rev()
                .find(|binding| binding.name.as_bytes() == name)
                .map(|binding| binding.value)
        })
    }

    /// Reassigns the nearest binding of `name`.
    ///
    /// Returns `false` when no binding exists anywhere on the stack;
    /// assignment never creates one.
    pub fn assign(&mut self, name: &[u8], value: Value<'a>) -> bool {
        for scope in self.scopes.iter_mut().rev() {
            if let Some(binding) = scope
                .iter_mut()
                .rev()
                .find(|binding| binding.name.as_bytes() == name)
            {
                binding.value = value;
                return true;
            }
        }
        false
    }
}

impl Default for Environment<'_> {
    fn default() -> Self {
        Self::new()
    }
}
