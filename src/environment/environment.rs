use tracing::debug;

use crate::errors::errors::ErrorImpl;

/// Selects which binding `lookup` returns when a name was declared more than once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LookupPolicy {
    /// The first declaration stays visible; later `let`s of the same name are
    /// recorded but never observed.
    #[default]
    OldestWins,
    /// The latest declaration shadows earlier ones.
    NewestWins,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Binding {
    pub name: String,
    pub value: f64,
}

/// Append-only, ordered table of every binding made during a run.
#[derive(Debug, Clone, Default)]
pub struct Environment {
    bindings: Vec<Binding>,
    policy: LookupPolicy,
}

impl Environment {
    pub fn new() -> Self {
        Environment::default()
    }

    pub fn with_policy(policy: LookupPolicy) -> Self {
        Environment {
            bindings: vec![],
            policy,
        }
    }

    pub fn policy(&self) -> LookupPolicy {
        self.policy
    }

    /// Appends a binding. Never fails and never replaces an existing one.
    pub fn define(&mut self, name: &str, value: f64) {
        debug!(name, value, slot = self.bindings.len(), "defined variable");
        self.bindings.push(Binding {
            name: name.to_string(),
            value,
        });
    }

    pub fn lookup(&self, name: &str) -> Result<f64, ErrorImpl> {
        let found = match self.policy {
            LookupPolicy::OldestWins => self.bindings.iter().find(|binding| binding.name == name),
            LookupPolicy::NewestWins => self.bindings.iter().rev().find(|binding| binding.name == name),
        };

        found.map(|binding| binding.value).ok_or_else(|| ErrorImpl::UndefinedVariable {
            variable: name.to_string(),
        })
    }

    pub fn bindings(&self) -> impl Iterator<Item = &Binding> {
        self.bindings.iter()
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}
