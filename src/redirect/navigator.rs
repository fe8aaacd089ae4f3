//! Navigation services.
//!
//! [`Navigator`] is the seam between the redirector and whatever owns the
//! address bar. Two implementations:
//! - `MemoryHistory`: in-process history stack (tests)
//! - [`ScriptNavigator`]: records browser statements for the page shell

/// Options for [`Navigator::navigate_to`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavigateOptions {
    /// Replace the current history entry instead of pushing a new one.
    pub replace: bool,
}

/// Owner of the current URL.
pub trait Navigator {
    /// Rewrite the address bar without adding a history entry or reloading.
    fn replace_current_url(&mut self, path: &str);

    /// Navigate to another route.
    fn navigate_to(&mut self, path: &str, options: NavigateOptions);
}

// ============================================================================
// MemoryHistory
// ============================================================================

/// History stack with browser semantics: push drops forward entries,
/// replace overwrites the current entry.
#[cfg(test)]
#[derive(Debug, Clone)]
pub struct MemoryHistory {
    entries: Vec<String>,
    cursor: usize,
    /// Writes that changed the visible URL.
    writes: usize,
}

#[cfg(test)]
impl MemoryHistory {
    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            entries: vec![initial.into()],
            cursor: 0,
            writes: 0,
        }
    }

    pub fn current(&self) -> &str {
        &self.entries[self.cursor]
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn writes(&self) -> usize {
        self.writes
    }

    pub fn push(&mut self, path: impl Into<String>) {
        self.entries.truncate(self.cursor + 1);
        self.entries.push(path.into());
        self.cursor += 1;
        self.writes += 1;
    }

    /// Overwrite the current entry. Replacing with the same URL is a no-op.
    pub fn replace(&mut self, path: impl Into<String>) {
        let path = path.into();
        if self.entries[self.cursor] != path {
            self.entries[self.cursor] = path;
            self.writes += 1;
        }
    }

    pub fn back(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        true
    }
}

#[cfg(test)]
impl Navigator for MemoryHistory {
    fn replace_current_url(&mut self, path: &str) {
        self.replace(path);
    }

    fn navigate_to(&mut self, path: &str, options: NavigateOptions) {
        if options.replace {
            self.replace(path);
        } else {
            self.push(path);
        }
    }
}

// ============================================================================
// ScriptNavigator
// ============================================================================

/// Collects navigation as JavaScript statements.
///
/// The page shell places [`ScriptNavigator::script`] at the end of `<body>`,
/// so the correction runs after the content has rendered.
#[derive(Debug, Clone, Default)]
pub struct ScriptNavigator {
    statements: Vec<String>,
}

impl ScriptNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub fn statements(&self) -> &[String] {
        &self.statements
    }

    /// Statements joined for a `<script>` element, `None` when empty.
    pub fn script(&self) -> Option<String> {
        (!self.statements.is_empty()).then(|| self.statements.join("\n"))
    }
}

impl Navigator for ScriptNavigator {
    fn replace_current_url(&mut self, path: &str) {
        let path = js_string(path);
        // Guarded so a re-run against an already-corrected URL is a no-op
        self.statements.push(format!(
            "if (location.pathname !== {path}) history.replaceState(history.state, \"\", {path} + location.search + location.hash);"
        ));
    }

    fn navigate_to(&mut self, path: &str, options: NavigateOptions) {
        let method = if options.replace { "replace" } else { "assign" };
        self.statements
            .push(format!("location.{method}({});", js_string(path)));
    }
}

/// JSON string literal that is also safe inside `<script>`.
fn js_string(value: &str) -> String {
    serde_json::Value::from(value)
        .to_string()
        .replace('<', "\\u003c")
        .replace('>', "\\u003e")
}
