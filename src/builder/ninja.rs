//! Ninja build description model.
//!
//! The description is assembled in memory as a value and rendered in one go
//! via [`fmt::Display`]; nothing here touches the filesystem.

use std::fmt;
use std::path::{Component, Path};

/// A `rule` block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    pub name: String,
    pub command: String,
    /// Depfile path pattern, usually derived from `$out`
    pub depfile: Option<String>,
    pub description: Option<String>,
}

impl Rule {
    /// Create a rule with the given command.
    pub fn new(name: impl Into<String>, command: impl Into<String>) -> Self {
        Rule {
            name: name.into(),
            command: command.into(),
            depfile: None,
            description: None,
        }
    }

    /// Set the depfile pattern.
    pub fn depfile(mut self, depfile: impl Into<String>) -> Self {
        self.depfile = Some(depfile.into());
        self
    }

    /// Set the progress description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// A `build` statement. Paths are stored unescaped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildStatement {
    pub outputs: Vec<String>,
    pub rule: String,
    pub inputs: Vec<String>,
}

impl BuildStatement {
    /// Create a build statement with a single output.
    pub fn new(output: impl Into<String>, rule: impl Into<String>) -> Self {
        BuildStatement {
            outputs: vec![output.into()],
            rule: rule.into(),
            inputs: Vec::new(),
        }
    }

    /// Add an explicit input.
    pub fn input(mut self, input: impl Into<String>) -> Self {
        self.inputs.push(input.into());
        self
    }

    /// Add multiple explicit inputs.
    pub fn inputs(mut self, inputs: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.inputs.extend(inputs.into_iter().map(Into::into));
        self
    }
}

/// A complete ninja file: variables, then rules, then build statements.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildDescription {
    header: Option<String>,
    variables: Vec<(String, String)>,
    rules: Vec<Rule>,
    builds: Vec<BuildStatement>,
}

impl BuildDescription {
    /// Create an empty description.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a comment emitted at the top of the file.
    pub fn set_header(&mut self, header: impl Into<String>) {
        self.header = Some(header.into());
    }

    /// Add a top-level variable assignment.
    pub fn variable(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.variables.push((name.into(), value.into()));
    }

    /// Add a rule.
    pub fn rule(&mut self, rule: Rule) {
        self.rules.push(rule);
    }

    /// Add a build statement.
    pub fn build(&mut self, build: BuildStatement) {
        self.builds.push(build);
    }

    /// Value of a top-level variable.
    pub fn get_variable(&self, name: &str) -> Option<&str> {
        self.variables
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Rule by name.
    pub fn get_rule(&self, name: &str) -> Option<&Rule> {
        self.rules.iter().find(|r| r.name == name)
    }

    /// Build statements using the given rule.
    pub fn builds_using<'a>(&'a self, rule: &'a str) -> impl Iterator<Item = &'a BuildStatement> {
        self.builds.iter().filter(move |b| b.rule == rule)
    }
}

impl fmt::Display for BuildDescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(ref header) = self.header {
            for line in header.lines() {
                writeln!(f, "# {}", line)?;
            }
            writeln!(f)?;
        }

        for (name, value) in &self.variables {
            if value.is_empty() {
                writeln!(f, "{} =", name)?;
            } else {
                writeln!(f, "{} = {}", name, value)?;
            }
        }

        for rule in &self.rules {
            writeln!(f)?;
            writeln!(f, "rule {}", rule.name)?;
            if let Some(ref depfile) = rule.depfile {
                writeln!(f, "  depfile = {}", depfile)?;
            }
            writeln!(f, "  command = {}", rule.command)?;
            if let Some(ref description) = rule.description {
                writeln!(f, "  description = {}", description)?;
            }
        }

        if !self.builds.is_empty() {
            writeln!(f)?;
        }
        for build in &self.builds {
            write!(f, "build")?;
            for output in &build.outputs {
                write!(f, " {}", escape_path(output))?;
            }
            write!(f, ": {}", build.rule)?;
            for input in &build.inputs {
                write!(f, " {}", escape_path(input))?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}

/// Escape a path for a `build` line.
///
/// `$`, space and `:` are significant in build statements and get a `$`
/// prefix.
pub fn escape_path(path: &str) -> String {
    let mut escaped = String::with_capacity(path.len());
    for c in path.chars() {
        if matches!(c, '$' | ' ' | ':') {
            escaped.push('$');
        }
        escaped.push(c);
    }
    escaped
}

/// Escape text placed in a variable value, where only `$` is significant.
pub fn escape_variable(value: &str) -> String {
    value.replace('$', "$$")
}

/// Render a relative path with `/` separators regardless of host.
pub fn ninja_path(path: &Path) -> String {
    let mut parts = Vec::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            // "/x" on unix, "C:/x" after a drive prefix
            Component::RootDir => {
                if parts.is_empty() {
                    parts.push(String::new());
                }
            }
            other => parts.push(other.as_os_str().to_string_lossy().into_owned()),
        }
    }
    parts.join("/")
}
