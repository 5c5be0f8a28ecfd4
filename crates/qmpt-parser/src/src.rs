use internment::Intern;
use std::{
    fmt,
    path::{Component, Path},
};

/// Identifies the source a span points into (a file path, the command line, ...)
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct SrcId(Intern<Vec<String>>);

impl SrcId {
    pub fn empty() -> Self {
        Self(Intern::new(Vec::new()))
    }

    /// Goals typed on the command line
    pub fn command_line() -> Self {
        Self(Intern::new(vec!["<command line>".to_string()]))
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Self {
        Self(Intern::new(
            path.as_ref()
                .components()
                .map(|component| match component {
                    // joined with `/`, an empty first segment renders as `/...`
                    Component::RootDir => String::new(),
                    other => other.as_os_str().to_string_lossy().into_owned(),
                })
                .collect(),
        ))
    }
}

impl fmt::Display for SrcId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            write!(f, "?")
        } else {
            write!(f, "{}", self.0.join("/"))
        }
    }
}

impl fmt::Debug for SrcId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}
