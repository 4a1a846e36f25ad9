use std::fmt::Display;

/// A station as served by one line. The same station name on two lines is two distinct nodes.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Station {
    pub name: Box<str>,
    pub line: Box<str>,
}

impl Station {
    pub fn new(name: &str, line: &str) -> Self {
        Self {
            name: Box::from(name),
            line: Box::from(line),
        }
    }

    // Node identifier, e.g. "Bishan (NS)".
    pub fn id(&self) -> String {
        format!("{} ({})", self.name, self.line)
    }
}

impl Display for Station {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.line)
    }
}
