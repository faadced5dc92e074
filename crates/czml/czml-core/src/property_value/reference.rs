use std::fmt;
use std::str::FromStr;

use crate::error::DecodeError;

/// Link to a property of another packet: `"targetId#property.sub"`.
///
/// `#` and `\` are escaped with a backslash in the id; path segments also
/// escape `.`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Reference {
    pub id: String,
    pub path: Vec<String>,
}

impl Reference {
    pub fn new(id: impl Into<String>, path: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            id: id.into(),
            path: path.into_iter().map(Into::into).collect(),
        }
    }
}

impl FromStr for Reference {
    type Err = DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || DecodeError::InvalidReference(s.to_string());

        let mut id: Option<String> = None;
        let mut path = Vec::new();
        let mut current = String::new();
        let mut chars = s.chars();
        while let Some(c) = chars.next() {
            match c {
                '\\' => current.push(chars.next().ok_or_else(invalid)?),
                '#' if id.is_none() => id = Some(std::mem::take(&mut current)),
                '.' if id.is_some() => path.push(std::mem::take(&mut current)),
                '#' => return Err(invalid()),
                other => current.push(other),
            }
        }
        let id = id.ok_or_else(invalid)?;
        path.push(current);
        if id.is_empty() || path.iter().any(String::is_empty) {
            return Err(invalid());
        }
        Ok(Self { id, path })
    }
}

fn write_escaped(f: &mut fmt::Formatter<'_>, part: &str, escape_dot: bool) -> fmt::Result {
    for c in part.chars() {
        if matches!(c, '#' | '\\') || (escape_dot && c == '.') {
            f.write_str("\\")?;
        }
        write!(f, "{c}")?;
    }
    Ok(())
}

impl fmt::Display for Reference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_escaped(f, &self.id, false)?;
        f.write_str("#")?;
        for (index, part) in self.path.iter().enumerate() {
            if index > 0 {
                f.write_str(".")?;
            }
            write_escaped(f, part, true)?;
        }
        Ok(())
    }
}
