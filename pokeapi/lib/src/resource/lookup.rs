//! Keys for single-resource lookups.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// How a single resource is addressed: by numeric id or by name.
///
/// Parsing from a string treats all-digit input as an id and anything else as
/// a name. The `From<&str>` and `From<String>` conversions always produce a
/// name.
///
/// ## Examples
///
/// ```rust
/// use pokeapi::Lookup;
///
/// assert_eq!("25".parse::<Lookup>().unwrap(), Lookup::Id(25));
/// assert_eq!("pikachu".parse::<Lookup>().unwrap(), Lookup::Name("pikachu".into()));
/// assert_eq!(Lookup::from(7).to_string(), "7");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Lookup {
    /// Numeric resource id.
    Id(u32),
    /// Resource name, inserted into the path as given.
    Name(String),
}

impl fmt::Display for Lookup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Id(id) => write!(f, "{id}"),
            Self::Name(name) => f.write_str(name),
        }
    }
}

impl FromStr for Lookup {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.parse::<u32>() {
            Ok(id) if s.bytes().all(|b| b.is_ascii_digit()) => Self::Id(id),
            _ => Self::Name(s.to_string()),
        })
    }
}

impl From<u32> for Lookup {
    fn from(id: u32) -> Self {
        Self::Id(id)
    }
}

impl From<&str> for Lookup {
    fn from(name: &str) -> Self {
        Self::Name(name.to_string())
    }
}

impl From<String> for Lookup {
    fn from(name: String) -> Self {
        Self::Name(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_digits_as_id() {
        assert_eq!("4".parse::<Lookup>().unwrap(), Lookup::Id(4));
        assert_eq!("0".parse::<Lookup>().unwrap(), Lookup::Id(0));
    }

    #[test]
    fn test_parse_non_digits_as_name() {
        assert_eq!(
            "mr-mime".parse::<Lookup>().unwrap(),
            Lookup::Name("mr-mime".to_string())
        );
        // A sign is not part of an id.
        assert_eq!("+4".parse::<Lookup>().unwrap(), Lookup::Name("+4".to_string()));
        assert_eq!("-1".parse::<Lookup>().unwrap(), Lookup::Name("-1".to_string()));
    }

    #[test]
    fn test_from_str_ref_is_always_name() {
        assert_eq!(Lookup::from("25"), Lookup::Name("25".to_string()));
        assert_eq!(Lookup::from(25), Lookup::Id(25));
    }

    #[test]
    fn test_display() {
        assert_eq!(Lookup::Id(132).to_string(), "132");
        assert_eq!(Lookup::from("ditto").to_string(), "ditto");
    }
}
