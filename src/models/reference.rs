use serde::{Deserialize, Serialize};

/// Line of business reference record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lob {
    pub id: i64,
    pub name: String,
}

/// Location reference record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Loc {
    pub id: i64,
    pub name: String,
}

/// A scoping choice for a holiday: one specific reference record, or all
/// of them. Replaces a sentinel id so a real id of zero can never collide
/// with "no selection".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Selection {
    #[default]
    All,
    One(i64),
}

impl Selection {
    /// Wire value for the create payload: `None` serializes to `null`.
    pub fn to_field(self) -> Option<i64> {
        match self {
            Selection::All => None,
            Selection::One(id) => Some(id),
        }
    }

    pub fn from_field(id: Option<i64>) -> Self {
        match id {
            None => Selection::All,
            Some(id) => Selection::One(id),
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Selection::All)
    }
}
