use crate::error::{MarkovError, MkResult};
use crate::model::types::User;
use std::str::FromStr;
use strum_macros::{Display, EnumIter, EnumString};

#[derive(Debug, Clone, Copy, EnumIter, EnumString, Display, PartialEq, Eq, Hash)]
pub enum FilterKind {
    #[strum(serialize = "uid")]
    UserId,
    #[strum(serialize = "u")]
    UserName,
    #[strum(serialize = "rid")]
    RoleId,
    #[strum(serialize = "r")]
    RoleName,
}

/// A single `kind:value` inclusion predicate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterClause {
    pub kind: FilterKind,
    pub value: String,
}

impl FilterClause {
    /// Splits on the first colon only, so values may themselves contain colons.
    /// An empty value is a substring of everything and matches every user.
    pub fn parse(raw: &str) -> MkResult<Self> {
        let (kind, value) = raw
            .split_once(':')
            .ok_or_else(|| MarkovError::MalformedFilter(raw.to_string()))?;
        if kind.is_empty() {
            return Err(MarkovError::MalformedFilter(raw.to_string()));
        }
        let kind = FilterKind::from_str(kind)
            .map_err(|_| MarkovError::UnknownFilterKind(kind.to_string()))?;

        Ok(Self {
            kind,
            value: value.to_string(),
        })
    }

    /// Role clauses require every role to match; a user without roles passes.
    pub fn matches(&self, user: &User) -> bool {
        let needle = self.value.as_str();
        match self.kind {
            FilterKind::UserId => user.id.contains(needle),
            FilterKind::UserName => user.name.contains(needle),
            FilterKind::RoleId => user.roles.iter().all(|r| r.id.contains(needle)),
            FilterKind::RoleName => user.roles.iter().all(|r| r.name.contains(needle)),
        }
    }
}

impl FromStr for FilterClause {
    type Err = MarkovError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl std::fmt::Display for FilterClause {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.kind, self.value)
    }
}

/// Conjunction of clauses. The empty set lets everyone through.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSet {
    clauses: Vec<FilterClause>,
}

impl FilterSet {
    pub fn new(clauses: Vec<FilterClause>) -> Self {
        Self { clauses }
    }

    pub fn parse<S: AsRef<str>>(raws: &[S]) -> MkResult<Self> {
        let clauses = raws
            .iter()
            .map(|raw| FilterClause::parse(raw.as_ref()))
            .collect::<MkResult<Vec<_>>>()?;
        Ok(Self { clauses })
    }

    pub fn matches(&self, user: &User) -> bool {
        self.clauses.iter().all(|c| c.matches(user))
    }

    pub fn clauses(&self) -> &[FilterClause] {
        &self.clauses
    }

    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }
}
