use std::fmt;
use std::str::FromStr;

use crate::error::{HunterError, Result};

/// Flags after alias and credential resolution, before validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Request {
    /// Effective token
    pub token: Option<String>,
    pub repo: Option<String>,
    pub find: Option<String>,
    pub keyword: String,
    pub help: bool,
}

/// A repository identified by `owner/name`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryRef {
    pub owner: String,
    pub name: String,
}

impl FromStr for RepositoryRef {
    type Err = HunterError;

    fn from_str(input: &str) -> Result<Self> {
        let invalid = || HunterError::InvalidRepoFormat {
            input: input.to_string(),
        };

        let (owner, name) = input.split_once('/').ok_or_else(invalid)?;
        if owner.is_empty() || name.is_empty() || name.contains('/') {
            return Err(invalid());
        }

        Ok(Self {
            owner: owner.to_string(),
            name: name.to_string(),
        })
    }
}

impl fmt::Display for RepositoryRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    pub term: String,
    pub keyword: String,
}

impl SearchQuery {
    /// The query string sent upstream. The keyword narrows the search itself
    /// rather than filtering results afterwards.
    pub fn query(&self) -> String {
        if self.keyword.is_empty() {
            self.term.clone()
        } else {
            format!("{} {}", self.term, self.keyword)
        }
    }
}

/// What a validated request asks the tool to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    Help,
    Search {
        query: SearchQuery,
        token: String,
    },
    Lookup {
        repo: RepositoryRef,
        keyword: String,
        token: Option<String>,
    },
}

impl Request {
    /// Decide the mode, rejecting invalid flag combinations.
    pub fn validate(self) -> Result<Mode> {
        if self.find.is_some() && self.repo.is_some() {
            return Err(HunterError::ConflictingFlags);
        }

        if self.help || (self.token.is_none() && self.repo.is_none() && self.find.is_none()) {
            return Ok(Mode::Help);
        }

        if let Some(term) = self.find {
            let token = self.token.ok_or(HunterError::MissingCredential)?;
            return Ok(Mode::Search {
                query: SearchQuery {
                    term,
                    keyword: self.keyword,
                },
                token,
            });
        }

        let repo = self.repo.ok_or(HunterError::MissingArguments)?;
        Ok(Mode::Lookup {
            repo: repo.parse()?,
            keyword: self.keyword,
            token: self.token,
        })
    }
}

impl Mode {
    /// Token to authenticate the upstream client with, if any.
    pub fn token(&self) -> Option<&str> {
        match self {
            Mode::Help => None,
            Mode::Search { token, .. } => Some(token),
            Mode::Lookup { token, .. } => token.as_deref(),
        }
    }
}
