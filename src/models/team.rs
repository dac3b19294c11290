use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque team identifier supplied by the team directory.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TeamId(String);

impl TeamId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TeamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TeamId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for TeamId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub id: TeamId,
    pub name: String,
    /// Group within the league, if the league is split into groups
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
}

impl Team {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: TeamId::new(id),
            name: name.into(),
            group: None,
        }
    }

    pub fn in_group(mut self, group: impl Into<String>) -> Self {
        self.group = Some(group.into());
        self
    }
}

/// A named subset of a league's teams ranked in its own table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    pub name: String,
    pub team_ids: Vec<TeamId>,
}

impl Group {
    /// Builds groups from team entries, in order of first appearance.
    /// Teams without a group are left out.
    pub fn from_teams(teams: &[Team]) -> Vec<Group> {
        let mut groups: Vec<Group> = Vec::new();
        for team in teams {
            let Some(name) = &team.group else {
                continue;
            };
            match groups.iter_mut().find(|g| &g.name == name) {
                Some(group) => group.team_ids.push(team.id.clone()),
                None => groups.push(Group {
                    name: name.clone(),
                    team_ids: vec![team.id.clone()],
                }),
            }
        }
        groups
    }
}
