//! Team members and submitted projects.
//!
//! Two orderings exist: the submissions page sorts by explicit `order` then
//! member/team name, while the organizer section sorts by a fixed list of role
//! categories.

use serde::{Deserialize, Serialize};

use crate::collation::Collation;
use crate::record::{order_content, order_records, ContentRecord};

/// Placeholder title for a submission without a project name.
pub const MISSING_PROJECT_NAME: &str = "프로젝트 미기재";

/// A team member or submitting team as loaded from `contents/team`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamMember {
    #[serde(default)]
    pub path: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub bio: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_summary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repository_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub demo_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub submitted_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<f64>,
}

/// The link a submission card leads with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrimaryLink {
    pub href: String,
    pub label: String,
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

impl TeamMember {
    /// Project page first, then demo, then repository.
    pub fn primary_link(&self) -> Option<PrimaryLink> {
        [
            (&self.project_url, "프로젝트 보기"),
            (&self.demo_url, "데모 보기"),
            (&self.repository_url, "저장소 보기"),
        ]
        .into_iter()
        .find_map(|(url, label)| {
            non_blank(url).map(|href| PrimaryLink {
                href: href.to_string(),
                label: label.to_string(),
            })
        })
    }

    /// The first-placed submission is featured.
    pub fn is_featured(&self) -> bool {
        self.order == Some(1.0)
    }

    pub fn display_project_name(&self) -> &str {
        non_blank(&self.project_name).unwrap_or(MISSING_PROJECT_NAME)
    }

    /// Project summary, or the member bio when no summary was submitted.
    pub fn display_summary(&self) -> &str {
        non_blank(&self.project_summary).unwrap_or(&self.bio)
    }
}

impl ContentRecord for TeamMember {
    fn path(&self) -> &str {
        &self.path
    }

    fn order(&self) -> Option<f64> {
        self.order
    }

    fn fallback_key(&self) -> &str {
        &self.name
    }
}

/// Order submissions by `order`, then member/team name.
pub fn order_team(members: &[TeamMember], collation: &Collation) -> Vec<TeamMember> {
    order_content(members, collation)
}

/// A fixed ranking of role categories.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RolePriority {
    roles: Vec<String>,
}

impl RolePriority {
    pub fn new<I, S>(roles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        RolePriority {
            roles: roles.into_iter().map(Into::into).collect(),
        }
    }

    /// Position of `role` in the list, or `None` if it is not listed.
    pub fn rank(&self, role: &str) -> Option<usize> {
        self.roles.iter().position(|r| r == role)
    }

    pub fn roles(&self) -> &[String] {
        &self.roles
    }
}

impl Default for RolePriority {
    /// The organizer roles, lead first.
    fn default() -> Self {
        RolePriority::new(["프로그램 총괄", "운영 진행", "테크 지원", "커뮤니티/네트워킹"])
    }
}

/// Order members by role rank; unlisted roles go last, then by role name, then path.
pub fn order_team_by_role(
    members: &[TeamMember],
    priority: &RolePriority,
    collation: &Collation,
) -> Vec<TeamMember> {
    order_records(
        members,
        |m| priority.rank(&m.role).map(|r| r as f64),
        |m| m.role.as_str(),
        |m| m.path.as_str(),
        collation,
    )
}

/// Display-ready view of a submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamCard {
    pub path: String,
    pub name: String,
    pub role: String,
    pub project_name: String,
    pub summary: String,
    pub featured: bool,
    pub link: Option<PrimaryLink>,
    pub image_url: Option<String>,
    pub submitted_at: String,
}

impl From<&TeamMember> for TeamCard {
    fn from(m: &TeamMember) -> Self {
        TeamCard {
            path: m.path.clone(),
            name: m.name.clone(),
            role: m.role.clone(),
            project_name: m.display_project_name().to_string(),
            summary: m.display_summary().to_string(),
            featured: m.is_featured(),
            link: m.primary_link(),
            image_url: m.image_url.clone(),
            submitted_at: countdown::format_submitted_at(m.submitted_at.as_deref()),
        }
    }
}

/// Order submissions and render each as a card.
pub fn team_cards(members: &[TeamMember], collation: &Collation) -> Vec<TeamCard> {
    order_team(members, collation)
        .iter()
        .map(TeamCard::from)
        .collect()
}
