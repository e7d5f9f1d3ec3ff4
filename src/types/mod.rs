//! Core data types for the Gitee API.
//!
//! Every field is optional: `None` means the key was absent from the JSON,
//! which is distinct from a present zero value. Absent fields are omitted
//! again on serialization.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// Timestamp as reported by Gitee (RFC 3339 with offset, usually `+08:00`).
pub type Timestamp = DateTime<FixedOffset>;

/// Implements `Display` as compact JSON.
macro_rules! json_display {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl std::fmt::Display for $ty {
                fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                    let json = serde_json::to_string(self).map_err(|_| std::fmt::Error)?;
                    f.write_str(&json)
                }
            }
        )+
    };
}

json_display!(
    BasicUser,
    User,
    Organization,
    Membership,
    License,
    RepositoryLicense,
    SshKey,
    Namespace,
    Repository,
    Branch,
    RepositoryCommit,
);

// Users

/// Fields shared by every user representation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BasicUser {
    /// Identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// Login.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub login: Option<String>,
    /// Name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Avatar URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    /// URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Web page URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub html_url: Option<String>,
    /// Remark the authenticated user attached to this user.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remark: Option<String>,
    /// Followers URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub followers_url: Option<String>,
    /// Following URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub following_url: Option<String>,
    /// Gists URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gists_url: Option<String>,
    /// Starred URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub starred_url: Option<String>,
    /// Subscriptions URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subscriptions_url: Option<String>,
    /// Organizations URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organizations_url: Option<String>,
    /// Repos URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repos_url: Option<String>,
    /// Events URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub events_url: Option<String>,
    /// Received events URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub received_events_url: Option<String>,
    /// Account type (`User`, `Organization`, ...).
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub user_type: Option<String>,
}

/// Gitee user with profile details.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Shared user fields.
    #[serde(flatten)]
    pub basic: BasicUser,
    /// Site admin flag.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub site_admin: Option<bool>,
    /// Blog.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blog: Option<String>,
    /// Weibo.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weibo: Option<String>,
    /// Bio.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    /// Public repos.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_repos: Option<i32>,
    /// Public gists.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_gists: Option<i32>,
    /// Follower count.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub followers: Option<i32>,
    /// Following count.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub following: Option<i32>,
    /// Number of starred repositories (spelled `stared` by the API).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stared: Option<i32>,
    /// Watched count.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub watched: Option<i32>,
    /// Creation time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<Timestamp>,
    /// Last update time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<Timestamp>,
    /// Email.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl User {
    /// Login name, if reported.
    pub fn login(&self) -> Option<&str> {
        self.basic.login.as_deref()
    }
}

/// SSH public key.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SshKey {
    /// Identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// Key.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    /// URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Creation time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<Timestamp>,
}

/// Namespace (user, group or enterprise) a repository can live in.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Namespace {
    /// Identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// Namespace type (`personal`, `group`, `enterprise`).
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub namespace_type: Option<String>,
    /// Name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Path.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    /// Web page URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub html_url: Option<String>,
    /// Parent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<Box<Namespace>>,
}

// Organizations

/// Gitee organization.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Organization {
    /// Identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// Login.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub login: Option<String>,
    /// Name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Avatar URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    /// Repos URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repos_url: Option<String>,
    /// Events URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub events_url: Option<String>,
    /// Members URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub members_url: Option<String>,
    /// Description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Follow count.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub follow_count: Option<i64>,
}

/// A user's membership in an organization.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Membership {
    /// URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Whether the membership is active.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
    /// Remark.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remark: Option<String>,
    /// Role.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    /// Organization URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization_url: Option<String>,
    /// Organization.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization: Option<Organization>,
    /// User.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
}

// Licenses

/// License detected for a repository.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RepositoryLicense {
    /// License.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license: Option<String>,
}

/// Open source license template.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct License {
    /// License identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license: Option<String>,
    /// License text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

// Repositories

/// Gitee repository.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Repository {
    /// Identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// Full name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    /// Human name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub human_name: Option<String>,
    /// URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Namespace.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub namespace: Option<Namespace>,
    /// Path.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    /// Name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Owner.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<User>,
    /// Assigner.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assigner: Option<User>,
    /// Description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Whether the repository is private.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub private: Option<bool>,
    /// Whether the repository is public.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public: Option<bool>,
    /// Whether the repository is internal.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub internal: Option<bool>,
    /// Whether the repository is a fork.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fork: Option<bool>,
    /// Web page URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub html_url: Option<String>,
    /// SSH clone URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ssh_url: Option<String>,
    /// Forks URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub forks_url: Option<String>,
    /// Keys URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keys_url: Option<String>,
    /// Collaborators URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collaborators_url: Option<String>,
    /// Hooks URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hooks_url: Option<String>,
    /// Branches URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub branches_url: Option<String>,
    /// Tags URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags_url: Option<String>,
    /// Blobs URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blobs_url: Option<String>,
    /// Stargazers URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stargazers_url: Option<String>,
    /// Contributors URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contributors_url: Option<String>,
    /// Commits URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commits_url: Option<String>,
    /// Comments URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comments_url: Option<String>,
    /// Issue comment URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issue_comment_url: Option<String>,
    /// Issues URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issues_url: Option<String>,
    /// Pulls URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pulls_url: Option<String>,
    /// Milestones URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub milestones_url: Option<String>,
    /// Notifications URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notifications_url: Option<String>,
    /// Labels URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labels_url: Option<String>,
    /// Releases URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub releases_url: Option<String>,
    /// Whether the repository is recommended.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommend: Option<bool>,
    /// Whether the repository is a Gitee Most Valuable Project.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gvp: Option<bool>,
    /// Homepage.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub homepage: Option<String>,
    /// Language.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    /// Forks count.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub forks_count: Option<i64>,
    /// Stargazers count.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stargazers_count: Option<i64>,
    /// Watchers count.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub watchers_count: Option<i64>,
    /// Default branch.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_branch: Option<String>,
    /// Open issues count.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub open_issues_count: Option<i64>,
    /// Whether issues are enabled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_issues: Option<bool>,
    /// Whether the wiki is enabled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_wiki: Option<bool>,
    /// Whether issue comments are allowed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issue_comment: Option<bool>,
    /// Whether comments are allowed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub can_comment: Option<bool>,
    /// Whether pull requests are enabled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pull_requests_enabled: Option<bool>,
    /// Whether Gitee Pages is enabled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_page: Option<bool>,
    /// License.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license: Option<String>,
    /// Whether the repository is outsourced.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outsourced: Option<bool>,
    /// Project creator.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_creator: Option<String>,
    /// Member logins.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub members: Option<Vec<String>>,
    /// Last push time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pushed_at: Option<Timestamp>,
    /// Creation time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<Timestamp>,
    /// Last update time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<Timestamp>,
    /// Repository this one was forked from.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<Box<Repository>>,
    /// PaaS information.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paas: Option<String>,
    /// Whether the authenticated user starred the repository.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stared: Option<bool>,
    /// Whether the authenticated user watches the repository.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub watched: Option<bool>,
    /// Permission.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub permission: Option<RepositoryPermission>,
    /// Relation of the authenticated user to the repository.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relation: Option<String>,
    /// Assignees number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignees_number: Option<i64>,
    /// Testers number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub testers_number: Option<i64>,
    /// Assignees.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignee: Option<Vec<User>>,
    /// Testers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub testers: Option<Vec<User>>,
    /// Status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Programs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub programs: Option<Vec<Program>>,
    /// Enterprise.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enterprise: Option<Enterprise>,
    /// Project labels.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_labels: Option<Vec<ProjectLabel>>,
}

/// Permissions of the authenticated user on a repository.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RepositoryPermission {
    /// Read access.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pull: Option<bool>,
    /// Write access.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub push: Option<bool>,
    /// Admin access.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin: Option<bool>,
}

/// Program (project group) a repository belongs to.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Program {
    /// Identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// Name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Program owner.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignee: Option<User>,
    /// Author.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<User>,
}

/// Enterprise owning a repository.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Enterprise {
    /// Identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// Enterprise type.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub enterprise_type: Option<String>,
    /// Name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Path.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    /// Web page URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub html_url: Option<String>,
}

/// Label attached to a repository.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectLabel {
    /// Identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// Name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Label identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ident: Option<String>,
}

// Branches

/// Repository branch.
///
/// The list endpoint reports only `commit.sha` and `commit.url`; the single
/// branch endpoint fills in the full commit.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Branch {
    /// Name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Commit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commit: Option<RepositoryCommit>,
    /// Whether the branch is protected.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protected: Option<bool>,
    /// Protection URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protection_url: Option<String>,
    /// Links.
    #[serde(rename = "_links", skip_serializing_if = "Option::is_none")]
    pub links: Option<BranchLinks>,
}

/// Hypermedia links of a branch.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BranchLinks {
    /// Web page URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub html: Option<String>,
    /// Self URL.
    #[serde(rename = "self", skip_serializing_if = "Option::is_none")]
    pub self_url: Option<String>,
}

// Commits

/// Commit as returned by the repository commit endpoints.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RepositoryCommit {
    /// Commit SHA.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sha: Option<String>,
    /// URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Web page URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub html_url: Option<String>,
    /// Comments URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comments_url: Option<String>,
    /// Git-level commit data.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commit: Option<CommitDetail>,
    /// Gitee account of the author, when it could be matched.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<User>,
    /// Committer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub committer: Option<User>,
    /// Parents.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parents: Option<Vec<CommitRef>>,
    /// Stats.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stats: Option<CommitStats>,
    /// Files.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub files: Option<Vec<CommitFile>>,
}

/// Git-level commit data.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CommitDetail {
    /// Author.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<CommitAuthor>,
    /// Committer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub committer: Option<CommitAuthor>,
    /// Message.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Tree.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tree: Option<CommitRef>,
}

/// Git identity with timestamp.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CommitAuthor {
    /// Name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Email.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<Timestamp>,
}

/// Reference to a git object (tree or parent commit).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CommitRef {
    /// Commit SHA.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sha: Option<String>,
    /// URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// Line statistics of a commit.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CommitStats {
    /// Identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Additions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additions: Option<i64>,
    /// Deletions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deletions: Option<i64>,
    /// Total.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<i64>,
}

/// File touched by a commit.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CommitFile {
    /// Commit SHA.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sha: Option<String>,
    /// Filename.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
    /// Status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Additions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additions: Option<i64>,
    /// Deletions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deletions: Option<i64>,
    /// Changes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub changes: Option<i64>,
    /// Blob URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blob_url: Option<String>,
    /// Raw URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw_url: Option<String>,
    /// Patch.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub patch: Option<String>,
    /// Whether the patch was truncated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub truncated: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn round_trip<T>(value: serde_json::Value) -> serde_json::Value
    where
        T: Serialize + serde::de::DeserializeOwned,
    {
        let decoded: T = serde_json::from_value(value).unwrap();
        serde_json::to_value(&decoded).unwrap()
    }

    #[test]
    fn test_user_round_trip_keeps_presence() {
        let input = json!({
            "id": 7,
            "login": "octo",
            "name": "",
            "type": "User",
            "followers": 0,
            "site_admin": false,
            "created_at": "2021-06-01T11:11:11+08:00"
        });

        assert_eq!(round_trip::<User>(input.clone()), input);
    }

    #[test]
    fn test_user_zero_and_absent_are_distinct() {
        let user: User = serde_json::from_value(json!({ "followers": 0 })).unwrap();

        assert_eq!(user.followers, Some(0));
        assert_eq!(user.following, None);
        assert_eq!(user.basic, BasicUser::default());
        assert_eq!(serde_json::to_value(&user).unwrap(), json!({ "followers": 0 }));
    }

    #[test]
    fn test_empty_record_serializes_to_empty_object() {
        assert_eq!(serde_json::to_value(User::default()).unwrap(), json!({}));
        assert_eq!(serde_json::to_value(Repository::default()).unwrap(), json!({}));
        assert_eq!(serde_json::to_value(Membership::default()).unwrap(), json!({}));
    }

    #[test]
    fn test_nested_records_round_trip() {
        let input = json!({
            "url": "https://gitee.com/api/v5/user/memberships/orgs/acme",
            "active": true,
            "role": "member",
            "organization": { "id": 1, "login": "acme", "follow_count": 0 },
            "user": { "login": "octo", "remark": "" }
        });

        assert_eq!(round_trip::<Membership>(input.clone()), input);
    }

    #[test]
    fn test_namespace_parent_chain() {
        let input = json!({
            "id": 3,
            "type": "group",
            "path": "team",
            "parent": { "id": 1, "type": "enterprise", "path": "corp" }
        });
        let ns: Namespace = serde_json::from_value(input.clone()).unwrap();

        assert_eq!(ns.namespace_type.as_deref(), Some("group"));
        assert_eq!(
            ns.parent.as_ref().and_then(|p| p.path.as_deref()),
            Some("corp")
        );
        assert_eq!(serde_json::to_value(&ns).unwrap(), input);
    }

    #[test]
    fn test_repository_round_trip() {
        let input = json!({
            "id": 42,
            "full_name": "mamh-mixed/go-gitee",
            "namespace": { "id": 9, "type": "personal", "path": "mamh-mixed" },
            "owner": { "login": "mamh-mixed" },
            "assigner": { "login": "mamh-mixed" },
            "private": false,
            "forks_count": 0,
            "permission": { "pull": true, "push": true, "admin": false },
            "assignee": [{ "login": "a" }],
            "testers": [],
            "members": ["mamh-mixed"],
            "project_labels": [{ "id": 1, "name": "go", "ident": "go" }],
            "pushed_at": "2022-03-04T10:00:00+08:00"
        });

        assert_eq!(round_trip::<Repository>(input.clone()), input);
    }

    #[test]
    fn test_commit_round_trip() {
        let input = json!({
            "sha": "8896821c53eda6698ef5c75ba5182e547e8476f1",
            "commit": {
                "author": { "name": "a", "email": "a@x", "date": "2022-01-01T08:00:00+08:00" },
                "message": "init",
                "tree": { "sha": "t1" }
            },
            "parents": [{ "sha": "p1", "url": "u" }],
            "stats": { "additions": 3, "deletions": 0, "total": 3 },
            "files": [{ "filename": "a.go", "status": "added", "additions": 3 }]
        });

        assert_eq!(round_trip::<RepositoryCommit>(input.clone()), input);
    }

    #[test]
    fn test_branch_links_rename() {
        let input = json!({
            "name": "main",
            "commit": { "sha": "abc", "url": "u" },
            "protected": false,
            "protection_url": "p",
            "_links": { "html": "h", "self": "s" }
        });
        let branch: Branch = serde_json::from_value(input.clone()).unwrap();

        assert_eq!(
            branch.links.as_ref().and_then(|l| l.self_url.as_deref()),
            Some("s")
        );
        assert_eq!(serde_json::to_value(&branch).unwrap(), input);
    }

    #[test]
    fn test_timestamp_keeps_offset() {
        let key: SshKey =
            serde_json::from_value(json!({ "created_at": "2021-06-01T11:11:11+08:00" })).unwrap();
        let created = key.created_at.unwrap();

        assert_eq!(created.offset().local_minus_utc(), 8 * 3600);
        assert_eq!(created.to_rfc3339(), "2021-06-01T11:11:11+08:00");
    }

    #[test]
    fn test_display_is_compact_json() {
        let license = License {
            license: Some("MIT".to_string()),
            source: None,
        };
        assert_eq!(license.to_string(), r#"{"license":"MIT"}"#);
    }
}
