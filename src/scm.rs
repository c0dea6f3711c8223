//! # Source Control Metadata
//!
//! Reads git metadata straight from disk to fill in the POM's `<scm>`
//! section and the `revision` key of `pom.properties`. No `git` process is
//! spawned.
//!
//! Every lookup here is best effort: a missing `.git`, `HEAD`, ref file or
//! `config` yields `None` and generation carries on without the data.
//! Nothing is cached, so each call sees the repository as it is on disk.
//!
//! ## Layout consumed
//!
//! - `<dir>/.git` as a directory, or as a file holding `gitdir: <path>`
//!   (worktrees and submodules)
//! - `<git-dir>/HEAD`, either a SHA or `ref: <name>`
//! - `<git-dir>/<name>` ref files, falling back to `packed-refs`
//! - `<git-dir>/commondir`, pointing a worktree at the shared metadata
//! - `<git-dir>/config` for `[remote "origin"]`'s `url`

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use log::debug;
use regex::Regex;

use crate::project::{ProjectDescriptor, ScmConfig};

/// Symbolic refs are followed at most this many times.
const MAX_REF_DEPTH: usize = 5;

/// Remote URLs with a scheme: `https://host/user/repo.git`, `ssh://git@host/user/repo`
const SCHEME_URL_PATTERN: &str =
    r"^[A-Za-z][A-Za-z0-9+.-]*://(?:[^@/]+@)?([^/:]+)(?::\d+)?/([^/]+/.+?)(?:\.git)?/?$";

/// scp-like remote URLs: `git@host:user/repo.git`, `host:user/repo`
const SCP_URL_PATTERN: &str = r"^(?:[^@/]+@)?([^:/]+):([^/]+/.+?)(?:\.git)?/?$";

static HOSTED_URL_REGEXES: LazyLock<[Regex; 2]> = LazyLock::new(|| {
    [SCHEME_URL_PATTERN, SCP_URL_PATTERN]
        .map(|pattern| Regex::new(pattern).expect("hosted URL pattern compiles"))
});

static GITDIR_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"gitdir:\s*(.+)").expect("gitdir pattern compiles"));

/// The values rendered into `<scm>`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScmInfo {
    pub connection: Option<String>,
    pub developer_connection: Option<String>,
    pub tag: Option<String>,
    pub url: Option<String>,
}

impl ScmInfo {
    pub fn is_empty(&self) -> bool {
        self.connection.is_none()
            && self.developer_connection.is_none()
            && self.tag.is_none()
            && self.url.is_none()
    }
}

impl From<&ScmConfig> for ScmInfo {
    fn from(config: &ScmConfig) -> Self {
        Self {
            connection: config.connection.clone(),
            developer_connection: config.developer_connection.clone(),
            tag: config.tag.clone(),
            url: config.url.clone(),
        }
    }
}

/// URLs derived from a recognised `host:user/repo` origin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostedUrls {
    /// `git://host/user/repo.git`
    pub public_clone: String,
    /// `ssh://git@host/user/repo.git`
    pub developer_clone: String,
    /// `https://host/user/repo`
    pub browse: String,
}

fn read_trimmed(path: &Path) -> Option<String> {
    match fs::read_to_string(path) {
        Ok(content) => Some(content.trim().to_string()),
        Err(e) => {
            debug!("Cannot read {}: {}", path.display(), e);
            None
        }
    }
}

/// Locate the git metadata directory for `root`.
///
/// `alternate` (relative to `root`, or absolute) replaces `root` as the
/// directory expected to contain `.git`. A `.git` *file* is followed
/// through its `gitdir:` line.
pub fn git_dir(root: &Path, alternate: Option<&Path>) -> Option<PathBuf> {
    let base = match alternate {
        Some(dir) => root.join(dir),
        None => root.to_path_buf(),
    };
    let dot_git = base.join(".git");

    if dot_git.is_dir() {
        return Some(dot_git);
    }
    if !dot_git.is_file() {
        debug!("No git metadata at {}", dot_git.display());
        return None;
    }

    let content = read_trimmed(&dot_git)?;
    let target = GITDIR_REGEX.captures(&content)?.get(1)?.as_str().trim();
    let resolved = base.join(target);
    if resolved.is_dir() {
        Some(resolved)
    } else {
        debug!(
            "{} points at missing directory {}",
            dot_git.display(),
            resolved.display()
        );
        None
    }
}

/// The directory holding shared refs and config; differs from `git_dir`
/// only for linked worktrees.
fn common_dir(git_dir: &Path) -> PathBuf {
    read_trimmed(&git_dir.join("commondir"))
        .filter(|dir| !dir.is_empty())
        .map(|dir| git_dir.join(dir))
        .unwrap_or_else(|| git_dir.to_path_buf())
}

fn packed_ref(common: &Path, name: &str) -> Option<String> {
    let content = fs::read_to_string(common.join("packed-refs")).ok()?;
    content
        .lines()
        .filter(|line| !line.starts_with('#') && !line.starts_with('^'))
        .find_map(|line| {
            let (sha, ref_name) = line.split_once(' ')?;
            (ref_name.trim() == name).then(|| sha.trim().to_string())
        })
}

fn lookup_ref(git_dir: &Path, name: &str) -> Option<String> {
    let common = common_dir(git_dir);
    read_trimmed(&git_dir.join(name))
        .or_else(|| {
            if common != git_dir {
                read_trimmed(&common.join(name))
            } else {
                None
            }
        })
        .or_else(|| packed_ref(&common, name))
}

fn resolve_ref_content(git_dir: &Path, content: &str, depth: usize) -> Option<String> {
    match content.strip_prefix("ref:") {
        Some(name) => {
            if depth >= MAX_REF_DEPTH {
                debug!("Giving up on symbolic ref chain at {}", name.trim());
                return None;
            }
            let target = lookup_ref(git_dir, name.trim())?;
            resolve_ref_content(git_dir, &target, depth + 1)
        }
        None if content.is_empty() => None,
        None => Some(content.to_string()),
    }
}

/// Resolve `HEAD` to a revision SHA.
pub fn resolve_revision(git_dir: &Path) -> Option<String> {
    let head = read_trimmed(&git_dir.join("HEAD"))?;
    resolve_ref_content(git_dir, &head, 0)
}

/// The `url` of `[remote "origin"]` in the repository config.
pub fn remote_origin_url(git_dir: &Path) -> Option<String> {
    let content = fs::read_to_string(common_dir(git_dir).join("config")).ok()?;
    parse_origin_url(&content)
}

fn parse_origin_url(config: &str) -> Option<String> {
    let mut lines = config.lines().map(str::trim);
    lines.find(|line| *line == r#"[remote "origin"]"#)?;

    for line in lines {
        if line.starts_with('[') {
            break;
        }
        if let Some((key, value)) = line.split_once('=') {
            if key.trim() == "url" {
                return Some(value.trim().to_string());
            }
        }
    }
    None
}

/// Derive clone and browse URLs from an origin URL on a hosting service.
pub fn hosted_urls(origin: &str) -> Option<HostedUrls> {
    let origin = origin.trim();
    let captures = HOSTED_URL_REGEXES.iter().find_map(|re| {
        re.captures(origin)
            .map(|c| (c[1].to_string(), c[2].to_string()))
    });

    let Some((host, repo_path)) = captures else {
        debug!("Origin URL {} does not look like a hosted repository", origin);
        return None;
    };

    Some(HostedUrls {
        public_clone: format!("git://{}/{}.git", host, repo_path),
        developer_clone: format!("ssh://git@{}/{}.git", host, repo_path),
        browse: format!("https://{}/{}", host, repo_path),
    })
}

/// Build `ScmInfo` from the git metadata under `root` (or `alternate`).
pub fn discover(root: &Path, alternate: Option<&Path>) -> Option<ScmInfo> {
    let git_dir = git_dir(root, alternate)?;
    let hosted = remote_origin_url(&git_dir).and_then(|url| hosted_urls(&url));

    let info = ScmInfo {
        connection: hosted
            .as_ref()
            .map(|h| format!("scm:git:{}", h.public_clone)),
        developer_connection: hosted
            .as_ref()
            .map(|h| format!("scm:git:{}", h.developer_clone)),
        tag: resolve_revision(&git_dir),
        url: hosted.map(|h| h.browse),
    };

    (!info.is_empty()).then_some(info)
}

/// SCM data for a project: the explicit `scm` map when it has one,
/// otherwise whatever can be discovered on disk.
pub fn resolve(project: &ProjectDescriptor) -> Option<ScmInfo> {
    match &project.scm {
        Some(config) if config.is_explicit() => {
            let info = ScmInfo::from(config);
            (!info.is_empty()).then_some(info)
        }
        config => discover(
            &project.root,
            config.as_ref().and_then(|c| c.dir.as_deref()).map(Path::new),
        ),
    }
}

/// Revision of the project's checkout, if it has one.
pub fn revision(project: &ProjectDescriptor) -> Option<String> {
    let alternate = project
        .scm
        .as_ref()
        .and_then(|c| c.dir.as_deref())
        .map(Path::new);
    resolve_revision(&git_dir(&project.root, alternate)?)
}
