//! Commit object grammar
//!
//! A commit body is structured text, parsed line by line rather than with a
//! regex:
//!
//! ```text
//! tree <hash>
//! parent <hash>        (absent for a root commit)
//! author <signature>
//! committer <signature>
//!
//! <message>
//! ```
//!
//! Decoding fails when any required line is missing; the message is every
//! remaining byte with a single trailing newline trimmed.

use crate::artifacts::objects::object::GitObject;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use anyhow::Context;
use bytes::Bytes;

const DEFAULT_AUTHOR_NAME: &str = "Jot";
const DEFAULT_AUTHOR_EMAIL: &str = "jot@example.com";

/// Author or committer signature with a local timestamp
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Author {
    name: String,
    email: String,
    timestamp: chrono::DateTime<chrono::Local>,
}

impl Author {
    pub fn new(name: String, email: String) -> Self {
        Author {
            name,
            email,
            timestamp: chrono::Local::now(),
        }
    }

    /// Build a signature from `JOT_AUTHOR_NAME` / `JOT_AUTHOR_EMAIL`,
    /// falling back to the built-in identity when either is unset.
    pub fn load_from_env() -> Self {
        let name =
            std::env::var("JOT_AUTHOR_NAME").unwrap_or_else(|_| DEFAULT_AUTHOR_NAME.to_string());
        let email =
            std::env::var("JOT_AUTHOR_EMAIL").unwrap_or_else(|_| DEFAULT_AUTHOR_EMAIL.to_string());

        Author::new(name, email)
    }

    /// Render as `Name <email> <timestamp>`
    pub fn display(&self) -> String {
        format!(
            "{} <{}> {}",
            self.name,
            self.email,
            self.timestamp.format("%Y-%m-%dT%H:%M:%S")
        )
    }
}

/// A decoded commit record
///
/// Author and committer signatures are kept as the raw line payloads; only
/// the tree hash, the optional parent hash and the message are structured
/// fields with consumers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Commit {
    tree_oid: ObjectId,
    parent: Option<ObjectId>,
    author: String,
    committer: String,
    message: String,
}

impl Commit {
    pub fn new(
        tree_oid: ObjectId,
        parent: Option<ObjectId>,
        author: Author,
        message: String,
    ) -> Self {
        let signature = author.display();

        Commit {
            tree_oid,
            parent,
            author: signature.clone(),
            committer: signature,
            message,
        }
    }

    pub fn tree_oid(&self) -> &ObjectId {
        &self.tree_oid
    }

    pub fn parent(&self) -> Option<&ObjectId> {
        self.parent.as_ref()
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Serialize the commit body (the object content, header excluded)
    pub fn to_content(&self) -> Bytes {
        let mut lines = Vec::new();

        lines.push(format!("tree {}", self.tree_oid));
        if let Some(parent) = &self.parent {
            lines.push(format!("parent {}", parent));
        }
        lines.push(format!("author {}", self.author));
        lines.push(format!("committer {}", self.committer));
        lines.push(String::new());
        lines.push(format!("{}\n", self.message));

        Bytes::from(lines.join("\n"))
    }

    /// Parse a commit body with the line-oriented grammar
    pub fn from_content(content: &[u8]) -> anyhow::Result<Self> {
        let text = std::str::from_utf8(content).context("Commit content is not valid UTF-8")?;
        let mut lines = text.lines();

        let tree_oid = lines
            .next()
            .and_then(|line| line.strip_prefix("tree "))
            .context("Invalid commit object: missing tree line")?;
        let tree_oid = ObjectId::try_parse(tree_oid.to_string())?;

        let mut next_line = lines
            .next()
            .context("Invalid commit object: missing author line")?;

        let mut parent = None;
        if let Some(parent_oid) = next_line.strip_prefix("parent ") {
            parent = Some(ObjectId::try_parse(parent_oid.to_string())?);
            next_line = lines
                .next()
                .context("Invalid commit object: missing author line")?;
        }

        let author = next_line
            .strip_prefix("author ")
            .context("Invalid commit object: invalid author line")?
            .to_string();

        let committer = lines
            .next()
            .and_then(|line| line.strip_prefix("committer "))
            .context("Invalid commit object: invalid committer line")?
            .to_string();

        let separator = lines
            .next()
            .context("Invalid commit object: missing message separator")?;
        if !separator.is_empty() {
            anyhow::bail!("Invalid commit object: missing message separator");
        }

        let message = lines.collect::<Vec<&str>>().join("\n");

        Ok(Commit {
            tree_oid,
            parent,
            author,
            committer,
            message,
        })
    }

    pub fn to_object(&self) -> GitObject {
        GitObject::new(ObjectType::Commit, self.to_content())
    }
}
