//! Commit object
//!
//! Commits record a snapshot of the repository. They contain:
//! - A tree object ID (directory snapshot)
//! - At most one parent commit ID (absent for a root commit)
//! - Author and committer information
//! - Commit message
//!
//! ## Format
//!
//! On disk:
//! ```text
//! commit <size>\0
//! tree <tree-sha>
//! parent <parent-sha>
//! author <name> <email> <timestamp> <timezone>
//! committer <name> <email> <timestamp> <timezone>
//!
//! <commit message>
//! ```
//!
//! The `parent` line is present if and only if the commit has a parent.

use crate::artifacts::objects::object::{Object, Packable, Unpackable};
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use crate::errors::{ObjectError, Result};
use anyhow::Context;
use bytes::Bytes;
use chrono::{DateTime, FixedOffset, Utc};

/// Author or committer information
///
/// Contains name, email, and timestamp with timezone information.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Author {
    name: String,
    email: String,
    timestamp: DateTime<FixedOffset>,
}

impl Author {
    /// Create an identity stamped with the current time at `+0000`
    pub fn new(name: String, email: String) -> Result<Self> {
        Self::new_with_timestamp(name, email, Utc::now().fixed_offset())
    }

    /// Create an identity with a specific timestamp
    ///
    /// Name and email end up on a single header line delimited by angle
    /// brackets, so neither may contain `<`, `>` or a newline.
    pub fn new_with_timestamp(
        name: String,
        email: String,
        timestamp: DateTime<FixedOffset>,
    ) -> Result<Self> {
        for field in [&name, &email] {
            if field.contains(['<', '>', '\n']) {
                return Err(ObjectError::InvalidIdentity(field.to_string()));
            }
        }

        Ok(Author {
            name,
            email,
            timestamp,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn timestamp(&self) -> DateTime<FixedOffset> {
        self.timestamp
    }

    /// Format complete author info including timestamp
    ///
    /// # Returns
    ///
    /// String in format "Name <email> timestamp timezone"
    pub fn display(&self) -> String {
        format!(
            "{} <{}> {} {}",
            self.name,
            self.email,
            self.timestamp.timestamp(),
            self.timestamp.format("%z")
        )
    }

    /// Load author information from environment variables
    ///
    /// Reads GIT_AUTHOR_NAME, GIT_AUTHOR_EMAIL, and optionally GIT_AUTHOR_DATE.
    /// If no date is provided, uses current time.
    pub fn load_from_env() -> anyhow::Result<Self> {
        let name = read_env_name("GIT_AUTHOR_NAME").context("GIT_AUTHOR_NAME not set")?;
        let email = std::env::var("GIT_AUTHOR_EMAIL").context("GIT_AUTHOR_EMAIL not set")?;

        Self::from_env_parts(name, email, std::env::var("GIT_AUTHOR_DATE").ok())
    }

    /// Load committer information from environment variables
    ///
    /// Reads GIT_COMMITTER_NAME, GIT_COMMITTER_EMAIL and GIT_COMMITTER_DATE,
    /// each of which falls back to the corresponding field of `author`.
    pub fn load_committer_from_env(author: &Author) -> anyhow::Result<Self> {
        let name = read_env_name("GIT_COMMITTER_NAME").unwrap_or_else(|| author.name.clone());
        let email = std::env::var("GIT_COMMITTER_EMAIL").unwrap_or_else(|_| author.email.clone());

        match std::env::var("GIT_COMMITTER_DATE").ok() {
            Some(date) => Self::from_env_parts(name, email, Some(date)),
            None => Ok(Self::new_with_timestamp(name, email, author.timestamp)?),
        }
    }

    fn from_env_parts(name: String, email: String, date: Option<String>) -> anyhow::Result<Self> {
        let author = match date {
            Some(date) => {
                let timestamp = parse_date(&date)
                    .with_context(|| format!("Unable to parse date {date:?}"))?;
                Self::new_with_timestamp(name, email, timestamp)?
            }
            None => Self::new(name, email)?,
        };

        Ok(author)
    }
}

fn read_env_name(key: &str) -> Option<String> {
    std::env::var(key).ok().map(|name| name.trim().to_string())
}

/// Accepts RFC 2822, `%Y-%m-%d %H:%M:%S %z`, and raw `<unix-seconds> <+HHMM>`
fn parse_date(date: &str) -> Option<DateTime<FixedOffset>> {
    DateTime::parse_from_rfc2822(date)
        .or_else(|_| DateTime::parse_from_str(date, "%Y-%m-%d %H:%M:%S %z"))
        .ok()
        .or_else(|| {
            let (timestamp, timezone) = date.split_once(' ')?;
            parse_raw_timestamp(timestamp, timezone)
        })
}

fn parse_raw_timestamp(timestamp: &str, timezone: &str) -> Option<DateTime<FixedOffset>> {
    let timestamp = timestamp.parse::<i64>().ok()?;
    let offset = parse_offset(timezone)?;

    DateTime::from_timestamp(timestamp, 0).map(|datetime| datetime.with_timezone(&offset))
}

/// Parse a `+HHMM` / `-HHMM` timezone offset
fn parse_offset(timezone: &str) -> Option<FixedOffset> {
    let (sign, digits) = match timezone.as_bytes().first()? {
        b'+' => (1, &timezone[1..]),
        b'-' => (-1, &timezone[1..]),
        _ => return None,
    };
    if digits.len() != 4 || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let hours = digits[..2].parse::<i32>().ok()?;
    let minutes = digits[2..].parse::<i32>().ok()?;
    FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60))
}

impl TryFrom<&str> for Author {
    type Error = ObjectError;

    fn try_from(value: &str) -> Result<Self> {
        let invalid = || ObjectError::corrupt(format!("invalid identity line {value:?}"));

        // Format: "name <email> timestamp timezone"
        // Split from right to get timezone and timestamp first
        let mut parts = value.rsplitn(3, ' ');
        let timezone = parts.next().ok_or_else(invalid)?;
        let timestamp = parts.next().ok_or_else(invalid)?;
        let name_email_part = parts.next().ok_or_else(invalid)?;

        let email_start = name_email_part.find('<').ok_or_else(invalid)?;
        let email_end = name_email_part.rfind('>').ok_or_else(invalid)?;
        if email_end < email_start || email_end != name_email_part.len() - 1 {
            return Err(invalid());
        }

        let name = name_email_part[..email_start].trim().to_string();
        let email = name_email_part[email_start + 1..email_end].to_string();
        let timestamp = parse_raw_timestamp(timestamp, timezone).ok_or_else(invalid)?;

        Author::new_with_timestamp(name, email, timestamp).map_err(|_| invalid())
    }
}

/// Commit object
///
/// Represents a snapshot of the repository with metadata.
/// Contains references to:
/// - The tree representing the state of files
/// - The parent commit, if any
/// - Author and committer information
/// - Commit message
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Commit {
    /// Tree object ID representing the directory snapshot
    tree_oid: ObjectId,
    /// Parent commit ID (None for a root commit)
    parent: Option<ObjectId>,
    /// Author who wrote the changes
    author: Author,
    /// Committer who recorded the commit
    committer: Author,
    /// Commit message, stored verbatim
    message: String,
}

impl Commit {
    pub fn new(
        tree_oid: ObjectId,
        parent: Option<ObjectId>,
        author: Author,
        committer: Author,
        message: String,
    ) -> Self {
        Commit {
            tree_oid,
            parent,
            author,
            committer,
            message,
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn tree_oid(&self) -> &ObjectId {
        &self.tree_oid
    }

    pub fn parent(&self) -> Option<&ObjectId> {
        self.parent.as_ref()
    }

    pub fn author(&self) -> &Author {
        &self.author
    }

    pub fn committer(&self) -> &Author {
        &self.committer
    }

    /// The commit payload as text, as printed by `cat-file -p`
    pub fn display(&self) -> String {
        let mut content = format!("tree {}\n", self.tree_oid);
        if let Some(parent) = &self.parent {
            content.push_str(&format!("parent {parent}\n"));
        }
        content.push_str(&format!("author {}\n", self.author.display()));
        content.push_str(&format!("committer {}\n", self.committer.display()));
        content.push('\n');
        content.push_str(&self.message);

        content
    }
}

impl Packable for Commit {
    fn payload(&self) -> Result<Bytes> {
        Ok(Bytes::from(self.display()))
    }
}

impl Unpackable for Commit {
    fn deserialize(payload: Bytes) -> Result<Self> {
        let content = std::str::from_utf8(&payload)
            .map_err(|_| ObjectError::corrupt("commit object is not valid UTF-8"))?;

        let (headers, message) = content
            .split_once("\n\n")
            .ok_or_else(|| ObjectError::corrupt("commit object is missing its message"))?;
        let mut lines = headers.split('\n').peekable();

        let tree_oid = ObjectId::try_parse(expect_header(&mut lines, "tree")?)
            .map_err(|e| ObjectError::corrupt(format!("invalid tree line: {e}")))?;

        let parent = match lines.next_if(|line| line.starts_with("parent ")) {
            Some(line) => Some(
                ObjectId::try_parse(&line["parent ".len()..])
                    .map_err(|e| ObjectError::corrupt(format!("invalid parent line: {e}")))?,
            ),
            None => None,
        };

        let author = Author::try_from(expect_header(&mut lines, "author")?)?;
        let committer = Author::try_from(expect_header(&mut lines, "committer")?)?;

        if let Some(line) = lines.next() {
            return Err(ObjectError::corrupt(format!(
                "unexpected commit header line {line:?}"
            )));
        }

        Ok(Self::new(
            tree_oid,
            parent,
            author,
            committer,
            message.to_string(),
        ))
    }
}

fn expect_header<'a>(lines: &mut impl Iterator<Item = &'a str>, key: &str) -> Result<&'a str> {
    lines
        .next()
        .and_then(|line| line.strip_prefix(key))
        .and_then(|line| line.strip_prefix(' '))
        .ok_or_else(|| ObjectError::corrupt(format!("commit object is missing {key} line")))
}

impl Object for Commit {
    fn object_type(&self) -> ObjectType {
        ObjectType::Commit
    }
}
