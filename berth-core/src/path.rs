//! Path - Addressing a single location inside a resource's attribute tree
//!
//! Paths are written the way Terraform interpolations spell them:
//! `configuration[0].execute_command_configuration[0].logging`.

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;

/// One step of an attribute path
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Segment {
    /// Named attribute or block
    Attr(String),
    /// Position inside a list-backed collection
    Index(usize),
    /// Position inside a set-backed collection
    ///
    /// Sets have no stable order on the engine side, so interpolations
    /// convert the collection with `tolist()` before indexing.
    SetIndex(usize),
}

/// Error raised when parsing a textual attribute path
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PathError {
    #[error("Attribute path is empty")]
    Empty,

    #[error("Invalid segment '{segment}' in attribute path '{path}'")]
    InvalidSegment { path: String, segment: String },
}

/// Location of a value in a resource's attribute tree
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct AttributePath {
    segments: Vec<Segment>,
}

fn segment_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^([A-Za-z_][A-Za-z0-9_-]*)((?:\[\d+\])*)$").expect("segment regex is valid")
    })
}

impl AttributePath {
    /// The empty path, addressing the resource body itself
    pub fn root() -> Self {
        Self::default()
    }

    /// A path with a single named segment
    pub fn attr(name: impl Into<String>) -> Self {
        Self {
            segments: vec![Segment::Attr(name.into())],
        }
    }

    pub fn child(&self, name: impl Into<String>) -> Self {
        self.with(Segment::Attr(name.into()))
    }

    pub fn index(&self, index: usize) -> Self {
        self.with(Segment::Index(index))
    }

    pub fn set_index(&self, index: usize) -> Self {
        self.with(Segment::SetIndex(index))
    }

    fn with(&self, segment: Segment) -> Self {
        let mut segments = self.segments.clone();
        segments.push(segment);
        Self { segments }
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// Last segment, if the path is not the root
    pub fn last(&self) -> Option<&Segment> {
        self.segments.last()
    }

    /// Parse a dotted path such as `volume[1].efs_volume_configuration[0].file_system_id`
    ///
    /// Textual paths carry no set information, so every index parses as
    /// [`Segment::Index`].
    pub fn parse(path: &str) -> Result<Self, PathError> {
        if path.trim().is_empty() {
            return Err(PathError::Empty);
        }

        let mut segments = Vec::new();
        for part in path.split('.') {
            let invalid = || PathError::InvalidSegment {
                path: path.to_string(),
                segment: part.to_string(),
            };
            let caps = segment_regex().captures(part).ok_or_else(invalid)?;
            segments.push(Segment::Attr(caps[1].to_string()));

            let indices = &caps[2];
            for raw in indices.split(']').filter(|s| !s.is_empty()) {
                let index = raw
                    .trim_start_matches('[')
                    .parse::<usize>()
                    .map_err(|_| invalid())?;
                segments.push(Segment::Index(index));
            }
        }

        Ok(Self { segments })
    }

    /// Render this path as a Terraform expression rooted at `base`
    ///
    /// `base` is the address of the owning element (e.g. `aws_ecs_service.web`).
    pub fn expression(&self, base: &str) -> String {
        let mut expr = base.to_string();
        for segment in &self.segments {
            match segment {
                Segment::Attr(name) => {
                    expr.push('.');
                    expr.push_str(name);
                }
                Segment::Index(i) => expr.push_str(&format!("[{}]", i)),
                Segment::SetIndex(i) => expr = format!("tolist({})[{}]", expr, i),
            }
        }
        expr
    }
}

impl fmt::Display for AttributePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            match segment {
                Segment::Attr(name) if i == 0 => write!(f, "{}", name)?,
                Segment::Attr(name) => write!(f, ".{}", name)?,
                Segment::Index(index) | Segment::SetIndex(index) => write!(f, "[{}]", index)?,
            }
        }
        Ok(())
    }
}

impl std::str::FromStr for AttributePath {
    type Err = PathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_nested_path() {
        let path = AttributePath::parse("configuration[0].execute_command_configuration[0].logging")
            .unwrap();
        assert_eq!(
            path.segments(),
            &[
                Segment::Attr("configuration".to_string()),
                Segment::Index(0),
                Segment::Attr("execute_command_configuration".to_string()),
                Segment::Index(0),
                Segment::Attr("logging".to_string()),
            ]
        );
    }

    #[test]
    fn parse_rejects_malformed_segments() {
        assert_eq!(AttributePath::parse(""), Err(PathError::Empty));
        assert!(AttributePath::parse("volume[x]").is_err());
        assert!(AttributePath::parse("a..b").is_err());
        assert!(AttributePath::parse("1abc").is_err());
    }

    #[test]
    fn display_round_trips() {
        let text = "volume[2].efs_volume_configuration[0].authorization_config[0].iam";
        let path = AttributePath::parse(text).unwrap();
        assert_eq!(path.to_string(), text);
    }

    #[test]
    fn expression_wraps_sets_in_tolist() {
        let path = AttributePath::attr("load_balancer")
            .set_index(1)
            .child("container_port");
        assert_eq!(
            path.expression("aws_ecs_service.web"),
            "tolist(aws_ecs_service.web.load_balancer)[1].container_port"
        );
        assert_eq!(path.to_string(), "load_balancer[1].container_port");
    }

    #[test]
    fn expression_for_lists_indexes_directly() {
        let path = AttributePath::attr("configuration").index(0).child("logging");
        assert_eq!(
            path.expression("aws_ecs_cluster.main"),
            "aws_ecs_cluster.main.configuration[0].logging"
        );
    }
}
