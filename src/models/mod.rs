use serde::{Deserialize, Serialize};

/// Stable opaque node identifier.
///
/// Allocated by the tree at creation time and never reused within a page
/// session. All drag/selection/deletion logic addresses nodes by id, not by
/// position, so a ref stays valid across reorders.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub(crate) struct NodeId(pub u64);

/// Addressing scheme used by drag payloads, selection and deletion.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub(crate) enum NodeRef {
    Group(NodeId),
    Sub(NodeId),
}

impl NodeRef {
    /// Wire form carried in `DataTransfer` during a drag: `group:7` / `sub:12`.
    pub fn encode(&self) -> String {
        match self {
            NodeRef::Group(NodeId(n)) => format!("group:{n}"),
            NodeRef::Sub(NodeId(n)) => format!("sub:{n}"),
        }
    }

    /// Parses a drag payload. Anything malformed yields `None` and the drop
    /// degrades to a no-op.
    pub fn parse(s: &str) -> Option<NodeRef> {
        let (kind, raw) = s.trim().split_once(':')?;
        let id = NodeId(raw.parse().ok()?);
        match kind {
            "group" => Some(NodeRef::Group(id)),
            "sub" => Some(NodeRef::Sub(id)),
            _ => None,
        }
    }
}

/// Closed icon set offered by the add-group picker.
#[derive(
    Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, strum::EnumIter, strum::IntoStaticStr,
)]
pub(crate) enum GroupIcon {
    Code,
    BookOpen,
    Rocket,
    Heart,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub(crate) struct SubItem {
    pub id: NodeId,
    pub name: String,
    pub count: u32,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub(crate) struct Group {
    pub id: NodeId,
    pub name: String,
    pub icon: GroupIcon,
    pub subs: Vec<SubItem>,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum ActivityKind {
    Post,
    Like,
    Comment,
    Follow,
}

impl ActivityKind {
    pub fn label(&self) -> &'static str {
        match self {
            ActivityKind::Post => "posted",
            ActivityKind::Like => "liked",
            ActivityKind::Comment => "commented",
            ActivityKind::Follow => "followed",
        }
    }
}

/// One entry of the mock activity feed. Re-created on every load; never stored.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub(crate) struct Activity {
    pub id: String,
    pub kind: ActivityKind,
    pub user_name: String,
    pub username: String,
    pub content: String,
    pub timestamp: String,
    pub likes: Option<u32>,
    pub comments: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_ref_encode_parse_roundtrip() {
        let refs = [NodeRef::Group(NodeId(0)), NodeRef::Sub(NodeId(42))];
        for r in refs {
            assert_eq!(NodeRef::parse(&r.encode()), Some(r));
        }
    }

    #[test]
    fn test_node_ref_parse_rejects_malformed_payloads() {
        for bad in ["", "group", "group:", "group:x", "node:1", "sub:-1", "sub:1:2"] {
            assert_eq!(NodeRef::parse(bad), None, "payload {bad:?} should not parse");
        }
    }

    #[test]
    fn test_node_ref_parse_trims_whitespace() {
        assert_eq!(NodeRef::parse(" sub:3\n"), Some(NodeRef::Sub(NodeId(3))));
    }

    #[test]
    fn test_group_serde_roundtrip() {
        let g = Group {
            id: NodeId(7),
            name: "Tech Sharing".to_string(),
            icon: GroupIcon::Code,
            subs: vec![SubItem {
                id: NodeId(8),
                name: "Frontend".to_string(),
                count: 23,
            }],
        };
        let json = serde_json::to_string(&g).expect("group should serialize");
        let back: Group = serde_json::from_str(&json).expect("group should deserialize");
        assert_eq!(back, g);
    }
}
