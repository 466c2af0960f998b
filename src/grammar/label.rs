use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::graph::ParseError;

/// Custom dependency labels the parser is trained to emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Label {
    /// Main predicate of the utterance.
    Root,
    /// Token asking about a state ("are", "feeling").
    State,
    /// Entity being asked about ("you", "bot").
    Target,
    /// Object being requested ("coffee").
    Object,
    /// No semantic relation. Training placeholder only.
    #[serde(rename = "-")]
    None,
}

impl Label {
    pub const ALL: [Label; 5] = [Label::Root, Label::State, Label::Target, Label::Object, Label::None];

    /// Tag as written in the training corpus.
    pub fn as_tag(&self) -> &'static str {
        match self {
            Label::Root => "ROOT",
            Label::State => "STATE",
            Label::Target => "TARGET",
            Label::Object => "OBJECT",
            Label::None => "-",
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_tag())
    }
}

impl FromStr for Label {
    type Err = ParseError;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        match tag {
            "ROOT" => Ok(Label::Root),
            "STATE" => Ok(Label::State),
            "TARGET" => Ok(Label::Target),
            "OBJECT" => Ok(Label::Object),
            "-" => Ok(Label::None),
            other => Err(ParseError::UnknownLabel(other.to_string())),
        }
    }
}
