use std::fmt;

/// Name of a tableau row or column.
///
/// A row label names the variable that is currently basic in that row.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Label {
    Decision(usize),
    Slack(usize),
    Objective,
}

impl Label {
    pub fn is_decision(&self) -> bool {
        matches!(self, Label::Decision(_))
    }

    pub fn is_slack(&self) -> bool {
        matches!(self, Label::Slack(_))
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Label::Decision(i) => write!(f, "x{}", i),
            Label::Slack(i) => write!(f, "s{}", i),
            Label::Objective => write!(f, "p"),
        }
    }
}
