use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use thiserror::Error;

/// Colour used for grade labels outside the fixed scale.
pub const UNKNOWN_GRADE_COLOR: &str = "#6B7280";

/// Fill colour of the elite grade; needs a dark outline on white backgrounds.
const WHITE: &str = "#F3F4F6";
const OUTLINE: &str = "#1F2937";

/// A climbing difficulty band on the gym's fixed scale.
///
/// Ordering is positional (declaration order), never lexical: `V4-V6`
/// sorts before `V6-V8` because it comes earlier on the scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Grade {
    #[serde(rename = "VB")]
    Vb,
    #[serde(rename = "V0")]
    V0,
    #[serde(rename = "V3")]
    V3,
    #[serde(rename = "V4-V6")]
    V4V6,
    #[serde(rename = "V6-V8")]
    V6V8,
    #[serde(rename = "V7-V10")]
    V7V10,
}

impl Grade {
    /// Every grade, beginner to elite.
    pub const ALL: [Grade; 6] = [
        Grade::Vb,
        Grade::V0,
        Grade::V3,
        Grade::V4V6,
        Grade::V6V8,
        Grade::V7V10,
    ];

    /// Wire and display label.
    pub fn label(&self) -> &'static str {
        match self {
            Grade::Vb => "VB",
            Grade::V0 => "V0",
            Grade::V3 => "V3",
            Grade::V4V6 => "V4-V6",
            Grade::V6V8 => "V6-V8",
            Grade::V7V10 => "V7-V10",
        }
    }

    /// Hold colour used for this grade in charts and pickers.
    pub fn color(&self) -> &'static str {
        match self {
            Grade::Vb => "#3B82F6",
            Grade::V0 => "#EF4444",
            Grade::V3 => "#A855F7",
            Grade::V4V6 => "#1F2937",
            Grade::V6V8 => "#EAB308",
            Grade::V7V10 => WHITE,
        }
    }

    /// Outline colour: the white grade gets a dark border.
    pub fn border_color(&self) -> &'static str {
        if self.is_white() {
            OUTLINE
        } else {
            self.color()
        }
    }

    pub fn is_white(&self) -> bool {
        self.color() == WHITE
    }

    /// Readable label colour on top of the grade colour.
    pub fn text_color(&self) -> &'static str {
        match self {
            Grade::V6V8 | Grade::V7V10 => OUTLINE,
            _ => "#FFFFFF",
        }
    }

    /// Position in the fixed scale.
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Parse a label, returning `None` for anything off the scale.
    pub fn from_label(label: &str) -> Option<Grade> {
        Grade::ALL.into_iter().find(|g| g.label() == label)
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A label that is not on the fixed scale.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown grade: {0}")]
pub struct UnknownGrade(pub String);

impl FromStr for Grade {
    type Err = UnknownGrade;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Grade::from_label(s).ok_or_else(|| UnknownGrade(s.to_string()))
    }
}

/// Colour for an arbitrary grade label, with a neutral grey for unknown labels.
pub fn grade_color(label: &str) -> &'static str {
    Grade::from_label(label)
        .map(|g| g.color())
        .unwrap_or(UNKNOWN_GRADE_COLOR)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_is_positional() {
        assert!(Grade::Vb < Grade::V0);
        assert!(Grade::V3 < Grade::V4V6);
        assert!(Grade::V4V6 < Grade::V6V8);
        assert!(Grade::V6V8 < Grade::V7V10);
        // lexically "V7-V10" < "VB", positionally it is the hardest
        assert!(Grade::V7V10 > Grade::Vb);
        let indices: Vec<usize> = Grade::ALL.iter().map(|g| g.index()).collect();
        assert_eq!(indices, vec![0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_label_round_trip_and_unknown() {
        for grade in Grade::ALL {
            assert_eq!(grade.label().parse::<Grade>().unwrap(), grade);
        }
        let err = "V5".parse::<Grade>().unwrap_err();
        assert_eq!(err, UnknownGrade("V5".to_string()));
        assert_eq!(err.to_string(), "unknown grade: V5");
        assert_eq!(grade_color("V5"), UNKNOWN_GRADE_COLOR);
        assert_eq!(grade_color("V3"), "#A855F7");
    }

    #[test]
    fn test_white_grade_gets_dark_border() {
        assert_eq!(Grade::V7V10.border_color(), "#1F2937");
        assert_eq!(Grade::V0.border_color(), Grade::V0.color());
        assert_eq!(Grade::V7V10.text_color(), "#1F2937");
        assert_eq!(Grade::Vb.text_color(), "#FFFFFF");
    }

    #[test]
    fn test_serde_uses_labels() {
        let json = serde_json::to_string(&Grade::V4V6).unwrap();
        assert_eq!(json, "\"V4-V6\"");
        let back: Grade = serde_json::from_str("\"V7-V10\"").unwrap();
        assert_eq!(back, Grade::V7V10);
    }
}
