use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The course a dish belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Course {
    Starters,
    Mains,
    Desserts,
}

impl Course {
    /// All courses in menu display order
    pub const ALL: [Course; 3] = [Course::Starters, Course::Mains, Course::Desserts];

    /// Human-readable section title
    pub fn label(&self) -> &'static str {
        match self {
            Course::Starters => "Starters",
            Course::Mains => "Mains",
            Course::Desserts => "Desserts",
        }
    }
}

impl fmt::Display for Course {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Course::Starters => write!(f, "starters"),
            Course::Mains => write!(f, "mains"),
            Course::Desserts => write!(f, "desserts"),
        }
    }
}

impl FromStr for Course {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "starters" => Ok(Course::Starters),
            "mains" => Ok(Course::Mains),
            "desserts" => Ok(Course::Desserts),
            _ => Err(format!(
                "Unknown course '{}', expected one of: starters, mains, desserts",
                s
            )),
        }
    }
}

/// The course picker state in the filter view.
///
/// "No selection" is deliberately distinct from "show all": an unselected
/// picker yields no dishes, so the view can prompt the user to choose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CourseSelection {
    Selected(Course),
    #[default]
    Unselected,
}

impl CourseSelection {
    pub fn course(&self) -> Option<Course> {
        match self {
            CourseSelection::Selected(course) => Some(*course),
            CourseSelection::Unselected => None,
        }
    }
}

impl From<Option<Course>> for CourseSelection {
    fn from(value: Option<Course>) -> Self {
        match value {
            Some(course) => CourseSelection::Selected(course),
            None => CourseSelection::Unselected,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_course_parsing() {
        assert_eq!("starters".parse::<Course>().unwrap(), Course::Starters);
        assert_eq!("Mains".parse::<Course>().unwrap(), Course::Mains);
        assert_eq!("DESSERTS".parse::<Course>().unwrap(), Course::Desserts);
        assert!("sides".parse::<Course>().is_err());
    }

    #[test]
    fn test_course_display_round_trip() {
        for course in Course::ALL {
            assert_eq!(course.to_string().parse::<Course>().unwrap(), course);
        }
    }

    #[test]
    fn test_course_display_order() {
        assert_eq!(
            Course::ALL.map(|c| c.label()),
            ["Starters", "Mains", "Desserts"]
        );
    }

    #[test]
    fn test_serde_wire_form() {
        let json = serde_json::to_string(&Course::Starters).unwrap();
        assert_eq!(json, "\"starters\"");
        let parsed: Course = serde_json::from_str("\"desserts\"").unwrap();
        assert_eq!(parsed, Course::Desserts);
    }

    #[test]
    fn test_selection_from_option() {
        assert_eq!(
            CourseSelection::from(Some(Course::Mains)),
            CourseSelection::Selected(Course::Mains)
        );
        assert_eq!(CourseSelection::from(None), CourseSelection::Unselected);
        assert_eq!(CourseSelection::Unselected.course(), None);
    }
}
