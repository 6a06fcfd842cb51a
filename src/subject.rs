use serde::{Deserialize, Serialize};

/// Closed set of lecture subjects the classifier may choose from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Subject {
    Math,
    Physics,
    Programming,
    Chemistry,
    MachineLearning,
    #[default]
    General,
}

impl Subject {
    /// All subjects, in the order they are offered to the classifier
    pub const ALL: [Subject; 6] = [
        Subject::Math,
        Subject::Programming,
        Subject::Chemistry,
        Subject::Physics,
        Subject::MachineLearning,
        Subject::General,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Subject::Math => "Math",
            Subject::Physics => "Physics",
            Subject::Programming => "Programming",
            Subject::Chemistry => "Chemistry",
            Subject::MachineLearning => "MachineLearning",
            Subject::General => "General",
        }
    }

    /// Comma-separated category list for the classification prompt
    pub fn category_list() -> String {
        Self::ALL
            .iter()
            .map(|s| s.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Match a model reply against the category set.
    ///
    /// The reply is matched case-insensitively by substring, so answers like
    /// "The subject is Physics." still resolve. Anything unrecognized falls
    /// back to `General`.
    pub fn from_response(response: &str) -> Subject {
        let response = response.to_lowercase();
        for subject in Self::ALL {
            if subject != Subject::General
                && response.contains(&subject.as_str().to_lowercase())
            {
                return subject;
            }
        }
        if response.contains("general") {
            return Subject::General;
        }
        tracing::warn!("Unexpected classifier output: {:?}, falling back to General", response);
        Subject::General
    }
}

impl std::fmt::Display for Subject {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_exact_response() {
        assert_eq!(Subject::from_response("Physics"), Subject::Physics);
        assert_eq!(Subject::from_response("Math"), Subject::Math);
        assert_eq!(
            Subject::from_response("MachineLearning"),
            Subject::MachineLearning
        );
    }

    #[test]
    fn test_from_noisy_response() {
        assert_eq!(
            Subject::from_response("The subject is: Chemistry."),
            Subject::Chemistry
        );
        assert_eq!(Subject::from_response("  programming\n"), Subject::Programming);
    }

    #[test]
    fn test_unrecognized_falls_back_to_general() {
        assert_eq!(Subject::from_response("Biology"), Subject::General);
        assert_eq!(Subject::from_response(""), Subject::General);
        assert_eq!(Subject::from_response("I cannot classify this"), Subject::General);
    }

    #[test]
    fn test_default_is_general() {
        assert_eq!(Subject::default(), Subject::General);
    }

    #[test]
    fn test_category_list_mentions_every_subject() {
        let list = Subject::category_list();
        for subject in Subject::ALL {
            assert!(list.contains(subject.as_str()));
        }
    }
}
