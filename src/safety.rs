use crate::lexicon::{KeywordList, TextClassifier};

/// Returned instead of a reflection whenever the safety gate trips.
pub const SAFETY_MESSAGE: &str = "I notice some concerning thoughts in your entry.

It's important to know that you're not alone, and there are people who want to help. Please consider:
- Talking to a trusted friend, family member, or counselor
- Contacting a mental health professional
- Reaching out to a crisis helpline

Crisis resources:
- Suicide & Crisis Lifeline: call or text 988
- Crisis Text Line: text HOME to 741741

Your feelings are valid, but there are healthier ways to work through difficult times.";

/// Binary gate in front of the text provider. False positives are acceptable,
/// false negatives are not.
#[derive(Debug, Clone)]
pub struct SafetyGate<C = KeywordList> {
    classifier: C,
}

impl Default for SafetyGate {
    fn default() -> Self {
        Self::new(KeywordList::safety())
    }
}

impl<C: TextClassifier> SafetyGate<C> {
    pub fn new(classifier: C) -> Self {
        Self { classifier }
    }

    pub fn is_concerning(&self, text: &str) -> bool {
        self.classifier.matches(text)
    }
}
