//! Reporting statements toward the host's tracking system
//!
//! The widget is unscored, but the reporting contract must stay stable:
//! one "answered" statement with a 0/0 score block, completion=true and
//! success=true. Statement shape follows the xAPI registry vocabulary the
//! host framework emits.

use std::collections::BTreeMap;

use serde::Serialize;

/// Locale used for statement name/description maps
pub const STATEMENT_LOCALE: &str = "en-US";

/// Interaction category URI for this activity type
pub const ACTIVITY_TYPE: &str = "http://adlnet.gov/expapi/activities/cmi.interaction";

/// Verb prefix in the xAPI registry
const VERB_BASE: &str = "http://adlnet.gov/expapi/verbs/";

/// Statement verb
#[derive(Clone, Debug, Serialize)]
pub struct Verb {
    pub id: String,
    pub display: BTreeMap<String, String>,
}

impl Verb {
    fn new(verb: &str) -> Self {
        let mut display = BTreeMap::new();
        display.insert(STATEMENT_LOCALE.to_string(), verb.to_string());
        Self {
            id: format!("{VERB_BASE}{verb}"),
            display,
        }
    }
}

/// Activity definition: what the learner interacted with
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Definition {
    pub name: BTreeMap<String, String>,
    pub description: BTreeMap<String, String>,
    #[serde(rename = "type")]
    pub activity_type: String,
    // TODO richer interaction types (fill-in per region) once the host
    // consumes more than "other"
    pub interaction_type: String,
}

impl Definition {
    /// Build a definition from sanitized title and description
    pub fn new(title: &str, description: &str) -> Self {
        let locale = |text: &str| {
            let mut map = BTreeMap::new();
            map.insert(STATEMENT_LOCALE.to_string(), text.to_string());
            map
        };
        Self {
            name: locale(title),
            description: locale(description),
            activity_type: ACTIVITY_TYPE.to_string(),
            interaction_type: "other".to_string(),
        }
    }
}

/// Statement object block
#[derive(Clone, Debug, Serialize)]
pub struct XapiObject {
    pub definition: Definition,
}

/// Score block of a result
#[derive(Clone, Copy, Debug, Serialize)]
pub struct Score {
    pub min: i32,
    pub max: i32,
    pub raw: i32,
}

/// Result block of a scored statement
#[derive(Clone, Debug, Serialize)]
pub struct XapiResult {
    pub score: Score,
    pub completion: bool,
    pub success: bool,
}

/// One reporting statement
#[derive(Clone, Debug, Serialize)]
pub struct XapiStatement {
    pub verb: Verb,
    pub object: XapiObject,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<XapiResult>,
}

/// Reporting event wrapping a statement, as dispatched to the host
#[derive(Clone, Debug, Serialize)]
pub struct XapiEvent {
    pub statement: XapiStatement,
}

impl XapiEvent {
    /// Template an event for an arbitrary verb
    pub fn template(verb: &str, definition: Definition) -> Self {
        Self {
            statement: XapiStatement {
                verb: Verb::new(verb),
                object: XapiObject { definition },
                result: None,
            },
        }
    }

    /// Attach a scored result block
    pub fn set_scored_result(&mut self, score: i32, max_score: i32, completion: bool, success: bool) {
        self.statement.result = Some(XapiResult {
            score: Score {
                min: 0,
                max: max_score,
                raw: score,
            },
            completion,
            success,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verb_uri() {
        let event = XapiEvent::template("answered", Definition::new("t", "d"));

        assert_eq!(
            event.statement.verb.id,
            "http://adlnet.gov/expapi/verbs/answered"
        );
        assert_eq!(
            event.statement.verb.display.get(STATEMENT_LOCALE).unwrap(),
            "answered"
        );
    }

    #[test]
    fn test_definition_fields() {
        let definition = Definition::new("My Title", "Do the thing");

        assert_eq!(definition.name.get(STATEMENT_LOCALE).unwrap(), "My Title");
        assert_eq!(definition.activity_type, ACTIVITY_TYPE);
        assert_eq!(definition.interaction_type, "other");
    }

    #[test]
    fn test_scored_result_serialization() {
        let mut event = XapiEvent::template("answered", Definition::new("t", "d"));
        event.set_scored_result(0, 0, true, true);

        let json = serde_json::to_value(&event).unwrap();
        let result = &json["statement"]["result"];

        assert_eq!(result["score"]["min"], 0);
        assert_eq!(result["score"]["max"], 0);
        assert_eq!(result["score"]["raw"], 0);
        assert_eq!(result["completion"], true);
        assert_eq!(result["success"], true);
        assert_eq!(
            json["statement"]["object"]["definition"]["interactionType"],
            "other"
        );
    }

    #[test]
    fn test_template_has_no_result() {
        let event = XapiEvent::template("attempted", Definition::new("t", "d"));
        let json = serde_json::to_value(&event).unwrap();

        assert!(json["statement"].get("result").is_none());
    }
}
