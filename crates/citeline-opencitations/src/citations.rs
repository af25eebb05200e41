//! Citing-work entries from `GET /citations/{doi}`

use serde::{Deserialize, Deserializer, Serialize};

/// Raw citation entry; v1 also sends `oci`, `cited` and `timespan`,
/// which are ignored.
#[derive(Debug, Deserialize, Default)]
pub struct CitationEntry {
    #[serde(default, deserialize_with = "lenient_text")]
    pub citing: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub creation: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub journal_sc: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub author_sc: String,
}

/// Citing work in the fixed four-field shape used by the report.
///
/// `journal_sc` / `author_sc` are the index's journal and author
/// self-citation flags ("yes"/"no"), passed through untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct CitationDetail {
    /// DOI of the citing work
    pub doi: String,
    /// Publication date of the citing work (`YYYY`, `YYYY-MM` or `YYYY-MM-DD`)
    pub creation: String,
    pub journal_sc: String,
    pub author_sc: String,
}

impl From<CitationEntry> for CitationDetail {
    fn from(entry: CitationEntry) -> Self {
        Self {
            doi: entry.citing,
            creation: entry.creation,
            journal_sc: entry.journal_sc,
            author_sc: entry.author_sc,
        }
    }
}

/// Accept any JSON scalar as text; `null` and containers become "".
fn lenient_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(citeline_core::de::lenient_text(deserializer)?.unwrap_or_default())
}

/// Map a decoded response body to details, preserving upstream order.
pub fn into_details(entries: Vec<CitationEntry>) -> Vec<CitationDetail> {
    entries.into_iter().map(CitationDetail::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> Vec<CitationDetail> {
        into_details(serde_json::from_str(json).expect("valid JSON"))
    }

    #[test]
    fn maps_v1_entry() {
        let details = parse(
            r#"[{"oci":"0200-0300","citing":"10.2/def","cited":"10.1/abc",
                "creation":"2021-05","timespan":"P1Y","journal_sc":"no","author_sc":"yes"}]"#,
        );
        assert_eq!(
            details,
            vec![CitationDetail {
                doi: "10.2/def".into(),
                creation: "2021-05".into(),
                journal_sc: "no".into(),
                author_sc: "yes".into(),
            }]
        );
    }

    #[test]
    fn missing_and_null_fields_are_empty() {
        let details = parse(r#"[{"citing":"10.2/x","creation":null},{}]"#);
        assert_eq!(details[0].doi, "10.2/x");
        assert_eq!(details[0].creation, "");
        assert_eq!(details[0].journal_sc, "");
        assert_eq!(details[1], CitationDetail::default());
    }

    #[test]
    fn non_string_scalars_become_text() {
        let details = parse(r#"[{"citing":"10.2/x","journal_sc":false,"creation":2020}]"#);
        assert_eq!(details[0].journal_sc, "false");
        assert_eq!(details[0].creation, "2020");
    }

    #[test]
    fn order_is_preserved() {
        let details = parse(r#"[{"citing":"b"},{"citing":"a"},{"citing":"c"}]"#);
        let dois: Vec<&str> = details.iter().map(|d| d.doi.as_str()).collect();
        assert_eq!(dois, ["b", "a", "c"]);
    }

    #[test]
    fn detail_serializes_four_fields_in_order() {
        let json = serde_json::to_string(&CitationDetail {
            doi: "d".into(),
            creation: "c".into(),
            journal_sc: "j".into(),
            author_sc: "a".into(),
        })
        .unwrap();
        assert_eq!(
            json,
            r#"{"doi":"d","creation":"c","journal_sc":"j","author_sc":"a"}"#
        );
    }
}
