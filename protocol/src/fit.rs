#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::ParseError;

/// Text returned by the health check.
pub const GREETING: &str = "HELLO ELEPOKE!!";

/// Two rosters of creature names, one per side.
///
/// Blank strings are kept; they mark an unassigned slot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FitRequest {
    pub mypoke: Vec<String>,
    pub oppoke: Vec<String>,
}

impl FitRequest {
    pub fn new<A, B>(mypoke: A, oppoke: B) -> Self
    where
        A: IntoIterator,
        A::Item: Into<String>,
        B: IntoIterator,
        B::Item: Into<String>,
    {
        Self {
            mypoke: mypoke.into_iter().map(Into::into).collect(),
            oppoke: oppoke.into_iter().map(Into::into).collect(),
        }
    }
}

/// One ranked roster slot as it appears on the wire
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedEntry {
    pub index: usize,
    pub name: String,
    #[serde(rename = "Evaluation")]
    pub evaluation: u32,
    pub rank: usize,
}

/// Ranked rosters, each in input order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FitResponse {
    pub mypoke: Vec<RankedEntry>,
    pub oppoke: Vec<RankedEntry>,
}

/// Parse a JSON request body into a [`FitRequest`]
///
/// Both `mypoke` and `oppoke` must be present and must be arrays of strings.
/// A `null` element is read as a blank slot.
pub fn parse_fit_request(body: &str) -> Result<FitRequest, ParseError> {
    if body.trim().is_empty() {
        return Err(ParseError::EmptyMessage);
    }

    let value: Value =
        serde_json::from_str(body).map_err(|e| ParseError::InvalidFormat(e.to_string()))?;
    let object = value
        .as_object()
        .ok_or_else(|| ParseError::InvalidFormat("request body must be an object".into()))?;

    Ok(FitRequest {
        mypoke: parse_roster(object.get("mypoke"), "mypoke")?,
        oppoke: parse_roster(object.get("oppoke"), "oppoke")?,
    })
}

fn parse_roster(value: Option<&Value>, field: &str) -> Result<Vec<String>, ParseError> {
    let items = value
        .ok_or_else(|| ParseError::MissingField(field.to_string()))?
        .as_array()
        .ok_or_else(|| ParseError::InvalidFormat(format!("{field} must be an array")))?;

    items
        .iter()
        .map(|item| match item {
            Value::String(name) => Ok(name.clone()),
            Value::Null => Ok(String::new()),
            other => Err(ParseError::InvalidFormat(format!(
                "{field} entries must be strings, got {other}"
            ))),
        })
        .collect()
}
