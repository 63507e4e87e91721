use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value as JsonValue;

// ---------------------------------------------------------------------------
// FullTimeFlag – the tri-encoded `fulltime` field
// ---------------------------------------------------------------------------

/// Raw `fulltime` value exactly as it appeared in the source data.
///
/// The datasets encode this flag as a JSON boolean, a string or a number,
/// depending on who edited the record. The value is kept as-is and only
/// normalized through [`FullTimeFlag::is_full_time`], because the string
/// and number rules differ (`"1"` is false, `1` is true).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FullTimeFlag {
    Bool(bool),
    Num(f64),
    Str(String),
    /// null, arrays, objects, or a missing field.
    Other(JsonValue),
}

impl Default for FullTimeFlag {
    fn default() -> Self {
        FullTimeFlag::Other(JsonValue::Null)
    }
}

impl FullTimeFlag {
    /// Normalize to a strict boolean.
    ///
    /// * `Bool` → itself
    /// * `Str`  → true iff the lowercased text is exactly `"true"`
    /// * `Num`  → true iff the number is exactly 1
    /// * anything else → false
    pub fn is_full_time(&self) -> bool {
        match self {
            FullTimeFlag::Bool(b) => *b,
            FullTimeFlag::Str(s) => s.to_lowercase() == "true",
            FullTimeFlag::Num(n) => *n == 1.0,
            FullTimeFlag::Other(_) => false,
        }
    }
}

// ---------------------------------------------------------------------------
// Headcount – the free-form `employees` field
// ---------------------------------------------------------------------------

/// Employee count as the dataset states it: `120`, `12.5` or `"200+"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Headcount {
    Count(u64),
    Approx(f64),
    Text(String),
}

impl Headcount {
    /// Interpret a text cell; blank cells carry no headcount.
    pub fn from_cell(cell: &str) -> Option<Self> {
        let cell = cell.trim();
        if cell.is_empty() {
            return None;
        }
        if let Ok(n) = cell.parse::<u64>() {
            return Some(Headcount::Count(n));
        }
        if let Ok(v) = cell.parse::<f64>() {
            return Some(Headcount::Approx(v));
        }
        Some(Headcount::Text(cell.to_string()))
    }
}

impl fmt::Display for Headcount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Headcount::Count(n) => write!(f, "{n}"),
            Headcount::Approx(v) => write!(f, "{v}"),
            Headcount::Text(s) => write!(f, "{s}"),
        }
    }
}

// ---------------------------------------------------------------------------
// Company
// ---------------------------------------------------------------------------

/// An employer. `name` is the identity key used by job records and links.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Company {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub industry: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employees: Option<Headcount>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub location: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

// ---------------------------------------------------------------------------
// Job
// ---------------------------------------------------------------------------

/// A posted opening, linked to a [`Company`] through `business`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
    pub name: String,
    /// Company name. Not enforced; may not resolve to any company.
    #[serde(default, deserialize_with = "null_as_default")]
    pub business: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub location: String,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub job_type: Option<String>,
    /// Free-form salary text such as `"$50,000"` or `"50k"`.
    #[serde(
        default,
        deserialize_with = "string_or_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub salary: Option<String>,
    #[serde(default)]
    pub fulltime: FullTimeFlag,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placement: Option<JsonValue>,
}

impl Job {
    pub fn is_full_time(&self) -> bool {
        self.fulltime.is_full_time()
    }

    /// Whether the posting counts as a placement (JSON truthiness).
    pub fn is_placement(&self) -> bool {
        match &self.placement {
            None | Some(JsonValue::Null) => false,
            Some(JsonValue::Bool(b)) => *b,
            Some(JsonValue::Number(n)) => n.as_f64().is_some_and(|v| v != 0.0 && !v.is_nan()),
            Some(JsonValue::String(s)) => !s.is_empty(),
            Some(JsonValue::Array(_)) | Some(JsonValue::Object(_)) => true,
        }
    }

    pub fn employment_label(&self) -> &'static str {
        if self.is_full_time() {
            "Full-time"
        } else {
            "Part-time"
        }
    }
}

/// Read an explicit `null` the same way as a missing key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Accept `"salary": "$40,000"` as well as `"salary": 40000`.
fn string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match Option::<Raw>::deserialize(deserializer)? {
        Some(Raw::Text(s)) => Some(s),
        Some(Raw::Number(n)) => Some(n.to_string()),
        None => None,
    })
}
