use serde::{Deserialize, Deserializer, Serialize};
use ts_rs::TS;

/// A comparable tool or database as stored by the content site.
///
/// Qualitative fields are free text ("Easy", "High", "Excellent", "$20/mo").
/// Any of them may be absent; scorers fall back to a neutral score.
/// Explicit `null` is read the same as a missing key.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase", default)]
pub struct ToolRecord {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub category: String,
    pub pricing: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub open_source: bool,
    pub ease_of_use: Option<String>,
    pub reliability: Option<String>,
    pub documentation: Option<String>,
    pub community: Option<String>,
    /// Informational only. Not used in scoring.
    #[serde(deserialize_with = "null_as_default")]
    pub features: Vec<String>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl ToolRecord {
    /// Create a record with identity fields only. Every descriptor is absent.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn with_pricing(mut self, pricing: impl Into<String>) -> Self {
        self.pricing = Some(pricing.into());
        self
    }

    pub fn with_open_source(mut self, open_source: bool) -> Self {
        self.open_source = open_source;
        self
    }

    pub fn with_ease_of_use(mut self, ease: impl Into<String>) -> Self {
        self.ease_of_use = Some(ease.into());
        self
    }

    pub fn with_reliability(mut self, reliability: impl Into<String>) -> Self {
        self.reliability = Some(reliability.into());
        self
    }

    pub fn with_documentation(mut self, documentation: impl Into<String>) -> Self {
        self.documentation = Some(documentation.into());
        self
    }

    pub fn with_community(mut self, community: impl Into<String>) -> Self {
        self.community = Some(community.into());
        self
    }

    pub fn with_features<I, S>(mut self, features: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.features = features.into_iter().map(Into::into).collect();
        self
    }
}
