use serde::Deserialize;

/// ESearch XML response (`<eSearchResult>`)
///
/// Only the parts the fetcher reads are modelled; `TranslationSet`,
/// `TranslationStack` and friends are ignored.
#[derive(Debug, Deserialize)]
pub(crate) struct ESearchResult {
    #[serde(rename = "Count", default)]
    pub count: Option<String>,
    #[serde(rename = "IdList", default)]
    pub id_list: Option<IdList>,
    /// Returned with a 200 status when NCBI cannot run the term
    #[serde(rename = "ERROR", default)]
    pub error: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
pub(crate) struct IdList {
    #[serde(rename = "Id", default)]
    pub ids: Vec<String>,
}

impl ESearchResult {
    pub fn into_ids(self) -> Vec<String> {
        self.id_list
            .map(|list| {
                list.ids
                    .into_iter()
                    .map(|id| id.trim().to_string())
                    .filter(|id| !id.is_empty())
                    .collect()
            })
            .unwrap_or_default()
    }
}
