//! Serde mirror of the parts of the EFetch `PubmedArticleSet` schema we read
//!
//! `PMID`, `Article` and `ArticleTitle` are required: a record without them
//! fails deserialization of the whole set. Everything else is optional and
//! defaults to empty. Siblings other than `PubmedArticle` (book entries) are
//! skipped.

use serde::Deserialize;

use super::deserializers::deserialize_flattened_text;
use crate::pubmed::models::{ArticleRecord, AuthorRecord};

#[derive(Debug, Deserialize)]
pub(super) struct PubmedArticleSet {
    #[serde(rename = "PubmedArticle", default)]
    pub articles: Vec<PubmedArticleXml>,
}

#[derive(Debug, Deserialize)]
pub(super) struct PubmedArticleXml {
    #[serde(rename = "MedlineCitation")]
    pub medline_citation: MedlineCitationXml,
}

#[derive(Debug, Deserialize)]
pub(super) struct MedlineCitationXml {
    #[serde(rename = "PMID")]
    pub pmid: PmidXml,
    #[serde(rename = "Article")]
    pub article: ArticleXml,
}

#[derive(Debug, Deserialize)]
pub(super) struct PmidXml {
    #[serde(rename = "$text")]
    pub value: String,
}

#[derive(Debug, Deserialize)]
pub(super) struct ArticleXml {
    #[serde(rename = "Journal", default)]
    pub journal: Option<JournalXml>,
    #[serde(rename = "ArticleTitle", deserialize_with = "deserialize_flattened_text")]
    pub article_title: String,
    #[serde(rename = "AuthorList", default)]
    pub author_list: Option<AuthorListXml>,
}

#[derive(Debug, Deserialize)]
pub(super) struct JournalXml {
    #[serde(rename = "JournalIssue", default)]
    pub journal_issue: Option<JournalIssueXml>,
}

#[derive(Debug, Deserialize)]
pub(super) struct JournalIssueXml {
    #[serde(rename = "PubDate", default)]
    pub pub_date: Option<PubDateXml>,
}

/// `PubDate` carries either Year/Month/Day or a free-form `MedlineDate`
#[derive(Debug, Deserialize)]
pub(super) struct PubDateXml {
    #[serde(rename = "Year", default)]
    pub year: Option<String>,
    #[serde(rename = "Month", default)]
    pub month: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(super) struct AuthorListXml {
    #[serde(rename = "Author", default)]
    pub authors: Vec<AuthorXml>,
}

#[derive(Debug, Deserialize)]
pub(super) struct AuthorXml {
    #[serde(rename = "LastName", default)]
    pub last_name: Option<String>,
    #[serde(rename = "ForeName", default)]
    pub fore_name: Option<String>,
    #[serde(rename = "AffiliationInfo", default)]
    pub affiliation_info: Vec<AffiliationInfoXml>,
}

#[derive(Debug, Deserialize)]
pub(super) struct AffiliationInfoXml {
    #[serde(rename = "Affiliation", default)]
    pub affiliation: Option<String>,
}

/// Blank or whitespace-only element text counts as absent
fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

impl From<AuthorXml> for AuthorRecord {
    fn from(author: AuthorXml) -> Self {
        AuthorRecord {
            fore_name: non_blank(author.fore_name),
            last_name: non_blank(author.last_name),
            affiliations: author
                .affiliation_info
                .into_iter()
                .map(|info| non_blank(info.affiliation))
                .collect(),
        }
    }
}

impl From<PubmedArticleXml> for ArticleRecord {
    fn from(xml: PubmedArticleXml) -> Self {
        let citation = xml.medline_citation;
        let article = citation.article;

        let pub_date = article
            .journal
            .and_then(|j| j.journal_issue)
            .and_then(|issue| issue.pub_date);
        let (pub_year, pub_month) = match pub_date {
            Some(date) => (non_blank(date.year), non_blank(date.month)),
            None => (None, None),
        };

        ArticleRecord {
            pmid: citation.pmid.value.trim().to_string(),
            title: article.article_title.trim().to_string(),
            pub_year,
            pub_month,
            authors: article
                .author_list
                .map(|list| list.authors.into_iter().map(AuthorRecord::from).collect())
                .unwrap_or_default(),
        }
    }
}
