//! Row extraction over hand-built EFetch documents
//!
//! Each test assembles a small `PubmedArticleSet` and checks the rows that
//! come out of [`extract_rows`] with the default pharma/biotech filter.

use pubmed_affil::{AffiliationFilter, PubMedError, UNKNOWN, extract_rows, parse_article_records};
use rstest::rstest;

fn author(fore: Option<&str>, last: Option<&str>, affiliations: &[&str]) -> String {
    let mut xml = String::from("<Author ValidYN=\"Y\">");
    if let Some(last) = last {
        xml.push_str(&format!("<LastName>{last}</LastName>"));
    }
    if let Some(fore) = fore {
        xml.push_str(&format!("<ForeName>{fore}</ForeName>"));
    }
    for affiliation in affiliations {
        xml.push_str(&format!(
            "<AffiliationInfo><Affiliation>{affiliation}</Affiliation></AffiliationInfo>"
        ));
    }
    xml.push_str("</Author>");
    xml
}

fn article(pmid: &str, title: &str, pub_date: &str, authors: &[String]) -> String {
    format!(
        r#"<PubmedArticle>
  <MedlineCitation Status="MEDLINE" Owner="NLM">
    <PMID Version="1">{pmid}</PMID>
    <Article PubModel="Print">
      <Journal>
        <JournalIssue CitedMedium="Internet">
          <PubDate>{pub_date}</PubDate>
        </JournalIssue>
      </Journal>
      <ArticleTitle>{title}</ArticleTitle>
      <AuthorList CompleteYN="Y">{}</AuthorList>
    </Article>
  </MedlineCitation>
</PubmedArticle>"#,
        authors.concat()
    )
}

fn article_set(articles: &[String]) -> String {
    format!(
        "<?xml version=\"1.0\" ?>\n<PubmedArticleSet>{}</PubmedArticleSet>",
        articles.concat()
    )
}

const FEB_2024: &str = "<Year>2024</Year><Month>Feb</Month>";

#[test]
fn test_only_articles_with_industry_authors_are_kept() {
    let xml = article_set(&[
        article(
            "100",
            "Article A",
            FEB_2024,
            &[author(Some("Ann"), Some("Lee"), &["XYZ Biotech Inc."])],
        ),
        article(
            "200",
            "Article B",
            FEB_2024,
            &[author(Some("Bo"), Some("Chen"), &["State University"])],
        ),
    ]);

    let rows = extract_rows(&xml, &AffiliationFilter::default()).unwrap();

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].pmid, "100");
    assert_eq!(rows[0].title, "Article A");
    assert_eq!(rows[0].publication_date, "2024-Feb");
    assert_eq!(rows[0].authors, "Ann Lee");
}

#[test]
fn test_qualifying_authors_joined_in_document_order() {
    let xml = article_set(&[article(
        "300",
        "Multi-site trial",
        FEB_2024,
        &[
            author(Some("Zoe"), Some("Adams"), &["Acme Pharmaceutical Co."]),
            author(Some("Yan"), Some("Bell"), &["City Hospital"]),
            author(Some("Xavier"), Some("Cruz"), &["Novel Biotech GmbH"]),
        ],
    )]);

    let rows = extract_rows(&xml, &AffiliationFilter::default()).unwrap();
    assert_eq!(rows[0].authors, "Zoe Adams, Xavier Cruz");
}

#[test]
fn test_author_listed_once_with_several_matching_affiliations() {
    let xml = article_set(&[article(
        "400",
        "Dual affiliations",
        FEB_2024,
        &[author(
            Some("Ann"),
            Some("Lee"),
            &["Acme Pharmaceutical Co.", "XYZ Biotech Inc."],
        )],
    )]);

    let rows = extract_rows(&xml, &AffiliationFilter::default()).unwrap();
    assert_eq!(rows[0].authors, "Ann Lee");
}

#[rstest]
#[case("<Month>Feb</Month>")]
#[case("<Year>2024</Year>")]
#[case("")]
#[case("<MedlineDate>2023 Nov-Dec</MedlineDate>")]
fn test_incomplete_date_is_unknown(#[case] pub_date: &str) {
    let xml = article_set(&[article(
        "500",
        "Dateless",
        pub_date,
        &[author(Some("Ann"), Some("Lee"), &["Pharmaceutical Sciences Ltd"])],
    )]);

    let rows = extract_rows(&xml, &AffiliationFilter::default()).unwrap();
    assert_eq!(rows[0].publication_date, UNKNOWN);
}

#[rstest]
#[case(None, Some("Lee"))]
#[case(Some("Ann"), None)]
#[case(None, None)]
fn test_incomplete_name_is_unknown(#[case] fore: Option<&str>, #[case] last: Option<&str>) {
    let xml = article_set(&[article(
        "600",
        "Anonymous",
        FEB_2024,
        &[author(fore, last, &["BIOTECH Partners"])],
    )]);

    let rows = extract_rows(&xml, &AffiliationFilter::default()).unwrap();
    assert_eq!(rows[0].authors, UNKNOWN);
}

#[rstest]
#[case("ACME PHARMACEUTICAL")]
#[case("acme biotech")]
#[case("Department of Biotechnology, Some University")]
#[case("Biopharmaceutical Research Unit")]
fn test_keyword_match_is_case_insensitive_substring(#[case] affiliation: &str) {
    let xml = article_set(&[article(
        "700",
        "Matching",
        FEB_2024,
        &[author(Some("Ann"), Some("Lee"), &[affiliation])],
    )]);

    let rows = extract_rows(&xml, &AffiliationFilter::default()).unwrap();
    assert_eq!(rows.len(), 1);
}

#[test]
fn test_empty_affiliation_does_not_break_matching() {
    let empty_then_match = r#"<Author ValidYN="Y">
  <LastName>Lee</LastName>
  <ForeName>Ann</ForeName>
  <AffiliationInfo><Affiliation></Affiliation></AffiliationInfo>
  <AffiliationInfo><Identifier Source="ROR">https://ror.org/000</Identifier></AffiliationInfo>
  <AffiliationInfo><Affiliation>XYZ Biotech Inc.</Affiliation></AffiliationInfo>
</Author>"#
        .to_string();
    let xml = article_set(&[article("800", "Sparse", FEB_2024, &[empty_then_match])]);

    let records = parse_article_records(&xml).unwrap();
    assert_eq!(records[0].authors[0].affiliations.len(), 3);
    assert_eq!(records[0].authors[0].affiliations[0], None);
    assert_eq!(records[0].authors[0].affiliations[1], None);

    let rows = extract_rows(&xml, &AffiliationFilter::default()).unwrap();
    assert_eq!(rows[0].authors, "Ann Lee");
}

#[test]
fn test_article_without_authors_is_dropped() {
    let xml = article_set(&[article("900", "No authors", FEB_2024, &[])]);
    assert!(extract_rows(&xml, &AffiliationFilter::default()).unwrap().is_empty());
}

#[test]
fn test_no_qualifying_authors_yields_empty() {
    let xml = article_set(&[
        article(
            "1000",
            "Academic only",
            FEB_2024,
            &[author(Some("Ann"), Some("Lee"), &["Harvard Medical School"])],
        ),
        article(
            "1001",
            "Also academic",
            FEB_2024,
            &[author(Some("Bo"), Some("Chen"), &["University of Tokyo"])],
        ),
    ]);

    let rows = extract_rows(&xml, &AffiliationFilter::default()).unwrap();
    assert!(rows.is_empty());
}

#[test]
fn test_inline_markup_in_title_is_flattened() {
    let xml = article_set(&[article(
        "1100",
        "Role of <i>KRAS</i> G12C in <sup>18</sup>F imaging",
        FEB_2024,
        &[author(Some("Ann"), Some("Lee"), &["Pharmaceutical Division"])],
    )]);

    let rows = extract_rows(&xml, &AffiliationFilter::default()).unwrap();
    assert_eq!(rows[0].title, "Role of KRAS G12C in 18F imaging");
}

#[test]
fn test_missing_title_fails_whole_document() {
    let good = article(
        "1200",
        "Fine",
        FEB_2024,
        &[author(Some("Ann"), Some("Lee"), &["Pharmaceutical Division"])],
    );
    let untitled = r#"<PubmedArticle><MedlineCitation>
  <PMID Version="1">1201</PMID>
  <Article><AuthorList/></Article>
</MedlineCitation></PubmedArticle>"#
        .to_string();

    let err = extract_rows(&article_set(&[good, untitled]), &AffiliationFilter::default())
        .unwrap_err();
    assert!(matches!(err, PubMedError::XmlParseError { .. }), "got {err:?}");
}

#[test]
fn test_book_entries_between_journal_articles_are_skipped() {
    let book = r#"<PubmedBookArticle>
  <BookDocument>
    <PMID Version="1">1300</PMID>
    <Book><BookTitle>Drug Development Handbook</BookTitle></Book>
    <ArticleTitle>Chapter 4: Biotech licensing</ArticleTitle>
  </BookDocument>
</PubmedBookArticle>"#
        .to_string();
    let xml = article_set(&[
        article(
            "1301",
            "First journal article",
            FEB_2024,
            &[author(Some("Ann"), Some("Lee"), &["Acme Biotech"])],
        ),
        book,
        article(
            "1302",
            "Second journal article",
            FEB_2024,
            &[author(Some("Bo"), Some("Chen"), &["Pharmaceutical Research Ltd"])],
        ),
    ]);

    let rows = extract_rows(&xml, &AffiliationFilter::default()).unwrap();

    let pmids: Vec<&str> = rows.iter().map(|row| row.pmid.as_str()).collect();
    assert_eq!(pmids, vec!["1301", "1302"]);
}

#[test]
fn test_unknown_markup_in_title_keeps_its_text() {
    let xml = article_set(&[article(
        "1400",
        r#"Dose of <mml:math xmlns:mml="http://www.w3.org/1998/Math/MathML"><mml:mi>x</mml:mi></mml:math> in mice"#,
        FEB_2024,
        &[author(Some("Ann"), Some("Lee"), &["Acme Biotech"])],
    )]);

    let rows = extract_rows(&xml, &AffiliationFilter::default()).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].title, "Dose of x in mice");
}
