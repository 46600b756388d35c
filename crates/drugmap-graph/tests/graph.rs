//! End-to-end tests for extraction, graph building and journal reports.

use std::collections::BTreeSet;

use chrono::NaiveDate;

use drugmap_graph::{build, extract, top_journals};
use drugmap_model::{
    ClinicalTrial, Drug, MentionGraph, PubMedArticle, Publication, SourceType, UNKNOWN_JOURNAL,
};
use drugmap_normalize::format_date;

fn article(id: &str, title: &str, journal: &str, date: Option<NaiveDate>) -> Publication {
    Publication::PubMedArticle(PubMedArticle {
        id: id.to_string(),
        title: title.to_string(),
        date,
        journal: journal.to_string(),
    })
}

fn trial(id: &str, title: &str, journal: &str, date: Option<NaiveDate>) -> Publication {
    Publication::ClinicalTrial(ClinicalTrial {
        id: id.to_string(),
        scientific_title: title.to_string(),
        date,
        journal: journal.to_string(),
    })
}

fn run(drugs: &[Drug], publications: &[Publication]) -> MentionGraph {
    let mentions = extract(drugs, publications);
    build(&mentions, drugs).unwrap()
}

fn sample() -> (Vec<Drug>, Vec<Publication>) {
    let drugs = vec![
        Drug::new("A04AD", "DIPHENHYDRAMINE"),
        Drug::new("S03AA", "TETRACYCLINE"),
        Drug::new("V03AB", "ETHANOL"),
        Drug::new("A03BA", "ATROPINE"),
        Drug::new("A01AD", "EPINEPHRINE"),
        Drug::new("6302001", "ISOPRENALINE"),
        Drug::new("R01AD", "BETAMETHASONE"),
    ];
    let publications = vec![
        article(
            "1",
            "A 44-year-old man with erythema of the face diphenhydramine, neck, and chest",
            "Journal of emergency nursing",
            NaiveDate::from_ymd_opt(2019, 1, 1),
        ),
        article(
            "4",
            "Tetracycline Resistance Patterns of Lactobacillus buchneri Group Strains.",
            "Journal of food protection",
            NaiveDate::from_ymd_opt(2020, 1, 1),
        ),
        article(
            "6",
            "Rapid reacquisition of contextual fear following extinction in mice: effects of amount of extinction, tetracycline acute ethanol withdrawal, and ethanol intoxication.",
            "Psychopharmacology",
            NaiveDate::from_ymd_opt(2020, 1, 1),
        ),
        trial(
            "NCT01967433",
            "Use of Diphenhydramine as an Adjunctive Sedative for Colonoscopy in Patients Chronically on Opioids",
            "Journal of emergency nursing",
            NaiveDate::from_ymd_opt(2020, 1, 1),
        ),
        trial(
            "NCT04189588",
            "Phase 2 Study IV QUZYTTIR™ (Cetirizine Hydrochloride Injection) vs V Diphenhydramine",
            "Journal of emergency nursing",
            NaiveDate::from_ymd_opt(2020, 1, 1),
        ),
        trial(
            "NCT04237091",
            "Feasibility of a Randomized Controlled Clinical Trial Comparing the Use of Cetirizine to Replace Diphenhydramine in the Prevention of Reactions Related to Paclitaxel",
            "Journal of emergency nursing",
            NaiveDate::from_ymd_opt(2020, 1, 1),
        ),
    ];
    (drugs, publications)
}

#[test]
fn single_mention_document() {
    let drugs = vec![Drug::new("A01AD", "EPINEPHRINE")];
    let publications = vec![article(
        "1",
        "EPINEPHRINE induces tachycardia",
        "Journal Of Emergency",
        NaiveDate::from_ymd_opt(2019, 1, 1),
    )];
    let graph = run(&drugs, &publications);
    let json = serde_json::to_string(&graph).unwrap();
    insta::assert_snapshot!(json, @r#"{"EPINEPHRINE":[{"journal":"Journal Of Emergency","mentions":[{"id":"1","source":"pubmed","date":"2019-01-01"}]}]}"#);
}

#[test]
fn unmatched_drug_keeps_empty_entry() {
    let drugs = vec![Drug::new("B01AC06", "ASPIRIN")];
    let publications = vec![article("1", "Nothing relevant", "J", None)];
    let graph = run(&drugs, &publications);
    let json = serde_json::to_string(&graph).unwrap();
    insta::assert_snapshot!(json, @r#"{"ASPIRIN":[]}"#);
}

#[test]
fn undated_publication_serializes_null_date() {
    let drugs = vec![Drug::new("A03BA", "ATROPINE")];
    let publications = vec![trial("NCT1", "Atropine in surgery", "Journal", None)];
    let graph = run(&drugs, &publications);
    let json = serde_json::to_string(&graph).unwrap();
    insta::assert_snapshot!(json, @r#"{"ATROPINE":[{"journal":"Journal","mentions":[{"id":"NCT1","source":"clinical_trials","date":null}]}]}"#);
}

#[test]
fn repeated_publication_collapses() {
    let drugs = vec![Drug::new("A03BA", "ATROPINE")];
    let publications = vec![
        article("7", "Atropine   and surgery", "J", NaiveDate::from_ymd_opt(2020, 1, 1)),
        article("7", "Atropine and surgery", "J", NaiveDate::from_ymd_opt(2020, 1, 2)),
    ];
    let graph = run(&drugs, &publications);
    let entry = graph.get("ATROPINE").unwrap();
    assert_eq!(entry.mention_count(), 1);
    assert_eq!(
        entry.journals[0].mentions[0].date,
        NaiveDate::from_ymd_opt(2020, 1, 2)
    );
}

#[test]
fn every_drug_appears_in_input_order() {
    let (drugs, publications) = sample();
    let graph = run(&drugs, &publications);
    let names: Vec<&str> = graph.drug_names().collect();
    let expected: Vec<&str> = drugs.iter().map(|d| d.name.as_str()).collect();
    assert_eq!(names, expected);
    assert!(graph.get("ISOPRENALINE").unwrap().is_empty());
    assert!(graph.get("BETAMETHASONE").unwrap().is_empty());
}

#[test]
fn no_publication_listed_twice_under_a_drug() {
    let (drugs, publications) = sample();
    let graph = run(&drugs, &publications);
    for entry in graph.entries() {
        let mut seen: BTreeSet<(&str, SourceType)> = BTreeSet::new();
        for group in &entry.journals {
            for reference in &group.mentions {
                assert!(
                    seen.insert((reference.id.as_str(), reference.source)),
                    "{} lists {} twice",
                    entry.drug,
                    reference.id
                );
            }
        }
    }
}

#[test]
fn sample_groups_under_journals() {
    let (drugs, publications) = sample();
    let graph = run(&drugs, &publications);

    let diphenhydramine = graph.get("DIPHENHYDRAMINE").unwrap();
    assert_eq!(diphenhydramine.journals.len(), 1);
    assert_eq!(
        diphenhydramine.journals[0].journal,
        "Journal of emergency nursing"
    );
    assert_eq!(diphenhydramine.mention_count(), 4);

    let tetracycline = graph.get("TETRACYCLINE").unwrap();
    let journals: Vec<&str> = tetracycline
        .journals
        .iter()
        .map(|g| g.journal.as_str())
        .collect();
    assert_eq!(journals, vec!["Journal of food protection", "Psychopharmacology"]);

    assert_eq!(graph.get("ETHANOL").unwrap().mention_count(), 1);
}

#[test]
fn output_is_byte_identical_across_runs() {
    let (drugs, publications) = sample();
    let first = serde_json::to_string(&run(&drugs, &publications)).unwrap();
    let second = serde_json::to_string(&run(&drugs, &publications)).unwrap();
    assert_eq!(first, second);
}

#[test]
fn document_reads_back_to_same_graph() {
    let (drugs, publications) = sample();
    let graph = run(&drugs, &publications);
    let json = serde_json::to_string_pretty(&graph).unwrap();
    let parsed: MentionGraph = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, graph);
}

#[test]
fn substring_match_inside_words() {
    let drugs = vec![Drug::new("B01AC06", "aspirin")];
    let publications = vec![article("1", "The hyperaspirined cohort", "J", None)];
    let graph = run(&drugs, &publications);
    assert_eq!(graph.mention_count(), 1);
}

#[test]
fn top_journal_counts_distinct_drugs() {
    let drugs = vec![
        Drug::new("1", "ATROPINE"),
        Drug::new("2", "ETHANOL"),
        Drug::new("3", "TETRACYCLINE"),
    ];
    let publications = vec![
        article("1", "atropine with ethanol", "X", None),
        article("2", "tetracycline study", "x", None),
        article("3", "atropine again", "Y", None),
    ];
    let graph = run(&drugs, &publications);
    let report = top_journals(&graph).unwrap();
    assert_eq!(report.journals, vec!["X"]);
    assert_eq!(report.drug_count, 3);
}

#[test]
fn top_journal_on_sample() {
    let (drugs, publications) = sample();
    let graph = run(&drugs, &publications);
    let report = top_journals(&graph).unwrap();
    assert_eq!(report.journals, vec!["Psychopharmacology"]);
    assert_eq!(report.drug_count, 2);
}

#[test]
fn accented_title_matches_plain_drug_name() {
    let drugs = vec![Drug::new("V03AB", "ETHANOL")];
    let publications = vec![article(
        "1",
        "Effets de l'éthanol chez la souris",
        "Revue Médicale",
        None,
    )];
    let graph = run(&drugs, &publications);
    let json = serde_json::to_string(&graph).unwrap();
    insta::assert_snapshot!(json, @r#"{"ETHANOL":[{"journal":"Revue Médicale","mentions":[{"id":"1","source":"pubmed","date":null}]}]}"#);
}

#[test]
fn accented_journal_spellings_group_together() {
    let drugs = vec![Drug::new("V03AB", "ETHANOL")];
    let publications = vec![
        article("1", "ethanol", "Hôpitaux de Genève", None),
        article("2", "ethanol again", "Hopitaux de Geneve", None),
    ];
    let graph = run(&drugs, &publications);
    let journals = &graph.get("ETHANOL").unwrap().journals;
    assert_eq!(journals.len(), 1);
    assert_eq!(journals[0].journal, "Hôpitaux de Genève");
    assert_eq!(journals[0].mentions.len(), 2);
}

#[test]
fn placeholder_journal_never_tops_the_report() {
    let drugs = vec![
        Drug::new("1", "ATROPINE"),
        Drug::new("2", "ETHANOL"),
        Drug::new("3", "TETRACYCLINE"),
    ];
    let publications = vec![
        article("1", "atropine and ethanol", UNKNOWN_JOURNAL, None),
        article("2", "tetracycline", "Real", None),
    ];
    let graph = run(&drugs, &publications);
    let report = top_journals(&graph).unwrap();
    assert_eq!(report.journals, vec!["Real"]);
    assert_eq!(report.drug_count, 1);
}

#[test]
fn document_dates_use_canonical_format() {
    let date = NaiveDate::from_ymd_opt(2020, 5, 25).unwrap();
    let drugs = vec![Drug::new("A03BA", "ATROPINE")];
    let publications = vec![article("1", "atropine", "J", Some(date))];
    let json = serde_json::to_string(&run(&drugs, &publications)).unwrap();
    assert!(json.contains(&format!("\"date\":\"{}\"", format_date(date))));
}
