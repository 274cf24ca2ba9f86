use haven_core::models::answer::{
    AnxietyItems, Choice, CrisisScreen, DepressionItems, Duration, Frequency, FunctionalImpact,
};
use haven_core::models::assessment::{AssessmentData, Severity, Suitability};
use haven_instruments::error::InstrumentError;
use haven_instruments::scoring::{
    frequency_score, score_assessment, score_gad, score_phq, severity, suitability, ScoringPolicy,
};
use haven_instruments::{all_instruments, get_instrument};

fn depression(f: Frequency) -> DepressionItems {
    DepressionItems {
        interest: f,
        mood: f,
        sleep: f,
        appetite: f,
    }
}

fn anxiety(f: Frequency) -> AnxietyItems {
    AnxietyItems {
        nervousness: f,
        worry: f,
        restlessness: f,
    }
}

#[test]
fn frequency_map_is_zero_to_three() {
    assert_eq!(frequency_score(Frequency::NotReported), 0);
    assert_eq!(frequency_score(Frequency::NotAtAll), 0);
    assert_eq!(frequency_score(Frequency::SeveralDays), 1);
    assert_eq!(frequency_score(Frequency::MoreThanHalfTheDays), 2);
    assert_eq!(frequency_score(Frequency::NearlyEveryDay), 3);
}

#[test]
fn unanswered_clusters_score_zero() {
    let data = AssessmentData::default();
    assert_eq!(score_phq(&data), 0);
    assert_eq!(score_gad(&data), 0);
}

#[test]
fn scores_stay_within_instrument_ranges() {
    let labels = [
        Frequency::NotReported,
        Frequency::NotAtAll,
        Frequency::SeveralDays,
        Frequency::MoreThanHalfTheDays,
        Frequency::NearlyEveryDay,
    ];
    for a in labels {
        for b in labels {
            let data = AssessmentData {
                depression: Some(DepressionItems {
                    interest: a,
                    mood: b,
                    sleep: a,
                    appetite: b,
                }),
                anxiety: Some(AnxietyItems {
                    nervousness: a,
                    worry: b,
                    restlessness: a,
                }),
                ..Default::default()
            };
            assert!(score_phq(&data) <= 27);
            assert!(score_gad(&data) <= 21);
        }
    }
}

#[test]
fn severity_bands_use_the_larger_subscale() {
    let policy = ScoringPolicy::default();
    assert_eq!(severity(0, 4, &policy), Severity::Minimal);
    assert_eq!(severity(5, 0, &policy), Severity::Mild);
    assert_eq!(severity(12, 9, &policy), Severity::Moderate);
    assert_eq!(severity(3, 20, &policy), Severity::Severe);
}

#[test]
fn high_symptom_scenario_is_moderate_and_suitable() {
    let data = AssessmentData {
        depression: Some(depression(Frequency::NearlyEveryDay)),
        anxiety: Some(anxiety(Frequency::NearlyEveryDay)),
        functional_impact: Some(Choice::Matched(FunctionalImpact::Extremely)),
        duration: Some(Choice::Matched(Duration::MoreThanThreeMonths)),
        crisis: Some(CrisisScreen {
            flag: false,
            indicators: vec![],
            verbatim: None,
        }),
        ..Default::default()
    };

    let card = score_assessment(&data, &ScoringPolicy::default());
    assert_eq!(card.phq_score, 12);
    assert_eq!(card.gad_score, 9);
    assert_eq!(card.severity, Severity::Moderate);
    assert_eq!(card.suitability, Suitability::Suitable);
}

#[test]
fn crisis_flag_overrides_everything() {
    let data = AssessmentData {
        depression: Some(depression(Frequency::NotAtAll)),
        crisis: Some(CrisisScreen {
            flag: true,
            indicators: vec!["self-harm".into()],
            verbatim: None,
        }),
        ..Default::default()
    };
    let policy = ScoringPolicy::default();
    assert_eq!(suitability(&data, Severity::Minimal, &policy), Suitability::Crisis);
}

#[test]
fn low_symptoms_short_duration_is_not_suitable() {
    let data = AssessmentData {
        depression: Some(depression(Frequency::SeveralDays)),
        anxiety: Some(anxiety(Frequency::NotAtAll)),
        functional_impact: Some(Choice::Matched(FunctionalImpact::ALittle)),
        duration: Some(Choice::Matched(Duration::TwoToFourWeeks)),
        ..Default::default()
    };
    let card = score_assessment(&data, &ScoringPolicy::default());
    assert_eq!(card.phq_score, 4);
    assert_eq!(card.severity, Severity::Minimal);
    assert_eq!(card.suitability, Suitability::NotSuitable);
}

#[test]
fn long_duration_alone_makes_suitable() {
    let data = AssessmentData {
        duration: Some(Choice::Matched(Duration::OneToThreeMonths)),
        ..Default::default()
    };
    let card = score_assessment(&data, &ScoringPolicy::default());
    assert_eq!(card.severity, Severity::Minimal);
    assert_eq!(card.suitability, Suitability::Suitable);
}

#[test]
fn verbatim_impact_never_triggers_suitability() {
    let data = AssessmentData {
        functional_impact: Some(Choice::Verbatim("extremely hard to say".into())),
        ..Default::default()
    };
    let card = score_assessment(&data, &ScoringPolicy::default());
    assert_eq!(card.suitability, Suitability::NotSuitable);
}

#[test]
fn stricter_policy_changes_banding() {
    let policy = ScoringPolicy {
        moderate_from: 13,
        subscale_suitable_from: 13,
        suitable_durations: vec![Duration::MoreThanThreeMonths],
        ..ScoringPolicy::default()
    };
    let data = AssessmentData {
        depression: Some(depression(Frequency::NearlyEveryDay)),
        duration: Some(Choice::Matched(Duration::OneToThreeMonths)),
        ..Default::default()
    };
    let card = score_assessment(&data, &policy);
    assert_eq!(card.severity, Severity::Mild);
    assert_eq!(card.suitability, Suitability::NotSuitable);
}

#[test]
fn registry_lookup() {
    assert_eq!(all_instruments().len(), 2);
    let phq = get_instrument("phq_a").unwrap();
    assert_eq!(phq.name(), "PHQ-A");
    assert_eq!(phq.items().len(), 4);
    assert!(phq.item("sleep").is_ok());
    assert!(matches!(
        phq.item("energy"),
        Err(InstrumentError::UnknownItem { .. })
    ));
    assert!(matches!(
        get_instrument("bdi"),
        Err(InstrumentError::UnknownInstrument(_))
    ));
}

#[test]
fn structured_input_lists_items_and_total() {
    let gad = get_instrument("gad7").unwrap();
    let text = gad.to_structured_input(&anxiety(Frequency::SeveralDays).all());
    assert!(text.starts_with("## GAD-7"));
    assert!(text.contains("- Trouble relaxing: several_days (1)"));
    assert!(text.contains("Total: 3"));
}
