//! Bundled demo tables. Replace with authoritative sources for production use.

use super::KnowledgeTables;
use crate::models::{AlternativeRule, DosingRule, DrugRecord, InteractionRule, Severity};

pub(super) fn tables() -> KnowledgeTables {
    KnowledgeTables {
        drugs: default_drugs(),
        interactions: default_interactions(),
        alternatives: default_alternatives(),
        dosing: default_dosing(),
    }
}

fn record(key: &str, aliases: &[&str], classes: &[&str], description: &str) -> DrugRecord {
    DrugRecord {
        key: key.into(),
        aliases: aliases.iter().map(|a| a.to_string()).collect(),
        classes: classes.iter().map(|c| c.to_string()).collect(),
        description: description.into(),
    }
}

fn default_drugs() -> Vec<DrugRecord> {
    vec![
        record(
            "paracetamol",
            &["paracetamol", "acetaminophen", "tylenol"],
            &["analgesic", "antipyretic"],
            "Pain and fever reducer.",
        ),
        record(
            "ibuprofen",
            &["ibuprofen", "advil", "motrin"],
            &["NSAID", "analgesic"],
            "Non-steroidal anti-inflammatory for pain and inflammation.",
        ),
        record(
            "amoxicillin",
            &["amoxicillin", "amox"],
            &["antibiotic", "penicillin"],
            "Aminopenicillin antibiotic for bacterial infections.",
        ),
        record(
            "metformin",
            &["metformin", "glucophage"],
            &["antidiabetic", "biguanide"],
            "First-line oral therapy for type 2 diabetes.",
        ),
        record(
            "atorvastatin",
            &["atorvastatin", "lipitor"],
            &["statin", "lipid-lowering"],
            "HMG-CoA reductase inhibitor for hyperlipidemia.",
        ),
        record(
            "aspirin",
            &["aspirin", "acetylsalicylic acid"],
            &["antiplatelet", "NSAID"],
            "Antiplatelet agent used for cardiovascular protection and pain.",
        ),
    ]
}

fn default_interactions() -> Vec<InteractionRule> {
    vec![
        InteractionRule::new(
            "ibuprofen",
            "aspirin",
            Severity::Moderate,
            "Ibuprofen may interfere with aspirin's antiplatelet effect; separate dosing or prefer acetaminophen.",
        ),
        InteractionRule::new(
            "amoxicillin",
            "warfarin",
            Severity::Moderate,
            "May increase INR; monitor anticoagulation.",
        ),
        InteractionRule::new(
            "atorvastatin",
            "clarithromycin",
            Severity::High,
            "CYP3A4 inhibition increases statin levels; risk of rhabdomyolysis.",
        ),
        InteractionRule::new(
            "metformin",
            "cimetidine",
            Severity::Moderate,
            "May increase metformin levels; consider alternatives or dose adjustment.",
        ),
    ]
}

fn default_alternatives() -> Vec<AlternativeRule> {
    vec![
        AlternativeRule::new(
            "ibuprofen",
            "Paracetamol (Acetaminophen) for pain/fever",
            "Lower GI risk; no antiplatelet interference.",
        ),
        AlternativeRule::new(
            "amoxicillin",
            "Azithromycin (if penicillin allergy)",
            "Macrolide alternative for common respiratory infections.",
        ),
        AlternativeRule::new(
            "metformin",
            "Metformin XR or add GLP-1 RA per guidelines",
            "Improves GI tolerance and adds glycemic/weight benefits.",
        ),
    ]
}

fn default_dosing() -> Vec<DosingRule> {
    vec![
        DosingRule {
            drug: "paracetamol".into(),
            pediatric_mg_per_kg: 15.0,
            pediatric_dose: "{mg} mg per dose, every 4–6 hours (max 60 mg/kg/day)".into(),
            pediatric_rationale: "Pediatric dose ~10–15 mg/kg per dose.".into(),
            adult_dose: "500–1000 mg every 4–6 hours as needed (max 3000 mg/day)".into(),
            adult_rationale: "Typical adult dosing. Reduce max in hepatic impairment.".into(),
        },
        DosingRule {
            drug: "ibuprofen".into(),
            pediatric_mg_per_kg: 10.0,
            pediatric_dose: "{mg} mg per dose, every 6–8 hours (max 40 mg/kg/day)".into(),
            pediatric_rationale: "Pediatric dose ~5–10 mg/kg per dose.".into(),
            adult_dose: "200–400 mg every 6–8 hours with food (max 1200 mg/day OTC)".into(),
            adult_rationale: "Typical adult OTC dosing.".into(),
        },
        DosingRule {
            drug: "amoxicillin".into(),
            pediatric_mg_per_kg: 45.0,
            pediatric_dose:
                "{mg} mg/day divided q12h (standard); up to 80–90 mg/kg/day for otitis media"
                    .into(),
            pediatric_rationale: "Pediatric dosing is weight-based.".into(),
            adult_dose: "500 mg every 8 hours or 875 mg every 12 hours".into(),
            adult_rationale: "Typical adult dosing for common infections.".into(),
        },
    ]
}
