//! Built-in medicine table.
//!
//! Keys cover the medicines the scanner is expected to recognize; reference
//! records exist for the documented subset. Keys without a record resolve to
//! a placeholder at detection time.

use super::record::MedicineRecord;

/// Canonical keys, in the order the matcher scans them. Tie-breaking between
/// equally strong matches follows this order, so it must stay stable.
pub(crate) const MEDICINE_KEYS: &[&str] = &[
    "paracetamol",
    "dolo",
    "crocin",
    "calpol",
    "neurofen",
    "ibuprofen",
    "diclofenac",
    "ketorolac",
    "aspirin",
    "amoxicillin",
    "augmentin",
    "azithromycin",
    "cefixime",
    "ofloxacin",
    "doxycycline",
    "metformin",
    "glimepiride",
    "sitagliptin",
    "atorvastatin",
    "rosuvastatin",
    "pantoprazole",
    "omeprazole",
    "rabeprazole",
    "esomeprazole",
    "levocetirizine",
    "cetirizine",
    "fexofenadine",
    "montelukast",
    "vitamin",
    "vitaminc",
    "vitamind",
    "bcomplex",
    "oral",
    "ors",
    "zincovit",
    "betadine",
    "metronidazole",
    "ondansetron",
    "domperidone",
    "cyclopam",
    "tamsulosin",
    "losartan",
    "amlodipine",
    "telmisartan",
];

fn record(
    key: &str,
    display_name: &str,
    purpose: &str,
    dosage: &str,
    instructions: &str,
    contraindications: &str,
    side_effects: &str,
) -> MedicineRecord {
    MedicineRecord {
        key: key.to_string(),
        display_name: display_name.to_string(),
        purpose: Some(purpose.to_string()),
        dosage: Some(dosage.to_string()),
        instructions: Some(instructions.to_string()),
        side_effects: Some(side_effects.to_string()),
        contraindications: Some(contraindications.to_string()),
    }
}

/// Reference records for the documented subset of [`MEDICINE_KEYS`].
pub(crate) fn builtin_records() -> Vec<MedicineRecord> {
    vec![
        record(
            "paracetamol",
            "Paracetamol (Acetaminophen)",
            "Fever, mild pain relief",
            "500–1000 mg every 6 hours (max 3000 mg/day)",
            "Safe on empty stomach. Do not exceed daily limit.",
            "Avoid in severe liver disease.",
            "Very safe; rare nausea or rash.",
        ),
        record(
            "dolo",
            "Dolo 650",
            "Fever, body pain",
            "650 mg every 6–8 hours",
            "Do not exceed 3 tablets/day.",
            "Avoid in liver issues.",
            "Nausea, rare skin allergy.",
        ),
        record(
            "crocin",
            "Crocin",
            "Fever and pain relief",
            "500–650 mg every 6 hours",
            "Avoid overdose.",
            "Liver disease.",
            "Generally safe.",
        ),
        record(
            "ibuprofen",
            "Ibuprofen",
            "Pain relief, fever, inflammation",
            "200–400 mg every 6–8 hours",
            "Take after food.",
            "Stomach ulcers, kidney issues, pregnancy.",
            "Acidity, stomach pain.",
        ),
        record(
            "diclofenac",
            "Diclofenac",
            "Back pain, joint pain, inflammation",
            "50 mg twice daily",
            "Always take after food.",
            "Kidney disease, gastric bleeding.",
            "Acidity, nausea.",
        ),
        record(
            "ketorolac",
            "Ketorolac",
            "Severe pain (short term only)",
            "10 mg every 6 hours",
            "Not for long-term use.",
            "Ulcers, kidney issues.",
            "Strong acidity, dizziness.",
        ),
        record(
            "aspirin",
            "Aspirin",
            "Pain, fever, heart protection",
            "75 mg daily (heart), 325–500 mg for pain",
            "Take with food.",
            "Bleeding disorders.",
            "Stomach bleeding (rare).",
        ),
        record(
            "amoxicillin",
            "Amoxicillin",
            "Bacterial infections",
            "250–500 mg every 8 hours",
            "Complete full course.",
            "Penicillin allergy.",
            "Rash, stomach upset.",
        ),
        record(
            "augmentin",
            "Augmentin (Amoxicillin + Clavulanic Acid)",
            "Strong bacterial infections",
            "625 mg twice a day",
            "Take after food.",
            "Penicillin allergy.",
            "Loose motions, nausea.",
        ),
        record(
            "azithromycin",
            "Azithromycin",
            "Throat, chest infections",
            "500 mg on day 1, then 250 mg for 2–4 days",
            "Take 1 hour before food.",
            "Heart rhythm issues.",
            "Diarrhea, stomach cramps.",
        ),
        record(
            "cefixime",
            "Cefixime",
            "Bacterial infections (ENT, urinary, respiratory)",
            "200 mg twice daily",
            "Take with or without food.",
            "Severe kidney issues.",
            "Loose motion, allergy.",
        ),
        record(
            "doxycycline",
            "Doxycycline",
            "Skin infections, acne, chest infections",
            "100 mg twice daily",
            "Do not lie down immediately after taking.",
            "Pregnancy.",
            "Acidity, nausea.",
        ),
        record(
            "pantoprazole",
            "Pantoprazole",
            "Acidity, GERD",
            "40 mg once daily",
            "Take 30 min before breakfast.",
            "Severe liver disease.",
            "Headache.",
        ),
        record(
            "omeprazole",
            "Omeprazole",
            "Acidity, ulcers",
            "20–40 mg daily",
            "Take in the morning.",
            "Liver issues.",
            "Headache, constipation.",
        ),
        record(
            "rabeprazole",
            "Rabeprazole",
            "Acidity and GERD",
            "20 mg daily",
            "Before breakfast.",
            "Severe liver disease.",
            "Mild headache.",
        ),
        record(
            "esomeprazole",
            "Esomeprazole",
            "Acid reflux, gastritis",
            "20–40 mg daily",
            "Empty stomach.",
            "Liver problems.",
            "Nausea.",
        ),
        record(
            "metformin",
            "Metformin",
            "Type-2 diabetes",
            "500–850 mg twice daily",
            "Take with food.",
            "Kidney issues.",
            "Stomach upset.",
        ),
        record(
            "glimepiride",
            "Glimepiride",
            "Diabetes (blood sugar control)",
            "1–4 mg daily",
            "Take with breakfast.",
            "Low blood sugar risk.",
            "Hypoglycemia.",
        ),
        record(
            "sitagliptin",
            "Sitagliptin",
            "Type-2 diabetes",
            "50–100 mg daily",
            "Anytime of day.",
            "Kidney issues.",
            "Mild stomach pain.",
        ),
        record(
            "atorvastatin",
            "Atorvastatin",
            "Cholesterol control",
            "10–40 mg at night",
            "Take once daily.",
            "Liver issues.",
            "Muscle pain (rare).",
        ),
        record(
            "rosuvastatin",
            "Rosuvastatin",
            "Cholesterol reduction",
            "5–20 mg daily",
            "Night time preferred.",
            "Liver disease.",
            "Muscle ache.",
        ),
        record(
            "levocetirizine",
            "Levocetirizine",
            "Allergy, cold, sneezing",
            "5 mg at night",
            "May cause sleepiness.",
            "Driving immediately after.",
            "Drowsiness.",
        ),
        record(
            "cetirizine",
            "Cetirizine",
            "Allergy symptoms",
            "10 mg daily",
            "Best taken at night.",
            "Driving.",
            "Drowsiness.",
        ),
        record(
            "vitamin",
            "Multivitamin",
            "General health, energy, immunity",
            "Once daily",
            "Take after breakfast.",
            "Kidney stones (high vitamin C).",
            "Mild stomach upset.",
        ),
    ]
}
