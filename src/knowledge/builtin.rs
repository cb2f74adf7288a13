//! Built-in condition table and symptom weights.
//!
//! The weight table keeps its historical duplicate entries ("fever",
//! "fatigue", "swelling"); loading collapses them last-write-wins.

use super::types::{Condition, HealthKnowledge, KnowledgeBase, SymptomWeights};
use crate::error::KnowledgeError;

pub fn load() -> Result<HealthKnowledge, KnowledgeError> {
    let conditions = CONDITIONS
        .iter()
        .map(|&(name, symptoms, causes, treatment, prevention)| Condition {
            name: name.to_string(),
            symptoms: symptoms.to_string(),
            causes: causes.to_string(),
            treatment: treatment.to_string(),
            prevention: prevention.to_string(),
        })
        .collect();

    Ok(HealthKnowledge {
        conditions: KnowledgeBase::new(conditions)?,
        weights: SymptomWeights::from_pairs(SYMPTOM_WEIGHTS.iter().copied())?,
    })
}

pub(super) const CONDITIONS: &[(&str, &str, &str, &str, &str)] = &[
    (
        "fever",
        "Elevated body temperature, chills, sweating, dehydration, weakness.",
        "Viral or bacterial infections, heat exhaustion, certain medications.",
        "Rest, stay hydrated, take over-the-counter fever reducers like acetaminophen or ibuprofen. Seek medical attention if fever is high or persistent.",
        "Practice good hygiene, stay up to date on vaccinations, maintain a healthy lifestyle.",
    ),
    (
        "headache",
        "Pain in the head or face, sensitivity to light or sound, nausea.",
        "Stress, dehydration, lack of sleep, eye strain, sinus congestion, or more serious conditions.",
        "Over-the-counter pain relievers, rest in a dark quiet room, stay hydrated, apply cold or warm compress.",
        "Manage stress, maintain regular sleep schedule, stay hydrated, limit screen time.",
    ),
    (
        "common cold",
        "Runny or stuffy nose, sore throat, cough, mild fever, fatigue.",
        "Viral infection, most commonly rhinoviruses.",
        "Rest, stay hydrated, over-the-counter decongestants and pain relievers, throat lozenges, nasal sprays.",
        "Wash hands frequently, avoid close contact with infected individuals, boost immune system.",
    ),
    (
        "flu",
        "Sudden onset of fever, aches, fatigue, cough, sore throat, runny nose.",
        "Influenza viruses.",
        "Rest, stay hydrated, antiviral medications if caught early, over-the-counter pain relievers and decongestants.",
        "Annual flu vaccination, good hygiene practices, boosting immune system.",
    ),
    (
        "allergies",
        "Sneezing, runny nose, itchy eyes, skin rashes.",
        "Reaction to allergens like pollen, dust, pet dander, certain foods.",
        "Antihistamines, nasal corticosteroids, decongestants.",
        "Identify and avoid triggers, keep living spaces clean, use air purifiers.",
    ),
    (
        "stomach ache",
        "Pain or discomfort in the stomach, nausea, bloating.",
        "Indigestion, overeating, gastritis, food poisoning.",
        "Over-the-counter antacids, rest, avoid heavy foods, stay hydrated.",
        "Eat slowly, avoid trigger foods, manage stress.",
    ),
    (
        "sore throat",
        "Pain or irritation in the throat, difficulty swallowing.",
        "Viral infections, bacterial infections, allergies, dry air.",
        "Gargle with salt water, throat lozenges, over-the-counter pain relievers.",
        "Practice good hygiene, avoid smoking, stay hydrated.",
    ),
    (
        "cough",
        "Forceful expulsion of air from the lungs, can be dry or productive.",
        "Infections, allergies, asthma, acid reflux.",
        "Over-the-counter cough medicines, honey, stay hydrated.",
        "Avoid irritants, quit smoking, treat underlying conditions.",
    ),
    (
        "rash",
        "Skin irritation, redness, itching, bumps.",
        "Allergic reactions, infections, heat, stress.",
        "Anti-itch creams, cool compresses, antihistamines.",
        "Identify and avoid triggers, use gentle skincare products.",
    ),
    (
        "earache",
        "Pain in the ear, reduced hearing, fever.",
        "Ear infections, wax buildup, sinus infections.",
        "Over-the-counter pain relievers, warm compress, see a doctor if severe.",
        "Avoid inserting objects in ears, treat allergies and colds promptly.",
    ),
    (
        "toothache",
        "Pain in or around a tooth, sensitivity to hot or cold.",
        "Cavities, gum disease, cracked tooth, infection.",
        "Over-the-counter pain relievers, cold compress, see a dentist.",
        "Regular dental hygiene, avoid sugary foods, regular dental check-ups.",
    ),
    (
        "backache",
        "Pain in the back, stiffness, limited range of motion.",
        "Poor posture, lifting heavy objects, sedentary lifestyle.",
        "Rest, gentle stretches, over-the-counter pain relievers, heat or cold therapy.",
        "Maintain good posture, exercise regularly, use proper lifting techniques.",
    ),
    (
        "nausea",
        "Feeling of sickness with an inclination to vomit, stomach discomfort.",
        "Food poisoning, motion sickness, pregnancy, medications.",
        "Rest, stay hydrated, eat bland foods, ginger tea, anti-nausea medications.",
        "Eat slowly, avoid trigger foods, practice good food hygiene.",
    ),
    (
        "diarrhea",
        "Loose, watery stools, abdominal cramps, urgency to use the bathroom.",
        "Viral or bacterial infections, food intolerances, medications.",
        "Stay hydrated, eat bland foods, probiotics, over-the-counter anti-diarrheal medications.",
        "Practice good hygiene, avoid contaminated food and water.",
    ),
    (
        "constipation",
        "Infrequent bowel movements, difficulty passing stools, abdominal discomfort.",
        "Low fiber diet, dehydration, lack of physical activity, certain medications.",
        "Increase fiber intake, stay hydrated, exercise, over-the-counter laxatives if needed.",
        "Eat a high-fiber diet, stay hydrated, regular exercise.",
    ),
    (
        "indigestion",
        "Discomfort in upper abdomen, feeling of fullness, burning sensation.",
        "Overeating, eating too quickly, fatty or spicy foods, stress.",
        "Over-the-counter antacids, avoid trigger foods, eat slowly.",
        "Eat smaller meals, avoid trigger foods, manage stress.",
    ),
    (
        "sunburn",
        "Red, painful skin that feels hot to the touch, possible blistering.",
        "Overexposure to UV radiation from the sun.",
        "Cool compresses, aloe vera gel, moisturizer, over-the-counter pain relievers.",
        "Use sunscreen, wear protective clothing, limit sun exposure during peak hours.",
    ),
    (
        "insomnia",
        "Difficulty falling asleep or staying asleep, daytime fatigue.",
        "Stress, anxiety, caffeine, irregular sleep schedule.",
        "Improve sleep hygiene, relaxation techniques, cognitive behavioral therapy.",
        "Regular sleep schedule, avoid screens before bedtime, manage stress.",
    ),
    (
        "sprain",
        "Pain, swelling, bruising, limited mobility in the affected joint.",
        "Sudden twisting or force on a joint.",
        "RICE (Rest, Ice, Compression, Elevation), over-the-counter pain relievers.",
        "Proper warm-up before exercise, wear supportive shoes, strengthen muscles.",
    ),
    (
        "acne",
        "Pimples, blackheads, whiteheads, oily skin.",
        "Hormonal changes, excess oil production, bacteria, clogged pores.",
        "Over-the-counter acne products, proper skincare routine, prescription medications if severe.",
        "Regular face washing, non-comedogenic products, healthy diet.",
    ),
    (
        "motion sickness",
        "Nausea, dizziness, cold sweats, vomiting.",
        "Conflicting sensory signals to the brain during movement.",
        "Over-the-counter motion sickness medications, focus on a stable object, get fresh air.",
        "Sit in areas with less motion, look at the horizon, avoid reading while in motion.",
    ),
    (
        "eye strain",
        "Sore or irritated eyes, difficulty focusing, headaches.",
        "Prolonged screen time, reading without proper lighting, need for vision correction.",
        "Rest eyes, adjust lighting, use artificial tears.",
        "20-20-20 rule (every 20 minutes, look at something 20 feet away for 20 seconds), proper lighting.",
    ),
    (
        "dehydration",
        "Thirst, dry mouth, dark urine, fatigue, dizziness.",
        "Not drinking enough water, excessive sweating, diarrhea, vomiting.",
        "Drink water or electrolyte solutions, rest, seek medical attention if severe.",
        "Drink adequate water throughout the day, increase intake during hot weather or exercise.",
    ),
    (
        "heartburn",
        "Burning sensation in the chest or throat, bitter taste in mouth.",
        "Acid reflux, certain foods, obesity, pregnancy.",
        "Over-the-counter antacids, avoid trigger foods, eat smaller meals.",
        "Maintain healthy weight, avoid lying down after meals, limit acidic and spicy foods.",
    ),
    (
        "muscle strain",
        "Pain, swelling, limited range of motion in affected muscle.",
        "Overexertion, improper lifting, sudden movements.",
        "Rest, ice, compression, elevation, over-the-counter pain relievers.",
        "Proper warm-up before exercise, use correct form when lifting, gradual increase in activity.",
    ),
    (
        "nose bleed",
        "Blood flowing from one or both nostrils.",
        "Dry air, nose picking, injury, blood thinners.",
        "Pinch nostrils, lean forward, apply cold compress to nose.",
        "Use a humidifier, avoid nose picking, use saline nasal spray to keep nasal passages moist.",
    ),
    (
        "anxiety",
        "Excessive worry, restlessness, difficulty concentrating, sleep problems.",
        "Stress, traumatic experiences, genetic factors, brain chemistry.",
        "Therapy, relaxation techniques, medications in severe cases.",
        "Regular exercise, adequate sleep, stress management techniques, limit caffeine and alcohol.",
    ),
    (
        "burns",
        "Skin redness, pain, swelling, blistering (depending on severity).",
        "Contact with heat, chemicals, electricity, or radiation.",
        "Cool the burn with running water, apply aloe vera, cover with sterile gauze.",
        "Use caution around hot objects, wear protective gear when handling chemicals.",
    ),
    (
        "food poisoning",
        "Nausea, vomiting, diarrhea, abdominal pain, fever.",
        "Consuming contaminated food or drink.",
        "Rest, stay hydrated, eat bland foods when able, seek medical attention if severe.",
        "Practice good food hygiene, cook foods thoroughly, avoid risky foods.",
    ),
    (
        "migraine",
        "Severe headache, often one-sided, sensitivity to light and sound, nausea.",
        "Hormonal changes, certain foods, stress, environmental factors.",
        "Rest in dark quiet room, over-the-counter pain relievers, prescription medications.",
        "Identify and avoid triggers, maintain regular sleep and meal schedules, manage stress.",
    ),
    (
        "pink eye",
        "Redness, itching, and discharge in one or both eyes.",
        "Viral or bacterial infection, allergies.",
        "Artificial tears, warm compresses, antibiotic eye drops if bacterial.",
        "Practice good hygiene, avoid touching or rubbing eyes, do not share personal items.",
    ),
    (
        "urinary tract infection",
        "Frequent urination, burning sensation when urinating, cloudy urine.",
        "Bacteria entering the urinary tract.",
        "Antibiotics, drink plenty of water, urinate frequently.",
        "Stay hydrated, urinate after sexual activity, wipe from front to back.",
    ),
];

pub(super) const SYMPTOM_WEIGHTS: &[(&str, f64)] = &[
    ("fever", 2.0),
    ("cough", 2.0),
    ("sore throat", 1.5),
    ("headache", 2.0),
    ("fatigue", 1.5),
    ("nasal congestion", 1.5),
    ("runny nose", 1.5),
    ("sneezing", 1.5),
    ("itchy eyes", 1.5),
    ("skin rash", 1.5),
    ("stomach ache", 2.0),
    ("nausea", 2.0),
    ("vomiting", 2.0),
    ("diarrhea", 2.0),
    ("constipation", 1.5),
    ("indigestion", 1.5),
    ("sunburn", 2.0),
    ("insomnia", 1.5),
    ("sprain", 2.0),
    ("acne", 1.5),
    ("motion sickness", 1.5),
    ("eye strain", 1.5),
    ("dehydration", 2.0),
    ("heartburn", 1.5),
    ("muscle strain", 2.0),
    ("nosebleed", 1.5),
    ("anxiety", 2.0),
    ("burns", 2.0),
    ("food poisoning", 2.0),
    ("migraine", 2.0),
    ("pink eye", 1.5),
    ("urinary tract infection", 2.0),
    ("back pain", 2.0),
    ("chest pain", 2.0),
    ("shortness of breath", 2.0),
    ("swelling", 1.5),
    ("bruising", 1.5),
    ("weakness", 1.5),
    ("numbness", 1.5),
    ("tingling", 1.5),
    ("loss of appetite", 1.5),
    ("weight loss", 1.5),
    ("weight gain", 1.5),
    ("changes in vision", 1.5),
    ("changes in hearing", 1.5),
    ("difficulty swallowing", 1.5),
    ("difficulty urinating", 1.5),
    ("changes in bowel habits", 1.5),
    ("skin changes", 1.5),
    ("hair loss", 1.5),
    ("nail changes", 1.5),
    ("frequent urination", 1.5),
    ("night sweats", 1.5),
    ("cold sweats", 1.5),
    ("chills", 1.5),
    ("fever", 2.0),
    ("fatigue", 1.5),
    ("joint pain", 2.0),
    ("stiffness", 1.5),
    ("swelling", 1.5),
    ("redness", 1.5),
    ("itching", 1.5),
    ("pain", 2.0),
    ("discomfort", 2.0),
    ("tenderness", 1.5),
];
