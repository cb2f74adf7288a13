use super::types::Reply;
use crate::knowledge::{Condition, ConditionField};

pub const CONSULT_DISCLAIMER: &str =
    "It's important to consult a healthcare professional for a proper diagnosis and treatment plan.";

/// PURE FUNCTION: renders a reply as plain text for the shell.
pub fn realize(reply: &Reply) -> String {
    match reply {
        Reply::Greeting { text } => text.clone(),
        Reply::Topic { condition } => {
            format!("Here's what I know about {}:\n\n{}", condition.title(), record(condition))
        }
        Reply::SingleDiagnosis { condition, .. } => format!(
            "Based on your symptoms, the most likely condition is: {}\n\n{}",
            condition.title(),
            record(condition)
        ),
        Reply::MultiDiagnosis { candidates } => {
            let mut text = String::from("Based on your symptoms, you might have:\n");
            for name in candidates {
                text.push_str("- ");
                text.push_str(name);
                text.push('\n');
            }
            text.push('\n');
            text.push_str(CONSULT_DISCLAIMER);
            text
        }
        Reply::Fallback { text, .. } => text.clone(),
    }
}

/// One "Label: value" line per field.
pub fn record(condition: &Condition) -> String {
    ConditionField::ALL
        .iter()
        .map(|field| format!("{}: {}", field.label(), condition.field(*field)))
        .collect::<Vec<_>>()
        .join("\n")
}
