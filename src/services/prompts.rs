use crate::errors::AppError;

const GREETING_KEYWORDS: &[&str] = &["hi", "hello", "hey", "salam", "assalam", "yo"];

const SYMPTOM_KEYWORDS: &[&str] = &[
    "fever", "cough", "headache", "pain", "nausea", "vomit", "cold",
    "flu", "sore throat", "infection", "stomach", "diarrhea", "fatigue",
    "dizziness", "rash", "allergy", "breathing", "chest", "temperature",
];

/// Symptoms offered to clients for selection in the symptom checker.
pub const SYMPTOMS: &[&str] = &[
    "Fever", "Headache", "Cough", "Sore throat", "Runny nose",
    "Body aches", "Fatigue", "Nausea", "Vomiting", "Diarrhea",
    "Chest pain", "Shortness of breath", "Dizziness", "Abdominal pain",
    "Joint pain", "Rash", "Itching", "Swelling", "Loss of appetite",
    "Muscle cramps", "Sneezing", "Chills", "Back pain", "Ear pain",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Greeting,
    Symptom,
    General,
}

// Plain substring matching: "yo" also matches "your".
fn contains_any(text: &str, keywords: &[&str]) -> bool {
    let text = text.to_lowercase();
    keywords.iter().any(|k| text.contains(k))
}

pub fn classify(message: &str) -> MessageKind {
    if contains_any(message, GREETING_KEYWORDS) {
        MessageKind::Greeting
    } else if contains_any(message, SYMPTOM_KEYWORDS) {
        MessageKind::Symptom
    } else {
        MessageKind::General
    }
}

pub fn chat_prompt(message: &str) -> Result<String, AppError> {
    if message.trim().is_empty() {
        return Err(AppError::validation("message", "Message cannot be empty"));
    }
    let prompt = match classify(message) {
        MessageKind::Greeting => format!(
            "\nYou are a friendly health assistant.\nUser said: \"{}\"\nReply politely and ask how you can help regarding health.\n",
            message
        ),
        MessageKind::Symptom => format!(
            "\nYou are a medical assistant bot.\nThe user describes: \"{}\"\n\n\
             Respond ONLY in this structure:\n\n\
             **Possible Causes:** (List 2–3 likely conditions)\n\
             **Recommended Actions:** (List practical steps)\n\
             **Advice:** (One short general advice)\n\n\
             Keep it short and simple.\n",
            message
        ),
        MessageKind::General => format!(
            "\nYou are a health assistant.\nThe user says: \"{}\"\nReply helpfully about health and wellness topics.\n",
            message
        ),
    };
    Ok(prompt)
}

pub fn symptom_prompt(symptoms: &[String]) -> Result<String, AppError> {
    let listed: Vec<&str> = symptoms.iter().map(|s| s.trim()).filter(|s| !s.is_empty()).collect();
    if listed.is_empty() {
        return Err(AppError::validation("symptoms", "Please select at least one symptom"));
    }
    Ok(format!(
        "The user is experiencing these symptoms: {}\n\n\
         Please provide a structured medical analysis in this exact format:\n\n\
         **Possible Conditions:**\n\
         - [Condition 1 with brief explanation]\n\
         - [Condition 2 with brief explanation]\n\
         - [Condition 3 with brief explanation]\n\n\
         **Recommended Care:**\n\
         - [Self-care advice 1]\n\
         - [Self-care advice 2]\n\
         - [Self-care advice 3]\n\n\
         **When to See a Doctor:**\n\
         - [Warning sign 1]\n\
         - [Warning sign 2]\n\
         - [Warning sign 3]\n\n\
         **Disclaimer:** This is not medical advice. Consult a healthcare professional for proper diagnosis.\n\n\
         Keep it concise and easy to understand.",
        listed.join(", ")
    ))
}
