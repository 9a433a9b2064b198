use plainlaw_core::{DocumentKind, Section};

/// Characters of the document shown to the classifier.
pub const CLASSIFY_PREVIEW_CHARS: usize = 4_000;

// ── Prompt templates ──

const CLASSIFY_INSTRUCTIONS: &str = "\
You are a specialised legal document classifier. Read the document below and decide its \
primary legal purpose.

Distinguish court judgments (decisions with legal reasoning) from court orders (directives). \
Pay attention to Indian and international legal terminology.";

const ANALYSIS_INSTRUCTIONS: &str = "\
You are an expert legal document analyser who explains complex legal language in plain \
English for people without legal training, while staying accurate.

- Translate legal jargon into plain language and explain why each provision matters.
- Identify risks and give each a severity (LOW, MEDIUM, HIGH or CRITICAL).
- Highlight deadlines and time-sensitive obligations.
- Give specific, actionable recommendations.";

const FORMAT_RULES: &str = "\
Respond ONLY with a JSON object. No markdown fences, no explanation, just raw JSON.
Use exactly the keys shown above and no others.
Use plain strings for \"documentType\" and \"summary\", and arrays of plain strings for every \
other key. Do not nest objects.";

/// Prompt asking the model for a single category name from [`DocumentKind::ALL`].
pub fn classification_prompt(document_text: &str) -> String {
    let preview = match document_text.char_indices().nth(CLASSIFY_PREVIEW_CHARS) {
        Some((cut, _)) => &document_text[..cut],
        None => document_text,
    };
    let categories = DocumentKind::ALL
        .iter()
        .map(|k| format!("- {}", k.as_str()))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "{CLASSIFY_INSTRUCTIONS}\n\
         \n\
         DOCUMENT TO CLASSIFY:\n\
         {preview}\n\
         \n\
         Categories:\n\
         {categories}\n\
         \n\
         Return ONLY the exact category name, nothing else.\n\
         \n\
         Document Type:"
    )
}

/// Prompt asking for the canonical JSON analysis of a document of `kind`.
pub fn analysis_prompt(document_text: &str, kind: DocumentKind) -> String {
    format!(
        "{ANALYSIS_INSTRUCTIONS}\n\
         \n\
         DOCUMENT TO ANALYSE:\n\
         {document_text}\n\
         \n\
         DOCUMENT TYPE DETECTED: {kind_upper}\n\
         ANALYSIS FOCUS: {focus}\n\
         \n\
         {skeleton}\n\
         \n\
         {FORMAT_RULES}",
        kind_upper = kind.as_str().to_uppercase(),
        focus = kind.focus(),
        skeleton = response_skeleton(kind),
    )
}

/// The JSON shape the analysis prompt asks for, one line per canonical field.
fn response_skeleton(kind: DocumentKind) -> String {
    const FIELDS: &[(Section, &str)] = &[
        (Section::DocumentType, "Specific type of document"),
        (Section::Summary, "Plain-language summary"),
        (Section::KeyPoints, "Most important provisions"),
        (Section::Parties, "Each party and their role"),
        (Section::ImportantDates, "Deadlines, terms and milestones"),
        (Section::PaymentTerms, "Amounts, schedules and penalties"),
        (Section::Risks, "Risk with severity and mitigation"),
        (Section::Recommendations, "Concrete next step"),
    ];

    let lines: Vec<String> = FIELDS
        .iter()
        .map(|(section, hint)| {
            let hint = match section {
                Section::DocumentType => format!("{hint} ({kind})"),
                _ => hint.to_string(),
            };
            if section.is_list() {
                format!("  \"{}\": [\"{hint}\", \"...\"]", section.field_name())
            } else {
                format!("  \"{}\": \"{hint}\"", section.field_name())
            }
        })
        .collect();

    format!("{{\n{}\n}}", lines.join(",\n"))
}
