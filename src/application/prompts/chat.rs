use crate::domain::SectionContext;

/// Citation the model is told to close every answer with.
pub fn citation_for(section_title: &str) -> String {
    format!("[from {}]", section_title)
}

/// Builds the prompt for one chat turn. Only `section` is given to the model.
pub fn render_chat_prompt(question: &str, section: &SectionContext) -> String {
    let citation = citation_for(&section.section_title);

    format!(
        "You are a helpful and insightful AI assistant integrated into a chatbot.
Your role is to help users understand one specific section of a document.

Follow these rules when answering:
1. Use only the provided context: base your answer solely on the document section below. Do not use outside knowledge or information from other sections.
2. Be precise: answer with section-specific detail.
3. Cite your source: always end your answer with the citation {citation}.
4. Elaborate concisely: if the question needs more explanation than the text gives, add a short summary or example, but never reference other sections.
5. Handle missing information: if the answer is not in the context, say clearly that you cannot find it in the provided section, offer to discuss what the section does contain, and still cite the source.

CONTEXT FROM THE DOCUMENT SECTION:
Section Title: {title}
Content:
{content}

---

USER'S QUESTION:
{question}
",
        title = section.section_title,
        content = section.content,
    )
}
