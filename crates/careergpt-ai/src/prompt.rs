//! Advisor prompt template.

const PROMPT_PREFIX: &str = "As a career and study roadmap advisor, please help with: ";
const PROMPT_SUFFIX: &str =
    ". Focus on career guidance, learning paths, and professional development.";

/// Wrap a raw question in the advisor instructions.
pub fn build_prompt(question: &str) -> String {
    let mut prompt = String::with_capacity(PROMPT_PREFIX.len() + question.len() + PROMPT_SUFFIX.len());
    prompt.push_str(PROMPT_PREFIX);
    prompt.push_str(question);
    prompt.push_str(PROMPT_SUFFIX);
    prompt
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_question_verbatim() {
        assert_eq!(
            build_prompt("How do I learn Rust?"),
            "As a career and study roadmap advisor, please help with: How do I learn Rust?. \
             Focus on career guidance, learning paths, and professional development."
        );
    }

    #[test]
    fn keeps_surrounding_whitespace() {
        let prompt = build_prompt("  data science \n");
        assert!(prompt.contains("help with:   data science \n. Focus"));
    }
}
