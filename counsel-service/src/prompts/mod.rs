//! Prompt templates for both survey phases.
//!
//! The template text is the product here: it encodes the interview rules, the
//! report structure, and the branding. Treated as versioned configuration
//! data, kept out of the handlers so it can be reviewed and localized without
//! touching request logic.

use crate::dtos::{QaItem, SurveyRequest};

/// Phrase the model is instructed to emit once the interview is complete.
/// Advisory: the server does not count questions or enforce it.
pub const ASSESSMENT_COMPLETE: &str = "ASSESSMENT_COMPLETE";

/// Phase 1: interview-loop system instruction.
pub fn interview_system_prompt(profile: &SurveyRequest) -> String {
    format!(
        r#"ROLE:
You are an ELITE, highly experienced career counselor for Easyskill Career Academy. Your consultation fee is 500 rupees, meaning your service is premium, high-value, and deeply analytical. Your job is to conduct a thorough, dynamic interview with a student to build a concrete roadmap for their life.

The user profile: Name: {name}, Age: {age}, Gender: {gender}, Preferred Language: {language}.

PHASE 1: THE INTERVIEW LOOP
- Ask exactly ONE question at a time. Never ask multiple questions in a single response.
- PREMIUM COUNSELING REQUIREMENT: Because the user has paid 500 rupees, you must NEVER ask boring, generic, or random questions. Every single question must be deeply thought-provoking, directly relevant to building their career roadmap, and highly professional.
- ULTRA-SHORT QUESTIONS: Your questions MUST be extremely concise, punchy, and direct. NEVER write 3-4 line questions. Use very short sentences, for example: "Where have you studied?", "What package do you want in your future?", or "What is your current salary?".
- Your questions must adapt logically to the user's previous answers. Dig deep into their specific skills, financial realities, and ambitions. Ensure a perfect, logical flow to the questioning.
- Ask a minimum of 7 and a maximum of 15 questions. If you feel you have gathered enough deeply critical data to justify the 500-rupee premium report after 7 questions, you may stop. Otherwise, continue up to 15.
- Track the question count silently. Do not tell the user which question number they are on.
- End of Interview: Once you have asked 7 to 15 questions and gathered sufficient data to build a premium roadmap, output the exact phrase: {sentinel} and await the command to generate the report.
- CRITICAL: Provide exactly 3 to 4 short, highly clickable multiple-choice options for the user to tap in valid JSON format.
- LANGUAGE REQUIREMENT: You MUST generate the question and the options strictly in {language}.
"#,
        name = profile.name,
        age = profile.age,
        gender = profile.gender,
        language = profile.language,
        sentinel = ASSESSMENT_COMPLETE,
    )
}

/// Phase 1: user context enumerating the Q&A history in arrival order.
pub fn interview_user_context(history: &[QaItem]) -> String {
    let mut context = String::from("Q&A History so far:\n");
    if history.is_empty() {
        context.push_str(
            "No questions asked yet. This is Question 1. Ask about their current life status or immediate goal.\n",
        );
    } else {
        for item in history {
            context.push_str(&format!("Q: {}\nA: {}\n", item.question, item.answer));
        }
        context.push_str(&format!(
            "\nThis is Question {}. Based on the above, ask the NEXT logical question to dig deeper.",
            history.len() + 1
        ));
    }
    context
}

/// Phase 2: report-generation system instruction with the fixed HTML
/// structure, branding, and formatting bans.
pub fn report_system_prompt(profile: &SurveyRequest) -> String {
    format!(
        r#"ROLE:
You are an ELITE, highly experienced career counselor for Easyskill Career Academy. The user has paid 500 rupees for this consultation roadmap, so the final report MUST completely justify this premium price. It must be a highly customized, visually scannable, and actionable life roadmap that feels exclusive and expertly crafted.

The user profile: {name}, {age} years old, gender: {gender}, Preferred Language: {language}.

PHASE 2: THE FINAL PREMIUM REPORT GENERATION
When commanded to generate the report, you must use the exact structure below.

CRITICAL RULES FOR THE PREMIUM REPORT:
- DO NOT use generic advice, long introductory paragraphs, or motivational filler. Every word must hold high value.
- The roadmap must perfectly logically align with the answers they gave during the interview loop.
- Use highly scannable bullet points, short sentences, and bold text for key terms.
- Keep the tone elite, authoritative, professional, and highly actionable.
- Format the output as clean HTML (using <h1>, <h2>, <ul>, <li>, <strong>) suitable for injecting directly into a webpage's div.
- EXTREMELY IMPORTANT BAN ON FULL HTML: DO NOT generate a full HTML document. You MUST NOT include <!DOCTYPE html>, <html>, <head>, <style>, or <body> tags. ONLY output the internal structural tags (<h1>, <h2>, <p>, <ul>, <footer>).
- EXTREMELY IMPORTANT BAN ON MARKDOWN: DO NOT wrap the output in Markdown code blocks (e.g. absolutely no ```html at the start and no ``` at the end). Just output the raw HTML tags sequence directly as plain text. The system crashes if you use markdown code blocks.
- LANGUAGE REQUIREMENT: You MUST generate the report content strictly in {language}.

REPORT VISUAL THEME AND STYLING:
- Branding: The report should be headed with "EASYSKILL CAREER ACADEMY".
- Color Palette: Use the clean white, light gray, and distinct blue from the source image.
- Headings: Style all <h1>, <h2>, <h3> tags with the academy's primary blue color.
- Underline: Add a stylized blue underline element, similar to the one in the image under "IT Skills", below the main <h1> title.
- Fonts: Specify a clean, professional, sans-serif font throughout the HTML.
- Scannability: Use the colors and bullet points to make information pop, mimicking the clear sections and visual hierarchy of the provided image.
- Trust-Building Elements: Integrate specific academy achievements from the source image into the PDF footer for added credibility.
- Add a section in the footer, stylized with a blue banner or border, featuring the icons and specific stats from the bottom of the image:
  - An icon of a student with the text "25,500+ Happy Students".
  - An icon of an instructor with the text "50+ Industry Courses".
  - A map pin icon with the text "2+ Branches".
- Contact Info: Include the phone number from the source image (+91 908 154 5252) and a small call-to-action to "Contact us to kickstart your career!" in the footer area. Use the image's clean, modern styling for this.

REPORT STRUCTURE:

<h1>EASYSKILL CAREER ACADEMY</h1>
<div class="styled-underline"></div>

<h2>1. Executive Profile Snapshot</h2>
(Provide 3 to 4 sharp bullet points summarizing their core strengths, primary interests, and ideal work environment based strictly on their interview answers).

<h2>2. Top 3 Recommended Career Paths</h2>
(For each path, provide):
Role: [Specific Job Title]
Why it fits: [One concise sentence explaining the match based on their specific answers]
Market Outlook: [Brief note on industry demand]

<h2>3. The 30-Day Action Plan</h2>
(Provide exactly 3 immediate, concrete steps. Avoid generic advice like "network". Specify exact certifications, software tools, or specific types of portfolio projects they should start immediately, making them actionable checklists).

<h2>4. Skill Gap Analysis</h2>
(List 2 to 3 specific technical or soft skills they currently lack for their recommended paths, and recommend precise ways to acquire them, such as relevant online courses or practical projects).

<footer>
<div class="stats-banner">
    <div class="stat">👩‍🎓 25,500+ Happy Students</div>
    <div class="stat">👨‍🏫 50+ Industry Courses</div>
    <div class="stat">📍 2+ Branches</div>
</div>
<p style="text-align: center; margin-top: 20px; color: #1E3A8A; font-weight: bold;">Contact Us: +91 908 154 5252 | Learn more at easyskill.in</p>
</footer>
"#,
        name = profile.name,
        age = profile.age,
        gender = profile.gender,
        language = profile.language,
    )
}

/// Phase 2: user context concatenating the full history plus the generation
/// command.
pub fn report_user_context(history: &[QaItem]) -> String {
    let mut context = String::from("User's Q&A History:\n");
    for item in history {
        context.push_str(&format!("Q: {}\nA: {}\n", item.question, item.answer));
    }
    context.push_str("\nGenerate the final counseling report and course pitch.");
    context
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile() -> SurveyRequest {
        serde_json::from_str("{}").unwrap()
    }

    fn qa(question: &str, answer: &str) -> QaItem {
        QaItem {
            question: question.to_string(),
            answer: answer.to_string(),
        }
    }

    #[test]
    fn empty_history_yields_first_question_context() {
        assert_eq!(
            interview_user_context(&[]),
            "Q&A History so far:\nNo questions asked yet. This is Question 1. Ask about their current life status or immediate goal.\n"
        );
    }

    #[test]
    fn interview_context_replays_pairs_in_order() {
        let history = vec![qa("Where have you studied?", "B.Tech"), qa("Current salary?", "4 LPA")];
        let context = interview_user_context(&history);

        let first = context.find("Q: Where have you studied?\nA: B.Tech\n").unwrap();
        let second = context.find("Q: Current salary?\nA: 4 LPA\n").unwrap();
        assert!(first < second);
        assert!(context.ends_with(
            "\nThis is Question 3. Based on the above, ask the NEXT logical question to dig deeper."
        ));
    }

    #[test]
    fn interview_system_prompt_interpolates_profile_and_sentinel() {
        let mut profile = profile();
        profile.name = "Asha".to_string();
        profile.language = "Hindi".to_string();

        let prompt = interview_system_prompt(&profile);
        assert!(prompt.contains("Name: Asha, Age: 18, Gender: Other, Preferred Language: Hindi."));
        assert!(prompt.contains("output the exact phrase: ASSESSMENT_COMPLETE"));
        assert!(prompt.contains("Ask exactly ONE question at a time."));
        assert!(prompt.contains("strictly in Hindi."));
    }

    #[test]
    fn report_system_prompt_carries_structure_and_bans() {
        let prompt = report_system_prompt(&profile());

        assert!(prompt.contains("<h1>EASYSKILL CAREER ACADEMY</h1>"));
        assert!(prompt.contains("<h2>1. Executive Profile Snapshot</h2>"));
        assert!(prompt.contains("<h2>2. Top 3 Recommended Career Paths</h2>"));
        assert!(prompt.contains("<h2>3. The 30-Day Action Plan</h2>"));
        assert!(prompt.contains("<h2>4. Skill Gap Analysis</h2>"));
        assert!(prompt.contains("BAN ON FULL HTML"));
        assert!(prompt.contains("BAN ON MARKDOWN"));
        assert!(prompt.contains("strictly in English."));
    }

    #[test]
    fn report_context_concatenates_history_and_command() {
        let history = vec![qa("Q1", "A1"), qa("Q2", "A2")];
        let context = report_user_context(&history);

        assert!(context.starts_with("User's Q&A History:\nQ: Q1\nA: A1\nQ: Q2\nA: A2\n"));
        assert!(context.ends_with("\nGenerate the final counseling report and course pitch."));
    }
}
