//! Prompt composer. Renders the system and user messages for a proposal.
//!
//! Pure string formatting: same request in, same prompts out.

use crate::domain::{ComposedPrompt, ProposalRequest};

/// Behavioral rules appended to every system prompt.
const INSTRUCTIONS: [&str; 5] = [
    "Hook the reader in the first sentence.",
    "Address the client's specific pain points found in the job description.",
    "Prove credibility using the user's skills.",
    "NO AI JARGON. Sound human.",
    "Call to action at the end.",
];

/// Build the system prompt and user prompt for `request`.
///
/// Job description and skills are embedded as entered, without trimming.
pub fn compose(request: &ProposalRequest) -> ComposedPrompt {
    ComposedPrompt {
        system: system_prompt(request),
        user: format!(
            "JOB: {}\n\nMY SKILLS: {}",
            request.job_description, request.skills
        ),
    }
}

fn system_prompt(request: &ProposalRequest) -> String {
    let mut prompt = format!(
        "You are a world-class expert copywriter. Write a freelance proposal.\n\
         TONE: {}.\n\
         LENGTH: {}.\n\n\
         INSTRUCTIONS:\n",
        request.tone, request.length
    );
    for line in INSTRUCTIONS {
        prompt.push_str("- ");
        prompt.push_str(line);
        prompt.push('\n');
    }
    prompt
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ResponseLength, Tone};

    #[test]
    fn test_system_prompt_embeds_every_tone_and_length() {
        for tone in Tone::ALL {
            for length in ResponseLength::ALL {
                let req = ProposalRequest::new("job", "skills", tone, length);
                let prompt = compose(&req);
                assert!(prompt.system.contains(tone.label()), "{}", tone);
                assert!(prompt.system.contains(length.label()), "{}", length);
                assert!(prompt.system.contains(&format!("TONE: {}.", tone)));
                assert!(prompt.system.contains(&format!("LENGTH: {}.", length)));
            }
        }
    }

    #[test]
    fn test_system_prompt_carries_all_instructions() {
        let req = ProposalRequest::new(
            "job",
            "skills",
            Tone::ProfessionalDirect,
            ResponseLength::ShortParagraph,
        );
        let system = compose(&req).system;
        for line in INSTRUCTIONS {
            assert!(system.contains(&format!("- {}", line)));
        }
    }

    #[test]
    fn test_compose_is_deterministic() {
        let req = ProposalRequest::new(
            "Build a Rust CLI",
            "10 years Rust",
            Tone::PersuasiveSalesy,
            ResponseLength::DetailedLetter,
        );
        assert_eq!(compose(&req), compose(&req));
        assert_eq!(compose(&req), compose(&req.clone()));
    }

    #[test]
    fn test_logo_scenario_user_prompt() {
        let req = ProposalRequest::new(
            "Need a logo designed",
            "5 years graphic design, Adobe Illustrator expert",
            Tone::CasualConfident,
            ResponseLength::TweetSized,
        );
        let prompt = compose(&req);
        assert!(prompt.system.contains("Casual & Confident"));
        assert!(prompt.system.contains("Tweet Sized"));
        assert_eq!(
            prompt.user,
            "JOB: Need a logo designed\n\nMY SKILLS: 5 years graphic design, Adobe Illustrator expert"
        );
    }

    #[test]
    fn test_user_prompt_keeps_whitespace() {
        let req = ProposalRequest::new(
            "  line one\nline two  ",
            "\tskills",
            Tone::CasualConfident,
            ResponseLength::TweetSized,
        );
        assert_eq!(
            compose(&req).user,
            "JOB:   line one\nline two  \n\nMY SKILLS: \tskills"
        );
    }
}
