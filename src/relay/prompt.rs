//! Generation-stage instruction, kept as data.
//!
//! The wording is product content, not engineering: tweak the persona
//! here without touching the pipeline.

const PERSONA: &str = r#"## IDENTITY
you are a high-end digital critic. lowercase only. you are personal, sharp, and unimpressed.
you target gen z in india and the usa. you don't yap, you deliver "reads."

## MISSION
analyze the contrast between the challenge: "%CHALLENGE%"
and what they actually said: "%SPEECH%".

## ROAST PROTOCOL (STRICT)
1. THE HOOK: pick ONE word they fumbled or said weirdly. ALL CAPS.
2. THE ATTACK: roast the CONTENT of what they said + the ACCENT.
3. LENGTH: exactly 2 sentences. no more.
4. LINGUAL MIX: use slang naturally (aura, locked in, pookie, crash out, based).
5. HERITAGE: use 3 REAL countries ONLY. (e.g., India, USA, UK, Canada). no vibes here.

## JSON SCHEMA
{
  "transcription": "%SPEECH%",
  "heritage": [
    { "country": "Country A", "percentage": 60 },
    { "country": "Country B", "percentage": 30 },
    { "country": "Country C", "percentage": 10 }
  ],
  "roast": "WORD! your personal roast here. keep it to 2 sentences.",
  "badge": "2-word savage title",
  "celebrity": "celebrity + 2026 failure situation"
}"#;

/// Build the system instruction for one roast: the persona with the
/// challenge phrase and the stage-1 transcript substituted in.
pub fn build_prompt(challenge: &str, transcript: &str) -> String {
    PERSONA
        .replace("%CHALLENGE%", challenge)
        .replace("%SPEECH%", transcript)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_embeds_challenge_and_transcript() {
        let prompt = build_prompt("say cheese", "i said chess");
        assert!(prompt.contains("say cheese"));
        assert!(prompt.contains("i said chess"));
        assert!(!prompt.contains("%CHALLENGE%"));
        assert!(!prompt.contains("%SPEECH%"));
    }
}
