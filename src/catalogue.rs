//! Fixed content catalogues: challenge phrases and welcome lines.
//!
//! Every session draws one challenge at start and redraws on reset.
//! The draws are uniform; the catalogues never change at runtime.

use rand::Rng;

/// The phrases a player is asked to say.
pub const CHALLENGES: &[&str] = &[
    "Can I please get a large iced latte with oat milk and zero attitude?",
    "I'm literally just a girl, please don't ask me to explain my credit card statement.",
    "Bhai, if the momos aren't spicy enough to make me see God, I don't want them.",
    "Trust me, I've been to Bandra once, I basically own a startup now.",
    "No cap, your fit is mid and your aura is practically in the negatives right now.",
    "Actually, I'm a digital nomad, so I work from wherever the Wi-Fi doesn't lag.",
    "Can we skip the small talk and just discuss why 2014 Tumblr aesthetic is back?",
    "I'm not saying I'm the main character, but the lighting today says otherwise.",
    "It's giving very much 'unpaid intern on their fifth cup of espresso' vibes.",
    "I requested the window seat specifically so I could romanticize my life in peace.",
];

/// Narrated before the mic opens.
pub const WELCOME_LINES: &[&str] = &[
    "oh look, another low-aura npc. press the button, loser.",
    "you actually think you have a chance? cute.",
    "same mid energy, different day. go ahead.",
    "i've seen bots with more charisma than you.",
    "don't choke on your own ego. hit the button.",
    "wow, the audacity to try to speak. record it, i dare you.",
    "hurry up and record, i'm getting bored.",
];

/// Draw a challenge phrase for a new session.
pub fn draw_challenge() -> &'static str {
    CHALLENGES[rand::thread_rng().gen_range(0..CHALLENGES.len())]
}

/// Draw a welcome line for the pre-recording narration.
pub fn draw_welcome() -> &'static str {
    WELCOME_LINES[rand::thread_rng().gen_range(0..WELCOME_LINES.len())]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drawn_challenge_is_from_catalogue_and_non_empty() {
        for _ in 0..100 {
            let phrase = draw_challenge();
            assert!(!phrase.is_empty());
            assert!(CHALLENGES.contains(&phrase));
        }
    }

    #[test]
    fn drawn_welcome_is_from_catalogue_and_non_empty() {
        for _ in 0..100 {
            let line = draw_welcome();
            assert!(!line.is_empty());
            assert!(WELCOME_LINES.contains(&line));
        }
    }

    #[test]
    fn catalogues_have_no_empty_entries() {
        assert!(CHALLENGES.iter().all(|c| !c.is_empty()));
        assert!(WELCOME_LINES.iter().all(|w| !w.is_empty()));
    }
}
