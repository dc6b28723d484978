//! Result presenter: a three-position cursor over one roast result.
//!
//! Cursor 0 shows the heritage breakdown as proportional meters,
//! cursor 1 the transcript and roast text, cursor 2 the composed
//! shareable card. Advancing past the last position signals a full
//! session reset.

use crate::relay::RoastResult;

/// Proportional meter for one heritage entry
#[derive(Debug, Clone, PartialEq)]
pub struct Meter {
    pub label: String,
    pub percent: f64,
}

impl Meter {
    /// Text bar, `width` cells, filled proportionally
    pub fn render(&self, width: usize) -> String {
        let filled = ((self.percent / 100.0) * width as f64)
            .round()
            .clamp(0.0, width as f64) as usize;
        format!(
            "{:<12} {:>3.0}% [{}{}]",
            self.label,
            self.percent,
            "#".repeat(filled),
            "-".repeat(width - filled)
        )
    }
}

/// The composed shareable visual, assembled from the result fields
#[derive(Debug, Clone, PartialEq)]
pub struct ShareCard {
    pub headline: String,
    /// `heritage[0].country`
    pub primary_origin: String,
    pub celebrity: String,
    pub badge: String,
}

impl ShareCard {
    pub fn compose(result: &RoastResult) -> Self {
        Self {
            headline: "ROASTED.".to_string(),
            primary_origin: result
                .heritage
                .first()
                .map(|h| h.country.clone())
                .unwrap_or_default(),
            celebrity: result.celebrity.clone(),
            badge: result.badge.clone(),
        }
    }

    /// Text export of the card
    pub fn render(&self) -> String {
        format!(
            "{}\nPrimary Origin: {}\n\"{}\"\nStatus: {}",
            self.headline, self.primary_origin, self.celebrity, self.badge
        )
    }
}

/// What the active card displays
#[derive(Debug, Clone, PartialEq)]
pub enum ResultCard {
    HeritageMeters(Vec<Meter>),
    RoastText { transcription: String, roast: String },
    Share(ShareCard),
}

/// Outcome of advancing the cursor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    /// Moved to the next card
    Advanced,
    /// Already past the last card; the session should reset
    Exhausted,
}

/// Owns the roast result for display. Nothing mutates the result.
pub struct ResultPresenter {
    result: RoastResult,
    cursor: usize,
    roast_narrated: bool,
}

impl ResultPresenter {
    pub fn new(result: RoastResult) -> Self {
        Self {
            result,
            cursor: 0,
            roast_narrated: false,
        }
    }

    pub fn result(&self) -> &RoastResult {
        &self.result
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn current_card(&self) -> ResultCard {
        match self.cursor {
            0 => ResultCard::HeritageMeters(
                self.result
                    .heritage
                    .iter()
                    .map(|h| Meter {
                        label: h.country.clone(),
                        percent: h.percentage,
                    })
                    .collect(),
            ),
            1 => ResultCard::RoastText {
                transcription: self.result.transcription.clone(),
                roast: self.result.roast.clone(),
            },
            _ => ResultCard::Share(ShareCard::compose(&self.result)),
        }
    }

    pub fn advance(&mut self) -> Advance {
        if self.cursor < 2 {
            self.cursor += 1;
            Advance::Advanced
        } else {
            Advance::Exhausted
        }
    }

    /// Whether the roast card's narration side effect already fired
    pub fn roast_narrated(&self) -> bool {
        self.roast_narrated
    }

    pub fn mark_roast_narrated(&mut self) {
        self.roast_narrated = true;
    }
}
