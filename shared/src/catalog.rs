//! The fixed subject catalog: four weeks of six lessons each.

use crate::models::SubjectPair;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Subject {
    pub week: u32,
    pub number: u32,
    pub name: &'static str,
}

impl Subject {
    pub fn pair(&self) -> SubjectPair {
        SubjectPair {
            week: self.week,
            number: self.number,
        }
    }
}

const fn subject(week: u32, number: u32, name: &'static str) -> Subject {
    Subject { week, number, name }
}

pub const SUBJECTS: [Subject; 24] = [
    subject(1, 1, "Biology"),
    subject(1, 2, "Chemical Peels"),
    subject(1, 3, "High Frequency (HF)"),
    subject(1, 4, "Mircrodermabrasion (MDA)"),
    subject(1, 5, "Microneedling & Mesotherapy"),
    subject(1, 6, "BB Glow & Radio Frequency (RF)"),
    subject(2, 1, "MNRF"),
    subject(2, 2, "Faradic Treatment"),
    subject(2, 3, "Galvanic Treatment"),
    subject(2, 4, "ACNE & Hyper Pigmentation Consultation | Ultrasound"),
    subject(2, 5, "Dermaplanning & Cautery"),
    subject(2, 6, "Oxygeneo Facial & Hydra Facial"),
    subject(3, 1, "Diode LASER for hair Reduction"),
    subject(3, 2, "Q Switch & PICO LASER"),
    subject(3, 3, "Fractional CO2"),
    subject(3, 4, "IPL"),
    subject(3, 5, "HIFU"),
    subject(3, 6, "Revision of LASERS"),
    subject(4, 1, "Hair Anatomy & Diseases"),
    subject(4, 2, "HF | Ultrasound | RF"),
    subject(4, 3, "Dandruff & Hair Shaft Study"),
    subject(4, 4, "LAZER Helmet | Lowlight LAZER | Infrared"),
    subject(4, 5, "Microneedling | MNRF | Meso Injections"),
    subject(4, 6, "Hair Restoration Surgery"),
];

pub const UNKNOWN_SUBJECT: &str = "Unknown Subject";

pub fn lookup(pair: SubjectPair) -> Option<&'static Subject> {
    SUBJECTS
        .iter()
        .find(|s| s.week == pair.week && s.number == pair.number)
}

/// Display name for a pair, or "Unknown Subject" when it is not in the catalog
pub fn subject_name(pair: SubjectPair) -> &'static str {
    lookup(pair).map(|s| s.name).unwrap_or(UNKNOWN_SUBJECT)
}

/// Lessons of one week in slot order
pub fn subjects_for_week(week: u32) -> impl Iterator<Item = &'static Subject> {
    SUBJECTS.iter().filter(move |s| s.week == week)
}
